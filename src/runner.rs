//! src/runner.rs
//!
//! Meerdere onafhankelijke runs per instantie: run `i` krijgt een eigen
//! `ChaCha8Rng` met seed `p.seed + i`, zodat elke run reproduceerbaar is.
use crate::{
    aco::solve_aco,
    error::Result,
    grasp::solve_grasp_ts,
    instance::Instance,
    params::Params,
    trace::RunOutcome,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Welke metaheuristiek een run gebruikt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Solver {
    GraspTs,
    AntColony,
}

/// Voert `p.runs` runs uit en geeft per run het resultaat terug.
/// Een fout breekt de reeks af; eerdere runs worden niet beïnvloed.
pub fn solve_runs<'i>(instance: &'i Instance, solver: Solver, p: &Params) -> Result<Vec<RunOutcome<'i>>> {
    p.validate()?;
    let mut outcomes = Vec::with_capacity(p.runs);

    for i in 0..p.runs {
        let mut rng = ChaCha8Rng::seed_from_u64(p.seed.wrapping_add(i as u64));
        let outcome = match solver {
            Solver::GraspTs => solve_grasp_ts(instance, p, &mut rng)?,
            Solver::AntColony => solve_aco(instance, p, &mut rng)?,
        };
        log::debug!(
            "run {}/{} op '{}': beste waarde {}",
            i + 1,
            p.runs,
            instance.name(),
            outcome.best.value()
        );
        outcomes.push(outcome);
    }
    Ok(outcomes)
}
