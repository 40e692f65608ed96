//! src/grasp.rs
//!
//! GRASP met Tabu Search als verbeteringsfase: `iter_max` keer construeren en
//! verbeteren, met één globale beste oplossing die alleen bij een strikte
//! verbetering wordt overschreven.
use crate::{
    construct::greedy_random_k,
    error::Result,
    instance::Instance,
    neighbour::tabu_search,
    params::Params,
    trace::{Incumbent, RunOutcome},
};
use rand::Rng;

/// Voert één GRASP+TS-run uit en geeft de beste oplossing en het
/// convergentiespoor terug.
pub fn solve_grasp_ts<'i, R>(instance: &'i Instance, p: &Params, rng: &mut R) -> Result<RunOutcome<'i>>
where
    R: Rng + ?Sized,
{
    p.validate()?;
    log::debug!(
        "GRASP+TS start op '{}' (n={}, k={}, iter_max={})",
        instance.name(),
        instance.n(),
        instance.k(),
        p.iter_max
    );

    let mut incumbent = Incumbent::start();

    for _ in 0..p.iter_max {
        // 1. CONSTRUCTIE
        let constructed = greedy_random_k(instance, p.alpha_rg, rng)?;
        incumbent.offer(&constructed);

        // 2. VERBETERING
        let improved = tabu_search(constructed, p.tenure_factor, p.gamma, &mut incumbent)?;

        // 3. UPDATE GLOBALE BESTE OPLOSSING
        incumbent.offer(&improved);
    }

    let outcome = incumbent.finish()?;
    log::debug!(
        "GRASP+TS klaar op '{}': beste waarde {} ({} verbeteringen)",
        instance.name(),
        outcome.best.value(),
        outcome.trace.len()
    );
    Ok(outcome)
}
