//! src/aco.rs
//!
//! Mierenkolonie voor kMIS. Per generatie start er één mier op elk element;
//! elke mier breidt haar pad gretig uit op basis van feromoon en de overlap met
//! haar huidige doorsnede. Na de generatie worden de feromonen bijgewerkt uit
//! de eindoplossingen van alle mieren. De buitenste lus stopt op tijd.

use crate::{
    error::Result,
    instance::Instance,
    params::{AntSelection, Params},
    pheromone::PheromoneMatrix,
    solution::Solution,
    trace::{Incumbent, RunOutcome},
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[cfg(feature = "parallel_aco")]
use rayon::prelude::*;

/// Vult `scores[j]` voor elke niet-bezochte `j` met
/// `trail[j]^α · μ[j]^β`, met `μ[j] = |F(j) ∩ ∩S| / |∩S|`, en normaliseert ze
/// tot som 1. Bezochte elementen krijgen 0.
///
/// Is `|∩S| = 0`, dan is elke `μ[j] = 0`. Is de som 0 of niet eindig, dan
/// blijven de ruwe scores staan; de selectie valt dan terug op de eerste
/// niet-bezochte index.
///
/// Geeft de som van de ruwe scores terug.
pub fn score_candidates(sol: &Solution<'_>, trail: &[f64], alpha: f64, beta: f64, scores: &mut [f64]) -> f64 {
    let current = sol.value();
    let mut sum = 0.0;

    for (j, score) in scores.iter_mut().enumerate() {
        if sol.contains(j) {
            *score = 0.0;
            continue;
        }
        let mu = if current == 0 {
            0.0
        } else {
            sol.gain_with(j) as f64 / current as f64
        };
        *score = trail[j].powf(alpha) * mu.powf(beta);
        sum += *score;
    }

    if sum > 0.0 && sum.is_finite() {
        for (j, score) in scores.iter_mut().enumerate() {
            if !sol.contains(j) {
                *score /= sum;
            }
        }
    }
    sum
}

/// Arg-max over de niet-bezochte elementen in oplopende indexvolgorde.
/// Vergelijkt strikt (`>`), dus de eerste index wint een gelijke stand.
pub fn select_arg_max(sol: &Solution<'_>, scores: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (j, &s) in scores.iter().enumerate() {
        if sol.contains(j) {
            continue;
        }
        if best.map_or(true, |(_, b)| s > b) {
            best = Some((j, s));
        }
    }
    best.map(|(j, _)| j)
}

/// Gewogen trekking over de genormaliseerde scores (cumulatieve som).
fn select_roulette<R: Rng + ?Sized>(sol: &Solution<'_>, scores: &[f64], sum: f64, rng: &mut R) -> Option<usize> {
    if !(sum > 0.0 && sum.is_finite()) {
        return select_arg_max(sol, scores);
    }
    let x: f64 = rng.gen();
    let mut acc = 0.0;
    let mut last = None;
    for (j, &s) in scores.iter().enumerate() {
        if sol.contains(j) {
            continue;
        }
        acc += s;
        last = Some(j);
        if acc >= x {
            return Some(j);
        }
    }
    // Afrondingsfouten: de som kan net onder x blijven.
    last
}

/// Bouwt het pad van één mier vanaf `start` tot `k` leden.
pub fn build_ant<'i, R>(
    instance: &'i Instance,
    pheromone: &PheromoneMatrix,
    start: usize,
    p: &Params,
    rng: &mut R,
) -> Result<Solution<'i>>
where
    R: Rng + ?Sized,
{
    let mut sol = Solution::new(instance);
    sol.add_element(start)?;
    let mut last = start;
    let mut scores = vec![0.0f64; instance.n()];

    while sol.size() < instance.k() {
        let sum = score_candidates(&sol, pheromone.row(last), p.aco_alpha, p.aco_beta, &mut scores);
        let next = match p.selection {
            AntSelection::ArgMax => select_arg_max(&sol, &scores),
            AntSelection::Roulette => select_roulette(&sol, &scores, sum, rng),
        };
        // `k ≤ n` garandeert een niet-bezocht element.
        let Some(next) = next else { break };
        sol.add_element(next)?;
        last = next;
    }
    Ok(sol)
}

/// Eén generatie: een mier per element, in mier-volgorde teruggegeven.
/// Elke mier krijgt een eigen RNG afgeleid van `generation_seed`, zodat
/// parallelle en sequentiële uitvoering dezelfde paden opleveren.
fn run_generation<'i>(
    instance: &'i Instance,
    pheromone: &PheromoneMatrix,
    p: &Params,
    generation_seed: u64,
) -> Result<Vec<Solution<'i>>> {
    let ant = |u: usize| {
        let mut rng = ChaCha8Rng::seed_from_u64(generation_seed.wrapping_add(u as u64));
        build_ant(instance, pheromone, u, p, &mut rng)
    };

    #[cfg(feature = "parallel_aco")]
    {
        (0..instance.n()).into_par_iter().map(ant).collect()
    }

    #[cfg(not(feature = "parallel_aco"))]
    {
        (0..instance.n()).map(ant).collect()
    }
}

/// Voert één ACO-run uit tot het tijdsbudget (of de optionele
/// iteratiegrens) op is. Er draait altijd minstens één generatie.
pub fn solve_aco<'i, R>(instance: &'i Instance, p: &Params, rng: &mut R) -> Result<RunOutcome<'i>>
where
    R: Rng + ?Sized,
{
    p.validate()?;
    log::debug!(
        "ACO start op '{}' (n={}, k={}, budget={} ms)",
        instance.name(),
        instance.n(),
        instance.k(),
        p.time_budget_ms
    );

    let mut pheromone = PheromoneMatrix::new(instance.n(), p.tau0);
    let mut incumbent = Incumbent::start();
    let mut iterations = 0usize;

    loop {
        let ants = run_generation(instance, &pheromone, p, rng.gen())?;

        // Beste mier van deze generatie; de eerste wint een gelijke stand.
        let mut iteration_best: Option<&Solution<'i>> = None;
        for ant in &ants {
            if iteration_best.map_or(true, |b| ant.is_better_than(b)) {
                iteration_best = Some(ant);
            }
        }
        let best_card = match iteration_best {
            Some(best) => {
                incumbent.offer(best);
                best.value()
            }
            None => 0,
        };

        pheromone.update(ants.iter().map(|a| (a.members(), a.value())), best_card, p.rho);

        iterations += 1;
        if incumbent.elapsed_ms() >= p.time_budget_ms
            || (p.aco_iter_max > 0 && iterations >= p.aco_iter_max)
        {
            break;
        }
    }

    let outcome = incumbent.finish()?;
    log::debug!(
        "ACO klaar op '{}' na {} generaties: beste waarde {}",
        instance.name(),
        iterations,
        outcome.best.value()
    );
    Ok(outcome)
}
