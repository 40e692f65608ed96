// tests/grasp_tests.rs
//! Tests voor de CRG-constructie, de tabu-scan en de volledige GRASP+TS-run.

extern crate kmis;
use kmis::construct::{greedy_random_k, rcl_size};
use kmis::instance::Instance;
use kmis::neighbour::{scan_neighbourhood, tabu_search, Scan, TabuSearch};
use kmis::params::Params;
use kmis::solution::Solution;
use kmis::tabu::TabuMemory;
use kmis::trace::Incumbent;
use kmis::{solve_grasp_ts, KmisError};
use rand::{rngs::StdRng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// F0={1,2,3}, F1={1,2}, F2={1,3}, F3={2,3}.
fn small_instance(k: usize) -> Instance {
    let sets = vec![vec![1, 2, 3], vec![1, 2], vec![1, 3], vec![2, 3]];
    Instance::from_feature_sets("klein", 4, &sets, k).unwrap()
}

fn patterned_instance(n: usize, universe: usize, k: usize) -> Instance {
    let sets: Vec<Vec<usize>> = (0..n)
        .map(|e| (0..universe).filter(|f| (f * (e + 1) + e) % 3 != 0).collect())
        .collect();
    Instance::from_feature_sets("patroon", universe, &sets, k).unwrap()
}

/// Geen twee elementen delen een feature: elke oplossing met k ≥ 2 heeft waarde 0.
fn disjoint_instance(k: usize) -> Instance {
    let sets = vec![vec![0], vec![1], vec![2]];
    Instance::from_feature_sets("disjunct", 3, &sets, k).unwrap()
}

fn quick_params(iter_max: usize) -> Params {
    let mut p = Params::default();
    p.grasp(iter_max, 0.5, 0.5, 5);
    p
}

#[test]
fn test_rcl_size_bounds() {
    assert_eq!(rcl_size(0.5, 3), 2);
    assert_eq!(rcl_size(0.5, 4), 2);
    assert_eq!(rcl_size(0.01, 10), 1);
    assert_eq!(rcl_size(1.0, 7), 7);
    assert_eq!(rcl_size(0.5, 1), 1);
}

#[test]
fn test_construction_has_k_distinct_members() {
    let instance = patterned_instance(12, 90, 5);
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let sol = greedy_random_k(&instance, 1.0, &mut rng).unwrap();
        assert_eq!(sol.size(), 5);

        let mut members = sol.members().to_vec();
        members.sort_unstable();
        members.dedup();
        assert_eq!(members.len(), 5);
        assert_eq!(sol.value(), instance.intersection_size(sol.members()));
    }
}

#[test]
fn test_construction_with_full_rcl_is_greedy() {
    // Met α = 1 is de RCL de hele CL: na element 1 = {1,2} is element 0
    // de enige kandidaat die beide features behoudt.
    let instance = small_instance(2);
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let sol = greedy_random_k(&instance, 1.0, &mut rng).unwrap();
        assert_eq!(sol.value(), 2);
    }
}

#[test]
fn test_k_larger_than_ground_set_fails_fast() {
    let sets = vec![vec![0], vec![0, 1]];
    let err = Instance::from_feature_sets("te-klein", 2, &sets, 3).unwrap_err();
    assert!(matches!(err, KmisError::EmptyCandidateList { k: 3, n: 2 }));
}

#[test]
fn test_scan_short_circuits_on_first_improvement() {
    let instance = small_instance(2);
    let sol = Solution::from_members(&instance, &[1, 2]).unwrap();
    let tabu = TabuMemory::new(instance.n(), 0.5);
    let scan = scan_neighbourhood(&sol, &tabu, sol.value());
    assert_eq!(scan, Scan::Improving { remove: 1, insert: 0, value: 2 });
}

#[test]
fn test_scan_falls_back_to_best_non_improving() {
    let instance = small_instance(2);
    let sol = Solution::from_members(&instance, &[0, 1]).unwrap();
    let tabu = TabuMemory::new(instance.n(), 0.5);
    // ei=0 geeft hoogstens 1, ei=1 geeft 2 met ej=2 als eerste maximum.
    let scan = scan_neighbourhood(&sol, &tabu, sol.value());
    assert_eq!(scan, Scan::BestNonImproving { remove: 1, insert: 2, value: 2 });
}

#[test]
fn test_scan_with_all_sources_tabu_is_degenerate() {
    let instance = small_instance(2);
    let sol = Solution::from_members(&instance, &[1, 2]).unwrap();
    let mut tabu = TabuMemory::new(instance.n(), 10.0);
    tabu.mark(1);
    tabu.mark(2);
    assert_eq!(scan_neighbourhood(&sol, &tabu, sol.value()), Scan::Degenerate);
}

#[test]
fn test_scan_with_full_solution_is_degenerate() {
    let instance = small_instance(4);
    let sol = Solution::from_members(&instance, &[0, 1, 2, 3]).unwrap();
    let tabu = TabuMemory::new(instance.n(), 0.5);
    assert_eq!(scan_neighbourhood(&sol, &tabu, 0), Scan::Degenerate);
}

#[test]
fn test_tabu_search_reaches_optimum_and_reports_it() {
    let instance = small_instance(2);
    let start = Solution::from_members(&instance, &[1, 2]).unwrap();
    let mut incumbent = Incumbent::start();
    incumbent.offer(&start);

    let best = tabu_search(start, 0.5, 5, &mut incumbent).unwrap();
    assert_eq!(best.value(), 2);
    assert_eq!(incumbent.best_value(), Some(2));

    let outcome = incumbent.finish().unwrap();
    assert_eq!(outcome.trace.len(), 2);
    assert_eq!(outcome.trace.entries()[0].members, vec![1, 2]);
}

#[test]
fn test_tabu_search_with_zero_gamma_returns_start() {
    let instance = small_instance(2);
    let start = Solution::from_members(&instance, &[1, 2]).unwrap();
    let mut incumbent = Incumbent::start();
    let best = tabu_search(start, 0.5, 0, &mut incumbent).unwrap();
    assert_eq!(best.members(), &[1, 2]);
    assert_eq!(incumbent.best_value(), None);
}

#[test]
fn test_tabu_step_takes_best_non_improving_swap() {
    let instance = small_instance(2);
    let start = Solution::from_members(&instance, &[0, 1]).unwrap();
    let mut incumbent = Incumbent::start();
    let mut search = TabuSearch::new(start, 0.5);

    let scan = search.step(&mut incumbent).unwrap();
    assert_eq!(scan, Scan::BestNonImproving { remove: 1, insert: 2, value: 2 });

    // De swap is uitgevoerd, ej is taboe en de stagnatie loopt op.
    assert_eq!(search.current().members(), &[0, 2]);
    assert_eq!(search.current().value(), 2);
    assert!(search.tabu().is_tabu(2, 2));
    assert!(!search.tabu().is_tabu(1, 2));
    assert_eq!(search.stagnation(), 1);

    // Geen verbetering: de beste blijft de start en er is niets aangeboden.
    assert_eq!(search.best().members(), &[0, 1]);
    assert_eq!(incumbent.best_value(), None);
}

#[test]
fn test_tabu_step_improvement_resets_stagnation() {
    let instance = small_instance(2);
    let start = Solution::from_members(&instance, &[1, 2]).unwrap();
    let mut incumbent = Incumbent::start();
    let mut search = TabuSearch::new(start, 0.5);

    assert_eq!(
        search.step(&mut incumbent).unwrap(),
        Scan::Improving { remove: 1, insert: 0, value: 2 }
    );
    assert_eq!(search.stagnation(), 0);
    assert_eq!(search.best().members(), &[2, 0]);
    assert_eq!(incumbent.best_value(), Some(2));
}

#[test]
fn test_grasp_finds_optimum_on_small_instance() {
    let instance = small_instance(2);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let outcome = solve_grasp_ts(&instance, &quick_params(20), &mut rng).unwrap();

    assert_eq!(outcome.best.value(), 2);
    let last = outcome.trace.last().unwrap();
    assert_eq!(instance.intersection_size(&last.members), 2);
}

#[test]
fn test_grasp_trace_is_strictly_improving() {
    let instance = patterned_instance(15, 200, 4);
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let outcome = solve_grasp_ts(&instance, &quick_params(30), &mut rng).unwrap();

    let values: Vec<usize> = outcome
        .trace
        .entries()
        .iter()
        .map(|e| instance.intersection_size(&e.members))
        .collect();
    assert!(!values.is_empty());
    assert!(values.windows(2).all(|w| w[0] < w[1]));
    assert!(outcome.trace.entries().windows(2).all(|w| w[0].elapsed_ms <= w[1].elapsed_ms));
    assert_eq!(*values.last().unwrap(), outcome.best.value());
}

#[test]
fn test_grasp_with_k_equal_to_n_takes_everything() {
    let sets = vec![vec![0, 1, 2], vec![0, 1], vec![0, 1, 3]];
    let instance = Instance::from_feature_sets("alles", 4, &sets, 3).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let outcome = solve_grasp_ts(&instance, &quick_params(3), &mut rng).unwrap();

    assert_eq!(outcome.best.value(), 2);
    assert_eq!(outcome.best.intersection().unwrap().iter_ones().collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(outcome.trace.len(), 1);
}

#[test]
fn test_grasp_rejects_invalid_params() {
    let instance = small_instance(2);
    let mut p = quick_params(1);
    p.alpha_rg = 0.0;
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let err = solve_grasp_ts(&instance, &p, &mut rng).unwrap_err();
    assert!(matches!(err, KmisError::InvalidParams { .. }));
}

#[test]
fn test_grasp_rejects_zero_iterations() {
    let instance = small_instance(2);
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let err = solve_grasp_ts(&instance, &quick_params(0), &mut rng).unwrap_err();
    assert!(matches!(err, KmisError::InvalidParams { .. }));
}

#[test]
fn test_grasp_with_disjoint_features_has_empty_trace() {
    let instance = disjoint_instance(2);
    let mut rng = ChaCha8Rng::seed_from_u64(4);
    let outcome = solve_grasp_ts(&instance, &quick_params(5), &mut rng).unwrap();

    // Waarde 0 is nooit een verbetering, maar er is wel een beste oplossing.
    assert!(outcome.trace.is_empty());
    assert_eq!(outcome.best.value(), 0);
    assert_eq!(outcome.best.size(), 2);
}

#[test]
fn test_offer_with_zero_value_keeps_fallback_only() {
    let instance = disjoint_instance(2);
    let zero = Solution::from_members(&instance, &[0, 1]).unwrap();
    let mut incumbent = Incumbent::start();

    assert!(!incumbent.offer(&zero));
    assert_eq!(incumbent.best_value(), Some(0));

    let outcome = incumbent.finish().unwrap();
    assert!(outcome.trace.is_empty());
    assert_eq!(outcome.best.members(), &[0, 1]);
}
