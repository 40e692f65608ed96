//! src/construct.rs
//!
//! Constructive Random-Greedy (CRG): bouwt een oplossing van grootte `k` door
//! telkens uit een willekeurige deellijst (RCL) van de kandidaten de meest
//! gretige te kiezen.
use crate::error::{KmisError, Result};
use crate::{instance::Instance, solution::Solution};
use rand::seq::SliceRandom;
use rand::Rng;

/// Grootte van de RCL voor een kandidatenlijst van lengte `cl_len`.
#[inline]
pub fn rcl_size(alpha_rg: f64, cl_len: usize) -> usize {
    ((alpha_rg * cl_len as f64).round() as usize).clamp(1, cl_len.max(1))
}

/// Creëert een oplossing met precies `instance.k()` leden.
/// 1. Kies een uniform willekeurig startelement.
/// 2. Trek zolang `|S| < k` een RCL van `max(1, round(α·|CL|))` kandidaten
///    zonder teruglegging uit CL.
/// 3. Voeg de eerste kandidaat met de grootste `|∩S ∩ F(c)|` toe.
///
/// Er wordt niet teruggekrabbeld; de waarde mag 0 worden.
pub fn greedy_random_k<'i, R>(instance: &'i Instance, alpha_rg: f64, rng: &mut R) -> Result<Solution<'i>>
where
    R: Rng + ?Sized,
{
    let n = instance.n();
    let k = instance.k();
    if k == 0 || k > n {
        return Err(KmisError::EmptyCandidateList { k, n });
    }

    let mut sol = Solution::new(instance);

    // 1. Willekeurige startknoop.
    let seed = rng.gen_range(0..n);
    sol.add_element(seed)?;

    let mut cl: Vec<usize> = (0..n).filter(|&e| e != seed).collect();

    // 2. Vul aan tot grootte k.
    while sol.size() < k {
        if cl.is_empty() {
            return Err(KmisError::EmptyCandidateList { k, n });
        }
        let amount = rcl_size(alpha_rg, cl.len());

        let mut chosen: Option<(usize, usize)> = None;
        for &c in cl.choose_multiple(rng, amount) {
            let g = sol.gain_with(c);
            // Strikt groter: de eerste in RCL-volgorde wint een gelijke stand.
            if chosen.map_or(true, |(_, best_g)| g > best_g) {
                chosen = Some((c, g));
            }
        }

        let (c, _) = chosen.ok_or(KmisError::EmptyCandidateList { k, n })?;
        sol.add_element(c)?;
        cl.retain(|&e| e != c);
    }

    Ok(sol)
}
