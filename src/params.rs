//! src/params.rs
//!
//! Bundelt alle afstembare parameters voor de GRASP+TS- en ACO-oplossers.
//! De standaardwaarden zijn de empirisch gekozen waarden uit de benchmark.

use crate::error::{KmisError, Result};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Hoe een mier het volgende element kiest.
#[cfg_attr(feature = "python", pyclass(eq, eq_int))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AntSelection {
    /// Deterministisch: hoogste score, eerste index bij gelijke stand.
    #[default]
    ArgMax,
    /// Gewogen trekking volgens de genormaliseerde scores.
    Roulette,
}

/// Alle afstembare besturingselementen voor beide oplossers.
#[cfg_attr(feature = "python", pyclass)]
#[derive(Clone, Debug)]
pub struct Params {
    /* ─── GRASP ─────────────────────────────────────────────────── */
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub iter_max: usize, // aantal construct+improve iteraties (Δ)
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub alpha_rg: f64, // fractie van CL die in de RCL komt, 0 < α ≤ 1

    /* ─── Tabu Search ───────────────────────────────────────────── */
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub tenure_factor: f64, // τ: tabu-duur = floor(τ·|S|)
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub gamma: usize, // iteraties zonder verbetering voor stop

    /* ─── Ant Colony ────────────────────────────────────────────── */
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub aco_alpha: f64,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub aco_beta: f64,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub tau0: f64,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub rho: f64,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub time_budget_ms: u64,
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub aco_iter_max: usize, // 0 = alleen het tijdsbudget telt
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub selection: AntSelection,

    /* ─── Runs ──────────────────────────────────────────────────── */
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub runs: usize, // aantal onafhankelijke runs per instantie
    #[cfg_attr(feature = "python", pyo3(get, set))]
    pub seed: u64, // run i gebruikt seed + i
}

impl Default for Params {
    fn default() -> Self {
        Params {
            iter_max: 1_000,
            alpha_rg: 0.50,
            tenure_factor: 0.5,
            gamma: 5,
            aco_alpha: 0.5,
            aco_beta: 2.0,
            tau0: 1.0,
            rho: 0.7,
            time_budget_ms: 40_000,
            aco_iter_max: 0,
            selection: AntSelection::ArgMax,
            runs: 1,
            seed: 42,
        }
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl Params {
    /// Standaardwaarden; pas daarna losse attributen aan vanuit Python.
    #[new]
    fn py_new() -> Self {
        Params::default()
    }

    // Methode om een kopie te maken, blootgesteld aan Python
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

impl Params {
    /// Stelt de GRASP- en tabu-parameters in.
    pub fn grasp(&mut self, iter_max: usize, alpha_rg: f64, tenure_factor: f64, gamma: usize) -> &mut Self {
        self.iter_max = iter_max;
        self.alpha_rg = alpha_rg;
        self.tenure_factor = tenure_factor;
        self.gamma = gamma;
        self
    }

    /// Stelt de mierenkolonie-parameters in.
    pub fn colony(&mut self, alpha: f64, beta: f64, tau0: f64, rho: f64) -> &mut Self {
        self.aco_alpha = alpha;
        self.aco_beta = beta;
        self.tau0 = tau0;
        self.rho = rho;
        self
    }

    /// Begrenst een ACO-run in tijd en (optioneel) in iteraties.
    pub fn budget(&mut self, time_budget_ms: u64, aco_iter_max: usize) -> &mut Self {
        self.time_budget_ms = time_budget_ms;
        self.aco_iter_max = aco_iter_max;
        self
    }

    /// Controleert de bereiken voordat een run start.
    pub fn validate(&self) -> Result<()> {
        if self.iter_max == 0 {
            return Err(KmisError::invalid_params("iter_max moet minstens 1 zijn"));
        }
        if self.runs == 0 {
            return Err(KmisError::invalid_params("runs moet minstens 1 zijn"));
        }
        if !(self.alpha_rg > 0.0 && self.alpha_rg <= 1.0) {
            return Err(KmisError::invalid_params(format!("alpha_rg={} valt buiten (0, 1]", self.alpha_rg)));
        }
        if !(self.tenure_factor >= 0.0) {
            return Err(KmisError::invalid_params(format!("tenure_factor={} is negatief", self.tenure_factor)));
        }
        if !(0.0..=1.0).contains(&self.rho) {
            return Err(KmisError::invalid_params(format!("rho={} valt buiten [0, 1]", self.rho)));
        }
        if !(self.tau0 > 0.0) {
            return Err(KmisError::invalid_params(format!("tau0={} moet positief zijn", self.tau0)));
        }
        if !(self.aco_alpha >= 0.0 && self.aco_alpha.is_finite()) {
            return Err(KmisError::invalid_params(format!("aco_alpha={} moet eindig en >= 0 zijn", self.aco_alpha)));
        }
        // Een negatieve β maakt 0^β oneindig: kandidaten zonder overlap zouden winnen.
        if !(self.aco_beta >= 0.0 && self.aco_beta.is_finite()) {
            return Err(KmisError::invalid_params(format!("aco_beta={} moet eindig en >= 0 zijn", self.aco_beta)));
        }
        Ok(())
    }
}
