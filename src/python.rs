//! src/python.rs
//!
//! Python-bindingen (`_native`) voor de experiment-driver. Elke oplosser geeft
//! per run het convergentiespoor terug als lijst van
//! `(leden, waarde, verstreken_ms)`.

use crate::{
    error::KmisError,
    instance::Instance,
    params::{AntSelection, Params},
    runner::{solve_runs, Solver},
    trace::RunOutcome,
};
use pyo3::exceptions::{PyIOError, PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use std::fs::File;
use std::path::Path;

type PyTrace = Vec<(Vec<usize>, usize, u64)>;

impl From<KmisError> for PyErr {
    fn from(err: KmisError) -> PyErr {
        match err {
            KmisError::Io(e) => PyIOError::new_err(e.to_string()),
            KmisError::InvalidState { .. } => PyRuntimeError::new_err(err.to_string()),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

fn load_instance(instance_path: &str, k: Option<usize>) -> Result<Instance, KmisError> {
    let file = File::open(instance_path)?;
    let name = Path::new(instance_path)
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| instance_path.to_owned());
    Instance::parse(name, file, k)
}

fn to_py_traces(instance: &Instance, outcomes: &[RunOutcome<'_>]) -> Vec<PyTrace> {
    outcomes
        .iter()
        .map(|outcome| {
            outcome
                .trace
                .entries()
                .iter()
                .map(|e| (e.members.clone(), instance.intersection_size(&e.members), e.elapsed_ms))
                .collect()
        })
        .collect()
}

fn run_py(instance_path: &str, k: Option<usize>, solver: Solver, params: &Params) -> PyResult<Vec<PyTrace>> {
    let instance = load_instance(instance_path, k)?;
    let outcomes = solve_runs(&instance, solver, params)?;
    Ok(to_py_traces(&instance, &outcomes))
}

/// Python-binding voor GRASP met Tabu Search; één spoor per run.
#[pyfunction]
#[pyo3(signature = (instance_path, params, k = None))]
fn solve_grasp_ts_py(instance_path: String, params: Params, k: Option<usize>) -> PyResult<Vec<PyTrace>> {
    run_py(&instance_path, k, Solver::GraspTs, &params)
}

/// Python-binding voor de mierenkolonie; één spoor per run.
#[pyfunction]
#[pyo3(signature = (instance_path, params, k = None))]
fn solve_aco_py(instance_path: String, params: Params, k: Option<usize>) -> PyResult<Vec<PyTrace>> {
    run_py(&instance_path, k, Solver::AntColony, &params)
}

/// Helperfunctie om een instantie te parsen en `(n, |universum|, k)` terug te geven.
#[pyfunction]
#[pyo3(signature = (instance_path, k = None))]
fn parse_instance_py(instance_path: String, k: Option<usize>) -> PyResult<(usize, usize, usize)> {
    let instance = load_instance(&instance_path, k)?;
    Ok((instance.n(), instance.universe(), instance.k()))
}

/// Definieert de Python-module `_native`.
#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Params>()?;
    m.add_class::<AntSelection>()?;
    m.add_function(wrap_pyfunction!(solve_grasp_ts_py, m)?)?;
    m.add_function(wrap_pyfunction!(solve_aco_py, m)?)?;
    m.add_function(wrap_pyfunction!(parse_instance_py, m)?)?;
    Ok(())
}
