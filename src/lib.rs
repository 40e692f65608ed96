// src/lib.rs

// Publieke modules voor gebruik binnen de Rust-crate
pub mod aco;
pub mod construct;
pub mod error;
pub mod grasp;
pub mod instance;
pub mod neighbour;
pub mod params;
pub mod pheromone;
pub mod report;
pub mod runner;
pub mod solution;
pub mod tabu;
pub mod trace;

#[cfg(feature = "python")]
mod python;

// Her-exporteer de belangrijkste types voor Rust-gebruikers
pub use aco::solve_aco;
pub use error::{KmisError, Result};
pub use grasp::solve_grasp_ts;
pub use instance::{FeatureSet, Instance};
pub use params::{AntSelection, Params};
pub use runner::{solve_runs, Solver};
pub use solution::Solution;
pub use trace::{ExecutionTrace, RunOutcome, TraceEntry};
