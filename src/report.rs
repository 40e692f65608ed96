//! src/report.rs
//!
//! Zet een convergentiespoor om in rapportregels
//! `(instance, k, best_ans, duration_ms)` en schrijft die als CSV.

use crate::{error::Result, instance::Instance, trace::ExecutionTrace};
use std::io::Write;

pub const CSV_HEADER: &str = "instance,k,best_ans,duration_ms";

/// Eén regel van het rapport.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportRow {
    pub instance: String,
    pub k: usize,
    pub best_ans: usize,
    pub duration_ms: u64,
}

/// Eén regel per spoor-item; `best_ans` is de doorsnedegrootte van de leden.
pub fn report_rows(instance: &Instance, trace: &ExecutionTrace) -> Vec<ReportRow> {
    trace
        .entries()
        .iter()
        .map(|entry| ReportRow {
            instance: instance.name().to_owned(),
            k: instance.k(),
            best_ans: instance.intersection_size(&entry.members),
            duration_ms: entry.elapsed_ms,
        })
        .collect()
}

/// Schrijft de regels als CSV, optioneel voorafgegaan door de header.
pub fn write_csv<W: Write>(out: &mut W, rows: &[ReportRow], with_header: bool) -> Result<()> {
    if with_header {
        writeln!(out, "{}", CSV_HEADER)?;
    }
    for row in rows {
        writeln!(out, "{},{},{},{}", row.instance, row.k, row.best_ans, row.duration_ms)?;
    }
    out.flush()?;
    Ok(())
}
