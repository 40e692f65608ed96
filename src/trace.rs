//! src/trace.rs
//!
//! Convergentiesporen: elke keer dat een run een strikt betere oplossing vindt,
//! wordt een momentopname (leden, verstreken milliseconden) vastgelegd.

use crate::error::{KmisError, Result};
use crate::solution::Solution;
use std::time::Instant;

/// Eén momentopname van een nieuwe globale beste oplossing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraceEntry {
    pub members: Vec<usize>,
    pub elapsed_ms: u64,
}

/// Append-only lijst van verbeteringen binnen één run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionTrace {
    entries: Vec<TraceEntry>,
}

impl ExecutionTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, members: Vec<usize>, elapsed_ms: u64) {
        self.entries.push(TraceEntry { members, elapsed_ms });
    }

    pub fn entries(&self) -> &[TraceEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&TraceEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// De globale beste oplossing van een run, samen met het spoor en de klok.
///
/// Wordt door de driver gecreëerd en als `&mut` doorgegeven; er is geen
/// gedeelde toestand tussen runs.
#[derive(Debug)]
pub struct Incumbent<'i> {
    best: Option<Solution<'i>>,
    trace: ExecutionTrace,
    start: Instant,
}

impl<'i> Incumbent<'i> {
    /// Start de klok van de run.
    pub fn start() -> Self {
        Self {
            best: None,
            trace: ExecutionTrace::new(),
            start: Instant::now(),
        }
    }

    /// Waarde van de huidige beste oplossing, of `None` als er nog geen is.
    #[inline]
    pub fn best_value(&self) -> Option<usize> {
        self.best.as_ref().map(Solution::value)
    }

    pub fn best(&self) -> Option<&Solution<'i>> {
        self.best.as_ref()
    }

    /// Verstreken tijd sinds de start van de run.
    #[inline]
    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    /// Legt een momentopname vast als `sol` strikt beter is dan de beste
    /// waarde tot nu toe; de basislijn is 0, dus een oplossing met waarde 0
    /// komt nooit in het spoor. Geeft `true` terug bij een verbetering.
    ///
    /// De eerste aangeboden oplossing wordt altijd als terugvaloptie bewaard.
    pub fn offer(&mut self, sol: &Solution<'i>) -> bool {
        let improves = sol.value() > self.best_value().unwrap_or(0);
        if improves {
            let elapsed = self.elapsed_ms();
            log::trace!("nieuwe beste waarde {} na {} ms", sol.value(), elapsed);
            self.trace.push(sol.members().to_vec(), elapsed);
            self.best = Some(sol.clone());
        } else if self.best.is_none() {
            self.best = Some(sol.clone());
        }
        improves
    }

    /// Sluit de run af; faalt alleen als er nooit een oplossing is aangeboden.
    /// Het spoor mag leeg zijn.
    pub fn finish(self) -> Result<RunOutcome<'i>> {
        let best = self
            .best
            .ok_or_else(|| KmisError::invalid_state("run beëindigd zonder enige oplossing"))?;
        Ok(RunOutcome { best, trace: self.trace })
    }
}

/// Resultaat van één run: de beste oplossing en het volledige spoor.
#[derive(Clone, Debug)]
pub struct RunOutcome<'i> {
    pub best: Solution<'i>,
    pub trace: ExecutionTrace,
}
