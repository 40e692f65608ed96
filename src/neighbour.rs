// Bestand: src/neighbour.rs
//!
//! Lokale zoektocht met tabu-geheugen over de swap-buurt
//! `(ei ∈ S, ej ∉ S)`. Elke iteratie is één scan in twee fasen:
//! kortsluiten op de eerste verbetering, anders de beste niet-verbeterende
//! swap over de volledige buurt nemen (diversificatie).
use crate::{
    error::Result,
    instance::and_count,
    solution::Solution,
    tabu::TabuMemory,
    trace::Incumbent,
};

/// Uitkomst van één scan over de buurt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scan {
    /// Eerste swap die strikt boven de drempel uitkomt.
    Improving { remove: usize, insert: usize, value: usize },
    /// Geen verbetering; de beste swap uit de volledige scan
    /// (eerste maximum in scanvolgorde).
    BestNonImproving { remove: usize, insert: usize, value: usize },
    /// Geen enkele toegestane swap.
    Degenerate,
}

/// Scant alle swaps met een niet-taboe `ei` en vergelijkt met `threshold`.
///
/// `B = ∩ F(S \ ei)` wordt één keer per `ei` berekend en daarna met elke
/// `F(ej)` doorsneden.
pub fn scan_neighbourhood(sol: &Solution<'_>, tabu: &TabuMemory, threshold: usize) -> Scan {
    let instance = sol.instance();
    let size = sol.size();
    let mut best: Option<(usize, usize, usize)> = None;

    for &ei in sol.members() {
        if tabu.is_tabu(ei, size) {
            continue;
        }
        let partial = sol.partial_intersection_excluding(ei);

        for ej in (0..instance.n()).filter(|&ej| !sol.contains(ej)) {
            let fj = instance.features(ej);
            let value = match &partial {
                Some(b) => and_count(b, fj),
                None => fj.count_ones(),
            };

            // Fase 1: eerste verbetering wint direct.
            if value > threshold {
                return Scan::Improving { remove: ei, insert: ej, value };
            }
            // Fase 2: onthoud het maximum over de volledige buurt.
            if best.map_or(true, |(_, _, v)| value > v) {
                best = Some((ei, ej, value));
            }
        }
    }

    match best {
        Some((remove, insert, value)) => Scan::BestNonImproving { remove, insert, value },
        None => Scan::Degenerate,
    }
}

/// Toestand van één Tabu Search-aanroep; `step` voert één scan plus zet uit.
#[derive(Debug)]
pub struct TabuSearch<'i> {
    current: Solution<'i>,
    best: Solution<'i>,
    tabu: TabuMemory,
    stagnation: usize,
}

impl<'i> TabuSearch<'i> {
    pub fn new(start: Solution<'i>, tenure_factor: f64) -> Self {
        let tabu = TabuMemory::new(start.instance().n(), tenure_factor);
        TabuSearch { best: start.clone(), current: start, tabu, stagnation: 0 }
    }

    /// Eén iteratie. Bij een verbetering wordt de nieuwe beste ook aan
    /// `incumbent` aangeboden; anders loopt de stagnatieteller op.
    pub fn step(&mut self, incumbent: &mut Incumbent<'i>) -> Result<Scan> {
        let scan = scan_neighbourhood(&self.current, &self.tabu, self.best.value());
        match scan {
            Scan::Improving { remove, insert, .. } => {
                self.current.swap(remove, insert)?;
                self.tabu.mark(insert);
                self.stagnation = 0;
                self.best = self.current.clone();
                incumbent.offer(&self.best);
            }
            Scan::BestNonImproving { remove, insert, .. } => {
                self.current.swap(remove, insert)?;
                self.tabu.mark(insert);
                self.stagnation += 1;
            }
            Scan::Degenerate => {
                self.stagnation += 1;
            }
        }
        Ok(scan)
    }

    pub fn current(&self) -> &Solution<'i> {
        &self.current
    }

    pub fn best(&self) -> &Solution<'i> {
        &self.best
    }

    pub fn tabu(&self) -> &TabuMemory {
        &self.tabu
    }

    pub fn stagnation(&self) -> usize {
        self.stagnation
    }

    pub fn into_best(self) -> Solution<'i> {
        self.best
    }
}

/// Tabu Search vanaf `start` tot er `gamma` iteraties op rij geen verbetering
/// was. Verbeteringen worden ook aan de globale `incumbent` aangeboden.
///
/// Geeft de beste oplossing van deze aanroep terug; die kan slechter zijn dan
/// de globale beste.
pub fn tabu_search<'i>(
    start: Solution<'i>,
    tenure_factor: f64,
    gamma: usize,
    incumbent: &mut Incumbent<'i>,
) -> Result<Solution<'i>> {
    let mut search = TabuSearch::new(start, tenure_factor);
    while search.stagnation() < gamma {
        search.step(incumbent)?;
    }
    Ok(search.into_best())
}
