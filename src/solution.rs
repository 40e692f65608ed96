//! src/solution.rs
//!
//! Representeert een kandidaat-oplossing: een geordende lijst van gekozen
//! elementen met een gecachte doorsnede van hun feature-sets en de grootte
//! daarvan. Toevoegen is één AND; verwijderen kan niet incrementeel (AND heeft
//! geen inverse), dus `swap` herberekent de doorsnede over alle leden.

use crate::error::{KmisError, Result};
use crate::instance::{and_assign, and_count, FeatureSet, Instance};
use bitvec::prelude::*;

/// Een veranderlijke kMIS-kandidaat, gebonden aan een specifieke `Instance`.
#[derive(Clone, Debug)]
pub struct Solution<'i> {
    instance: &'i Instance,
    /// Leden in invoegvolgorde; bepaalt de scanvolgorde van de lokale zoektocht.
    members: Vec<usize>,
    in_solution: BitVec,
    /// `None` zolang er geen leden zijn.
    intersection: Option<FeatureSet>,
    value: usize,
}

impl<'i> Solution<'i> {
    /*────────── Constructors ──────────*/

    /// Creëert een nieuwe, lege oplossing voor de gegeven instantie.
    pub fn new(instance: &'i Instance) -> Self {
        Self {
            instance,
            members: Vec::new(),
            in_solution: bitvec![0; instance.n()],
            intersection: None,
            value: 0,
        }
    }

    /// Bouwt een oplossing door `members` in volgorde toe te voegen.
    pub fn from_members(instance: &'i Instance, members: &[usize]) -> Result<Self> {
        let mut sol = Self::new(instance);
        for &m in members {
            sol.add_element(m)?;
        }
        Ok(sol)
    }

    /*────────── Queries ──────────*/

    /// Geeft `|∩ F|` terug, de doelwaarde.
    #[inline]
    pub fn value(&self) -> usize {
        self.value
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.members.len()
    }

    #[inline]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    #[inline]
    pub fn contains(&self, e: usize) -> bool {
        self.in_solution[e]
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// De gecachte doorsnede; `None` voor een lege oplossing.
    #[inline]
    pub fn intersection(&self) -> Option<&FeatureSet> {
        self.intersection.as_ref()
    }

    #[inline]
    pub fn instance(&self) -> &'i Instance {
        self.instance
    }

    /// `|∩ F ∩ features[c]|` voor een kandidaat `c`; voor een lege oplossing
    /// is dat `|features[c]|`.
    #[inline]
    pub fn gain_with(&self, c: usize) -> usize {
        let fc = self.instance.features(c);
        match &self.intersection {
            Some(inter) => and_count(inter, fc),
            None => fc.count_ones(),
        }
    }

    /// Doorsnede van alle leden behalve `excluded`, zonder de oplossing te wijzigen.
    /// Geeft `None` terug als er geen andere leden zijn (het neutrale element).
    pub fn partial_intersection_excluding(&self, excluded: usize) -> Option<FeatureSet> {
        let mut acc: Option<FeatureSet> = None;
        for &m in self.members.iter().filter(|&&m| m != excluded) {
            let fm = self.instance.features(m);
            match acc.as_mut() {
                Some(bits) => and_assign(bits, fm),
                None => acc = Some(fm.clone()),
            }
        }
        acc
    }

    /// Strikt beter; een gelijke waarde vervangt nooit.
    #[inline]
    pub fn is_better_than(&self, other: &Solution<'_>) -> bool {
        self.value > other.value
    }

    /*────────── Mutators ──────────*/

    /// Voegt element `e` toe en werkt doorsnede en waarde bij met één AND.
    pub fn add_element(&mut self, e: usize) -> Result<()> {
        if e >= self.instance.n() {
            return Err(KmisError::invalid_state(format!("element {} bestaat niet", e)));
        }
        if self.in_solution[e] {
            return Err(KmisError::invalid_state(format!("element {} zit al in de oplossing", e)));
        }
        let fe = self.instance.features(e);
        match self.intersection.as_mut() {
            Some(inter) => and_assign(inter, fe),
            None => self.intersection = Some(fe.clone()),
        }
        self.members.push(e);
        self.in_solution.set(e, true);
        self.refresh_value();
        Ok(())
    }

    /// Vervangt `remove` door `insert`; het nieuwe lid komt achteraan.
    pub fn swap(&mut self, remove: usize, insert: usize) -> Result<()> {
        if remove >= self.instance.n() || !self.in_solution[remove] {
            return Err(KmisError::invalid_state(format!("element {} zit niet in de oplossing", remove)));
        }
        if insert >= self.instance.n() || self.in_solution[insert] {
            return Err(KmisError::invalid_state(format!(
                "element {} kan niet worden ingevoegd",
                insert
            )));
        }
        self.members.retain(|&m| m != remove);
        self.members.push(insert);
        self.in_solution.set(remove, false);
        self.in_solution.set(insert, true);
        self.recompute();
        Ok(())
    }

    /// Herberekent de doorsnede volledig uit de huidige leden.
    fn recompute(&mut self) {
        let mut acc: Option<FeatureSet> = None;
        for &m in &self.members {
            let fm = self.instance.features(m);
            match acc.as_mut() {
                Some(bits) => and_assign(bits, fm),
                None => acc = Some(fm.clone()),
            }
        }
        self.intersection = acc;
        self.refresh_value();
    }

    #[inline]
    fn refresh_value(&mut self) {
        self.value = self.intersection.as_ref().map_or(0, |bits| bits.count_ones());
    }
}
