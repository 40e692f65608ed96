//! src/tabu.rs
//!
//! Korte-termijn tabu-geheugen (STM) met een duur die meeschaalt met de
//! huidige oplossingsgrootte: grotere oplossingen houden elementen langer taboe.

/// Onthoudt per element wanneer het voor het laatst gemarkeerd is.
#[derive(Clone, Debug)]
pub struct TabuMemory {
    /// `last_marked[id]` is het volgnummer van de laatste markering; 0 = nooit.
    last_marked: Vec<u64>,
    /// Tabu-duur = `floor(tenure_factor * |S|)`.
    tenure_factor: f64,
    /// Monotoon stijgende teller; de eerste markering krijgt volgnummer 1.
    sequence: u64,
}

impl TabuMemory {
    /// Creëert een leeg tabu-geheugen voor `n` elementen.
    pub fn new(n: usize, tenure_factor: f64) -> Self {
        Self {
            last_marked: vec![0; n],
            tenure_factor,
            sequence: 0,
        }
    }

    /// Maakt `id` taboe en verhoogt het volgnummer.
    #[inline]
    pub fn mark(&mut self, id: usize) {
        self.sequence += 1;
        self.last_marked[id] = self.sequence;
    }

    /// Lengte van het tabu-venster bij oplossingsgrootte `size`.
    #[inline]
    pub fn tenure(&self, size: usize) -> u64 {
        (self.tenure_factor * size as f64).floor().max(0.0) as u64
    }

    /// Controleert of `id` taboe is bij oplossingsgrootte `size`.
    #[inline]
    pub fn is_tabu(&self, id: usize, size: usize) -> bool {
        let marked = self.last_marked[id];
        marked != 0 && self.sequence - marked <= self.tenure(size)
    }

    #[inline]
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Wist alle markeringen.
    pub fn reset(&mut self) {
        self.last_marked.fill(0);
        self.sequence = 0;
    }
}
