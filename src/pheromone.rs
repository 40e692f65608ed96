//! src/pheromone.rs
//!
//! Feromoonmatrix voor de mierenkolonie. `trail[i][j]` is de wenselijkheid om
//! na element `i` element `j` te kiezen. Alle waarden starten op `tau0 > 0`
//! en blijven niet-negatief: verdamping `(1-ρ)` plus een depositie `≥ 0`.

/// Rij-georiënteerde `n × n` matrix.
#[derive(Clone, Debug)]
pub struct PheromoneMatrix {
    n: usize,
    trail: Vec<f64>,
}

impl PheromoneMatrix {
    /// Creëert een matrix waarin elke waarde `tau0` is.
    pub fn new(n: usize, tau0: f64) -> Self {
        Self {
            n,
            trail: vec![tau0; n * n],
        }
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.trail[i * self.n + j]
    }

    /// De rij van voorganger `i`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.trail[i * self.n..(i + 1) * self.n]
    }

    /// Eén update-ronde na een generatie mieren.
    ///
    /// Voor elk geordend paar `(i, j)`, `i ≠ j`, dat samen in de eindoplossing
    /// van een mier zit, wordt de waarde van die mier opgeteld en `Q[i][j]`
    /// verhoogd. Daarna:
    ///
    /// ```text
    /// delta[i][j]  = (som / Q[i][j]) / best_card   als Q[i][j] > 0, anders 0
    /// trail[i][j]  = (1 - ρ) * trail[i][j] + delta[i][j]
    /// ```
    ///
    /// Paren zonder gezamenlijk voorkomen verdampen dus alleen. Met
    /// `best_card == 0` is er geen depositie.
    pub fn update<'a, I>(&mut self, ants: I, best_card: usize, rho: f64)
    where
        I: IntoIterator<Item = (&'a [usize], usize)>,
    {
        let n = self.n;
        let mut sum = vec![0.0f64; n * n];
        let mut q = vec![0u32; n * n];

        for (members, card) in ants {
            for &i in members {
                for &j in members {
                    if i != j {
                        sum[i * n + j] += card as f64;
                        q[i * n + j] += 1;
                    }
                }
            }
        }

        let keep = 1.0 - rho;
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                let idx = i * n + j;
                let delta = if q[idx] > 0 && best_card > 0 {
                    (sum[idx] / q[idx] as f64) / best_card as f64
                } else {
                    0.0
                };
                self.trail[idx] = keep * self.trail[idx] + delta;
            }
        }
    }
}
