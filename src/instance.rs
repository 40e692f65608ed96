//! src/instance.rs
//!
//! Representeert een kMIS-instantie: per element een `BitVec` over het
//! feature-universum plus de doelgrootte `k`. Alle bitsets hebben exact
//! `universe` bits en ongebruikte staartbits blijven nul, zodat de AND- en
//! tel-operaties direct op de onderliggende woorden kunnen werken.
//! Ondersteunt het parsen van het bipartiete kant-lijstformaat van de datasets.

use crate::error::{KmisError, Result};
use bitvec::prelude::*;
use std::io::{self, BufRead, Read};

/// Feature-set van één element (of een doorsnede daarvan).
pub type FeatureSet = BitVec<usize, Lsb0>;

/// `|a ∩ b|` zonder tussentijdse allocatie.
#[inline]
pub fn and_count(a: &FeatureSet, b: &FeatureSet) -> usize {
    a.as_raw_slice()
        .iter()
        .zip(b.as_raw_slice())
        .map(|(x, y)| (x & y).count_ones() as usize)
        .sum()
}

/// `acc &= b` in place; beide sets hebben dezelfde lengte.
#[inline]
pub fn and_assign(acc: &mut FeatureSet, b: &FeatureSet) {
    *acc &= b.as_bitslice();
}

/// Een onveranderlijke instantie (E, F, k).
#[derive(Clone, Debug)]
pub struct Instance {
    name: String,
    universe: usize,
    features: Vec<FeatureSet>,
    k: usize,
}

impl Instance {
    /*────────── Constructors ──────────*/

    /// Bouwt een instantie uit expliciete feature-lijsten (0-gebaseerde feature-indices).
    pub fn from_feature_sets(
        name: impl Into<String>,
        universe: usize,
        sets: &[Vec<usize>],
        k: usize,
    ) -> Result<Self> {
        let mut features = Vec::with_capacity(sets.len());
        for (e, set) in sets.iter().enumerate() {
            let mut bits = bitvec![usize, Lsb0; 0; universe];
            for &f in set {
                if f >= universe {
                    return Err(KmisError::invalid_instance(format!(
                        "feature {} van element {} valt buiten universum {}",
                        f, e, universe
                    )));
                }
                bits.set(f, true);
            }
            features.push(bits);
        }
        Self::new(name, universe, features, k)
    }

    /// Bouwt een instantie uit een bipartiete kantlijst (element, feature).
    pub fn from_edge_list(
        name: impl Into<String>,
        n_elements: usize,
        n_features: usize,
        edges: &[(usize, usize)],
        k: usize,
    ) -> Result<Self> {
        let mut features = vec![bitvec![usize, Lsb0; 0; n_features]; n_elements];
        for &(e, f) in edges {
            if e >= n_elements || f >= n_features {
                return Err(KmisError::invalid_instance(format!(
                    "kant ({}, {}) buiten bereik voor {}x{}",
                    e, f, n_elements, n_features
                )));
            }
            features[e].set(f, true);
        }
        Self::new(name, n_features, features, k)
    }

    fn new(name: impl Into<String>, universe: usize, features: Vec<FeatureSet>, k: usize) -> Result<Self> {
        if features.iter().any(|f| f.len() != universe) {
            return Err(KmisError::invalid_instance("feature-sets hebben ongelijke lengte"));
        }
        if k == 0 || k > features.len() {
            return Err(KmisError::EmptyCandidateList { k, n: features.len() });
        }
        Ok(Self {
            name: name.into(),
            universe,
            features,
            k,
        })
    }

    /// Parset het kantlijstformaat:
    ///
    /// ```text
    /// c commentaar
    /// <n_left> <n_right> <n_edges> [k]
    /// <left> <right>
    /// ```
    ///
    /// Een expliciete `k` van de aanroeper gaat voor op die in de header.
    pub fn parse<R: Read>(name: impl Into<String>, reader: R, k: Option<usize>) -> Result<Self> {
        let mut header: Option<(usize, usize, Option<usize>)> = None;
        let mut edges: Vec<(usize, usize)> = Vec::new();

        for line_result in io::BufReader::new(reader).lines() {
            let line = line_result?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('c') || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            match header {
                None => {
                    if parts.len() < 3 {
                        return Err(KmisError::invalid_instance(format!("onvolledige header: '{}'", line)));
                    }
                    let n_left = parse_field(parts[0])?;
                    let n_right = parse_field(parts[1])?;
                    let n_edges = parse_field(parts[2])?;
                    let header_k = match parts.get(3) {
                        Some(raw) => Some(parse_field(raw)?),
                        None => None,
                    };
                    edges.reserve(n_edges);
                    header = Some((n_left, n_right, header_k));
                }
                Some(_) => {
                    if parts.len() < 2 {
                        return Err(KmisError::invalid_instance(format!("onvolledige kant: '{}'", line)));
                    }
                    edges.push((parse_field(parts[0])?, parse_field(parts[1])?));
                }
            }
        }

        let (n_left, n_right, header_k) =
            header.ok_or_else(|| KmisError::invalid_instance("header ontbreekt"))?;
        let k = k
            .or(header_k)
            .ok_or_else(|| KmisError::invalid_instance("geen k in header of aanroep"))?;
        Self::from_edge_list(name, n_left, n_right, &edges, k)
    }

    /// Dezelfde instantie met een andere doelgrootte.
    pub fn with_k(&self, k: usize) -> Result<Self> {
        Self::new(self.name.clone(), self.universe, self.features.clone(), k)
    }

    /*────────── Getters ──────────*/

    /// Aantal elementen `|E|`.
    #[inline]
    pub fn n(&self) -> usize {
        self.features.len()
    }

    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Grootte van het feature-universum.
    #[inline]
    pub fn universe(&self) -> usize {
        self.universe
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Feature-set van element `e`.
    #[inline]
    pub fn features(&self, e: usize) -> &FeatureSet {
        &self.features[e]
    }

    /// `|∩ features[m]|` over de gegeven leden; 0 voor een lege lijst.
    pub fn intersection_size(&self, members: &[usize]) -> usize {
        let mut iter = members.iter();
        let Some(&first) = iter.next() else {
            return 0;
        };
        let mut acc = self.features[first].clone();
        for &m in iter {
            and_assign(&mut acc, &self.features[m]);
        }
        acc.count_ones()
    }
}

fn parse_field(raw: &str) -> Result<usize> {
    raw.parse()
        .map_err(|e| KmisError::invalid_instance(format!("'{}' is geen getal: {}", raw, e)))
}
