use decorum::R64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A directed step between two city indices.
pub type Move = (usize, usize);

/// Sequence of visited cities. A closed tour over `n` cities holds `n + 1`
/// entries (the start is repeated at the end) and therefore `n` moves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Path {
    city_list: Vec<usize>,
}

impl Default for Path {
    fn default() -> Self {
        Path::new()
    }
}

impl Path {
    pub fn new() -> Self {
        Path {
            city_list: Vec::new(),
        }
    }

    pub fn with_capacity(moves: usize) -> Self {
        Path {
            city_list: Vec::with_capacity(moves + 1),
        }
    }

    pub fn from_cities(cities: Vec<usize>) -> Self {
        Path { city_list: cities }
    }

    pub fn push_city(&mut self, city: usize) {
        self.city_list.push(city);
    }

    pub fn start(&self) -> Option<usize> {
        self.city_list.first().copied()
    }

    pub fn last(&self) -> Option<usize> {
        self.city_list.last().copied()
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.city_list.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter_moves(&self) -> Box<dyn Iterator<Item = (&usize, &usize)> + '_> {
        Box::new(self.city_list.iter().zip(self.city_list.iter().skip(1)))
    }

    pub fn iter_cities(&self) -> Box<dyn Iterator<Item = &usize> + '_> {
        Box::new(self.city_list.iter())
    }

    pub fn moves(&self) -> Vec<Move> {
        self.iter_moves().map(|(from, to)| (*from, *to)).collect()
    }

    pub fn cities(&self) -> Vec<usize> {
        self.city_list.clone()
    }

    /// True if the path leaves every one of the `n` cities exactly once and
    /// ends where it started.
    pub fn is_closed_tour(&self, n: usize) -> bool {
        if self.len() != n || self.start() != self.last() {
            return false;
        }

        let mut left = vec![false; n];
        for (from, _) in self.iter_moves() {
            if *from >= n || left[*from] {
                return false;
            }
            left[*from] = true;
        }

        true
    }
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.city_list
                .iter()
                .map(|x| format!("{}", x))
                .collect::<Vec<String>>()
                .join(" -> ")
        )
    }
}

/// A path together with its total length.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredPath {
    pub path: Path,
    pub distance: R64,
}

impl ScoredPath {
    pub fn new(path: Path, distance: f64) -> Self {
        ScoredPath {
            path,
            distance: R64::from_inner(distance),
        }
    }

    pub fn distance(&self) -> f64 {
        self.distance.into_inner()
    }
}

/// Shortest path seen so far. Only a strictly shorter path replaces the
/// current one, and it is stored as an owned copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BestSoFar {
    best: Option<ScoredPath>,
}

impl BestSoFar {
    pub fn new() -> Self {
        BestSoFar { best: None }
    }

    /// Infinite while nothing was offered yet.
    pub fn distance(&self) -> f64 {
        self.best
            .as_ref()
            .map_or(f64::INFINITY, |scored| scored.distance())
    }

    pub fn get(&self) -> Option<&ScoredPath> {
        self.best.as_ref()
    }

    pub fn into_inner(self) -> Option<ScoredPath> {
        self.best
    }

    /// Replaces the stored path if `candidate` is strictly shorter.
    /// Returns whether it was replaced.
    pub fn offer(&mut self, candidate: &ScoredPath) -> bool {
        if candidate.distance() < self.distance() {
            self.best = Some(candidate.clone());
            return true;
        }

        false
    }
}
