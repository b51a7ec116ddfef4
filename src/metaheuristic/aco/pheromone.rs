use crate::matrix::SquareMatrix;
use crate::metaheuristic::aco::selector::clamped_distance;
use crate::metaheuristic::Path;
use crate::tsp::DistanceMatrix;

/// Trail strengths on directed city pairs.
///
/// Entries never become negative. Repeated decay without reinforcement lets
/// them shrink geometrically and eventually underflow to zero, at which
/// point move selection degrades to uniform draws.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    matrix: SquareMatrix<f64>,
}

impl PheromoneMatrix {
    /// Every entry starts at 1/n.
    pub fn initialize(n: usize) -> Self {
        PheromoneMatrix {
            matrix: SquareMatrix::filled(n, 1.0 / n as f64),
        }
    }

    pub fn decay(&mut self, factor: f64) {
        self.matrix.iter_mut().for_each(|level| *level *= factor);
    }

    /// Adds the inverse distance of each move of the path to its entry.
    pub fn reinforce(&mut self, path: &Path, distances: &DistanceMatrix) {
        for (from, to) in path.iter_moves() {
            self.matrix[(*from, *to)] += 1.0 / clamped_distance(distances.distance(*from, *to));
        }
    }

    pub fn level(&self, from: usize, to: usize) -> f64 {
        self.matrix[(from, to)]
    }

    pub fn row(&self, from: usize) -> &[f64] {
        self.matrix.row(from)
    }

    pub fn order(&self) -> usize {
        self.matrix.order()
    }

    pub fn max(&self) -> f64 {
        self.matrix.iter().copied().fold(0.0, f64::max)
    }

    pub fn min(&self) -> f64 {
        self.matrix.iter().copied().fold(f64::INFINITY, f64::min)
    }
}
