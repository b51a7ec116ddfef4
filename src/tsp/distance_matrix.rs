use crate::matrix::SquareMatrix;
use crate::metaheuristic::Path;
use crate::tsp::City;
use crate::util::{Distance, Point};

/// Symmetric matrix of euclidean distances with a zero diagonal.
/// Built once and never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    matrix: SquareMatrix<f64>,
}

impl DistanceMatrix {
    pub fn build(cities: &[City]) -> Self {
        let mut matrix = SquareMatrix::zeros(cities.len());
        for i in 0..cities.len() {
            for j in i + 1..cities.len() {
                let distance = Point::distance(cities[i].position(), cities[j].position());
                matrix.set_symmetric((i, j), distance);
            }
        }

        DistanceMatrix { matrix }
    }

    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.matrix[(from, to)]
    }

    pub fn row(&self, from: usize) -> &[f64] {
        self.matrix.row(from)
    }

    pub fn order(&self) -> usize {
        self.matrix.order()
    }

    /// Upper bound for the length of any closed tour. A tour leaves every
    /// city exactly once, at most along the longest edge of its row.
    pub fn tour_bound(&self) -> f64 {
        (0..self.order())
            .map(|i| self.row(i).iter().cloned().fold(0.0, f64::max))
            .sum()
    }

    /// Sum of the distances of all moves in the path.
    pub fn path_length(&self, path: &Path) -> f64 {
        path.iter_moves()
            .map(|(from, to)| self.distance(*from, *to))
            .sum()
    }
}
