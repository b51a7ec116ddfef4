use num_traits::Zero;
use std::ops::{Index, IndexMut};

/// Dense square matrix stored row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    cells: Vec<T>,
    order: usize,
}

impl<T: Copy + Zero> SquareMatrix<T> {
    /// Creates an `order` x `order` matrix filled with zeros.
    pub fn zeros(order: usize) -> Self {
        SquareMatrix::filled(order, T::zero())
    }
}

impl<T: Copy> SquareMatrix<T> {
    pub fn filled(order: usize, value: T) -> Self {
        SquareMatrix {
            cells: vec![value; order * order],
            order,
        }
    }

    /// Number of rows (and columns).
    pub fn order(&self) -> usize {
        self.order
    }

    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.order;
        &self.cells[start..start + self.order]
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.cells.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.cells.iter_mut()
    }

    /// Writes `value` at (i, j) and (j, i).
    pub fn set_symmetric(&mut self, (i, j): (usize, usize), value: T) {
        self[(i, j)] = value;
        self[(j, i)] = value;
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, column): (usize, usize)) -> &T {
        &self.cells[row * self.order + column]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut T {
        &mut self.cells[row * self.order + column]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_works() {
        let matrix = SquareMatrix::<f64>::zeros(3);

        assert_eq!(matrix.order(), 3);
        assert!(matrix.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn index_is_row_major() {
        let mut matrix = SquareMatrix::<usize>::zeros(3);
        matrix[(1, 2)] = 5;

        assert_eq!(matrix.row(1), &[0, 0, 5]);
        assert_eq!(matrix.row(2), &[0, 0, 0]);
    }

    #[test]
    fn set_symmetric_writes_both_cells() {
        let mut matrix = SquareMatrix::<usize>::zeros(4);
        matrix.set_symmetric((0, 3), 7);

        assert_eq!(matrix[(0, 3)], 7);
        assert_eq!(matrix[(3, 0)], 7);
    }

    #[test]
    fn iter_mut_changes_all_cells() {
        let mut matrix = SquareMatrix::filled(2, 2.0);
        matrix.iter_mut().for_each(|x| *x *= 0.5);

        assert!(matrix.iter().all(|&x| x == 1.0));
    }
}
