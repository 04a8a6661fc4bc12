//! Row views into a column-major [`Matrix`].
//!
//! Columns are stored contiguously and can be borrowed as plain [`Vector`]s. Rows are strided, so
//! they are exposed through these lightweight views instead.

use std::{
    fmt,
    ops::{Index, IndexMut},
};

use itertools::Itertools;

use super::Matrix;
use crate::Vector;

/// A shared view of one row of a [`Matrix`].
///
/// Returned by [`Matrix::row`].
#[derive(Clone, Copy)]
pub struct Row<'a, T, const C: usize, const R: usize> {
    matrix: &'a Matrix<T, C, R>,
    row: usize,
}

impl<'a, T, const C: usize, const R: usize> Row<'a, T, C, R> {
    #[track_caller]
    pub(super) fn new(matrix: &'a Matrix<T, C, R>, row: usize) -> Self {
        assert!(row < R, "row index {} out of bounds for matrix with {} rows", row, R);
        Self { matrix, row }
    }

    /// Returns the number of elements in the row (the number of matrix columns).
    #[inline]
    pub fn len(&self) -> usize {
        C
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        C == 0
    }

    pub fn get(&self, col: usize) -> Option<&'a T> {
        self.matrix.get(self.row, col)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a T> + 'a {
        let (matrix, row) = (self.matrix, self.row);
        (0..C).map(move |col| &matrix[(row, col)])
    }

    /// Copies the row out into a [`Vector`].
    pub fn to_vector(&self) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self.matrix[(self.row, col)])
    }
}

impl<'a, T, const C: usize, const R: usize> Index<usize> for Row<'a, T, C, R> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, col: usize) -> &T {
        &self.matrix[(self.row, col)]
    }
}

impl<'a, T: fmt::Debug, const C: usize, const R: usize> fmt::Debug for Row<'a, T, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, elem) in self.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            elem.fmt(f)?;
        }
        f.write_str("]")
    }
}

/// A mutable view of one row of a [`Matrix`].
///
/// Returned by [`Matrix::row_mut`].
pub struct RowMut<'a, T, const C: usize, const R: usize> {
    matrix: &'a mut Matrix<T, C, R>,
    row: usize,
}

impl<'a, T, const C: usize, const R: usize> RowMut<'a, T, C, R> {
    #[track_caller]
    pub(super) fn new(matrix: &'a mut Matrix<T, C, R>, row: usize) -> Self {
        assert!(row < R, "row index {} out of bounds for matrix with {} rows", row, R);
        Self { matrix, row }
    }

    #[inline]
    pub fn len(&self) -> usize {
        C
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        C == 0
    }

    pub fn get_mut(&mut self, col: usize) -> Option<&mut T> {
        self.matrix.get_mut(self.row, col)
    }

    /// Overwrites the row with the elements of `values`.
    pub fn set(&mut self, values: Vector<T, C>) {
        for (col, value) in values.into_array().into_iter().enumerate() {
            self.matrix[(self.row, col)] = value;
        }
    }

    pub fn to_vector(&self) -> Vector<T, C>
    where
        T: Copy,
    {
        Vector::from_fn(|col| self.matrix[(self.row, col)])
    }
}

impl<'a, T, const C: usize, const R: usize> Index<usize> for RowMut<'a, T, C, R> {
    type Output = T;

    #[inline]
    #[track_caller]
    fn index(&self, col: usize) -> &T {
        &self.matrix[(self.row, col)]
    }
}

impl<'a, T, const C: usize, const R: usize> IndexMut<usize> for RowMut<'a, T, C, R> {
    #[inline]
    #[track_caller]
    fn index_mut(&mut self, col: usize) -> &mut T {
        &mut self.matrix[(self.row, col)]
    }
}

impl<'a, T: fmt::Debug, const C: usize, const R: usize> fmt::Debug for RowMut<'a, T, C, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = (0..C).map(|col| &self.matrix[(self.row, col)]);
        write!(f, "[{:?}]", row.format(", "))
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec3, Matrix};

    #[test]
    fn row_view() {
        let mat = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        let row = mat.row(1);
        assert_eq!(row.len(), 3);
        assert_eq!(row[0], 4);
        assert_eq!(row.get(2), Some(&6));
        assert_eq!(row.get(3), None);
        assert_eq!(row.iter().copied().collect::<Vec<_>>(), [4, 5, 6]);
        assert_eq!(format!("{:?}", row), "[4, 5, 6]");
    }

    #[test]
    fn row_mut_view() {
        let mut mat = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
        let mut row = mat.row_mut(0);
        row[1] = 20;
        *row.get_mut(2).unwrap() = 30;
        assert_eq!(format!("{:?}", row), "[1, 20, 30]");
        row.set(vec3(7, 8, 9));
        assert_eq!(row.to_vector(), vec3(7, 8, 9));
        assert_eq!(mat[(0, 2)], 9);
        assert_eq!(mat[(1, 2)], 6);
    }
}
