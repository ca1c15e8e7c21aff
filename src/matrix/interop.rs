//! Conversions to nalgebra and rayon-backed row processing.
use super::Matrix;
use nalgebra::{DMatrix, Scalar};
use rayon::prelude::*;

impl<T: Scalar> Matrix<T> {
    /// Copy into a (column-major) nalgebra matrix with the same shape.
    pub fn to_dmatrix(&self) -> DMatrix<T> {
        DMatrix::from_row_slice(self.rows(), self.cols(), self.as_slice())
    }
}

impl<T: Scalar + Default> From<&DMatrix<T>> for Matrix<T> {
    fn from(src: &DMatrix<T>) -> Self {
        let (rows, cols) = src.shape();
        let mut out = Matrix::new(rows, cols);
        for (r, row) in out.rows_mut().enumerate() {
            for (c, dst) in row.iter_mut().enumerate() {
                *dst = src[(r, c)].clone();
            }
        }
        out
    }
}

impl<T: Send> Matrix<T> {
    /// Run `f(row_index, row)` over every row in parallel. Rows are disjoint
    /// so each worker owns its slice exclusively.
    pub fn par_for_each_row_mut<F>(&mut self, f: F)
    where
        F: Fn(usize, &mut [T]) + Sync + Send,
    {
        let (rows, cols) = self.dims();
        if cols == 0 {
            (0..rows).for_each(|r| f(r, &mut []));
            return;
        }
        self.as_mut_slice()
            .par_chunks_mut(cols)
            .enumerate()
            .for_each(|(r, row)| f(r, row));
    }
}
