//! Owned row-major 2D buffer with explicit copy/move lifecycle.
//!
//! `Matrix<T>` owns at most one contiguous block of `rows * cols` elements.
//! The block is absent exactly when the product is zero. Cloning duplicates
//! the block, `take`/`move_from` transfer it and leave the source as an
//! empty `(0, 0)` buffer, and dropping releases it once. Every transition is
//! reported through [`crate::diagnostics`].

mod interop;
mod render;
pub mod traits;


pub use self::traits::{MatrixView, MatrixViewMut, Rows, RowsMut};

use crate::diagnostics::{record, AllocationReport, LifecycleEvent};
use crate::error::MatrixError;
use std::ops::{Index, IndexMut};

pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    mem: Option<Box<[T]>>,
}

/// Element count for a shape, `None` when `rows * cols` overflows `usize`.
#[inline]
fn area(rows: usize, cols: usize) -> Option<usize> {
    rows.checked_mul(cols)
}

fn area_or_panic(rows: usize, cols: usize) -> usize {
    match area(rows, cols) {
        Some(len) => len,
        None => panic!("capacity overflow: {rows}x{cols} elements exceed usize"),
    }
}

fn allocate<T: Default>(len: usize) -> Option<Box<[T]>> {
    if len == 0 {
        return None;
    }
    Some((0..len).map(|_| T::default()).collect())
}

impl<T> Matrix<T> {
    /// Zero-sized buffer with no storage.
    pub fn empty() -> Self {
        let m = Self {
            rows: 0,
            cols: 0,
            mem: None,
        };
        record(LifecycleEvent::Created, m.allocation_report());
        m
    }

    /// Wrap existing row-major data.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, MatrixError> {
        if area(rows, cols) != Some(data.len()) {
            return Err(MatrixError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        let mem = (!data.is_empty()).then(|| data.into_boxed_slice());
        let m = Self { rows, cols, mem };
        record(LifecycleEvent::Created, m.allocation_report());
        Ok(m)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline]
    pub fn num_elements(&self) -> usize {
        self.rows * self.cols
    }

    #[inline]
    pub fn has_storage(&self) -> bool {
        self.mem.is_some()
    }

    pub fn allocation_report(&self) -> AllocationReport {
        AllocationReport::new::<T>(self.rows, self.cols)
    }

    /// Contiguous row-major view; empty when no storage is held.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.mem.as_deref().unwrap_or(&[])
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.mem.as_deref_mut().unwrap_or(&mut [])
    }

    /// Legacy flat index `row * cols + col`. No per-axis check.
    #[inline]
    pub fn flat_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Legacy setter over the flat index.
    ///
    /// # Panics
    /// When `row * cols + col` falls outside the storage.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let idx = self.flat_index(row, col);
        self.as_mut_slice()[idx] = value;
    }

    /// Release the storage and reset to `(0, 0)`. Safe to call repeatedly.
    pub fn clear(&mut self) {
        let report = if self.mem.is_some() {
            self.allocation_report()
        } else {
            AllocationReport::new::<T>(0, 0)
        };
        self.mem = None;
        self.rows = 0;
        self.cols = 0;
        record(LifecycleEvent::Cleared, report);
    }

    /// Move-construct: hand over dims and storage, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        let moved = Self {
            rows: std::mem::take(&mut self.rows),
            cols: std::mem::take(&mut self.cols),
            mem: self.mem.take(),
        };
        record(LifecycleEvent::Moved, moved.allocation_report());
        moved
    }

    /// Move-assign: release own storage, adopt `other`'s, leave `other` empty.
    pub fn move_from(&mut self, other: &mut Self) {
        self.clear();
        self.rows = std::mem::take(&mut other.rows);
        self.cols = std::mem::take(&mut other.cols);
        self.mem = other.mem.take();
        record(LifecycleEvent::Moved, self.allocation_report());
    }

    /// Exchange dims and storage with `other` without copying elements.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.rows, &mut other.rows);
        std::mem::swap(&mut self.cols, &mut other.cols);
        std::mem::swap(&mut self.mem, &mut other.mem);
    }

    /// Give up the storage as a row-major `Vec`.
    pub fn into_vec(mut self) -> Vec<T> {
        self.rows = 0;
        self.cols = 0;
        self.mem.take().map(Vec::from).unwrap_or_default()
    }

    /// Checked access. Fails with [`MatrixError::EmptyBuffer`] when nothing is
    /// allocated instead of handing out a shared fallback element.
    pub fn element(&self, row: usize, col: usize) -> Result<&T, MatrixError> {
        let idx = self.checked_index(row, col)?;
        Ok(&self.as_slice()[idx])
    }

    pub fn element_at(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        let idx = self.checked_index(row, col)?;
        Ok(&mut self.as_mut_slice()[idx])
    }

    fn checked_index(&self, row: usize, col: usize) -> Result<usize, MatrixError> {
        if self.mem.is_none() {
            return Err(MatrixError::EmptyBuffer { row, col });
        }
        if row >= self.rows || col >= self.cols {
            return Err(MatrixError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.flat_index(row, col))
    }

    /// # Safety
    /// `row * cols + col` must be below `num_elements()` and storage must exist.
    #[inline]
    pub unsafe fn get_unchecked(&self, row: usize, col: usize) -> &T {
        let idx = self.flat_index(row, col);
        self.as_slice().get_unchecked(idx)
    }

    /// # Safety
    /// Same contract as [`Matrix::get_unchecked`].
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, row: usize, col: usize) -> &mut T {
        let idx = self.flat_index(row, col);
        self.as_mut_slice().get_unchecked_mut(idx)
    }

    /// Mutable row iterator. Yields `rows` slices of `cols` elements each,
    /// so a zero-column shape still produces one empty slice per row.
    pub fn rows_mut(&mut self) -> RowsMut<'_, T> {
        let (rows, cols) = self.dims();
        RowsMut::new(self.as_mut_slice(), rows, cols)
    }

    pub fn map<U, F>(&self, f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        let data: Vec<U> = self.as_slice().iter().map(f).collect();
        let m = Matrix {
            rows: self.rows,
            cols: self.cols,
            mem: (!data.is_empty()).then(|| data.into_boxed_slice()),
        };
        record(LifecycleEvent::Created, m.allocation_report());
        m
    }
}

impl<T: Default> Matrix<T> {
    /// Allocate `rows * cols` default elements; nothing is allocated when the
    /// product is zero.
    ///
    /// # Panics
    /// When `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Self {
        let len = area_or_panic(rows, cols);
        let m = Self {
            rows,
            cols,
            mem: allocate(len),
        };
        record(LifecycleEvent::Created, m.allocation_report());
        m
    }

    /// Release current storage and reallocate for new dimensions. Valid in
    /// any state, including after a move-out.
    ///
    /// # Panics
    /// When `rows * cols` overflows `usize`; the current storage is kept.
    pub fn init(&mut self, rows: usize, cols: usize) {
        let len = area_or_panic(rows, cols);
        self.clear();
        self.rows = rows;
        self.cols = cols;
        self.mem = allocate(len);
        record(LifecycleEvent::Reinitialized, self.allocation_report());
    }
}

impl<T: Clone> Matrix<T> {
    /// Legacy accessor over the flat index; returns a clone of the element.
    ///
    /// # Panics
    /// When `row * cols + col` falls outside the storage.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.as_slice()[self.flat_index(row, col)].clone()
    }

    pub fn fill(&mut self, value: T) {
        self.as_mut_slice().fill(value);
    }
}

impl<T> Default for Matrix<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Clone> Clone for Matrix<T> {
    fn clone(&self) -> Self {
        let m = Self {
            rows: self.rows,
            cols: self.cols,
            mem: self.mem.clone(),
        };
        record(LifecycleEvent::Copied, m.allocation_report());
        m
    }

    /// Copy-assign: drop the current block and duplicate `source`'s.
    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.rows = source.rows;
        self.cols = source.cols;
        self.mem = source.mem.clone();
        record(LifecycleEvent::Copied, self.allocation_report());
    }
}

impl<T> Drop for Matrix<T> {
    fn drop(&mut self) {
        self.clear();
        record(LifecycleEvent::Destroyed, AllocationReport::new::<T>(0, 0));
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Matrix<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Matrix")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .field("allocated", &self.mem.is_some())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.dims() == other.dims() && self.as_slice() == other.as_slice()
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.element(row, col) {
            Ok(v) => v,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        match self.element_at(row, col) {
            Ok(v) => v,
            Err(err) => panic!("{err}"),
        }
    }
}
