use super::Matrix;

/// Read-only row-major access shared by every 2D buffer in the crate.
pub trait MatrixView {
    type Element;

    fn row_count(&self) -> usize;
    fn col_count(&self) -> usize;

    fn row(&self, r: usize) -> &[Self::Element];

    fn row_iter(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { matrix: self, r: 0 }
    }

    fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.col_count() == 0
    }

    fn as_contiguous(&self) -> Option<&[Self::Element]> {
        None
    }
}

pub trait MatrixViewMut: MatrixView {
    fn row_mut(&mut self, r: usize) -> &mut [Self::Element];
}

pub struct Rows<'a, M: ?Sized + MatrixView> {
    matrix: &'a M,
    r: usize,
}

impl<'a, M: MatrixView> Iterator for Rows<'a, M> {
    type Item = &'a [M::Element];

    fn next(&mut self) -> Option<Self::Item> {
        if self.r >= self.matrix.row_count() {
            return None;
        }
        let r = self.r;
        self.r += 1;
        Some(self.matrix.row(r))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.matrix.row_count().saturating_sub(self.r);
        (left, Some(left))
    }
}

impl<M: MatrixView> ExactSizeIterator for Rows<'_, M> {}

/// Mutable rows of a contiguous row-major block.
pub struct RowsMut<'a, T> {
    rest: &'a mut [T],
    cols: usize,
    left: usize,
}

impl<'a, T> RowsMut<'a, T> {
    pub(crate) fn new(data: &'a mut [T], rows: usize, cols: usize) -> Self {
        Self {
            rest: data,
            cols,
            left: rows,
        }
    }
}

impl<'a, T> Iterator for RowsMut<'a, T> {
    type Item = &'a mut [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.left == 0 {
            return None;
        }
        self.left -= 1;
        let rest = std::mem::take(&mut self.rest);
        let (row, tail) = rest.split_at_mut(self.cols);
        self.rest = tail;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.left, Some(self.left))
    }
}

impl<T> ExactSizeIterator for RowsMut<'_, T> {}

impl<T> MatrixView for Matrix<T> {
    type Element = T;

    #[inline]
    fn row_count(&self) -> usize {
        self.rows()
    }
    #[inline]
    fn col_count(&self) -> usize {
        self.cols()
    }
    #[inline]
    fn row(&self, r: usize) -> &[T] {
        let cols = self.cols();
        if cols == 0 {
            return &[];
        }
        let start = r * cols;
        &self.as_slice()[start..start + cols]
    }
    #[inline]
    fn as_contiguous(&self) -> Option<&[T]> {
        self.has_storage().then(|| self.as_slice())
    }
}

impl<T> MatrixViewMut for Matrix<T> {
    #[inline]
    fn row_mut(&mut self, r: usize) -> &mut [T] {
        let cols = self.cols();
        if cols == 0 {
            return &mut [];
        }
        let start = r * cols;
        &mut self.as_mut_slice()[start..start + cols]
    }
}
