use super::{Matrix, MatrixView};

impl<T> Matrix<T> {
    /// Render the buffer as text, one line per row with cells separated by
    /// `|`. `styler` decides how a single cell is printed.
    ///
    /// ```
    /// use matrix_buffer::Matrix;
    ///
    /// let mut m = Matrix::<i32>::new(2, 2);
    /// m[(1, 0)] = 2;
    /// assert_eq!(m.render_with(|v| format!("[{v}]")), "[0]|[0]\n[2]|[0]\n");
    /// ```
    pub fn render_with<F>(&self, mut styler: F) -> String
    where
        F: FnMut(&T) -> String,
    {
        let mut out = String::new();
        for row in self.row_iter() {
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    out.push('|');
                }
                out.push_str(&styler(cell));
            }
            out.push('\n');
        }
        out
    }
}
