use matrix_buffer::{Color, Image, Matrix};

/// Buffer whose cell `(r, c)` holds `r * cols + c` (wrapping at 256).
pub fn counting_u8(rows: usize, cols: usize) -> Matrix<u8> {
    let mut m = Matrix::new(rows, cols);
    for r in 0..rows {
        for c in 0..cols {
            m.set(r, c, ((r * cols + c) % 256) as u8);
        }
    }
    m
}

/// Simple high-contrast checkerboard image.
pub fn checkerboard_image(rows: usize, cols: usize, cell: usize) -> Image {
    assert!(cell > 0, "cell size must be positive");
    let mut img = Image::new(rows, cols);
    for r in 0..rows {
        for c in 0..cols {
            let v = if (r / cell + c / cell) & 1 == 0 { 32u8 } else { 220u8 };
            img[(r, c)] = Color::gray(v);
        }
    }
    img
}
