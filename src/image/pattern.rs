//! Synthetic fill patterns for images.
use super::Image;
use crate::color::Color;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Pattern {
    Solid {
        color: Color,
    },
    /// Left-to-right linear blend between two colors.
    Gradient {
        from: Color,
        to: Color,
    },
    Checkerboard {
        cell: usize,
        dark: Color,
        light: Color,
    },
}

impl Default for Pattern {
    fn default() -> Self {
        Pattern::Gradient {
            from: Color::BLACK,
            to: Color::WHITE,
        }
    }
}

impl Pattern {
    /// Color of the cell at `(row, col)` in an image that is `cols` wide.
    pub fn color_at(&self, row: usize, col: usize, cols: usize) -> Color {
        match *self {
            Pattern::Solid { color } => color,
            Pattern::Gradient { from, to } => {
                let t = if cols > 1 {
                    col as f32 / (cols - 1) as f32
                } else {
                    0.0
                };
                Color::new(
                    lerp(from.r, to.r, t),
                    lerp(from.g, to.g, t),
                    lerp(from.b, to.b, t),
                )
            }
            Pattern::Checkerboard { cell, dark, light } => {
                let cell = cell.max(1);
                if (row / cell + col / cell) % 2 == 0 {
                    dark
                } else {
                    light
                }
            }
        }
    }

    /// Paint every pixel; rows are filled in parallel.
    pub fn paint(&self, image: &mut Image) {
        let cols = image.cols();
        image.par_for_each_row_mut(|r, row| {
            for (c, px) in row.iter_mut().enumerate() {
                *px = self.color_at(r, c, cols);
            }
        });
    }
}

fn lerp(a: u8, b: u8, t: f32) -> u8 {
    let v = a as f32 + (b as f32 - a as f32) * t;
    v.round().clamp(0.0, 255.0) as u8
}
