#![doc = include_str!("../README.md")]

// Buffer types, the dispatch hook and their diagnostics.
pub mod color;
pub mod diagnostics;
pub mod dispatch;
pub mod error;
pub mod image;
pub mod matrix;

// JSON configs read by `image_demo`.
pub mod config;

pub use crate::color::Color;
pub use crate::diagnostics::{AllocationReport, LifecycleEvent, MatrixSummary};
pub use crate::dispatch::{as_image, as_image_mut, LoadOutcome, MatrixCore};
pub use crate::error::MatrixError;
pub use crate::image::Image;
pub use crate::matrix::Matrix;

/// Everything needed to build buffers and dispatch `load` over them.
///
/// ```
/// use matrix_buffer::prelude::*;
///
/// let mut img = Image::new(4, 4);
/// img[(1, 2)] = Color::gray(100);
///
/// let mut mat = Matrix::<u16>::new(2, 2);
/// let mut handles: Vec<&mut dyn MatrixCore> = vec![&mut img, &mut mat];
/// let images = handles.iter().filter(|h| as_image(&***h).is_some()).count();
/// assert_eq!(images, 1);
/// assert!(handles[0].load().is_image());
/// ```
pub mod prelude {
    pub use crate::matrix::{MatrixView, MatrixViewMut};
    pub use crate::{as_image, Color, Image, LoadOutcome, Matrix, MatrixCore, MatrixError};
}
