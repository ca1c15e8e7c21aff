//! RGB image: a `Matrix<Color>` with its own `load` behaviour.
//!
//! Storage, copying and moving are inherited unchanged from [`Matrix`]
//! through `Deref`/`DerefMut`. Only the dispatch hook differs.
pub mod io;
pub mod pattern;

use crate::color::Color;
use crate::diagnostics::AllocationReport;
use crate::dispatch::{LoadOutcome, MatrixCore};
use crate::matrix::Matrix;
use log::debug;
use std::any::Any;
use std::ops::{Deref, DerefMut};

#[derive(Debug, Default, PartialEq)]
pub struct Image {
    pixels: Matrix<Color>,
}

impl Image {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            pixels: Matrix::new(rows, cols),
        }
    }

    pub fn from_matrix(pixels: Matrix<Color>) -> Self {
        Self { pixels }
    }

    pub fn into_matrix(self) -> Matrix<Color> {
        self.pixels
    }

    /// Move-construct; `self` is left as an empty image.
    pub fn take(&mut self) -> Self {
        Self {
            pixels: self.pixels.take(),
        }
    }

    /// Move-assign from another image, leaving it empty.
    pub fn move_from(&mut self, other: &mut Image) {
        self.pixels.move_from(&mut other.pixels);
    }

    /// Luma-only copy of the image.
    pub fn to_gray(&self) -> Matrix<u8> {
        self.pixels.map(Color::luma)
    }
}

impl Clone for Image {
    fn clone(&self) -> Self {
        Self {
            pixels: self.pixels.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.pixels.clone_from(&source.pixels);
    }
}

impl Deref for Image {
    type Target = Matrix<Color>;

    fn deref(&self) -> &Self::Target {
        &self.pixels
    }
}

impl DerefMut for Image {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.pixels
    }
}

impl MatrixCore for Image {
    fn load(&mut self) -> LoadOutcome {
        debug!("Image loaded: ({}, {})", self.rows(), self.cols());
        LoadOutcome::Image {
            rows: self.rows(),
            cols: self.cols(),
        }
    }

    fn allocation_report(&self) -> AllocationReport {
        self.pixels.allocation_report()
    }

    fn element_type(&self) -> &'static str {
        std::any::type_name::<Color>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
