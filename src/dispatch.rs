//! Late-bound `load` hook shared by every buffer type.
//!
//! `MatrixCore` is the base capability: a heterogeneous collection holds
//! `Box<dyn MatrixCore>` (or `&mut dyn MatrixCore`) handles and calls
//! [`MatrixCore::load`] without knowing the concrete type. The generic
//! [`Matrix`] implementation covers every element type; [`Image`] supplies
//! its own. Runtime narrowing goes through `Any` and yields `None` on a
//! mismatch.
use crate::diagnostics::{AllocationReport, MatrixSummary};
use crate::image::Image;
use crate::matrix::Matrix;
use log::debug;
use serde::Serialize;
use std::any::Any;

/// What a `load` call resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LoadOutcome {
    Matrix {
        rows: usize,
        cols: usize,
        element_type: &'static str,
    },
    Image {
        rows: usize,
        cols: usize,
    },
}

impl LoadOutcome {
    pub fn is_image(&self) -> bool {
        matches!(self, LoadOutcome::Image { .. })
    }
}

pub trait MatrixCore: Any {
    fn load(&mut self) -> LoadOutcome;

    fn allocation_report(&self) -> AllocationReport;

    fn element_type(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl dyn MatrixCore {
    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }

    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        self.as_any_mut().downcast_mut::<T>()
    }

    /// Run `load` and bundle the result with the current footprint.
    pub fn summarize(&mut self) -> MatrixSummary {
        MatrixSummary {
            allocation: self.allocation_report(),
            element_type: self.element_type(),
            load: self.load(),
        }
    }
}

/// Narrow a base handle to an [`Image`]; `None` for every other buffer,
/// including a plain `Matrix<Color>`.
pub fn as_image(core: &dyn MatrixCore) -> Option<&Image> {
    core.downcast_ref::<Image>()
}

pub fn as_image_mut(core: &mut dyn MatrixCore) -> Option<&mut Image> {
    core.downcast_mut::<Image>()
}

impl<T: 'static> MatrixCore for Matrix<T> {
    fn load(&mut self) -> LoadOutcome {
        debug!("Matrix loaded: ({}, {})", self.rows(), self.cols());
        LoadOutcome::Matrix {
            rows: self.rows(),
            cols: self.cols(),
            element_type: std::any::type_name::<T>(),
        }
    }

    fn allocation_report(&self) -> AllocationReport {
        Matrix::allocation_report(self)
    }

    fn element_type(&self) -> &'static str {
        std::any::type_name::<T>()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
