//! Lifecycle diagnostics for owned buffers.
//!
//! Every allocation, copy, move and release is reported through the `log`
//! facade under the `matrix_buffer::lifecycle` target. Allocation-carrying
//! events go out at `debug`, releases at `trace`.
use crate::dispatch::LoadOutcome;
use log::{debug, trace};
use serde::Serialize;
use std::fmt;

const TARGET: &str = "matrix_buffer::lifecycle";

/// Memory footprint of a buffer at a given moment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct AllocationReport {
    pub rows: usize,
    pub cols: usize,
    /// `rows * cols * size_of::<T>()`
    pub bytes: usize,
}

impl AllocationReport {
    pub fn new<T>(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            bytes: rows
                .saturating_mul(cols)
                .saturating_mul(std::mem::size_of::<T>()),
        }
    }
}

impl fmt::Display for AllocationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "memory allocated: ({}, {}) = {} bytes",
            self.rows, self.cols, self.bytes
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum LifecycleEvent {
    Created,
    Copied,
    Reinitialized,
    Moved,
    Cleared,
    Destroyed,
}

pub(crate) fn record(event: LifecycleEvent, report: AllocationReport) {
    match event {
        LifecycleEvent::Created | LifecycleEvent::Copied | LifecycleEvent::Reinitialized => {
            debug!(target: TARGET, "{event:?}: {report}");
        }
        LifecycleEvent::Moved => {
            debug!(target: TARGET, "Moved: ({}, {}) ownership transferred", report.rows, report.cols);
        }
        LifecycleEvent::Cleared => {
            trace!(target: TARGET, "Cleared: released {} bytes", report.bytes);
        }
        LifecycleEvent::Destroyed => trace!(target: TARGET, "Destroyed"),
    }
}

/// JSON-friendly summary of a buffer and what its `load` hook reported.
#[derive(Clone, Debug, Serialize)]
pub struct MatrixSummary {
    pub allocation: AllocationReport,
    pub element_type: &'static str,
    pub load: LoadOutcome,
}
