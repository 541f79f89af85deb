// src/progress.rs
use crate::runner::DocumentResult;

/// Progress reporting for batch runs.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of documents found.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once per document, in discovery order.
    fn item_done(&mut self, _doc: &DocumentResult) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
