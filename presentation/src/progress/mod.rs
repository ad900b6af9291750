//! Progress reporting for summary loading.

pub mod reporter;

pub use reporter::{ProgressReporter, SimpleProgress};
