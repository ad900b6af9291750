//! Summary records and their UI expansion state.
//!
//! One record per document in upload order plus, for multi-document
//! sessions, a single comparison record always in the last position.

pub mod entities;
pub mod expansion;

/// Fixed id of the cross-document comparison record.
///
/// Lives in the same id namespace as document ids; the backend never issues
/// it for an upload.
pub const COMPARISON_ID: &str = "comparison";
