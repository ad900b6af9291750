//! Prompt domain
//!
//! Fixed question texts sent to the backend and the user-facing fallback
//! strings used when a call fails.

mod template;

pub use template::PromptTemplate;
