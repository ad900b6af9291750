//! Prompt templates for summary and comparison queries

/// Templates for the questions posed to the backend, plus the fallback
/// texts shown when a call fails or returns nothing.
///
/// The backend receives these verbatim; its answer comes back verbatim too.
pub struct PromptTemplate;

impl PromptTemplate {
    /// Question for a single-document summary.
    pub fn individual_summary() -> &'static str {
        "Provide a comprehensive summary of this document with detailed analysis, \
         key points, and insights"
    }

    /// Question for the cross-document comparison over the full set.
    pub fn comparison_summary() -> &'static str {
        "Create a comprehensive summary comparing all uploaded documents. \
         Analyze similarities, differences, and provide insights across all documents."
    }

    /// Fallback text for a per-document summary whose call failed.
    pub fn individual_failure() -> &'static str {
        "Failed to load summary. Please try again."
    }

    /// Fallback text when the backend answered a summary query with nothing.
    pub fn individual_empty() -> &'static str {
        "Summary not available"
    }

    /// Fallback text when the backend answered the comparison query with nothing.
    pub fn comparison_empty() -> &'static str {
        "Multi-document comparison not available"
    }

    /// Bot message appended when a chat turn fails.
    pub fn chat_failure() -> &'static str {
        "Something went wrong. Please try again."
    }

    /// Body line of a summary report exported before any records exist.
    pub fn no_summaries_available() -> &'static str {
        "No document summary available yet."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallbacks_are_distinct() {
        assert_ne!(
            PromptTemplate::individual_failure(),
            PromptTemplate::individual_empty()
        );
        assert_ne!(
            PromptTemplate::individual_empty(),
            PromptTemplate::comparison_empty()
        );
    }

    #[test]
    fn test_individual_failure_names_the_problem() {
        assert!(PromptTemplate::individual_failure().contains("Failed to load summary"));
    }
}
