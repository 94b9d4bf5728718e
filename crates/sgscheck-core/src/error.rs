//! Error types for the input-boundary vocabularies.
//!
//! The evaluator itself has no error path: anomalies either become
//! violations or are silently excluded. The only fallible operation in
//! this crate is parsing a vocabulary value from a string, which is a
//! collection-layer concern.

/// A string that does not belong to one of the fixed vocabularies.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    /// Not one of the six fixed youth categories.
    #[error("unknown category: {0:?}")]
    UnknownCategory(String),

    /// Not one of the fixed federal qualifications.
    #[error("unknown qualification: {0:?}")]
    UnknownQualification(String),
}
