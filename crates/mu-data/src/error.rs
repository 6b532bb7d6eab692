//! Error types for static data loading

use mu_formats::bmd::BmdError;
use thiserror::Error;

/// Errors raised while building a data table
#[derive(Debug, Error)]
pub enum SkillError {
    /// Underlying BMD table could not be read
    #[error("skill table: {0}")]
    Table(#[from] BmdError),

    /// Entry field does not fit its target width
    #[error("skill {id}: field `{field}` out of range ({value})")]
    MalformedEntry {
        /// Skill id as read from the source
        id: i32,
        /// Offending field
        field: &'static str,
        /// Raw value
        value: i32,
    },
}

/// Result type for data table operations
pub type SkillResult<T> = Result<T, SkillError>;
