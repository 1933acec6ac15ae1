//! # Error Types
//!
//! Defines the error type for the COSO catalog. All errors use `thiserror`
//! for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! Constructing a component and describing it never fails: scope values are
//! free text and are accepted as given. Errors only arise at parsing
//! boundaries, where a label, slug, or principle number supplied from
//! outside the process must map onto the fixed COSO taxonomy.

use thiserror::Error;

/// Top-level error type for the COSO catalog.
#[derive(Error, Debug)]
pub enum CosoError {
    /// The label or slug does not name one of the five COSO components.
    #[error("unknown COSO component: {0:?}")]
    UnknownComponent(String),

    /// The label does not name one of the three COSO objectives.
    #[error("unknown COSO objective: {0:?}")]
    UnknownObjective(String),

    /// The label does not name one of the four organizational levels.
    #[error("unknown organizational level: {0:?}")]
    UnknownLevel(String),

    /// Principle numbers run from 1 to 17 inclusive.
    #[error("principle number {0} is outside the COSO range 1..=17")]
    PrincipleOutOfRange(u64),

    /// The principle number could not be parsed as an integer.
    #[error("invalid principle number: {0:?}")]
    InvalidPrincipleNumber(String),

    /// Serialization of a catalog export failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
