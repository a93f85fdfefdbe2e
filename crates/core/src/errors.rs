//! Core error types for the balancing pipeline.
//!
//! Structural precondition violations (misaligned trees, malformed flat
//! lists) indicate an integration bug upstream and fail fast with these
//! types. Soft cases (zero sibling totals, failed id lookups, absent
//! optional fields) are resolved locally by the calculators and never
//! surface as errors.

use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the balancing pipeline.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Tree construction failed: {0}")]
    Tree(#[from] TreeError),

    #[error("Diff computation failed: {0}")]
    Diff(#[from] DiffError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors raised while reconstructing a tree from a flat node list.
///
/// Construction never returns a partial tree.
#[derive(Error, Debug)]
pub enum TreeError {
    /// Every item in the list carries a `parent_id`.
    #[error("flat node list has no root item")]
    MissingRoot,

    /// More than one item in the list is parentless.
    #[error("flat node list has {0} root items, expected exactly one")]
    MultipleRoots(usize),

    /// The same id appears on more than one node.
    #[error("node id '{0}' appears more than once")]
    DuplicateId(String),
}

/// Structural mismatches between the current and desired trees during
/// diffing.
///
/// Children are paired positionally. Any divergence aborts the diff rather
/// than guessing an alignment by id matching.
#[derive(Error, Debug)]
pub enum DiffError {
    #[error("node '{id}' has {current} children in the current tree but {desired} in the desired tree")]
    ChildCountMismatch {
        id: String,
        current: usize,
        desired: usize,
    },

    #[error("trees diverge at child position {position}: current node '{current_id}' paired with desired node '{desired_id}'")]
    NodeIdMismatch {
        position: usize,
        current_id: String,
        desired_id: String,
    },

    #[error("node '{id}' is quoted in '{current}' in the current tree but '{desired}' in the desired tree")]
    QuoteMismatch {
        id: String,
        current: String,
        desired: String,
    },
}

/// Validation errors for trees re-entering the pipeline.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("node '{id}' has negative value {value}")]
    NegativeValue { id: String, value: Decimal },

    #[error("node '{id}' has desired percentage {value}, expected 0 to 100")]
    PercentageOutOfRange { id: String, value: Decimal },
}
