//! Treebalance Core - asset trees, target allocations, and trades.
//!
//! This crate contains the portfolio balancing pipeline: annotating a value
//! tree with percentage shares, resolving a desired-allocation tree into
//! target amounts, diffing current against target into buy/sell/hold nodes,
//! and flattening the diff into an ordered list of trade operations.
//! Editors and renderers are external collaborators that consume these
//! structures read-only and re-enter the pipeline with full replacement
//! trees.

pub mod assets;
pub mod constants;
pub mod errors;
pub mod portfolio;
pub mod utils;

// Re-export common types from asset and portfolio modules
pub use assets::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
