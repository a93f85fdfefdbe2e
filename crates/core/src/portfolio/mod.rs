//! Portfolio computation pipeline.
//!
//! Four pure stages over in-memory asset trees, composed in strict forward
//! order: percentage annotation, target value resolution, diff construction,
//! and operation flattening. Each stage takes tree snapshots and returns a
//! freshly built tree; nothing is mutated in place and no partial result is
//! ever observable.

pub mod allocation;
pub mod rebalance;
pub mod targets;

pub use allocation::*;
pub use rebalance::*;
pub use targets::*;
