//! Asset tree module - node model and flat-list reconstruction.

mod assets_model;
mod tree_builder;

#[cfg(test)]
mod assets_model_tests;


// Re-export the public interface
pub use assets_model::{AssetNode, TradeAction};
pub use tree_builder::build_tree;
