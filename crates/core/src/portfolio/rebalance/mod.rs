//! Rebalancing module - diff trees and executable operation lists.

mod diff_calculator;
mod operations_calculator;
mod rebalance_model;
mod rebalance_service;

pub use diff_calculator::*;
pub use operations_calculator::*;
pub use rebalance_model::*;
