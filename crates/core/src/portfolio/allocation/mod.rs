//! Percentage annotation for value trees.

mod allocation_calculator;

pub use allocation_calculator::*;
