//! Resolution of desired-allocation trees into target amounts.

mod target_calculator;

pub use target_calculator::*;
