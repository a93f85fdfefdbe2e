pub mod format_utils;

pub use format_utils::*;
