//! Orchestration of the balancing pipeline over a portfolio state.

use log::debug;

use crate::assets::AssetNode;
use crate::errors::Result;
use crate::portfolio::allocation::annotate_percentages;
use crate::portfolio::targets::resolve_target_values;

use super::{build_diff, flatten_operations, PortfolioState, TradeOperation};

impl PortfolioState {
    /// Runs the full pipeline and returns the recomputed state: the current
    /// tree annotated with percentages, the desired tree resolved into
    /// target amounts, and the diff between the two.
    ///
    /// Both trees are validated against the tree invariants first. The
    /// inputs are never mutated, and the returned state is complete;
    /// consumers never observe a mix of old and new trees.
    pub fn rebalanced(&self) -> Result<PortfolioState> {
        self.current.validate()?;
        self.desired.validate()?;

        let current = annotate_percentages(&self.current);
        let desired = resolve_target_values(&self.current, &self.desired);
        let diff = build_diff(&current, &desired)?;

        debug!(
            "rebalanced portfolio '{}' (total value {})",
            current.name, current.value
        );

        Ok(PortfolioState {
            current,
            desired,
            diff: Some(diff),
        })
    }

    /// Replaces the current tree with an editor submission and recomputes,
    /// as one step.
    pub fn with_current(&self, current: AssetNode) -> Result<PortfolioState> {
        PortfolioState::new(current, self.desired.clone()).rebalanced()
    }

    /// Replaces the desired tree with an editor submission and recomputes,
    /// as one step.
    pub fn with_desired(&self, desired: AssetNode) -> Result<PortfolioState> {
        PortfolioState::new(self.current.clone(), desired).rebalanced()
    }

    /// Flattens the last computed diff into the ordered trade list.
    ///
    /// Empty when no diff has been computed yet.
    pub fn operations(&self) -> Vec<TradeOperation> {
        match &self.diff {
            Some(diff) => flatten_operations(diff, &self.current, &self.desired),
            None => Vec::new(),
        }
    }
}
