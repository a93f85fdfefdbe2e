//! Rebalancing domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::assets::{AssetNode, TradeAction};

/// One executable leaf-level trade, flattened out of a diff tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeOperation {
    /// Id of the diff-tree leaf this trade came from.
    pub id: String,
    /// Path of node names from the root, joined with " / ".
    pub name: String,
    pub current_value: Decimal,
    pub target_value: Decimal,
    /// Trade magnitude; the direction is carried by `operation`.
    pub diff_value: Decimal,
    pub operation: TradeAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_id: Option<String>,
}

/// The trees of one balancing run.
///
/// Replaced wholesale on every edit or recompute; there is no incremental
/// update model. `diff` stays unset until the first recompute and is simply
/// overwritten afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioState {
    /// Current holdings by value.
    pub current: AssetNode,
    /// Desired allocation by percentage.
    pub desired: AssetNode,
    /// Last computed diff between the two.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<AssetNode>,
}

impl PortfolioState {
    /// Creates a state with no computed diff.
    pub fn new(current: AssetNode, desired: AssetNode) -> Self {
        PortfolioState {
            current,
            desired,
            diff: None,
        }
    }
}
