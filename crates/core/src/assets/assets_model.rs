//! Asset tree domain models.

use std::collections::HashSet;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{Result, TreeError, ValidationError};

/// Trade direction carried by diff-tree nodes and flattened operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeAction {
    Buy,
    Sell,
    Hold,
}

impl TradeAction {
    /// Classifies a signed value difference (desired minus current).
    pub fn from_diff(diff: Decimal) -> Self {
        if diff > Decimal::ZERO {
            TradeAction::Buy
        } else if diff < Decimal::ZERO {
            TradeAction::Sell
        } else {
            TradeAction::Hold
        }
    }

    /// Returns the string representation of this action.
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeAction::Buy => "buy",
            TradeAction::Sell => "sell",
            TradeAction::Hold => "hold",
        }
    }
}

impl std::fmt::Display for TradeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One node of a portfolio tree: a single asset or an asset group.
///
/// The same shape serves three tree kinds. Value trees populate `value`;
/// desired-allocation trees populate `desired_percentage` and leave `value`
/// at zero until resolved; diff trees populate `operation` and store the
/// trade magnitude in `value`. Fields that do not apply to a given kind stay
/// `None` and serialize to nothing, so renderers see only what is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetNode {
    /// Unique across the whole tree and stable across edits; the join key
    /// between the current, desired and diff trees.
    pub id: String,
    /// Display label, not required to be unique.
    pub name: String,
    /// Current amount in `quote_id` units; the trade magnitude on diff nodes.
    pub value: Decimal,
    /// Currency/quote label (e.g. "USD", "BTC"), informally inherited by
    /// children when absent. Opaque to the pipeline; no conversion happens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_id: Option<String>,
    /// Computed share (0-100) of the parent's children total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percentage: Option<Decimal>,
    /// User-specified share (0-100) of the parent's resolved target value.
    /// Input only, never computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_percentage: Option<Decimal>,
    /// Back-reference used by flattened representations; children vectors
    /// are authoritative for traversal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Child assets. `None` and an empty vector both mean leaf.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<AssetNode>>,
    /// Present only on diff-tree nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<TradeAction>,
}

impl AssetNode {
    /// Creates a leaf node with a freshly generated id.
    ///
    /// Editors use this for newly added assets; ids of existing nodes are
    /// never regenerated, since lookups and tree joins key on them.
    pub fn new(name: impl Into<String>, value: Decimal) -> Self {
        AssetNode {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            value,
            quote_id: None,
            percentage: None,
            desired_percentage: None,
            parent_id: None,
            children: None,
            operation: None,
        }
    }

    /// A node without children is a leaf; an empty children vector counts
    /// as absent.
    pub fn is_leaf(&self) -> bool {
        self.child_nodes().is_empty()
    }

    /// The node's children as a slice; absent children read as empty.
    pub fn child_nodes(&self) -> &[AssetNode] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Depth-first lookup by id.
    pub fn find_by_id(&self, id: &str) -> Option<&AssetNode> {
        if self.id == id {
            return Some(self);
        }
        self.child_nodes()
            .iter()
            .find_map(|child| child.find_by_id(id))
    }

    /// Enforces the tree invariants on pipeline re-entry: unique ids,
    /// non-negative values, desired percentages within 0-100.
    ///
    /// Sibling percentage sums are not checked; under- and over-allocation
    /// are pass-through user input, not errors.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        self.validate_node(&mut seen)
    }

    fn validate_node<'a>(&'a self, seen: &mut HashSet<&'a str>) -> Result<()> {
        if !seen.insert(self.id.as_str()) {
            return Err(TreeError::DuplicateId(self.id.clone()).into());
        }
        if self.value < Decimal::ZERO {
            return Err(ValidationError::NegativeValue {
                id: self.id.clone(),
                value: self.value,
            }
            .into());
        }
        if let Some(pct) = self.desired_percentage {
            if !(Decimal::ZERO..=dec!(100)).contains(&pct) {
                return Err(ValidationError::PercentageOutOfRange {
                    id: self.id.clone(),
                    value: pct,
                }
                .into());
            }
        }
        for child in self.child_nodes() {
            child.validate_node(seen)?;
        }
        Ok(())
    }
}
