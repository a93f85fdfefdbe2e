//! Diff construction between current and target value trees.

use rust_decimal::Decimal;

use crate::assets::{AssetNode, TradeAction};
use crate::errors::{DiffError, Result};

/// Builds the buy/sell/hold tree between a current value tree and a
/// resolved target tree.
///
/// The trees must be structurally aligned: children are paired positionally,
/// and a count or id divergence at any position aborts the diff (no
/// truncation, no padding, no re-alignment by id). For each aligned pair the
/// diff node stores the trade magnitude in `value`, the direction in
/// `operation`, and the absolute allocation drift in `percentage`; absent
/// percentages read as zero. Nodes explicitly quoted in different currencies
/// cannot be diffed.
pub fn build_diff(current: &AssetNode, desired: &AssetNode) -> Result<AssetNode> {
    if current.id != desired.id {
        return Err(DiffError::NodeIdMismatch {
            position: 0,
            current_id: current.id.clone(),
            desired_id: desired.id.clone(),
        }
        .into());
    }
    diff_node(current, desired)
}

fn diff_node(current: &AssetNode, desired: &AssetNode) -> Result<AssetNode> {
    let quote_id = match (&current.quote_id, &desired.quote_id) {
        (Some(c), Some(d)) if c != d => {
            return Err(DiffError::QuoteMismatch {
                id: current.id.clone(),
                current: c.clone(),
                desired: d.clone(),
            }
            .into());
        }
        (Some(c), _) => Some(c.clone()),
        (None, d) => d.clone(),
    };

    let diff_value = desired.value - current.value;
    let drift = (desired.percentage.unwrap_or(Decimal::ZERO)
        - current.percentage.unwrap_or(Decimal::ZERO))
    .abs();

    let current_children = current.child_nodes();
    let desired_children = desired.child_nodes();
    if current_children.len() != desired_children.len() {
        return Err(DiffError::ChildCountMismatch {
            id: current.id.clone(),
            current: current_children.len(),
            desired: desired_children.len(),
        }
        .into());
    }

    let children = if current_children.is_empty() {
        None
    } else {
        let mut paired = Vec::with_capacity(current_children.len());
        for (position, (c, d)) in current_children.iter().zip(desired_children).enumerate() {
            if c.id != d.id {
                return Err(DiffError::NodeIdMismatch {
                    position,
                    current_id: c.id.clone(),
                    desired_id: d.id.clone(),
                }
                .into());
            }
            paired.push(diff_node(c, d)?);
        }
        Some(paired)
    };

    Ok(AssetNode {
        id: current.id.clone(),
        name: current.name.clone(),
        value: diff_value.abs(),
        quote_id,
        percentage: Some(drift),
        desired_percentage: None,
        parent_id: current.parent_id.clone(),
        children,
        operation: Some(TradeAction::from_diff(diff_value)),
    })
}
