//! Target value resolution over desired-allocation trees.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::AssetNode;

/// Resolves a desired-allocation tree into concrete target amounts.
///
/// The root resolves to the current tree's root value, the total capital
/// being allocated. Each child then resolves to
/// `desired_percentage * parent_resolved / 100`, top-down, so the amount
/// resolved at every level becomes the base for the level below. A missing
/// `desired_percentage` allocates nothing. Sibling percentages are taken as
/// stated: a level summing under 100 leaves the remainder un-invested, one
/// summing over 100 is over-allocated, and neither is an error.
pub fn resolve_target_values(current_root: &AssetNode, desired_root: &AssetNode) -> AssetNode {
    let total_value = current_root.value;

    let mut resolved = desired_root.clone();
    resolved.value = total_value;
    resolved.children = desired_root.children.as_ref().map(|children| {
        children
            .iter()
            .map(|child| resolve_node(child, total_value))
            .collect()
    });
    resolved
}

fn resolve_node(node: &AssetNode, parent_value: Decimal) -> AssetNode {
    let value = node.desired_percentage.unwrap_or(Decimal::ZERO) * parent_value / dec!(100);

    let mut resolved = node.clone();
    resolved.value = value;
    resolved.children = node.children.as_ref().map(|children| {
        children
            .iter()
            .map(|child| resolve_node(child, value))
            .collect()
    });
    resolved
}
