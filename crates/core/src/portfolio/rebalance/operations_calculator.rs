//! Flattening of diff trees into ordered trade lists.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::assets::{AssetNode, TradeAction};

use super::TradeOperation;

/// Flattens a diff tree into the list of leaf-level trades, largest first.
///
/// Group nodes are never reported; only actionable leaves are. Leaves
/// holding, or with a zero magnitude, are omitted entirely rather than
/// listed as no-ops. Current and target amounts are recovered from the
/// source trees by id, with a missing id reading as zero. The quote label
/// comes from the diff node, falling back to the current then desired
/// node's. The result is sorted by descending trade magnitude; ties keep
/// the order the leaves were discovered in.
pub fn flatten_operations(
    diff_tree: &AssetNode,
    current_tree: &AssetNode,
    desired_tree: &AssetNode,
) -> Vec<TradeOperation> {
    let current_by_id = index_by_id(current_tree);
    let desired_by_id = index_by_id(desired_tree);

    let mut operations = Vec::new();
    let mut path = Vec::new();
    collect_leaf_operations(
        diff_tree,
        &mut path,
        &current_by_id,
        &desired_by_id,
        &mut operations,
    );

    operations.sort_by(|a, b| b.diff_value.cmp(&a.diff_value));
    operations
}

/// Depth-first id index over a tree, for constant-time lookups while
/// walking the diff.
fn index_by_id(tree: &AssetNode) -> HashMap<&str, &AssetNode> {
    let mut map = HashMap::new();
    index_node(tree, &mut map);
    map
}

fn index_node<'a>(node: &'a AssetNode, map: &mut HashMap<&'a str, &'a AssetNode>) {
    map.insert(node.id.as_str(), node);
    for child in node.child_nodes() {
        index_node(child, map);
    }
}

fn collect_leaf_operations<'a>(
    node: &'a AssetNode,
    path: &mut Vec<&'a str>,
    current_by_id: &HashMap<&str, &AssetNode>,
    desired_by_id: &HashMap<&str, &AssetNode>,
    operations: &mut Vec<TradeOperation>,
) {
    path.push(node.name.as_str());

    if node.is_leaf() {
        let operation = node.operation.unwrap_or(TradeAction::Hold);
        if operation != TradeAction::Hold && node.value != Decimal::ZERO {
            let current = current_by_id.get(node.id.as_str()).copied();
            let desired = desired_by_id.get(node.id.as_str()).copied();

            operations.push(TradeOperation {
                id: node.id.clone(),
                name: path.join(" / "),
                current_value: current.map(|n| n.value).unwrap_or(Decimal::ZERO),
                target_value: desired.map(|n| n.value).unwrap_or(Decimal::ZERO),
                diff_value: node.value,
                operation,
                quote_id: node
                    .quote_id
                    .clone()
                    .or_else(|| current.and_then(|n| n.quote_id.clone()))
                    .or_else(|| desired.and_then(|n| n.quote_id.clone())),
            });
        }
    } else {
        for child in node.child_nodes() {
            collect_leaf_operations(child, path, current_by_id, desired_by_id, operations);
        }
    }

    path.pop();
}
