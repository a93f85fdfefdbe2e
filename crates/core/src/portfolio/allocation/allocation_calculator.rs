//! Percentage annotation over value trees.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::AssetNode;

/// Annotates every child node with its percentage share of the sibling
/// total, recursively at each level.
///
/// A child's share is `100 * value / sum(sibling values)`, computed against
/// its own level's sibling sum only; the parent's stated value does not
/// participate, so an un-invested remainder at a group level never skews the
/// children. A sibling total of zero resolves the whole group to 0%. The
/// root gains no percentage (it has no siblings). The input tree is left
/// untouched.
pub fn annotate_percentages(node: &AssetNode) -> AssetNode {
    let mut annotated = node.clone();

    if let Some(children) = &node.children {
        let total: Decimal = children.iter().map(|child| child.value).sum();

        annotated.children = Some(
            children
                .iter()
                .map(|child| {
                    let mut annotated_child = annotate_percentages(child);
                    annotated_child.percentage = Some(if total > Decimal::ZERO {
                        child.value / total * dec!(100)
                    } else {
                        Decimal::ZERO
                    });
                    annotated_child
                })
                .collect(),
        );
    }

    annotated
}
