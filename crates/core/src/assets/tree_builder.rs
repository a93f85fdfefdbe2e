//! Reconstruction of an asset tree from a flat `parent_id`-linked list.

use std::collections::{HashMap, HashSet};

use log::warn;

use crate::assets::AssetNode;
use crate::errors::{Result, TreeError};

/// Builds a tree from a flat list of nodes linked by `parent_id`.
///
/// Exactly one item must be parentless; it becomes the root. The remaining
/// items attach to their parent in input order. Items whose `parent_id`
/// matches nothing in the list are dropped with a warning. Any `children`
/// already present on input items are discarded; the flat links are
/// authoritative here.
///
/// No partial tree is ever returned: a missing or ambiguous root, or a
/// duplicated id, fails the whole construction.
pub fn build_tree(items: Vec<AssetNode>) -> Result<AssetNode> {
    let mut ids = HashSet::new();
    for item in &items {
        if !ids.insert(item.id.clone()) {
            return Err(TreeError::DuplicateId(item.id.clone()).into());
        }
    }

    let mut roots = Vec::new();
    let mut by_parent: HashMap<String, Vec<AssetNode>> = HashMap::new();
    for mut item in items {
        item.children = None;
        match item.parent_id.clone() {
            None => roots.push(item),
            Some(parent_id) => by_parent.entry(parent_id).or_default().push(item),
        }
    }

    let mut root = match roots.len() {
        0 => return Err(TreeError::MissingRoot.into()),
        1 => roots.remove(0),
        n => return Err(TreeError::MultipleRoots(n).into()),
    };

    attach_children(&mut root, &mut by_parent);

    for (parent_id, orphans) in &by_parent {
        for orphan in orphans {
            warn!(
                "dropping node '{}' ('{}'): parent '{}' not found in the flat list",
                orphan.id, orphan.name, parent_id
            );
        }
    }

    Ok(root)
}

fn attach_children(node: &mut AssetNode, by_parent: &mut HashMap<String, Vec<AssetNode>>) {
    if let Some(mut children) = by_parent.remove(&node.id) {
        for child in &mut children {
            attach_children(child, by_parent);
        }
        node.children = Some(children);
    }
}
