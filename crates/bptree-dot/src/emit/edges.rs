//! Parent to child edges.

use crate::emit::template;
use crate::error::Result;
use crate::tree::{BPlusTree, BlockAddress};

/// Port every incoming parent edge points at.
///
/// With an odd key count the middle key sits in the center of the table,
/// with an even count the middle connector does.
pub fn middle_port(keys_per_block: usize) -> String {
    if keys_per_block % 2 != 0 {
        template::key_port(keys_per_block / 2)
    } else {
        template::connector_port((keys_per_block + 1) / 2)
    }
}

/// Edges for the drawn subtree below the root, in pre-order.
pub fn generate_parent_child_edges(tree: &BPlusTree) -> Result<Vec<String>> {
    let mut edges = Vec::new();
    let dst_port = middle_port(tree.keys_per_block());
    collect_edges(tree, &tree.root_index(), &dst_port, &mut edges)?;
    Ok(edges)
}

/// Connectors are numbered over drawn children only, so a parent with an
/// undrawn first child still starts at `connector0`.
fn collect_edges(
    tree: &BPlusTree,
    index: &BlockAddress,
    dst_port: &str,
    edges: &mut Vec<String>,
) -> Result<()> {
    if tree.lookup(index)?.is_none() {
        return Ok(());
    }
    let src_node = template::node_name(index);
    let mut connector = 0;
    for child in tree.children(index) {
        if tree.lookup(&child)?.is_none() {
            continue;
        }
        edges.push(template::parent_child_edge(
            &src_node,
            &template::connector_port(connector),
            &template::node_name(&child),
            dst_port,
        ));
        connector += 1;
        collect_edges(tree, &child, dst_port, edges)?;
    }
    Ok(())
}
