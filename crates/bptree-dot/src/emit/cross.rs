//! Cross edges between neighbouring leaves.
//!
//! Leaves are linked left to right. Because subtrees may be left out of the
//! input, the bottom level is not one continuous row: a block that its
//! parent's key count says should exist but that was not drawn is a hole,
//! and no edge may jump over it. Undrawn addresses that were never expected
//! (beyond the parent's children) are simply stepped over.

use crate::emit::template;
use crate::error::Result;
use crate::tree::{BPlusTree, BlockAddress};

/// Leftmost address on the deepest drawn level.
///
/// Descends through child 0 as many times as the tree is deep; the result
/// may itself be undrawn.
fn leftmost_at_max_level(tree: &BPlusTree) -> Result<BlockAddress> {
    let mut index = tree.root_index();
    for _ in 0..tree.depth(&index) {
        index = tree.nth_child(&index, 0)?;
    }
    Ok(index)
}

/// First drawn block at or to the right of `index`.
fn next_drawn(tree: &BPlusTree, mut index: Option<BlockAddress>) -> Result<Option<BlockAddress>> {
    while let Some(current) = index {
        if tree.lookup(&current)?.is_some() {
            return Ok(Some(current));
        }
        index = tree.right_sibling(&current);
    }
    Ok(None)
}

/// Drawn blocks reachable from `start` without crossing a hole.
pub fn find_adjacent_leaves(tree: &BPlusTree, start: BlockAddress) -> Result<Vec<BlockAddress>> {
    let mut run = Vec::new();
    let mut index = Some(start);
    while let Some(current) = index {
        if tree.lookup(&current)?.is_some() {
            index = tree.right_sibling(&current);
            run.push(current);
        } else if tree.was_omitted(&current)? {
            break;
        } else {
            index = tree.right_sibling(&current);
        }
    }
    Ok(run)
}

/// All runs of linked leaves, left to right.
pub fn leaf_runs(tree: &BPlusTree) -> Result<Vec<Vec<BlockAddress>>> {
    let mut runs = Vec::new();
    let mut index = next_drawn(tree, Some(leftmost_at_max_level(tree)?))?;
    while let Some(start) = index {
        let run = find_adjacent_leaves(tree, start)?;
        let resume = run.last().and_then(|last| tree.right_sibling(last));
        runs.push(run);
        index = next_drawn(tree, resume)?;
    }
    Ok(runs)
}

/// Cross edges from each leaf's last connector to its neighbour's first.
pub fn generate_cross_edges(tree: &BPlusTree) -> Result<Vec<String>> {
    let left_port = template::connector_port(0);
    let right_port = template::connector_port(tree.keys_per_block());

    let edges = leaf_runs(tree)?
        .iter()
        .flat_map(|run| run.windows(2))
        .map(|pair| {
            template::cross_edge(
                &template::node_name(&pair[0]),
                &right_port,
                &template::node_name(&pair[1]),
                &left_port,
            )
        })
        .collect();
    Ok(edges)
}
