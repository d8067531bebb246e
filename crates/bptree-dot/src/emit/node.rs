//! Node definitions: one table-shaped node per drawn block.

use crate::description::Key;
use crate::emit::template::{self, CELL_INDENT};
use crate::options::RenderOptions;
use crate::tree::{BPlusTree, BlockAddress};
use tracing::warn;

/// Table cells for one block, alternating connectors and keys.
///
/// Short blocks are padded with the placeholder so every slot is drawn.
/// Over-full blocks are cut to capacity.
pub fn node_cells(
    tree: &BPlusTree,
    address: &BlockAddress,
    keys: &[Key],
    options: &RenderOptions,
) -> Vec<String> {
    let capacity = tree.keys_per_block();
    if keys.len() > capacity {
        warn!(
            block = %address,
            keys = keys.len(),
            capacity,
            "block has more keys than keys_per_block, extra keys are not drawn"
        );
    }

    let mut cells = Vec::with_capacity(2 * capacity + 1);
    for i in 0..capacity {
        let content = match keys.get(i) {
            Some(key) if options.escape_keys => template::escape_html(key.as_str()),
            Some(key) => key.to_string(),
            None => options.placeholder.clone(),
        };
        cells.push(template::connector_cell(i));
        cells.push(template::key_cell(i, &content));
    }
    cells.push(template::connector_cell(capacity));
    cells
}

/// The full DOT node for one block.
pub fn dot_node(
    tree: &BPlusTree,
    address: &BlockAddress,
    keys: &[Key],
    options: &RenderOptions,
) -> String {
    let cells = node_cells(tree, address, keys, options).join("\n");
    template::node_definition(
        &template::node_name(address),
        &template::indent(&cells, CELL_INDENT),
    )
}

/// Node definitions for every drawn block, in construction order.
pub fn generate_nodes(tree: &BPlusTree, options: &RenderOptions) -> Vec<String> {
    tree.all_blocks()
        .map(|(address, keys)| dot_node(tree, address, keys, options))
        .collect()
}
