//! DOT generation from a [`BPlusTree`].
//!
//! Three fragments are produced independently and then assembled:
//! node definitions ([`node`]), parent to child edges ([`edges`]) and leaf
//! cross edges ([`cross`]).

pub mod cross;
pub mod edges;
pub mod node;
pub mod template;

use crate::error::Result;
use crate::options::RenderOptions;
use crate::tree::BPlusTree;
use serde::Serialize;
use tracing::debug;

pub use template::node_name;

/// The generated fragments of one graph, each in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotGraph {
    pub keys_per_block: usize,
    pub nodes: Vec<String>,
    pub parent_child_edges: Vec<String>,
    pub cross_edges: Vec<String>,
}

/// Counts describing a generated graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    pub keys_per_block: usize,
    pub blocks: usize,
    pub parent_child_edges: usize,
    pub cross_edges: usize,
}

impl DotGraph {
    /// Generate every fragment for `tree`.
    pub fn generate(tree: &BPlusTree, options: &RenderOptions) -> Result<Self> {
        let graph = Self {
            keys_per_block: tree.keys_per_block(),
            nodes: node::generate_nodes(tree, options),
            parent_child_edges: edges::generate_parent_child_edges(tree)?,
            cross_edges: cross::generate_cross_edges(tree)?,
        };
        debug!(
            nodes = graph.nodes.len(),
            parent_child_edges = graph.parent_child_edges.len(),
            cross_edges = graph.cross_edges.len(),
            "generated dot fragments"
        );
        Ok(graph)
    }

    /// Assemble the final document.
    pub fn render(&self) -> String {
        template::graph_document(
            &template::indent(&self.nodes.join("\n"), template::NODES_INDENT),
            &template::indent(&self.parent_child_edges.join("\n"), template::EDGES_INDENT),
            &template::indent(&self.cross_edges.join("\n"), template::EDGES_INDENT),
        )
    }

    pub fn summary(&self) -> GraphSummary {
        GraphSummary {
            keys_per_block: self.keys_per_block,
            blocks: self.nodes.len(),
            parent_child_edges: self.parent_child_edges.len(),
            cross_edges: self.cross_edges.len(),
        }
    }
}

/// Generate the DOT document for `tree` in one call.
pub fn generate_dot_graph(tree: &BPlusTree, options: &RenderOptions) -> Result<String> {
    Ok(DotGraph::generate(tree, options)?.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::description::{BlockDescription, TreeDocument};

    fn tree_from_json(json: &str) -> BPlusTree {
        let document: TreeDocument = serde_json::from_str(json).unwrap();
        BPlusTree::from_document(document).unwrap()
    }

    fn generate(json: &str) -> DotGraph {
        DotGraph::generate(&tree_from_json(json), &RenderOptions::default()).unwrap()
    }

    #[test]
    fn test_flat_leaf() {
        let graph = generate(r#"{"keys_per_block": 3, "tree": ["a", "b", "c"]}"#);
        assert_eq!(graph.nodes.len(), 1);
        let node = &graph.nodes[0];
        assert_eq!(node.matches("port=\"connector").count(), 4);
        assert_eq!(node.matches("port=\"key").count(), 3);
        assert!(node.contains(r#"<td port="key0">a</td>"#));
        assert!(node.contains(r#"<td port="key1">b</td>"#));
        assert!(node.contains(r#"<td port="key2">c</td>"#));
        assert!(graph.parent_child_edges.is_empty());
        assert!(graph.cross_edges.is_empty());
    }

    #[test]
    fn test_odd_keys_two_leaves() {
        let graph = generate(
            r#"{"keys_per_block": 1,
                "tree": {"keys": ["m"], "children": [["d"], ["m"]]}}"#,
        );
        assert_eq!(
            graph.parent_child_edges,
            vec![
                r#""block":"connector0" -> "block0":"key0""#,
                r#""block":"connector1" -> "block1":"key0""#,
            ]
        );
        assert_eq!(
            graph.cross_edges,
            vec![r#""block0":"connector1" -> "block1":"connector0" [constraint=false]"#]
        );
    }

    #[test]
    fn test_even_keys_omitted_middle_child() {
        let graph = generate(
            r#"{"keys_per_block": 2,
                "tree": {"keys": [10, 20], "children": [[1, 5], null, [20, 25]]}}"#,
        );
        assert_eq!(
            graph.parent_child_edges,
            vec![
                r#""block":"connector0" -> "block0":"connector1""#,
                r#""block":"connector1" -> "block2":"connector1""#,
            ]
        );
        assert!(graph.cross_edges.is_empty());
    }

    #[test]
    fn test_empty_root_block() {
        let graph = generate(r#"{"keys_per_block": 2, "tree": {"keys": []}}"#);
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.nodes[0].matches(">_</td>").count(), 2);
        assert!(graph.parent_child_edges.is_empty());
        assert!(graph.cross_edges.is_empty());
    }

    #[test]
    fn test_render_document() {
        let root = BlockDescription::with_children(
            ["m"],
            vec![
                Some(BlockDescription::leaf(["d"])),
                Some(BlockDescription::leaf(["m"])),
            ],
        );
        let tree = BPlusTree::new(1, Some(&root)).unwrap();
        let dot = generate_dot_graph(&tree, &RenderOptions::default()).unwrap();

        let node = |name: &str, key: &str| {
            format!(
                r#"    "{name}"
    [
        shape = none
        label = <<table border="1" cellborder="0" cellspacing="0">
                    <tr>
                        <td port="connector0"></td>
                        <td port="key0">{key}</td>
                        <td port="connector1"></td>
                    </tr>
                </table>>
    ]"#
            )
        };
        let expected = format!(
            "digraph G\n{{\n    splines=false\n{}\n{}\n{}\n\n{}\n{}\n\n{}\n}}",
            node("block", "m"),
            node("block0", "d"),
            node("block1", "m"),
            r#"    "block":"connector0" -> "block0":"key0""#,
            r#"    "block":"connector1" -> "block1":"key0""#,
            r#"    "block0":"connector1" -> "block1":"connector0" [constraint=false]"#,
        );
        assert_eq!(dot, expected);
    }

    #[test]
    fn test_render_empty_tree() {
        let tree = BPlusTree::new(2, None).unwrap();
        let dot = generate_dot_graph(&tree, &RenderOptions::default()).unwrap();
        assert_eq!(dot, "digraph G\n{\n    splines=false\n    \n\n    \n\n    \n}");
    }

    #[test]
    fn test_generation_is_deterministic() {
        let json = r#"{"keys_per_block": 2,
            "tree": {"keys": [30, 60], "children": [
                {"keys": [10, 20], "children": [[1, 5], [10, 15], [20, 25]]},
                null,
                {"keys": [70], "children": [[60, 65], [70, 80]]}]}}"#;
        let first = generate_dot_graph(&tree_from_json(json), &RenderOptions::default()).unwrap();
        let second = generate_dot_graph(&tree_from_json(json), &RenderOptions::default()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_summary() {
        let graph = generate(
            r#"{"keys_per_block": 2,
                "tree": {"keys": [30, 60], "children": [
                    {"keys": [10, 20], "children": [[1, 5], [10, 15], [20, 25]]},
                    null,
                    {"keys": [70], "children": [[60, 65], [70, 80]]}]}}"#,
        );
        assert_eq!(
            graph.summary(),
            GraphSummary {
                keys_per_block: 2,
                blocks: 8,
                parent_child_edges: 7,
                cross_edges: 3,
            }
        );
    }
}
