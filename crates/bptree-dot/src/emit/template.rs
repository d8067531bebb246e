//! DOT text templates, port names and string helpers shared by the emitters.

use crate::tree::BlockAddress;

pub(crate) const NODES_INDENT: usize = 4;
pub(crate) const EDGES_INDENT: usize = 4;
pub(crate) const CELL_INDENT: usize = 20;

/// The whole document around the three generated fragments.
pub(crate) fn graph_document(nodes: &str, parent_child_edges: &str, cross_edges: &str) -> String {
    format!(
        "digraph G\n{{\n    splines=false\n{nodes}\n\n{parent_child_edges}\n\n{cross_edges}\n}}"
    )
}

/// One block as an HTML-like table node.
pub(crate) fn node_definition(name: &str, cells: &str) -> String {
    format!(
        r#""{name}"
[
    shape = none
    label = <<table border="1" cellborder="0" cellspacing="0">
                <tr>
{cells}
                </tr>
            </table>>
]"#
    )
}

pub(crate) fn connector_cell(number: usize) -> String {
    format!(r#"<td port="{}"></td>"#, connector_port(number))
}

pub(crate) fn key_cell(number: usize, content: &str) -> String {
    format!(r#"<td port="{}">{content}</td>"#, key_port(number))
}

pub(crate) fn parent_child_edge(
    src_node: &str,
    src_port: &str,
    dst_node: &str,
    dst_port: &str,
) -> String {
    format!(r#""{src_node}":"{src_port}" -> "{dst_node}":"{dst_port}""#)
}

/// Leaf links must not pull on the hierarchical layout.
pub(crate) fn cross_edge(src_node: &str, src_port: &str, dst_node: &str, dst_port: &str) -> String {
    format!(r#""{src_node}":"{src_port}" -> "{dst_node}":"{dst_port}" [constraint=false]"#)
}

pub(crate) fn connector_port(number: usize) -> String {
    format!("connector{number}")
}

pub(crate) fn key_port(number: usize) -> String {
    format!("key{number}")
}

/// DOT node name for a block: `block` followed by the dotted path.
pub fn node_name(address: &BlockAddress) -> String {
    let path: Vec<String> = address.components().iter().map(ToString::to_string).collect();
    format!("block{}", path.join("."))
}

/// Prefix every line of `text` with `num_spaces` spaces.
pub(crate) fn indent(text: &str, num_spaces: usize) -> String {
    let prefix = " ".repeat(num_spaces);
    let mut out = String::with_capacity(text.len() + prefix.len());
    out.push_str(&prefix);
    out.push_str(&text.replace('\n', &format!("\n{prefix}")));
    out
}

/// Escape text for use inside an HTML-like label.
pub(crate) fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
