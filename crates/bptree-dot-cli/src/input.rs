//! Load tree descriptions from YAML files or stdin.

use anyhow::{Context, Result};
use bptree_dot::TreeDocument;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read and parse a document from `path`, or from stdin when `path` is
/// absent or `-`.
pub fn load_document(path: Option<&Path>) -> Result<TreeDocument> {
    let (source, text) = match path {
        Some(p) if p != Path::new("-") => {
            let text = std::fs::read_to_string(p)
                .with_context(|| format!("failed to read {}", p.display()))?;
            (p.display().to_string(), text)
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            ("<stdin>".to_string(), text)
        }
    };
    debug!(source = %source, bytes = text.len(), "read tree description");

    parse_document(&text).with_context(|| format!("failed to parse {source}"))
}

/// Parse a YAML (or JSON) tree description.
pub fn parse_document(text: &str) -> Result<TreeDocument> {
    let document: TreeDocument = serde_yaml::from_str(text)?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bptree_dot::{BlockDescription, Key};

    #[test]
    fn test_parse_yaml_document() {
        let yaml = r#"
keys_per_block: 2
tree:
  keys: [13, 30]
  children:
    - [2, 5]
    - ~
    - keys: [33]
"#;
        let document = parse_document(yaml).unwrap();
        assert_eq!(document.keys_per_block, 2);
        let root = document.into_root().unwrap().unwrap();
        assert_eq!(root.keys, vec![Key::from("13"), Key::from("30")]);
        assert_eq!(root.children[0], Some(BlockDescription::leaf(["2", "5"])));
        assert_eq!(root.children[1], None);
        assert_eq!(root.children[2], Some(BlockDescription::leaf(["33"])));
    }

    #[test]
    fn test_parse_accepts_json() {
        let document = parse_document(r#"{"keys_per_block": 1, "tree": ["a"]}"#).unwrap();
        assert_eq!(document.keys_per_block, 1);
    }

    #[test]
    fn test_missing_keys_per_block() {
        assert!(parse_document("tree: [a]").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_document(Some(dir.path().join("missing.yaml").as_path())).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tree.yaml");
        std::fs::write(&path, "keys_per_block: 3\ntree: [a, b, c]\n").unwrap();
        let document = load_document(Some(path.as_path())).unwrap();
        assert_eq!(document.keys_per_block, 3);
    }
}
