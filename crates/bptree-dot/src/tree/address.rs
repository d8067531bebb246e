//! Block addresses: the path of child numbers from the root to a block.

use std::fmt;

/// Position of a block in the tree.
///
/// The empty path is the root; appending `i` selects the `i`-th child. Two
/// blocks are the same block iff their addresses are equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockAddress(Vec<usize>);

impl BlockAddress {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn components(&self) -> &[usize] {
        &self.0
    }

    /// Child number within the parent, `None` for the root.
    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    pub fn parent(&self) -> Option<Self> {
        let (_, init) = self.0.split_last()?;
        Some(Self(init.to_vec()))
    }

    /// Address of the `n`-th child. No range check; see `BPlusTree::nth_child`.
    pub(crate) fn with_child(&self, n: usize) -> Self {
        let mut path = Vec::with_capacity(self.0.len() + 1);
        path.extend_from_slice(&self.0);
        path.push(n);
        Self(path)
    }
}

impl From<Vec<usize>> for BlockAddress {
    fn from(path: Vec<usize>) -> Self {
        Self(path)
    }
}

impl From<&[usize]> for BlockAddress {
    fn from(path: &[usize]) -> Self {
        Self(path.to_vec())
    }
}

impl fmt::Display for BlockAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("root");
        }
        for (i, n) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{n}")?;
        }
        Ok(())
    }
}
