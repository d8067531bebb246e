//! The tree model: blocks stored by address, relationships derived from paths.

use crate::description::{BlockDescription, Key, TreeDocument};
use crate::error::{Result, TreeError};
use crate::tree::address::BlockAddress;
use std::collections::HashMap;
use tracing::debug;

/// Largest `keys_per_block` a tree accepts.
pub const MAX_KEYS_PER_BLOCK: usize = 4096;

/// A B+ tree with possibly omitted subtrees.
///
/// Blocks are kept in construction (pre-order) order with a hash index from
/// address to slot. No block refers to another; parent, child and sibling
/// queries are pure arithmetic on addresses.
#[derive(Debug, Clone)]
pub struct BPlusTree {
    keys_per_block: usize,
    blocks: Vec<(BlockAddress, Vec<Key>)>,
    slots: HashMap<BlockAddress, usize>,
}

impl BPlusTree {
    /// Build a tree from a normalized root description.
    pub fn new(keys_per_block: usize, root: Option<&BlockDescription>) -> Result<Self> {
        // Bounds keep `2 * keys_per_block + 1` cells far from overflow.
        if keys_per_block == 0 || keys_per_block > MAX_KEYS_PER_BLOCK {
            return Err(TreeError::InvalidKeysPerBlock {
                keys_per_block,
                max: MAX_KEYS_PER_BLOCK,
            });
        }
        let mut tree = Self {
            keys_per_block,
            blocks: Vec::new(),
            slots: HashMap::new(),
        };
        if let Some(root) = root {
            tree.add_block(BlockAddress::root(), root)?;
        }
        debug!(
            keys_per_block,
            blocks = tree.blocks.len(),
            "built tree model"
        );
        Ok(tree)
    }

    /// Normalize a parsed document and build its tree.
    pub fn from_document(document: TreeDocument) -> Result<Self> {
        let keys_per_block = document.keys_per_block;
        let root = document.into_root()?;
        Self::new(keys_per_block, root.as_ref())
    }

    pub fn keys_per_block(&self) -> usize {
        self.keys_per_block
    }

    /// Maximum number of children per block.
    pub fn children_per_block(&self) -> usize {
        self.keys_per_block + 1
    }

    /// Number of blocks supplied in the input.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// All supplied blocks with their addresses, in construction order.
    pub fn all_blocks(&self) -> impl Iterator<Item = (&BlockAddress, &[Key])> {
        self.blocks
            .iter()
            .map(|(address, keys)| (address, keys.as_slice()))
    }

    pub fn root_index(&self) -> BlockAddress {
        BlockAddress::root()
    }

    /// Address of the `child_num`-th child of `parent`.
    pub fn nth_child(&self, parent: &BlockAddress, child_num: usize) -> Result<BlockAddress> {
        if !self.is_valid_child_num(child_num) {
            return Err(TreeError::ChildOutOfRange {
                child: child_num,
                children_per_block: self.children_per_block(),
            });
        }
        Ok(parent.with_child(child_num))
    }

    /// Addresses of every child slot below a block, drawn or not.
    pub fn children(&self, address: &BlockAddress) -> impl Iterator<Item = BlockAddress> {
        let address = address.clone();
        (0..self.children_per_block()).map(move |i| address.with_child(i))
    }

    pub fn child_num(&self, address: &BlockAddress) -> Option<usize> {
        address.last()
    }

    pub fn parent(&self, address: &BlockAddress) -> Option<BlockAddress> {
        address.parent()
    }

    /// The block to the right on the same level.
    ///
    /// Crosses into the parent's right sibling when `address` is a last
    /// child. `None` once the right edge of the tree is reached.
    pub fn right_sibling(&self, address: &BlockAddress) -> Option<BlockAddress> {
        let child_num = address.last()?;
        let parent = address.parent()?;
        if child_num + 1 < self.children_per_block() {
            return Some(parent.with_child(child_num + 1));
        }
        let parent_sibling = self.right_sibling(&parent)?;
        Some(parent_sibling.with_child(0))
    }

    /// Whether the block at `address` should have been drawn.
    ///
    /// A child is expected when its number is within the `num_keys + 1`
    /// children of its parent's key count. Parents that are undrawn or hold
    /// no keys say nothing about their children and defer to their own parent.
    pub fn was_omitted(&self, address: &BlockAddress) -> Result<bool> {
        self.validate(address)?;
        let mut current = address.clone();
        loop {
            let (Some(child_num), Some(parent)) = (current.last(), current.parent()) else {
                return Ok(false);
            };
            if let Some(parent_keys) = self.get(&parent).filter(|keys| !keys.is_empty()) {
                return Ok(child_num <= parent_keys.len());
            }
            current = parent;
        }
    }

    /// Keys of the block at `address`, or `None` if it was not supplied.
    pub fn lookup(&self, address: &BlockAddress) -> Result<Option<&[Key]>> {
        self.validate(address)?;
        Ok(self.get(address))
    }

    /// Height of the drawn subtree below `address`. Leaves and undrawn
    /// addresses have depth 0.
    pub fn depth(&self, address: &BlockAddress) -> usize {
        if self.get(address).is_none() {
            return 0;
        }
        self.children(address)
            .filter(|child| self.get(child).is_some())
            .map(|child| 1 + self.depth(&child))
            .max()
            .unwrap_or(0)
    }

    fn get(&self, address: &BlockAddress) -> Option<&[Key]> {
        self.slots
            .get(address)
            .map(|&slot| self.blocks[slot].1.as_slice())
    }

    fn validate(&self, address: &BlockAddress) -> Result<()> {
        if address
            .components()
            .iter()
            .all(|&n| self.is_valid_child_num(n))
        {
            Ok(())
        } else {
            Err(TreeError::InvalidIndex {
                address: address.clone(),
            })
        }
    }

    fn is_valid_child_num(&self, n: usize) -> bool {
        n < self.children_per_block()
    }

    fn add_block(&mut self, address: BlockAddress, block: &BlockDescription) -> Result<()> {
        if block.children.len() > self.children_per_block() {
            return Err(TreeError::TooManyChildren {
                address,
                children: block.children.len(),
                children_per_block: self.children_per_block(),
            });
        }
        self.slots.insert(address.clone(), self.blocks.len());
        self.blocks.push((address.clone(), block.keys.clone()));

        for (i, child) in block.children.iter().enumerate() {
            if let Some(child) = child {
                let child_address = self.nth_child(&address, i)?;
                self.add_block(child_address, child)?;
            }
        }
        Ok(())
    }
}
