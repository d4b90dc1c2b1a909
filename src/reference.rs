use std::fmt::{Display, Formatter};

/// A lightweight handle to a node inside a
/// [`HierarchyTree`][crate::tree::HierarchyTree].
///
/// Node ids are only meaningful for the tree that produced them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Return the index of the node within its arena.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.0)
    }
}
