use crate::reference::NodeId;

/// One node of a hierarchy tree: a descriptor plus its ordered children.
///
/// Nodes are owned by the tree's arena and addressed by [`NodeId`];
/// they hold no parent back-pointer.
#[derive(Debug, Clone)]
pub struct HierarchyNode<D> {
    pub(crate) descriptor: D,
    pub(crate) children: Vec<NodeId>,
}

impl<D> HierarchyNode<D> {
    pub(crate) fn new(descriptor: D) -> Self {
        Self {
            descriptor,
            children: Vec::new(),
        }
    }

    /// The descriptor wrapped by this node.
    pub fn descriptor(&self) -> &D {
        &self.descriptor
    }

    /// The ids of this node's children, in insertion order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}
