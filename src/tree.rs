//! Incremental class-hierarchy tree construction.
//!
//! The [`HierarchyTree`] manager owns an arena of nodes and inserts type
//! descriptors one at a time, keeping the tree shaped by the
//! *nearest-common-supertype* rule: every node's parent is its closest
//! supertype among the descriptors inserted so far. Descriptors may arrive
//! in any order; already-inserted subtrees are re-parented under a new node
//! whenever the new descriptor turns out to sit between them and their
//! current parent.
//!
//! The tree reflects immediate-supertype relationships among the inserted
//! set only, not the full type lattice.
//!
//! # Examples
//!
//! ```
//! use classtree::descriptor::TypeInfo;
//! use classtree::tree::HierarchyTree;
//!
//! let mut tree = HierarchyTree::new(TypeInfo::new("Object"));
//!
//! // Subtypes can be inserted before their supertype...
//! tree.insert(TypeInfo::with_ancestors("Integer", ["Number", "Object"])).unwrap();
//! tree.insert(TypeInfo::with_ancestors("Double", ["Number", "Object"])).unwrap();
//!
//! // ...and are re-parented once it arrives.
//! tree.insert(TypeInfo::with_ancestors("Number", ["Object"])).unwrap();
//!
//! assert_eq!(tree.to_bracket_string(), "Object:(Number:(Integer, Double))");
//! ```

use log::debug;

use crate::descriptor::TypeDescriptor;
use crate::error::HierarchyError;
use crate::node::HierarchyNode;
use crate::reference::NodeId;

/// A class-hierarchy tree rooted at a synthetic top descriptor.
///
/// The root descriptor must be a supertype of everything later inserted;
/// inserting a descriptor the root does not dominate is reported as
/// [`HierarchyError::NotASupertype`].
pub struct HierarchyTree<D> {
    nodes: Vec<HierarchyNode<D>>,
}

impl<D> HierarchyTree<D> {
    /// Create a tree holding only the root node for `top`.
    pub fn new(top: D) -> Self {
        Self {
            nodes: vec![HierarchyNode::new(top)],
        }
    }

    /// The id of the root node.
    pub fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    /// The number of nodes in the tree, including the root.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check whether the tree holds only the root.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Get the node behind `id`.
    pub fn node(&self, id: NodeId) -> &HierarchyNode<D> {
        &self.nodes[id.index()]
    }

    /// Get the descriptor wrapped by the node behind `id`.
    pub fn descriptor(&self, id: NodeId) -> &D {
        &self.nodes[id.index()].descriptor
    }

    /// Get the children of the node behind `id`, in insertion order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    /// Iterate over all node ids in preorder (parents before children,
    /// siblings in insertion order).
    pub fn preorder(&self) -> Preorder<'_, D> {
        Preorder {
            tree: self,
            stack: vec![self.root()],
        }
    }
}

impl<D> HierarchyTree<D>
where
    D: TypeDescriptor,
{
    /// Insert `descriptor` under the root.
    ///
    /// Equivalent to [`insert_under`][Self::insert_under] with
    /// [`root`][Self::root] as the target.
    pub fn insert(&mut self, descriptor: D) -> Result<NodeId, HierarchyError> {
        self.insert_under(self.root(), descriptor)
    }

    /// Insert `descriptor` into the subtree rooted at `parent`.
    ///
    /// The algorithm scans `parent`'s children once. If exactly one child
    /// is a supertype of `descriptor`, insertion descends into it. Otherwise
    /// a new node is allocated, every child that `descriptor` dominates is
    /// moved under it, and the new node is appended to `parent`'s children.
    ///
    /// A child with the same name as `descriptor` is treated as neither
    /// dominating nor dominated, so inserting a duplicate produces a second
    /// sibling node and leaves the existing subtree untouched.
    ///
    /// # Errors
    ///
    /// - [`HierarchyError::NotASupertype`] if `parent`'s descriptor is not
    ///   a supertype of `descriptor`.
    /// - [`HierarchyError::MultipleDominators`] if more than one child of
    ///   `parent` is a supertype of `descriptor`, which indicates that the
    ///   supplied partial order does not form a tree below `parent` (for
    ///   instance, two unrelated interfaces both implemented by
    ///   `descriptor`).
    pub fn insert_under(&mut self, parent: NodeId, descriptor: D) -> Result<NodeId, HierarchyError> {
        if !self.descriptor(parent).is_supertype_of(&descriptor) {
            return Err(HierarchyError::NotASupertype {
                parent: self.descriptor(parent).name().to_string(),
                descriptor: descriptor.name().to_string(),
            });
        }

        let mut dominated: Vec<NodeId> = Vec::new();
        let mut dominator: Option<NodeId> = None;

        for &child in &self.nodes[parent.index()].children {
            let child_desc = &self.nodes[child.index()].descriptor;

            // Same name: a duplicate insertion. Neither reparent the
            // existing node nor descend into it; fall through to appending
            // a new sibling.
            if child_desc.name() == descriptor.name() {
                continue;
            }

            if descriptor.is_supertype_of(child_desc) {
                dominated.push(child);
            } else if child_desc.is_supertype_of(&descriptor) {
                if dominator.is_some() {
                    return Err(HierarchyError::MultipleDominators {
                        parent: self.descriptor(parent).name().to_string(),
                        descriptor: descriptor.name().to_string(),
                    });
                }
                dominator = Some(child);
            }
        }

        if let Some(child) = dominator {
            debug!(
                "insert '{}': descending into dominating child '{}'",
                descriptor.name(),
                self.descriptor(child).name()
            );
            return self.insert_under(child, descriptor);
        }

        let id = NodeId::new(self.nodes.len() as u32);
        debug!(
            "insert '{}': new node {} under '{}' ({} children reparented)",
            descriptor.name(),
            id,
            self.descriptor(parent).name(),
            dominated.len()
        );

        let mut node = HierarchyNode::new(descriptor);
        node.children = dominated.clone();
        self.nodes.push(node);

        let siblings = &mut self.nodes[parent.index()].children;
        siblings.retain(|c| !dominated.contains(c));
        siblings.push(id);

        Ok(id)
    }

    /// Walk the whole tree and check the hierarchy invariant.
    ///
    /// Every parent must be a strict supertype of each of its children, and
    /// no child may be dominated by one of its siblings. A well-formed tree
    /// built through [`insert`][Self::insert] always passes; a failure
    /// indicates an inconsistent [`TypeDescriptor`] implementation.
    pub fn verify(&self) -> Result<(), HierarchyError> {
        for id in self.preorder() {
            let desc = self.descriptor(id);
            let children = self.children(id);

            for &child in children {
                let child_desc = self.descriptor(child);
                if child_desc.name() != desc.name() && !desc.is_supertype_of(child_desc) {
                    return Err(HierarchyError::NotASupertype {
                        parent: desc.name().to_string(),
                        descriptor: child_desc.name().to_string(),
                    });
                }
            }

            for &a in children {
                for &b in children {
                    let (da, db) = (self.descriptor(a), self.descriptor(b));
                    if da.name() != db.name() && da.is_supertype_of(db) {
                        return Err(HierarchyError::DominatedSibling {
                            parent: desc.name().to_string(),
                            dominator: da.name().to_string(),
                            dominated: db.name().to_string(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// Render the tree as a compact single-line string.
    ///
    /// Leaves render as their name; inner nodes as
    /// `name:(child, child, ...)`. Useful in logs and test assertions.
    pub fn to_bracket_string(&self) -> String {
        let mut out = String::new();
        self.write_bracket(self.root(), &mut out);
        out
    }

    fn write_bracket(&self, id: NodeId, out: &mut String) {
        out.push_str(self.descriptor(id).name());
        let children = self.children(id);
        if !children.is_empty() {
            out.push_str(":(");
            for (i, &child) in children.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                self.write_bracket(child, out);
            }
            out.push(')');
        }
    }
}

/// Preorder traversal over a [`HierarchyTree`].
pub struct Preorder<'a, D> {
    tree: &'a HierarchyTree<D>,
    stack: Vec<NodeId>,
}

impl<D> Iterator for Preorder<'_, D> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        // Push in reverse so the first child is popped first.
        for &child in self.tree.children(id).iter().rev() {
            self.stack.push(child);
        }
        Some(id)
    }
}
