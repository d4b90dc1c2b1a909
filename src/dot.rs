//! Hierarchy tree to DOT (Graphviz) conversion.
//!
//! Renders a built [`HierarchyTree`] in DOT format for visualization with
//! Graphviz tools like `dot` or online viewers, without any GUI layer.
//!
//! # Conventions
//!
//! - The root (synthetic top) node is rendered as a rectangle
//! - Every other node is rendered as an ellipse labeled with its name
//! - Edges point from supertype to subtype, top to bottom
//!
//! # Examples
//!
//! ```
//! use classtree::descriptor::TypeInfo;
//! use classtree::tree::HierarchyTree;
//!
//! let mut tree = HierarchyTree::new(TypeInfo::new("Object"));
//! tree.insert(TypeInfo::with_ancestors("Number", ["Object"])).unwrap();
//!
//! let dot = tree.to_dot().unwrap();
//! // Write to file and render with: dot -Tpng hierarchy.dot -o hierarchy.png
//! assert!(dot.contains("\"Number\""));
//! ```

use std::fmt::Write;

use crate::descriptor::TypeDescriptor;
use crate::tree::HierarchyTree;

/// Configuration options for DOT output generation.
///
/// Use `DotConfig::default()` for standard settings.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for the root node (default: "rect")
    pub root_shape: &'static str,
    /// Shape for hierarchy nodes (default: "ellipse")
    pub node_shape: &'static str,
    /// Style for supertype-to-subtype edges (default: "solid")
    pub edge_style: &'static str,
    /// Layout direction (default: "TB", top to bottom)
    pub rankdir: &'static str,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            root_shape: "rect",
            node_shape: "ellipse",
            edge_style: "solid",
            rankdir: "TB",
        }
    }
}

impl<D> HierarchyTree<D>
where
    D: TypeDescriptor,
{
    /// Convert the tree to DOT (Graphviz) format with default settings.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Convert the tree to DOT (Graphviz) format.
    ///
    /// Emits one node statement per tree node and one edge statement per
    /// parent/child pair. Node identifiers are arena indices, so duplicate
    /// type names stay distinct in the graph; labels carry the names.
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        let mut out = String::new();

        writeln!(out, "digraph hierarchy {{")?;
        writeln!(out, "  rankdir={};", config.rankdir)?;

        for id in self.preorder() {
            let shape = if id == self.root() {
                config.root_shape
            } else {
                config.node_shape
            };
            writeln!(
                out,
                "  n{} [shape={}, label=\"{}\"];",
                id.index(),
                shape,
                escape(self.descriptor(id).name())
            )?;
        }

        for id in self.preorder() {
            for &child in self.children(id) {
                writeln!(
                    out,
                    "  n{} -> n{} [style={}];",
                    id.index(),
                    child.index(),
                    config.edge_style
                )?;
            }
        }

        writeln!(out, "}}")?;
        Ok(out)
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::TypeInfo;

    fn sample_tree() -> HierarchyTree<TypeInfo> {
        let mut tree = HierarchyTree::new(TypeInfo::new("Object"));
        tree.insert(TypeInfo::with_ancestors("Number", ["Object"])).unwrap();
        tree.insert(TypeInfo::with_ancestors("Integer", ["Number", "Object"])).unwrap();
        tree.insert(TypeInfo::with_ancestors("String", ["Object"])).unwrap();
        tree
    }

    #[test]
    fn test_dot_structure() {
        let tree = sample_tree();
        let dot = tree.to_dot().unwrap();

        assert!(dot.starts_with("digraph hierarchy {"));
        assert!(dot.trim_end().ends_with('}'));

        // One node statement per tree node, one edge per parent/child pair.
        assert_eq!(dot.matches("[shape=").count(), tree.len());
        assert_eq!(dot.matches(" -> ").count(), tree.len() - 1);

        assert!(dot.contains("label=\"Object\""));
        assert!(dot.contains("label=\"Integer\""));
    }

    #[test]
    fn test_dot_root_shape() {
        let tree = sample_tree();
        let config = DotConfig {
            root_shape: "box3d",
            ..DotConfig::default()
        };
        let dot = tree.to_dot_with_config(&config).unwrap();

        assert!(dot.contains("n0 [shape=box3d, label=\"Object\"]"));
        assert!(dot.contains("shape=ellipse"));
    }

    #[test]
    fn test_dot_escapes_quotes() {
        let tree = HierarchyTree::new(TypeInfo::new("weird\"name"));
        let dot = tree.to_dot().unwrap();
        assert!(dot.contains("label=\"weird\\\"name\""));
    }
}
