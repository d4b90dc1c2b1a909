//! # classtree: class hierarchy trees and recency caches
//!
//! **`classtree`** provides the two algorithmic components behind a class-library
//! browser: incremental **class-hierarchy tree construction** and a bounded
//! **least-recently-used memoization cache**. Both are pure in-memory data
//! structures with no I/O, designed to be driven by whatever type-introspection
//! and rendering layers surround them.
//!
//! ## Hierarchy trees
//!
//! A [`HierarchyTree`][crate::tree::HierarchyTree] accepts type descriptors in
//! *any* order and keeps every node's parent its nearest supertype among the
//! descriptors inserted so far. Subtypes inserted before their supertype are
//! re-parented when it arrives, so the finished tree always renders as a
//! correct collapsible class hierarchy.
//!
//! The supertype relation is supplied externally through the
//! [`TypeDescriptor`][crate::descriptor::TypeDescriptor] trait; plug in
//! reflection, a parsed class model, or the bundled ancestor-list-backed
//! [`TypeInfo`][crate::descriptor::TypeInfo].
//!
//! ## Recency caches
//!
//! A [`RecencyCache`][crate::cache::RecencyCache] memoizes expensive per-key
//! computations (such as formatted type descriptions) under a hard capacity
//! bound, evicting the single least-recently-touched entry when full. Lookups
//! are O(1); only `get` hits touch an entry's recency position.
//!
//! ## Basic usage
//!
//! ```rust
//! use classtree::descriptor::TypeInfo;
//! use classtree::tree::HierarchyTree;
//!
//! // 1. Create a tree rooted at a synthetic top descriptor.
//! let mut tree = HierarchyTree::new(TypeInfo::new("java.lang.Object"));
//!
//! // 2. Insert descriptors as they are discovered, in any order.
//! let integer = TypeInfo::with_ancestors(
//!     "java.lang.Integer",
//!     ["java.lang.Number", "java.lang.Object"],
//! );
//! let number = TypeInfo::with_ancestors("java.lang.Number", ["java.lang.Object"]);
//! tree.insert(integer).unwrap();
//! tree.insert(number).unwrap();
//!
//! // 3. Walk the finished structure.
//! assert_eq!(
//!     tree.to_bracket_string(),
//!     "java.lang.Object:(java.lang.Number:(java.lang.Integer))"
//! );
//! ```
//!
//! ## Core components
//!
//! - **[`tree`]**: the [`HierarchyTree`][crate::tree::HierarchyTree] manager
//!   and the nearest-common-supertype insertion algorithm.
//! - **[`cache`]**: the bounded [`RecencyCache`][crate::cache::RecencyCache].
//! - **[`descriptor`]**: the supertype partial order abstraction.
//! - **[`dot`]**: Graphviz export for visualizing built hierarchies.
//!
//! Both components are single-threaded and synchronous; callers that build
//! trees on a background thread publish the finished structure themselves.

pub mod cache;
pub mod descriptor;
pub mod dot;
pub mod error;
pub mod node;
pub mod reference;
pub mod tree;
