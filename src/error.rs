use thiserror::Error;

/// Errors reported by [`HierarchyTree`][crate::tree::HierarchyTree]
/// operations.
///
/// All variants indicate a programming error on the caller's side or a
/// corrupted tree, never a normal outcome. Names are carried as strings so
/// the message stays useful after the offending descriptor is gone.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum HierarchyError {
    /// The insertion target is not a supertype of the inserted descriptor.
    #[error("'{parent}' is not a supertype of '{descriptor}'")]
    NotASupertype { parent: String, descriptor: String },

    /// More than one child of the insertion target is a supertype of the
    /// inserted descriptor, which a well-formed tree never allows.
    #[error("multiple children of '{parent}' dominate '{descriptor}'")]
    MultipleDominators { parent: String, descriptor: String },

    /// A sibling pair where one dominates the other, found by
    /// [`verify`][crate::tree::HierarchyTree::verify].
    #[error("child '{dominated}' of '{parent}' is dominated by its sibling '{dominator}'")]
    DominatedSibling {
        parent: String,
        dominator: String,
        dominated: String,
    },
}

/// Errors reported by [`RecencyCache`][crate::cache::RecencyCache].
///
/// A lookup miss is *not* an error; `get` signals it with `None`.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum CacheError {
    /// `put` was called with a key that is already present.
    #[error("key is already present in the cache")]
    DuplicateKey,
}
