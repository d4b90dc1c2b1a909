//! Type descriptors and the supertype partial order.
//!
//! The tree algorithm never inspects types itself. It only asks two
//! questions: "what is your name?" and "are you a supertype of that other
//! descriptor?". The original system answered the second question with
//! runtime reflection (`Class.isAssignableFrom`); here it is abstracted as
//! the [`TypeDescriptor`] trait, so any type-introspection mechanism can
//! drive the same algorithm.
//!
//! [`TypeInfo`] is a ready-made implementation backed by an explicit
//! ancestor list, useful for tests and for callers that already know the
//! full ancestry of each type.

use std::fmt;

/// A class or interface participating in the supertype partial order.
///
/// # Invariants
///
/// - `name` uniquely identifies the type: two descriptors describe the
///   same type iff their names are equal.
/// - `is_supertype_of` is reflexive (every type is a supertype of itself)
///   and transitive. The tree algorithm relies on both.
pub trait TypeDescriptor {
    /// The unique name of this type.
    fn name(&self) -> &str;

    /// Check whether `self` is a supertype of `other`.
    fn is_supertype_of(&self, other: &Self) -> bool;

    /// Check whether `self` is a subtype of `other`.
    fn is_subtype_of(&self, other: &Self) -> bool {
        other.is_supertype_of(self)
    }
}

/// A type descriptor backed by an explicit list of ancestor names.
///
/// `a.is_supertype_of(b)` holds iff `a` and `b` have the same name, or
/// `b`'s ancestor list contains `a`'s name. The ancestor list is expected
/// to be transitively closed (list *all* ancestors, not just the direct
/// superclass); the constructor does not verify this.
///
/// # Examples
///
/// ```
/// use classtree::descriptor::{TypeDescriptor, TypeInfo};
///
/// let object = TypeInfo::new("java.lang.Object");
/// let number = TypeInfo::with_ancestors("java.lang.Number", ["java.lang.Object"]);
/// let integer = TypeInfo::with_ancestors(
///     "java.lang.Integer",
///     ["java.lang.Number", "java.lang.Object"],
/// );
///
/// assert!(object.is_supertype_of(&integer));
/// assert!(number.is_supertype_of(&integer));
/// assert!(!integer.is_supertype_of(&number));
/// assert!(integer.is_subtype_of(&number));
/// ```
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TypeInfo {
    name: String,
    ancestors: Vec<String>,
}

impl TypeInfo {
    /// Create a descriptor with no known ancestors.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ancestors: Vec::new(),
        }
    }

    /// Create a descriptor with the given ancestor names.
    pub fn with_ancestors<S>(name: impl Into<String>, ancestors: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        Self {
            name: name.into(),
            ancestors: ancestors.into_iter().map(Into::into).collect(),
        }
    }

    /// The names of all known ancestors, in the order given at construction.
    pub fn ancestors(&self) -> &[String] {
        &self.ancestors
    }
}

impl TypeDescriptor for TypeInfo {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_supertype_of(&self, other: &Self) -> bool {
        self.name == other.name || other.ancestors.iter().any(|a| a == &self.name)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflexive() {
        let number = TypeInfo::with_ancestors("Number", ["Object"]);
        assert!(number.is_supertype_of(&number));
        assert!(number.is_subtype_of(&number));
    }

    #[test]
    fn test_supertype_via_ancestors() {
        let object = TypeInfo::new("Object");
        let integer = TypeInfo::with_ancestors("Integer", ["Number", "Object"]);

        assert!(object.is_supertype_of(&integer));
        assert!(!integer.is_supertype_of(&object));
    }

    #[test]
    fn test_unrelated() {
        let string = TypeInfo::with_ancestors("String", ["Object"]);
        let number = TypeInfo::with_ancestors("Number", ["Object"]);

        assert!(!string.is_supertype_of(&number));
        assert!(!number.is_supertype_of(&string));
    }
}
