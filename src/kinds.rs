use crate::prelude::*;
use std::any::{type_name, TypeId};
use std::fmt;

/// A single failure kind: one concrete error type.
///
/// Matching is exact. An error matches a kind only if its concrete type is
/// the type the kind was built from.
#[derive(Clone, Copy)]
pub struct ErrorKind {
    id: TypeId,
    name: &'static str,
    matches: fn(&(dyn StdError + 'static)) -> bool,
}

impl ErrorKind {
    pub fn of<E>() -> Self
    where
        E: StdError + 'static,
    {
        Self {
            id: TypeId::of::<E>(),
            name: type_name::<E>(),
            matches: |error| error.is::<E>(),
        }
    }

    /// Full type path, e.g. `core::num::error::ParseIntError`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without its module path or generic arguments.
    pub fn short_name(&self) -> &'static str {
        let base = self.name.split('<').next().unwrap_or(self.name);
        base.rsplit("::").next().unwrap_or(base)
    }

    pub fn matches(&self, error: &(dyn StdError + 'static)) -> bool {
        (self.matches)(error)
    }
}

impl PartialEq for ErrorKind {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ErrorKind {}

impl fmt::Debug for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{} as ErrorKind>", self.short_name())
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

/// Ordered set of failure kinds a guard intercepts.
///
/// An empty set never matches anything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ErrorKinds {
    kinds: Vec<ErrorKind>,
}

impl ErrorKinds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `E` to the set. Adding a kind twice keeps the first position.
    pub fn with<E>(mut self) -> Self
    where
        E: StdError + 'static,
    {
        self.insert(ErrorKind::of::<E>());
        self
    }

    pub fn insert(&mut self, kind: ErrorKind) {
        if !self.kinds.contains(&kind) {
            self.kinds.push(kind);
        }
    }

    /// First declared kind that `error` belongs to.
    pub fn first_match(&self, error: &(dyn StdError + 'static)) -> Option<ErrorKind> {
        self.kinds.iter().copied().find(|kind| kind.matches(error))
    }

    pub fn contains(&self, error: &(dyn StdError + 'static)) -> bool {
        self.first_match(error).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ErrorKind> {
        self.kinds.iter()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl From<ErrorKind> for ErrorKinds {
    fn from(kind: ErrorKind) -> Self {
        Self { kinds: vec![kind] }
    }
}

impl FromIterator<ErrorKind> for ErrorKinds {
    fn from_iter<I: IntoIterator<Item = ErrorKind>>(iter: I) -> Self {
        let mut kinds = Self::new();
        for kind in iter {
            kinds.insert(kind);
        }
        kinds
    }
}
