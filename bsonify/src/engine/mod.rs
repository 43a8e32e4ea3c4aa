//! The traversal engine.
//!
//! [deref] strips top-level indirection, [fields] enumerates the named
//! children of a composite value, and [dump] / [flatten] turn those children
//! into a nested or a dot-path document.

pub(crate) mod deref;
pub(crate) mod dump;
pub(crate) mod fields;
pub(crate) mod flatten;

pub(crate) use deref::dereference;
pub(crate) use dump::dump;
pub(crate) use flatten::flatten;
