//! Vertex label bound.

use std::fmt::Display;
use std::hash::Hash;

/// Anything usable as a vertex label.
///
/// Labels must be hashable, comparable and printable; the `Display` form is
/// what appears in error messages and in the DOT export. Implemented for
/// every type satisfying the bounds, so `String`, `&str`, `char` and the
/// integer types all work out of the box.
pub trait Label: Clone + Eq + Hash + Display {}

impl<T: Clone + Eq + Hash + Display> Label for T {}
