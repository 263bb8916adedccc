//! Core domain entities.
//!
//! - [`Binding`] - A stored alias→target mapping
//! - [`NewBinding`] - Input for creating a binding (no id yet)

pub mod binding;

pub use binding::{Binding, NewBinding};
