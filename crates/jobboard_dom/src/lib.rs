//! In-memory document model: the element tree the widget reads and mutates.
mod builder;
mod document;

pub use builder::ElementBuilder;
pub use document::{Document, DomError, ElementId};
