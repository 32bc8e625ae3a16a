//! Mutable progress through the plan and the percentages derived from it.

pub mod grid;
pub mod reflections;
pub mod store;

pub use grid::{CompletionGrid, ShapeMismatch};
pub use reflections::ReflectionSet;
pub use store::ProgressStore;
