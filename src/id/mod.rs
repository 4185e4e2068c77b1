//! Session-unique identifier generation for list items.

mod generator;

pub use generator::{IdGenerator, IdStrategy};
