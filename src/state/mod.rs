//! Immutable list snapshots and the transitions between them.

mod state;

pub use state::{ListState, Summary};
