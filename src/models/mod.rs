//! Defines the data structures shared by the CLI and the lifecycle handlers.

mod lifecycle;

pub use lifecycle::*;
