//! Handles Command Line Interface (CLI) related functionalities.
//!
//! Includes argument parsing, log filter selection and the dispatch from
//! the parsed action to the config client handlers.

mod commands;

pub use commands::*;
