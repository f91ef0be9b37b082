//! CLI command implementations

pub mod generate;

pub use generate::{GenerateArgs, handle_generate};
