//! CLI module for the json-ddl binary

#[cfg(feature = "cli")]
pub mod commands;
#[cfg(feature = "cli")]
pub mod error;

#[cfg(feature = "cli")]
pub use error::CliError;
