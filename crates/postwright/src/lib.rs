//! Postwright command-line tool.
//!
//! Loads layered configuration, sets up logging and runs the validation
//! commands on top of [`postwright_platform`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod observability;

pub use config::{CliConfig, LogFormat, OutputFormat};
