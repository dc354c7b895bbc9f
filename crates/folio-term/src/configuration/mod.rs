//! Configuration management for the portfolio terminal.
//!
//! Values resolve from built-in defaults, then `config.toml`, then command
//! line flags and their environment variables.

mod config;

pub use config::*;
