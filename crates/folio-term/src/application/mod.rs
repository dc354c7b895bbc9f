//! Application layer driving the portfolio terminal.
//!
//! This module handles command-line parsing, frame layout and the main UI loop.

pub mod cli;
pub mod ui;
