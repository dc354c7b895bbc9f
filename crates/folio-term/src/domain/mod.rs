//! Core domain logic for the portfolio terminal.
//!
//! Command dispatch, history, line rendering and the animations live here,
//! independent of the terminal they are drawn on.

pub mod models;
pub mod services;
