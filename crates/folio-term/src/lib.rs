//! Terminal-styled personal portfolio.
//!
//! Visitors type commands at a shell-like prompt to read about the owner,
//! with a typewriter welcome and an optional matrix rain backdrop.

pub mod application;
pub mod configuration;
pub mod domain;
pub use application::ui::{destruct_terminal_for_panic, start, start_loop};
pub use configuration::{Config, ConfigKey};
pub use domain::models::{CommandResult, Event, LineKind, TerminalLine};
pub use domain::services::{AppState, AppStateProps, CommandProcessor, History};
