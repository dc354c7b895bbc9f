//! Plain data types shared by the services and the UI.

mod command;
mod event;
mod fragment;
mod line;

pub use command::*;
pub use event::*;
pub use fragment::*;
pub use line::*;
