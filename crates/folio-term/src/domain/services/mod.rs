//! Services holding the terminal's behaviour: dispatch, history, rendering
//! and the animations.

mod app_state;
pub mod banner;
mod dispatcher;
pub mod events;
mod history;
mod rain;
pub mod renderer;
mod scroll;
mod theme;
mod typewriter;

pub use app_state::*;
pub use dispatcher::*;
pub use history::*;
pub use rain::*;
pub use scroll::*;
pub use theme::*;
pub use typewriter::*;
