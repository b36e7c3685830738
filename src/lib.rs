//! Interactive explorer for a mansion mapped as a binary tree of rooms.
//!
//! The mansion is built once from a fixed layout, walked from the entrance hall towards a room
//! without further paths by single-character choices read from the player, and released in
//! post-order once the walk ends.

mod app;
mod cli;
mod events;
mod explorer;
pub mod logging;
mod map;
mod types;
mod ui;

pub use app::App;
pub use cli::Cli;
pub use types::Outcome;
