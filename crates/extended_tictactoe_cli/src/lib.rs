//! Terminal front end for extended tic-tac-toe.
//!
//! Drives the board engine through the per-move call sequence: check the
//! space, place the marker, check for a winner, then for a draw.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod controller;
mod settings;

pub use cli::{BoardArgs, Cli, Command};
pub use controller::{Controller, Prompt};
pub use settings::{SettingsError, load_settings};
