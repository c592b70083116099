//! Arcade - Terminal Game Collection Library
//!
//! This module exposes the game logic for testing and external use.
//! Game state and updaters live under [`games`], run scheduling and the
//! session lifecycle under [`core`], and rendering under [`ui`]. High
//! scores persist as JSON under `~/.arcade/`.

pub mod build_info;
pub mod core;
pub mod games;
pub mod input;
pub mod scores;
pub mod ui;
pub mod utils;
