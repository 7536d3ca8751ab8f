//! Bird Survivor: dodge the boss's flames, shoot it down, survive.
//!
//! The simulation (`compute`, `collision`, `spawn`) is pure and owns no I/O;
//! `input` and `display` adapt it to a crossterm terminal.

pub mod collision;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod geometry;
pub mod input;
pub mod spawn;
