//! # CLI Layer
//!
//! This module is **one possible UI client** for bom, not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the logger
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: context wiring and per-command handlers
//! - `print.rs`: output formatting

mod commands;
mod print;
mod setup;

pub use commands::run;
