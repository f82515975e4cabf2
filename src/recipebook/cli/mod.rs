//! # CLI Layer
//!
//! This module is **one possible UI client** for recipebook—it is not the application itself.
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! Each invocation is stateless: it opens the store, runs one command and exits.
//!
//! ## Structure
//!
//! - `setup`: clap definitions
//! - `commands`: `run()`, context setup and per-command handlers
//! - `render`: output formatting

mod commands;
mod render;
mod setup;

pub use commands::run;
