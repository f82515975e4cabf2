//! # Recipebook Architecture
//!
//! Recipebook is a **UI-agnostic recipe library**. The command line binary is one client of it;
//! a mobile shell, a web handler or a test harness can drive the same core.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Normalizes inputs (positions / ids → RecipeSelector)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Maps store results to CmdResult + messages               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecipeStore: in-memory collection + persist step         │
//! │  - SlotStore trait: FsSlots (production), MemSlots (tests)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence Model
//!
//! [`store::RecipeStore`] owns the authoritative list of recipes. It is loaded once from a
//! single durable slot (key `"@recipes"` by default) and every mutation that changes the
//! list rewrites the whole slot. A failed write never rolls back memory: the mutation is
//! returned together with the persistence error, see [`store::Mutation`].
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the process.
//! Diagnostics go through `tracing`; the binary decides where they end up.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: One module per user-facing operation
//! - [`store`]: RecipeStore and the key-value backends
//! - [`model`]: `Recipe`, `NewRecipe`, `RecipePatch`
//! - [`index`]: Selector parsing (`3` or a raw id)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod store;
