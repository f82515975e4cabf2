//! # Storage Layer
//!
//! Recipes live in a single **durable slot**: one key in a key-value backend whose value
//! is the whole collection serialized as a JSON array.
//!
//! ## Split of Responsibilities
//!
//! - [`backend::SlotStore`] handles the "how" of storage (filesystem vs memory). It only
//!   knows `get(key)` and `set(key, text)`.
//! - [`recipe_store::RecipeStore`] handles the "what": it owns the in-memory list, enforces
//!   the record invariants and writes the slot back after every mutation.
//!
//! ## Persistence Protocol
//!
//! 1. **Load once**: `RecipeStore::open` reads the slot before any mutation is accepted.
//!    A missing, unreadable or corrupt slot degrades to an empty list (logged).
//! 2. **Mutate memory first**: the in-memory list is updated before the write is issued.
//! 3. **Full overwrite**: the complete list is serialized and written, never a diff.
//! 4. **No rollback**: a failed write leaves memory ahead of storage; the caller gets the
//!    error alongside the mutated value.
//!
//! ## Implementations
//!
//! - [`fs_backend::FsSlots`]: One file per key, replaced atomically (tmp + rename).
//! - [`mem_backend::MemSlots`]: For testing logic without filesystem I/O, with failure
//!   simulation.
//!
//! ## Storage Layout
//!
//! ```text
//! <data dir>/
//! ├── slot-_40recipes.json  # Slot "@recipes"
//! └── config.json           # Configuration
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod recipe_store;

pub use backend::SlotStore;
pub use recipe_store::{LoadStatus, Mutation, RecipeStore, DEFAULT_SLOT_KEY};
