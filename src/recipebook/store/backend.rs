use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for the durable key-value layer.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while RecipeStore handles the "what" (invariants, persist step).
pub trait SlotStore {
    /// Read the raw value stored under `key`.
    /// Returns Ok(None) if nothing was ever written.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Location of the slot, for display.
    /// For FsSlots, this is the real path. For MemSlots, a virtual path.
    fn slot_path(&self, key: &str) -> PathBuf;
}
