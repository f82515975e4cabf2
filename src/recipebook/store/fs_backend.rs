use super::backend::SlotStore;
use crate::error::{RecipeError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const SLOT_PREFIX: &str = "slot-";
const SLOT_EXT: &str = ".json";

/// Filesystem slots: every key is one file under `root`.
pub struct FsSlots {
    root: PathBuf,
}

impl FsSlots {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Slot files carry a `slot-` prefix so they never shadow `config.json`.
    /// Bytes outside `[A-Za-z0-9-]` are written as `_xx` hex, which keeps
    /// distinct keys on distinct files.
    fn slot_filename(key: &str) -> String {
        let mut stem = String::with_capacity(key.len());
        for byte in key.bytes() {
            if byte.is_ascii_alphanumeric() || byte == b'-' {
                stem.push(byte as char);
            } else {
                stem.push_str(&format!("_{:02x}", byte));
            }
        }
        format!("{}{}{}", SLOT_PREFIX, stem, SLOT_EXT)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RecipeError::Io)?;
        }
        Ok(())
    }
}

impl SlotStore for FsSlots {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(RecipeError::Io(e).into_persistence()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_dir().map_err(RecipeError::into_persistence)?;

        let target = self.slot_path(key);

        // Atomic write
        let tmp_file = self.root.join(format!(".slot-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp_file, value)
            .and_then(|_| fs::rename(&tmp_file, &target))
            .map_err(|e| {
                let _ = fs::remove_file(&tmp_file);
                RecipeError::Io(e).into_persistence()
            })
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.root.join(Self::slot_filename(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_maps_to_safe_filename() {
        assert_eq!(FsSlots::slot_filename("@recipes"), "slot-_40recipes.json");
        assert_eq!(FsSlots::slot_filename("my-book_2"), "slot-my-book_5f2.json");
        assert_eq!(FsSlots::slot_filename("../etc"), "slot-_2e_2e_2fetc.json");
    }

    #[test]
    fn distinct_keys_get_distinct_files() {
        assert_ne!(
            FsSlots::slot_filename("@recipes"),
            FsSlots::slot_filename("_recipes")
        );
        assert_ne!(FsSlots::slot_filename("a b"), FsSlots::slot_filename("a_b"));
    }

    #[test]
    fn no_key_maps_to_config_file() {
        for key in ["config", "config.json", "../config"] {
            assert_ne!(FsSlots::slot_filename(key), "config.json");
            assert!(FsSlots::slot_filename(key).starts_with("slot-"));
        }
    }

    #[test]
    fn missing_slot_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let slots = FsSlots::new(dir.path().join("not-yet-created"));
        assert_eq!(slots.get("@recipes").unwrap(), None);
    }
}
