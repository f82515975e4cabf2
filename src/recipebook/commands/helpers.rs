use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RecipeError, Result};
use crate::index::{resolve, DisplayRecipe, RecipeSelector};
use crate::store::{LoadStatus, SlotStore, RecipeStore};

pub fn recipes_by_selectors<S: SlotStore>(
    store: &RecipeStore<S>,
    selectors: &[RecipeSelector],
) -> Result<Vec<DisplayRecipe>> {
    selectors
        .iter()
        .map(|selector| resolve(store.list(), selector))
        .collect()
}

/// Adds a warning when the last load discarded the stored slot or some of
/// its records.
pub fn note_load_status<S: SlotStore>(store: &RecipeStore<S>, result: &mut CmdResult) {
    match store.load_status() {
        LoadStatus::Discarded(e) => result.add_message(CmdMessage::warning(format!(
            "Stored recipes could not be loaded ({}); starting from an empty book",
            e
        ))),
        LoadStatus::Loaded { dropped, .. } if *dropped > 0 => {
            result.add_message(CmdMessage::warning(format!(
                "Skipped {} stored recipe(s) with an empty title or repeated id; \
                 they will be removed on the next change",
                dropped
            )))
        }
        _ => {}
    }
}

/// Adds a warning when a mutation could not be written to the slot.
pub fn note_persist_error(result: &mut CmdResult, error: Option<RecipeError>) {
    if let Some(e) = error {
        result.add_message(CmdMessage::warning(format!(
            "Change kept for this session but not saved: {}",
            e
        )));
    }
}
