use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::RecipeSelector;
use crate::store::{RecipeStore, SlotStore};

use super::helpers::{note_load_status, note_persist_error, recipes_by_selectors};

pub fn run<S: SlotStore>(
    store: &mut RecipeStore<S>,
    selectors: &[RecipeSelector],
) -> Result<CmdResult> {
    // Resolve everything up front: positions shift as recipes are removed
    let targets = recipes_by_selectors(store, selectors)?;
    let mut result = CmdResult::default();
    note_load_status(store, &mut result);

    for target in targets {
        let mutation = store.remove(&target.recipe.id);
        if mutation.value {
            result.add_message(CmdMessage::success(format!(
                "Recipe deleted ({}): {}",
                target.index, target.recipe.title
            )));
            result.affected_recipes.push(target);
        }
        note_persist_error(&mut result, mutation.persist_error);
    }

    Ok(result)
}
