use crate::commands::{CmdMessage, CmdResult};
use crate::error::{RecipeError, Result};
use crate::index::{resolve, DisplayRecipe, RecipeSelector};
use crate::model::RecipePatch;
use crate::store::{RecipeStore, SlotStore};

use super::helpers::{note_load_status, note_persist_error};

pub fn run<S: SlotStore>(
    store: &mut RecipeStore<S>,
    selector: &RecipeSelector,
    patch: &RecipePatch,
) -> Result<CmdResult> {
    if patch.is_empty() {
        return Err(RecipeError::Api(
            "Nothing to change: pass --title, --ingredients or --preparation".to_string(),
        ));
    }

    let target = resolve(store.list(), selector)?;
    let mutation = store.update(&target.recipe.id, patch)?;

    let message = CmdMessage::success(format!(
        "Recipe updated ({}): {}",
        target.index, mutation.value.title
    ));

    let mut result = CmdResult::default().with_affected_recipes(vec![DisplayRecipe {
        index: target.index,
        recipe: mutation.value,
    }]);
    note_load_status(store, &mut result);
    result.add_message(message);
    note_persist_error(&mut result, mutation.persist_error);
    Ok(result)
}
