use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayRecipe;
use crate::model::NewRecipe;
use crate::store::{RecipeStore, SlotStore};

use super::helpers::{note_load_status, note_persist_error};

pub fn run<S: SlotStore>(store: &mut RecipeStore<S>, fields: NewRecipe) -> Result<CmdResult> {
    let mutation = store.add(fields)?;
    let recipe = mutation.value;

    // New recipes are appended, so they take the last position
    let index = store.len();
    let message = CmdMessage::success(format!("Recipe added ({}): {}", index, recipe.title));

    let mut result =
        CmdResult::default().with_affected_recipes(vec![DisplayRecipe { index, recipe }]);
    note_load_status(store, &mut result);
    result.add_message(message);
    note_persist_error(&mut result, mutation.persist_error);
    Ok(result)
}
