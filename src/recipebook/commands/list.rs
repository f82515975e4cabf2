use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_recipes;
use crate::store::{RecipeStore, SlotStore};

use super::helpers::note_load_status;

pub fn run<S: SlotStore>(store: &RecipeStore<S>) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_recipes(index_recipes(store.list()));
    note_load_status(store, &mut result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::model::NewRecipe;
    use crate::store::mem_backend::MemSlots;
    use crate::store::DEFAULT_SLOT_KEY;

    #[test]
    fn lists_in_insertion_order() {
        let mut store = RecipeStore::open(MemSlots::new());
        store.add(NewRecipe::new("Bolo")).unwrap();
        store.add(NewRecipe::new("Pão")).unwrap();

        let result = run(&store).unwrap();
        assert_eq!(result.listed_recipes.len(), 2);
        assert_eq!(result.listed_recipes[0].index, 1);
        assert_eq!(result.listed_recipes[1].recipe.title, "Pão");
        assert!(result.messages.is_empty());
    }

    #[test]
    fn warns_when_slot_was_discarded() {
        let store = RecipeStore::open(MemSlots::new().with_slot(DEFAULT_SLOT_KEY, "oops"));
        let result = run(&store).unwrap();
        assert!(result.listed_recipes.is_empty());
        assert!(result.has_level(MessageLevel::Warning));
    }

    #[test]
    fn warns_when_records_were_dropped() {
        let raw = r#"[{"id":"1","title":"Bolo"},{"id":"2","title":" "}]"#;
        let store = RecipeStore::open(MemSlots::new().with_slot(DEFAULT_SLOT_KEY, raw));
        let result = run(&store).unwrap();

        assert_eq!(result.listed_recipes.len(), 1);
        assert!(result.has_level(MessageLevel::Warning));
        assert!(result.messages[0].content.starts_with("Skipped 1 stored recipe"));
    }
}
