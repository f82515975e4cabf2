//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry
//! point for every recipebook operation, whatever UI drives it.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (selector strings → [`RecipeSelector`])
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It holds no business logic and does no terminal I/O.
//!
//! `RecipeApi<S: SlotStore>` is generic over the slot backend:
//! - Production: `RecipeApi<FsSlots>`
//! - Testing: `RecipeApi<MemSlots>`

use crate::commands;
use crate::error::Result;
use crate::index::{parse_selectors, RecipeSelector};
use crate::model::{NewRecipe, RecipePatch};
use crate::store::{RecipeStore, SlotStore};
use std::path::PathBuf;

pub struct RecipeApi<S: SlotStore> {
    store: RecipeStore<S>,
    config_dir: PathBuf,
}

impl<S: SlotStore> RecipeApi<S> {
    pub fn new(store: RecipeStore<S>, config_dir: PathBuf) -> Self {
        Self { store, config_dir }
    }

    pub fn list_recipes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_recipes<I: AsRef<str>>(&self, selectors: &[I]) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::view::run(&self.store, &selectors)
    }

    pub fn add_recipe(&mut self, fields: NewRecipe) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, fields)
    }

    pub fn edit_recipe(&mut self, selector: &str, patch: RecipePatch) -> Result<commands::CmdResult> {
        let selector: RecipeSelector = selector.parse()?;
        commands::edit::run(&mut self.store, &selector, &patch)
    }

    pub fn delete_recipes<I: AsRef<str>>(
        &mut self,
        selectors: &[I],
    ) -> Result<commands::CmdResult> {
        let selectors = parse_selectors(selectors)?;
        commands::delete::run(&mut self.store, &selectors)
    }

    pub fn slot_path(&self) -> commands::CmdResult {
        commands::CmdResult::default().with_slot_path(self.store.slot_path())
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn store(&self) -> &RecipeStore<S> {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
