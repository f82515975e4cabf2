use super::backend::SlotStore;
use crate::error::{RecipeError, Result};
use crate::model::{mint_id, NewRecipe, Recipe, RecipePatch};
use chrono::Utc;
use std::collections::HashSet;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Slot key used by every client of the recipe book unless configured otherwise.
pub const DEFAULT_SLOT_KEY: &str = "@recipes";

/// What the last `load` found in the durable slot.
#[derive(Debug)]
pub enum LoadStatus {
    /// Nothing was stored yet.
    Missing,
    /// The slot decoded; `count` records were kept and `dropped` were
    /// discarded for an empty title or a repeated id. Dropped records are
    /// gone from storage after the next write.
    Loaded { count: usize, dropped: usize },
    /// The slot could not be read or decoded; the collection started empty.
    Discarded(RecipeError),
}

/// Outcome of a mutating operation.
///
/// The in-memory change has always been applied. `persist_error` is set when
/// writing the slot failed, meaning the change may not survive a restart.
#[derive(Debug)]
pub struct Mutation<T> {
    pub value: T,
    pub persist_error: Option<RecipeError>,
}

impl<T> Mutation<T> {
    fn new(value: T, persist_error: Option<RecipeError>) -> Self {
        Self {
            value,
            persist_error,
        }
    }

    /// True when the slot reflects this change.
    pub fn is_durable(&self) -> bool {
        self.persist_error.is_none()
    }

    /// Strict view: a failed write becomes an error (memory keeps the change).
    pub fn into_result(self) -> Result<T> {
        match self.persist_error {
            None => Ok(self.value),
            Some(e) => Err(e),
        }
    }
}

/// The authoritative recipe collection, mirrored to one durable slot.
///
/// Mutations take `&mut self`; hosts that need to share a store between
/// threads wrap it in a `Mutex` so read-modify-persist stays one unit.
pub struct RecipeStore<S: SlotStore> {
    slots: S,
    key: String,
    pretty: bool,
    recipes: Vec<Recipe>,
    load_status: LoadStatus,
}

impl<S: SlotStore> RecipeStore<S> {
    /// Opens the store on the default slot and loads it.
    pub fn open(slots: S) -> Self {
        Self::open_with_key(slots, DEFAULT_SLOT_KEY)
    }

    /// Opens the store on `key` and loads it. Never fails: an unusable slot
    /// yields an empty collection (see [`RecipeStore::load_status`]).
    pub fn open_with_key(slots: S, key: impl Into<String>) -> Self {
        let mut store = Self {
            slots,
            key: key.into(),
            pretty: false,
            recipes: Vec::new(),
            load_status: LoadStatus::Missing,
        };
        store.load();
        store
    }

    /// Pretty-print the slot JSON on subsequent writes.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Re-reads the slot, replacing the in-memory collection.
    pub fn load(&mut self) -> &LoadStatus {
        let (recipes, status) = match self.slots.get(&self.key) {
            Ok(None) => (Vec::new(), LoadStatus::Missing),
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Recipe>>(&raw) {
                Ok(decoded) => {
                    let (recipes, dropped) = sanitize(decoded);
                    let count = recipes.len();
                    (recipes, LoadStatus::Loaded { count, dropped })
                }
                Err(e) => {
                    warn!(key = %self.key, error = %e, "recipe slot is not valid JSON; starting empty");
                    (Vec::new(), LoadStatus::Discarded(RecipeError::Serialization(e)))
                }
            },
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to read recipe slot; starting empty");
                (Vec::new(), LoadStatus::Discarded(e.into_persistence()))
            }
        };
        debug!(key = %self.key, count = recipes.len(), "recipes loaded");
        self.recipes = recipes;
        self.load_status = status;
        &self.load_status
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.load_status
    }

    /// The collection in insertion order.
    pub fn list(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    pub fn add(&mut self, fields: NewRecipe) -> Result<Mutation<Recipe>> {
        let id = mint_id(Utc::now(), |candidate| self.get(candidate).is_some());
        let recipe = fields.into_recipe(id)?;

        self.recipes.push(recipe.clone());
        debug!(id = %recipe.id, title = %recipe.title, "recipe added");

        let persist_error = self.persist();
        Ok(Mutation::new(recipe, persist_error))
    }

    pub fn update(&mut self, id: &str, patch: &RecipePatch) -> Result<Mutation<Recipe>> {
        let recipe = self
            .recipes
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| RecipeError::NotFound(id.to_string()))?;
        patch.validate()?;

        if !recipe.apply(patch) {
            debug!(id, "recipe update changed nothing");
            return Ok(Mutation::new(recipe.clone(), None));
        }
        let updated = recipe.clone();
        debug!(id, "recipe updated");

        let persist_error = self.persist();
        Ok(Mutation::new(updated, persist_error))
    }

    /// Removes the recipe with `id`. Absent ids are a no-op; the value tells
    /// whether something was removed.
    pub fn remove(&mut self, id: &str) -> Mutation<bool> {
        let Some(pos) = self.recipes.iter().position(|r| r.id == id) else {
            debug!(id, "remove of unknown recipe ignored");
            return Mutation::new(false, None);
        };
        self.recipes.remove(pos);
        debug!(id, "recipe removed");

        let persist_error = self.persist();
        Mutation::new(true, persist_error)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn slot_path(&self) -> PathBuf {
        self.slots.slot_path(&self.key)
    }

    pub fn backend(&self) -> &S {
        &self.slots
    }

    /// Serializes the whole collection and overwrites the slot.
    fn persist(&self) -> Option<RecipeError> {
        let encoded = if self.pretty {
            serde_json::to_string_pretty(&self.recipes)
        } else {
            serde_json::to_string(&self.recipes)
        };
        let result = encoded
            .map_err(RecipeError::Serialization)
            .and_then(|text| self.slots.set(&self.key, &text))
            .map_err(RecipeError::into_persistence);

        match result {
            Ok(()) => None,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to persist recipes; change kept in memory");
                Some(e)
            }
        }
    }
}

/// Trims decoded records and drops those that break the collection invariants.
/// Returns the kept records and how many were dropped.
fn sanitize(decoded: Vec<Recipe>) -> (Vec<Recipe>, usize) {
    let total = decoded.len();
    let mut seen = HashSet::new();
    let mut recipes = Vec::with_capacity(decoded.len());
    for mut recipe in decoded {
        recipe.normalize();
        if recipe.title.is_empty() {
            warn!(id = %recipe.id, "dropping stored recipe with empty title");
            continue;
        }
        if !seen.insert(recipe.id.clone()) {
            warn!(id = %recipe.id, "dropping stored recipe with duplicate id");
            continue;
        }
        recipes.push(recipe);
    }
    let dropped = total - recipes.len();
    (recipes, dropped)
}
