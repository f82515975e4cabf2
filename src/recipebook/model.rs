use crate::error::{RecipeError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recipe as stored in the durable slot.
///
/// Older slots were written without `preparation` (and sometimes without
/// `ingredients`), so both default to empty on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub ingredients: String,
    #[serde(default)]
    pub preparation: String,
}

impl Recipe {
    /// Applies a patch in place. The patch must already be validated.
    /// Returns whether any field actually changed.
    pub(crate) fn apply(&mut self, patch: &RecipePatch) -> bool {
        let mut changed = false;
        if let Some(title) = &patch.title {
            changed |= replace(&mut self.title, title.trim());
        }
        if let Some(ingredients) = &patch.ingredients {
            changed |= replace(&mut self.ingredients, ingredients.trim());
        }
        if let Some(preparation) = &patch.preparation {
            changed |= replace(&mut self.preparation, preparation.trim());
        }
        changed
    }

    /// Trims every text field in place (used when loading foreign data).
    pub(crate) fn normalize(&mut self) {
        self.title = self.title.trim().to_string();
        self.ingredients = self.ingredients.trim().to_string();
        self.preparation = self.preparation.trim().to_string();
    }
}

fn replace(field: &mut String, value: &str) -> bool {
    if field == value {
        return false;
    }
    *field = value.to_string();
    true
}

/// Fields accepted by the add operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRecipe {
    pub title: String,
    pub ingredients: Option<String>,
    pub preparation: Option<String>,
}

impl NewRecipe {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }

    pub fn with_preparation(mut self, preparation: impl Into<String>) -> Self {
        self.preparation = Some(preparation.into());
        self
    }

    /// Validates the title and builds the record with the given id.
    pub(crate) fn into_recipe(self, id: String) -> Result<Recipe> {
        let title = required_title(&self.title)?;
        Ok(Recipe {
            id,
            title,
            ingredients: trimmed(self.ingredients),
            preparation: trimmed(self.preparation),
        })
    }
}

/// Partial update for an existing recipe. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipePatch {
    pub title: Option<String>,
    pub ingredients: Option<String>,
    pub preparation: Option<String>,
}

impl RecipePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn ingredients(mut self, ingredients: impl Into<String>) -> Self {
        self.ingredients = Some(ingredients.into());
        self
    }

    pub fn preparation(mut self, preparation: impl Into<String>) -> Self {
        self.preparation = Some(preparation.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.ingredients.is_none() && self.preparation.is_none()
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            required_title(title)?;
        }
        Ok(())
    }
}

fn required_title(raw: &str) -> Result<String> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(RecipeError::Validation("title cannot be empty".to_string()));
    }
    Ok(title.to_string())
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Mints an id from the millisecond timestamp, appending `-1`, `-2`, ...
/// until the token is not `taken`.
pub fn mint_id<F>(now: DateTime<Utc>, taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let base = now.timestamp_millis().to_string();
    if !taken(&base) {
        return base;
    }
    let mut n: u32 = 1;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}
