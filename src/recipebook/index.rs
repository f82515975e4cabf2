//! # Selectors
//!
//! Users refer to recipes by their 1-based position in the list (`1`, `2`, ...),
//! which is what the list view prints, or by the raw stored id.
//!
//! Ids minted by the store are millisecond timestamps and therefore numeric too.
//! A number larger than the collection cannot be a position, so it falls back to
//! an id lookup.

use crate::error::{RecipeError, Result};
use crate::model::Recipe;
use std::str::FromStr;

/// A user input to select a recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecipeSelector {
    Position(usize),
    Id(String),
}

impl std::fmt::Display for RecipeSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipeSelector::Position(n) => write!(f, "{}", n),
            RecipeSelector::Id(id) => write!(f, "id {}", id),
        }
    }
}

impl FromStr for RecipeSelector {
    type Err = RecipeError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(RecipeError::Api("Empty recipe selector".to_string()));
        }
        match s.parse::<usize>() {
            Ok(0) => Err(RecipeError::Api(
                "Positions start at 1 (got 0)".to_string(),
            )),
            Ok(n) => Ok(RecipeSelector::Position(n)),
            Err(_) => Ok(RecipeSelector::Id(s.to_string())),
        }
    }
}

/// A recipe paired with its 1-based list position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecipe {
    pub index: usize,
    pub recipe: Recipe,
}

/// Assigns display positions in collection order.
pub fn index_recipes(recipes: &[Recipe]) -> Vec<DisplayRecipe> {
    recipes
        .iter()
        .enumerate()
        .map(|(i, recipe)| DisplayRecipe {
            index: i + 1,
            recipe: recipe.clone(),
        })
        .collect()
}

/// Finds the recipe a selector points to.
pub fn resolve(recipes: &[Recipe], selector: &RecipeSelector) -> Result<DisplayRecipe> {
    let found = match selector {
        RecipeSelector::Position(n) if *n <= recipes.len() => Some(n - 1),
        RecipeSelector::Position(n) => {
            let id = n.to_string();
            recipes.iter().position(|r| r.id == id)
        }
        RecipeSelector::Id(id) => recipes.iter().position(|r| &r.id == id),
    };

    found
        .map(|i| DisplayRecipe {
            index: i + 1,
            recipe: recipes[i].clone(),
        })
        .ok_or_else(|| RecipeError::NotFound(selector.to_string()))
}

pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<RecipeSelector>> {
    inputs.iter().map(|s| s.as_ref().parse()).collect()
}
