use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecipeError {
    #[error("Invalid recipe: {0}")]
    Validation(String),

    #[error("Recipe not found: {0}")]
    NotFound(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

impl RecipeError {
    /// Collapses any backend failure into a `Persistence` error, keeping
    /// domain errors as they are.
    pub fn into_persistence(self) -> Self {
        match self {
            RecipeError::Persistence(_)
            | RecipeError::Validation(_)
            | RecipeError::NotFound(_)
            | RecipeError::Api(_) => self,
            other => RecipeError::Persistence(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, RecipeError>;
