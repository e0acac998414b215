use async_trait::async_trait;
use thiserror::Error;

use crate::models::{RecipeRecord, SavedRecipe};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Destination for submitted recipes.
#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn save(&self, recipe: RecipeRecord) -> Result<SavedRecipe, RepositoryError>;

    async fn get(&self, id: i64) -> Result<SavedRecipe, RepositoryError>;

    /// All saved recipes, oldest first.
    async fn list(&self) -> Result<Vec<SavedRecipe>, RepositoryError>;

    async fn count(&self) -> Result<usize, RepositoryError>;
}
