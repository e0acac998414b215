use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use super::repository::{RecipeRepository, RepositoryError};
use crate::models::{RecipeRecord, SavedRecipe};

/// Process-local recipe store. Contents vanish with the process; nothing is
/// written anywhere.
#[derive(Debug, Default)]
pub struct InMemoryRecipeRepository {
    recipes: Mutex<Vec<SavedRecipe>>,
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<SavedRecipe>>, RepositoryError> {
        self.recipes
            .lock()
            .map_err(|e| RepositoryError::Storage(format!("recipe store poisoned: {e}")))
    }
}

#[async_trait]
impl RecipeRepository for InMemoryRecipeRepository {
    async fn save(&self, recipe: RecipeRecord) -> Result<SavedRecipe, RepositoryError> {
        let mut recipes = self.lock()?;
        let saved = SavedRecipe {
            id: recipes.len() as i64 + 1,
            recipe,
            saved_at: Utc::now(),
        };
        tracing::info!(id = saved.id, recipe = ?saved.recipe, "form data submitted");
        recipes.push(saved.clone());
        Ok(saved)
    }

    async fn get(&self, id: i64) -> Result<SavedRecipe, RepositoryError> {
        self.lock()?
            .iter()
            .find(|saved| saved.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn list(&self) -> Result<Vec<SavedRecipe>, RepositoryError> {
        Ok(self.lock()?.clone())
    }

    async fn count(&self) -> Result<usize, RepositoryError> {
        Ok(self.lock()?.len())
    }
}
