use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::RecipeRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRecipe {
    pub id: i64,
    pub recipe: RecipeRecord,
    pub saved_at: DateTime<Utc>,
}
