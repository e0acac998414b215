pub mod catalog;
mod draft;
mod field;
mod saved_recipe;
mod section;

pub use catalog::{FieldDescriptor, FieldKind};
pub use draft::{RecipeDraft, RecipeRecord};
pub use field::{FIELD_COUNT, RecipeField};
pub use saved_recipe::SavedRecipe;
pub use section::Section;
