pub mod memory;
pub mod repository;

pub use memory::InMemoryRecipeRepository;
pub use repository::{RecipeRepository, RepositoryError};
