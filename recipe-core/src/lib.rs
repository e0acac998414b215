pub mod db;
pub mod error;
pub mod form;
pub mod models;

pub use db::{RecipeRepository, RepositoryError};
pub use error::FormError;
pub use form::{FormController, FormEvent, RecipeForm};
pub use models::*;
