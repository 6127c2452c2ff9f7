//! Domain Layer
//!
//! Menu entities and the client-side form state built from them.
//! Nothing here talks to the network.

mod draft;
mod error;
mod food;

pub use draft::{normalize_description, FoodDraft, NewFood};
pub use error::{FormError, FormResult};
pub use food::{FoodField, FoodId, FoodItem, Price};
