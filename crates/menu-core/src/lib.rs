//! Menu Board Core
//!
//! Layered like the frontend that consumes it:
//! - domain: food items, form drafts, form errors
//! - api: backend client trait and its HTTP implementation
//! - menu: view state and the operations that drive it
//! - config: where the backend lives

pub mod api;
pub mod config;
pub mod domain;
pub mod menu;

pub use api::{ApiError, ApiResult, FoodApi, HttpFoodApi};
pub use config::{ConfigError, MenuConfig};
pub use domain::{FoodDraft, FoodField, FoodId, FoodItem, FormError, FormResult, NewFood, Price};
pub use menu::{LocalMenuStore, MenuState, MenuStore, MenuView};
