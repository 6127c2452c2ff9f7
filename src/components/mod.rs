//! UI Components
//!
//! Leptos components of the menu screen.

mod add_food_tile;
mod create_food_modal;
mod edit_food_modal;
mod food_card;
mod food_form_modal;
mod food_grid;

pub use add_food_tile::AddFoodTile;
pub use create_food_modal::CreateFoodModal;
pub use edit_food_modal::EditFoodModal;
pub use food_card::FoodCard;
pub use food_form_modal::FoodFormModal;
pub use food_grid::FoodGrid;
