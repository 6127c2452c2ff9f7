//! Add Food Tile
//!
//! The "+" tile under the grid that opens the create modal.

use leptos::prelude::*;

use crate::context::use_menu;

#[component]
pub fn AddFoodTile() -> impl IntoView {
    let ctx = use_menu();

    view! {
        <div class="add-food-tile">
            <button class="add-food-btn" title="Add food" on:click=move |_| ctx.open_creator()>
                "+"
            </button>
        </div>
    }
}
