//! Food Grid Component
//!
//! Renders the loaded menu as a grid of cards.

use leptos::prelude::*;

use crate::components::FoodCard;
use crate::context::use_menu;

/// Grid of every item from the last load, in backend order
#[component]
pub fn FoodGrid() -> impl IntoView {
    let ctx = use_menu();

    // Only re-render when the list itself changes, not on form input
    let items = Memo::new(move |_| ctx.state.with(|state| state.items.clone()));

    view! {
        <div class="food-grid">
            {move || items.get()
                .into_iter()
                .map(|item| view! { <FoodCard item=item /> })
                .collect_view()}
        </div>
    }
}
