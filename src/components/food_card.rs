//! Food Card Component
//!
//! One menu entry with its edit and delete actions.

use leptos::prelude::*;

use menu_core::FoodItem;

use crate::context::use_menu;

#[component]
pub fn FoodCard(item: FoodItem) -> impl IntoView {
    let ctx = use_menu();

    let id = item.id.clone();
    let price = format!("..............${}", item.price);
    let editable = item.clone();

    view! {
        <div class="food-card">
            <div>
                <h2 class="food-name">
                    {item.name} " " <span class="food-price">{price}</span>
                </h2>
                <p class="food-description">{item.description}</p>
            </div>
            <div class="food-actions">
                <button
                    class="edit-btn"
                    title="Edit"
                    on:click=move |_| ctx.open_editor(editable.clone())
                >
                    "✎"
                </button>
                // No confirmation step: deletes immediately
                <button
                    class="delete-btn"
                    title="Delete"
                    on:click=move |_| ctx.delete(id.clone())
                >
                    "🗑"
                </button>
            </div>
        </div>
    }
}
