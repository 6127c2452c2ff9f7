//! Menu Board App
//!
//! Single menu screen: card grid, add tile, create and edit modals.

use leptos::prelude::*;

use menu_core::{HttpFoodApi, MenuConfig};

use crate::components::{AddFoodTile, CreateFoodModal, EditFoodModal, FoodGrid};
use crate::context::MenuContext;

#[component]
pub fn App() -> impl IntoView {
    let config = MenuConfig::load().unwrap_or_else(|e| {
        log::error!("Invalid API configuration ({}), falling back to default", e);
        MenuConfig::default()
    });
    log::info!("Menu API at {}", config.api_base_url);

    // Provide context to all children
    let ctx = MenuContext::new(HttpFoodApi::new(&config));
    provide_context(ctx);

    // Load items once on mount
    Effect::new(move |_| ctx.load());

    view! {
        <div class="menu-board">
            <div class="menu-panel">
                <h1 class="menu-title">"FOODS WE OFFER"</h1>

                <FoodGrid />

                <AddFoodTile />
            </div>

            <CreateFoodModal />
            <EditFoodModal />
        </div>
    }
}
