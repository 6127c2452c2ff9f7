//! Menu Context
//!
//! The menu view provided via Leptos Context API, plus the signal-backed
//! store it writes to.

use leptos::prelude::*;
use leptos::task::spawn_local;

use menu_core::{FoodField, FoodId, FoodItem, HttpFoodApi, MenuState, MenuStore, MenuView};

/// `MenuStore` backed by a signal so every write re-renders
#[derive(Clone, Copy)]
pub struct SignalStore(RwSignal<MenuState>);

impl MenuStore for SignalStore {
    fn read<R>(&self, f: impl FnOnce(&MenuState) -> R) -> R {
        self.0.with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut MenuState)) {
        self.0.update(f);
    }
}

pub type AppMenu = MenuView<HttpFoodApi, SignalStore>;

/// Menu view shared by all components
#[derive(Clone, Copy)]
pub struct MenuContext {
    menu: StoredValue<AppMenu>,
    /// Everything the screen renders - read
    pub state: RwSignal<MenuState>,
}

impl MenuContext {
    pub fn new(api: HttpFoodApi) -> Self {
        let state = RwSignal::new(MenuState::default());
        Self {
            menu: StoredValue::new(MenuView::new(api, SignalStore(state))),
            state,
        }
    }

    /// Reload the list from the backend
    pub fn load(&self) {
        let menu = self.menu.get_value();
        spawn_local(async move {
            menu.load_items().await;
        });
    }

    pub fn open_creator(&self) {
        self.menu.with_value(|menu| menu.open_creator());
    }

    pub fn set_draft_field(&self, field: FoodField, value: String) {
        self.menu.with_value(|menu| menu.set_draft_field(field, value));
    }

    pub fn cancel_create(&self) {
        self.menu.with_value(|menu| menu.cancel_create());
    }

    pub fn submit_create(&self) {
        let menu = self.menu.get_value();
        spawn_local(async move {
            if let Err(e) = menu.create_item().await {
                log::warn!("Create form not submitted: {}", e);
            }
        });
    }

    pub fn delete(&self, id: FoodId) {
        let menu = self.menu.get_value();
        spawn_local(async move {
            menu.delete_item(&id).await;
        });
    }

    pub fn open_editor(&self, item: FoodItem) {
        self.menu.with_value(|menu| menu.open_editor(item));
    }

    pub fn set_selected_field(&self, field: FoodField, value: String) {
        self.menu.with_value(|menu| menu.set_selected_field(field, value));
    }

    pub fn cancel_edit(&self) {
        self.menu.with_value(|menu| menu.cancel_edit());
    }

    pub fn submit_update(&self) {
        let menu = self.menu.get_value();
        spawn_local(async move {
            if let Err(e) = menu.update_item().await {
                log::warn!("Edit form not submitted: {}", e);
            }
        });
    }
}

/// Get the menu context
pub fn use_menu() -> MenuContext {
    expect_context::<MenuContext>()
}
