//! Menu View Operations
//!
//! Every network operation follows the same policy: send the request, log
//! it if it fails, then reload the full list from the backend. Modals close
//! whether or not the mutation succeeded.

use std::sync::Arc;

use crate::api::FoodApi;
use crate::domain::{FoodField, FoodId, FoodItem, FormError, FormResult};

use super::state::MenuState;
use super::store::MenuStore;

/// One menu screen: a backend client plus the state it renders
pub struct MenuView<A, S> {
    api: Arc<A>,
    store: S,
}

impl<A, S: Clone> Clone for MenuView<A, S> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            store: self.store.clone(),
        }
    }
}

impl<A: FoodApi, S: MenuStore> MenuView<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self {
            api: Arc::new(api),
            store,
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the list with the backend's. On failure the previous list stays.
    pub async fn load_items(&self) {
        match self.api.list_foods().await {
            Ok(items) => {
                log::debug!("Loaded {} menu items", items.len());
                self.store.write(|state| state.replace_items(items));
            }
            Err(e) => log::error!("Error fetching menu items: {}", e),
        }
    }

    pub fn open_creator(&self) {
        self.store.write(MenuState::open_creator);
    }

    pub fn set_draft_field(&self, field: FoodField, value: String) {
        self.store.write(|state| state.set_draft_field(field, value));
    }

    /// Close the create modal and drop the draft. Nothing is sent.
    pub fn cancel_create(&self) {
        self.store.write(MenuState::close_creator);
    }

    /// Submit the draft.
    ///
    /// An incomplete draft is rejected before any request and the modal
    /// stays open. Otherwise the modal closes and the list reloads even if
    /// the create failed.
    pub async fn create_item(&self) -> FormResult<()> {
        let food = self.store.read(|state| state.draft.to_new_food())?;

        if let Err(e) = self.api.create_food(&food).await {
            log::error!("Error adding new food item: {}", e);
        }
        self.store.write(MenuState::close_creator);
        self.load_items().await;
        Ok(())
    }

    /// Delete by id, then reload regardless of the outcome
    pub async fn delete_item(&self, id: &FoodId) {
        if let Err(e) = self.api.delete_food(id).await {
            log::error!("Error deleting food item {}: {}", id, e);
        }
        self.load_items().await;
    }

    /// Open the edit modal on a copy of `item`. No lock is taken; a
    /// concurrent edit elsewhere is simply overwritten on submit.
    pub fn open_editor(&self, item: FoodItem) {
        self.store.write(|state| state.open_editor(item));
    }

    pub fn set_selected_field(&self, field: FoodField, value: String) {
        self.store.write(|state| state.set_selected_field(field, value));
    }

    /// Close the edit modal and drop the selection. Nothing is sent.
    pub fn cancel_edit(&self) {
        self.store.write(MenuState::close_editor);
    }

    /// Submit the selected record whole, with its description trimmed
    pub async fn update_item(&self) -> FormResult<()> {
        let food = self.store.read(|state| {
            state
                .selected
                .as_ref()
                .ok_or(FormError::NothingSelected)
                .and_then(FoodItem::to_update)
        })?;

        if let Err(e) = self.api.update_food(&food).await {
            log::error!("Error updating food item {}: {}", food.id, e);
        }
        self.store.write(MenuState::close_editor);
        self.load_items().await;
        Ok(())
    }
}
