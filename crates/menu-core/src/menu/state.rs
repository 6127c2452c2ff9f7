//! Menu View State

use crate::domain::{FoodDraft, FoodField, FoodItem};

/// Everything the menu screen shows.
///
/// `items` is whatever the backend returned last; the client never edits
/// it in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuState {
    /// Last successful `GET /foods` response, in backend order
    pub items: Vec<FoodItem>,
    /// Create modal visibility
    pub create_open: bool,
    /// Create form contents
    pub draft: FoodDraft,
    /// Item being edited. The edit modal is open while this is set.
    pub selected: Option<FoodItem>,
}

impl MenuState {
    pub fn replace_items(&mut self, items: Vec<FoodItem>) {
        self.items = items;
    }

    pub fn open_creator(&mut self) {
        self.create_open = true;
    }

    pub fn set_draft_field(&mut self, field: FoodField, value: String) {
        self.draft.set(field, value);
    }

    /// Close the create modal and start the next draft empty
    pub fn close_creator(&mut self) {
        self.create_open = false;
        self.draft = FoodDraft::default();
    }

    /// Edit a copy; the listed item stays untouched until the next load
    pub fn open_editor(&mut self, item: FoodItem) {
        self.selected = Some(item);
    }

    pub fn set_selected_field(&mut self, field: FoodField, value: String) {
        if let Some(selected) = self.selected.as_mut() {
            selected.set_field(field, value);
        }
    }

    pub fn close_editor(&mut self) {
        self.selected = None;
    }

    pub fn is_editing(&self) -> bool {
        self.selected.is_some()
    }
}
