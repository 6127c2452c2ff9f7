//! Edit Food Modal
//!
//! "Edit Food" form bound to the selected item's copy.

use leptos::prelude::*;

use menu_core::FoodField;

use crate::components::FoodFormModal;
use crate::context::use_menu;

#[component]
pub fn EditFoodModal() -> impl IntoView {
    let ctx = use_menu();
    let editing = Memo::new(move |_| ctx.state.with(|state| state.is_editing()));

    let value = move |field: FoodField| {
        ctx.state.with(|state| {
            state
                .selected
                .as_ref()
                .map(|item| item.field(field))
                .unwrap_or_default()
        })
    };
    let on_input = move |(field, value): (FoodField, String)| ctx.set_selected_field(field, value);
    let on_submit = move |_: ()| ctx.submit_update();
    let on_cancel = move |_: ()| ctx.cancel_edit();

    view! {
        <Show when=move || editing.get()>
            <FoodFormModal
                title="Edit Food"
                submit_label="Update"
                value=value
                on_input=on_input
                on_submit=on_submit
                on_cancel=on_cancel
            />
        </Show>
    }
}
