//! Create Food Modal
//!
//! "Add New Food" form bound to the draft.

use leptos::prelude::*;

use menu_core::FoodField;

use crate::components::FoodFormModal;
use crate::context::use_menu;

#[component]
pub fn CreateFoodModal() -> impl IntoView {
    let ctx = use_menu();
    let open = Memo::new(move |_| ctx.state.with(|state| state.create_open));

    let value = move |field: FoodField| ctx.state.with(|state| state.draft.get(field).to_string());
    let on_input = move |(field, value): (FoodField, String)| ctx.set_draft_field(field, value);
    let on_submit = move |_: ()| ctx.submit_create();
    let on_cancel = move |_: ()| ctx.cancel_create();

    view! {
        <Show when=move || open.get()>
            <FoodFormModal
                title="Add New Food"
                submit_label="Add"
                value=value
                on_input=on_input
                on_submit=on_submit
                on_cancel=on_cancel
            />
        </Show>
    }
}
