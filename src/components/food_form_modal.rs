//! Food Form Modal
//!
//! Modal form with the three food fields, shared by the create and edit flows.

use leptos::prelude::*;

use menu_core::FoodField;

/// Modal dialog with a required-field food form.
///
/// The browser blocks submission while a field is empty, so `on_submit`
/// only fires for complete forms.
///
/// # Arguments
/// * `value` - Current value of a field
/// * `on_input` - Called with the field and its new value on every keystroke
/// * `on_submit` - Form submitted (default navigation already prevented)
/// * `on_cancel` - Cancel button clicked
#[component]
pub fn FoodFormModal(
    #[prop(into)] title: String,
    #[prop(into)] submit_label: String,
    #[prop(into)] value: Callback<FoodField, String>,
    #[prop(into)] on_input: Callback<(FoodField, String)>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <h2 class="modal-title">{title}</h2>
                <form class="food-form" on:submit=submit>
                    {FoodField::ALL
                        .into_iter()
                        .map(|field| view! { <FoodFormField field=field value=value on_input=on_input /> })
                        .collect_view()}

                    <div class="modal-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button type="submit" class="submit-btn">
                            {submit_label}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Floating-label control for one field
#[component]
fn FoodFormField(
    field: FoodField,
    value: Callback<FoodField, String>,
    on_input: Callback<(FoodField, String)>,
) -> impl IntoView {
    let control_id = format!("floating_{}", field.as_str());

    let control = if field.is_multiline() {
        view! {
            <textarea
                id=control_id.clone()
                name=field.as_str()
                class="form-control"
                placeholder=" "
                rows="3"
                required=true
                prop:value=move || value.run(field)
                on:input=move |ev| on_input.run((field, event_target_value(&ev)))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                id=control_id.clone()
                name=field.as_str()
                class="form-control"
                placeholder=" "
                required=true
                prop:value=move || value.run(field)
                on:input=move |ev| on_input.run((field, event_target_value(&ev)))
            />
        }
        .into_any()
    };

    view! {
        <div class="form-group">
            {control}
            <label for=control_id class="form-label">{field.label()}</label>
        </div>
    }
}
