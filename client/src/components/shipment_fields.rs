//! Input rows shared by the create and edit shipment forms.

use leptos::prelude::*;

use crate::util::validation::{ShipmentField, ShipmentForm};

#[component]
pub fn ShipmentFields(form: RwSignal<ShipmentForm>) -> impl IntoView {
    ShipmentField::ALL
        .into_iter()
        .map(|field| {
            let input_type = if field == ShipmentField::Weight { "number" } else { "text" };
            view! {
                <label class="form__label">
                    {field.label()}
                    <input
                        class="form__input"
                        type=input_type
                        step="0.1"
                        prop:value=move || form.with(|f| f.field(field).to_owned())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.update(|f| f.set_field(field, value));
                        }
                    />
                </label>
            }
        })
        .collect_view()
}
