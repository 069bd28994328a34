use dioxus::prelude::*;

use cardio_core::model::CardioOption;

/// Pick-or-type description plus a minutes field.
///
/// The form performs no validation and no unit conversion: submit hands
/// the raw strings to the parent and keeps its own state, so whatever the
/// page does next (refresh, reject) never clears the inputs.
#[component]
pub fn SessionForm(
    options: Vec<CardioOption>,
    seed_description: Option<String>,
    on_add: Callback<(FormEvent, String, String)>,
) -> Element {
    let seed = seed_description.unwrap_or_default();
    let mut description = use_signal(move || seed);
    let mut length = use_signal(String::new);

    let option_buttons = options.iter().map(|option| {
        let value = option.value.clone();
        let mut description = description;
        rsx! {
            button {
                class: "description-option",
                r#type: "button",
                onclick: move |_| description.set(value.clone()),
                "{option.label}"
            }
        }
    });

    rsx! {
        form {
            class: "cardio-form",
            onsubmit: move |event| on_add.call((event, description(), length())),

            div { class: "form-field",
                label { r#for: "description", "Description" }
                div { class: "description-control",
                    input {
                        id: "description",
                        name: "description",
                        class: "description-input",
                        r#type: "text",
                        value: "{description()}",
                        oninput: move |evt| description.set(evt.value()),
                    }
                    if !description().is_empty() {
                        button {
                            class: "description-clear",
                            r#type: "button",
                            aria_label: "Clear description",
                            onclick: move |_| description.set(String::new()),
                            "×"
                        }
                    }
                }
                if !options.is_empty() {
                    div { class: "description-options",
                        {option_buttons}
                    }
                }
            }

            div { class: "form-field",
                label { r#for: "length", "Length" }
                input {
                    id: "length",
                    name: "length",
                    class: "length-input",
                    r#type: "number",
                    placeholder: "Minutes",
                    value: "{length()}",
                    oninput: move |evt| length.set(evt.value()),
                }
            }

            button { class: "btn btn-primary", r#type: "submit", "Add session" }
        }
    }
}
