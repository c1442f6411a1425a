//! Labelled form inputs with inline error text.

use dioxus::prelude::*;

use crate::icons::{FaEye, FaEyeSlash};
use crate::Icon;

fn input_class(error: bool) -> &'static str {
    if error {
        "field__input field__input--error"
    } else {
        "field__input"
    }
}

/// Text input with a label and optional helper text shown in error colour.
#[component]
pub fn TextField(
    name: String,
    label: String,
    value: String,
    oninput: EventHandler<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] error: bool,
    #[props(default)] helper_text: String,
) -> Element {
    let input_class = input_class(error);
    rsx! {
        div {
            class: "field",
            label { r#for: "{name}", class: "field__label", "{label}" }
            input {
                id: "{name}",
                name: "{name}",
                class: "{input_class}",
                r#type: "{input_type}",
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
            if error && !helper_text.is_empty() {
                span { class: "field__helper", "{helper_text}" }
            }
        }
    }
}

/// Password input with a show/hide toggle.
///
/// `input_type` comes from the form model (`LoginForm::password_input_type`);
/// `visible` only picks the toggle icon.
#[component]
pub fn PasswordField(
    name: String,
    label: String,
    value: String,
    input_type: String,
    visible: bool,
    oninput: EventHandler<String>,
    on_toggle_visibility: EventHandler<()>,
    #[props(default)] error: bool,
    #[props(default)] helper_text: String,
) -> Element {
    let input_class = input_class(error);
    rsx! {
        div {
            class: "field",
            label { r#for: "{name}", class: "field__label", "{label}" }
            div {
                class: "field__control",
                input {
                    id: "{name}",
                    name: "{name}",
                    class: "{input_class} field__input--with-action",
                    r#type: "{input_type}",
                    value: "{value}",
                    oninput: move |evt: FormEvent| oninput.call(evt.value()),
                }
                button {
                    r#type: "button",
                    class: "field__action",
                    "aria-label": "toggle password visibility",
                    onclick: move |_| on_toggle_visibility.call(()),
                    if visible {
                        Icon { icon: FaEyeSlash, width: 16, height: 16 }
                    } else {
                        Icon { icon: FaEye, width: 16, height: 16 }
                    }
                }
            }
            if error && !helper_text.is_empty() {
                span { class: "field__helper", "{helper_text}" }
            }
        }
    }
}
