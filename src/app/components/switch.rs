//! Checkbox styled as a toggle. Holds no state of its own.

use dioxus::prelude::*;

#[component]
pub fn Switch(
    checked: bool,
    on_change: EventHandler<bool>,
    #[props(default)] disabled: bool,
    #[props(default)] id: String,
) -> Element {
    let track = if checked { "bg-primary-user" } else { "bg-gray-200" };
    let knob = if checked { "translate-x-5" } else { "translate-x-0" };
    let cursor = if disabled {
        "cursor-not-allowed opacity-50"
    } else {
        "cursor-pointer"
    };

    rsx! {
        label { class: "relative inline-flex h-6 w-11 items-center select-none {cursor}",
            input {
                id: "{id}",
                r#type: "checkbox",
                class: "sr-only",
                checked,
                disabled,
                onchange: move |e| on_change.call(e.checked()),
            }
            span { class: "h-6 w-11 rounded-full transition-colors {track}" }
            span { class: "absolute left-0.5 top-0.5 h-5 w-5 rounded-full bg-white shadow transition-transform {knob}" }
        }
    }
}
