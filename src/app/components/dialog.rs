//! Modal dialogs.

use dioxus::prelude::*;

/// Centered modal over a dimmed backdrop. Clicking the backdrop closes it.
#[component]
pub fn Dialog(
    open: bool,
    title: String,
    on_close: EventHandler<()>,
    #[props(default)] description: String,
    children: Element,
) -> Element {
    if !open {
        return rsx! {};
    }
    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center p-4",
            div {
                class: "absolute inset-0 bg-black/50",
                onclick: move |_| on_close.call(()),
            }
            div { class: "relative z-10 w-full max-w-lg rounded-xl bg-white p-6 shadow-xl",
                role: "dialog",
                button {
                    r#type: "button",
                    class: "absolute right-4 top-4 text-gray-400 hover:text-gray-700",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
                h2 { class: "text-lg font-semibold text-gray-900", "{title}" }
                if !description.is_empty() {
                    p { class: "mt-1 text-sm text-gray-500", "{description}" }
                }
                div { class: "mt-4", {children} }
            }
        }
    }
}

/// Yes/no confirmation in place of the browser `confirm()`.
#[component]
pub fn ConfirmDialog(
    open: bool,
    title: String,
    message: String,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
    #[props(default = "确定".to_string())] confirm_label: String,
    #[props(default)] destructive: bool,
) -> Element {
    let confirm_class = if destructive {
        "bg-red-600 hover:bg-red-700"
    } else {
        "bg-primary-user hover:opacity-90"
    };
    rsx! {
        Dialog { open, title, on_close: on_cancel,
            p { class: "whitespace-pre-line text-sm text-gray-700", "{message}" }
            div { class: "mt-6 flex justify-end gap-3",
                button {
                    r#type: "button",
                    class: "rounded-md border px-4 py-2 text-sm hover:bg-gray-50",
                    onclick: move |_| on_cancel.call(()),
                    "取消"
                }
                button {
                    r#type: "button",
                    class: "rounded-md px-4 py-2 text-sm font-medium text-white {confirm_class}",
                    onclick: move |_| on_confirm.call(()),
                    "{confirm_label}"
                }
            }
        }
    }
}
