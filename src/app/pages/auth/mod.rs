//! Stand-alone sign-in pages, rendered outside both console layouts.

use dioxus::prelude::*;

use crate::app::components::INPUT;
use crate::app::Route;

mod login;
mod register;
mod reset;

pub use login::Login;
pub use register::Register;
pub use reset::PasswordReset;

const SUBMIT: &str = "inline-flex w-full items-center justify-center gap-2 rounded-md bg-primary-admin px-4 py-3 text-base font-semibold text-white shadow-lg transition-opacity hover:opacity-90 disabled:cursor-not-allowed disabled:opacity-50";

const LINK: &str = "text-sm font-medium text-primary-admin transition-colors hover:text-red-700";

/// Brand header, centred card and footer shared by the auth pages.
#[component]
fn AuthShell(
    tagline: String,
    #[props(default = VNode::empty())] footer: Element,
    children: Element,
) -> Element {
    rsx! {
        div { class: "flex min-h-screen items-center justify-center bg-gradient-to-br from-gray-50 via-red-50/30 to-orange-50/30 p-4",
            div { class: "w-full max-w-md",
                div { class: "mb-8 text-center",
                    Link {
                        to: Route::UserDashboard {},
                        class: "bg-gradient-red bg-clip-text text-3xl font-bold text-transparent",
                        "sPanel"
                    }
                    p { class: "mt-2 text-gray-600", "{tagline}" }
                }
                div { class: "rounded-2xl border border-gray-100 bg-white p-8 shadow-2xl", {children} }
                {footer}
            }
        }
    }
}

/// "或" separator followed by a link back home.
#[component]
fn OrHome() -> Element {
    rsx! {
        div { class: "relative my-6",
            div { class: "absolute inset-0 flex items-center",
                div { class: "w-full border-t border-gray-200" }
            }
            div { class: "relative flex justify-center text-sm",
                span { class: "bg-white px-2 text-gray-500", "或" }
            }
        }
        div { class: "text-center",
            Link {
                to: Route::UserDashboard {},
                class: "text-sm text-gray-600 transition-colors hover:text-gray-900",
                "返回首页"
            }
        }
    }
}

/// Input with a leading glyph.
#[component]
fn IconInput(
    id: String,
    icon: String,
    kind: String,
    placeholder: String,
    value: String,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "relative",
            span { class: "absolute left-3 top-1/2 -translate-y-1/2 text-gray-400", "{icon}" }
            input {
                id: "{id}",
                class: "{INPUT} pl-10",
                r#type: "{kind}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
        }
    }
}
