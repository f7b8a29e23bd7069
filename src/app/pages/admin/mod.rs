//! Administrator console pages, mounted under `/admin`.

use dioxus::prelude::*;

use crate::app::components::{Card, INPUT};

mod announcements;
mod audit;
mod commands;
mod dashboard;
mod nodes;
mod orders;
mod placeholder;
mod settings;
mod tickets;
mod transactions;
mod users;

pub use announcements::AdminAnnouncements;
pub use audit::{AuditLogs, AuditRules};
pub use commands::AdminCommands;
pub use dashboard::AdminDashboard;
pub use nodes::{AdminNodeTraffic, AdminNodes, BannedIps, NodeAdjustment, UnbannedIps};
pub use orders::AdminOrders;
pub use settings::AdminSettings;
pub use tickets::AdminTickets;
pub use transactions::{AdminCoupons, AdminDeposits, AdminProducts};
pub use users::{AdminLoginHistory, AdminOnlineIps, AdminRelayRules, AdminUsers, UserInvites};

/// Sidebar entries without a page of their own land on the overview.
#[component]
pub fn AdminFallback(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "unrouted admin page");
    rsx! {
        AdminDashboard {}
    }
}

/// Figure card used across the admin tables: label, value and an icon disc.
#[component]
pub(crate) fn Figure(
    label: String,
    value: String,
    icon: String,
    #[props(default = "text-gray-900".to_string())] value_class: String,
    #[props(default = "bg-blue-100".to_string())] disc: String,
) -> Element {
    rsx! {
        Card {
            div { class: "flex items-center justify-between p-6",
                div {
                    p { class: "mb-1 text-sm text-gray-600", "{label}" }
                    p { class: "text-2xl font-bold {value_class}", "{value}" }
                }
                div { class: "flex h-12 w-12 items-center justify-center rounded-full text-2xl {disc}", "{icon}" }
            }
        }
    }
}

/// Search input with a leading magnifier.
#[component]
pub(crate) fn SearchBox(
    value: String,
    placeholder: String,
    on_input: EventHandler<String>,
    #[props(default)] on_enter: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div { class: "relative flex-1",
            span { class: "pointer-events-none absolute left-3 top-1/2 -translate-y-1/2 text-gray-400", "🔍" }
            input {
                class: "{INPUT} pl-10",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        if let Some(handler) = on_enter {
                            handler.call(());
                        }
                    }
                },
            }
        }
    }
}

/// Tinted one-line banner above a record table.
#[component]
pub(crate) fn Notice(tint: String, icon: String, text: String) -> Element {
    rsx! {
        Card { class: "border-{tint}-200 bg-{tint}-50",
            div { class: "flex items-start gap-3 p-4",
                span { class: "mt-0.5 text-{tint}-600", "{icon}" }
                p { class: "flex-1 text-sm text-{tint}-800", "{text}" }
            }
        }
    }
}
