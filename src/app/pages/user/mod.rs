//! Subscriber console pages, mounted under `/dashboard`.

use dioxus::prelude::*;

mod dashboard;
mod invite;
mod nodes;
mod purchases;
mod settings;
mod shop;
mod tickets;
mod topup;
mod traffic;

pub use dashboard::UserDashboard;
pub use invite::Invite;
pub use nodes::NodeList;
pub use purchases::Purchases;
pub use settings::Settings;
pub use shop::Shop;
pub use tickets::Tickets;
pub use topup::TopUp;
pub use traffic::Traffic;

/// Sidebar entries without a page of their own land on the dashboard.
#[component]
pub fn UserFallback(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "unrouted subscriber page");
    rsx! {
        UserDashboard {}
    }
}
