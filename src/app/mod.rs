//! Dioxus fullstack application entry point.
//!
//! The root component installs the shared services and the toast queue,
//! then hands over to the router. Two console trees live under
//! `/dashboard` and `/admin`, each wrapped in its own layout; the auth pages
//! stand alone.

use std::rc::Rc;

use dioxus::prelude::*;

pub mod clipboard;
pub mod components;
pub mod pages;

use components::layout::{AdminLayout, PageHead, UserLayout};
use components::toaster::{use_toaster_provider, ToasterView};
use pages::admin::{
    AdminAnnouncements, AdminCommands, AdminCoupons, AdminDashboard, AdminDeposits,
    AdminFallback, AdminLoginHistory, AdminNodeTraffic, AdminNodes, AdminOnlineIps, AdminOrders,
    AdminProducts, AdminRelayRules, AdminSettings, AdminTickets, AdminUsers, AuditLogs,
    AuditRules, BannedIps, NodeAdjustment, UnbannedIps, UserInvites,
};
use pages::auth::{Login, PasswordReset, Register};
use pages::not_found::NotFound;
use pages::user::{
    Invite, NodeList, Purchases, Settings, Shop, Tickets, TopUp, Traffic, UserDashboard,
    UserFallback,
};

use crate::service::{PanelService, Services};

/// Root app component with routing
#[component]
pub fn App() -> Element {
    use_context_provider(Services::default);
    use_toaster_provider();

    rsx! {
        PageHead {}
        Router::<Route> {}
        ToasterView {}
    }
}

/// Application routes
#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::UserDashboard {})]
    #[layout(UserLayout)]
        #[route("/dashboard")]
        UserDashboard {},
        #[route("/dashboard/nodes")]
        NodeList {},
        #[route("/dashboard/shop")]
        Shop {},
        #[route("/dashboard/topup")]
        TopUp {},
        #[route("/dashboard/invite")]
        Invite {},
        #[route("/dashboard/settings")]
        Settings {},
        #[route("/dashboard/tickets")]
        Tickets {},
        #[route("/dashboard/purchases")]
        Purchases {},
        #[route("/dashboard/traffic")]
        Traffic {},
        #[route("/dashboard/:..segments")]
        UserFallback { segments: Vec<String> },
    #[end_layout]

    #[layout(AdminLayout)]
        #[route("/admin")]
        AdminDashboard {},
        #[route("/admin/announcements")]
        AdminAnnouncements {},
        #[route("/admin/tickets")]
        AdminTickets {},
        #[route("/admin/commands")]
        AdminCommands {},
        #[route("/admin/nodes")]
        AdminNodes {},
        #[route("/admin/nodes/adjustment")]
        NodeAdjustment {},
        #[route("/admin/nodes/traffic")]
        AdminNodeTraffic {},
        #[route("/admin/nodes/banned")]
        BannedIps {},
        #[route("/admin/nodes/unbanned")]
        UnbannedIps {},
        #[route("/admin/users")]
        AdminUsers {},
        #[route("/admin/users/relay")]
        AdminRelayRules {},
        #[route("/admin/users/invite")]
        UserInvites {},
        #[route("/admin/users/login-history")]
        AdminLoginHistory {},
        #[route("/admin/users/online-ip")]
        AdminOnlineIps {},
        #[route("/admin/audit/rules")]
        AuditRules {},
        #[route("/admin/audit/logs")]
        AuditLogs {},
        #[route("/admin/transactions/deposit")]
        AdminDeposits {},
        #[route("/admin/transactions/products")]
        AdminProducts {},
        #[route("/admin/transactions/coupons")]
        AdminCoupons {},
        #[route("/admin/orders")]
        AdminOrders {},
        #[route("/admin/settings")]
        AdminSettings {},
        #[route("/admin/:..segments")]
        AdminFallback { segments: Vec<String> },
    #[end_layout]

    #[route("/auth/login")]
    Login {},
    #[route("/auth/register")]
    Register {},
    #[route("/auth/password/reset")]
    PasswordReset {},

    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// The panel service provided at the app root.
///
/// Reads context without subscribing, so it is safe inside event handlers.
pub fn panel() -> Rc<dyn PanelService> {
    consume_context::<Services>().panel
}

/// Wall-clock time used to stamp locally created records.
pub fn local_now() -> chrono::NaiveDateTime {
    chrono::Local::now().naive_local()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    use crate::nav::{ADMIN_NAV, USER_NAV};

    fn is_fallback(route: &Route) -> bool {
        matches!(
            route,
            Route::UserFallback { .. } | Route::AdminFallback { .. } | Route::NotFound { .. }
        )
    }

    #[test]
    fn test_admin_nav_hrefs_resolve_to_pages() {
        for item in ADMIN_NAV.iter().flat_map(|s| s.items.iter()) {
            let route = Route::from_str(item.href)
                .unwrap_or_else(|_| panic!("{} does not parse", item.href));
            assert!(!is_fallback(&route), "{} hits a fallback", item.href);
            assert_eq!(route.to_string(), item.href);
        }
    }

    #[test]
    fn test_user_nav_hrefs_resolve() {
        let mut unrouted = Vec::new();
        for item in USER_NAV.iter().flat_map(|s| s.items.iter()) {
            let route = Route::from_str(item.href).unwrap_or_else(|_| panic!("{}", item.href));
            if matches!(route, Route::UserFallback { .. }) {
                unrouted.push(item.href);
            }
        }
        assert_eq!(
            unrouted,
            vec!["/dashboard/unlock", "/dashboard/profile", "/dashboard/docs"]
        );
    }

    #[test]
    fn test_unknown_paths() {
        assert!(matches!(
            Route::from_str("/admin/unknown/page"),
            Ok(Route::AdminFallback { .. })
        ));
        assert!(matches!(
            Route::from_str("/nowhere"),
            Ok(Route::NotFound { .. })
        ));
        assert_eq!(
            Route::from_str("/auth/password/reset").ok(),
            Some(Route::PasswordReset {})
        );
    }
}
