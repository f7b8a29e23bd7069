//! Console shells: themed header, sidebar and the routed page outlet.

use dioxus::prelude::*;

use super::sidebar::{Sidebar, Theme};
use crate::app::Route;
use crate::mock::{self, ADMIN_LOAD_PERCENT, PANEL_VERSION, SIDEBAR_NOTICE};
use crate::nav::{ADMIN_NAV, USER_NAV};

/// Tailwind theme extension for the two console colours.
const TAILWIND_CONFIG: &str = r#"
tailwind.config = {
  theme: {
    extend: {
      colors: {
        'primary-user': '#f97316',
        'primary-admin': '#dc2626',
      },
    },
  },
};
"#;

const CUSTOM_STYLES: &str = r#"
.bg-gradient-orange { background-image: linear-gradient(135deg, #fb923c 0%, #f97316 50%, #ea580c 100%); }
.bg-gradient-red { background-image: linear-gradient(135deg, #f87171 0%, #ef4444 50%, #dc2626 100%); }
.text-gradient-orange { background-image: linear-gradient(135deg, #fb923c, #ea580c); -webkit-background-clip: text; background-clip: text; color: transparent; }
body { font-family: ui-sans-serif, system-ui, -apple-system, "PingFang SC", "Microsoft YaHei", sans-serif; }
"#;

/// Document head shared by every page.
#[component]
pub fn PageHead() -> Element {
    rsx! {
        document::Title { "sPanel" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Script { src: "https://cdn.tailwindcss.com" }
        document::Script { {TAILWIND_CONFIG} }
        document::Style { {CUSTOM_STYLES} }
    }
}

#[component]
fn ConsoleHeader(
    theme: Theme,
    home: Route,
    brand_icon: String,
    subtitle: String,
    account: String,
    role: String,
    on_menu: EventHandler<()>,
    menu_open: bool,
) -> Element {
    let gradient = theme.gradient();
    rsx! {
        header { class: "sticky top-0 z-40 shadow-md {gradient}",
            div { class: "flex h-16 items-center justify-between px-4 sm:px-6 lg:px-8",
                div { class: "flex items-center gap-4",
                    button {
                        r#type: "button",
                        class: "rounded-md p-2 text-white hover:bg-white/20 lg:hidden",
                        onclick: move |_| on_menu.call(()),
                        if menu_open { "✕" } else { "☰" }
                    }
                    Link { to: home, class: "flex items-center gap-2",
                        div { class: "flex h-8 w-8 items-center justify-center rounded-lg bg-white/20",
                            "{brand_icon}"
                        }
                        div { class: "flex flex-col",
                            span { class: "text-xl font-bold leading-tight text-white", "sPanel" }
                            if !subtitle.is_empty() {
                                span { class: "-mt-1 text-[10px] text-white/80", "{subtitle}" }
                            }
                        }
                    }
                }
                div { class: "flex items-center gap-3",
                    div { class: "hidden text-right sm:block",
                        p { class: "text-sm font-medium text-white", "{account}" }
                        p { class: "text-xs text-white/80", "{role}" }
                    }
                    div { class: "flex h-10 w-10 items-center justify-center rounded-full bg-white/20 text-white",
                        "👤"
                    }
                    Link {
                        to: Route::Login {},
                        class: "rounded-md p-2 text-white hover:bg-white/20",
                        title: "登出",
                        "⎋"
                    }
                }
            }
        }
    }
}

#[component]
pub fn UserLayout() -> Element {
    let mut sidebar_open = use_signal(|| false);
    let path = use_route::<Route>().to_string();
    let profile = mock::user::profile();
    let role = format!("VIP {}", profile.class);

    rsx! {
        div { class: "min-h-screen bg-gray-50",
            ConsoleHeader {
                theme: Theme::User,
                home: Route::UserDashboard {},
                brand_icon: "✈️",
                subtitle: "",
                account: profile.email,
                role,
                menu_open: sidebar_open(),
                on_menu: move |_| sidebar_open.toggle(),
            }
            div { class: "flex",
                Sidebar {
                    sections: USER_NAV,
                    current_path: path,
                    open: sidebar_open(),
                    theme: Theme::User,
                    on_close: move |_| sidebar_open.set(false),
                    footer: rsx! {
                        div { class: "rounded-lg bg-gradient-orange p-4 text-white",
                            div { class: "mb-2 flex items-center gap-3",
                                span { "📣" }
                                span { class: "font-semibold", "公告" }
                            }
                            p { class: "text-sm text-white/90", "{SIDEBAR_NOTICE}" }
                        }
                    },
                }
                main { class: "min-w-0 flex-1 p-4 sm:p-6 lg:p-8",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
pub fn AdminLayout() -> Element {
    let mut sidebar_open = use_signal(|| false);
    let path = use_route::<Route>().to_string();

    rsx! {
        div { class: "min-h-screen bg-gray-50",
            ConsoleHeader {
                theme: Theme::Admin,
                home: Route::AdminDashboard {},
                brand_icon: "🛡️",
                subtitle: "ADMIN",
                account: "Administrator",
                role: "Super Admin",
                menu_open: sidebar_open(),
                on_menu: move |_| sidebar_open.toggle(),
            }
            div { class: "flex",
                Sidebar {
                    sections: ADMIN_NAV,
                    current_path: path,
                    open: sidebar_open(),
                    theme: Theme::Admin,
                    on_close: move |_| sidebar_open.set(false),
                    footer: rsx! {
                        div { class: "rounded-lg bg-gradient-red p-4 text-white",
                            div { class: "mb-2 flex items-center gap-3",
                                span { "🖥️" }
                                span { class: "font-semibold", "系统状态" }
                            }
                            div { class: "space-y-1.5 text-sm text-white/90",
                                div { class: "flex items-center justify-between",
                                    span { "负载" }
                                    span { class: "font-mono", "{ADMIN_LOAD_PERCENT}%" }
                                }
                                div { class: "flex items-center justify-between",
                                    span { "版本" }
                                    span { class: "font-mono", "{PANEL_VERSION}" }
                                }
                            }
                        }
                    },
                }
                main { class: "min-w-0 flex-1 p-4 sm:p-6 lg:p-8",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
