//! Collapsible sidebar built from a navigation manifest.

use dioxus::prelude::*;

use crate::nav::{is_active, NavItem, NavSection};

const LINK_BASE: &str = "flex items-center gap-3 rounded-lg px-3 py-2.5 text-sm font-medium transition-all";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    User,
    Admin,
}

impl Theme {
    fn active_class(self) -> &'static str {
        match self {
            Self::User => "bg-primary-user/10 text-primary-user shadow-sm",
            Self::Admin => "bg-primary-admin/10 text-primary-admin shadow-sm",
        }
    }

    pub fn gradient(self) -> &'static str {
        match self {
            Self::User => "bg-gradient-orange",
            Self::Admin => "bg-gradient-red",
        }
    }
}

#[component]
pub fn Sidebar(
    sections: &'static [NavSection],
    current_path: String,
    open: bool,
    theme: Theme,
    on_close: EventHandler<()>,
    footer: Element,
) -> Element {
    let slide = if open {
        "translate-x-0"
    } else {
        "-translate-x-full"
    };
    let active_class = theme.active_class();
    let link_class = move |active: bool| {
        if active {
            format!("{LINK_BASE} {active_class}")
        } else {
            format!("{LINK_BASE} text-gray-700 hover:bg-gray-100")
        }
    };

    rsx! {
        if open {
            div {
                class: "fixed inset-0 z-40 bg-black/50 lg:hidden",
                onclick: move |_| on_close.call(()),
            }
        }
        aside { class: "fixed inset-y-0 left-0 z-50 w-72 transform bg-white shadow-xl transition-transform duration-300 ease-in-out lg:static lg:translate-x-0 {slide}",
            div { class: "flex h-full flex-col",
                div { class: "flex h-16 items-center justify-between border-b px-6 lg:hidden",
                    span { class: "text-lg font-bold text-gray-900", "导航菜单" }
                    button {
                        r#type: "button",
                        class: "rounded-md p-2 hover:bg-gray-100",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                nav { class: "flex-1 overflow-y-auto p-4",
                    ul { class: "space-y-6",
                        for &NavSection { title, items } in sections.iter() {
                            li { key: "{title}",
                                p { class: "mb-3 px-3 text-xs font-semibold uppercase tracking-wider text-gray-500",
                                    "{title}"
                                }
                                ul { class: "space-y-1",
                                    for &NavItem { name, href, icon } in items.iter() {
                                        li { key: "{href}",
                                            Link {
                                                to: href,
                                                class: link_class(is_active(&current_path, href)),
                                                onclick: move |_| on_close.call(()),
                                                span { class: "w-5 text-center", "{icon}" }
                                                span { "{name}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "border-t p-4", {footer} }
            }
        }
    }
}
