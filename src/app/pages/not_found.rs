use dioxus::prelude::*;

use crate::app::Route;

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    tracing::debug!(path = %route.join("/"), "No route matched");
    rsx! {
        div { class: "flex min-h-screen flex-col items-center justify-center gap-4 bg-gray-50 p-4 text-center",
            p { class: "text-6xl font-bold text-gray-300", "404" }
            h1 { class: "text-2xl font-bold text-gray-900", "页面不存在" }
            p { class: "text-gray-600", "您访问的页面不存在或已被移除" }
            Link {
                to: Route::UserDashboard {},
                class: "rounded-md bg-primary-user px-4 py-2 text-sm font-medium text-white hover:opacity-90",
                "返回首页"
            }
        }
    }
}
