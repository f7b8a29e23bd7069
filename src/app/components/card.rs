//! Card containers, page headings and progress bars.

use dioxus::prelude::*;

#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "rounded-xl border bg-white shadow-sm {class}", {children} }
    }
}

/// Card with a titled header section.
#[component]
pub fn TitledCard(
    title: String,
    #[props(default)] icon: String,
    #[props(default)] description: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        Card { class,
            div { class: "flex flex-col gap-1 p-6 pb-3",
                h3 { class: "flex items-center gap-2 text-lg font-semibold text-gray-900",
                    if !icon.is_empty() {
                        span { "{icon}" }
                    }
                    "{title}"
                }
                if !description.is_empty() {
                    p { class: "text-sm text-gray-500", "{description}" }
                }
            }
            div { class: "p-6 pt-3", {children} }
        }
    }
}

#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] subtitle: String,
    #[props(default = VNode::empty())] actions: Element,
) -> Element {
    rsx! {
        div { class: "flex flex-wrap items-center justify-between gap-4",
            div {
                h1 { class: "text-3xl font-bold text-gray-900", "{title}" }
                if !subtitle.is_empty() {
                    p { class: "mt-1 text-gray-600", "{subtitle}" }
                }
            }
            {actions}
        }
    }
}

/// Small figure card used in the stats rows.
#[component]
pub fn StatTile(
    label: String,
    value: String,
    #[props(default)] icon: String,
    #[props(default)] hint: String,
    #[props(default = "text-gray-900".to_string())] value_class: String,
) -> Element {
    rsx! {
        Card {
            div { class: "flex items-center justify-between p-5",
                div {
                    p { class: "text-sm text-gray-600", "{label}" }
                    p { class: "mt-1 text-2xl font-bold {value_class}", "{value}" }
                    if !hint.is_empty() {
                        p { class: "mt-1 text-xs text-gray-500", "{hint}" }
                    }
                }
                if !icon.is_empty() {
                    div { class: "flex h-12 w-12 items-center justify-center rounded-full bg-gray-100 text-2xl",
                        "{icon}"
                    }
                }
            }
        }
    }
}

/// Horizontal bar filled to `percent` (clamped to 0-100).
#[component]
pub fn UsageBar(
    percent: f64,
    #[props(default = "bg-primary-user".to_string())] bar_class: String,
    #[props(default = "h-2".to_string())] height: String,
) -> Element {
    let width = format!("{:.1}%", percent.clamp(0.0, 100.0));
    rsx! {
        div { class: "w-full overflow-hidden rounded-full bg-gray-200 {height}",
            div { class: "h-full rounded-full transition-all {bar_class}", style: "width: {width}" }
        }
    }
}

/// Centered message for lists with nothing to show.
#[component]
pub fn EmptyState(icon: String, title: String, #[props(default)] hint: String) -> Element {
    rsx! {
        div { class: "flex flex-col items-center justify-center py-12 text-center",
            div { class: "mb-3 text-4xl", "{icon}" }
            p { class: "font-medium text-gray-700", "{title}" }
            if !hint.is_empty() {
                p { class: "mt-1 text-sm text-gray-500", "{hint}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_without_actions() -> Element {
        rsx! {
            PageHeader { title: "节点列表" }
            PageHeader { title: "工单", subtitle: "查看工单", actions: rsx! { button { "新建" } } }
        }
    }

    #[test]
    fn test_page_header_actions_are_optional() {
        let mut dom = VirtualDom::new(header_without_actions);
        dom.rebuild_in_place();
    }
}
