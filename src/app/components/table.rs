//! Structural wrappers over `<table>`.

use dioxus::prelude::*;

#[component]
pub fn Table(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "relative w-full overflow-auto",
            table { class: "w-full caption-bottom text-sm {class}", {children} }
        }
    }
}

#[component]
pub fn TableHeader(children: Element) -> Element {
    rsx! { thead { class: "border-b bg-gray-50", {children} } }
}

#[component]
pub fn TableBody(children: Element) -> Element {
    rsx! { tbody { class: "divide-y", {children} } }
}

#[component]
pub fn TableRow(#[props(default)] class: String, children: Element) -> Element {
    rsx! { tr { class: "transition-colors hover:bg-gray-50 {class}", {children} } }
}

#[component]
pub fn TableHead(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        th { class: "h-11 px-4 text-left align-middle font-medium text-gray-500 whitespace-nowrap {class}",
            {children}
        }
    }
}

#[component]
pub fn TableCell(#[props(default)] class: String, children: Element) -> Element {
    rsx! { td { class: "p-4 align-middle {class}", {children} } }
}

#[component]
pub fn TableCaption(children: Element) -> Element {
    rsx! { caption { class: "mt-4 text-sm text-gray-500", {children} } }
}

/// Full-width row shown when a filtered table has nothing to display.
#[component]
pub fn EmptyRow(columns: u32, message: String) -> Element {
    rsx! {
        tr {
            td { colspan: "{columns}", class: "p-8 text-center text-gray-500", "{message}" }
        }
    }
}
