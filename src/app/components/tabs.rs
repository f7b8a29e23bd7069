//! Tab strip with content panels.
//!
//! [`Tabs`] owns a [`TabsState`] signal and shares it through context;
//! triggers write to it and panels read it.

use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabsState {
    active: String,
}

impl TabsState {
    pub fn new(active: impl Into<String>) -> Self {
        Self {
            active: active.into(),
        }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    pub fn select(&mut self, value: &str) {
        if self.active != value {
            self.active = value.to_string();
        }
    }

    pub fn is_active(&self, value: &str) -> bool {
        self.active == value
    }
}

#[derive(Clone, Copy)]
struct TabsContext(Signal<TabsState>);

#[component]
pub fn Tabs(
    default_value: String,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let state = use_signal(|| TabsState::new(default_value));
    use_context_provider(|| TabsContext(state));

    rsx! {
        div { class: "{class}", {children} }
    }
}

#[component]
pub fn TabsList(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div { class: "inline-flex flex-wrap items-center gap-1 rounded-lg bg-gray-100 p-1 {class}",
            role: "tablist",
            {children}
        }
    }
}

#[component]
pub fn TabsTrigger(value: String, children: Element) -> Element {
    let TabsContext(mut state) = use_context::<TabsContext>();
    let selected = state.read().is_active(&value);
    let class = if selected {
        "bg-white text-gray-900 shadow-sm"
    } else {
        "text-gray-500 hover:text-gray-900"
    };

    rsx! {
        button {
            r#type: "button",
            role: "tab",
            "aria-selected": "{selected}",
            class: "inline-flex items-center justify-center gap-1.5 rounded-md px-3 py-1.5 text-sm font-medium transition-all {class}",
            onclick: move |_| state.write().select(&value),
            {children}
        }
    }
}

/// Renders its children only while `value` is the active tab.
#[component]
pub fn TabsContent(value: String, #[props(default)] class: String, children: Element) -> Element {
    let TabsContext(state) = use_context::<TabsContext>();
    if !state.read().is_active(&value) {
        return rsx! {};
    }
    rsx! {
        div { class: "mt-4 {class}", role: "tabpanel", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_changes_active_tab() {
        let mut state = TabsState::new("basic");
        assert!(state.is_active("basic"));
        state.select("email");
        assert_eq!(state.active(), "email");
        assert!(!state.is_active("basic"));
        state.select("email");
        assert_eq!(state.active(), "email");
    }
}
