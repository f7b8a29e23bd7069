//! Dropdown select.
//!
//! The open/closed machine lives in [`SelectState`]; the component only
//! feeds it [`SelectAction`]s and renders the result. While open, a
//! transparent full-screen overlay catches outside clicks.

use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectAction {
    TriggerClick,
    Pick(String),
    OverlayClick,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectState {
    pub open: bool,
    pub value: String,
}

impl SelectState {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            open: false,
            value: value.into(),
        }
    }

    /// Applies `action` and returns the newly picked value, if any.
    pub fn apply(&mut self, action: SelectAction, disabled: bool) -> Option<String> {
        match action {
            SelectAction::TriggerClick => {
                if !disabled {
                    self.open = true;
                }
                None
            }
            SelectAction::Pick(value) => {
                if !self.open {
                    return None;
                }
                self.open = false;
                self.value = value.clone();
                Some(value)
            }
            SelectAction::OverlayClick => {
                self.open = false;
                None
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[component]
pub fn Select(
    value: String,
    options: Vec<SelectOption>,
    on_change: EventHandler<String>,
    #[props(default)] disabled: bool,
    #[props(default)] placeholder: String,
    #[props(default)] id: String,
) -> Element {
    // The rendered selection always comes from the `value` prop.
    let mut state = use_signal(|| SelectState::new(value.clone()));

    let mut dispatch = move |action: SelectAction| {
        if let Some(picked) = state.write().apply(action, disabled) {
            on_change.call(picked);
        }
    };

    let open = state.read().open;
    let label = options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.clone())
        .unwrap_or_else(|| placeholder.clone());

    rsx! {
        div { class: "relative",
            button {
                r#type: "button",
                id: "{id}",
                disabled,
                class: "flex h-10 w-full items-center justify-between rounded-md border border-gray-300 bg-white px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-gray-950 disabled:cursor-not-allowed disabled:opacity-50",
                onclick: move |_| dispatch(SelectAction::TriggerClick),
                span { "{label}" }
                span { class: "opacity-50", "▾" }
            }
            if open {
                div {
                    class: "fixed inset-0 z-50",
                    onclick: move |_| dispatch(SelectAction::OverlayClick),
                }
                div { class: "absolute z-50 mt-1 max-h-60 w-full overflow-auto rounded-md border border-gray-200 bg-white py-1 shadow-lg",
                    for option in options.iter().cloned() {
                        SelectItem {
                            selected: option.value == value,
                            label: option.label.clone(),
                            on_pick: move |_| dispatch(SelectAction::Pick(option.value.clone())),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SelectItem(selected: bool, label: String, on_pick: EventHandler<()>) -> Element {
    let class = if selected {
        "bg-gray-100 text-gray-900"
    } else {
        "text-gray-700 hover:bg-gray-50"
    };
    rsx! {
        div {
            class: "relative flex cursor-pointer select-none items-center px-3 py-2 text-sm {class}",
            onclick: move |_| on_pick.call(()),
            if selected {
                span { class: "mr-2", "✓" }
            }
            "{label}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_closed() {
        let state = SelectState::new("24");
        assert!(!state.open);
        assert_eq!(state.value, "24");
    }

    #[test]
    fn test_trigger_opens_and_pick_closes_with_value() {
        let mut state = SelectState::new("open");
        assert_eq!(state.apply(SelectAction::TriggerClick, false), None);
        assert!(state.open);

        let picked = state.apply(SelectAction::Pick("invite".into()), false);
        assert_eq!(picked.as_deref(), Some("invite"));
        assert!(!state.open);
        assert_eq!(state.value, "invite");
    }

    #[test]
    fn test_overlay_click_closes_without_change() {
        let mut state = SelectState::new("smtp");
        state.apply(SelectAction::TriggerClick, false);
        assert_eq!(state.apply(SelectAction::OverlayClick, false), None);
        assert!(!state.open);
        assert_eq!(state.value, "smtp");
    }

    #[test]
    fn test_disabled_trigger_stays_closed() {
        let mut state = SelectState::new("none");
        state.apply(SelectAction::TriggerClick, true);
        assert!(!state.open);
        assert_eq!(state.apply(SelectAction::Pick("codepay".into()), true), None);
        assert_eq!(state.value, "none");
    }
}
