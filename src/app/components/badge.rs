//! Status pill.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
    Destructive,
    Outline,
    Success,
    Warning,
}

impl BadgeVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "border-transparent bg-gray-900 text-white",
            Self::Secondary => "border-transparent bg-gray-100 text-gray-900",
            Self::Destructive => "border-transparent bg-red-600 text-white",
            Self::Outline => "border-gray-300 text-gray-700",
            Self::Success => "border-transparent bg-green-500 text-white",
            Self::Warning => "border-transparent bg-orange-500 text-white",
        }
    }
}

const BASE: &str = "inline-flex items-center gap-1 rounded-full border px-2.5 py-0.5 text-xs font-semibold";

#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    let variant_class = variant.class();
    rsx! {
        span { class: "{BASE} {variant_class} {class}", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_classes_are_distinct() {
        let all = [
            BadgeVariant::Default,
            BadgeVariant::Secondary,
            BadgeVariant::Destructive,
            BadgeVariant::Outline,
            BadgeVariant::Success,
            BadgeVariant::Warning,
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a.class(), b.class());
            }
        }
        assert_eq!(BadgeVariant::default(), BadgeVariant::Default);
        assert!(BadgeVariant::Success.class().contains("bg-green-500"));
    }
}
