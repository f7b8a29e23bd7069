//! Node catalogue grouped by VIP class.

use dioxus::prelude::*;

use spanel_model::{Node, NodeStatus};

use crate::app::clipboard::copy_text;
use crate::app::components::{
    use_toaster, Badge, BadgeVariant, Card, EmptyState, PageHeader, BUTTON_OUTLINE, BUTTON_USER,
};
use crate::mock::{self, NODE_GROUPS};
use crate::timer::sleep_ms;
use crate::toast::ToastSink;

const COPIED_FEEDBACK_MS: u32 = 2000;

/// Adds `class` to the expanded set, or removes it when already present.
fn toggle_group(expanded: &mut Vec<u8>, class: u8) {
    if let Some(pos) = expanded.iter().position(|c| *c == class) {
        expanded.remove(pos);
    } else {
        expanded.push(class);
    }
}

fn nodes_in(nodes: &[Node], class: u8) -> Vec<Node> {
    nodes.iter().filter(|n| n.class == class).cloned().collect()
}

#[component]
pub fn NodeList() -> Element {
    let nodes = use_signal(mock::user::nodes);
    // The first two groups start open.
    let mut expanded = use_signal(|| {
        NODE_GROUPS
            .iter()
            .take(2)
            .map(|(class, _)| *class)
            .collect::<Vec<u8>>()
    });
    let copied = use_signal(|| None::<u32>);

    let subtitle = format!("共 {} 个可用节点", nodes.read().len());

    rsx! {
        div { class: "space-y-6",
            PageHeader { title: "节点列表", subtitle }

            for &(class , name) in NODE_GROUPS {
                {
                    let group = nodes_in(&nodes.read(), class);
                    let is_open = expanded.read().contains(&class);
                    let count = group.len();
                    rsx! {
                        div { key: "{class}", class: "space-y-3",
                            button {
                                r#type: "button",
                                class: "flex w-full items-center justify-between rounded-lg bg-gradient-orange px-6 py-4 text-white shadow-md transition-all hover:shadow-lg",
                                onclick: move |_| toggle_group(&mut expanded.write(), class),
                                div { class: "flex items-center gap-3",
                                    span { class: "text-xl", "🌐" }
                                    span { class: "text-lg font-semibold", "{name}" }
                                    Badge { variant: BadgeVariant::Secondary, class: "bg-white/20 text-white",
                                        "{count} 个节点"
                                    }
                                }
                                span { if is_open { "▲" } else { "▼" } }
                            }
                            if is_open {
                                if group.is_empty() {
                                    Card {
                                        EmptyState { icon: "🛰️", title: "暂无节点", hint: "该分组下暂时没有可用节点" }
                                    }
                                } else {
                                    div { class: "grid grid-cols-1 gap-4 md:grid-cols-2 lg:grid-cols-3",
                                        for node in group {
                                            NodeCard { key: "{node.id}", node, copied }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NodeCard(node: Node, copied: Signal<Option<u32>>) -> Element {
    let toaster = use_toaster();
    let id = node.id;
    let is_copied = copied() == Some(id);
    let (status_variant, breathe) = match node.status {
        NodeStatus::Online => (BadgeVariant::Success, "animate-pulse"),
        NodeStatus::Busy => (BadgeVariant::Destructive, ""),
    };
    let status = node.status.label();
    let config = node.config.clone();

    let on_copy = move |_| {
        let text = match serde_json::to_string_pretty(&config) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(%err, node = id, "Failed to serialize node config");
                return;
            }
        };
        copy_text(&text);
        copied.set(Some(id));
        toaster.success("节点配置已复制！");
        spawn(async move {
            sleep_ms(COPIED_FEEDBACK_MS).await;
            if copied() == Some(id) {
                copied.set(None);
            }
        });
    };

    rsx! {
        Card {
            div { class: "p-5",
                div { class: "mb-4",
                    div { class: "mb-1 flex items-center gap-2",
                        h3 { class: "font-semibold text-gray-900", "{node.name}" }
                        Badge { variant: BadgeVariant::Outline, class: "text-xs", "#{id}" }
                    }
                    Badge { variant: status_variant, class: "text-xs",
                        span { class: "mr-1.5 inline-block h-2 w-2 rounded-full bg-white {breathe}" }
                        "{status}"
                    }
                }
                div { class: "space-y-3 text-sm text-gray-600",
                    div { class: "flex items-center gap-2", span { "⚡" } span { "{node.protocol}" } }
                    div { class: "flex items-center gap-2", span { "📊" } span { "{node.bandwidth} GB" } }
                    div { class: "flex items-center gap-2", span { "👥" } span { "{node.online} 人在线" } }
                    div { class: "flex items-center gap-2",
                        span { class: "font-semibold", "倍率:" }
                        span { class: "font-bold text-primary-user", "x{node.rate}" }
                    }
                }
                div { class: "mt-4 border-t pt-4",
                    button {
                        r#type: "button",
                        class: if is_copied { "{BUTTON_USER} w-full" } else { "{BUTTON_OUTLINE} w-full" },
                        onclick: on_copy,
                        if is_copied { "✓ 已复制" } else { "📋 复制配置" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_group_twice_restores() {
        let mut expanded = vec![1, 2];
        toggle_group(&mut expanded, 1);
        assert_eq!(expanded, vec![2]);
        toggle_group(&mut expanded, 1);
        assert_eq!(expanded, vec![2, 1]);
        toggle_group(&mut expanded, 3);
        assert!(expanded.contains(&3));
    }

    #[test]
    fn test_nodes_in_group() {
        let nodes = mock::user::nodes();
        assert_eq!(nodes_in(&nodes, 1).len(), 4);
        assert_eq!(nodes_in(&nodes, 2).len(), 1);
        assert!(nodes_in(&nodes, 3).is_empty());
    }

    #[test]
    fn test_copied_config_is_pretty_json() {
        let node = &mock::user::nodes()[3];
        let text = serde_json::to_string_pretty(&node.config).unwrap();
        assert!(text.contains("\n  \"password\": \"your-password\""));
        assert!(!text.contains("uuid"));
    }
}
