//! Node management: the node table and its record sub-pages.

use dioxus::prelude::*;

use spanel_model::{AdminNode, AdminNodeStatus};

use super::placeholder::Placeholder;
use super::Figure;
use crate::app::components::{
    use_toaster, Badge, BadgeVariant, PageHeader, Table, TableBody, TableCell, TableHead,
    TableHeader, TableRow, TitledCard, UsageBar, BUTTON_ADMIN,
};
use crate::format::{country_flag, Tone};
use crate::mock;
use crate::toast::ToastSink;

mod banned;
mod traffic;
mod unbanned;

pub use banned::BannedIps;
pub use traffic::AdminNodeTraffic;
pub use unbanned::UnbannedIps;

/// Badge for a node: offline wins over the configured status.
fn node_badge(node: &AdminNode) -> (BadgeVariant, &'static str) {
    if !node.is_online {
        (BadgeVariant::Destructive, "离线")
    } else if node.status == AdminNodeStatus::Maintenance {
        (BadgeVariant::Warning, "维护中")
    } else {
        (BadgeVariant::Success, "在线")
    }
}

fn class_variant(class_level: u8) -> BadgeVariant {
    if class_level == 0 {
        BadgeVariant::Secondary
    } else {
        BadgeVariant::Default
    }
}

#[component]
pub fn AdminNodes() -> Element {
    let toaster = use_toaster();
    let nodes = use_signal(mock::admin::nodes);

    let list = nodes();
    let total = list.len();
    let online = list.iter().filter(|n| n.is_online).count();
    let offline = total - online;
    let users: u32 = list.iter().map(|n| n.online_users).sum();

    rsx! {
        div { class: "space-y-6",
            PageHeader {
                title: "节点管理",
                subtitle: "管理所有代理节点的状态和配置",
                actions: rsx! {
                    button {
                        r#type: "button",
                        class: "{BUTTON_ADMIN} shadow-lg",
                        onclick: move |_| toaster.info("新增节点功能开发中"),
                        "＋ 新增节点"
                    }
                },
            }

            div { class: "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4",
                Figure { label: "总节点数", value: "{total}", icon: "🌐" }
                Figure { label: "在线节点", value: "{online}", icon: "✓", value_class: "text-green-600", disc: "bg-green-100" }
                Figure { label: "离线节点", value: "{offline}", icon: "⚠", value_class: "text-red-600", disc: "bg-red-100" }
                Figure { label: "在线用户", value: "{users}", icon: "👥", value_class: "text-purple-600", disc: "bg-purple-100" }
            }

            TitledCard { title: "节点列表",
                Table {
                    TableHeader {
                        TableRow {
                            TableHead { class: "w-[80px]", "ID" }
                            TableHead { "节点名称" }
                            TableHead { "服务器地址" }
                            TableHead { "类型" }
                            TableHead { "状态" }
                            TableHead { "等级限制" }
                            TableHead { "带宽使用" }
                            TableHead { "在线用户" }
                            TableHead { "地区" }
                            TableHead { class: "text-right", "操作" }
                        }
                    }
                    TableBody {
                        for node in list {
                            NodeRow { key: "{node.id}", node }
                        }
                        tr {
                            td { colspan: "10", class: "p-4 text-center text-sm text-gray-500",
                                "显示 1-{total} 条，共 {total} 条记录"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn NodeRow(node: AdminNode) -> Element {
    let toaster = use_toaster();
    let (variant, status) = node_badge(&node);
    let used = node.bandwidth_used_percent;
    let bar = Tone::for_bandwidth(used).bar_class();
    let used_text = format!("{used:.1}%");
    let protocol = node.protocol.to_uppercase();
    let flag = country_flag(&node.country_code);
    let id = node.id;
    rsx! {
        TableRow {
            TableCell { class: "font-medium", "#{id}" }
            TableCell { class: "font-semibold", "{node.name}" }
            TableCell { class: "font-mono text-sm", "{node.server}" }
            TableCell { Badge { variant: BadgeVariant::Outline, class: "text-xs", "{protocol}" } }
            TableCell {
                Badge { variant, class: "gap-1.5",
                    span { class: "h-2 w-2 rounded-full bg-white" }
                    "{status}"
                }
            }
            TableCell {
                Badge { variant: class_variant(node.class_level), "VIP {node.class_level}" }
            }
            TableCell {
                div { class: "space-y-1",
                    div { class: "flex items-center gap-2",
                        div { class: "flex-1",
                            UsageBar { percent: used, bar_class: bar }
                        }
                        span { class: "w-12 text-right text-xs text-gray-600", "{used_text}" }
                    }
                    p { class: "text-xs text-gray-500", "{node.bandwidth_limit_gb} GB 总量" }
                }
            }
            TableCell { span { class: "font-semibold text-gray-900", "{node.online_users}" } }
            TableCell { span { class: "text-lg", title: "{node.country_code}", "{flag}" } }
            TableCell { class: "text-right",
                div { class: "flex items-center justify-end gap-2",
                    button {
                        r#type: "button",
                        class: "h-8 w-8 rounded-md text-blue-600 hover:bg-blue-50",
                        onclick: move |_| toaster.info(&format!("编辑节点 #{id}")),
                        "✏️"
                    }
                    button {
                        r#type: "button",
                        class: "h-8 w-8 rounded-md text-red-600 hover:bg-red-50",
                        onclick: move |_| toaster.info(&format!("删除节点 #{id}")),
                        "🗑"
                    }
                }
            }
        }
    }
}

#[component]
pub fn NodeAdjustment() -> Element {
    rsx! {
        Placeholder { title: "节点调整", description: "调整节点配置与参数", icon: "🎚️" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offline_beats_maintenance() {
        let nodes = mock::admin::nodes();
        let us = nodes.iter().find(|n| n.id == 3).unwrap();
        assert_eq!(node_badge(us), (BadgeVariant::Destructive, "离线"));

        let mut maintenance = us.clone();
        maintenance.is_online = true;
        assert_eq!(node_badge(&maintenance), (BadgeVariant::Warning, "维护中"));

        assert_eq!(node_badge(&nodes[0]), (BadgeVariant::Success, "在线"));
    }

    #[test]
    fn test_bandwidth_bars() {
        let nodes = mock::admin::nodes();
        let bars: Vec<_> = nodes
            .iter()
            .map(|n| Tone::for_bandwidth(n.bandwidth_used_percent))
            .collect();
        assert_eq!(
            bars,
            vec![Tone::Green, Tone::Orange, Tone::Green, Tone::Orange, Tone::Green]
        );
    }
}
