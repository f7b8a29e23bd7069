use dioxus::prelude::*;

use crate::app::components::{
    Badge, BadgeVariant, Card, PageHeader, Table, TableBody, TableCell, TableHead, TableHeader,
    TableRow,
};
use crate::mock;

#[component]
pub fn AdminOnlineIps() -> Element {
    let online = use_signal(mock::admin::online_ips);
    let count = online.read().len();

    rsx! {
        div { class: "space-y-6",
            PageHeader {
                title: "在线IP",
                subtitle: "查看当前在线用户的 IP 地址",
                actions: rsx! {
                    Card { class: "px-4 py-2",
                        div { class: "flex items-center gap-2",
                            span { class: "text-sm text-gray-600", "当前在线总数" }
                            Badge { class: "bg-green-600", "{count}" }
                        }
                    }
                },
            }
            Card { class: "overflow-hidden",
                Table {
                    TableHeader {
                        TableRow {
                            TableHead { "ID" }
                            TableHead { "用户 ID" }
                            TableHead { "用户名" }
                            TableHead { "节点 ID" }
                            TableHead { "节点名" }
                            TableHead { "IP 地址" }
                            TableHead { "归属地" }
                            TableHead { "时间" }
                            TableHead { "是否为中转连接" }
                        }
                    }
                    TableBody {
                        for row in online() {
                            TableRow { key: "{row.id}",
                                TableCell { "{row.id}" }
                                TableCell { "{row.user_id}" }
                                TableCell { class: "font-medium", "{row.user_name}" }
                                TableCell { "{row.node_id}" }
                                TableCell { "{row.node_name}" }
                                TableCell { class: "font-mono text-sm", "{row.ip}" }
                                TableCell { "{row.location}" }
                                TableCell { class: "text-gray-500", "{row.datetime}" }
                                TableCell {
                                    if row.is_node {
                                        Badge { variant: BadgeVariant::Secondary, class: "bg-blue-100 text-blue-700", "是" }
                                    } else {
                                        Badge { variant: BadgeVariant::Outline, "否" }
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
