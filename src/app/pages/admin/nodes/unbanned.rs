use dioxus::prelude::*;

use super::super::Notice;
use crate::app::components::{
    Card, PageHeader, Table, TableBody, TableCell, TableHead, TableHeader, TableRow,
};
use crate::mock;

#[component]
pub fn UnbannedIps() -> Element {
    let records = use_signal(mock::admin::unbanned_ips);

    rsx! {
        div { class: "space-y-6",
            PageHeader { title: "解封IP记录", subtitle: "查看 IP 解封操作历史" }
            Notice { tint: "green", icon: "✅", text: "这里是最近的解封 IP 记录" }
            Card { class: "overflow-hidden",
                Table {
                    TableHeader {
                        TableRow {
                            TableHead { "ID" }
                            TableHead { "用户 ID" }
                            TableHead { "用户名" }
                            TableHead { "IP 地址" }
                            TableHead { "归属地" }
                            TableHead { "解封时间" }
                        }
                    }
                    TableBody {
                        for row in records() {
                            TableRow { key: "{row.id}",
                                TableCell { "{row.id}" }
                                TableCell { "{row.user_id}" }
                                TableCell { class: "font-medium", "{row.user_name}" }
                                TableCell { class: "font-mono text-sm", "{row.ip}" }
                                TableCell { "{row.location}" }
                                TableCell { class: "text-gray-500", "{row.datetime}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
