use dioxus::prelude::*;

use spanel_model::NodeTrafficLog;

use super::super::Notice;
use crate::app::components::{
    Card, PageHeader, Table, TableBody, TableCell, TableHead, TableHeader, TableRow,
};
use crate::mock;

/// Billing multiplier label; a zero rate is free traffic.
fn rate_chip(rate: f64) -> (&'static str, String) {
    if rate == 0.0 {
        ("bg-green-100 text-green-700", "免费".to_string())
    } else {
        ("bg-blue-100 text-blue-700", format!("{rate:.1}"))
    }
}

#[component]
pub fn AdminNodeTraffic() -> Element {
    let logs = use_signal(mock::admin::node_traffic);

    rsx! {
        div { class: "space-y-6",
            PageHeader { title: "流量使用记录", subtitle: "查看所有节点流量使用详情" }
            Notice { tint: "yellow", icon: "📈", text: "部分节点不支持流量记录" }
            Card { class: "overflow-hidden",
                Table {
                    TableHeader {
                        TableRow {
                            TableHead { "ID" }
                            TableHead { "用户 ID" }
                            TableHead { "用户名" }
                            TableHead { "使用节点" }
                            TableHead { "倍率" }
                            TableHead { "实际使用流量" }
                            TableHead { "结算流量" }
                            TableHead { "记录时间" }
                        }
                    }
                    TableBody {
                        for log in logs() {
                            LogRow { key: "{log.id}", log }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn LogRow(log: NodeTrafficLog) -> Element {
    let (chip, rate) = rate_chip(log.rate);
    rsx! {
        TableRow {
            TableCell { "{log.id}" }
            TableCell { "{log.user_id}" }
            TableCell { class: "font-medium", "{log.user_name}" }
            TableCell { "{log.node_name}" }
            TableCell {
                span { class: "rounded-full px-2 py-1 text-xs font-medium {chip}", "{rate}" }
            }
            TableCell { "{log.origin_traffic}" }
            TableCell { class: "font-semibold", "{log.traffic}" }
            TableCell { class: "text-gray-500", "{log.log_time}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_chip() {
        assert_eq!(rate_chip(0.0).1, "免费");
        assert_eq!(rate_chip(0.5).1, "0.5");
        assert_eq!(rate_chip(1.0).1, "1.0");
    }
}
