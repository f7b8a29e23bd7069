//! Administrator overview: headline cards, recent orders, host status and
//! the pending-work summary.

use dioxus::prelude::*;

use spanel_model::admin::{PendingTask, RecentOrder, StatCard};
use spanel_model::{OrderStatus, Trend};

use crate::app::components::{Badge, BadgeVariant, Card, PageHeader, TitledCard, UsageBar};
use crate::format::format_money;
use crate::mock;

fn trend_class(trend: Trend) -> &'static str {
    match trend {
        Trend::Positive => "text-green-600",
        Trend::Negative => "text-red-600",
        Trend::Neutral => "text-gray-600",
    }
}

fn trend_arrow(trend: Trend) -> &'static str {
    match trend {
        Trend::Positive => "↗",
        Trend::Negative => "↘",
        Trend::Neutral => "",
    }
}

/// Healthy status cards get a green disc, everything else the admin red.
fn icon_disc(card: &StatCard) -> &'static str {
    if card.change == "正常" {
        "bg-green-100 text-green-600"
    } else {
        "bg-gradient-red text-white"
    }
}

fn order_badge(status: OrderStatus) -> (BadgeVariant, &'static str) {
    match status {
        OrderStatus::Completed => (BadgeVariant::Success, "已完成"),
        _ => (BadgeVariant::Warning, "待支付"),
    }
}

/// Tint and hint for each pending-work tile, in display order.
fn task_style(index: usize) -> (&'static str, &'static str, &'static str) {
    match index {
        0 => ("red", "💴", "需尽快处理"),
        1 => ("orange", "🧾", "用户等待中"),
        _ => ("gray", "🖥️", "需要检查"),
    }
}

#[component]
pub fn AdminDashboard() -> Element {
    let cards = use_signal(mock::admin::stat_cards);
    let orders = use_signal(mock::admin::recent_orders);
    let status = use_signal(mock::admin::system_status);
    let tasks = use_signal(mock::admin::pending_tasks);

    let host = status();

    rsx! {
        div { class: "space-y-6",
            PageHeader {
                title: "管理仪表盘",
                subtitle: "系统运行状态与业务数据总览",
                actions: rsx! {
                    Badge { variant: BadgeVariant::Destructive, class: "px-4 py-1 text-base", "管理员" }
                },
            }

            div { class: "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4",
                for card in cards() {
                    StatTileCard { key: "{card.title}", card }
                }
            }

            div { class: "grid grid-cols-1 gap-6 lg:grid-cols-2",
                TitledCard { title: "最近订单", icon: "🧾",
                    div { class: "space-y-3",
                        for order in orders() {
                            OrderLine { key: "{order.order_no}", order }
                        }
                    }
                }

                TitledCard { title: "系统状态", icon: "🖥️",
                    div { class: "space-y-4",
                        Meter { label: "CPU 使用率", percent: host.cpu, text: "text-primary-admin", bar: "bg-gradient-red" }
                        Meter { label: "内存使用率", percent: host.memory, text: "text-blue-600", bar: "bg-blue-500" }
                        Meter { label: "磁盘使用率", percent: host.disk, text: "text-green-600", bar: "bg-green-500" }
                        div { class: "flex items-center justify-between border-t pt-2 text-xs text-gray-500",
                            span { "运行时间" }
                            span { class: "font-mono", "{host.uptime}" }
                        }
                    }
                }
            }

            TitledCard { title: "待处理事项", icon: "⚠️",
                div { class: "grid grid-cols-1 gap-4 md:grid-cols-3",
                    for (index , task) in tasks().into_iter().enumerate() {
                        TaskTile { key: "{task.label}", task, index }
                    }
                }
            }
        }
    }
}

#[component]
fn StatTileCard(card: StatCard) -> Element {
    let change_class = trend_class(card.trend);
    let arrow = trend_arrow(card.trend);
    let disc = icon_disc(&card);
    rsx! {
        Card { class: "transition-shadow hover:shadow-lg",
            div { class: "flex items-center justify-between p-6",
                div { class: "flex-1",
                    p { class: "mb-1 text-sm text-gray-600", "{card.title}" }
                    p { class: "text-2xl font-bold text-gray-900", "{card.value}" }
                    div { class: "mt-2 flex items-center gap-1",
                        span { class: "text-xs font-medium {change_class}", "{arrow}{card.change}" }
                        span { class: "ml-1 text-xs text-gray-500", "{card.description}" }
                    }
                }
                div { class: "flex h-14 w-14 items-center justify-center rounded-full text-2xl shadow-md {disc}", "{card.icon}" }
            }
        }
    }
}

#[component]
fn OrderLine(order: RecentOrder) -> Element {
    let (variant, label) = order_badge(order.status);
    let amount = format_money(order.amount);
    rsx! {
        div { class: "flex items-center justify-between rounded-lg bg-gray-50 p-3",
            div {
                p { class: "text-sm font-medium", "{order.order_no}" }
                p { class: "text-xs text-gray-500", "{order.user_email}" }
            }
            div { class: "text-right",
                p { class: "text-sm font-semibold", "¥{amount}" }
                Badge { variant, class: "text-xs", "{label}" }
            }
        }
    }
}

#[component]
fn Meter(label: String, percent: u8, text: String, bar: String) -> Element {
    rsx! {
        div { class: "space-y-2",
            div { class: "flex items-center justify-between text-sm",
                span { class: "text-gray-600", "{label}" }
                span { class: "font-semibold {text}", "{percent}%" }
            }
            UsageBar { percent: f64::from(percent), bar_class: bar }
        }
    }
}

#[component]
fn TaskTile(task: PendingTask, index: usize) -> Element {
    let (tint, icon, hint) = task_style(index);
    rsx! {
        div { class: "rounded-lg border border-{tint}-200 bg-{tint}-50 p-4",
            div { class: "flex items-center justify-between",
                div {
                    p { class: "text-sm font-medium text-{tint}-600", "{task.label}" }
                    p { class: "mt-1 text-2xl font-bold text-{tint}-700", "{task.count}" }
                }
                div { class: "flex h-10 w-10 items-center justify-center rounded-full bg-{tint}-100", "{icon}" }
            }
            p { class: "mt-2 text-xs text-{tint}-500", "{hint}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_online_nodes_card_is_green() {
        let green: Vec<String> = mock::admin::stat_cards()
            .into_iter()
            .filter(|c| icon_disc(c).contains("green"))
            .map(|c| c.title)
            .collect();
        assert_eq!(green, vec!["在线节点".to_string()]);
    }

    #[test]
    fn test_trend_colours() {
        assert_eq!(trend_class(Trend::Positive), "text-green-600");
        assert_eq!(trend_class(Trend::Negative), "text-red-600");
        assert_eq!(trend_arrow(Trend::Neutral), "");
    }

    #[test]
    fn test_pending_orders_read_unpaid() {
        assert_eq!(order_badge(OrderStatus::Pending), (BadgeVariant::Warning, "待支付"));
    }
}
