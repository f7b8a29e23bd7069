use dioxus::prelude::*;

use spanel_model::{AdminOrder, OrderStatus};

use super::{Figure, SearchBox};
use crate::app::components::{
    use_toaster, Badge, BadgeVariant, Card, EmptyRow, PageHeader, Table, TableBody, TableCell,
    TableHead, TableHeader, TableRow, TitledCard, BUTTON_ADMIN,
};
use crate::format::{format_money, format_short_datetime};
use crate::mock;
use crate::toast::ToastSink;

fn status_variant(status: OrderStatus) -> BadgeVariant {
    match status {
        OrderStatus::Completed => BadgeVariant::Success,
        OrderStatus::Pending => BadgeVariant::Warning,
        OrderStatus::Failed => BadgeVariant::Destructive,
        OrderStatus::Refunded => BadgeVariant::Secondary,
    }
}

/// Income counts completed orders only.
fn revenue(orders: &[AdminOrder]) -> f64 {
    orders
        .iter()
        .filter(|o| o.status == OrderStatus::Completed)
        .map(|o| o.amount)
        .sum()
}

#[component]
pub fn AdminOrders() -> Element {
    let orders = use_signal(mock::admin::orders);
    let mut query = use_signal(String::new);

    let all = orders();
    let total = all.len();
    let completed = all.iter().filter(|o| o.status == OrderStatus::Completed).count();
    let pending = all.iter().filter(|o| o.status == OrderStatus::Pending).count();
    let income = format!("{:.0}", revenue(&all));
    let shown: Vec<AdminOrder> = all.into_iter().filter(|o| o.matches(&query.read())).collect();
    let shown_count = shown.len();

    rsx! {
        div { class: "space-y-6",
            PageHeader { title: "订单审计", subtitle: "全站订单流水记录与审计" }

            div { class: "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4",
                Figure { label: "总订单", value: "{total}", icon: "🛒" }
                Figure { label: "已完成", value: "{completed}", icon: "✓", value_class: "text-green-600", disc: "bg-green-100" }
                Figure { label: "待支付", value: "{pending}", icon: "🕒", value_class: "text-orange-600", disc: "bg-orange-100" }
                Figure { label: "总收入", value: "¥{income}", icon: "💰", value_class: "text-red-600", disc: "bg-red-100" }
            }

            Card {
                div { class: "flex gap-3 p-6",
                    SearchBox {
                        value: query(),
                        placeholder: "搜索订单号、邮箱或商品名称...",
                        on_input: move |v| query.set(v),
                    }
                    button { r#type: "button", class: "{BUTTON_ADMIN} px-6", "🔍 搜索" }
                }
            }

            TitledCard { title: "订单列表",
                Table {
                    TableHeader {
                        TableRow {
                            TableHead { class: "w-[80px]", "ID" }
                            TableHead { "订单号" }
                            TableHead { "商品" }
                            TableHead { "用户" }
                            TableHead { "金额" }
                            TableHead { "支付方式" }
                            TableHead { "状态" }
                            TableHead { "创建时间" }
                            TableHead { "支付时间" }
                            TableHead { class: "text-right", "操作" }
                        }
                    }
                    TableBody {
                        if shown.is_empty() {
                            EmptyRow { columns: 10, message: "暂无数据" }
                        }
                        for order in shown {
                            OrderRow { key: "{order.id}", order }
                        }
                        tr {
                            td { colspan: "10", class: "p-4 text-center text-sm text-gray-500",
                                "显示 1-{shown_count} 条，共 {total} 条记录"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn OrderRow(order: AdminOrder) -> Element {
    let toaster = use_toaster();
    let id = order.id;
    let amount = format_money(order.amount);
    let method = order.payment_method.label();
    let status = order.status.label();
    let created = format_short_datetime(Some(&order.created_at));
    let paid = format_short_datetime(order.paid_at.as_deref());
    rsx! {
        TableRow {
            TableCell { class: "text-xs font-medium", "{id}" }
            TableCell { class: "font-mono text-xs", "{order.order_no}" }
            TableCell { class: "max-w-[150px] text-sm",
                div { class: "truncate", title: "{order.product_name}", "{order.product_name}" }
            }
            TableCell { class: "text-sm",
                p { class: "text-xs text-gray-500", "UID: {order.user_id}" }
                p { class: "max-w-[120px] truncate", title: "{order.user_email}", "{order.user_email}" }
            }
            TableCell { class: "text-sm font-semibold", "¥{amount}" }
            TableCell { class: "text-xs text-gray-600", "{method}" }
            TableCell { Badge { variant: status_variant(order.status), class: "gap-1.5", "{status}" } }
            TableCell { class: "text-xs text-gray-600", "{created}" }
            TableCell { class: "text-xs text-gray-600", "{paid}" }
            TableCell { class: "text-right",
                button {
                    r#type: "button",
                    class: "h-8 w-8 rounded-md text-gray-500 hover:bg-gray-100",
                    title: "查看详情",
                    onclick: move |_| toaster.info(&format!("查看订单 #{id}")),
                    "👁"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_revenue_skips_refunds() {
        let orders = mock::admin::orders();
        assert_eq!(revenue(&orders), 1336.0);
    }

    #[test]
    fn test_search_matches_product_name() {
        let orders = mock::admin::orders();
        let hits: Vec<_> = orders.iter().filter(|o| o.matches("100gb")).collect();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 6);
        assert_eq!(orders.iter().filter(|o| o.matches("ORD-20260201")).count(), 3);
    }
}
