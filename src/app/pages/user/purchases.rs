//! Purchase history with a status filter.

use dioxus::prelude::*;

use spanel_model::{OrderStatus, PaymentMethod, Purchase};

use crate::app::components::{
    Badge, BadgeVariant, Card, EmptyState, PageHeader, Table, TableBody, TableCell, TableHead,
    TableHeader, TableRow,
};
use crate::format::format_money;
use crate::mock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusFilter {
    All,
    Completed,
    Failed,
}

impl StatusFilter {
    const ALL: [Self; 3] = [Self::All, Self::Completed, Self::Failed];

    fn admits(self, status: OrderStatus) -> bool {
        match self {
            Self::All => true,
            Self::Completed => status == OrderStatus::Completed,
            Self::Failed => status == OrderStatus::Failed,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::All => "全部",
            Self::Completed => "已完成",
            Self::Failed => "失败",
        }
    }

    fn active_variant(self) -> BadgeVariant {
        match self {
            Self::All => BadgeVariant::Default,
            Self::Completed => BadgeVariant::Success,
            Self::Failed => BadgeVariant::Destructive,
        }
    }
}

fn filtered(purchases: &[Purchase], filter: StatusFilter) -> Vec<Purchase> {
    purchases
        .iter()
        .filter(|p| filter.admits(p.status))
        .cloned()
        .collect()
}

fn status_badge(status: OrderStatus) -> (BadgeVariant, &'static str) {
    match status {
        OrderStatus::Completed => (BadgeVariant::Success, "已完成"),
        OrderStatus::Pending => (BadgeVariant::Default, "处理中"),
        OrderStatus::Failed => (BadgeVariant::Destructive, "失败"),
        OrderStatus::Refunded => (BadgeVariant::Secondary, "已退款"),
    }
}

fn method_class(method: PaymentMethod) -> &'static str {
    match method {
        PaymentMethod::Balance | PaymentMethod::Wechat => "bg-green-100 text-green-700",
        PaymentMethod::Alipay => "bg-blue-100 text-blue-700",
        PaymentMethod::Paypal => "bg-yellow-100 text-yellow-700",
        PaymentMethod::Crypto => "bg-orange-100 text-orange-700",
    }
}

#[component]
pub fn Purchases() -> Element {
    let purchases = use_signal(mock::user::purchases);
    let stats = use_signal(mock::user::purchase_stats);
    let mut filter = use_signal(|| StatusFilter::All);

    let rows = filtered(&purchases.read(), filter());
    let s = stats();
    let total_orders = s.total_orders;
    let total_amount = format_money(s.total_amount);
    let month_amount = format_money(s.this_month_amount);

    rsx! {
        div { class: "space-y-6",
            PageHeader { title: "购买记录", subtitle: "查看您的套餐购买历史和订单详情" }

            div { class: "grid grid-cols-1 gap-6 md:grid-cols-3",
                Figure { tint: "blue", label: "总订单数", value: "{total_orders}", icon: "🛒" }
                Figure { tint: "green", label: "累计消费", value: "¥{total_amount}", icon: "💳" }
                Figure { tint: "orange", label: "本月消费", value: "¥{month_amount}", icon: "📈" }
            }

            Card {
                div { class: "flex flex-wrap items-center justify-between gap-3 p-6 pb-3",
                    h3 { class: "text-lg font-semibold text-gray-900", "订单列表" }
                    div { class: "flex gap-2",
                        for option in StatusFilter::ALL {
                            {
                                let count = filtered(&purchases.read(), option).len();
                                let variant = if filter() == option { option.active_variant() } else { BadgeVariant::Outline };
                                let label = option.label();
                                rsx! {
                                    button {
                                        key: "{label}",
                                        r#type: "button",
                                        onclick: move |_| filter.set(option),
                                        Badge { variant, class: "cursor-pointer", "{label} ({count})" }
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "p-6 pt-3",
                    if rows.is_empty() {
                        EmptyState { icon: "🛒", title: "暂无相关订单记录" }
                    } else {
                        Table {
                            TableHeader {
                                TableRow {
                                    TableHead { "订单号" }
                                    TableHead { "套餐信息" }
                                    TableHead { "金额" }
                                    TableHead { "支付方式" }
                                    TableHead { "状态" }
                                    TableHead { "创建时间" }
                                }
                            }
                            TableBody {
                                for purchase in rows {
                                    PurchaseRow { key: "{purchase.id}", purchase }
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
fn PurchaseRow(purchase: Purchase) -> Element {
    let (variant, status) = status_badge(purchase.status);
    let method = purchase.payment_method.label();
    let method_tone = method_class(purchase.payment_method);
    let amount = format_money(purchase.amount);
    let reason = purchase
        .failure_reason
        .clone()
        .filter(|_| purchase.status == OrderStatus::Failed);

    rsx! {
        TableRow {
            TableCell { span { class: "font-mono text-gray-900", "{purchase.id}" } }
            TableCell {
                div { class: "flex items-center gap-2",
                    span { class: "text-gray-500", "📦" }
                    span { class: "font-medium text-gray-900", "{purchase.package_name}" }
                }
                p { class: "ml-6 mt-1 text-xs text-gray-500", "{purchase.package_details}" }
            }
            TableCell { span { class: "font-semibold text-gray-900", "¥{amount}" } }
            TableCell {
                span { class: "rounded px-2 py-1 text-xs font-medium {method_tone}", "{method}" }
            }
            TableCell {
                Badge { variant, "{status}" }
                if let Some(reason) = reason {
                    p { class: "mt-1 text-xs text-red-600", "{reason}" }
                }
            }
            TableCell { class: "text-gray-600", "📅 {purchase.created_at}" }
        }
    }
}

#[component]
fn Figure(tint: String, label: String, value: String, icon: String) -> Element {
    rsx! {
        Card { class: "border-{tint}-200 bg-gradient-to-br from-{tint}-50 to-{tint}-100",
            div { class: "flex items-center justify-between p-6",
                div {
                    p { class: "text-sm font-medium text-{tint}-700", "{label}" }
                    p { class: "mt-2 text-3xl font-bold text-{tint}-900", "{value}" }
                }
                div { class: "flex h-14 w-14 items-center justify-center rounded-full bg-{tint}-200 text-2xl", "{icon}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_counts() {
        let purchases = mock::user::purchases();
        assert_eq!(filtered(&purchases, StatusFilter::All).len(), purchases.len());
        let completed = filtered(&purchases, StatusFilter::Completed);
        assert!(completed.iter().all(|p| p.status == OrderStatus::Completed));
        let failed = filtered(&purchases, StatusFilter::Failed);
        assert_eq!(failed.len(), 1);
        assert!(failed[0].failure_reason.is_some());
    }

    #[test]
    fn test_pending_purchase_reads_processing() {
        assert_eq!(status_badge(OrderStatus::Pending).1, "处理中");
        assert_eq!(status_badge(OrderStatus::Failed).0, BadgeVariant::Destructive);
    }
}
