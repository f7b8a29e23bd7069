use dioxus::prelude::*;

use spanel_model::{Deposit, DepositStatus};

use super::super::{Figure, SearchBox};
use crate::app::components::{
    Badge, BadgeVariant, Card, EmptyRow, PageHeader, Table, TableBody, TableCell, TableHead,
    TableHeader, TableRow, TitledCard, BUTTON_ADMIN,
};
use crate::format::{format_money, format_short_datetime};
use crate::mock;

#[derive(Debug, Clone, Copy, PartialEq)]
struct DepositTotals {
    succeeded: usize,
    amount: f64,
    pending: usize,
}

fn totals(deposits: &[Deposit]) -> DepositTotals {
    let succeeded = deposits.iter().filter(|d| d.status == DepositStatus::Success);
    DepositTotals {
        succeeded: succeeded.clone().count(),
        amount: succeeded.map(|d| d.amount).sum(),
        pending: deposits
            .iter()
            .filter(|d| d.status == DepositStatus::Pending)
            .count(),
    }
}

fn status_variant(status: DepositStatus) -> BadgeVariant {
    match status {
        DepositStatus::Success => BadgeVariant::Success,
        DepositStatus::Pending => BadgeVariant::Warning,
        DepositStatus::Failed => BadgeVariant::Destructive,
    }
}

#[component]
pub fn AdminDeposits() -> Element {
    let deposits = use_signal(mock::admin::deposits);
    let mut query = use_signal(String::new);

    let all = deposits();
    let sums = totals(&all);
    let total = all.len();
    let amount = format_money(sums.amount);
    let shown: Vec<Deposit> = all.into_iter().filter(|d| d.matches(&query.read())).collect();

    rsx! {
        div { class: "space-y-6",
            PageHeader { title: "充值记录", subtitle: "查看所有用户充值流水与支付状态" }

            div { class: "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4",
                Figure { label: "总记录", value: "{total}", icon: "💳" }
                Figure { label: "成功充值", value: "{sums.succeeded}", icon: "✓", value_class: "text-green-600", disc: "bg-green-100" }
                Figure { label: "总充值额", value: "¥{amount}", icon: "💰", value_class: "text-red-600", disc: "bg-red-100" }
                Figure { label: "待处理", value: "{sums.pending}", icon: "🕒", value_class: "text-orange-600", disc: "bg-orange-100" }
            }

            Card {
                div { class: "flex gap-3 p-6",
                    SearchBox {
                        value: query(),
                        placeholder: "搜索交易号或用户邮箱...",
                        on_input: move |v| query.set(v),
                    }
                    button { r#type: "button", class: "{BUTTON_ADMIN} px-6", "🔍 搜索" }
                }
            }

            TitledCard { title: "充值流水",
                Table {
                    TableHeader {
                        TableRow {
                            TableHead { "ID" }
                            TableHead { "交易号" }
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
                            EmptyRow { columns: 9, message: "暂无数据" }
                        }
                        for deposit in shown {
                            DepositRow { key: "{deposit.id}", deposit }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DepositRow(deposit: Deposit) -> Element {
    let amount = format_money(deposit.amount);
    let method = deposit.method.label();
    let status = deposit.status.label();
    let created = format_short_datetime(Some(&deposit.created_at));
    let paid = format_short_datetime(deposit.paid_at.as_deref());
    rsx! {
        TableRow {
            TableCell { class: "font-medium", "{deposit.id}" }
            TableCell {
                span { class: "block max-w-[150px] truncate font-mono text-xs text-gray-600",
                    title: "{deposit.trade_no}",
                    "{deposit.trade_no}"
                }
            }
            TableCell {
                p { class: "text-xs text-gray-500", "UID: {deposit.user_id}" }
                p { class: "text-sm font-medium", "{deposit.user_email}" }
            }
            TableCell { class: "font-semibold text-green-600", "¥{amount}" }
            TableCell { class: "text-gray-600", "{method}" }
            TableCell { Badge { variant: status_variant(deposit.status), "{status}" } }
            TableCell { class: "text-gray-600", "{created}" }
            TableCell { class: "text-gray-600", "{paid}" }
            TableCell { class: "text-right",
                button { r#type: "button", class: "rounded-md px-2 py-1 text-gray-500 hover:bg-gray-100", "👁" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_count_only_successful_amounts() {
        let sums = totals(&mock::admin::deposits());
        assert_eq!(sums.succeeded, 3);
        assert_eq!(sums.pending, 1);
        assert_eq!(format_money(sums.amount), "515.00");
    }

    #[test]
    fn test_search_by_trade_number_or_email() {
        let deposits = mock::admin::deposits();
        let hits: Vec<_> = deposits.iter().filter(|d| d.matches("user1@")).collect();
        assert_eq!(hits.len(), 2);
        assert_eq!(deposits.iter().filter(|d| d.matches("txn20260130")).count(), 1);
    }
}
