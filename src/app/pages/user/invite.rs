//! Referral programme: commission figures, invite link, invitees and ledger.

use dioxus::prelude::*;

use spanel_model::{CommissionKind, InviteeStatus, SettlementStatus};

use crate::app::clipboard::copy_text;
use crate::app::components::{
    use_toaster, Badge, BadgeVariant, Card, PageHeader, Table, TableBody, TableCell, TableHead,
    TableHeader, TableRow, TitledCard, BUTTON_USER,
};
use crate::format::format_money;
use crate::mock;
use crate::timer::sleep_ms;
use crate::toast::ToastSink;

const RULES: &[&str] = &[
    "新用户通过您的邀请链接注册并完成首次购买，您将获得订单金额 20% 的佣金",
    "佣金在用户购买成功后 7 天内处于\"待确认\"状态，确认后可提现",
    "累计邀请 10 人以上，额外获得 ¥50 奖励；邀请 50 人以上，奖励 ¥200",
    "禁止作弊行为，一经发现将冻结账户并扣除所有佣金",
];

/// Ledger amount with an explicit plus sign on credits.
fn ledger_amount(amount: f64) -> String {
    let sign = if amount > 0.0 { "+" } else { "" };
    format!("{sign}¥{}", format_money(amount.abs()))
}

fn contribution(commission: f64) -> String {
    if commission > 0.0 {
        format!("+¥{}", format_money(commission))
    } else {
        "--".to_string()
    }
}

/// Calendar date part of a `YYYY-MM-DD ...` timestamp, with slashes.
fn short_date(value: &str) -> String {
    value
        .split_whitespace()
        .next()
        .unwrap_or(value)
        .replace('-', "/")
}

fn kind_variant(kind: CommissionKind) -> BadgeVariant {
    match kind {
        CommissionKind::Invite => BadgeVariant::Success,
        CommissionKind::Withdraw => BadgeVariant::Destructive,
        CommissionKind::Bonus => BadgeVariant::Default,
    }
}

fn invitee_variant(status: InviteeStatus) -> BadgeVariant {
    match status {
        InviteeStatus::Active => BadgeVariant::Success,
        InviteeStatus::Pending => BadgeVariant::Secondary,
    }
}

fn settlement_variant(status: SettlementStatus) -> BadgeVariant {
    match status {
        SettlementStatus::Confirmed => BadgeVariant::Success,
        SettlementStatus::Pending => BadgeVariant::Secondary,
    }
}

/// Right-aligned money cell, green for credits.
fn amount_class(amount: f64, otherwise: &str) -> String {
    let tone = if amount > 0.0 { "text-green-600" } else { otherwise };
    format!("text-right font-semibold {tone}")
}

#[component]
pub fn Invite() -> Element {
    let toaster = use_toaster();
    let stats = use_signal(mock::user::invite_stats);
    let invitees = use_signal(mock::user::invitees);
    let ledger = use_signal(mock::user::commission_history);
    let mut copied = use_signal(|| false);

    let on_copy = move |_| {
        copy_text(&stats.read().invite_link);
        copied.set(true);
        toaster.success("邀请链接已复制到剪贴板");
        spawn(async move {
            sleep_ms(2000).await;
            copied.set(false);
        });
    };

    let s = stats.read();
    let total = format_money(s.total_commission);
    let pending = format_money(s.pending_commission);
    let withdrawn = format_money(s.withdrawn);
    let rate = s.commission_rate;
    let link = s.invite_link.clone();
    let invitee_count = s.total_invitees;

    rsx! {
        div { class: "space-y-6",
            PageHeader { title: "邀请返利", subtitle: "邀请好友注册购买，获得丰厚佣金奖励" }

            div { class: "grid grid-cols-1 gap-6 md:grid-cols-3",
                Card { class: "border-green-200 bg-gradient-to-br from-green-50 to-green-100",
                    div { class: "flex items-center justify-between p-6",
                        div {
                            p { class: "text-sm font-medium text-green-700", "累计佣金" }
                            p { class: "mt-2 text-3xl font-bold text-green-900", "¥{total}" }
                            p { class: "mt-1 text-xs text-green-700", "已提现 ¥{withdrawn}" }
                        }
                        div { class: "flex h-14 w-14 items-center justify-center rounded-full bg-green-200 text-2xl", "👛" }
                    }
                }
                Card { class: "border-orange-200 bg-gradient-to-br from-orange-50 to-orange-100",
                    div { class: "flex items-center justify-between p-6",
                        div {
                            p { class: "text-sm font-medium text-orange-700", "待确认佣金" }
                            p { class: "mt-2 text-3xl font-bold text-orange-900", "¥{pending}" }
                            p { class: "mt-1 text-xs text-orange-700", "预计 7 天内到账" }
                        }
                        div { class: "flex h-14 w-14 items-center justify-center rounded-full bg-orange-200 text-2xl", "📈" }
                    }
                }
                Card { class: "border-blue-200 bg-gradient-to-br from-blue-50 to-blue-100",
                    div { class: "flex items-center justify-between p-6",
                        div {
                            p { class: "text-sm font-medium text-blue-700", "成功邀请" }
                            p { class: "mt-2 text-3xl font-bold text-blue-900",
                                "{invitee_count}"
                                span { class: "ml-1 text-lg font-normal text-blue-700", "人" }
                            }
                            p { class: "mt-1 text-xs text-blue-700", "返利率 {rate}%" }
                        }
                        div { class: "flex h-14 w-14 items-center justify-center rounded-full bg-blue-200 text-2xl", "👥" }
                    }
                }
            }

            TitledCard { title: "您的专属邀请链接", icon: "🎁", class: "border-2 border-primary-user shadow-lg",
                div { class: "space-y-4",
                    p { class: "text-sm text-gray-600",
                        "分享此链接给好友，他们注册并购买套餐后，您将获得 "
                        span { class: "font-bold text-primary-user", "{rate}%" }
                        " 佣金返利！"
                    }
                    div { class: "relative",
                        input {
                            r#type: "text",
                            readonly: true,
                            value: "{link}",
                            class: "h-12 w-full rounded-lg border border-gray-300 bg-gray-50 px-4 pr-28 font-mono text-sm text-gray-700 focus:outline-none focus:ring-2 focus:ring-primary-user",
                        }
                        button {
                            r#type: "button",
                            class: "{BUTTON_USER} absolute right-2 top-1/2 -translate-y-1/2 px-3 py-1.5",
                            onclick: on_copy,
                            if copied() { "✓ 已复制" } else { "📋 复制链接" }
                        }
                    }
                    div { class: "flex items-center gap-3 pt-2",
                        Badge { variant: BadgeVariant::Success, "💲 佣金比例 {rate}%" }
                        Badge { "📅 7 天结算周期" }
                    }
                }
            }

            TitledCard { title: "已邀请用户", icon: "👥",
                Table {
                    TableHeader {
                        TableRow {
                            TableHead { "用户邮箱" }
                            TableHead { "注册时间" }
                            TableHead { "状态" }
                            TableHead { class: "text-right", "贡献佣金" }
                        }
                    }
                    TableBody {
                        for invitee in invitees() {
                            TableRow { key: "{invitee.id}",
                                TableCell {
                                    div { class: "flex items-center gap-2",
                                        div { class: "flex h-8 w-8 items-center justify-center rounded-full bg-gradient-orange text-white", "✉" }
                                        span { class: "text-sm font-medium text-gray-900", "{invitee.email}" }
                                    }
                                }
                                TableCell { class: "text-gray-600", {short_date(&invitee.reg_date)} }
                                TableCell {
                                    Badge {
                                        variant: invitee_variant(invitee.status),
                                        {invitee.status.label()}
                                    }
                                }
                                TableCell {
                                    class: amount_class(invitee.commission, "text-gray-400"),
                                    {contribution(invitee.commission)}
                                }
                            }
                        }
                    }
                }
            }

            TitledCard { title: "佣金流水记录", icon: "👛",
                Table {
                    TableHeader {
                        TableRow {
                            TableHead { "时间" }
                            TableHead { "类型" }
                            TableHead { "描述" }
                            TableHead { class: "text-right", "金额" }
                            TableHead { class: "text-center", "状态" }
                        }
                    }
                    TableBody {
                        for record in ledger() {
                            TableRow { key: "{record.id}",
                                TableCell { class: "text-gray-600", "{record.date}" }
                                TableCell {
                                    Badge { variant: kind_variant(record.kind), {record.kind.label()} }
                                }
                                TableCell { class: "text-gray-700", "{record.description}" }
                                TableCell {
                                    class: amount_class(record.amount, "text-red-600"),
                                    {ledger_amount(record.amount)}
                                }
                                TableCell { class: "text-center",
                                    Badge {
                                        variant: settlement_variant(record.status),
                                        {record.status.label()}
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Card { class: "border-blue-200 bg-blue-50",
                div { class: "space-y-2 p-6 text-sm text-blue-900",
                    p { class: "font-semibold", "邀请规则说明" }
                    ul { class: "list-inside list-disc space-y-1 text-blue-800",
                        for rule in RULES {
                            li { "{rule}" }
                        }
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
    fn test_ledger_amount_signs() {
        assert_eq!(ledger_amount(59.99), "+¥59.99");
        assert_eq!(ledger_amount(-200.0), "¥200.00");
    }

    #[test]
    fn test_contribution_placeholder() {
        assert_eq!(contribution(0.0), "--");
        assert_eq!(contribution(31.99), "+¥31.99");
    }

    #[test]
    fn test_short_date() {
        assert_eq!(short_date("2025-01-15 10:30"), "2025/01/15");
        assert_eq!(short_date("2025-01-15"), "2025/01/15");
    }
}
