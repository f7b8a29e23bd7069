//! Account management and per-user records.

use dioxus::prelude::*;

use spanel_model::AdminUser;

use super::placeholder::Placeholder;
use super::{Figure, SearchBox};
use crate::app::components::{
    use_toaster, Badge, BadgeVariant, Card, EmptyRow, PageHeader, Table, TableBody, TableCell,
    TableHead, TableHeader, TableRow, TitledCard, UsageBar, BUTTON_ADMIN,
};
use crate::format::{bytes_to_gb, format_date, format_money, traffic_percent, Tone};
use crate::mock;
use crate::toast::ToastSink;

mod login_history;
mod online_ip;
mod relay;

pub use login_history::AdminLoginHistory;
pub use online_ip::AdminOnlineIps;
pub use relay::AdminRelayRules;

fn matching(users: &[AdminUser], query: &str) -> Vec<AdminUser> {
    users.iter().filter(|u| u.matches(query)).cloned().collect()
}

fn class_variant(class_level: u8) -> BadgeVariant {
    if class_level == 0 {
        BadgeVariant::Secondary
    } else {
        BadgeVariant::Default
    }
}

#[component]
pub fn AdminUsers() -> Element {
    let toaster = use_toaster();
    let users = use_signal(mock::admin::users);
    let mut query = use_signal(String::new);

    let all = users();
    let shown = matching(&all, &query.read());
    let total = all.len();
    let vip = all.iter().filter(|u| u.class_level > 0).count();
    let enabled = all.iter().filter(|u| u.is_enabled).count();
    let disabled = total - enabled;
    let shown_count = shown.len();

    rsx! {
        div { class: "space-y-6",
            PageHeader {
                title: "用户管理",
                subtitle: "管理系统中的所有用户账户",
                actions: rsx! {
                    button {
                        r#type: "button",
                        class: "{BUTTON_ADMIN} whitespace-nowrap shadow-lg",
                        onclick: move |_| toaster.info("新增用户功能开发中"),
                        "👑 新增用户"
                    }
                },
            }

            div { class: "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4",
                Figure { label: "总用户数", value: "{total}", icon: "✉️" }
                Figure { label: "VIP 用户", value: "{vip}", icon: "👑", value_class: "text-purple-600", disc: "bg-purple-100" }
                Figure { label: "正常用户", value: "{enabled}", icon: "✓", value_class: "text-green-600", disc: "bg-green-100" }
                Figure { label: "禁用用户", value: "{disabled}", icon: "⚠", value_class: "text-red-600", disc: "bg-red-100" }
            }

            Card {
                div { class: "flex gap-3 p-6",
                    SearchBox {
                        value: query(),
                        placeholder: "搜索邮箱或用户名...",
                        on_input: move |v| query.set(v),
                    }
                    button { r#type: "button", class: "{BUTTON_ADMIN} px-6", "🔍 搜索" }
                }
            }

            TitledCard { title: "用户列表",
                Table {
                    TableHeader {
                        TableRow {
                            TableHead { class: "w-[80px]", "UID" }
                            TableHead { "邮箱" }
                            TableHead { "用户名" }
                            TableHead { "等级" }
                            TableHead { "余额" }
                            TableHead { "流量使用" }
                            TableHead { "状态" }
                            TableHead { "注册时间" }
                            TableHead { "到期时间" }
                            TableHead { class: "text-right", "操作" }
                        }
                    }
                    TableBody {
                        if shown.is_empty() {
                            EmptyRow { columns: 10, message: "暂无数据" }
                        }
                        for user in shown {
                            UserRow { key: "{user.id}", user }
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
fn UserRow(user: AdminUser) -> Element {
    let toaster = use_toaster();
    let percent = traffic_percent(user.total_used, user.transfer_enable);
    let bar = Tone::for_user_traffic(percent).bar_class();
    let percent_text = format!("{percent:.0}%");
    let used = bytes_to_gb(user.total_used);
    let allowance = bytes_to_gb(user.transfer_enable);
    let money = format_money(user.money);
    let registered = format_date(Some(&user.reg_date));
    let expires = format_date(user.expire_in.as_deref());
    let id = user.id;
    rsx! {
        TableRow {
            TableCell { class: "font-medium", "#{id}" }
            TableCell { class: "font-mono text-sm", "{user.email}" }
            TableCell { class: "font-semibold", "{user.user_name}" }
            TableCell {
                if user.is_admin {
                    Badge { variant: BadgeVariant::Destructive, class: "gap-1", "👑 管理员" }
                } else {
                    Badge { variant: class_variant(user.class_level), "VIP {user.class_level}" }
                }
            }
            TableCell { span { class: "font-semibold text-green-600", "¥{money}" } }
            TableCell {
                div { class: "min-w-[160px] space-y-1.5",
                    div { class: "flex items-center gap-2",
                        div { class: "flex-1",
                            UsageBar { percent, bar_class: bar, height: "h-2.5" }
                        }
                        span { class: "w-12 text-right text-xs font-medium text-gray-600", "{percent_text}" }
                    }
                    div { class: "flex items-center justify-between text-xs text-gray-500",
                        span { "已用 {used} GB" }
                        span { "总计 {allowance} GB" }
                    }
                }
            }
            TableCell {
                if user.is_enabled {
                    Badge { variant: BadgeVariant::Success, "正常" }
                } else {
                    Badge { variant: BadgeVariant::Destructive, "禁用" }
                }
            }
            TableCell { class: "text-sm text-gray-600", "{registered}" }
            TableCell { class: "text-sm text-gray-600", "{expires}" }
            TableCell { class: "text-right",
                div { class: "flex items-center justify-end gap-2",
                    button {
                        r#type: "button",
                        class: "h-8 w-8 rounded-md text-blue-600 hover:bg-blue-50",
                        onclick: move |_| toaster.info(&format!("编辑用户 #{id}")),
                        "✏️"
                    }
                    button {
                        r#type: "button",
                        class: "h-8 w-8 rounded-md text-red-600 hover:bg-red-50",
                        onclick: move |_| toaster.info(&format!("删除用户 #{id}")),
                        "🗑"
                    }
                }
            }
        }
    }
}

#[component]
pub fn UserInvites() -> Element {
    rsx! {
        Placeholder { title: "邀请与返利", description: "管理邀请返利配置", icon: "🧾" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_is_case_insensitive() {
        let users = mock::admin::users();
        assert_eq!(matching(&users, "").len(), users.len());
        let found = matching(&users, "VIP");
        assert!(!found.is_empty());
        assert!(found
            .iter()
            .all(|u| u.email.contains("vip") || u.user_name.to_lowercase().contains("vip")));
        assert!(matching(&users, "nobody-here").is_empty());
    }

    #[test]
    fn test_disabled_user_has_no_traffic_share() {
        let users = mock::admin::users();
        let blocked = users.iter().find(|u| !u.is_enabled).unwrap();
        assert_eq!(traffic_percent(blocked.total_used, blocked.transfer_enable), 0.0);
    }
}
