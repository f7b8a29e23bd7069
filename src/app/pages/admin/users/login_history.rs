use dioxus::prelude::*;

use spanel_model::LoginOutcome;

use super::super::Notice;
use crate::app::components::{
    Badge, BadgeVariant, Card, PageHeader, Table, TableBody, TableCell, TableHead, TableHeader,
    TableRow,
};
use crate::mock;

#[component]
pub fn AdminLoginHistory() -> Element {
    let records = use_signal(mock::admin::login_history);

    rsx! {
        div { class: "space-y-6",
            PageHeader { title: "登录IP", subtitle: "查看用户登录历史记录" }
            Notice { tint: "blue", icon: "🔑", text: "系统中所有用户登录记录" }
            Card { class: "overflow-hidden",
                Table {
                    TableHeader {
                        TableRow {
                            TableHead { "ID" }
                            TableHead { "用户 ID" }
                            TableHead { "用户名" }
                            TableHead { "IP 地址" }
                            TableHead { "归属地" }
                            TableHead { "时间" }
                            TableHead { "类型" }
                        }
                    }
                    TableBody {
                        for login in records() {
                            TableRow { key: "{login.id}",
                                TableCell { "{login.id}" }
                                TableCell { "{login.user_id}" }
                                TableCell { class: "font-medium", "{login.user_name}" }
                                TableCell { class: "font-mono text-sm", "{login.ip}" }
                                TableCell { "{login.location}" }
                                TableCell { class: "text-gray-500", "{login.datetime}" }
                                TableCell {
                                    if login.outcome == LoginOutcome::Success {
                                        Badge { class: "bg-green-600", "成功" }
                                    } else {
                                        Badge { variant: BadgeVariant::Destructive, "失败" }
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
