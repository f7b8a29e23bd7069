//! Subscriber home: account figures, subscription link, check-in and traffic.

use dioxus::prelude::*;

use crate::actions;
use crate::app::clipboard::copy_text;
use crate::app::components::{
    use_toaster, Badge, BadgeVariant, Card, PageHeader, TitledCard, UsageBar, BUTTON_OUTLINE,
    BUTTON_USER, INPUT, LABEL,
};
use crate::app::panel;
use crate::format::{clash_import_link, format_money};
use crate::mock::{self, DASHBOARD_NOTICE_BODY, DASHBOARD_NOTICE_TITLE};

const CLIENTS: &[(&str, &str)] = &[
    ("Windows", "💻"),
    ("Android", "🤖"),
    ("iOS", "📱"),
    ("Mac", "🍎"),
];

#[component]
pub fn UserDashboard() -> Element {
    let toaster = use_toaster();
    let profile = use_signal(mock::user::profile);
    let mut subscription_url = use_signal(|| profile.peek().subscription_url.clone());
    let mut checked_in = use_signal(|| false);
    let mut resetting = use_signal(|| false);

    let on_copy = move |_| {
        copy_text(&subscription_url.read());
        actions::subscription_copied(&toaster);
    };

    let on_reset = move |_| {
        let panel = panel();
        spawn(async move {
            resetting.set(true);
            if let Some(uuid) = actions::reset_subscription_link(&*panel, &toaster).await {
                let token = uuid.replace('-', "");
                subscription_url.set(format!(
                    "https://spanel.example.com/link/{}?mu=2",
                    &token[..12.min(token.len())]
                ));
            }
            resetting.set(false);
        });
    };

    let on_check_in = move |_| {
        if actions::check_in(&toaster, checked_in()) {
            checked_in.set(true);
        }
    };

    let p = profile.read();
    let traffic = &p.traffic;
    let welcome = format!("欢迎回来，{}", p.username);
    let vip = format!("VIP {}", p.class);
    let balance = format!("¥{}", format_money(p.balance));
    let devices = format!("{}/{}", p.online_devices, p.max_devices);
    let speed = format!("{}M", p.speed_limit);
    let total_line = format!("总流量: {}", traffic.total);
    let url = subscription_url();
    let import_link = clash_import_link(&url, "sPanel");

    rsx! {
        div { class: "space-y-6",
            PageHeader {
                title: "用户中心",
                subtitle: welcome,
                actions: rsx! {
                    Badge { variant: BadgeVariant::Success, class: "px-3 py-1 text-sm", "{vip}" }
                },
            }

            div { class: "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4",
                FigureCard { label: "账号等级", value: vip.clone(), icon: "👑", badge: "升级" }
                FigureCard { label: "余额", value: balance, icon: "💰", badge: "充值" }
                FigureCard { label: "在线设备", value: devices, icon: "📱", badge: "管理" }
                FigureCard { label: "端口速率", value: speed, icon: "⚡", badge: "不限速" }
            }

            div { class: "grid grid-cols-1 gap-6 lg:grid-cols-2",
                TitledCard { title: "快速添加节点", icon: "🔗",
                    div { class: "space-y-4",
                        div { class: "flex justify-end",
                            button {
                                r#type: "button",
                                class: BUTTON_OUTLINE,
                                disabled: resetting(),
                                onclick: on_reset,
                                if resetting() { "重置中..." } else { "🔄 重置订阅" }
                            }
                        }
                        div { class: "space-y-2",
                            label { class: LABEL, "订阅地址" }
                            div { class: "flex gap-2",
                                input { class: "{INPUT} font-mono text-xs", readonly: true, value: "{url}" }
                                button { r#type: "button", class: BUTTON_USER, onclick: on_copy, "复制" }
                            }
                        }
                        div { class: "space-y-2",
                            label { class: LABEL, "客户端下载" }
                            div { class: "grid grid-cols-2 gap-2 sm:grid-cols-4",
                                for &(name, icon) in CLIENTS {
                                    a {
                                        key: "{name}",
                                        href: "{import_link}",
                                        title: "一键导入到 {name}",
                                        class: "{BUTTON_OUTLINE} flex-col py-3",
                                        span { class: "text-xl", "{icon}" }
                                        span { class: "text-xs", "{name}" }
                                    }
                                }
                            }
                        }
                    }
                }

                TitledCard { title: "账号使用情况", icon: "📅",
                    div { class: "space-y-3 text-sm",
                        DetailRow { label: "等级过期时间", value: p.class_expire.clone() }
                        DetailRow { label: "账号过期时间", value: p.account_expire.clone() }
                        DetailRow { label: "上次使用", value: "2小时前" }
                        DetailRow { label: "上次签到", value: p.last_checkin.clone() }
                        button {
                            r#type: "button",
                            class: "{BUTTON_USER} mt-2 w-full",
                            disabled: checked_in(),
                            onclick: on_check_in,
                            if checked_in() { "今日已签到" } else { "✨ 点击签到" }
                        }
                    }
                }
            }

            div { class: "grid grid-cols-1 gap-6 lg:grid-cols-2",
                TitledCard { title: "流量使用", icon: "📊",
                    div { class: "space-y-4",
                        TrafficLine {
                            label: "今日已用",
                            amount: traffic.today_used.clone(),
                            percent: traffic.today_percent,
                            bar_class: "bg-red-500",
                        }
                        TrafficLine {
                            label: "过去已用",
                            amount: traffic.past_used.clone(),
                            percent: traffic.past_percent,
                            bar_class: "bg-orange-500",
                        }
                        TrafficLine {
                            label: "剩余流量",
                            amount: traffic.unused.clone(),
                            percent: traffic.unused_percent,
                            bar_class: "bg-green-500",
                        }
                        p { class: "border-t pt-3 text-right text-sm text-gray-600", "{total_line}" }
                    }
                }

                TitledCard { title: "公告栏", icon: "📣",
                    div { class: "rounded-lg bg-gradient-orange p-5 text-white",
                        h4 { class: "mb-2 font-semibold", "{DASHBOARD_NOTICE_TITLE}" }
                        p { class: "text-sm leading-relaxed text-white/90", "{DASHBOARD_NOTICE_BODY}" }
                    }
                }
            }
        }
    }
}

#[component]
fn FigureCard(label: String, value: String, icon: String, badge: String) -> Element {
    rsx! {
        Card {
            div { class: "p-5",
                div { class: "flex items-center justify-between",
                    p { class: "text-sm text-gray-600", "{label}" }
                    span { class: "text-xl", "{icon}" }
                }
                p { class: "mt-2 text-2xl font-bold text-gray-900", "{value}" }
                Badge { variant: BadgeVariant::Outline, class: "mt-2", "{badge}" }
            }
        }
    }
}

#[component]
fn DetailRow(label: String, value: String) -> Element {
    rsx! {
        div { class: "flex items-center justify-between border-b pb-2",
            span { class: "text-gray-600", "{label}" }
            span { class: "font-medium text-gray-900", "{value}" }
        }
    }
}

#[component]
fn TrafficLine(label: String, amount: String, percent: u8, bar_class: String) -> Element {
    rsx! {
        div { class: "space-y-1.5",
            div { class: "flex justify-between text-sm",
                span { class: "text-gray-600", "{label}" }
                span { class: "font-medium", "{amount}" }
            }
            UsageBar { percent: f64::from(percent), bar_class }
        }
    }
}
