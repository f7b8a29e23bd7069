//! Package shop. Purchases are paid from the account balance.

use dioxus::prelude::*;

use spanel_model::Package;

use crate::actions;
use crate::app::components::{use_toaster, Badge, BadgeVariant, Card, PageHeader};
use crate::app::panel;
use crate::format::{format_duration, format_money, format_speed, format_traffic};
use crate::forms::{check_affordable, shortfall};
use crate::mock;

const NOTES: &[&str] = &[
    "购买后立即生效，流量从激活时间开始计算",
    "VIP 等级越高，可使用节点越多，速度越快",
    "套餐到期后可续费，否则降级为免费用户",
    "按量计费套餐根据实际使用流量结算",
];

/// Text of a package's purchase button.
fn purchase_label(price: f64, balance: f64, in_flight: bool) -> &'static str {
    if in_flight {
        "处理中..."
    } else if check_affordable(price, balance).is_err() {
        "余额不足"
    } else if price == 0.0 {
        "立即开通"
    } else {
        "立即购买"
    }
}

fn price_text(price: f64) -> String {
    if price == 0.0 {
        "按量计费".to_string()
    } else {
        format!("¥{price}")
    }
}

#[component]
pub fn Shop() -> Element {
    let toaster = use_toaster();
    let mut balance = use_signal(|| mock::user::BALANCE);
    let mut selected = use_signal(|| None::<u32>);
    let packages = use_signal(mock::user::packages);

    let mut purchase = move |package: Package| {
        if selected.peek().is_some() {
            return;
        }
        let panel = panel();
        spawn(async move {
            selected.set(Some(package.id));
            if let Some(remaining) =
                actions::purchase_package(&*panel, &toaster, &package, balance()).await
            {
                balance.set(remaining);
            }
            selected.set(None);
        });
    };

    let current = balance();
    let busy = selected().is_some();
    let balance_text = format!("¥{}", format_money(current));

    rsx! {
        div { class: "space-y-6",
            PageHeader {
                title: "套餐购买",
                subtitle: "选择适合您的套餐，享受高速网络服务",
                actions: rsx! {
                    div { class: "text-right",
                        p { class: "text-sm text-gray-600", "当前余额" }
                        p { class: "text-2xl font-bold text-green-600", "{balance_text}" }
                    }
                },
            }

            div { class: "grid grid-cols-1 gap-6 md:grid-cols-2 lg:grid-cols-3",
                for package in packages() {
                    {
                        let affordable = check_affordable(package.price, current).is_ok();
                        let in_flight = selected() == Some(package.id);
                        let label = purchase_label(package.price, current, in_flight);
                        let price = price_text(package.price);
                        let missing = format_money(shortfall(package.price, current));
                        let border = if package.popular { "border-2 border-primary-user shadow-lg" } else { "" };
                        let button_class = if package.popular {
                            "inline-flex w-full items-center justify-center gap-2 rounded-md bg-primary-user px-4 py-3 font-medium text-white hover:opacity-90 disabled:cursor-not-allowed disabled:opacity-50"
                        } else {
                            "inline-flex w-full items-center justify-center gap-2 rounded-md bg-gray-900 px-4 py-3 font-medium text-white hover:bg-gray-800 disabled:cursor-not-allowed disabled:opacity-50"
                        };
                        let content = package.content.clone();
                        let traffic = format_traffic(content.traffic);
                        let duration = format_duration(content.class_expire);
                        let speed = format_speed(content.speed_limit);
                        let devices = format!("{} 台设备同时在线", content.devices);
                        let vip = format!("VIP {}", content.class);
                        let pkg = package.clone();
                        rsx! {
                            Card { key: "{package.id}", class: "relative transition-all duration-300 hover:shadow-xl {border}",
                                if package.popular {
                                    div { class: "absolute -top-3 left-1/2 -translate-x-1/2",
                                        div { class: "flex items-center gap-1 rounded-full bg-gradient-orange px-4 py-1 text-sm font-semibold text-white shadow-md",
                                            "★ 最受欢迎"
                                        }
                                    }
                                }
                                div { class: "p-6 pb-4",
                                    div { class: "flex items-center justify-between",
                                        span { class: "text-xl font-semibold", "{package.name}" }
                                        if content.class >= 2 {
                                            Badge { variant: BadgeVariant::Success, "🏅 {vip}" }
                                        }
                                    }
                                    p { class: "mt-2 text-sm text-gray-600", "{package.description}" }
                                }
                                div { class: "space-y-4 p-6 pt-0",
                                    div { class: "rounded-lg bg-gradient-to-r from-orange-50 to-orange-100 py-4 text-center",
                                        p { class: "text-4xl font-bold text-primary-user", "{price}" }
                                        if package.price > 0.0 {
                                            p { class: "mt-1 text-sm text-gray-600", "一次性付款" }
                                        }
                                    }
                                    div { class: "space-y-3",
                                        Feature { icon: "⚡", tint: "bg-blue-100", label: "流量额度", value: traffic }
                                        Feature { icon: "🕒", tint: "bg-green-100", label: "有效时长", value: duration }
                                        Feature { icon: "📱", tint: "bg-purple-100", label: "支持设备", value: devices }
                                        Feature { icon: "ℹ️", tint: "bg-orange-100", label: "速率限制", value: speed }
                                    }
                                    button {
                                        r#type: "button",
                                        class: button_class,
                                        disabled: !affordable || busy,
                                        onclick: move |_| purchase(pkg.clone()),
                                        if in_flight {
                                            span { class: "h-4 w-4 animate-spin rounded-full border-2 border-white border-t-transparent" }
                                        }
                                        "{label}"
                                    }
                                    if !affordable && package.price > 0.0 {
                                        p { class: "text-center text-xs text-orange-600", "还需要 ¥{missing}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            Card { class: "border-blue-200 bg-blue-50",
                div { class: "flex items-start gap-3 p-6",
                    span { class: "text-blue-600", "ℹ️" }
                    div { class: "space-y-2 text-sm text-blue-900",
                        p { class: "font-semibold", "购买说明" }
                        ul { class: "list-inside list-disc space-y-1",
                            for note in NOTES {
                                li { "{note}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Feature(icon: String, tint: String, label: String, value: String) -> Element {
    rsx! {
        div { class: "flex items-center gap-3 text-sm",
            div { class: "flex h-8 w-8 flex-shrink-0 items-center justify-center rounded-lg {tint}", "{icon}" }
            div { class: "flex-1",
                p { class: "text-gray-600", "{label}" }
                p { class: "font-semibold text-gray-900", "{value}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unaffordable_package_reads_insufficient() {
        let packages = mock::user::packages();
        let flagship = packages.iter().find(|p| p.id == 4).unwrap();
        assert_eq!(
            purchase_label(flagship.price, mock::user::BALANCE, false),
            "余额不足"
        );
        assert_eq!(
            format_money(shortfall(flagship.price, mock::user::BALANCE)),
            "171.49"
        );
    }

    #[test]
    fn test_purchase_labels() {
        assert_eq!(purchase_label(19.99, 128.5, false), "立即购买");
        assert_eq!(purchase_label(0.0, 128.5, false), "立即开通");
        assert_eq!(purchase_label(19.99, 128.5, true), "处理中...");
    }

    #[test]
    fn test_price_text() {
        assert_eq!(price_text(0.0), "按量计费");
        assert_eq!(price_text(49.99), "¥49.99");
    }
}
