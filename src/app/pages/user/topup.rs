//! Balance top-up: preset tiers, custom amount, payment methods and card keys.

use dioxus::prelude::*;

use spanel_model::{PaymentMethod, PaymentOption, RechargeTier};

use crate::actions;
use crate::app::components::{
    use_toaster, Badge, Card, PageHeader, TitledCard, BUTTON_OUTLINE, BUTTON_USER, LABEL,
};
use crate::app::panel;
use crate::format::format_money;
use crate::forms::{self, TEST_COUPON};
use crate::mock;

const PAYMENT_NOTES: &[&str] = &[
    "所有支付方式均采用 SSL 加密，确保资金安全",
    "充值即时到账，无需等待人工审核",
    "支持支付宝、微信支付、PayPal 等多种方式",
    "大额充值可联系客服享受更多优惠",
];

/// Amount entered and amount credited after the tier bonus.
fn summary(preset: Option<u32>, custom: &str, tiers: &[RechargeTier]) -> (f64, f64) {
    let amount = match preset {
        Some(amount) => f64::from(amount),
        None => custom.trim().parse::<f64>().unwrap_or(0.0),
    };
    let amount = if amount.is_finite() { amount } else { 0.0 };
    (amount, amount + f64::from(forms::top_up_bonus(tiers, amount)))
}

#[component]
pub fn TopUp() -> Element {
    let toaster = use_toaster();
    let profile = use_signal(mock::user::profile);
    let tiers = use_signal(mock::user::recharge_tiers);
    let methods = use_signal(mock::user::payment_options);
    let mut balance = use_signal(|| mock::user::BALANCE);
    let mut preset = use_signal(|| None::<u32>);
    let mut custom = use_signal(String::new);
    let mut paying = use_signal(|| None::<PaymentMethod>);
    let mut card_key = use_signal(String::new);
    let mut key_applied = use_signal(|| false);
    let mut activating = use_signal(|| false);

    let mut pay = move |method: PaymentMethod| {
        if paying.peek().is_some() {
            return;
        }
        let panel = panel();
        let amount = custom();
        let tier_list = tiers();
        spawn(async move {
            paying.set(Some(method));
            let credited =
                actions::pay_top_up(&*panel, &toaster, method, preset(), &amount, &tier_list)
                    .await;
            if let Some(credited) = credited {
                balance.set(balance() + credited);
            }
            paying.set(None);
        });
    };

    let on_verify = move |_| {
        if actions::apply_card_key(&toaster, &card_key.read()) {
            key_applied.set(true);
        }
    };

    let on_activate = move |_| {
        let panel = panel();
        spawn(async move {
            activating.set(true);
            let code = card_key();
            if let Some(updated) =
                actions::activate_card_key(&*panel, &toaster, &code, balance()).await
            {
                balance.set(updated);
                card_key.set(String::new());
                key_applied.set(false);
            }
            activating.set(false);
        });
    };

    let has_amount = preset().is_some() || !custom.read().is_empty();
    let (amount, total) = summary(preset(), &custom.read(), &tiers.read());
    let amount_text = format_money(amount);
    let total_text = format_money(total);
    let balance_text = format_money(balance());
    let vip = format!("VIP {}", profile.read().class);
    let class_expire = profile.read().class_expire.clone();
    let in_flight = paying();

    rsx! {
        div { class: "space-y-6",
            PageHeader { title: "捐赠充值", subtitle: "为账户充值，享受更多优质服务" }

            div { class: "grid grid-cols-1 gap-4 md:grid-cols-3",
                GradientTile { gradient: "from-green-500 to-green-600", icon: "👛", label: "当前余额", value: "¥{balance_text}" }
                GradientTile { gradient: "from-purple-500 to-purple-600", icon: "📈", label: "VIP 等级", value: vip }
                GradientTile { gradient: "from-orange-500 to-orange-600", icon: "🎁", label: "等级到期", value: class_expire, small: true }
            }

            div { class: "grid grid-cols-1 gap-6 lg:grid-cols-3",
                div { class: "space-y-6 lg:col-span-2",
                    TitledCard { title: "选择充值金额", icon: "💳",
                        div { class: "space-y-6",
                            div {
                                p { class: "mb-3 {LABEL}", "快捷充值" }
                                div { class: "grid grid-cols-2 gap-3 sm:grid-cols-3",
                                    for RechargeTier { amount , bonus } in tiers() {
                                        button {
                                            key: "{amount}",
                                            r#type: "button",
                                            class: if preset() == Some(amount) {
                                                "relative rounded-lg border-2 border-primary-user bg-primary-user/5 p-4 transition-all"
                                            } else {
                                                "relative rounded-lg border-2 border-gray-200 p-4 transition-all hover:border-primary-user/50"
                                            },
                                            onclick: move |_| {
                                                preset.set(Some(amount));
                                                custom.set(String::new());
                                            },
                                            p { class: "text-2xl font-bold text-gray-900", "¥{amount}" }
                                            if bonus > 0 {
                                                div { class: "absolute -right-2 -top-2 rounded-full bg-red-500 px-2 py-0.5 text-xs text-white",
                                                    "送¥{bonus}"
                                                }
                                            }
                                        }
                                    }
                                }
                            }

                            div {
                                p { class: "mb-3 {LABEL}", "自定义金额" }
                                div { class: "flex gap-3",
                                    div { class: "relative flex-1",
                                        span { class: "absolute left-4 top-1/2 -translate-y-1/2 text-gray-500", "¥" }
                                        input {
                                            r#type: "number",
                                            class: "w-full rounded-lg border border-gray-300 py-3 pl-8 pr-4 focus:border-transparent focus:outline-none focus:ring-2 focus:ring-primary-user",
                                            placeholder: "输入金额",
                                            value: "{custom}",
                                            oninput: move |e| {
                                                custom.set(e.value());
                                                preset.set(None);
                                            },
                                        }
                                    }
                                    button {
                                        r#type: "button",
                                        class: BUTTON_OUTLINE,
                                        onclick: move |_| {
                                            preset.set(None);
                                            custom.set(String::new());
                                        },
                                        "清除"
                                    }
                                }
                            }

                            if has_amount {
                                div {
                                    p { class: "mb-3 {LABEL}", "选择支付方式" }
                                    div { class: "grid grid-cols-2 gap-4",
                                        for option in methods() {
                                            PaymentButton {
                                                key: "{option.method}",
                                                option: option.clone(),
                                                in_flight,
                                                on_pay: move |method| pay(method),
                                            }
                                        }
                                    }
                                }
                                div { class: "rounded-lg bg-blue-50 p-4",
                                    div { class: "flex items-center justify-between",
                                        div {
                                            p { class: "text-sm text-gray-600", "充值金额" }
                                            p { class: "text-2xl font-bold text-primary-user", "¥{amount_text}" }
                                        }
                                        div { class: "text-right",
                                            p { class: "text-sm text-gray-600", "实际到账" }
                                            p { class: "text-2xl font-bold text-green-600", "¥{total_text}" }
                                        }
                                    }
                                }
                            }
                        }
                    }

                    TitledCard { title: "支付说明", icon: "🛡️",
                        div { class: "space-y-3 text-sm text-gray-700",
                            for note in PAYMENT_NOTES {
                                div { class: "flex items-start gap-3",
                                    span { class: "text-green-600", "✓" }
                                    p { "{note}" }
                                }
                            }
                        }
                    }
                }

                div { class: "space-y-6",
                    TitledCard { title: "卡密激活", icon: "🎁",
                        div { class: "space-y-4",
                            div {
                                label { class: "mb-2 block {LABEL}", "卡密代码" }
                                input {
                                    r#type: "text",
                                    class: "w-full rounded-lg border border-gray-300 px-4 py-3 focus:border-transparent focus:outline-none focus:ring-2 focus:ring-primary-user",
                                    placeholder: "输入卡密代码",
                                    disabled: key_applied(),
                                    value: "{card_key}",
                                    oninput: move |e| card_key.set(e.value()),
                                }
                            }
                            if key_applied() {
                                button {
                                    r#type: "button",
                                    class: "{BUTTON_USER} w-full",
                                    disabled: activating(),
                                    onclick: on_activate,
                                    if activating() { "激活中..." } else { "✓ 确认激活 ¥20" }
                                }
                            } else {
                                div { class: "flex gap-2",
                                    button { r#type: "button", class: "{BUTTON_OUTLINE} flex-1", onclick: on_verify, "验证卡密" }
                                    button {
                                        r#type: "button",
                                        class: "{BUTTON_USER} flex-1",
                                        disabled: activating(),
                                        onclick: on_activate,
                                        if activating() { "激活中..." } else { "立即激活" }
                                    }
                                }
                            }
                            div { class: "rounded-lg bg-blue-50 p-4 text-sm text-blue-900",
                                p { class: "font-semibold", "测试卡密" }
                                p { class: "mt-1 rounded bg-white px-2 py-1 font-mono text-xs", "{TEST_COUPON}" }
                                p { class: "mt-2 text-xs", "真实卡密可通过活动或客服获取" }
                            }
                        }
                    }

                    TitledCard { title: "需要帮助？", icon: "🎧",
                        p { class: "text-sm text-gray-600", "充值遇到问题请提交工单，客服会在 24 小时内回复。" }
                    }
                }
            }
        }
    }
}

#[component]
fn GradientTile(
    gradient: String,
    icon: String,
    label: String,
    value: String,
    #[props(default)] small: bool,
) -> Element {
    let value_class = if small { "text-sm font-semibold" } else { "text-3xl font-bold" };
    rsx! {
        Card { class: "border-0 bg-gradient-to-br text-white {gradient}",
            div { class: "flex items-center gap-4 p-6",
                div { class: "flex h-12 w-12 items-center justify-center rounded-lg bg-white/20 text-2xl", "{icon}" }
                div {
                    p { class: "text-sm text-white/80", "{label}" }
                    p { class: value_class, "{value}" }
                }
            }
        }
    }
}

#[component]
fn PaymentButton(
    option: PaymentOption,
    in_flight: Option<PaymentMethod>,
    on_pay: EventHandler<PaymentMethod>,
) -> Element {
    let method = option.method;
    let state = match in_flight {
        Some(active) if active == method => "border-primary-user shadow-lg",
        Some(_) => "border-gray-200 opacity-50 cursor-not-allowed",
        None => "border-gray-200 hover:border-primary-user/50",
    };
    let name = method.label();
    rsx! {
        button {
            r#type: "button",
            class: "relative rounded-lg border-2 p-6 transition-all {state}",
            disabled: in_flight.is_some(),
            onclick: move |_| on_pay.call(method),
            div { class: "flex flex-col items-center gap-3",
                span { class: "text-4xl", "{option.icon}" }
                div { class: "text-center",
                    p { class: "font-semibold text-gray-900", "{name}" }
                    p { class: "text-xs text-gray-600", "{option.description}" }
                }
            }
            if option.popular {
                Badge { class: "absolute -top-2 right-2 border-transparent bg-primary-user text-white", "推荐" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_adds_tier_bonus_for_presets() {
        let tiers = mock::user::recharge_tiers();
        assert_eq!(summary(Some(100), "", &tiers), (100.0, 115.0));
        assert_eq!(summary(Some(10), "", &tiers), (10.0, 10.0));
    }

    #[test]
    fn test_summary_custom_amount_earns_matching_tier_bonus() {
        let tiers = mock::user::recharge_tiers();
        assert_eq!(summary(None, "100", &tiers), (100.0, 115.0));
        assert_eq!(summary(None, "101", &tiers), (101.0, 101.0));
        assert_eq!(summary(None, "abc", &tiers), (0.0, 0.0));
    }
}
