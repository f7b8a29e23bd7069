use dioxus::prelude::*;

use spanel_model::Coupon;

use super::super::Notice;
use crate::actions;
use crate::app::components::{
    use_toaster, Badge, BadgeVariant, Card, PageHeader, Select, SelectOption, Table, TableBody,
    TableCell, TableHead, TableHeader, TableRow, INPUT, LABEL,
};
use crate::app::local_now;
use crate::forms::{CouponDraft, COUPON_EXPIRY_HOURS};
use crate::mock;

fn expiry_options() -> Vec<SelectOption> {
    COUPON_EXPIRY_HOURS
        .iter()
        .map(|hours| {
            let label = match hours {
                h if h % 24 == 0 && *h > 24 => format!("{h} 小时（{} 天）", h / 24),
                h => format!("{h} 小时"),
            };
            SelectOption::new(hours.to_string(), label)
        })
        .collect()
}

#[component]
pub fn AdminCoupons() -> Element {
    let toaster = use_toaster();
    let mut coupons = use_signal(mock::admin::coupons);
    let mut draft = use_signal(CouponDraft::default);

    let on_generate = move |_| {
        let id = actions::next_id(&coupons.read(), |c| c.id);
        let created = actions::generate_coupon(
            &toaster,
            &draft.read(),
            id,
            local_now(),
            &mut rand::thread_rng(),
        );
        if let Some(coupon) = created {
            tracing::info!(code = %coupon.code, credit = coupon.credit, "Coupon generated");
            coupons.write().push(coupon);
            draft.set(CouponDraft::default());
        }
    };

    let current = draft();
    let expire_value = current.expire_hours.to_string();

    rsx! {
        div { class: "space-y-6",
            PageHeader { title: "优惠码", subtitle: "创建与管理优惠折扣码" }

            div { class: "grid grid-cols-1 gap-6 lg:grid-cols-3",
                Card { class: "lg:col-span-1",
                    div { class: "space-y-4 p-6",
                        h3 { class: "flex items-center gap-2 font-semibold text-gray-900",
                            span { class: "text-purple-600", "🎟" }
                            "生成优惠码"
                        }
                        div { class: "space-y-2",
                            label { class: LABEL, r#for: "coupon-prefix", "优惠码前缀" }
                            input {
                                id: "coupon-prefix",
                                class: INPUT,
                                placeholder: "留空生成随机码",
                                value: "{current.prefix}",
                                oninput: move |e| draft.write().prefix = e.value(),
                            }
                            p { class: "text-xs text-gray-500", "生成随机优惠码不填" }
                        }
                        div { class: "space-y-2",
                            label { class: LABEL, r#for: "coupon-credit", "优惠码额度" }
                            input {
                                id: "coupon-credit",
                                class: INPUT,
                                placeholder: "例如：10",
                                value: "{current.credit}",
                                oninput: move |e| draft.write().credit = e.value(),
                            }
                            p { class: "text-xs text-gray-500", "百分比，九折就填 10" }
                        }
                        div { class: "space-y-2",
                            label { class: LABEL, r#for: "coupon-expire", "优惠码有效期(小时)" }
                            Select {
                                id: "coupon-expire",
                                value: expire_value,
                                options: expiry_options(),
                                on_change: move |v: String| {
                                    if let Ok(hours) = v.parse() {
                                        draft.write().expire_hours = hours;
                                    }
                                },
                            }
                        }
                        div { class: "space-y-2",
                            label { class: LABEL, r#for: "coupon-shop", "限定商品ID" }
                            input {
                                id: "coupon-shop",
                                class: INPUT,
                                placeholder: "留空为全部商品",
                                value: "{current.shop}",
                                oninput: move |e| draft.write().shop = e.value(),
                            }
                            p { class: "text-xs text-gray-500", "多个商品用英文半角逗号分割" }
                        }
                        div { class: "space-y-2",
                            label { class: LABEL, r#for: "coupon-uses", "每个用户可用次数" }
                            input {
                                id: "coupon-uses",
                                class: INPUT,
                                r#type: "number",
                                min: "1",
                                value: "{current.uses_per_user}",
                                oninput: move |e| {
                                    if let Ok(uses) = e.value().parse() {
                                        draft.write().uses_per_user = uses;
                                    }
                                },
                            }
                        }
                        div { class: "flex items-center gap-2",
                            input {
                                id: "coupon-onetime",
                                r#type: "checkbox",
                                class: "h-4 w-4 rounded border-gray-300 text-purple-600",
                                checked: current.onetime,
                                onchange: move |e| draft.write().onetime = e.checked(),
                            }
                            label { class: "text-sm text-gray-700", r#for: "coupon-onetime",
                                "一次性的，只在用户当次购买时有效"
                            }
                        }
                        button {
                            r#type: "button",
                            class: "w-full rounded-md bg-purple-600 px-4 py-2 text-sm font-medium text-white hover:bg-purple-700",
                            onclick: on_generate,
                            "生成优惠码"
                        }
                    }
                }

                div { class: "space-y-6 lg:col-span-2",
                    Notice { tint: "purple", icon: "％", text: "系统中所有优惠码列表" }
                    Card { class: "overflow-hidden",
                        Table {
                            TableHeader {
                                TableRow {
                                    TableHead { "ID" }
                                    TableHead { "优惠码" }
                                    TableHead { "折扣额度" }
                                    TableHead { "过期时间" }
                                    TableHead { "限定商品" }
                                    TableHead { "使用限制" }
                                }
                            }
                            TableBody {
                                for coupon in coupons() {
                                    CouponRow { key: "{coupon.id}", coupon }
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
fn CouponRow(coupon: Coupon) -> Element {
    rsx! {
        TableRow {
            TableCell { "{coupon.id}" }
            TableCell { class: "font-mono text-sm font-semibold", "{coupon.code}" }
            TableCell { class: "font-semibold text-red-600", "{coupon.credit}%" }
            TableCell { class: "text-sm text-gray-600", "{coupon.expire}" }
            TableCell {
                if coupon.applies_to_all() {
                    Badge { variant: BadgeVariant::Secondary, "全部商品" }
                } else {
                    span { class: "text-sm", "{coupon.shop}" }
                }
            }
            TableCell {
                div { class: "flex items-center gap-2",
                    if coupon.onetime {
                        Badge { variant: BadgeVariant::Outline, "一次性" }
                    } else {
                        Badge { variant: BadgeVariant::Secondary, "可重复使用" }
                    }
                    span { class: "text-xs text-gray-500", "每人 {coupon.uses_per_user} 次" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_options_follow_allowed_hours() {
        let options = expiry_options();
        assert_eq!(options.len(), COUPON_EXPIRY_HOURS.len());
        assert_eq!(options[0], SelectOption::new("24", "24 小时"));
        assert_eq!(options[2].label, "168 小时（7 天）");
    }
}
