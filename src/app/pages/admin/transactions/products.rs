use dioxus::prelude::*;

use spanel_model::{Product, ProductContent};

use super::super::Notice;
use crate::app::components::{
    use_toaster, Badge, BadgeVariant, Card, ConfirmDialog, PageHeader, Table, TableBody,
    TableCell, TableHead, TableHeader, TableRow, BUTTON_ADMIN, BUTTON_SMALL_OUTLINE,
};
use crate::format::format_money;
use crate::mock;
use crate::toast::ToastSink;

/// `100GB | 30天 | LV.1`, or `-` when the product grants nothing.
fn describe(content: &ProductContent) -> String {
    let parts: Vec<String> = [
        content.bandwidth.map(|gb| format!("{gb}GB")),
        content.expire.map(|days| format!("{days}天")),
        content.class.map(|level| format!("LV.{level}")),
    ]
    .into_iter()
    .flatten()
    .collect();
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(" | ")
    }
}

/// Takes product `id` off the shelf. Returns false when it already was.
fn delist(products: &mut [Product], id: u32) -> bool {
    match products.iter_mut().find(|p| p.id == id) {
        Some(product) if product.listed => {
            product.listed = false;
            true
        }
        _ => false,
    }
}

#[component]
pub fn AdminProducts() -> Element {
    let toaster = use_toaster();
    let mut products = use_signal(mock::admin::products);
    let mut pending = use_signal(|| None::<(u32, String)>);

    let on_confirm = move |_| {
        if let Some((id, name)) = pending.take() {
            if delist(&mut products.write(), id) {
                tracing::info!(id, "Product delisted");
                toaster.success(&format!("「{name}」已下架"));
            }
        }
    };

    let message = pending
        .read()
        .as_ref()
        .map(|(_, name)| format!("确定要下架「{name}」吗？下架会关闭所有购买过的此套餐的自动续费！"))
        .unwrap_or_default();

    rsx! {
        div { class: "space-y-6",
            PageHeader {
                title: "商品列表",
                subtitle: "管理在售套餐与商品",
                actions: rsx! {
                    button {
                        r#type: "button",
                        class: BUTTON_ADMIN,
                        onclick: move |_| toaster.info("新增商品功能开发中"),
                        "＋ 新增商品"
                    }
                },
            }
            Notice { tint: "purple", icon: "📦", text: "系统中所有商品的列表" }

            Card { class: "overflow-hidden",
                Table {
                    TableHeader {
                        TableRow {
                            TableHead { "操作" }
                            TableHead { "ID" }
                            TableHead { "商品名称" }
                            TableHead { "价格" }
                            TableHead { "商品内容" }
                            TableHead { "自动续费" }
                            TableHead { "续费重置流量" }
                            TableHead { "状态" }
                            TableHead { "周期销量" }
                        }
                    }
                    TableBody {
                        for product in products() {
                            ProductRow {
                                key: "{product.id}",
                                product,
                                on_delist: move |target| pending.set(Some(target)),
                            }
                        }
                    }
                }
            }

            ConfirmDialog {
                open: pending.read().is_some(),
                title: "下架商品",
                message,
                confirm_label: "下架",
                destructive: true,
                on_confirm,
                on_cancel: move |_| pending.set(None),
            }
        }
    }
}

#[component]
fn ProductRow(product: Product, on_delist: EventHandler<(u32, String)>) -> Element {
    let id = product.id;
    let name = product.name.clone();
    let price = format_money(product.price);
    let content = describe(&product.content);
    rsx! {
        TableRow {
            TableCell {
                div { class: "flex gap-2",
                    button { r#type: "button", class: BUTTON_SMALL_OUTLINE, "✏️ 编辑" }
                    button {
                        r#type: "button",
                        class: "{BUTTON_SMALL_OUTLINE} disabled:cursor-not-allowed disabled:opacity-50",
                        disabled: !product.listed,
                        onclick: move |_| on_delist.call((id, name.clone())),
                        "⬇ 下架"
                    }
                }
            }
            TableCell { "{id}" }
            TableCell { class: "font-medium", "{product.name}" }
            TableCell { class: "font-semibold text-red-600", "¥{price}" }
            TableCell { class: "text-sm", "{content}" }
            TableCell {
                if product.auto_renew == 0 {
                    Badge { variant: BadgeVariant::Outline, "不自动续费" }
                } else {
                    Badge { variant: BadgeVariant::Secondary, "{product.auto_renew} 天后续费" }
                }
            }
            TableCell {
                if product.auto_reset_bandwidth {
                    Badge { variant: BadgeVariant::Secondary, "自动重置" }
                } else {
                    span { class: "text-gray-500", "不自动重置" }
                }
            }
            TableCell {
                if product.listed {
                    Badge { class: "bg-green-600", "上架" }
                } else {
                    Badge { variant: BadgeVariant::Outline, "下架" }
                }
            }
            TableCell { span { class: "font-medium", "📈 {product.period_sales}" } }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_content() {
        let products = mock::admin::products();
        assert_eq!(describe(&products[0].content), "100GB | 30天 | LV.1");
        assert_eq!(describe(&products[3].content), "100GB");
        assert_eq!(describe(&ProductContent::default()), "-");
    }

    #[test]
    fn test_delist_only_once() {
        let mut products = mock::admin::products();
        assert!(delist(&mut products, 1));
        assert!(!products[0].listed);
        assert!(!delist(&mut products, 1));
        assert!(!delist(&mut products, 5));
    }
}
