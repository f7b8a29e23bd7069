use dioxus::prelude::*;

use spanel_model::RelayRule;

use super::super::Notice;
use crate::actions;
use crate::app::components::{
    use_toaster, Badge, BadgeVariant, Card, ConfirmDialog, EmptyRow, PageHeader, Table, TableBody,
    TableCell, TableHead, TableHeader, TableRow, BUTTON_ADMIN, BUTTON_OUTLINE,
    BUTTON_SMALL_OUTLINE, INPUT,
};
use crate::mock;
use crate::toast::ToastSink;

/// Rules currently listed: the last search result, or everything.
fn visible(rules: &[RelayRule], found: Option<&[u32]>) -> Vec<RelayRule> {
    match found {
        Some(ids) => rules.iter().filter(|r| ids.contains(&r.id)).cloned().collect(),
        None => rules.to_vec(),
    }
}

#[component]
pub fn AdminRelayRules() -> Element {
    let toaster = use_toaster();
    let mut rules = use_signal(mock::admin::relay_rules);
    let mut user_id = use_signal(String::new);
    let mut found = use_signal(|| None::<Vec<u32>>);
    let mut pending_delete = use_signal(|| None::<(u32, String)>);

    let mut on_search = move || {
        let hits = actions::search_relay_rules(&toaster, &rules.read(), &user_id.read());
        if let Some(hits) = hits {
            found.set(Some(hits.iter().map(|r| r.id).collect()));
        }
    };

    let on_confirm = move |_| {
        if let Some((id, owner)) = pending_delete.take() {
            rules.write().retain(|r| r.id != id);
            tracing::debug!(id, "Relay rule deleted");
            toaster.success(&format!("已删除 {owner} 的中转规则"));
        }
    };

    let listed = visible(&rules.read(), found.read().as_deref());
    let filtered = found.read().is_some();
    let message = pending_delete
        .read()
        .as_ref()
        .map(|(_, owner)| format!("确定要删除 {owner} 的中转规则吗？"))
        .unwrap_or_default();

    rsx! {
        div { class: "space-y-6",
            PageHeader {
                title: "中转规则管理",
                subtitle: "配置用户流量中转规则",
                actions: rsx! {
                    button {
                        r#type: "button",
                        class: BUTTON_ADMIN,
                        onclick: move |_| toaster.info("新增中转规则功能开发中"),
                        "＋ 新增规则"
                    }
                },
            }
            Notice { tint: "purple", icon: "🔁", text: "系统中所有的中转规则" }

            Card {
                div { class: "flex gap-3 p-6",
                    input {
                        class: "{INPUT} max-w-md flex-1",
                        placeholder: "输入用户 ID 进行搜索链路搜索",
                        value: "{user_id}",
                        oninput: move |e| user_id.set(e.value()),
                        onkeydown: move |e| {
                            if e.key() == Key::Enter {
                                on_search();
                            }
                        },
                    }
                    button {
                        r#type: "button",
                        class: "rounded-md bg-purple-600 px-4 py-2 text-sm font-medium text-white hover:bg-purple-700",
                        onclick: move |_| on_search(),
                        "🔍 搜索"
                    }
                    if filtered {
                        button {
                            r#type: "button",
                            class: BUTTON_OUTLINE,
                            onclick: move |_| {
                                found.set(None);
                                user_id.set(String::new());
                            },
                            "显示全部"
                        }
                    }
                }
            }

            Card { class: "overflow-hidden",
                Table {
                    TableHeader {
                        TableRow {
                            TableHead { "操作" }
                            TableHead { "ID" }
                            TableHead { "用户 ID" }
                            TableHead { "用户名" }
                            TableHead { "起源节点" }
                            TableHead { "目标节点" }
                            TableHead { "端口" }
                            TableHead { "优先级" }
                        }
                    }
                    TableBody {
                        if listed.is_empty() {
                            EmptyRow { columns: 8, message: "没有匹配的中转规则" }
                        }
                        for rule in listed {
                            RuleRow {
                                key: "{rule.id}",
                                rule,
                                on_delete: move |target| pending_delete.set(Some(target)),
                            }
                        }
                    }
                }
            }

            ConfirmDialog {
                open: pending_delete.read().is_some(),
                title: "删除中转规则",
                message,
                confirm_label: "删除",
                destructive: true,
                on_confirm,
                on_cancel: move |_| pending_delete.set(None),
            }
        }
    }
}

#[component]
fn RuleRow(rule: RelayRule, on_delete: EventHandler<(u32, String)>) -> Element {
    let id = rule.id;
    let owner = rule.user_name.clone();
    rsx! {
        TableRow {
            TableCell {
                div { class: "flex gap-2",
                    button { r#type: "button", class: BUTTON_SMALL_OUTLINE, "✏️ 编辑" }
                    button {
                        r#type: "button",
                        class: "{BUTTON_SMALL_OUTLINE} text-red-600 hover:bg-red-50 hover:text-red-700",
                        onclick: move |_| on_delete.call((id, owner.clone())),
                        "🗑 删除"
                    }
                }
            }
            TableCell { "{id}" }
            TableCell { "{rule.user_id}" }
            TableCell { class: "font-medium",
                if rule.user_id == 0 {
                    Badge { variant: BadgeVariant::Secondary, "{rule.user_name}" }
                } else {
                    "{rule.user_name}"
                }
            }
            TableCell { "{rule.source_node_name}" }
            TableCell { "{rule.dist_node_name}" }
            TableCell { class: "font-mono text-sm", "{rule.port}" }
            TableCell { Badge { variant: BadgeVariant::Outline, "{rule.priority}" } }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_follows_search_result() {
        let rules = mock::admin::relay_rules();
        assert_eq!(visible(&rules, None).len(), rules.len());
        let shown = visible(&rules, Some(&[2]));
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].user_id, 0);
        assert!(visible(&rules, Some(&[])).is_empty());
    }
}
