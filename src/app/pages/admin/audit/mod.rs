//! Security audit rules and the (not yet built) audit log.

use dioxus::prelude::*;

use spanel_model::{AuditAction, AuditRule, AuditRuleType};

use super::placeholder::Placeholder;
use super::Figure;
use crate::app::components::{
    use_toaster, Badge, BadgeVariant, PageHeader, Switch, Table, TableBody, TableCell, TableHead,
    TableHeader, TableRow, TitledCard, BUTTON_ADMIN,
};
use crate::format::format_date;
use crate::mock;
use crate::toast::ToastSink;

fn type_class(kind: AuditRuleType) -> &'static str {
    match kind {
        AuditRuleType::Traffic => "bg-blue-100 text-blue-700",
        AuditRuleType::Login => "bg-green-100 text-green-700",
        AuditRuleType::Payment => "bg-purple-100 text-purple-700",
        AuditRuleType::Content => "bg-orange-100 text-orange-700",
    }
}

fn action_badge(action: AuditAction) -> (BadgeVariant, &'static str) {
    match action {
        AuditAction::Block => (BadgeVariant::Destructive, "⛔"),
        AuditAction::Warn => (BadgeVariant::Warning, "⚠"),
        AuditAction::Log => (BadgeVariant::Secondary, "🛡"),
    }
}

/// Flips the active flag of rule `id`; returns the new state.
fn toggle_rule(rules: &mut [AuditRule], id: u32) -> Option<bool> {
    let rule = rules.iter_mut().find(|r| r.id == id)?;
    rule.is_active = !rule.is_active;
    Some(rule.is_active)
}

#[component]
pub fn AuditRules() -> Element {
    let toaster = use_toaster();
    let mut rules = use_signal(mock::admin::audit_rules);

    let all = rules();
    let total = all.len();
    let active = all.iter().filter(|r| r.is_active).count();
    let triggers: u32 = all.iter().map(|r| r.trigger_count).sum();
    let blocking = all.iter().filter(|r| r.action == AuditAction::Block).count();

    rsx! {
        div { class: "space-y-6",
            PageHeader {
                title: "审计规则",
                subtitle: "配置系统安全审计与风控规则",
                actions: rsx! {
                    button {
                        r#type: "button",
                        class: "{BUTTON_ADMIN} shadow-lg",
                        onclick: move |_| toaster.info("新增审计规则功能开发中"),
                        "＋ 新增规则"
                    }
                },
            }

            div { class: "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4",
                Figure { label: "总规则", value: "{total}", icon: "🛡" }
                Figure { label: "启用中", value: "{active}", icon: "🛡", value_class: "text-green-600", disc: "bg-green-100" }
                Figure { label: "总触发次数", value: "{triggers}", icon: "🕒", value_class: "text-orange-600", disc: "bg-orange-100" }
                Figure { label: "拦截规则", value: "{blocking}", icon: "⛔", value_class: "text-red-600", disc: "bg-red-100" }
            }

            TitledCard { title: "规则列表",
                Table {
                    TableHeader {
                        TableRow {
                            TableHead { class: "w-[80px]", "ID" }
                            TableHead { "规则名称" }
                            TableHead { "类型" }
                            TableHead { "匹配条件" }
                            TableHead { "处理动作" }
                            TableHead { "状态" }
                            TableHead { "触发次数" }
                            TableHead { "创建时间" }
                            TableHead { class: "text-right", "操作" }
                        }
                    }
                    TableBody {
                        for rule in all {
                            RuleRow {
                                key: "{rule.id}",
                                rule,
                                on_toggle: move |id| {
                                    if let Some(now_active) = toggle_rule(&mut rules.write(), id) {
                                        tracing::debug!(id, now_active, "Audit rule toggled");
                                    }
                                },
                            }
                        }
                        tr {
                            td { colspan: "9", class: "p-4 text-center text-sm text-gray-500",
                                "显示 1-{total} 条，共 {total} 条记录"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RuleRow(rule: AuditRule, on_toggle: EventHandler<u32>) -> Element {
    let toaster = use_toaster();
    let id = rule.id;
    let (variant, glyph) = action_badge(rule.action);
    let kind_class = type_class(rule.rule_type);
    let kind = rule.rule_type.label();
    let action = rule.action.label();
    let created = format_date(Some(&rule.created_at));
    rsx! {
        TableRow {
            TableCell { class: "font-medium", "#{id}" }
            TableCell { class: "font-semibold", "{rule.name}" }
            TableCell { Badge { class: kind_class, "{kind}" } }
            TableCell { class: "font-mono text-sm text-gray-600", "{rule.match_pattern}" }
            TableCell { Badge { variant, class: "gap-1.5", "{glyph} {action}" } }
            TableCell {
                div { class: "flex items-center gap-2",
                    Switch { checked: rule.is_active, on_change: move |_| on_toggle.call(id) }
                    if rule.is_active {
                        Badge { variant: BadgeVariant::Success, "启用" }
                    } else {
                        Badge { variant: BadgeVariant::Secondary, "禁用" }
                    }
                }
            }
            TableCell { span { class: "font-semibold text-gray-900", "{rule.trigger_count}" } }
            TableCell { class: "text-sm text-gray-600", "{created}" }
            TableCell { class: "text-right",
                div { class: "flex items-center justify-end gap-2",
                    button {
                        r#type: "button",
                        class: "h-8 w-8 rounded-md text-blue-600 hover:bg-blue-50",
                        onclick: move |_| toaster.info(&format!("编辑规则 #{id}")),
                        "✏️"
                    }
                    button {
                        r#type: "button",
                        class: "h-8 w-8 rounded-md text-red-600 hover:bg-red-50",
                        onclick: move |_| toaster.info(&format!("删除规则 #{id}")),
                        "🗑"
                    }
                }
            }
        }
    }
}

#[component]
pub fn AuditLogs() -> Element {
    rsx! {
        Placeholder { title: "审计记录", description: "查看系统审计日志记录", icon: "📄" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_rule_twice_restores() {
        let mut rules = mock::admin::audit_rules();
        assert_eq!(toggle_rule(&mut rules, 4), Some(true));
        assert_eq!(toggle_rule(&mut rules, 4), Some(false));
        assert_eq!(rules, mock::admin::audit_rules());
        assert_eq!(toggle_rule(&mut rules, 99), None);
    }

    #[test]
    fn test_trigger_total() {
        let rules = mock::admin::audit_rules();
        let total: u32 = rules.iter().map(|r| r.trigger_count).sum();
        assert_eq!(total, 544);
        assert_eq!(rules.iter().filter(|r| r.action == AuditAction::Block).count(), 2);
    }
}
