//! Support tickets: figures, the ticket list and the create dialog.

use dioxus::prelude::*;

use spanel_model::{Ticket, TicketPriority, TicketStats, TicketStatus};

use crate::actions;
use crate::app::components::{
    use_toaster, Badge, BadgeVariant, Card, Dialog, EmptyState, PageHeader, TitledCard,
    BUTTON_OUTLINE, BUTTON_USER, INPUT, LABEL, TEXTAREA,
};
use crate::app::{local_now, panel};
use crate::mock;

fn status_variant(status: TicketStatus) -> BadgeVariant {
    match status {
        TicketStatus::Open => BadgeVariant::Destructive,
        TicketStatus::Pending => BadgeVariant::Default,
        TicketStatus::Closed => BadgeVariant::Success,
    }
}

fn priority_class(priority: TicketPriority) -> &'static str {
    match priority {
        TicketPriority::High => "bg-red-100 text-red-700 border-red-200",
        TicketPriority::Medium => "bg-orange-100 text-orange-700 border-orange-200",
        TicketPriority::Normal => "bg-blue-100 text-blue-700 border-blue-200",
        TicketPriority::Low => "bg-gray-100 text-gray-700 border-gray-200",
    }
}

/// Adds a freshly opened ticket to the end of the list and counts it as open.
fn record_submitted(tickets: &mut Vec<Ticket>, stats: &mut TicketStats, ticket: Ticket) {
    tickets.push(ticket);
    stats.total += 1;
    stats.open += 1;
}

#[component]
pub fn Tickets() -> Element {
    let toaster = use_toaster();
    let mut tickets = use_signal(mock::user::tickets);
    let mut stats = use_signal(mock::user::ticket_stats);
    let mut dialog_open = use_signal(|| false);
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);
    let mut submitting = use_signal(|| false);

    let on_submit = move |_| {
        let panel = panel();
        let (t, c) = (title(), content());
        spawn(async move {
            submitting.set(true);
            let submitted = actions::submit_ticket(&*panel, &toaster, &t, &c, local_now()).await;
            if let Some(ticket) = submitted {
                record_submitted(&mut tickets.write(), &mut stats.write(), ticket);
                title.set(String::new());
                content.set(String::new());
                dialog_open.set(false);
            }
            submitting.set(false);
        });
    };

    let TicketStats { total, open, pending, closed } = stats();

    rsx! {
        div { class: "space-y-6",
            PageHeader {
                title: "技术支持",
                subtitle: "提交工单，获取专业技术支持",
                actions: rsx! {
                    button {
                        r#type: "button",
                        class: "{BUTTON_USER} px-6 py-3",
                        onclick: move |_| dialog_open.set(true),
                        "＋ 创建工单"
                    }
                },
            }

            div { class: "grid grid-cols-1 gap-6 md:grid-cols-4",
                TintedFigure { tint: "blue", label: "总工单", value: total, icon: "💬" }
                TintedFigure { tint: "red", label: "待处理", value: open, icon: "⚠️" }
                TintedFigure { tint: "orange", label: "处理中", value: pending, icon: "🕒" }
                TintedFigure { tint: "green", label: "已关闭", value: closed, icon: "✅" }
            }

            TitledCard { title: "我的工单", icon: "💬",
                if tickets.read().is_empty() {
                    EmptyState { icon: "📭", title: "暂无工单", hint: "遇到问题时可以创建工单联系我们" }
                } else {
                    div { class: "space-y-4",
                        for ticket in tickets() {
                            TicketItem { key: "{ticket.id}", ticket }
                        }
                    }
                }
            }

            Dialog {
                open: dialog_open(),
                title: "创建新工单",
                description: "请详细描述您遇到的问题，我们会尽快为您处理",
                on_close: move |_| dialog_open.set(false),
                div { class: "space-y-4",
                    div { class: "space-y-2",
                        label { class: LABEL, r#for: "ticket-title", "工单标题" }
                        input {
                            id: "ticket-title",
                            class: INPUT,
                            placeholder: "简要描述问题",
                            value: "{title}",
                            oninput: move |e| title.set(e.value()),
                        }
                    }
                    div { class: "space-y-2",
                        label { class: LABEL, r#for: "ticket-content", "详细描述" }
                        textarea {
                            id: "ticket-content",
                            class: TEXTAREA,
                            rows: "6",
                            placeholder: "请详细描述您遇到的问题，包括错误信息、复现步骤等",
                            value: "{content}",
                            oninput: move |e| content.set(e.value()),
                        }
                    }
                    div { class: "flex justify-end gap-3 pt-2",
                        button {
                            r#type: "button",
                            class: BUTTON_OUTLINE,
                            onclick: move |_| dialog_open.set(false),
                            "取消"
                        }
                        button {
                            r#type: "button",
                            class: BUTTON_USER,
                            disabled: submitting(),
                            onclick: on_submit,
                            if submitting() { "提交中..." } else { "提交工单" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TintedFigure(tint: String, label: String, value: u32, icon: String) -> Element {
    rsx! {
        Card { class: "border-{tint}-200 bg-gradient-to-br from-{tint}-50 to-{tint}-100",
            div { class: "flex items-center justify-between p-6",
                div {
                    p { class: "text-sm font-medium text-{tint}-700", "{label}" }
                    p { class: "mt-2 text-3xl font-bold text-{tint}-900", "{value}" }
                }
                div { class: "flex h-14 w-14 items-center justify-center rounded-full bg-{tint}-200 text-2xl", "{icon}" }
            }
        }
    }
}

#[component]
fn TicketItem(ticket: Ticket) -> Element {
    let priority = priority_class(ticket.priority);
    rsx! {
        div { class: "cursor-pointer rounded-lg border border-gray-200 p-4 transition-shadow hover:shadow-md",
            div { class: "mb-3",
                div { class: "mb-2 flex flex-wrap items-center gap-3",
                    h3 { class: "text-lg font-semibold text-gray-900", "{ticket.title}" }
                    Badge { variant: status_variant(ticket.status), {ticket.status.label()} }
                    span { class: "rounded border px-2 py-1 text-xs font-medium {priority}", {ticket.priority.label()} }
                }
                p { class: "line-clamp-2 text-sm text-gray-600", "{ticket.content}" }
            }
            div { class: "flex flex-wrap items-center justify-between gap-2 text-sm text-gray-500",
                div { class: "flex items-center gap-6",
                    span { "🕒 创建于 {ticket.created_at}" }
                    span { "💬 {ticket.replies} 条回复" }
                }
                span { class: "text-xs", "#{ticket.id} · 更新于 {ticket.updated_at}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submitted_ticket_is_appended_and_counted() {
        let mut tickets = mock::user::tickets();
        let mut stats = mock::user::ticket_stats();
        let before = tickets.len();
        let ticket = Ticket::submitted(1006, " 无法连接 ", "香港节点超时", "2026-01-01 10:00");

        record_submitted(&mut tickets, &mut stats, ticket);

        assert_eq!(tickets.len(), before + 1);
        let last = tickets.last().unwrap();
        assert_eq!(last.id, 1006);
        assert_eq!(last.title, "无法连接");
        assert_eq!(last.status, TicketStatus::Open);
        assert_eq!(stats.total, 16);
        assert_eq!(stats.open, 4);
        assert_eq!(stats.pending, 5);
        assert_eq!(stats.closed, 7);
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(status_variant(TicketStatus::Open), BadgeVariant::Destructive);
        assert_eq!(status_variant(TicketStatus::Closed), BadgeVariant::Success);
        assert!(priority_class(TicketPriority::High).contains("red"));
    }
}
