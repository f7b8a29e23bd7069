//! Support desk overview for administrators.

use dioxus::prelude::*;

use spanel_model::{AdminTicket, TicketPriority, TicketStatus};

use super::Figure;
use crate::app::components::{
    use_toaster, Badge, BadgeVariant, EmptyRow, PageHeader, Table, TableBody, TableCell,
    TableHead, TableHeader, TableRow, TitledCard,
};
use crate::format::format_short_datetime;
use crate::mock;
use crate::toast::ToastSink;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct DeskCounts {
    open: usize,
    pending: usize,
    high: usize,
}

fn desk_counts(tickets: &[AdminTicket]) -> DeskCounts {
    tickets.iter().fold(DeskCounts::default(), |mut acc, t| {
        match t.status {
            TicketStatus::Open => acc.open += 1,
            TicketStatus::Pending => acc.pending += 1,
            TicketStatus::Closed => {}
        }
        if t.priority == TicketPriority::High {
            acc.high += 1;
        }
        acc
    })
}

fn status_variant(status: TicketStatus) -> BadgeVariant {
    match status {
        TicketStatus::Open => BadgeVariant::Destructive,
        TicketStatus::Pending => BadgeVariant::Warning,
        TicketStatus::Closed => BadgeVariant::Success,
    }
}

fn status_icon(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Open => "⚠",
        TicketStatus::Pending => "🕒",
        TicketStatus::Closed => "✓",
    }
}

fn priority_variant(priority: TicketPriority) -> BadgeVariant {
    match priority {
        TicketPriority::High => BadgeVariant::Destructive,
        TicketPriority::Medium => BadgeVariant::Warning,
        TicketPriority::Normal => BadgeVariant::Default,
        TicketPriority::Low => BadgeVariant::Secondary,
    }
}

#[component]
pub fn AdminTickets() -> Element {
    let tickets = use_signal(mock::admin::tickets);

    let counts = desk_counts(&tickets.read());
    let total = tickets.read().len();

    rsx! {
        div { class: "space-y-6",
            PageHeader { title: "工单管理", subtitle: "处理用户提交的技术问题和咨询" }

            div { class: "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4",
                Figure { label: "总工单", value: "{total}", icon: "💬" }
                Figure { label: "待处理", value: "{counts.open}", icon: "⚠️", value_class: "text-red-600", disc: "bg-red-100" }
                Figure { label: "处理中", value: "{counts.pending}", icon: "🕒", value_class: "text-orange-600", disc: "bg-orange-100" }
                Figure { label: "高优先级", value: "{counts.high}", icon: "🔥", value_class: "text-purple-600", disc: "bg-purple-100" }
            }

            TitledCard { title: "工单列表",
                Table {
                    TableHeader {
                        TableRow {
                            TableHead { class: "w-[80px]", "ID" }
                            TableHead { "标题" }
                            TableHead { "发起人" }
                            TableHead { "优先级" }
                            TableHead { "状态" }
                            TableHead { "回复数" }
                            TableHead { "创建时间" }
                            TableHead { "最后更新" }
                            TableHead { class: "text-right", "操作" }
                        }
                    }
                    TableBody {
                        if tickets.read().is_empty() {
                            EmptyRow { columns: 9, message: "暂无工单" }
                        }
                        for ticket in tickets() {
                            TicketRow { key: "{ticket.id}", ticket }
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
fn TicketRow(ticket: AdminTicket) -> Element {
    let toaster = use_toaster();
    let created = format_short_datetime(Some(&ticket.created_at));
    let updated = format_short_datetime(Some(&ticket.updated_at));
    let icon = status_icon(ticket.status);
    let id = ticket.id;
    rsx! {
        TableRow {
            TableCell { class: "font-medium", "#{id}" }
            TableCell { class: "max-w-[300px] font-semibold",
                div { class: "truncate", title: "{ticket.title}", "{ticket.title}" }
            }
            TableCell {
                p { class: "font-mono text-xs text-gray-600", "UID: {ticket.user_id}" }
                p { class: "text-sm text-gray-900", "{ticket.user_email}" }
            }
            TableCell {
                Badge { variant: priority_variant(ticket.priority), class: "text-xs", {ticket.priority.label()} }
            }
            TableCell {
                Badge { variant: status_variant(ticket.status), class: "gap-1.5",
                    "{icon} "
                    {ticket.status.label()}
                }
            }
            TableCell {
                span { class: "font-semibold text-gray-900", "💬 {ticket.reply_count}" }
            }
            TableCell { class: "text-sm text-gray-600", "{created}" }
            TableCell { class: "text-sm text-gray-600", "{updated}" }
            TableCell { class: "text-right",
                div { class: "flex items-center justify-end gap-2",
                    button {
                        r#type: "button",
                        title: "回复",
                        class: "h-8 w-8 rounded-md text-green-600 hover:bg-green-50",
                        onclick: move |_| toaster.info(&format!("回复工单 #{id}")),
                        "↩"
                    }
                    button {
                        r#type: "button",
                        title: "编辑",
                        class: "h-8 w-8 rounded-md text-blue-600 hover:bg-blue-50",
                        onclick: move |_| toaster.info(&format!("编辑工单 #{id}")),
                        "✏️"
                    }
                    button {
                        r#type: "button",
                        title: "删除",
                        class: "h-8 w-8 rounded-md text-red-600 hover:bg-red-50",
                        onclick: move |_| toaster.info(&format!("删除工单 #{id}")),
                        "🗑"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desk_counts() {
        let counts = desk_counts(&mock::admin::tickets());
        assert_eq!(
            counts,
            DeskCounts {
                open: 2,
                pending: 2,
                high: 2
            }
        );
    }

    #[test]
    fn test_pending_tickets_use_warning_badge() {
        assert_eq!(status_variant(TicketStatus::Pending), BadgeVariant::Warning);
        assert_eq!(priority_variant(TicketPriority::Low), BadgeVariant::Secondary);
    }
}
