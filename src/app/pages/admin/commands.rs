//! Remote shell commands dispatched to nodes.

use dioxus::prelude::*;

use spanel_model::{CommandRecord, CommandStatus};

use super::Figure;
use crate::actions;
use crate::app::components::{
    use_toaster, Badge, BadgeVariant, EmptyState, PageHeader, Table, TableBody, TableCell,
    TableHead, TableHeader, TableRow, TitledCard, LABEL, TEXTAREA,
};
use crate::app::{local_now, panel};
use crate::format::format_full_datetime;
use crate::mock;

const TARGET_NODES: &[&str] = &[
    "香港 IPLC 01",
    "日本 BGP 02",
    "美国 LA 03",
    "新加坡 04",
    "台湾 05",
];

/// Number of most recent runs shown with their output.
const RESULT_PREVIEWS: usize = 3;

fn toggle_node(selected: &mut Vec<String>, node: &str) {
    if let Some(pos) = selected.iter().position(|n| n == node) {
        selected.remove(pos);
    } else {
        selected.push(node.to_string());
    }
}

fn count(commands: &[CommandRecord], status: CommandStatus) -> usize {
    commands.iter().filter(|c| c.status == status).count()
}

fn status_badge(status: CommandStatus) -> (BadgeVariant, &'static str) {
    match status {
        CommandStatus::Success => (BadgeVariant::Success, "✓"),
        CommandStatus::Failed => (BadgeVariant::Destructive, "✕"),
        CommandStatus::Running => (BadgeVariant::Warning, "▶"),
    }
}

fn elapsed(seconds: Option<f64>) -> String {
    seconds.map(|s| format!("{s}s")).unwrap_or_else(|| "-".to_string())
}

#[component]
pub fn AdminCommands() -> Element {
    let toaster = use_toaster();
    let mut commands = use_signal(mock::admin::commands);
    let mut command = use_signal(String::new);
    let mut selected = use_signal(Vec::<String>::new);
    let mut executing = use_signal(|| false);

    let on_execute = move |_| {
        let panel = panel();
        let (cmd, nodes) = (command(), selected());
        let id = actions::next_id(&commands.read(), |c| c.id);
        spawn(async move {
            executing.set(true);
            if let Some(record) =
                actions::execute_command(&*panel, &toaster, &cmd, &nodes, id, local_now()).await
            {
                commands.write().push(record);
                command.set(String::new());
                selected.set(Vec::new());
            }
            executing.set(false);
        });
    };

    let list = commands();
    let total = list.len();
    let succeeded = count(&list, CommandStatus::Success);
    let failed = count(&list, CommandStatus::Failed);
    let running = count(&list, CommandStatus::Running);

    rsx! {
        div { class: "space-y-6",
            PageHeader { title: "下发命令", subtitle: "向节点远程下发控制命令" }

            div { class: "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4",
                Figure { label: "总命令", value: "{total}", icon: "💻" }
                Figure { label: "执行成功", value: "{succeeded}", icon: "✅", value_class: "text-green-600", disc: "bg-green-100" }
                Figure { label: "执行失败", value: "{failed}", icon: "❌", value_class: "text-red-600", disc: "bg-red-100" }
                Figure { label: "执行中", value: "{running}", icon: "🕒", value_class: "text-orange-600", disc: "bg-orange-100" }
            }

            div { class: "grid grid-cols-1 gap-6 lg:grid-cols-2",
                TitledCard { title: "执行命令", icon: "💻",
                    div { class: "space-y-4",
                        div { class: "space-y-2",
                            label { class: LABEL, r#for: "command", "Shell 命令" }
                            textarea {
                                id: "command",
                                class: "{TEXTAREA} bg-gray-50 font-mono",
                                rows: "4",
                                placeholder: "输入要执行的命令，例如：systemctl restart ss-server",
                                value: "{command}",
                                oninput: move |e| command.set(e.value()),
                            }
                        }
                        div { class: "space-y-2",
                            p { class: LABEL, "选择目标节点" }
                            div { class: "grid grid-cols-2 gap-2",
                                for node in TARGET_NODES {
                                    {
                                        let chosen = selected.read().iter().any(|n| n == node);
                                        rsx! {
                                            button {
                                                key: "{node}",
                                                r#type: "button",
                                                class: if chosen {
                                                    "rounded-lg border-2 border-primary-admin bg-primary-admin/5 p-3 text-left text-sm text-primary-admin transition-all"
                                                } else {
                                                    "rounded-lg border-2 border-gray-200 p-3 text-left text-sm transition-all hover:border-gray-300"
                                                },
                                                onclick: move |_| toggle_node(&mut selected.write(), node),
                                                div { class: "flex items-center justify-between",
                                                    span { "{node}" }
                                                    if chosen {
                                                        span { "✓" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        button {
                            r#type: "button",
                            class: "inline-flex w-full items-center justify-center gap-2 rounded-md bg-gradient-red px-4 py-2 text-sm font-medium text-white hover:bg-primary-admin-hover disabled:opacity-50",
                            disabled: executing(),
                            onclick: on_execute,
                            if executing() { "执行中..." } else { "▶ 执行命令" }
                        }
                    }
                }

                TitledCard { title: "执行结果", icon: "⚠️",
                    if list.is_empty() {
                        EmptyState { icon: "💻", title: "暂无执行记录" }
                    } else {
                        div { class: "space-y-4",
                            for record in list.iter().take(RESULT_PREVIEWS).cloned() {
                                ResultPanel { key: "{record.id}", record }
                            }
                        }
                    }
                }
            }

            TitledCard { title: "执行历史",
                Table {
                    TableHeader {
                        TableRow {
                            TableHead { "ID" }
                            TableHead { "命令" }
                            TableHead { "目标节点" }
                            TableHead { "状态" }
                            TableHead { "执行时间" }
                            TableHead { "耗时" }
                        }
                    }
                    TableBody {
                        for record in list {
                            HistoryRow { key: "{record.id}", record }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatusBadge(status: CommandStatus) -> Element {
    let (variant, icon) = status_badge(status);
    rsx! {
        Badge { variant, class: "gap-1.5",
            "{icon} "
            {status.label()}
        }
    }
}

#[component]
fn ResultPanel(record: CommandRecord) -> Element {
    rsx! {
        div { class: "overflow-hidden rounded-lg border border-gray-200",
            div { class: "flex items-center justify-between border-b bg-gray-50 px-4 py-3",
                div { class: "flex items-center gap-3",
                    code { class: "text-sm font-semibold text-gray-900", "{record.command}" }
                    Badge { variant: BadgeVariant::Outline, class: "text-xs", "{record.node_target}" }
                }
                div { class: "flex items-center gap-2",
                    StatusBadge { status: record.status }
                    if let Some(seconds) = record.execution_time {
                        span { class: "text-xs text-gray-500", "{seconds}s" }
                    }
                }
            }
            if let Some(output) = record.result.as_deref() {
                div { class: "bg-gray-900 p-4",
                    pre { class: "whitespace-pre-wrap break-all font-mono text-xs text-green-400", "{output}" }
                }
            }
        }
    }
}

#[component]
fn HistoryRow(record: CommandRecord) -> Element {
    let executed = format_full_datetime(&record.executed_at);
    let took = elapsed(record.execution_time);
    rsx! {
        TableRow {
            TableCell { class: "font-medium", "#{record.id}" }
            TableCell { class: "max-w-[300px] truncate font-mono text-gray-600", "{record.command}" }
            TableCell { "{record.node_target}" }
            TableCell { StatusBadge { status: record.status } }
            TableCell { class: "text-gray-600", "{executed}" }
            TableCell { "{took}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_node_twice_restores_selection() {
        let mut selected = vec!["日本 BGP 02".to_string()];
        toggle_node(&mut selected, "香港 IPLC 01");
        assert_eq!(selected, vec!["日本 BGP 02", "香港 IPLC 01"]);
        toggle_node(&mut selected, "香港 IPLC 01");
        assert_eq!(selected, vec!["日本 BGP 02"]);
    }

    #[test]
    fn test_status_counts() {
        let commands = mock::admin::commands();
        assert_eq!(count(&commands, CommandStatus::Success), 2);
        assert_eq!(count(&commands, CommandStatus::Failed), 1);
        assert_eq!(count(&commands, CommandStatus::Running), 1);
    }

    #[test]
    fn test_elapsed() {
        assert_eq!(elapsed(Some(2.3)), "2.3s");
        assert_eq!(elapsed(None), "-");
    }
}
