use dioxus::prelude::*;

use super::super::Notice;
use crate::actions;
use crate::app::components::{
    use_toaster, Card, EmptyRow, PageHeader, Table, TableBody, TableCell, TableHead, TableHeader,
    TableRow, INPUT, LABEL,
};
use crate::mock;

#[component]
pub fn BannedIps() -> Element {
    let toaster = use_toaster();
    let mut banned = use_signal(mock::admin::banned_ips);
    let mut unblock = use_signal(String::new);

    let mut on_unblock = move || {
        let ip = unblock();
        if actions::unban_ip(&toaster, &mut banned.write(), &ip) > 0 {
            unblock.set(String::new());
        }
    };

    rsx! {
        div { class: "space-y-6",
            PageHeader { title: "节点被封IP", subtitle: "管理被封禁的 IP 地址" }
            Notice { tint: "blue", icon: "🛡️", text: "这里是最近的节点上捕捉到的进行非法行为的 IP" }

            Card {
                div { class: "space-y-4 p-6",
                    div {
                        label { class: "mb-2 block {LABEL}", r#for: "unblock-ip", "要解封的 IP" }
                        input {
                            id: "unblock-ip",
                            class: "{INPUT} max-w-md",
                            placeholder: "输入 IP 地址",
                            value: "{unblock}",
                            oninput: move |e| unblock.set(e.value()),
                            onkeydown: move |e| {
                                if e.key() == Key::Enter {
                                    on_unblock();
                                }
                            },
                        }
                    }
                    button {
                        r#type: "button",
                        class: "rounded-md bg-blue-600 px-4 py-2 text-sm font-medium text-white hover:bg-blue-700",
                        onclick: move |_| on_unblock(),
                        "解封"
                    }
                }
            }

            Card { class: "overflow-hidden",
                Table {
                    TableHeader {
                        TableRow {
                            TableHead { "ID" }
                            TableHead { "节点名称" }
                            TableHead { "IP 地址" }
                            TableHead { "归属地" }
                            TableHead { "封禁时间" }
                        }
                    }
                    TableBody {
                        if banned.read().is_empty() {
                            EmptyRow { columns: 5, message: "暂无被封禁的 IP" }
                        }
                        for row in banned() {
                            TableRow { key: "{row.id}",
                                TableCell { "{row.id}" }
                                TableCell { class: "font-medium", "{row.node_name}" }
                                TableCell { class: "font-mono text-sm", "{row.ip}" }
                                TableCell { "{row.location}" }
                                TableCell { class: "text-gray-500", "{row.datetime}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
