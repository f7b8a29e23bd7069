//! Shared page for admin sections that are not built yet.

use dioxus::prelude::*;

use crate::app::components::{
    Card, Table, TableBody, TableHead, TableHeader, TableRow, TitledCard, BUTTON_ADMIN,
};

#[component]
pub(crate) fn Placeholder(title: String, description: String, icon: String) -> Element {
    let list_title = format!("{title}列表");
    rsx! {
        div { class: "space-y-6",
            div { class: "flex items-center justify-between",
                div { class: "flex items-center gap-3",
                    div { class: "flex h-10 w-10 items-center justify-center rounded-lg bg-primary-admin/10 text-xl text-primary-admin", "{icon}" }
                    div {
                        h1 { class: "text-3xl font-bold text-gray-900", "{title}" }
                        p { class: "mt-1 text-gray-600", "{description}" }
                    }
                }
                button { r#type: "button", class: BUTTON_ADMIN, disabled: true, "新增" }
            }

            div { class: "grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4",
                for slot in 0..4 {
                    Card { key: "{slot}",
                        div { class: "flex items-center justify-between p-6",
                            div { class: "flex-1",
                                div { class: "mb-2 h-4 w-20 rounded bg-gray-200" }
                                div { class: "h-8 w-16 rounded bg-gray-200" }
                            }
                            div { class: "h-12 w-12 rounded-full bg-gray-100" }
                        }
                    }
                }
            }

            TitledCard { title: list_title,
                Table {
                    TableHeader {
                        TableRow {
                            TableHead { "ID" }
                            TableHead { "项目名称" }
                            TableHead { "状态" }
                            TableHead { "创建时间" }
                            TableHead { class: "text-right", "操作" }
                        }
                    }
                    TableBody {
                        tr {
                            td { colspan: "5", class: "py-12 text-center text-gray-500",
                                div { class: "flex flex-col items-center gap-3",
                                    div { class: "flex h-16 w-16 items-center justify-center rounded-full bg-gray-100 text-3xl", "🚧" }
                                    p { class: "font-semibold text-gray-900", "功能开发中" }
                                    p { class: "text-sm", "该功能模块正在开发中，敬请期待" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
