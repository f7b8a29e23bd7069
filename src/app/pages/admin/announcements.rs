//! Markdown announcements list.

use dioxus::prelude::*;

use spanel_model::MarkdownAnnouncement;

use super::Notice;
use crate::app::components::{
    use_toaster, Card, ConfirmDialog, EmptyRow, PageHeader, Table, TableBody, TableCell, TableHead,
    TableHeader, TableRow, BUTTON_ADMIN, BUTTON_SMALL_OUTLINE,
};
use crate::format::{markdown_title, preview};
use crate::mock;
use crate::toast::ToastSink;

#[component]
pub fn AdminAnnouncements() -> Element {
    let toaster = use_toaster();
    let mut announcements = use_signal(mock::admin::markdown_announcements);
    let mut pending_delete = use_signal(|| None::<(u32, String)>);

    let on_confirm = move |_| {
        if let Some((id, title)) = pending_delete.take() {
            announcements.write().retain(|a| a.id != id);
            tracing::debug!(id, "Announcement deleted");
            toaster.success(&format!("公告「{title}」已删除"));
        }
    };

    let message = pending_delete
        .read()
        .as_ref()
        .map(|(_, title)| format!("确定要删除公告「{title}」吗？"))
        .unwrap_or_default();

    rsx! {
        div { class: "space-y-6",
            PageHeader {
                title: "公告管理",
                subtitle: "管理系统公告与通知推送",
                actions: rsx! {
                    button {
                        r#type: "button",
                        class: BUTTON_ADMIN,
                        onclick: move |_| toaster.info("请在「系统设置 → 公告管理」中发布新公告"),
                        "＋ 发布公告"
                    }
                },
            }

            Notice { tint: "orange", icon: "📣", text: "系统中所有公告列表" }

            Card { class: "overflow-hidden",
                Table {
                    TableHeader {
                        TableRow {
                            TableHead { "操作" }
                            TableHead { "ID" }
                            TableHead { "日期" }
                            TableHead { "内容" }
                        }
                    }
                    TableBody {
                        if announcements.read().is_empty() {
                            EmptyRow { columns: 4, message: "暂无公告" }
                        }
                        for announcement in announcements() {
                            AnnouncementRow {
                                key: "{announcement.id}",
                                announcement,
                                on_delete: move |target| pending_delete.set(Some(target)),
                            }
                        }
                    }
                }
            }

            ConfirmDialog {
                open: pending_delete.read().is_some(),
                title: "删除公告",
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
fn AnnouncementRow(
    announcement: MarkdownAnnouncement,
    on_delete: EventHandler<(u32, String)>,
) -> Element {
    let title = markdown_title(&announcement.markdown);
    let excerpt = preview(&announcement.markdown, 100);
    let id = announcement.id;
    let target = title.clone();
    rsx! {
        TableRow {
            TableCell {
                div { class: "flex gap-2",
                    button { r#type: "button", class: BUTTON_SMALL_OUTLINE, "✏️ 编辑" }
                    button {
                        r#type: "button",
                        class: "{BUTTON_SMALL_OUTLINE} text-red-600 hover:bg-red-50 hover:text-red-700",
                        onclick: move |_| on_delete.call((id, target.clone())),
                        "🗑 删除"
                    }
                }
            }
            TableCell { "{id}" }
            TableCell { class: "text-sm text-gray-600", "{announcement.date}" }
            TableCell {
                div { class: "max-w-md",
                    p { class: "mb-1 font-medium text-gray-900", "{title}" }
                    p { class: "line-clamp-2 text-sm text-gray-500", "{excerpt}" }
                }
            }
        }
    }
}
