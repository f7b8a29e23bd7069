//! Personal settings: password, connection details and notifications.

use dioxus::prelude::*;

use spanel_model::NotificationPrefs;

use crate::actions;
use crate::app::clipboard::copy_text;
use crate::app::components::{
    use_toaster, Badge, BadgeVariant, Card, ConfirmDialog, PageHeader, Switch, TitledCard,
    BUTTON_OUTLINE, BUTTON_USER, INPUT, LABEL,
};
use crate::app::panel;
use crate::mock;
use crate::toast::ToastSink;

const SECURITY_TIPS: &[&str] = &[
    "定期修改密码，避免使用简单密码",
    "不要与他人分享您的订阅链接",
    "发现异常登录请立即重置订阅",
];

#[component]
pub fn Settings() -> Element {
    let toaster = use_toaster();
    let profile = use_signal(mock::user::profile);
    let mut uuid = use_signal(|| profile.peek().uuid.clone());

    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut show_password = use_signal(|| false);
    let mut changing_password = use_signal(|| false);

    let mut confirm_reset = use_signal(|| false);
    let mut resetting = use_signal(|| false);

    let mut prefs = use_signal(mock::user::notification_prefs);
    let mut saving = use_signal(|| false);

    let mut clear_passwords = move || {
        current_password.set(String::new());
        new_password.set(String::new());
        confirm_password.set(String::new());
    };

    let on_change_password = move |e: FormEvent| {
        e.prevent_default();
        let panel = panel();
        let (current, new, confirm) = (current_password(), new_password(), confirm_password());
        spawn(async move {
            changing_password.set(true);
            if actions::change_password(&*panel, &toaster, &current, &new, &confirm).await {
                clear_passwords();
            }
            changing_password.set(false);
        });
    };

    let on_reset = move |_| {
        confirm_reset.set(false);
        let panel = panel();
        spawn(async move {
            resetting.set(true);
            if let Some(fresh) = actions::reset_subscription(&*panel, &toaster).await {
                uuid.set(fresh);
            }
            resetting.set(false);
        });
    };

    let on_save = move |_| {
        let panel = panel();
        let snapshot: NotificationPrefs = prefs();
        spawn(async move {
            saving.set(true);
            actions::save_notifications(&*panel, &toaster, &snapshot).await;
            saving.set(false);
        });
    };

    let input_type = if show_password() { "text" } else { "password" };
    let p = profile.read();
    let subscription = p.subscription_url.clone();
    let current_uuid = uuid();
    let vip = format!("VIP {}", p.class);
    let NotificationPrefs {
        telegram_id,
        email_notify,
        tg_notify,
        daily_report,
    } = prefs();

    rsx! {
        div { class: "space-y-6",
            PageHeader { title: "个人设定", subtitle: "管理您的账户安全、连接和通知偏好" }

            div { class: "grid grid-cols-1 gap-6 lg:grid-cols-3",
                div { class: "space-y-6 lg:col-span-2",
                    TitledCard { title: "安全设置", icon: "🛡️",
                        form { class: "space-y-4", onsubmit: on_change_password,
                            div { class: "space-y-2",
                                label { class: LABEL, r#for: "current-password", "当前密码" }
                                div { class: "relative",
                                    input {
                                        id: "current-password",
                                        class: "{INPUT} pr-10",
                                        r#type: input_type,
                                        placeholder: "请输入当前密码",
                                        value: "{current_password}",
                                        oninput: move |e| current_password.set(e.value()),
                                    }
                                    button {
                                        r#type: "button",
                                        class: "absolute right-3 top-1/2 -translate-y-1/2 text-gray-400 hover:text-gray-600",
                                        onclick: move |_| show_password.toggle(),
                                        if show_password() { "🙈" } else { "👁" }
                                    }
                                }
                            }
                            div { class: "space-y-2",
                                label { class: LABEL, r#for: "new-password", "新密码" }
                                input {
                                    id: "new-password",
                                    class: INPUT,
                                    r#type: input_type,
                                    placeholder: "请输入新密码（至少 8 位）",
                                    value: "{new_password}",
                                    oninput: move |e| new_password.set(e.value()),
                                }
                            }
                            div { class: "space-y-2",
                                label { class: LABEL, r#for: "confirm-password", "确认新密码" }
                                input {
                                    id: "confirm-password",
                                    class: INPUT,
                                    r#type: input_type,
                                    placeholder: "请再次输入新密码",
                                    value: "{confirm_password}",
                                    oninput: move |e| confirm_password.set(e.value()),
                                }
                            }
                            div { class: "flex gap-3 pt-2",
                                button { r#type: "submit", class: BUTTON_USER, disabled: changing_password(),
                                    if changing_password() { "处理中..." } else { "🔑 修改密码" }
                                }
                                button {
                                    r#type: "button",
                                    class: BUTTON_OUTLINE,
                                    onclick: move |_| clear_passwords(),
                                    "重置"
                                }
                            }
                        }
                    }

                    TitledCard { title: "连接设置", icon: "🔗",
                        div { class: "space-y-4",
                            CopyField {
                                label: "UUID",
                                value: current_uuid.clone(),
                                on_copy: move |_| {
                                    copy_text(&uuid.read());
                                    toaster.success("UUID 已复制");
                                },
                            }
                            div { class: "grid grid-cols-1 gap-4 sm:grid-cols-3",
                                ReadOnlyField { label: "加密方式", value: p.method.clone() }
                                ReadOnlyField { label: "传输协议", value: p.protocol.clone() }
                                ReadOnlyField { label: "混淆方式", value: p.obfs.clone() }
                            }
                            CopyField {
                                label: "订阅链接",
                                value: subscription.clone(),
                                on_copy: move |_| {
                                    copy_text(&subscription);
                                    toaster.success("订阅链接已复制");
                                },
                            }
                            div { class: "border-t pt-4",
                                button {
                                    r#type: "button",
                                    class: "inline-flex items-center gap-2 rounded-md bg-red-600 px-4 py-2 text-sm font-medium text-white hover:bg-red-700 disabled:opacity-50",
                                    disabled: resetting(),
                                    onclick: move |_| confirm_reset.set(true),
                                    if resetting() { "重置中..." } else { "🔄 重置订阅链接" }
                                }
                                p { class: "mt-2 text-xs text-gray-500", "重置后将生成新的 UUID，所有设备需要更新订阅配置" }
                            }
                        }
                    }

                    TitledCard { title: "通知设置", icon: "🔔",
                        div { class: "space-y-6",
                            div { class: "space-y-2",
                                label { class: LABEL, r#for: "telegram-id", "Telegram ID" }
                                div { class: "flex gap-2",
                                    input {
                                        id: "telegram-id",
                                        class: INPUT,
                                        placeholder: "输入您的 Telegram ID（例如：@username）",
                                        value: "{telegram_id}",
                                        oninput: move |e| prefs.write().telegram_id = e.value(),
                                    }
                                    button { r#type: "button", class: BUTTON_OUTLINE, "绑定" }
                                }
                                p { class: "text-xs text-gray-500", "绑定后可接收 Telegram 通知，需要在 Telegram 中关注 @yourbot" }
                            }
                            div { class: "space-y-4 border-t pt-4",
                                ToggleRow {
                                    title: "邮件通知",
                                    hint: "接收账户变动和系统公告邮件",
                                    checked: email_notify,
                                    on_change: move |v| prefs.write().email_notify = v,
                                }
                                ToggleRow {
                                    title: "Telegram 通知",
                                    hint: "通过 Telegram 接收实时通知",
                                    checked: tg_notify,
                                    on_change: move |v| prefs.write().tg_notify = v,
                                }
                                ToggleRow {
                                    title: "每日报告",
                                    hint: "每日发送流量使用报告",
                                    checked: daily_report,
                                    on_change: move |v| prefs.write().daily_report = v,
                                }
                            }
                            div { class: "flex justify-end",
                                button { r#type: "button", class: BUTTON_USER, disabled: saving(), onclick: on_save,
                                    if saving() { "保存中..." } else { "💾 保存设置" }
                                }
                            }
                        }
                    }
                }

                div { class: "space-y-6",
                    TitledCard { title: "账户信息", icon: "👤",
                        div { class: "space-y-3 text-sm",
                            InfoLine { label: "邮箱", value: p.email.clone() }
                            InfoLine { label: "等级", value: vip }
                            InfoLine { label: "账号过期", value: p.account_expire.clone() }
                            div { class: "flex items-center justify-between",
                                span { class: "text-gray-600", "状态" }
                                Badge { variant: BadgeVariant::Success, "账户正常" }
                            }
                        }
                    }
                    Card { class: "border-orange-200 bg-orange-50",
                        div { class: "p-6",
                            h3 { class: "mb-3 flex items-center gap-2 font-semibold text-orange-900", "⚠️ 安全建议" }
                            ul { class: "list-inside list-disc space-y-1 text-sm text-orange-800",
                                for tip in SECURITY_TIPS {
                                    li { "{tip}" }
                                }
                            }
                        }
                    }
                }
            }

            ConfirmDialog {
                open: confirm_reset(),
                title: "重置订阅链接",
                message: "确定要重置订阅链接吗？\n重置后所有设备需要重新导入订阅。",
                confirm_label: "确认重置",
                destructive: true,
                on_confirm: on_reset,
                on_cancel: move |_| confirm_reset.set(false),
            }
        }
    }
}

#[component]
fn CopyField(label: String, value: String, on_copy: EventHandler<()>) -> Element {
    rsx! {
        div { class: "space-y-2",
            label { class: LABEL, "{label}" }
            div { class: "flex gap-2",
                input { class: "{INPUT} font-mono text-xs", readonly: true, value: "{value}" }
                button { r#type: "button", class: BUTTON_OUTLINE, onclick: move |_| on_copy.call(()), "📋" }
            }
        }
    }
}

#[component]
fn ReadOnlyField(label: String, value: String) -> Element {
    rsx! {
        div { class: "space-y-2",
            label { class: LABEL, "{label}" }
            input { class: "{INPUT} bg-gray-50", readonly: true, value: "{value}" }
        }
    }
}

#[component]
fn ToggleRow(title: String, hint: String, checked: bool, on_change: EventHandler<bool>) -> Element {
    rsx! {
        div { class: "flex items-center justify-between",
            div {
                p { class: "font-medium text-gray-900", "{title}" }
                p { class: "text-sm text-gray-500", "{hint}" }
            }
            Switch { checked, on_change }
        }
    }
}

#[component]
fn InfoLine(label: String, value: String) -> Element {
    rsx! {
        div { class: "flex items-center justify-between",
            span { class: "text-gray-600", "{label}" }
            span { class: "font-medium text-gray-900", "{value}" }
        }
    }
}
