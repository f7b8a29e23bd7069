//! Site-wide configuration, edited locally and "saved" with a toast.

use dioxus::prelude::*;

use spanel_model::{
    AdvancedSettings, BasicSettings, EmailSettings, MailDriver, PaymentSettings, PaymentSystem,
    RegisterMode, RegisterSettings, SiteAnnouncement,
};

use crate::actions;
use crate::app::components::{
    use_toaster, Badge, BadgeVariant, PageHeader, Select, SelectOption, Switch, Tabs, TabsContent,
    TabsList, TabsTrigger, TitledCard, BUTTON_ADMIN, BUTTON_OUTLINE, BUTTON_SMALL_OUTLINE, INPUT,
    LABEL, TEXTAREA,
};
use crate::app::local_now;
use crate::format::format_full_datetime;
use crate::mock;
use crate::toast::ToastSink;

fn enum_options<T: Copy>(
    all: &[T],
    wire: fn(T) -> &'static str,
    label: fn(T) -> &'static str,
) -> Vec<SelectOption> {
    all.iter()
        .map(|v| SelectOption::new(wire(*v), label(*v)))
        .collect()
}

/// Flips publication of announcement `id`.
fn toggle_announcement(list: &mut [SiteAnnouncement], id: u64) {
    if let Some(a) = list.iter_mut().find(|a| a.id == id) {
        a.is_active = !a.is_active;
    }
}

fn next_announcement_id(list: &[SiteAnnouncement]) -> u64 {
    list.iter().map(|a| a.id).max().unwrap_or(0) + 1
}

#[component]
pub fn AdminSettings() -> Element {
    let toaster = use_toaster();
    let basic = use_signal(mock::admin::basic_settings);
    let register = use_signal(mock::admin::register_settings);
    let email = use_signal(mock::admin::email_settings);
    let payment = use_signal(mock::admin::payment_settings);
    let advanced = use_signal(mock::admin::advanced_settings);

    let on_save = move |_| {
        tracing::info!(
            basic = ?*basic.peek(),
            register = ?*register.peek(),
            email = ?*email.peek(),
            payment = ?*payment.peek(),
            advanced = ?*advanced.peek(),
            "Saving all settings"
        );
        toaster.success("设置已保存！");
    };

    rsx! {
        div { class: "space-y-6",
            PageHeader {
                title: "系统设置",
                subtitle: "管理系统配置与参数",
                actions: rsx! {
                    button { r#type: "button", class: "{BUTTON_ADMIN} shadow-lg", onclick: on_save,
                        "💾 保存所有设置"
                    }
                },
            }

            Tabs { default_value: "basic", class: "w-full",
                TabsList { class: "mb-6",
                    TabsTrigger { value: "basic", "🌐 站点设置" }
                    TabsTrigger { value: "register", "👥 注册访问" }
                    TabsTrigger { value: "email", "✉️ 邮件设置" }
                    TabsTrigger { value: "payment", "💳 支付设置" }
                    TabsTrigger { value: "announcement", "📢 公告管理" }
                    TabsTrigger { value: "advanced", "🛡 高级设置" }
                }
                TabsContent { value: "basic", BasicTab { settings: basic } }
                TabsContent { value: "register", RegisterTab { settings: register } }
                TabsContent { value: "email", EmailTab { settings: email } }
                TabsContent { value: "payment", PaymentTab { settings: payment } }
                TabsContent { value: "announcement", AnnouncementTab {} }
                TabsContent { value: "advanced", AdvancedTab { settings: advanced } }
            }
        }
    }
}

/// Labelled text input.
#[component]
fn Field(
    id: String,
    label: String,
    value: String,
    on_input: EventHandler<String>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] kind: String,
    #[props(default)] hint: String,
) -> Element {
    rsx! {
        div { class: "space-y-2",
            label { class: LABEL, r#for: "{id}", "{label}" }
            input {
                id: "{id}",
                class: INPUT,
                r#type: "{kind}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
            if !hint.is_empty() {
                p { class: "text-xs text-gray-500", "{hint}" }
            }
        }
    }
}

#[component]
fn ToggleRow(
    label: String,
    hint: String,
    checked: bool,
    on_change: EventHandler<bool>,
    #[props(default)] danger: bool,
    #[props(default = true)] divider: bool,
) -> Element {
    let tone = if danger { "text-red-600" } else { "text-gray-900" };
    let border = if divider { "border-b" } else { "" };
    rsx! {
        div { class: "flex items-center justify-between py-3 {border}",
            div { class: "flex-1",
                p { class: "text-base font-medium {tone}", "{label}" }
                p { class: "mt-1 text-sm text-gray-500", "{hint}" }
            }
            Switch { checked, on_change }
        }
    }
}

#[component]
fn BasicTab(settings: Signal<BasicSettings>) -> Element {
    let mut settings = settings;
    let current = settings();
    let [first, second, third] = current.admin_contacts.clone();
    rsx! {
        TitledCard { title: "站点基本信息", icon: "🌐",
            div { class: "space-y-6",
                Field {
                    id: "appName",
                    label: "站点名称",
                    value: current.app_name,
                    placeholder: "请输入站点名称",
                    on_input: move |v| settings.write().app_name = v,
                }
                Field {
                    id: "baseUrl",
                    label: "站点URL",
                    value: current.base_url,
                    placeholder: "https://example.com",
                    on_input: move |v| settings.write().base_url = v,
                }
                Field {
                    id: "subUrl",
                    label: "订阅URL",
                    value: current.sub_url,
                    placeholder: "https://example.com",
                    on_input: move |v| settings.write().sub_url = v,
                }
                Field {
                    id: "adminContact1",
                    label: "管理员联系方式 1",
                    value: first,
                    placeholder: "QQ：123456",
                    on_input: move |v| settings.write().admin_contacts[0] = v,
                }
                Field {
                    id: "adminContact2",
                    label: "管理员联系方式 2",
                    value: second,
                    placeholder: "TG群：https://t.me/xxx",
                    on_input: move |v| settings.write().admin_contacts[1] = v,
                }
                Field {
                    id: "adminContact3",
                    label: "管理员联系方式 3",
                    value: third,
                    placeholder: "邮箱：admin@example.com",
                    on_input: move |v| settings.write().admin_contacts[2] = v,
                }
            }
        }
    }
}

#[component]
fn RegisterTab(settings: Signal<RegisterSettings>) -> Element {
    let mut settings = settings;
    let current = settings();
    let mode = current.register_mode.as_str().to_string();
    rsx! {
        TitledCard { title: "注册与访问控制", icon: "👥",
            div { class: "space-y-6",
                div { class: "space-y-2",
                    label { class: LABEL, r#for: "register_mode", "注册模式" }
                    Select {
                        id: "register_mode",
                        value: mode,
                        options: enum_options(RegisterMode::ALL, RegisterMode::as_str, RegisterMode::label),
                        on_change: move |v: String| settings.write().register_mode = RegisterMode::from(v.as_str()),
                    }
                    p { class: "text-xs text-gray-500", "选择开放注册、仅限邀请码或关闭注册" }
                }
                ToggleRow {
                    label: "启用邮箱验证",
                    hint: "新用户注册后必须验证邮箱才能使用服务",
                    checked: current.enable_email_verify,
                    on_change: move |on| settings.write().enable_email_verify = on,
                }
                Field {
                    id: "defaultTraffic",
                    label: "初始流量 (GB)",
                    kind: "number",
                    value: "{current.default_traffic}",
                    on_input: move |v: String| {
                        if let Ok(gb) = v.parse() {
                            settings.write().default_traffic = gb;
                        }
                    },
                }
                Field {
                    id: "user_class_default",
                    label: "初始等级",
                    kind: "number",
                    value: "{current.user_class_default}",
                    on_input: move |v: String| {
                        if let Ok(level) = v.parse() {
                            settings.write().user_class_default = level;
                        }
                    },
                }
                Field {
                    id: "user_money_default",
                    label: "初始余额",
                    kind: "number",
                    value: "{current.user_money_default}",
                    on_input: move |v: String| {
                        if let Ok(money) = v.parse() {
                            settings.write().user_money_default = money;
                        }
                    },
                }
                Field {
                    id: "user_expire_in_default",
                    label: "账户过期时间 (天)",
                    kind: "number",
                    value: "{current.user_expire_in_default}",
                    on_input: move |v: String| {
                        if let Ok(days) = v.parse() {
                            settings.write().user_expire_in_default = days;
                        }
                    },
                }
                Field {
                    id: "user_class_expire_default",
                    label: "等级过期时间 (小时)",
                    kind: "number",
                    value: "{current.user_class_expire_default}",
                    on_input: move |v: String| {
                        if let Ok(hours) = v.parse() {
                            settings.write().user_class_expire_default = hours;
                        }
                    },
                }
                Field {
                    id: "random_group",
                    label: "随机分组 (逗号分隔)",
                    value: current.random_group,
                    placeholder: "1,2,3,4",
                    on_input: move |v| settings.write().random_group = v,
                }
            }
        }
        TitledCard { title: "邀请设置", icon: "🎁", class: "mt-6",
            div { class: "space-y-6",
                Field {
                    id: "invite_get_money",
                    label: "被邀请人奖励金额",
                    kind: "number",
                    value: "{current.invite_get_money}",
                    on_input: move |v: String| {
                        if let Ok(money) = v.parse() {
                            settings.write().invite_get_money = money;
                        }
                    },
                }
                Field {
                    id: "invite_gift_money",
                    label: "邀请人奖励金额",
                    kind: "number",
                    value: "{current.invite_gift_money}",
                    on_input: move |v: String| {
                        if let Ok(money) = v.parse() {
                            settings.write().invite_gift_money = money;
                        }
                    },
                }
                Field {
                    id: "invite_price",
                    label: "邀请码价格 (<0 为不开放)",
                    kind: "number",
                    value: "{current.invite_price}",
                    on_input: move |v: String| {
                        if let Ok(price) = v.parse() {
                            settings.write().invite_price = price;
                        }
                    },
                }
                Field {
                    id: "custom_invite_price",
                    label: "定制邀请码价格",
                    kind: "number",
                    value: "{current.custom_invite_price}",
                    on_input: move |v: String| {
                        if let Ok(price) = v.parse() {
                            settings.write().custom_invite_price = price;
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn EmailTab(settings: Signal<EmailSettings>) -> Element {
    let mut settings = settings;
    let current = settings();
    let driver = current.mail_driver.as_str().to_string();
    rsx! {
        TitledCard { title: "SMTP 邮件服务配置", icon: "✉️",
            div { class: "space-y-6",
                div { class: "space-y-2",
                    label { class: LABEL, r#for: "mailDriver", "邮件驱动" }
                    Select {
                        id: "mailDriver",
                        value: driver,
                        options: enum_options(MailDriver::ALL, MailDriver::as_str, MailDriver::label),
                        on_change: move |v: String| settings.write().mail_driver = MailDriver::from(v.as_str()),
                    }
                }
                Field {
                    id: "smtp_host",
                    label: "SMTP 服务器",
                    value: current.smtp_host,
                    placeholder: "smtp.mailgun.org",
                    on_input: move |v| settings.write().smtp_host = v,
                }
                Field {
                    id: "smtp_port",
                    label: "SMTP 端口",
                    value: current.smtp_port,
                    placeholder: "465",
                    on_input: move |v| settings.write().smtp_port = v,
                }
                Field {
                    id: "smtp_username",
                    label: "SMTP 用户名",
                    value: current.smtp_username,
                    placeholder: "postmaster@example.com",
                    on_input: move |v| settings.write().smtp_username = v,
                }
                Field {
                    id: "smtp_password",
                    label: "SMTP 密码",
                    kind: "password",
                    value: current.smtp_password,
                    placeholder: "••••••••",
                    on_input: move |v| settings.write().smtp_password = v,
                }
                Field {
                    id: "smtp_sender",
                    label: "发件人地址",
                    value: current.smtp_sender,
                    placeholder: "noreply@example.com",
                    on_input: move |v| settings.write().smtp_sender = v,
                }
                ToggleRow {
                    label: "启用 SSL/TLS",
                    hint: "使用加密连接发送邮件",
                    checked: current.smtp_ssl,
                    divider: false,
                    on_change: move |on| settings.write().smtp_ssl = on,
                }
            }
        }
    }
}

#[component]
fn PaymentTab(settings: Signal<PaymentSettings>) -> Element {
    let mut settings = settings;
    let current = settings();
    let system = current.payment_system;
    let system_value = system.as_str().to_string();
    rsx! {
        TitledCard { title: "支付网关配置", icon: "💳",
            div { class: "space-y-6",
                div { class: "space-y-2",
                    label { class: LABEL, r#for: "payment_system", "支付系统" }
                    Select {
                        id: "payment_system",
                        value: system_value,
                        options: enum_options(PaymentSystem::ALL, PaymentSystem::as_str, PaymentSystem::label),
                        on_change: move |v: String| settings.write().payment_system = PaymentSystem::from(v.as_str()),
                    }
                }
                div { class: "rounded-lg border border-yellow-200 bg-yellow-50 p-4",
                    p { class: "text-sm text-yellow-800",
                        "⚠️ 注意：请确保在下方填写正确的支付网关密钥信息，错误的配置将导致用户无法充值。"
                    }
                }
                if system == PaymentSystem::F2fpay {
                    Field {
                        id: "f2fpay_app_id",
                        label: "应用ID",
                        value: current.f2fpay_app_id,
                        on_input: move |v| settings.write().f2fpay_app_id = v,
                    }
                    Field {
                        id: "f2fpay_p_id",
                        label: "PID",
                        value: current.f2fpay_p_id,
                        on_input: move |v| settings.write().f2fpay_p_id = v,
                    }
                    div { class: "space-y-2",
                        label { class: LABEL, r#for: "alipay_public_key", "支付宝公钥" }
                        textarea {
                            id: "alipay_public_key",
                            class: "{TEXTAREA} font-mono",
                            value: "{current.alipay_public_key}",
                            oninput: move |e| settings.write().alipay_public_key = e.value(),
                        }
                    }
                    div { class: "space-y-2",
                        label { class: LABEL, r#for: "merchant_private_key", "商户私钥" }
                        textarea {
                            id: "merchant_private_key",
                            class: "{TEXTAREA} font-mono",
                            value: "{current.merchant_private_key}",
                            oninput: move |e| settings.write().merchant_private_key = e.value(),
                        }
                    }
                }
                if system == PaymentSystem::Codepay {
                    Field {
                        id: "codepay_id",
                        label: "码支付ID",
                        value: current.codepay_id,
                        on_input: move |v| settings.write().codepay_id = v,
                    }
                    Field {
                        id: "codepay_key",
                        label: "码支付密钥",
                        kind: "password",
                        value: current.codepay_key,
                        on_input: move |v| settings.write().codepay_key = v,
                    }
                }
                Field {
                    id: "amount",
                    label: "充值金额选项 (逗号分隔)",
                    value: current.amount,
                    placeholder: "2,23,233,2333",
                    hint: "用户可选择的充值金额",
                    on_input: move |v| settings.write().amount = v,
                }
            }
        }
    }
}

#[component]
fn AnnouncementTab() -> Element {
    let toaster = use_toaster();
    let mut announcements = use_signal(mock::admin::site_announcements);
    let mut composing = use_signal(|| false);
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);

    let mut reset_form = move || {
        composing.set(false);
        title.set(String::new());
        content.set(String::new());
    };

    let on_publish = move |_| {
        let id = next_announcement_id(&announcements.read());
        let created = actions::add_site_announcement(
            &toaster,
            &title.read(),
            &content.read(),
            id,
            local_now(),
        );
        if let Some(announcement) = created {
            announcements.write().insert(0, announcement);
            reset_form();
        }
    };

    rsx! {
        TitledCard { title: "公告管理", icon: "📢",
            div { class: "space-y-4",
                div { class: "flex justify-end",
                    button {
                        r#type: "button",
                        class: BUTTON_ADMIN,
                        onclick: move |_| composing.toggle(),
                        "＋ 新增公告"
                    }
                }
                if composing() {
                    div { class: "space-y-4 rounded-lg border-2 border-red-200 bg-red-50 p-6",
                        h3 { class: "font-semibold text-red-900", "发布新公告" }
                        div { class: "space-y-2",
                            label { class: LABEL, r#for: "newTitle", "公告标题" }
                            input {
                                id: "newTitle",
                                class: "{INPUT} bg-white",
                                placeholder: "请输入公告标题...",
                                value: "{title}",
                                oninput: move |e| title.set(e.value()),
                            }
                        }
                        div { class: "space-y-2",
                            label { class: LABEL, r#for: "newContent", "公告内容" }
                            textarea {
                                id: "newContent",
                                class: "{TEXTAREA} resize-none bg-white",
                                rows: "4",
                                placeholder: "请输入公告内容...",
                                value: "{content}",
                                oninput: move |e| content.set(e.value()),
                            }
                        }
                        div { class: "flex gap-3",
                            button { r#type: "button", class: BUTTON_ADMIN, onclick: on_publish, "发布公告" }
                            button {
                                r#type: "button",
                                class: BUTTON_OUTLINE,
                                onclick: move |_| reset_form(),
                                "取消"
                            }
                        }
                    }
                }
                div { class: "space-y-3",
                    if announcements.read().is_empty() {
                        div { class: "py-12 text-center text-gray-500", "暂无公告" }
                    }
                    for announcement in announcements() {
                        SiteAnnouncementCard {
                            key: "{announcement.id}",
                            announcement,
                            on_toggle: move |id| toggle_announcement(&mut announcements.write(), id),
                            on_delete: move |id| {
                                announcements.write().retain(|a: &SiteAnnouncement| a.id != id);
                                tracing::debug!(id, "Site announcement deleted");
                            },
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SiteAnnouncementCard(
    announcement: SiteAnnouncement,
    on_toggle: EventHandler<u64>,
    on_delete: EventHandler<u64>,
) -> Element {
    let toaster = use_toaster();
    let id = announcement.id;
    let surface = if announcement.is_active {
        "border-gray-200 bg-white shadow-sm"
    } else {
        "border-gray-200 bg-gray-50 opacity-75"
    };
    let toggle_label = if announcement.is_active { "下架" } else { "发布" };
    let created = format_full_datetime(&announcement.created_at);
    rsx! {
        div { class: "rounded-lg border p-5 transition-all {surface}",
            div { class: "flex items-start justify-between gap-4",
                div { class: "flex-1 space-y-3",
                    div { class: "flex items-center gap-3",
                        h3 { class: "text-lg font-semibold text-gray-900", "{announcement.title}" }
                        if announcement.is_active {
                            Badge { variant: BadgeVariant::Success, class: "gap-1", "已发布" }
                        } else {
                            Badge { variant: BadgeVariant::Secondary, "草稿" }
                        }
                    }
                    p { class: "leading-relaxed text-gray-700", "{announcement.content}" }
                    p { class: "text-sm text-gray-500", "创建时间: {created}" }
                }
                div { class: "flex items-center gap-2",
                    button {
                        r#type: "button",
                        class: BUTTON_SMALL_OUTLINE,
                        onclick: move |_| on_toggle.call(id),
                        "{toggle_label}"
                    }
                    button {
                        r#type: "button",
                        class: "h-8 w-8 rounded-md text-gray-600 hover:bg-gray-100",
                        onclick: move |_| toaster.info("公告编辑功能开发中"),
                        "✏️"
                    }
                    button {
                        r#type: "button",
                        class: "h-8 w-8 rounded-md text-red-600 hover:bg-red-50",
                        onclick: move |_| on_delete.call(id),
                        "🗑"
                    }
                }
            }
        }
    }
}

#[component]
fn AdvancedTab(settings: Signal<AdvancedSettings>) -> Element {
    let mut settings = settings;
    let current = settings();
    rsx! {
        TitledCard { title: "高级系统设置", icon: "🛡",
            div { class: "space-y-6",
                div { class: "rounded-lg border border-red-200 bg-red-50 p-4",
                    p { class: "text-sm font-medium text-red-800",
                        "⚠️ 危险区域：以下设置涉及系统核心功能，请谨慎修改！"
                    }
                }
                ToggleRow {
                    label: "维护模式",
                    hint: "开启后除管理员外所有用户无法访问系统",
                    danger: true,
                    checked: current.maintenance_mode,
                    on_change: move |on| settings.write().maintenance_mode = on,
                }
                ToggleRow {
                    label: "启用用户注销",
                    hint: "允许用户主动注销账户",
                    checked: current.enable_account_deletion,
                    on_change: move |on| settings.write().enable_account_deletion = on,
                }
                ToggleRow {
                    label: "购买时重置流量",
                    hint: "用户购买套餐后是否自动重置已用流量",
                    checked: current.reset_traffic_on_purchase,
                    on_change: move |on| settings.write().reset_traffic_on_purchase = on,
                }
                ToggleRow {
                    label: "显示捐赠",
                    hint: "在前台显示捐赠信息",
                    checked: current.show_donate,
                    on_change: move |on| settings.write().show_donate = on,
                }
                ToggleRow {
                    label: "启用工单系统",
                    hint: "允许用户提交工单",
                    checked: current.enable_tickets,
                    divider: false,
                    on_change: move |on| settings.write().enable_tickets = on,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_options_use_wire_values() {
        let options = enum_options(PaymentSystem::ALL, PaymentSystem::as_str, PaymentSystem::label);
        assert_eq!(options.len(), 6);
        assert_eq!(options[2], SelectOption::new("f2fpay", "支付宝F2F"));
        let modes = enum_options(RegisterMode::ALL, RegisterMode::as_str, RegisterMode::label);
        assert_eq!(modes[1].label, "仅限邀请码");
    }

    #[test]
    fn test_toggle_announcement_round_trip() {
        let mut list = mock::admin::site_announcements();
        toggle_announcement(&mut list, 2);
        assert!(!list[1].is_active);
        toggle_announcement(&mut list, 2);
        assert_eq!(list, mock::admin::site_announcements());
        assert_eq!(next_announcement_id(&list), 3);
        assert_eq!(next_announcement_id(&[]), 1);
    }
}
