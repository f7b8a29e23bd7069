use std::collections::BTreeMap;

use dioxus::prelude::*;

use super::{AuthShell, IconInput, OrHome, LINK, SUBMIT};
use crate::app::components::{use_toaster, INPUT, LABEL};
use crate::app::Route;
use crate::forms::{RegisterError, RegisterField, RegisterForm};
use crate::toast::ToastSink;

/// First message per field, ready for inline display.
fn field_errors(errors: &[RegisterError]) -> BTreeMap<RegisterField, String> {
    let mut by_field = BTreeMap::new();
    for err in errors {
        by_field.entry(err.field()).or_insert_with(|| err.to_string());
    }
    by_field
}

#[component]
fn FieldError(errors: BTreeMap<RegisterField, String>, field: RegisterField) -> Element {
    match errors.get(&field) {
        Some(message) => rsx! { p { class: "text-sm text-red-600", "{message}" } },
        None => rsx! {},
    }
}

#[component]
pub fn Register() -> Element {
    let toaster = use_toaster();
    let mut form = use_signal(RegisterForm::default);
    let mut errors = use_signal(BTreeMap::<RegisterField, String>::new);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let failures = form.peek().validate();
        errors.set(field_errors(&failures));
        if failures.is_empty() {
            tracing::debug!(email = %form.peek().email, "Register attempt");
            toaster.info("注册功能正在开发中，请稍后再试");
        }
    };

    let current = form();
    let shown = errors();

    rsx! {
        AuthShell {
            tagline: "创建新账号",
            footer: rsx! {
                div { class: "mt-6 rounded-lg border border-blue-200 bg-blue-50 p-4",
                    p { class: "text-center text-sm text-blue-800",
                        "新用户注册即可获得 "
                        span { class: "font-bold", "免费流量" }
                        " 体验"
                    }
                }
            },
            div { class: "mb-6 flex items-center justify-between",
                h2 { class: "text-2xl font-bold text-gray-900", "注册" }
                Link { to: Route::Login {}, class: LINK, "已有账号？登录" }
            }
            form { class: "space-y-5", onsubmit: on_submit,
                div { class: "space-y-2",
                    label { class: LABEL, r#for: "name", "昵称" }
                    IconInput {
                        id: "name",
                        icon: "👤",
                        kind: "text",
                        placeholder: "请输入昵称",
                        value: current.name,
                        on_input: move |v| form.write().name = v,
                    }
                    FieldError { errors: shown.clone(), field: RegisterField::Name }
                }
                div { class: "space-y-2",
                    label { class: LABEL, r#for: "email", "邮箱" }
                    IconInput {
                        id: "email",
                        icon: "✉️",
                        kind: "email",
                        placeholder: "your@email.com",
                        value: current.email,
                        on_input: move |v| form.write().email = v,
                    }
                    FieldError { errors: shown.clone(), field: RegisterField::Email }
                }
                div { class: "space-y-2",
                    label { class: LABEL, r#for: "password", "密码" }
                    IconInput {
                        id: "password",
                        icon: "🔒",
                        kind: "password",
                        placeholder: "至少8位字符",
                        value: current.password,
                        on_input: move |v| form.write().password = v,
                    }
                    FieldError { errors: shown.clone(), field: RegisterField::Password }
                }
                div { class: "space-y-2",
                    label { class: LABEL, r#for: "confirmPassword", "确认密码" }
                    IconInput {
                        id: "confirmPassword",
                        icon: "🔒",
                        kind: "password",
                        placeholder: "再次输入密码",
                        value: current.confirm_password,
                        on_input: move |v| form.write().confirm_password = v,
                    }
                    FieldError { errors: shown.clone(), field: RegisterField::ConfirmPassword }
                }
                div { class: "space-y-2",
                    label { class: LABEL, r#for: "inviteCode",
                        "邀请码 "
                        span { class: "font-normal text-gray-500", "(可选)" }
                    }
                    input {
                        id: "inviteCode",
                        class: INPUT,
                        placeholder: "如有邀请码请输入",
                        value: "{current.invite_code}",
                        oninput: move |e| form.write().invite_code = e.value(),
                    }
                }
                div { class: "space-y-2",
                    label { class: "flex cursor-pointer items-start gap-2",
                        input {
                            r#type: "checkbox",
                            class: "mt-1 h-4 w-4 rounded border-gray-300 text-red-600",
                            checked: current.agreed_to_terms,
                            onchange: move |e| form.write().agreed_to_terms = e.checked(),
                        }
                        span { class: "text-sm text-gray-600",
                            "我已阅读并同意"
                            a { href: "#", class: "mx-1 text-primary-admin hover:underline", "服务条款" }
                            "和"
                            a { href: "#", class: "mx-1 text-primary-admin hover:underline", "隐私政策" }
                        }
                    }
                    FieldError { errors: shown, field: RegisterField::Terms }
                }
                button { r#type: "submit", class: SUBMIT, "确认注册 →" }
            }
            OrHome {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_one_message_per_field() {
        let form = RegisterForm {
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            ..Default::default()
        };
        let errors = field_errors(&form.validate());
        let message = |field: RegisterField| errors.get(&field).map(String::as_str);
        assert_eq!(message(RegisterField::Email), Some("请输入有效的邮箱地址"));
        assert_eq!(message(RegisterField::Password), Some("密码长度至少8位"));
        assert_eq!(message(RegisterField::ConfirmPassword), Some("两次密码输入不一致"));
        assert!(errors.contains_key(&RegisterField::Name));
        assert!(errors.contains_key(&RegisterField::Terms));
    }

    #[test]
    fn test_valid_form_has_no_field_errors() {
        let form = RegisterForm {
            name: "sam".to_string(),
            email: "sam@example.com".to_string(),
            password: "12345678".to_string(),
            confirm_password: "12345678".to_string(),
            invite_code: String::new(),
            agreed_to_terms: true,
        };
        assert!(field_errors(&form.validate()).is_empty());
    }
}
