use dioxus::prelude::*;

use super::{AuthShell, IconInput, OrHome, LINK, SUBMIT};
use crate::app::components::{use_toaster, LABEL};
use crate::app::Route;
use crate::toast::ToastSink;

#[component]
pub fn Login() -> Element {
    let toaster = use_toaster();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut remember_me = use_signal(|| false);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        tracing::debug!(email = %*email.peek(), remember_me = *remember_me.peek(), "Login attempt");
        toaster.info("登录功能正在开发中，请稍后再试");
    };

    rsx! {
        AuthShell {
            tagline: "欢迎回来",
            footer: rsx! {
                div { class: "mt-8 text-center text-sm text-gray-500",
                    p { "登录即代表您同意我们的" }
                    div { class: "mt-1 flex justify-center gap-2",
                        a { href: "#", class: "text-primary-admin hover:underline", "服务条款" }
                        span { "和" }
                        a { href: "#", class: "text-primary-admin hover:underline", "隐私政策" }
                    }
                }
            },
            div { class: "mb-6 flex items-center justify-between",
                h2 { class: "text-2xl font-bold text-gray-900", "登录" }
                Link { to: Route::Register {}, class: LINK, "注册账号" }
            }
            form { class: "space-y-6", onsubmit: on_submit,
                div { class: "space-y-2",
                    label { class: LABEL, r#for: "email", "邮箱" }
                    IconInput {
                        id: "email",
                        icon: "✉️",
                        kind: "email",
                        placeholder: "your@email.com",
                        value: email(),
                        on_input: move |v| email.set(v),
                    }
                }
                div { class: "space-y-2",
                    label { class: LABEL, r#for: "password", "密码" }
                    IconInput {
                        id: "password",
                        icon: "🔒",
                        kind: "password",
                        placeholder: "••••••••",
                        value: password(),
                        on_input: move |v| password.set(v),
                    }
                }
                div { class: "flex items-center justify-between",
                    label { class: "flex cursor-pointer items-center gap-2",
                        input {
                            r#type: "checkbox",
                            class: "h-4 w-4 rounded border-gray-300 text-red-600",
                            checked: remember_me(),
                            onchange: move |e| remember_me.set(e.checked()),
                        }
                        span { class: "text-sm text-gray-600", "记住我" }
                    }
                    Link { to: Route::PasswordReset {}, class: LINK, "忘记密码？" }
                }
                button { r#type: "submit", class: SUBMIT, "确认登录 →" }
            }
            OrHome {}
        }
    }
}
