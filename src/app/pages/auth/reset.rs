use dioxus::prelude::*;

use super::{AuthShell, IconInput, LINK, SUBMIT};
use crate::actions;
use crate::app::components::{use_toaster, LABEL};
use crate::app::{panel, Route};

#[component]
pub fn PasswordReset() -> Element {
    let toaster = use_toaster();
    let mut email = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let mut sent = use_signal(|| false);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let panel = panel();
        let address = email();
        spawn(async move {
            sending.set(true);
            if actions::request_password_reset(&*panel, &toaster, &address).await {
                sent.set(true);
            }
            sending.set(false);
        });
    };

    let busy = sending();
    let address = email();

    rsx! {
        AuthShell {
            tagline: "找回密码",
            footer: rsx! {
                div { class: "mt-8 text-center text-sm text-gray-500",
                    Link { to: Route::UserDashboard {}, class: LINK, "返回首页" }
                }
            },
            if sent() {
                div { class: "py-8 text-center",
                    div { class: "mb-6 inline-flex h-16 w-16 items-center justify-center rounded-full bg-green-100 text-3xl",
                        "✅"
                    }
                    h2 { class: "mb-3 text-2xl font-bold text-gray-900", "邮件已发送" }
                    p { class: "mb-8 text-gray-600",
                        "我们已向 "
                        span { class: "font-semibold text-gray-900", "{address}" }
                        " 发送了密码重置链接。"
                        br {}
                        "请查收邮件并按照提示重置密码。"
                    }
                    div { class: "space-y-3",
                        button {
                            r#type: "button",
                            class: SUBMIT,
                            onclick: move |_| sent.set(false),
                            "重新发送"
                        }
                        Link {
                            to: Route::Login {},
                            class: "block w-full rounded-lg border-2 border-gray-200 py-3 text-center text-sm font-medium text-gray-700 transition-colors hover:border-gray-300 hover:text-gray-900",
                            "返回登录"
                        }
                    }
                    p { class: "mt-6 text-sm text-gray-500",
                        "没有收到邮件？请检查垃圾邮件文件夹，或确认邮箱地址是否正确"
                    }
                }
            } else {
                div { class: "mb-6",
                    Link {
                        to: Route::Login {},
                        class: "inline-flex items-center text-sm text-gray-600 transition-colors hover:text-gray-900",
                        "← 返回登录"
                    }
                }
                div { class: "mb-6",
                    h2 { class: "mb-2 text-2xl font-bold text-gray-900", "找回密码" }
                    p { class: "text-gray-600", "输入您的注册邮箱，我们将向您发送密码重置链接" }
                }
                form { class: "space-y-6", onsubmit: on_submit,
                    div { class: "space-y-2",
                        label { class: LABEL, r#for: "email", "注册邮箱" }
                        IconInput {
                            id: "email",
                            icon: "✉️",
                            kind: "email",
                            placeholder: "your@email.com",
                            value: address.clone(),
                            on_input: move |v| email.set(v),
                        }
                    }
                    button { r#type: "submit", class: SUBMIT, disabled: busy,
                        if busy { "发送中..." } else { "发送重置链接" }
                    }
                }
                div { class: "relative my-6",
                    div { class: "absolute inset-0 flex items-center",
                        div { class: "w-full border-t border-gray-200" }
                    }
                    div { class: "relative flex justify-center text-sm",
                        span { class: "bg-white px-2 text-gray-500", "或" }
                    }
                }
                p { class: "text-center text-sm text-gray-600",
                    "还没有账号？"
                    Link { to: Route::Register {}, class: "ml-1 {LINK}", "立即注册" }
                }
            }
        }
    }
}
