//! Toast renderer and the handle pages push toasts through.

use dioxus::prelude::*;

use crate::timer::sleep_ms;
use crate::toast::{Toast, ToastLevel, ToastQueue, ToastSink};

/// Copyable handle onto the app-wide toast queue.
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    queue: Signal<ToastQueue>,
}

impl Toaster {
    pub fn new(queue: Signal<ToastQueue>) -> Self {
        Self { queue }
    }

    pub fn dismiss(&self, id: u64) {
        let mut queue = self.queue;
        queue.write().dismiss(id);
    }
}

impl ToastSink for Toaster {
    fn push(&self, toast: Toast) {
        let mut queue = self.queue;
        let duration = toast.duration_ms;
        let id = queue.write().push(toast);
        spawn(async move {
            sleep_ms(duration).await;
            queue.write().dismiss(id);
        });
    }
}

/// Creates the queue at the app root and provides the handle.
pub fn use_toaster_provider() -> Toaster {
    let queue = use_signal(ToastQueue::default);
    use_context_provider(|| Toaster::new(queue))
}

pub fn use_toaster() -> Toaster {
    use_context::<Toaster>()
}

/// Top-right stack of live toasts, each with a close button.
#[component]
pub fn ToasterView() -> Element {
    let toaster = use_toaster();
    let items = toaster.queue.read().items().to_vec();

    rsx! {
        div { class: "pointer-events-none fixed right-4 top-4 z-[100] flex w-80 flex-col gap-2",
            for (id , toast) in items {
                ToastItem { key: "{id}", id, toast, on_close: move |id| toaster.dismiss(id) }
            }
        }
    }
}

#[component]
fn ToastItem(id: u64, toast: Toast, on_close: EventHandler<u64>) -> Element {
    let (icon, accent) = match toast.level {
        ToastLevel::Success => ("✓", "border-green-200 text-green-700"),
        ToastLevel::Error => ("✕", "border-red-200 text-red-700"),
        ToastLevel::Info => ("ℹ", "border-blue-200 text-blue-700"),
    };
    let title = toast.title;
    rsx! {
        div { class: "pointer-events-auto flex items-start gap-3 rounded-lg border bg-white p-4 shadow-lg {accent}",
            span { class: "font-bold", "{icon}" }
            div { class: "flex-1",
                p { class: "text-sm font-semibold text-gray-900", "{title}" }
                if let Some(description) = toast.description {
                    p { class: "mt-1 text-xs text-gray-600", "{description}" }
                }
            }
            button {
                r#type: "button",
                class: "text-gray-400 hover:text-gray-700",
                onclick: move |_| on_close.call(id),
                "✕"
            }
        }
    }
}
