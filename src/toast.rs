//! Transient notifications.
//!
//! Producers push through the [`ToastSink`] trait. The app root owns a single
//! [`ToastQueue`] that the toaster renders in the top-right corner and that
//! drops each toast once its duration has elapsed.

pub const DEFAULT_DURATION_MS: u32 = 3000;

/// Duration for purchase and payment confirmations.
pub const LONG_DURATION_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub title: String,
    pub description: Option<String>,
    pub duration_ms: u32,
}

impl Toast {
    pub fn new(level: ToastLevel, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            description: None,
            duration_ms: DEFAULT_DURATION_MS,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(ToastLevel::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(ToastLevel::Error, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(ToastLevel::Info, title)
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_duration(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }
}

/// Anything that accepts toasts.
pub trait ToastSink {
    fn push(&self, toast: Toast);

    fn success(&self, title: &str) {
        self.push(Toast::success(title));
    }

    fn error(&self, title: &str) {
        self.push(Toast::error(title));
    }

    fn info(&self, title: &str) {
        self.push(Toast::info(title));
    }
}

/// Live toasts in arrival order, each with a queue-assigned id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<(u64, Toast)>,
}

impl ToastQueue {
    /// Appends a toast and returns the id used to dismiss it.
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push((id, toast));
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|(item_id, _)| *item_id != id);
    }

    pub fn items(&self) -> &[(u64, Toast)] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Sink that keeps every toast for inspection.
    #[derive(Default)]
    pub struct RecordingSink {
        pub toasts: RefCell<Vec<Toast>>,
    }

    impl RecordingSink {
        pub fn titles(&self) -> Vec<String> {
            self.toasts.borrow().iter().map(|t| t.title.clone()).collect()
        }

        pub fn last(&self) -> Option<Toast> {
            self.toasts.borrow().last().cloned()
        }

        pub fn errors(&self) -> usize {
            self.toasts
                .borrow()
                .iter()
                .filter(|t| t.level == ToastLevel::Error)
                .count()
        }
    }

    impl ToastSink for RecordingSink {
        fn push(&self, toast: Toast) {
            self.toasts.borrow_mut().push(toast);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::RecordingSink;
    use super::*;

    #[test]
    fn test_toast_builder_defaults() {
        let toast = Toast::success("已保存");
        assert_eq!(toast.duration_ms, DEFAULT_DURATION_MS);
        assert!(toast.description.is_none());

        let toast = Toast::success("支付成功！")
            .with_description("已充值 ¥50 到账户")
            .with_duration(LONG_DURATION_MS);
        assert_eq!(toast.duration_ms, 5000);
        assert_eq!(toast.description.as_deref(), Some("已充值 ¥50 到账户"));
    }

    #[test]
    fn test_queue_assigns_ids_and_dismisses() {
        let mut queue = ToastQueue::default();
        let a = queue.push(Toast::info("a"));
        let b = queue.push(Toast::error("b"));
        assert_ne!(a, b);
        assert_eq!(queue.items().len(), 2);

        queue.dismiss(a);
        assert_eq!(queue.items().len(), 1);
        assert_eq!(queue.items()[0].1.title, "b");

        queue.dismiss(a);
        assert_eq!(queue.items().len(), 1);
        queue.dismiss(b);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_sink_helpers_set_level() {
        let sink = RecordingSink::default();
        sink.error("请输入卡密");
        sink.success("ok");
        sink.info("note");
        let levels: Vec<ToastLevel> = sink.toasts.borrow().iter().map(|t| t.level).collect();
        assert_eq!(
            levels,
            vec![ToastLevel::Error, ToastLevel::Success, ToastLevel::Info]
        );
        assert_eq!(sink.errors(), 1);
    }
}
