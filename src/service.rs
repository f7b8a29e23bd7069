//! Panel operations behind a trait.
//!
//! Pages call [`PanelService`] instead of talking to a backend directly.
//! [`MockPanelService`] waits for a configured latency and succeeds, which is
//! what the dashboard ships with until a real API exists.

use std::cell::Cell;
use std::rc::Rc;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use spanel_model::{NotificationPrefs, PaymentMethod};

use crate::forms::COUPON_CREDIT;
use crate::timer::sleep_ms;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("服务暂时不可用，请稍后再试")]
    Unavailable,
    #[error("{0}")]
    Rejected(String),
}

/// Simulated round-trip times, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    /// Settings saves
    pub save: u32,
    /// Form submissions and account changes
    pub submit: u32,
    /// Payments and remote commands
    pub payment: u32,
}

impl Latency {
    pub const DEFAULT: Self = Self {
        save: 1000,
        submit: 1500,
        payment: 2000,
    };

    pub const NONE: Self = Self {
        save: 0,
        submit: 0,
        payment: 0,
    };
}

impl Default for Latency {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Operations the consoles perform against the panel.
#[async_trait(?Send)]
pub trait PanelService {
    async fn purchase_package(&self, package_id: u32, price: f64) -> Result<(), ServiceError>;

    async fn pay_top_up(&self, method: PaymentMethod, amount: f64) -> Result<(), ServiceError>;

    /// Redeems a card key and returns the credited amount.
    async fn activate_card_key(&self, code: &str) -> Result<f64, ServiceError>;

    async fn change_password(&self, current: &str, new: &str) -> Result<(), ServiceError>;

    /// Rotates the connection UUID and returns the new one.
    async fn reset_subscription(&self) -> Result<String, ServiceError>;

    async fn save_notifications(&self, prefs: &NotificationPrefs) -> Result<(), ServiceError>;

    /// Opens a ticket and returns its id.
    async fn submit_ticket(&self, title: &str, content: &str) -> Result<u32, ServiceError>;

    async fn request_password_reset(&self, email: &str) -> Result<(), ServiceError>;

    async fn execute_command(&self, command: &str, nodes: &[String]) -> Result<(), ServiceError>;
}

/// Services available to every page through context.
#[derive(Clone)]
pub struct Services {
    pub panel: Rc<dyn PanelService>,
}

impl Services {
    pub fn new(panel: Rc<dyn PanelService>) -> Self {
        Self { panel }
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.panel, &other.panel)
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new(Rc::new(MockPanelService::default()))
    }
}

/// Always-succeeding service with simulated latency.
#[derive(Debug)]
pub struct MockPanelService {
    latency: Latency,
    next_ticket_id: Cell<u32>,
}

impl MockPanelService {
    /// Ticket ids continue after the seeded mock tickets.
    const FIRST_TICKET_ID: u32 = 1006;

    pub fn new(latency: Latency) -> Self {
        Self {
            latency,
            next_ticket_id: Cell::new(Self::FIRST_TICKET_ID),
        }
    }
}

impl Default for MockPanelService {
    fn default() -> Self {
        Self::new(Latency::DEFAULT)
    }
}

#[async_trait(?Send)]
impl PanelService for MockPanelService {
    async fn purchase_package(&self, package_id: u32, price: f64) -> Result<(), ServiceError> {
        tracing::debug!(package_id, price, "Simulating package purchase");
        sleep_ms(self.latency.submit).await;
        Ok(())
    }

    async fn pay_top_up(&self, method: PaymentMethod, amount: f64) -> Result<(), ServiceError> {
        tracing::debug!(%method, amount, "Simulating top-up payment");
        sleep_ms(self.latency.payment).await;
        Ok(())
    }

    async fn activate_card_key(&self, code: &str) -> Result<f64, ServiceError> {
        tracing::debug!(code, "Simulating card key activation");
        sleep_ms(self.latency.submit).await;
        Ok(COUPON_CREDIT)
    }

    async fn change_password(&self, _current: &str, _new: &str) -> Result<(), ServiceError> {
        tracing::debug!("Simulating password change");
        sleep_ms(self.latency.submit).await;
        Ok(())
    }

    async fn reset_subscription(&self) -> Result<String, ServiceError> {
        tracing::debug!("Simulating subscription reset");
        sleep_ms(self.latency.submit).await;
        Ok(Uuid::new_v4().to_string())
    }

    async fn save_notifications(&self, prefs: &NotificationPrefs) -> Result<(), ServiceError> {
        tracing::debug!(?prefs, "Simulating notification settings save");
        sleep_ms(self.latency.save).await;
        Ok(())
    }

    async fn submit_ticket(&self, title: &str, _content: &str) -> Result<u32, ServiceError> {
        tracing::debug!(title, "Simulating ticket submission");
        sleep_ms(self.latency.submit).await;
        let id = self.next_ticket_id.get();
        self.next_ticket_id.set(id + 1);
        Ok(id)
    }

    async fn request_password_reset(&self, email: &str) -> Result<(), ServiceError> {
        tracing::debug!(email, "Simulating password reset email");
        sleep_ms(self.latency.submit).await;
        Ok(())
    }

    async fn execute_command(&self, command: &str, nodes: &[String]) -> Result<(), ServiceError> {
        tracing::debug!(command, node_count = nodes.len(), "Simulating remote command");
        sleep_ms(self.latency.payment).await;
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Fakes shared by the action and page tests.

    use std::cell::RefCell;

    use super::*;

    /// Records every call and fails when `fail` is set.
    #[derive(Default)]
    pub struct CountingService {
        pub calls: RefCell<Vec<String>>,
        pub fail: bool,
    }

    impl CountingService {
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Default::default()
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.borrow().len()
        }

        fn record(&self, call: &str) -> Result<(), ServiceError> {
            self.calls.borrow_mut().push(call.to_string());
            if self.fail {
                Err(ServiceError::Unavailable)
            } else {
                Ok(())
            }
        }
    }

    #[async_trait(?Send)]
    impl PanelService for CountingService {
        async fn purchase_package(&self, package_id: u32, _price: f64) -> Result<(), ServiceError> {
            self.record(&format!("purchase:{package_id}"))
        }

        async fn pay_top_up(&self, method: PaymentMethod, amount: f64) -> Result<(), ServiceError> {
            self.record(&format!("pay:{method}:{amount}"))
        }

        async fn activate_card_key(&self, code: &str) -> Result<f64, ServiceError> {
            self.record(&format!("activate:{code}"))?;
            Ok(COUPON_CREDIT)
        }

        async fn change_password(&self, _current: &str, _new: &str) -> Result<(), ServiceError> {
            self.record("change_password")
        }

        async fn reset_subscription(&self) -> Result<String, ServiceError> {
            self.record("reset_subscription")?;
            Ok("00000000-0000-4000-8000-000000000000".to_string())
        }

        async fn save_notifications(&self, _prefs: &NotificationPrefs) -> Result<(), ServiceError> {
            self.record("save_notifications")
        }

        async fn submit_ticket(&self, title: &str, _content: &str) -> Result<u32, ServiceError> {
            self.record(&format!("ticket:{title}"))?;
            Ok(2000)
        }

        async fn request_password_reset(&self, email: &str) -> Result<(), ServiceError> {
            self.record(&format!("reset:{email}"))
        }

        async fn execute_command(
            &self,
            command: &str,
            _nodes: &[String],
        ) -> Result<(), ServiceError> {
            self.record(&format!("exec:{command}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_latency() {
        let latency = Latency::default();
        assert_eq!(latency.save, 1000);
        assert_eq!(latency.submit, 1500);
        assert_eq!(latency.payment, 2000);
    }

    #[tokio::test]
    async fn test_mock_service_reset_issues_fresh_v4_uuid() {
        let service = MockPanelService::new(Latency::NONE);
        let first = service.reset_subscription().await.unwrap();
        let second = service.reset_subscription().await.unwrap();
        let parsed = Uuid::parse_str(&first).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(first.len(), 36);
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn test_mock_service_assigns_increasing_ticket_ids() {
        let service = MockPanelService::new(Latency::NONE);
        let first = service.submit_ticket("a", "b").await.unwrap();
        let second = service.submit_ticket("c", "d").await.unwrap();
        assert_eq!(first, 1006);
        assert_eq!(second, 1007);
    }

    #[tokio::test]
    async fn test_mock_service_card_key_credit() {
        let service = MockPanelService::new(Latency::NONE);
        assert_eq!(service.activate_card_key("NEWYEAR2026").await, Ok(20.0));
    }

    #[cfg(feature = "server")]
    #[tokio::test(start_paused = true)]
    async fn test_mock_service_waits_for_latency() {
        let service = MockPanelService::new(Latency::DEFAULT);
        let start = tokio::time::Instant::now();
        service.pay_top_up(PaymentMethod::Alipay, 50.0).await.unwrap();
        assert!(start.elapsed() >= std::time::Duration::from_millis(2000));
    }
}
