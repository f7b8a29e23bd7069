//! Administrator-facing records.
//!
//! Field names follow the panel's database columns (`user_id`, `reg_date`,
//! `transfer_enable` ...) so the same shapes can later be filled from a real
//! backend.

use serde::{Deserialize, Serialize};

use crate::status::{
    AdminNodeStatus, AuditAction, AuditRuleType, CommandStatus, DepositStatus, LoginOutcome,
    MailDriver, OrderStatus, PaymentMethod, PaymentSystem, RegisterMode, TicketPriority,
    TicketStatus, Trend,
};

/// Headline figure on the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatCard {
    pub title: String,
    pub icon: String,
    pub value: String,
    pub change: String,
    pub trend: Trend,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecentOrder {
    pub order_no: String,
    pub user_email: String,
    pub amount: f64,
    pub status: OrderStatus,
}

/// Host resource usage, percentages 0-100.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SystemStatus {
    pub cpu: u8,
    pub memory: u8,
    pub disk: u8,
    pub uptime: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PendingTask {
    pub label: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminNode {
    pub id: u32,
    pub name: String,
    pub server: String,
    #[serde(rename = "type")]
    pub protocol: String,
    pub is_online: bool,
    pub status: AdminNodeStatus,
    pub class_level: u8,
    pub bandwidth_used_percent: f64,
    pub bandwidth_limit_gb: u32,
    pub online_users: u32,
    /// ISO 3166 alpha-2 code
    pub country_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminUser {
    pub id: u32,
    pub email: String,
    pub user_name: String,
    pub is_admin: bool,
    pub is_enabled: bool,
    pub class_level: u8,
    pub money: f64,
    /// Traffic allowance in bytes
    pub transfer_enable: u64,
    /// Traffic used in bytes
    pub total_used: u64,
    pub reg_date: String,
    /// `None` means the account never expires
    pub expire_in: Option<String>,
}

impl AdminUser {
    /// Case-insensitive match on email or username.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.email.to_lowercase().contains(&query)
            || self.user_name.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminTicket {
    pub id: u32,
    pub user_id: u32,
    pub user_email: String,
    pub title: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub reply_count: u32,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AdminOrder {
    pub id: u32,
    pub order_no: String,
    pub user_id: u32,
    pub user_email: String,
    pub product_name: String,
    pub amount: f64,
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    pub created_at: String,
    pub paid_at: Option<String>,
}

impl AdminOrder {
    /// Case-insensitive match on order number, user email or product name.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.order_no.to_lowercase().contains(&query)
            || self.user_email.to_lowercase().contains(&query)
            || self.product_name.to_lowercase().contains(&query)
    }
}

/// Announcement stored as markdown; the first `# ` heading is its title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkdownAnnouncement {
    pub id: u32,
    pub date: String,
    pub markdown: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandRecord {
    pub id: u32,
    pub command: String,
    pub node_target: String,
    pub status: CommandStatus,
    pub result: Option<String>,
    pub executed_at: String,
    /// Seconds
    pub execution_time: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeTrafficLog {
    pub id: u32,
    pub user_id: u32,
    pub user_name: String,
    pub node_name: String,
    pub rate: f64,
    pub origin_traffic: String,
    pub traffic: String,
    pub log_time: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BannedIp {
    pub id: u32,
    pub node_name: String,
    pub ip: String,
    pub location: String,
    pub datetime: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UnbannedIp {
    pub id: u32,
    pub user_id: u32,
    pub user_name: String,
    pub ip: String,
    pub location: String,
    pub datetime: String,
}

/// Port forward from a source node to a destination node.
/// `user_id` 0 applies the rule to every user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RelayRule {
    pub id: u32,
    pub user_id: u32,
    pub user_name: String,
    pub source_node_name: String,
    pub dist_node_name: String,
    pub port: u16,
    pub priority: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRecord {
    pub id: u32,
    pub user_id: u32,
    pub user_name: String,
    pub ip: String,
    pub location: String,
    pub datetime: String,
    pub outcome: LoginOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OnlineIp {
    pub id: u32,
    pub user_id: u32,
    pub user_name: String,
    pub node_id: u32,
    pub node_name: String,
    pub ip: String,
    pub location: String,
    pub datetime: String,
    /// Connection originates from another node (relay hop)
    pub is_node: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditRule {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub rule_type: AuditRuleType,
    pub match_pattern: String,
    pub action: AuditAction,
    pub is_active: bool,
    pub trigger_count: u32,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Deposit {
    pub id: u32,
    pub trade_no: String,
    pub user_id: u32,
    pub user_email: String,
    pub amount: f64,
    pub method: PaymentMethod,
    pub status: DepositStatus,
    pub created_at: String,
    pub paid_at: Option<String>,
}

impl Deposit {
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty()
            || self.trade_no.to_lowercase().contains(&query)
            || self.user_email.to_lowercase().contains(&query)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: f64,
    pub content: ProductContent,
    /// Renewal period in days, 0 disables auto renewal
    pub auto_renew: u32,
    pub auto_reset_bandwidth: bool,
    pub listed: bool,
    pub period_sales: u32,
}

/// What a product grants. Absent fields are left unchanged on purchase.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductContent {
    /// GB
    pub bandwidth: Option<u32>,
    /// Days
    pub expire: Option<u32>,
    pub class: Option<u8>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Coupon {
    pub id: u32,
    pub code: String,
    pub expire: String,
    /// Comma separated product ids; empty or "0" means every product
    pub shop: String,
    /// Discount percentage
    pub credit: u32,
    /// Redemptions allowed per user
    pub uses_per_user: u32,
    pub onetime: bool,
}

impl Coupon {
    pub fn applies_to_all(&self) -> bool {
        let shop = self.shop.trim();
        shop.is_empty() || shop == "0"
    }
}

/// Announcement managed from the settings page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteAnnouncement {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BasicSettings {
    pub app_name: String,
    pub base_url: String,
    pub sub_url: String,
    pub admin_contacts: [String; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterSettings {
    pub register_mode: RegisterMode,
    pub enable_email_verify: bool,
    /// GB granted on sign-up
    pub default_traffic: u32,
    pub user_class_default: u8,
    pub user_money_default: f64,
    /// Days
    pub user_expire_in_default: u32,
    /// Hours
    pub user_class_expire_default: u32,
    pub random_group: String,
    pub invite_get_money: f64,
    pub invite_gift_money: f64,
    /// -1 disables buying invite codes
    pub invite_price: i32,
    pub custom_invite_price: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmailSettings {
    pub mail_driver: MailDriver,
    pub smtp_host: String,
    pub smtp_port: String,
    pub smtp_username: String,
    pub smtp_password: String,
    pub smtp_sender: String,
    pub smtp_ssl: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentSettings {
    pub payment_system: PaymentSystem,
    pub f2fpay_app_id: String,
    pub f2fpay_p_id: String,
    pub alipay_public_key: String,
    pub merchant_private_key: String,
    pub codepay_id: String,
    pub codepay_key: String,
    /// Comma separated preset amounts
    pub amount: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdvancedSettings {
    pub maintenance_mode: bool,
    pub enable_account_deletion: bool,
    pub reset_traffic_on_purchase: bool,
    pub show_donate: bool,
    pub enable_tickets: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(email: &str, name: &str) -> AdminUser {
        AdminUser {
            id: 1,
            email: email.to_string(),
            user_name: name.to_string(),
            is_admin: false,
            is_enabled: true,
            class_level: 1,
            money: 0.0,
            transfer_enable: 0,
            total_used: 0,
            reg_date: "2024-01-01T00:00:00".to_string(),
            expire_in: None,
        }
    }

    #[test]
    fn test_user_matches_email_or_name_ignoring_case() {
        let u = user("VIP@example.com", "vipuser");
        assert!(u.matches("vip@"));
        assert!(u.matches("VIPUSER"));
        assert!(u.matches(""));
        assert!(!u.matches("admin"));
    }

    #[test]
    fn test_order_matches_product_name() {
        let order = AdminOrder {
            id: 6,
            order_no: "ORD-20260201-006".to_string(),
            user_id: 3,
            user_email: "vip@example.com".to_string(),
            product_name: "流量充值包 100GB".to_string(),
            amount: 49.0,
            payment_method: PaymentMethod::Alipay,
            status: OrderStatus::Completed,
            created_at: "2026-02-01T18:00:00".to_string(),
            paid_at: Some("2026-02-01T18:01:00".to_string()),
        };
        assert!(order.matches("流量"));
        assert!(order.matches("ord-20260201"));
        assert!(!order.matches("refund"));
    }

    #[test]
    fn test_coupon_scope() {
        let mut coupon = Coupon {
            id: 1,
            code: "WELCOME2025".to_string(),
            expire: "2025-12-31 23:59:59".to_string(),
            shop: "0".to_string(),
            credit: 10,
            uses_per_user: 1,
            onetime: true,
        };
        assert!(coupon.applies_to_all());
        coupon.shop = String::new();
        assert!(coupon.applies_to_all());
        coupon.shop = "1,2,3".to_string();
        assert!(!coupon.applies_to_all());
    }

    #[test]
    fn test_audit_rule_type_field() {
        let rule = AuditRule {
            id: 4,
            name: "支付异常监控".to_string(),
            rule_type: AuditRuleType::Payment,
            match_pattern: "单笔金额 > ¥1000".to_string(),
            action: AuditAction::Log,
            is_active: false,
            trigger_count: 8,
            created_at: "2026-02-01T00:00:00".to_string(),
        };
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["type"], "payment");
        assert_eq!(json["action"], "log");
    }
}
