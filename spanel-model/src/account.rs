//! Subscriber-facing records.
//!
//! These are the shapes behind the `/dashboard/*` pages: the signed-in
//! profile, the node catalogue, packages, orders, tickets, the invite ledger
//! and traffic history.

use serde::{Deserialize, Serialize};

use crate::status::{
    CommissionKind, InviteeStatus, NodeStatus, OrderStatus, PaymentMethod, SettlementStatus,
    TicketPriority, TicketStatus,
};

/// The signed-in subscriber.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub username: String,
    pub email: String,
    /// VIP level, 0 for free accounts
    pub class: u8,
    /// Account balance in CNY
    pub balance: f64,
    pub online_devices: u32,
    pub max_devices: u32,
    /// Port speed limit in Mbps
    pub speed_limit: u32,
    pub class_expire: String,
    pub account_expire: String,
    pub last_checkin: String,
    pub subscription_url: String,
    /// Connection identity used by the proxy clients
    pub uuid: String,
    pub method: String,
    pub protocol: String,
    pub obfs: String,
    pub traffic: TrafficSummary,
}

/// Pre-formatted traffic figures shown on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrafficSummary {
    pub total: String,
    pub used: String,
    pub unused: String,
    pub today_used: String,
    pub past_used: String,
    /// Bar widths (percent) for today, past and remaining
    pub today_percent: u8,
    pub past_percent: u8,
    pub unused_percent: u8,
}

/// Notification channels a subscriber can opt into.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotificationPrefs {
    pub telegram_id: String,
    pub email_notify: bool,
    pub tg_notify: bool,
    pub daily_report: bool,
}

/// A proxy node in the subscriber catalogue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    pub id: u32,
    pub name: String,
    pub group: u32,
    /// Minimum VIP level required to use the node
    pub class: u8,
    pub sort: u32,
    /// Protocol name as shown to users ("Vmess", "Vless", "Trojan")
    #[serde(rename = "type")]
    pub protocol: String,
    pub online: u32,
    /// Monthly bandwidth in GB
    pub bandwidth: u32,
    /// Traffic multiplier
    pub rate: f64,
    pub status: NodeStatus,
    pub config: NodeConfig,
}

/// Client configuration copied to the clipboard as JSON.
///
/// Only the fields relevant to the node's protocol are present; the rest are
/// omitted from the serialized form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NodeConfig {
    pub address: String,
    pub port: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alter_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// A package sold in the shop.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Package {
    pub id: u32,
    pub name: String,
    /// Price in CNY, 0 for pay-as-you-go
    pub price: f64,
    pub content: PackageContent,
    pub auto_renew: u32,
    pub auto_reset_bandwidth: bool,
    pub popular: bool,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageContent {
    /// Traffic allowance in GB, 0 for unlimited
    pub traffic: u32,
    pub class: u8,
    /// Validity in days
    pub class_expire: u32,
    /// Speed limit in Mbps, 1000 and above means unlimited
    pub speed_limit: u32,
    pub devices: u32,
}

/// A purchase in the subscriber's order history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Purchase {
    pub id: String,
    pub package_name: String,
    pub package_details: String,
    pub amount: f64,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub created_at: String,
    pub completed_at: Option<String>,
    pub failure_reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseStats {
    pub total_orders: u32,
    pub total_amount: f64,
    pub this_month_amount: f64,
}

/// A support ticket opened by the subscriber.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub created_at: String,
    pub updated_at: String,
    pub replies: u32,
}

impl Ticket {
    /// A freshly submitted ticket: open, normal priority, no replies.
    pub fn submitted(id: u32, title: &str, content: &str, created_at: &str) -> Self {
        Self {
            id,
            title: title.trim().to_string(),
            content: content.trim().to_string(),
            status: TicketStatus::Open,
            priority: TicketPriority::Normal,
            created_at: created_at.to_string(),
            updated_at: created_at.to_string(),
            replies: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TicketStats {
    pub total: u32,
    pub open: u32,
    pub pending: u32,
    pub closed: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InviteStats {
    pub total_invitees: u32,
    pub total_commission: f64,
    pub pending_commission: f64,
    pub withdrawn: f64,
    /// Rebate percentage paid on invitee purchases
    pub commission_rate: u32,
    pub invite_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Invitee {
    pub id: u32,
    /// Masked address, e.g. "user***@example.com"
    pub email: String,
    pub reg_date: String,
    pub status: InviteeStatus,
    pub commission: f64,
}

/// One line of the commission ledger. Withdrawals carry a negative amount.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommissionRecord {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: CommissionKind,
    pub description: String,
    pub amount: f64,
    pub status: SettlementStatus,
    pub date: String,
}

impl CommissionRecord {
    pub fn is_credit(&self) -> bool {
        self.amount > 0.0
    }
}

/// A payment channel offered on the top-up page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PaymentOption {
    pub method: PaymentMethod,
    pub icon: String,
    /// Tailwind gradient stops for the icon tile
    pub gradient: String,
    pub description: String,
    pub popular: bool,
}

/// Preset top-up amount and the bonus credited with it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RechargeTier {
    pub amount: u32,
    pub bonus: u32,
}

/// Aggregate traffic usage, all figures in GB.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrafficStats {
    pub total_used: f64,
    pub total_limit: f64,
    pub today_used: f64,
    pub today_upload: f64,
    pub today_download: f64,
    pub yesterday_used: f64,
    pub week_average: f64,
}

impl TrafficStats {
    pub fn remaining(&self) -> f64 {
        (self.total_limit - self.total_used).max(0.0)
    }

    /// Share of the allowance already used, in percent.
    pub fn usage_percent(&self) -> f64 {
        if self.total_limit <= 0.0 {
            return 0.0;
        }
        self.total_used / self.total_limit * 100.0
    }
}

/// Per-day traffic, in GB. `percentage` is the share of the monthly limit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailyTraffic {
    pub date: String,
    pub upload: f64,
    pub download: f64,
    pub total: f64,
    pub percentage: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_config_omits_unused_fields() {
        let config = NodeConfig {
            address: "us1.example.com".to_string(),
            port: 443,
            password: Some("your-password".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "address": "us1.example.com",
                "port": 443,
                "password": "your-password"
            })
        );
    }

    #[test]
    fn test_node_config_alter_id_is_camel_case() {
        let config = NodeConfig {
            address: "hk1.example.com".to_string(),
            port: 443,
            uuid: Some("abc".to_string()),
            alter_id: Some(0),
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"alterId\":0"));
        assert!(!json.contains("alter_id"));
    }

    #[test]
    fn test_submitted_ticket_is_open() {
        let ticket = Ticket::submitted(1006, "  无法连接 ", "详情", "2025-01-29 10:00");
        assert_eq!(ticket.title, "无法连接");
        assert_eq!(ticket.status, TicketStatus::Open);
        assert_eq!(ticket.replies, 0);
        assert_eq!(ticket.created_at, ticket.updated_at);
    }

    #[test]
    fn test_traffic_stats_remaining_and_percent() {
        let stats = TrafficStats {
            total_used: 856.7,
            total_limit: 1074.0,
            today_used: 2.34,
            today_upload: 0.56,
            today_download: 1.78,
            yesterday_used: 3.12,
            week_average: 2.45,
        };
        assert!((stats.remaining() - 217.3).abs() < 1e-9);
        assert!((stats.usage_percent() - 79.767).abs() < 0.01);
    }

    #[test]
    fn test_commission_record_type_field() {
        let record = CommissionRecord {
            id: 3,
            kind: CommissionKind::Withdraw,
            description: "提现到支付宝".to_string(),
            amount: -200.0,
            status: SettlementStatus::Confirmed,
            date: "2025-01-20 16:45".to_string(),
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["type"], "withdraw");
        assert!(!record.is_credit());
    }
}
