//! Shared domain types for the sPanel dashboard.
//!
//! This crate defines the records rendered by both consoles:
//! - the subscriber console (`/dashboard/*`)
//! - the administrator console (`/admin/*`)
//! - the HTTP health endpoints served next to them
//!
//! # Modules
//! - [`status`] - Status and category enums with their display labels
//! - [`account`] - Subscriber records (profile, nodes, packages, orders, tickets)
//! - [`admin`] - Administrator records (users, nodes, audit, transactions)
//! - [`api`] - JSON response envelope for the HTTP endpoints

#[macro_use]
mod macros;

pub mod account;
pub mod admin;
pub mod api;
pub mod status;

// Re-export commonly used types at crate root
pub use account::{
    CommissionRecord, DailyTraffic, Invitee, InviteStats, Node, NodeConfig, NotificationPrefs,
    Package, PackageContent, PaymentOption, Purchase, PurchaseStats, RechargeTier, Ticket,
    TicketStats, TrafficStats, TrafficSummary, UserProfile,
};
pub use admin::{
    AdminNode, AdminOrder, AdminTicket, AdminUser, AdvancedSettings, AuditRule, BannedIp,
    BasicSettings, CommandRecord, Coupon, Deposit, EmailSettings, LoginRecord,
    MarkdownAnnouncement, NodeTrafficLog, OnlineIp, PaymentSettings, Product, ProductContent,
    RegisterSettings, RelayRule, SiteAnnouncement, UnbannedIp,
};
pub use api::{ApiResponse, HealthData};
pub use status::{
    AdminNodeStatus, AuditAction, AuditRuleType, CommandStatus, CommissionKind, DepositStatus,
    InviteeStatus, LoginOutcome, MailDriver, NodeStatus, OrderStatus, PaymentMethod,
    PaymentSystem, RegisterMode, SettlementStatus, TicketPriority, TicketStatus, Trend,
};

#[cfg(test)]
mod tests {
    // Consumers import from the crate root, not from the modules.
    use crate::{
        AdvancedSettings, CommandRecord, CommandStatus, EmailSettings, MailDriver, ProductContent,
    };

    #[test]
    fn test_admin_records_reachable_from_root() {
        let record = CommandRecord {
            id: 1,
            command: "uptime".to_string(),
            node_target: "香港 01".to_string(),
            status: CommandStatus::Running,
            result: None,
            executed_at: "2026-01-01 10:00:00".to_string(),
            execution_time: None,
        };
        assert_eq!(record.status, CommandStatus::Running);
        assert_eq!(ProductContent::default().bandwidth, None);

        let email = EmailSettings {
            mail_driver: MailDriver::Smtp,
            smtp_host: String::new(),
            smtp_port: "465".to_string(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            smtp_sender: String::new(),
            smtp_ssl: true,
        };
        assert!(email.smtp_ssl);

        let advanced = AdvancedSettings {
            maintenance_mode: false,
            enable_account_deletion: false,
            reset_traffic_on_purchase: true,
            show_donate: false,
            enable_tickets: true,
        };
        assert!(advanced.enable_tickets);
    }
}
