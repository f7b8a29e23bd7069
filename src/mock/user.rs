//! Seed data for the subscriber console.

use spanel_model::{
    CommissionKind, CommissionRecord, DailyTraffic, InviteStats, Invitee, InviteeStatus, Node,
    NodeConfig, NodeStatus, NotificationPrefs, OrderStatus, Package, PackageContent,
    PaymentMethod, PaymentOption, Purchase, PurchaseStats, RechargeTier, SettlementStatus,
    Ticket, TicketPriority, TicketStatus, TicketStats, TrafficStats, TrafficSummary,
    UserProfile,
};

pub const BALANCE: f64 = 128.50;

pub fn profile() -> UserProfile {
    UserProfile {
        username: "demo_user".into(),
        email: "test@example.com".into(),
        class: 1,
        balance: BALANCE,
        online_devices: 3,
        max_devices: 5,
        speed_limit: 100,
        class_expire: "2026-12-31 23:59:59".into(),
        account_expire: "2027-01-30 12:00:00".into(),
        last_checkin: "2026-01-29 08:30:00".into(),
        subscription_url: "https://spanel.example.com/link/abc123def456?mu=2".into(),
        uuid: "a1b2c3d4-e5f6-7890-abcd-ef1234567890".into(),
        method: "aes-256-gcm".into(),
        protocol: "v2ray".into(),
        obfs: "tls".into(),
        traffic: TrafficSummary {
            total: "107.37 GB".into(),
            used: "12.58 GB".into(),
            unused: "94.79 GB".into(),
            today_used: "2.36 GB".into(),
            past_used: "10.22 GB".into(),
            today_percent: 12,
            past_percent: 42,
            unused_percent: 46,
        },
    }
}

pub fn notification_prefs() -> NotificationPrefs {
    NotificationPrefs {
        telegram_id: String::new(),
        email_notify: true,
        tg_notify: false,
        daily_report: true,
    }
}

fn vmess(address: &str) -> NodeConfig {
    NodeConfig {
        address: address.into(),
        port: 443,
        uuid: Some("abc123-def456-ghi789".into()),
        alter_id: Some(0),
        network: Some("ws".into()),
        tls: Some("tls".into()),
        ..Default::default()
    }
}

pub fn nodes() -> Vec<Node> {
    vec![
        Node {
            id: 1,
            name: "香港 IPLC 01".into(),
            group: 0,
            class: 1,
            sort: 11,
            protocol: "Vmess".into(),
            online: 45,
            bandwidth: 1073,
            rate: 1.0,
            status: NodeStatus::Online,
            config: vmess("hk1.example.com"),
        },
        Node {
            id: 2,
            name: "香港 IPLC 02".into(),
            group: 0,
            class: 1,
            sort: 11,
            protocol: "Vmess".into(),
            online: 38,
            bandwidth: 1073,
            rate: 1.0,
            status: NodeStatus::Online,
            config: vmess("hk2.example.com"),
        },
        Node {
            id: 3,
            name: "日本东京 BGP 01".into(),
            group: 0,
            class: 1,
            sort: 13,
            protocol: "Vless".into(),
            online: 62,
            bandwidth: 536,
            rate: 1.0,
            status: NodeStatus::Online,
            config: NodeConfig {
                address: "jp1.example.com".into(),
                port: 443,
                uuid: Some("abc123-def456-ghi789".into()),
                flow: Some("xtls-rprx-vision".into()),
                ..Default::default()
            },
        },
        Node {
            id: 4,
            name: "美国洛杉矶 CN2 01".into(),
            group: 0,
            class: 1,
            sort: 14,
            protocol: "Trojan".into(),
            online: 28,
            bandwidth: 2145,
            rate: 0.5,
            status: NodeStatus::Online,
            config: NodeConfig {
                address: "us1.example.com".into(),
                port: 443,
                password: Some("your-password".into()),
                ..Default::default()
            },
        },
        Node {
            id: 5,
            name: "新加坡 AWS 01".into(),
            group: 0,
            class: 2,
            sort: 11,
            protocol: "Vmess".into(),
            online: 55,
            bandwidth: 819,
            rate: 1.0,
            status: NodeStatus::Busy,
            config: vmess("sg1.example.com"),
        },
    ]
}

fn package(
    id: u32,
    name: &str,
    price: f64,
    content: PackageContent,
    popular: bool,
    description: &str,
) -> Package {
    Package {
        id,
        name: name.into(),
        price,
        auto_reset_bandwidth: content.traffic > 0,
        content,
        auto_renew: 0,
        popular,
        description: description.into(),
    }
}

pub fn packages() -> Vec<Package> {
    let content = |traffic, class, class_expire, speed_limit, devices| PackageContent {
        traffic,
        class,
        class_expire,
        speed_limit,
        devices,
    };
    vec![
        package(
            1,
            "月度体验套餐",
            19.99,
            content(100, 1, 30, 100, 3),
            false,
            "适合轻度使用的入门套餐",
        ),
        package(
            2,
            "季度标准套餐",
            49.99,
            content(300, 1, 90, 200, 5),
            true,
            "性价比之选，畅享高速浏览",
        ),
        package(
            3,
            "年度尊享套餐",
            159.99,
            content(1074, 2, 365, 500, 10),
            true,
            "全年无忧，VIP 2 特权尊享",
        ),
        package(
            4,
            "旗舰尊贵套餐",
            299.99,
            content(3222, 3, 365, 1000, 20),
            false,
            "终极体验，解锁全部 VIP 3 节点",
        ),
        package(
            5,
            "按量计费套餐",
            0.0,
            content(0, 1, 30, 100, 3),
            false,
            "按实际使用量计费，灵活自由",
        ),
    ]
}

pub fn purchase_stats() -> PurchaseStats {
    PurchaseStats {
        total_orders: 12,
        total_amount: 1258.50,
        this_month_amount: 299.99,
    }
}

#[rustfmt::skip]
pub fn purchases() -> Vec<Purchase> {
    let row = |id: &str,
               name: &str,
               details: &str,
               amount: f64,
               status: OrderStatus,
               method: PaymentMethod,
               created: &str,
               completed: Option<&str>| Purchase {
        id: id.into(),
        package_name: name.into(),
        package_details: details.into(),
        amount,
        status,
        payment_method: method,
        created_at: created.into(),
        completed_at: completed.map(Into::into),
        failure_reason: None,
    };

    let yearly = "1TB 流量 · VIP 2 · 365 天";
    let quarterly = "300GB 流量 · VIP 1 · 90 天";
    let monthly = "100GB 流量 · VIP 1 · 30 天";

    vec![
        row("ORD202501281432", "年度尊享套餐", yearly, 299.99, OrderStatus::Completed, PaymentMethod::Balance, "2025-01-28 14:32:00", Some("2025-01-28 14:32:15")),
        row("ORD202501251015", "季度标准套餐", quarterly, 49.99, OrderStatus::Completed, PaymentMethod::Alipay, "2025-01-25 10:15:00", Some("2025-01-25 10:15:22")),
        row("ORD202501200945", "月度体验套餐", monthly, 19.99, OrderStatus::Completed, PaymentMethod::Wechat, "2025-01-20 09:45:00", Some("2025-01-20 09:45:18")),
        row("ORD202501151630", "流量重置包", "额外 500GB 流量", 39.99, OrderStatus::Completed, PaymentMethod::Balance, "2025-01-15 16:30:00", Some("2025-01-15 16:30:10")),
        Purchase {
            failure_reason: Some("支付超时".into()),
            ..row("ORD202501101240", "旗舰尊贵套餐", "3TB 流量 · VIP 3 · 365 天", 499.99, OrderStatus::Failed, PaymentMethod::Alipay, "2025-01-10 12:40:00", None)
        },
        row("ORD202501050855", "月度体验套餐", monthly, 19.99, OrderStatus::Completed, PaymentMethod::Balance, "2025-01-05 08:55:00", Some("2025-01-05 08:55:08")),
        row("ORD202412281820", "年度尊享套餐", yearly, 299.99, OrderStatus::Completed, PaymentMethod::Wechat, "2024-12-28 18:20:00", Some("2024-12-28 18:20:25")),
        row("ORD202412201410", "季度标准套餐", quarterly, 49.99, OrderStatus::Completed, PaymentMethod::Alipay, "2024-12-20 14:10:00", Some("2024-12-20 14:10:16")),
    ]
}

pub fn ticket_stats() -> TicketStats {
    TicketStats {
        total: 15,
        open: 3,
        pending: 5,
        closed: 7,
    }
}

pub fn tickets() -> Vec<Ticket> {
    let row = |id,
               title: &str,
               content: &str,
               status,
               priority,
               created: &str,
               updated: &str,
               replies| Ticket {
        id,
        title: title.into(),
        content: content.into(),
        status,
        priority,
        created_at: created.into(),
        updated_at: updated.into(),
        replies,
    };
    vec![
        row(
            1001,
            "节点连接不稳定，频繁断线",
            "最近两天使用 JP-01 节点时，每隔几分钟就会断开连接，需要重新订阅。已经尝试重启客户端和更新订阅链接，问题依然存在。",
            TicketStatus::Open,
            TicketPriority::High,
            "2025-01-28 14:32",
            "2025-01-28 16:45",
            2,
        ),
        row(
            1002,
            "咨询企业套餐购买方式",
            "我们公司需要为 20 名员工购买 VPN 服务，请问是否有企业套餐优惠？具体如何购买和开具发票？",
            TicketStatus::Pending,
            TicketPriority::Normal,
            "2025-01-27 10:15",
            "2025-01-27 14:20",
            3,
        ),
        row(
            1003,
            "流量统计异常",
            "我的账户显示流量已使用 80%，但实际使用应该只有 30% 左右。请帮忙核查流量统计是否正确。",
            TicketStatus::Open,
            TicketPriority::Medium,
            "2025-01-26 09:20",
            "2025-01-26 11:30",
            1,
        ),
        row(
            1004,
            "无法访问 Netflix",
            "使用 US-CA-05 节点无法解锁 Netflix，提示代理检测。其他流媒体平台正常。",
            TicketStatus::Closed,
            TicketPriority::Low,
            "2025-01-25 16:40",
            "2025-01-26 10:15",
            4,
        ),
        row(
            1005,
            "退款申请",
            "误操作购买了年度套餐，实际只需要月度套餐。希望能退款或改为月度套餐。",
            TicketStatus::Closed,
            TicketPriority::High,
            "2025-01-24 13:55",
            "2025-01-25 09:30",
            2,
        ),
    ]
}

pub fn invite_stats() -> InviteStats {
    InviteStats {
        total_invitees: 23,
        total_commission: 458.50,
        pending_commission: 89.00,
        withdrawn: 200.00,
        commission_rate: 20,
        invite_link: "https://spanel.example.com/auth/register?code=DEMO2025".into(),
    }
}

pub fn invitees() -> Vec<Invitee> {
    let row = |id, email: &str, reg_date: &str, status, commission| Invitee {
        id,
        email: email.into(),
        reg_date: reg_date.into(),
        status,
        commission,
    };
    vec![
        row(1, "user***@example.com", "2025-01-15", InviteeStatus::Active, 39.99),
        row(2, "abc***@gmail.com", "2025-01-18", InviteeStatus::Active, 79.99),
        row(3, "test***@qq.com", "2025-01-20", InviteeStatus::Pending, 0.0),
        row(4, "new***@outlook.com", "2025-01-22", InviteeStatus::Active, 159.99),
        row(5, "vip***@163.com", "2025-01-25", InviteeStatus::Active, 49.99),
    ]
}

#[rustfmt::skip]
pub fn commission_history() -> Vec<CommissionRecord> {
    let row = |id, kind, description: &str, amount, status, date: &str| CommissionRecord {
        id,
        kind,
        description: description.into(),
        amount,
        status,
        date: date.into(),
    };
    vec![
        row(1, CommissionKind::Invite, "用户 user***@example.com 购买套餐", 39.99, SettlementStatus::Confirmed, "2025-01-15 14:32"),
        row(2, CommissionKind::Invite, "用户 abc***@gmail.com 购买套餐", 79.99, SettlementStatus::Confirmed, "2025-01-18 09:15"),
        row(3, CommissionKind::Withdraw, "提现到支付宝", -200.00, SettlementStatus::Confirmed, "2025-01-20 16:45"),
        row(4, CommissionKind::Invite, "用户 new***@outlook.com 购买套餐", 159.99, SettlementStatus::Pending, "2025-01-22 11:20"),
        row(5, CommissionKind::Bonus, "邀请达人奖励", 50.00, SettlementStatus::Confirmed, "2025-01-23 00:00"),
    ]
}

pub fn payment_options() -> Vec<PaymentOption> {
    let row = |method, icon: &str, gradient: &str, description: &str, popular| PaymentOption {
        method,
        icon: icon.into(),
        gradient: gradient.into(),
        description: description.into(),
        popular,
    };
    vec![
        row(PaymentMethod::Alipay, "💳", "from-blue-500 to-blue-600", "支持扫码支付", true),
        row(PaymentMethod::Wechat, "💰", "from-green-500 to-green-600", "支持扫码支付", false),
        row(PaymentMethod::Paypal, "🌍", "from-yellow-500 to-yellow-600", "国际信用卡支付", false),
        row(PaymentMethod::Crypto, "₿", "from-orange-500 to-orange-600", "BTC/ETH/USDT", false),
    ]
}

pub fn recharge_tiers() -> Vec<RechargeTier> {
    [(10, 0), (30, 2), (50, 5), (100, 15), (200, 40), (500, 120)]
        .into_iter()
        .map(|(amount, bonus)| RechargeTier { amount, bonus })
        .collect()
}

pub fn traffic_stats() -> TrafficStats {
    TrafficStats {
        total_used: 856.7,
        total_limit: 1074.0,
        today_used: 2.34,
        today_upload: 0.56,
        today_download: 1.78,
        yesterday_used: 3.12,
        week_average: 2.45,
    }
}

/// Newest first.
pub fn daily_traffic() -> Vec<DailyTraffic> {
    [
        ("2025-01-29", 0.42, 1.92, 2.34, 0.22),
        ("2025-01-28", 0.56, 2.56, 3.12, 0.29),
        ("2025-01-27", 0.38, 1.78, 2.16, 0.20),
        ("2025-01-26", 0.65, 3.12, 3.77, 0.35),
        ("2025-01-25", 0.29, 1.45, 1.74, 0.16),
        ("2025-01-24", 0.48, 2.34, 2.82, 0.26),
        ("2025-01-23", 0.52, 2.89, 3.41, 0.32),
        ("2025-01-22", 0.35, 1.67, 2.02, 0.19),
        ("2025-01-21", 0.61, 2.98, 3.59, 0.33),
        ("2025-01-20", 0.44, 2.12, 2.56, 0.24),
        ("2025-01-19", 0.39, 1.88, 2.27, 0.21),
        ("2025-01-18", 0.57, 2.67, 3.24, 0.30),
        ("2025-01-17", 0.31, 1.54, 1.85, 0.17),
        ("2025-01-16", 0.48, 2.35, 2.83, 0.26),
        ("2025-01-15", 0.53, 2.78, 3.31, 0.31),
    ]
    .into_iter()
    .map(|(date, upload, download, total, percentage)| DailyTraffic {
        date: date.into(),
        upload,
        download,
        total,
        percentage,
    })
    .collect()
}
