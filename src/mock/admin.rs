//! Seed data for the administrator console.

use spanel_model::admin::{
    AdvancedSettings, BasicSettings, EmailSettings, PaymentSettings, PendingTask, ProductContent,
    RecentOrder, RegisterSettings, StatCard, SystemStatus,
};
use spanel_model::{
    AdminNode, AdminNodeStatus, AdminOrder, AdminTicket, AdminUser, AuditAction, AuditRule,
    AuditRuleType, BannedIp, CommandRecord, CommandStatus, Coupon, Deposit, DepositStatus,
    LoginOutcome, LoginRecord, MailDriver, MarkdownAnnouncement, NodeTrafficLog, OnlineIp,
    OrderStatus, PaymentMethod, PaymentSystem, Product, RegisterMode, RelayRule,
    SiteAnnouncement, TicketPriority, TicketStatus, Trend, UnbannedIp,
};

use crate::format::group_thousands;

const GB: u64 = 1_073_741_824;

/// Raw figures behind the dashboard cards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdminFigures {
    pub total_users: u32,
    pub online_users: u32,
    pub today_income: f64,
    pub month_income: f64,
    pub total_nodes: u32,
    pub online_nodes: u32,
    pub offline_nodes: u32,
    pub pending_tickets: u32,
    pub pending_withdrawals: u32,
    pub user_growth: f64,
    pub income_growth: f64,
}

pub const FIGURES: AdminFigures = AdminFigures {
    total_users: 2847,
    online_users: 892,
    today_income: 12850.50,
    month_income: 384250.00,
    total_nodes: 15,
    online_nodes: 13,
    offline_nodes: 2,
    pending_tickets: 23,
    pending_withdrawals: 8,
    user_growth: 12.5,
    income_growth: 23.8,
};

#[rustfmt::skip]
fn card(title: &str, icon: &str, value: String, change: &str, trend: Trend, description: &str) -> StatCard {
    StatCard {
        title: title.into(),
        icon: icon.into(),
        value,
        change: change.into(),
        trend,
        description: description.into(),
    }
}

#[rustfmt::skip]
pub fn stat_cards() -> Vec<StatCard> {
    let f = FIGURES;
    vec![
        card("总用户数", "👥", group_thousands(f.total_users as f64), &format!("+{}%", f.user_growth), Trend::Positive, "较上周"),
        card("在线用户", "📶", group_thousands(f.online_users as f64), "活跃", Trend::Neutral, "实时数据"),
        card("今日收入", "💴", format!("¥{}", group_thousands(f.today_income)), &format!("+{}%", f.income_growth), Trend::Positive, "较昨日"),
        card("本月收入", "📈", format!("¥{}", group_thousands(f.month_income.floor())), "+18.2%", Trend::Positive, "较上月"),
        card("节点总数", "🖥️", f.total_nodes.to_string(), "稳定", Trend::Neutral, "全部节点"),
        card("在线节点", "✅", f.online_nodes.to_string(), "正常", Trend::Positive, "运行良好"),
        card("异常节点", "⚠️", f.offline_nodes.to_string(), "需关注", Trend::Negative, "待处理"),
        card("待审工单", "🧾", f.pending_tickets.to_string(), "待处理", Trend::Neutral, "需及时回复"),
    ]
}

pub fn recent_orders() -> Vec<RecentOrder> {
    [
        ("#ORD-2026-0201", "user@example.com", 99.0, OrderStatus::Completed),
        ("#ORD-2026-0202", "test@example.com", 199.0, OrderStatus::Pending),
        ("#ORD-2026-0203", "vip@example.com", 299.0, OrderStatus::Completed),
    ]
    .into_iter()
    .map(|(order_no, email, amount, status)| RecentOrder {
        order_no: order_no.into(),
        user_email: email.into(),
        amount,
        status,
    })
    .collect()
}

pub fn system_status() -> SystemStatus {
    SystemStatus {
        cpu: 32,
        memory: 58,
        disk: 45,
        uptime: "15天 8小时 32分钟".into(),
    }
}

pub fn pending_tasks() -> Vec<PendingTask> {
    [
        ("提现审核", FIGURES.pending_withdrawals),
        ("工单回复", FIGURES.pending_tickets),
        ("节点异常", FIGURES.offline_nodes),
    ]
    .into_iter()
    .map(|(label, count)| PendingTask {
        label: label.into(),
        count,
    })
    .collect()
}

#[rustfmt::skip]
pub fn nodes() -> Vec<AdminNode> {
    let row = |id, name: &str, server: &str, protocol: &str, online, status, class_level, used, limit, users, country: &str| AdminNode {
        id,
        name: name.into(),
        server: server.into(),
        protocol: protocol.into(),
        is_online: online,
        status,
        class_level,
        bandwidth_used_percent: used,
        bandwidth_limit_gb: limit,
        online_users: users,
        country_code: country.into(),
    };
    vec![
        row(1, "香港 IPLC 01", "hk1.example.com", "ss", true, AdminNodeStatus::Active, 1, 45.2, 1000, 128, "HK"),
        row(2, "日本 BGP 02", "jp2.example.com", "vmess", true, AdminNodeStatus::Active, 1, 67.8, 800, 89, "JP"),
        row(3, "美国 LA 03", "us3.example.com", "trojan", false, AdminNodeStatus::Maintenance, 0, 23.5, 1200, 0, "US"),
        row(4, "新加坡 04", "sg4.example.com", "ss", true, AdminNodeStatus::Active, 1, 78.3, 500, 156, "SG"),
        row(5, "台湾 05", "tw5.example.com", "ssr", true, AdminNodeStatus::Active, 0, 34.1, 600, 67, "TW"),
    ]
}

#[rustfmt::skip]
pub fn users() -> Vec<AdminUser> {
    let row = |id, email: &str, name: &str, is_admin, is_enabled, class_level, money, limit_gb: u64, used_gb: u64, reg: &str, expire: Option<&str>| AdminUser {
        id,
        email: email.into(),
        user_name: name.into(),
        is_admin,
        is_enabled,
        class_level,
        money,
        transfer_enable: limit_gb * GB,
        total_used: used_gb * GB,
        reg_date: reg.into(),
        expire_in: expire.map(Into::into),
    };
    vec![
        row(1, "admin@example.com", "Administrator", true, true, 99, 9999.0, 100, 50, "2024-01-01T00:00:00", None),
        row(2, "user1@example.com", "user1", false, true, 1, 128.5, 100, 40, "2024-06-15T10:30:00", Some("2025-12-31T23:59:59")),
        row(3, "vip@example.com", "vipuser", false, true, 2, 588.0, 200, 150, "2024-03-20T14:22:00", Some("2025-06-30T23:59:59")),
        row(4, "test@example.com", "testuser", false, true, 0, 25.0, 50, 5, "2024-10-05T09:15:00", Some("2025-01-15T23:59:59")),
        row(5, "disabled@example.com", "blockeduser", false, false, 1, 0.0, 100, 0, "2024-08-10T16:45:00", Some("2024-12-31T23:59:59")),
    ]
}

#[rustfmt::skip]
pub fn tickets() -> Vec<AdminTicket> {
    let row = |id, user_id, email: &str, title: &str, status, priority, reply_count, created: &str, updated: &str| AdminTicket {
        id,
        user_id,
        user_email: email.into(),
        title: title.into(),
        status,
        priority,
        reply_count,
        created_at: created.into(),
        updated_at: updated.into(),
    };
    vec![
        row(1, 2, "user1@example.com", "节点连接不稳定，频繁断线", TicketStatus::Open, TicketPriority::High, 3, "2026-02-01T10:30:00", "2026-02-02T08:15:00"),
        row(2, 3, "vip@example.com", "流量统计不准确，请核查", TicketStatus::Pending, TicketPriority::Medium, 5, "2026-01-30T14:20:00", "2026-02-01T16:45:00"),
        row(3, 4, "test@example.com", "申请退款，无法使用服务", TicketStatus::Open, TicketPriority::High, 1, "2026-02-02T09:00:00", "2026-02-02T09:00:00"),
        row(4, 5, "disabled@example.com", "账户被误封，请求解封", TicketStatus::Closed, TicketPriority::Low, 8, "2026-01-25T11:30:00", "2026-01-28T10:20:00"),
        row(5, 2, "user1@example.com", "建议增加新加坡节点", TicketStatus::Pending, TicketPriority::Low, 2, "2026-01-28T15:45:00", "2026-01-29T09:30:00"),
    ]
}

#[rustfmt::skip]
pub fn orders() -> Vec<AdminOrder> {
    let row = |id, order_no: &str, user_id, email: &str, product: &str, amount, method, status, created: &str, paid: Option<&str>| AdminOrder {
        id,
        order_no: order_no.into(),
        user_id,
        user_email: email.into(),
        product_name: product.into(),
        amount,
        payment_method: method,
        status,
        created_at: created.into(),
        paid_at: paid.map(Into::into),
    };
    use OrderStatus::*;
    use PaymentMethod::{Alipay, Wechat};
    vec![
        row(1, "ORD-20260201-001", 2, "user1@example.com", "VIP 1 套餐 - 月付", 99.0, Alipay, Completed, "2026-02-01T10:30:00", Some("2026-02-01T10:31:00")),
        row(2, "ORD-20260201-002", 3, "vip@example.com", "VIP 2 套餐 - 年付", 1188.0, Wechat, Completed, "2026-02-01T14:20:00", Some("2026-02-01T14:22:00")),
        row(3, "ORD-20260202-003", 4, "test@example.com", "VIP 1 套餐 - 月付", 99.0, Alipay, Pending, "2026-02-02T09:00:00", None),
        row(4, "ORD-20260130-004", 5, "disabled@example.com", "VIP 1 套餐 - 月付", 99.0, Alipay, Failed, "2026-01-30T16:45:00", None),
        row(5, "ORD-20260128-005", 2, "user1@example.com", "VIP 3 套餐 - 季付", 268.0, Wechat, Refunded, "2026-01-28T11:30:00", Some("2026-01-28T11:32:00")),
        row(6, "ORD-20260201-006", 3, "vip@example.com", "流量充值包 100GB", 49.0, Alipay, Completed, "2026-02-01T18:00:00", Some("2026-02-01T18:01:00")),
    ]
}

pub fn markdown_announcements() -> Vec<MarkdownAnnouncement> {
    [
        (1, "2025-02-01 10:00:00", "# 🎉 新年特惠活动开启！\n\n为感谢用户支持，我们特别推出新年优惠套餐..."),
        (2, "2025-01-28 15:30:00", "# 系统维护通知\n\n我们将于2025年2月1日凌晨2点进行系统升级..."),
        (3, "2025-01-25 09:00:00", "# 新节点上线：香港高速节点\n\n全新香港节点已上线，欢迎体验..."),
        (4, "2025-01-20 14:20:00", "# 春节假期服务安排\n\n春节期间客服值班时间调整通知..."),
    ]
    .into_iter()
    .map(|(id, date, markdown)| MarkdownAnnouncement {
        id,
        date: date.into(),
        markdown: markdown.into(),
    })
    .collect()
}

#[rustfmt::skip]
pub fn commands() -> Vec<CommandRecord> {
    vec![
        CommandRecord {
            id: 1,
            command: "systemctl restart ss-server".into(),
            node_target: "香港 IPLC 01".into(),
            status: CommandStatus::Success,
            result: Some(
                "Redirecting to /bin/systemctl restart ss-server\nJob for ss-server.service succeeded."
                    .into(),
            ),
            executed_at: "2026-02-02T10:30:00".into(),
            execution_time: Some(2.3),
        },
        CommandRecord {
            id: 2,
            command: "iptables -L -n -v".into(),
            node_target: "日本 BGP 02".into(),
            status: CommandStatus::Success,
            result: Some(
                "Chain INPUT (policy ACCEPT 4521 packets, 523K bytes)\n pkts bytes target     prot opt in     out     source               destination\n..."
                    .into(),
            ),
            executed_at: "2026-02-02T09:15:00".into(),
            execution_time: Some(0.8),
        },
        CommandRecord {
            id: 3,
            command: "cat /etc/shadow".into(),
            node_target: "美国 LA 03".into(),
            status: CommandStatus::Failed,
            result: Some("Permission denied (user=www-data)".into()),
            executed_at: "2026-02-02T08:45:00".into(),
            execution_time: None,
        },
        CommandRecord {
            id: 4,
            command: "df -h".into(),
            node_target: "新加坡 04".into(),
            status: CommandStatus::Running,
            result: None,
            executed_at: "2026-02-02T11:00:00".into(),
            execution_time: None,
        },
    ]
}

#[rustfmt::skip]
pub fn node_traffic() -> Vec<NodeTrafficLog> {
    [
        (1, 1001, "user@example.com", "香港节点 01", 1.0, "1.25 GB", "1.25 GB", "2025-02-02 14:30:00"),
        (2, 1002, "test@example.com", "美国节点 03", 0.5, "2.50 GB", "1.25 GB", "2025-02-02 14:25:00"),
        (3, 1003, "demo@example.com", "日本节点 02", 1.0, "856.32 MB", "856.32 MB", "2025-02-02 14:20:00"),
        (4, 1001, "user@example.com", "新加坡节点 01", 1.0, "512.00 MB", "512.00 MB", "2025-02-02 14:15:00"),
        (5, 1004, "admin@example.com", "台湾节点 01", 0.0, "3.20 GB", "0 B", "2025-02-02 14:10:00"),
    ]
    .into_iter()
    .map(|(id, user_id, user_name, node_name, rate, origin, traffic, time)| NodeTrafficLog {
        id,
        user_id,
        user_name: user_name.into(),
        node_name: node_name.into(),
        rate,
        origin_traffic: origin.into(),
        traffic: traffic.into(),
        log_time: time.into(),
    })
    .collect()
}

pub fn banned_ips() -> Vec<BannedIp> {
    [
        (1, "香港节点 01", "192.168.1.100", "中国 广东 深圳", "2025-02-02 14:30:00"),
        (2, "美国节点 03", "10.0.0.50", "美国 加利福尼亚", "2025-02-02 14:15:00"),
        (3, "日本节点 02", "172.16.0.25", "日本 东京", "2025-02-02 13:50:00"),
        (4, "新加坡节点 01", "203.0.113.50", "新加坡", "2025-02-02 13:20:00"),
    ]
    .into_iter()
    .map(|(id, node_name, ip, location, datetime)| BannedIp {
        id,
        node_name: node_name.into(),
        ip: ip.into(),
        location: location.into(),
        datetime: datetime.into(),
    })
    .collect()
}

pub fn unbanned_ips() -> Vec<UnbannedIp> {
    [
        (1, 1001, "admin@example.com", "192.168.1.100", "中国 广东 深圳", "2025-02-02 14:35:00"),
        (2, 1001, "admin@example.com", "10.0.0.50", "美国 加利福尼亚", "2025-02-02 14:20:00"),
        (3, 1002, "superadmin@example.com", "172.16.0.25", "日本 东京", "2025-02-02 13:55:00"),
        (4, 1001, "admin@example.com", "203.0.113.50", "新加坡", "2025-02-02 13:25:00"),
    ]
    .into_iter()
    .map(|(id, user_id, user_name, ip, location, datetime)| UnbannedIp {
        id,
        user_id,
        user_name: user_name.into(),
        ip: ip.into(),
        location: location.into(),
        datetime: datetime.into(),
    })
    .collect()
}

pub fn relay_rules() -> Vec<RelayRule> {
    [
        (1, 1001, "user@example.com", "香港节点 01", "美国节点 03", 12345, 1),
        (2, 0, "全体用户", "日本节点 02", "新加坡节点 01", 54321, 5),
        (3, 1002, "test@example.com", "台湾节点 01", "韩国节点 01", 33333, 3),
        (4, 1003, "demo@example.com", "香港节点 01", "日本节点 02", 44444, 2),
    ]
    .into_iter()
    .map(|(id, user_id, user_name, source, dist, port, priority)| RelayRule {
        id,
        user_id,
        user_name: user_name.into(),
        source_node_name: source.into(),
        dist_node_name: dist.into(),
        port,
        priority,
    })
    .collect()
}

pub fn login_history() -> Vec<LoginRecord> {
    use LoginOutcome::{Failed, Success};
    [
        (1, 1001, "user@example.com", "192.168.1.100", "中国 广东 深圳", "2025-02-02 14:35:00", Success),
        (2, 1002, "test@example.com", "10.0.0.50", "美国 加利福尼亚", "2025-02-02 14:30:00", Success),
        (3, 1001, "user@example.com", "172.16.0.25", "日本 东京", "2025-02-02 14:25:00", Failed),
        (4, 1003, "admin@example.com", "203.0.113.50", "新加坡", "2025-02-02 14:20:00", Success),
        (5, 1004, "vip@example.com", "198.51.100.25", "中国 台湾 台北", "2025-02-02 14:15:00", Success),
    ]
    .into_iter()
    .map(|(id, user_id, user_name, ip, location, datetime, outcome)| LoginRecord {
        id,
        user_id,
        user_name: user_name.into(),
        ip: ip.into(),
        location: location.into(),
        datetime: datetime.into(),
        outcome,
    })
    .collect()
}

#[rustfmt::skip]
pub fn online_ips() -> Vec<OnlineIp> {
    [
        (1, 1001, "user@example.com", 1, "香港节点 01", "192.168.1.100", "中国 广东 深圳", "2025-02-02 14:35:00", false),
        (2, 1002, "test@example.com", 3, "美国节点 03", "10.0.0.50", "美国 加利福尼亚", "2025-02-02 14:34:00", false),
        (3, 1003, "demo@example.com", 2, "日本节点 02", "172.16.0.25", "日本 东京", "2025-02-02 14:33:00", true),
        (4, 1001, "user@example.com", 4, "新加坡节点 01", "203.0.113.50", "新加坡", "2025-02-02 14:32:00", false),
        (5, 1004, "admin@example.com", 5, "台湾节点 01", "198.51.100.25", "中国 台湾 台北", "2025-02-02 14:31:00", false),
    ]
    .into_iter()
    .map(|(id, user_id, user_name, node_id, node_name, ip, location, datetime, is_node)| OnlineIp {
        id,
        user_id,
        user_name: user_name.into(),
        node_id,
        node_name: node_name.into(),
        ip: ip.into(),
        location: location.into(),
        datetime: datetime.into(),
        is_node,
    })
    .collect()
}

pub fn audit_rules() -> Vec<AuditRule> {
    use AuditAction::{Block, Log, Warn};
    use AuditRuleType::{Content, Login, Payment, Traffic};
    [
        (1, "异常流量检测", Traffic, "单日流量 > 100GB", Warn, true, 23, "2026-01-15T10:00:00"),
        (2, "异地登录告警", Login, "IP 距离上次登录 > 2000km", Warn, true, 156, "2026-01-20T14:30:00"),
        (3, "高频请求拦截", Content, "1分钟内请求 > 100次", Block, true, 45, "2026-01-25T09:15:00"),
        (4, "支付异常监控", Payment, "单笔金额 > ¥1000", Log, false, 8, "2026-02-01T16:45:00"),
        (5, "恶意IP封禁", Login, "IP 在黑名单中", Block, true, 312, "2026-01-10T08:00:00"),
    ]
    .into_iter()
    .map(|(id, name, rule_type, pattern, action, is_active, trigger_count, created)| AuditRule {
        id,
        name: name.into(),
        rule_type,
        match_pattern: pattern.into(),
        action,
        is_active,
        trigger_count,
        created_at: created.into(),
    })
    .collect()
}

#[rustfmt::skip]
pub fn deposits() -> Vec<Deposit> {
    use DepositStatus::{Failed, Pending, Success};
    use PaymentMethod::{Alipay, Wechat};
    [
        (1, "TXN20260201123456789", 2, "user1@example.com", 99.0, Alipay, Success, "2026-02-01T10:30:00", Some("2026-02-01T10:31:00")),
        (2, "TXN20260201987654321", 3, "vip@example.com", 288.0, Wechat, Success, "2026-02-01T14:20:00", Some("2026-02-01T14:22:00")),
        (3, "TXN20260202112233445", 4, "test@example.com", 49.0, Alipay, Pending, "2026-02-02T09:00:00", None),
        (4, "TXN20260130556677889", 5, "disabled@example.com", 199.0, Wechat, Failed, "2026-01-30T16:45:00", None),
        (5, "TXN20260202445566778", 2, "user1@example.com", 128.0, Alipay, Success, "2026-02-02T11:15:00", Some("2026-02-02T11:16:00")),
    ]
    .into_iter()
    .map(|(id, trade_no, user_id, email, amount, method, status, created, paid)| Deposit {
        id,
        trade_no: trade_no.into(),
        user_id,
        user_email: email.into(),
        amount,
        method,
        status,
        created_at: created.into(),
        paid_at: paid.map(Into::into),
    })
    .collect()
}

pub fn products() -> Vec<Product> {
    let content = |bandwidth, expire, class| ProductContent {
        bandwidth,
        expire,
        class,
    };
    [
        (1, "月度VIP套餐", 29.99, content(Some(100), Some(30), Some(1)), 30, true, true, 156),
        (2, "季度VIP套餐", 79.99, content(Some(300), Some(90), Some(1)), 90, true, true, 89),
        (3, "年度超级VIP", 299.99, content(Some(1024), Some(365), Some(2)), 365, true, true, 234),
        (4, "流量包 100GB", 19.99, content(Some(100), None, None), 0, false, true, 67),
        (5, "体验套餐（已下架）", 9.99, content(Some(10), Some(7), None), 0, false, false, 0),
    ]
    .into_iter()
    .map(|(id, name, price, content, auto_renew, reset, listed, sales)| Product {
        id,
        name: name.into(),
        price,
        content,
        auto_renew,
        auto_reset_bandwidth: reset,
        listed,
        period_sales: sales,
    })
    .collect()
}

pub fn coupons() -> Vec<Coupon> {
    [
        (1, "WELCOME2025", "2025-12-31 23:59:59", "0", 10, 1, true),
        (2, "VIP90OFF", "2025-06-30 23:59:59", "1,2,3", 90, 3, false),
        (3, "SPRING50", "2025-03-31 23:59:59", "", 50, 1, true),
        (4, "YEARLY20", "2025-01-31 23:59:59", "3", 20, 2, false),
    ]
    .into_iter()
    .map(|(id, code, expire, shop, credit, uses_per_user, onetime)| Coupon {
        id,
        code: code.into(),
        expire: expire.into(),
        shop: shop.into(),
        credit,
        uses_per_user,
        onetime,
    })
    .collect()
}

pub fn site_announcements() -> Vec<SiteAnnouncement> {
    vec![
        SiteAnnouncement {
            id: 1,
            title: "新年特惠活动开启！".into(),
            content: "尊敬的用户，为感谢您的支持，所有套餐8折优惠，限时3天！活动期间充值还能获得额外20%的流量奖励。".into(),
            is_active: true,
            created_at: "2026-02-01T10:00:00".into(),
        },
        SiteAnnouncement {
            id: 2,
            title: "节点维护通知".into(),
            content: "我们将于2026年2月5日凌晨2:00-4:00对香港节点进行维护，期间可能影响使用，请提前做好准备。".into(),
            is_active: true,
            created_at: "2026-01-30T16:00:00".into(),
        },
    ]
}

pub fn basic_settings() -> BasicSettings {
    BasicSettings {
        app_name: "sPanel-FastAPI".into(),
        base_url: "https://test-spanel-fastapi.freessr.bid".into(),
        sub_url: "https://test-spanel-fastapi.freessr.bid".into(),
        admin_contacts: [
            "QQ：123456".into(),
            "TG群：https://t.me/xxx".into(),
            "邮箱：admin@example.com".into(),
        ],
    }
}

pub fn register_settings() -> RegisterSettings {
    RegisterSettings {
        register_mode: RegisterMode::Open,
        enable_email_verify: true,
        default_traffic: 10,
        user_class_default: 0,
        user_money_default: 0.0,
        user_expire_in_default: 30,
        user_class_expire_default: 24,
        random_group: "1,2,3,4".into(),
        invite_get_money: 0.0,
        invite_gift_money: 5.0,
        invite_price: -1,
        custom_invite_price: 1,
    }
}

pub fn email_settings() -> EmailSettings {
    EmailSettings {
        mail_driver: MailDriver::Smtp,
        smtp_host: "smtp.mailgun.org".into(),
        smtp_port: "465".into(),
        smtp_username: "postmaster@example.com".into(),
        smtp_password: String::new(),
        smtp_sender: "postmaster@example.com".into(),
        smtp_ssl: true,
    }
}

pub fn payment_settings() -> PaymentSettings {
    PaymentSettings {
        payment_system: PaymentSystem::None,
        f2fpay_app_id: String::new(),
        f2fpay_p_id: String::new(),
        alipay_public_key: String::new(),
        merchant_private_key: String::new(),
        codepay_id: String::new(),
        codepay_key: String::new(),
        amount: "2,23,233,2333".into(),
    }
}

pub fn advanced_settings() -> AdvancedSettings {
    AdvancedSettings {
        maintenance_mode: false,
        enable_account_deletion: false,
        reset_traffic_on_purchase: false,
        show_donate: true,
        enable_tickets: true,
    }
}
