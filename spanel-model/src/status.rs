//! Status and category enums.
//!
//! Each enum serializes to its lowercase wire name and carries the Chinese
//! label the consoles render inside badges and filter chips.

wire_enum! {
    /// Lifecycle of a purchase or order.
    pub enum OrderStatus {
        Completed = "completed" => "已完成",
        Pending = "pending" => "待支付",
        Failed = "failed" => "失败",
        Refunded = "refunded" => "已退款",
    }
    fallback = Pending;
}

wire_enum! {
    /// How an order or top-up was paid.
    pub enum PaymentMethod {
        Balance = "balance" => "余额支付",
        Alipay = "alipay" => "支付宝",
        Wechat = "wechat" => "微信支付",
        Paypal = "paypal" => "PayPal",
        Crypto = "crypto" => "加密货币",
    }
    fallback = Balance;
}

wire_enum! {
    pub enum TicketStatus {
        Open = "open" => "待处理",
        Pending = "pending" => "处理中",
        Closed = "closed" => "已关闭",
    }
    fallback = Open;
}

wire_enum! {
    pub enum TicketPriority {
        High = "high" => "高",
        Medium = "medium" => "中",
        Normal = "normal" => "普通",
        Low = "low" => "低",
    }
    fallback = Normal;
}

wire_enum! {
    /// Whether an invited account has made its first purchase.
    pub enum InviteeStatus {
        Active = "active" => "已激活",
        Pending = "pending" => "待确认",
    }
    fallback = Pending;
}

wire_enum! {
    /// Entry kind in the commission ledger.
    pub enum CommissionKind {
        Invite = "invite" => "邀请返利",
        Withdraw = "withdraw" => "提现",
        Bonus = "bonus" => "奖励",
    }
    fallback = Invite;
}

wire_enum! {
    pub enum SettlementStatus {
        Confirmed = "confirmed" => "已确认",
        Pending = "pending" => "待确认",
    }
    fallback = Pending;
}

wire_enum! {
    /// Load state of a node as seen by subscribers.
    pub enum NodeStatus {
        Online = "online" => "在线",
        Busy = "busy" => "拥挤",
    }
    fallback = Online;
}

wire_enum! {
    /// Operator-assigned node state. Offline is tracked separately by the
    /// node's online flag.
    pub enum AdminNodeStatus {
        Active = "active" => "在线",
        Maintenance = "maintenance" => "维护中",
    }
    fallback = Active;
}

wire_enum! {
    pub enum CommandStatus {
        Success = "success" => "成功",
        Failed = "failed" => "失败",
        Running = "running" => "执行中",
    }
    fallback = Running;
}

wire_enum! {
    pub enum DepositStatus {
        Success = "success" => "成功",
        Pending = "pending" => "处理中",
        Failed = "failed" => "失败",
    }
    fallback = Pending;
}

wire_enum! {
    pub enum LoginOutcome {
        Success = "success" => "成功",
        Failed = "failed" => "失败",
    }
    fallback = Failed;
}

wire_enum! {
    /// What an audit rule watches.
    pub enum AuditRuleType {
        Traffic = "traffic" => "流量",
        Login = "login" => "登录",
        Payment = "payment" => "支付",
        Content = "content" => "内容",
    }
    fallback = Traffic;
}

wire_enum! {
    /// What happens when an audit rule triggers.
    pub enum AuditAction {
        Block = "block" => "拦截",
        Warn = "warn" => "警告",
        Log = "log" => "记录",
    }
    fallback = Log;
}

wire_enum! {
    pub enum RegisterMode {
        Open = "open" => "开放注册",
        Invite = "invite" => "仅限邀请码",
        Close = "close" => "关闭注册",
    }
    fallback = Open;
}

wire_enum! {
    pub enum MailDriver {
        Smtp = "smtp" => "SMTP",
        Mailgun = "mailgun" => "Mailgun",
        Sendgrid = "sendgrid" => "SendGrid",
        None = "none" => "不发送",
    }
    fallback = None;
}

wire_enum! {
    /// Payment gateway used for top-ups.
    pub enum PaymentSystem {
        None = "none" => "未启用",
        Codepay = "codepay" => "码支付",
        F2fpay = "f2fpay" => "支付宝F2F",
        Yftpay = "yftpay" => "YFT支付",
        Trimepay = "trimepay" => "TrimePay",
        Paymentwall = "paymentwall" => "PaymentWall",
    }
    fallback = None;
}

wire_enum! {
    /// Direction of a dashboard figure compared with the previous period.
    pub enum Trend {
        Positive = "positive" => "上升",
        Negative = "negative" => "下降",
        Neutral = "neutral" => "持平",
    }
    fallback = Neutral;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_from_str() {
        assert_eq!(OrderStatus::from("completed"), OrderStatus::Completed);
        assert_eq!(OrderStatus::from(" REFUNDED "), OrderStatus::Refunded);
        assert_eq!(OrderStatus::from("bogus"), OrderStatus::Pending);
    }

    #[test]
    fn test_order_status_display() {
        assert_eq!(OrderStatus::Failed.to_string(), "failed");
        assert_eq!(OrderStatus::Failed.label(), "失败");
    }

    #[test]
    fn test_ticket_status_serialization() {
        assert_eq!(
            serde_json::to_string(&TicketStatus::Closed).unwrap(),
            "\"closed\""
        );
        let parsed: TicketPriority = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(parsed, TicketPriority::Medium);
    }

    #[test]
    fn test_all_lists_every_variant_once() {
        assert_eq!(PaymentSystem::ALL.len(), 6);
        assert_eq!(PaymentSystem::ALL[2], PaymentSystem::F2fpay);
        for mode in RegisterMode::ALL {
            assert_eq!(RegisterMode::from(mode.as_str()), *mode);
        }
    }

    #[test]
    fn test_defaults_follow_fallback() {
        assert_eq!(MailDriver::default(), MailDriver::None);
        assert_eq!(CommandStatus::default(), CommandStatus::Running);
        assert_eq!(SettlementStatus::default(), SettlementStatus::Pending);
    }
}
