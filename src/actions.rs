//! User-triggered flows shared by the pages.
//!
//! Each flow validates its input, reports rejections as an error toast, calls
//! the [`PanelService`] when there is something to submit, and announces the
//! outcome. The return value tells the page how to update its local state;
//! `None` or `false` means nothing changed.

use chrono::NaiveDateTime;
use rand::Rng;

use spanel_model::{
    BannedIp, CommandRecord, CommandStatus, Coupon, NotificationPrefs, Package, PaymentMethod,
    RechargeTier, RelayRule, SiteAnnouncement, Ticket,
};

use crate::forms::{
    self, check_affordable, check_coupon, resolve_top_up, validate_command,
    validate_password_change, validate_reset_email, validate_ticket, AdminFormError, CouponDraft,
};
use crate::mock::CHECKIN_REWARD;
use crate::service::PanelService;
use crate::toast::{Toast, ToastSink, LONG_DURATION_MS};

const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

fn reject(toasts: &dyn ToastSink, err: impl std::fmt::Display) {
    tracing::debug!(%err, "Rejected form input");
    toasts.error(&err.to_string());
}

// ----------------------------------------------------------------------------
// Subscriber console
// ----------------------------------------------------------------------------

/// Daily check-in. Returns whether the check-in counted.
pub fn check_in(toasts: &dyn ToastSink, already_checked_in: bool) -> bool {
    if already_checked_in {
        toasts.error("今日已签到，请明天再来！");
        return false;
    }
    toasts.success(&format!("签到成功！获得 {CHECKIN_REWARD} 流量奖励 🎉"));
    true
}

/// Buys `package` from the account balance. Returns the remaining balance.
pub async fn purchase_package(
    panel: &dyn PanelService,
    toasts: &dyn ToastSink,
    package: &Package,
    balance: f64,
) -> Option<f64> {
    if let Err(err) = check_affordable(package.price, balance) {
        reject(toasts, err);
        return None;
    }
    if let Err(err) = panel.purchase_package(package.id, package.price).await {
        reject(toasts, err);
        return None;
    }
    let remaining = balance - package.price;
    toasts.push(
        Toast::success(format!("购买成功！已开通 {}", package.name))
            .with_description(format!("消费 ¥{}，剩余余额 ¥{remaining:.2}", package.price))
            .with_duration(LONG_DURATION_MS),
    );
    Some(remaining)
}

/// Charges a top-up through `method`. The amount is the selected preset or
/// the custom input. Returns the amount credited including any tier bonus.
pub async fn pay_top_up(
    panel: &dyn PanelService,
    toasts: &dyn ToastSink,
    method: PaymentMethod,
    preset: Option<u32>,
    custom: &str,
    tiers: &[RechargeTier],
) -> Option<f64> {
    let amount = match resolve_top_up(preset, custom) {
        Ok(amount) => amount,
        Err(err) => {
            reject(toasts, err);
            return None;
        }
    };

    toasts.push(
        Toast::success(format!("正在跳转{}...", method.label()))
            .with_description(format!("充值金额: ¥{amount}")),
    );
    if let Err(err) = panel.pay_top_up(method, amount).await {
        reject(toasts, err);
        return None;
    }
    toasts.push(
        Toast::success("支付成功！")
            .with_description(format!("已充值 ¥{amount} 到账户"))
            .with_duration(LONG_DURATION_MS),
    );
    Some(amount + f64::from(forms::top_up_bonus(tiers, amount)))
}

/// Checks a card key locally. Returns whether it was accepted.
pub fn apply_card_key(toasts: &dyn ToastSink, code: &str) -> bool {
    match check_coupon(code) {
        Ok(()) => {
            toasts.push(
                Toast::success("卡密激活成功！")
                    .with_description(format!("已获得 ¥{} 充值金额", forms::COUPON_CREDIT)),
            );
            true
        }
        Err(err) => {
            reject(toasts, err);
            false
        }
    }
}

/// Redeems a card key. Returns the new balance.
pub async fn activate_card_key(
    panel: &dyn PanelService,
    toasts: &dyn ToastSink,
    code: &str,
    balance: f64,
) -> Option<f64> {
    if code.trim().is_empty() {
        reject(toasts, forms::CouponError::Empty);
        return None;
    }
    let credit = match panel.activate_card_key(code.trim()).await {
        Ok(credit) => credit,
        Err(err) => {
            reject(toasts, err);
            return None;
        }
    };
    let new_balance = balance + credit;
    toasts.push(
        Toast::success("充值成功！")
            .with_description(format!("余额已更新为 ¥{new_balance:.2}"))
            .with_duration(LONG_DURATION_MS),
    );
    Some(new_balance)
}

pub async fn change_password(
    panel: &dyn PanelService,
    toasts: &dyn ToastSink,
    current: &str,
    new: &str,
    confirm: &str,
) -> bool {
    if let Err(err) = validate_password_change(current, new, confirm) {
        reject(toasts, err);
        return false;
    }
    if let Err(err) = panel.change_password(current, new).await {
        reject(toasts, err);
        return false;
    }
    toasts.push(Toast::success("密码修改成功").with_description("请使用新密码重新登录"));
    true
}

/// Toast after the dashboard copied the subscription link.
pub fn subscription_copied(toasts: &dyn ToastSink) {
    toasts.success("订阅链接已复制到剪贴板！");
}

async fn rotate_subscription(
    panel: &dyn PanelService,
    toasts: &dyn ToastSink,
    done: Toast,
) -> Option<String> {
    match panel.reset_subscription().await {
        Ok(uuid) => {
            toasts.push(done);
            Some(uuid)
        }
        Err(err) => {
            reject(toasts, err);
            None
        }
    }
}

/// Rotates the subscription from the settings page. Returns the new UUID.
pub async fn reset_subscription(
    panel: &dyn PanelService,
    toasts: &dyn ToastSink,
) -> Option<String> {
    let done = Toast::success("订阅链接已重置").with_description("请更新所有设备的订阅配置");
    rotate_subscription(panel, toasts, done).await
}

/// Dashboard shortcut for [`reset_subscription`].
pub async fn reset_subscription_link(
    panel: &dyn PanelService,
    toasts: &dyn ToastSink,
) -> Option<String> {
    rotate_subscription(panel, toasts, Toast::success("订阅链接已重置！请重新获取。")).await
}

pub async fn save_notifications(
    panel: &dyn PanelService,
    toasts: &dyn ToastSink,
    prefs: &NotificationPrefs,
) -> bool {
    match panel.save_notifications(prefs).await {
        Ok(()) => {
            toasts.success("通知设置已保存");
            true
        }
        Err(err) => {
            reject(toasts, err);
            false
        }
    }
}

/// Opens a ticket. Returns the ticket to append to the local list.
pub async fn submit_ticket(
    panel: &dyn PanelService,
    toasts: &dyn ToastSink,
    title: &str,
    content: &str,
    now: NaiveDateTime,
) -> Option<Ticket> {
    if let Err(err) = validate_ticket(title, content) {
        reject(toasts, err);
        return None;
    }
    let id = match panel.submit_ticket(title.trim(), content.trim()).await {
        Ok(id) => id,
        Err(err) => {
            reject(toasts, err);
            return None;
        }
    };
    toasts.push(Toast::success("工单提交成功").with_description("我们的客服团队会尽快回复您"));
    let created_at = now.format("%Y-%m-%d %H:%M").to_string();
    Some(Ticket::submitted(id, title, content, &created_at))
}

/// Sends a password reset mail. Returns whether the page should switch to
/// its "sent" state.
pub async fn request_password_reset(
    panel: &dyn PanelService,
    toasts: &dyn ToastSink,
    email: &str,
) -> bool {
    if let Err(err) = validate_reset_email(email) {
        reject(toasts, err);
        return false;
    }
    match panel.request_password_reset(email.trim()).await {
        Ok(()) => true,
        Err(err) => {
            reject(toasts, err);
            false
        }
    }
}

// ----------------------------------------------------------------------------
// Administrator console
// ----------------------------------------------------------------------------

/// Dispatches `command` to `nodes`. Returns the history entry, which stays
/// `running` until the node reports back.
pub async fn execute_command(
    panel: &dyn PanelService,
    toasts: &dyn ToastSink,
    command: &str,
    nodes: &[String],
    id: u32,
    now: NaiveDateTime,
) -> Option<CommandRecord> {
    if let Err(err) = validate_command(command, nodes) {
        reject(toasts, err);
        return None;
    }
    if let Err(err) = panel.execute_command(command.trim(), nodes).await {
        reject(toasts, err);
        return None;
    }
    toasts.success(&format!("命令已下发到 {} 个节点", nodes.len()));
    Some(CommandRecord {
        id,
        command: command.trim().to_string(),
        node_target: nodes.join(", "),
        status: CommandStatus::Running,
        result: None,
        executed_at: now.format(DATETIME_FORMAT).to_string(),
        execution_time: None,
    })
}

/// Lifts a ban. Every row for `ip` is removed; returns how many were.
pub fn unban_ip(toasts: &dyn ToastSink, banned: &mut Vec<BannedIp>, ip: &str) -> usize {
    let ip = ip.trim();
    if ip.is_empty() {
        reject(toasts, AdminFormError::IpRequired);
        return 0;
    }
    let before = banned.len();
    banned.retain(|row| row.ip != ip);
    let removed = before - banned.len();
    if removed == 0 {
        toasts.info(&format!("IP {ip} 当前未被封禁"));
    } else {
        toasts.success(&format!("已解封 IP: {ip}"));
    }
    removed
}

/// Relay rules owned by `user_id`, plus the rules that apply to everyone.
pub fn search_relay_rules(
    toasts: &dyn ToastSink,
    rules: &[RelayRule],
    user_id: &str,
) -> Option<Vec<RelayRule>> {
    let raw = user_id.trim();
    if raw.is_empty() {
        reject(toasts, AdminFormError::UserIdRequired);
        return None;
    }
    let Ok(user_id) = raw.parse::<u32>() else {
        reject(toasts, AdminFormError::UserIdRequired);
        return None;
    };
    let found: Vec<RelayRule> = rules
        .iter()
        .filter(|r| r.user_id == user_id || r.user_id == 0)
        .cloned()
        .collect();
    toasts.info(&format!("用户 ID {user_id} 共有 {} 条中转规则", found.len()));
    Some(found)
}

/// Generates a coupon from the draft. Returns the coupon to append.
pub fn generate_coupon<R: Rng>(
    toasts: &dyn ToastSink,
    draft: &CouponDraft,
    id: u32,
    now: NaiveDateTime,
    rng: &mut R,
) -> Option<Coupon> {
    match draft.generate(id, now, rng) {
        Ok(coupon) => {
            toasts.success(&format!("优惠码 {} 已生成", coupon.code));
            Some(coupon)
        }
        Err(err) => {
            reject(toasts, err);
            None
        }
    }
}

/// Builds a new active site announcement.
pub fn add_site_announcement(
    toasts: &dyn ToastSink,
    title: &str,
    content: &str,
    id: u64,
    now: NaiveDateTime,
) -> Option<SiteAnnouncement> {
    if title.trim().is_empty() || content.trim().is_empty() {
        reject(toasts, AdminFormError::AnnouncementIncomplete);
        return None;
    }
    toasts.success("公告已发布");
    Some(SiteAnnouncement {
        id,
        title: title.trim().to_string(),
        content: content.trim().to_string(),
        is_active: true,
        created_at: now.format(DATETIME_FORMAT).to_string(),
    })
}

/// Next id for a locally appended record.
pub fn next_id<T>(items: &[T], id_of: impl Fn(&T) -> u32) -> u32 {
    items.iter().map(id_of).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;
    use crate::service::testing::CountingService;
    use crate::toast::testing::RecordingSink;
    use crate::toast::ToastLevel;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn now() -> NaiveDateTime {
        chrono::NaiveDate::from_ymd_opt(2026, 2, 2)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .unwrap()
    }

    #[test]
    fn test_second_check_in_is_rejected() {
        let sink = RecordingSink::default();
        assert!(check_in(&sink, false));
        assert!(!check_in(&sink, true));
        assert_eq!(
            sink.titles(),
            vec!["签到成功！获得 1.5GB 流量奖励 🎉", "今日已签到，请明天再来！"]
        );
    }

    #[tokio::test]
    async fn test_password_mismatch_never_reaches_service() {
        let service = CountingService::default();
        let sink = RecordingSink::default();
        let ok = change_password(&service, &sink, "old-pass", "newpassword", "newpassw0rd").await;
        assert!(!ok);
        assert_eq!(service.call_count(), 0);
        assert_eq!(sink.titles(), vec!["新密码和确认密码不匹配"]);
        assert_eq!(sink.errors(), 1);
    }

    #[tokio::test]
    async fn test_password_change_success() {
        let service = CountingService::default();
        let sink = RecordingSink::default();
        assert!(change_password(&service, &sink, "old", "longenough", "longenough").await);
        assert_eq!(service.call_count(), 1);
        let toast = sink.last().unwrap();
        assert_eq!(toast.title, "密码修改成功");
        assert_eq!(toast.description.as_deref(), Some("请使用新密码重新登录"));
    }

    #[tokio::test]
    async fn test_purchase_rejects_when_balance_short() {
        let service = CountingService::default();
        let sink = RecordingSink::default();
        let packages = mock::user::packages();
        let flagship = &packages[3];

        let result = purchase_package(&service, &sink, flagship, mock::user::BALANCE).await;
        assert_eq!(result, None);
        assert_eq!(service.call_count(), 0);
        assert!(sink.titles()[0].starts_with("余额不足！"));
    }

    #[tokio::test]
    async fn test_purchase_reports_remaining_balance() {
        let service = CountingService::default();
        let sink = RecordingSink::default();
        let packages = mock::user::packages();

        let remaining = purchase_package(&service, &sink, &packages[1], 128.5).await;
        assert_eq!(remaining.map(|r| (r * 100.0).round()), Some(7851.0));
        let toast = sink.last().unwrap();
        assert_eq!(toast.title, "购买成功！已开通 季度标准套餐");
        assert_eq!(
            toast.description.as_deref(),
            Some("消费 ¥49.99，剩余余额 ¥78.51")
        );
        assert_eq!(toast.duration_ms, LONG_DURATION_MS);
    }

    #[tokio::test]
    async fn test_service_failure_surfaces_as_error_toast() {
        let service = CountingService::failing();
        let sink = RecordingSink::default();
        assert!(!save_notifications(&service, &sink, &NotificationPrefs::default()).await);
        assert_eq!(sink.titles(), vec!["服务暂时不可用，请稍后再试"]);
    }

    #[tokio::test]
    async fn test_subscription_toasts_differ_by_page() {
        let service = CountingService::default();
        let sink = RecordingSink::default();

        subscription_copied(&sink);
        assert!(reset_subscription_link(&service, &sink).await.is_some());
        assert!(reset_subscription(&service, &sink).await.is_some());

        assert_eq!(
            sink.titles(),
            vec!["订阅链接已复制到剪贴板！", "订阅链接已重置！请重新获取。", "订阅链接已重置"]
        );
        assert_eq!(service.call_count(), 2);
    }

    #[tokio::test]
    async fn test_top_up_validation_and_bonus() {
        let service = CountingService::default();
        let sink = RecordingSink::default();
        let tiers = mock::user::recharge_tiers();

        let none = pay_top_up(&service, &sink, PaymentMethod::Alipay, None, "", &tiers).await;
        assert_eq!(none, None);
        let low = pay_top_up(&service, &sink, PaymentMethod::Alipay, None, "0.5", &tiers).await;
        assert_eq!(low, None);
        assert_eq!(sink.titles(), vec!["请选择或输入充值金额", "最低充值金额为 ¥1"]);
        assert_eq!(service.call_count(), 0);

        let paid = pay_top_up(&service, &sink, PaymentMethod::Wechat, Some(100), "", &tiers).await;
        assert_eq!(paid, Some(115.0));
        assert_eq!(sink.last().unwrap().title, "支付成功！");
        assert_eq!(service.call_count(), 1);

        let custom = pay_top_up(&service, &sink, PaymentMethod::Alipay, None, "100", &tiers).await;
        assert_eq!(custom, Some(115.0));
        assert_eq!(service.call_count(), 2);
    }

    #[test]
    fn test_card_key_apply() {
        let sink = RecordingSink::default();
        assert!(apply_card_key(&sink, "newyear2026"));
        assert!(!apply_card_key(&sink, "WRONG"));
        assert!(!apply_card_key(&sink, "  "));
        assert_eq!(
            sink.titles(),
            vec!["卡密激活成功！", "卡密无效或已过期", "请输入卡密"]
        );
    }

    #[tokio::test]
    async fn test_card_key_activation_credits_balance() {
        let service = CountingService::default();
        let sink = RecordingSink::default();
        let balance = activate_card_key(&service, &sink, "NEWYEAR2026", 128.5).await;
        assert_eq!(balance, Some(148.5));
        assert_eq!(
            sink.last().unwrap().description.as_deref(),
            Some("余额已更新为 ¥148.50")
        );
    }

    #[tokio::test]
    async fn test_ticket_submission_builds_open_ticket() {
        let service = CountingService::default();
        let sink = RecordingSink::default();

        assert!(submit_ticket(&service, &sink, " ", "body", now()).await.is_none());
        assert_eq!(service.call_count(), 0);

        let ticket = submit_ticket(&service, &sink, "无法连接", "详情", now())
            .await
            .unwrap();
        assert_eq!(ticket.id, 2000);
        assert_eq!(ticket.status, spanel_model::TicketStatus::Open);
        assert_eq!(ticket.created_at, "2026-02-02 12:00");
        assert_eq!(sink.last().unwrap().title, "工单提交成功");
    }

    #[tokio::test]
    async fn test_password_reset_requires_valid_email() {
        let service = CountingService::default();
        let sink = RecordingSink::default();
        assert!(!request_password_reset(&service, &sink, "").await);
        assert!(!request_password_reset(&service, &sink, "not-an-email").await);
        assert!(request_password_reset(&service, &sink, "user@example.com").await);
        assert_eq!(service.call_count(), 1);
        assert_eq!(sink.errors(), 2);
    }

    #[tokio::test]
    async fn test_execute_command_needs_command_and_node() {
        let service = CountingService::default();
        let sink = RecordingSink::default();
        let nodes = vec!["香港 IPLC 01".to_string(), "新加坡 04".to_string()];

        assert!(execute_command(&service, &sink, "uptime", &[], 5, now()).await.is_none());
        assert!(execute_command(&service, &sink, "  ", &nodes, 5, now()).await.is_none());
        assert_eq!(service.call_count(), 0);

        let record = execute_command(&service, &sink, "uptime", &nodes, 5, now())
            .await
            .unwrap();
        assert_eq!(record.status, CommandStatus::Running);
        assert_eq!(record.node_target, "香港 IPLC 01, 新加坡 04");
        assert_eq!(record.executed_at, "2026-02-02T12:00:00");
    }

    #[test]
    fn test_unban_removes_matching_rows() {
        let sink = RecordingSink::default();
        let mut banned = mock::admin::banned_ips();

        assert_eq!(unban_ip(&sink, &mut banned, ""), 0);
        assert_eq!(sink.titles(), vec!["请输入要解封的 IP 地址"]);

        assert_eq!(unban_ip(&sink, &mut banned, " 10.0.0.50 "), 1);
        assert_eq!(banned.len(), 3);
        assert_eq!(unban_ip(&sink, &mut banned, "10.0.0.50"), 0);
        assert_eq!(sink.last().unwrap().level, ToastLevel::Info);
    }

    #[test]
    fn test_relay_search_includes_global_rules() {
        let sink = RecordingSink::default();
        let rules = mock::admin::relay_rules();
        assert!(search_relay_rules(&sink, &rules, "").is_none());
        let found = search_relay_rules(&sink, &rules, "1001").unwrap();
        let ids: Vec<u32> = found.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_coupon_generation_requires_credit() {
        let sink = RecordingSink::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut draft = CouponDraft::default();
        assert!(generate_coupon(&sink, &draft, 5, now(), &mut rng).is_none());
        assert_eq!(sink.titles(), vec!["请输入优惠码额度"]);

        draft.prefix = "vip".into();
        draft.credit = "15".into();
        let coupon = generate_coupon(&sink, &draft, 5, now(), &mut rng).unwrap();
        assert!(coupon.code.starts_with("VIP"));
        assert_eq!(coupon.code.len(), 11);
        assert_eq!(coupon.expire, "2026-02-03 12:00:00");
    }

    #[test]
    fn test_announcement_requires_title_and_content() {
        let sink = RecordingSink::default();
        assert!(add_site_announcement(&sink, "标题", " ", 3, now()).is_none());
        let ann = add_site_announcement(&sink, "标题", "内容", 3, now()).unwrap();
        assert!(ann.is_active);
        assert_eq!(sink.titles(), vec!["请填写公告标题和内容", "公告已发布"]);
    }

    #[test]
    fn test_next_id() {
        let coupons = mock::admin::coupons();
        assert_eq!(next_id(&coupons, |c| c.id), 5);
        let empty: Vec<Coupon> = Vec::new();
        assert_eq!(next_id(&empty, |c| c.id), 1);
    }
}
