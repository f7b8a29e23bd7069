//! Client-side form validation.
//!
//! Each form has its own error enum; the `Display` text of an error is the
//! message shown to the user in the error toast or next to the field.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;
use thiserror::Error;

use spanel_model::{Coupon, RechargeTier};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Card key accepted by the mock top-up flow.
pub const TEST_COUPON: &str = "NEWYEAR2026";

/// Credit granted by an activated card key.
pub const COUPON_CREDIT: f64 = 20.0;

/// Smallest custom top-up amount.
pub const MIN_TOP_UP: f64 = 1.0;

static EMAIL_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").ok());

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|re| re.is_match(email))
}

// ----------------------------------------------------------------------------
// Password change
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordChangeError {
    #[error("请填写所有密码字段")]
    MissingFields,
    #[error("新密码和确认密码不匹配")]
    Mismatch,
    #[error("新密码长度至少为 8 位")]
    TooShort,
}

/// Checks run in order: every field filled, confirmation matches, length.
pub fn validate_password_change(
    current: &str,
    new: &str,
    confirm: &str,
) -> Result<(), PasswordChangeError> {
    if current.is_empty() || new.is_empty() || confirm.is_empty() {
        return Err(PasswordChangeError::MissingFields);
    }
    if new != confirm {
        return Err(PasswordChangeError::Mismatch);
    }
    if new.chars().count() < MIN_PASSWORD_LEN {
        return Err(PasswordChangeError::TooShort);
    }
    Ok(())
}

// ----------------------------------------------------------------------------
// Card keys and top-up
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CouponError {
    #[error("请输入卡密")]
    Empty,
    #[error("卡密无效或已过期")]
    Invalid,
}

/// Verifies a card key against [`TEST_COUPON`], ignoring case.
pub fn check_coupon(code: &str) -> Result<(), CouponError> {
    if code.trim().is_empty() {
        return Err(CouponError::Empty);
    }
    if code.eq_ignore_ascii_case(TEST_COUPON) {
        Ok(())
    } else {
        Err(CouponError::Invalid)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TopUpError {
    #[error("请选择或输入充值金额")]
    NoAmount,
    #[error("最低充值金额为 ¥1")]
    BelowMinimum,
}

/// Amount to charge: the selected preset, or else the parsed custom input.
pub fn resolve_top_up(preset: Option<u32>, custom: &str) -> Result<f64, TopUpError> {
    let amount = match preset {
        Some(amount) => f64::from(amount),
        None => custom.trim().parse::<f64>().unwrap_or(0.0),
    };
    if !amount.is_finite() || amount <= 0.0 {
        return Err(TopUpError::NoAmount);
    }
    if amount < MIN_TOP_UP {
        return Err(TopUpError::BelowMinimum);
    }
    Ok(amount)
}

/// Bonus of the tier whose amount matches exactly. A custom amount equal to
/// a tier earns that tier's bonus.
pub fn top_up_bonus(tiers: &[RechargeTier], amount: f64) -> u32 {
    tiers
        .iter()
        .find(|t| f64::from(t.amount) == amount)
        .map_or(0, |t| t.bonus)
}

// ----------------------------------------------------------------------------
// Shop
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PurchaseError {
    #[error("余额不足！需要 ¥{price}，当前余额 ¥{balance}")]
    InsufficientBalance { price: f64, balance: f64 },
}

pub fn check_affordable(price: f64, balance: f64) -> Result<(), PurchaseError> {
    if price > balance {
        Err(PurchaseError::InsufficientBalance { price, balance })
    } else {
        Ok(())
    }
}

/// How much more balance a package needs, 0 when affordable.
pub fn shortfall(price: f64, balance: f64) -> f64 {
    (price - balance).max(0.0)
}

// ----------------------------------------------------------------------------
// Tickets
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketError {
    #[error("请填写工单标题和内容")]
    MissingFields,
}

pub fn validate_ticket(title: &str, content: &str) -> Result<(), TicketError> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(TicketError::MissingFields);
    }
    Ok(())
}

// ----------------------------------------------------------------------------
// Registration and password reset
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegisterField {
    Name,
    Email,
    Password,
    ConfirmPassword,
    Terms,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error("请输入昵称")]
    NameRequired,
    #[error("请输入邮箱")]
    EmailRequired,
    #[error("请输入有效的邮箱地址")]
    EmailInvalid,
    #[error("请输入密码")]
    PasswordRequired,
    #[error("密码长度至少8位")]
    PasswordTooShort,
    #[error("两次密码输入不一致")]
    PasswordMismatch,
    #[error("请同意服务条款和隐私政策")]
    TermsNotAccepted,
}

impl RegisterError {
    pub fn field(&self) -> RegisterField {
        match self {
            Self::NameRequired => RegisterField::Name,
            Self::EmailRequired | Self::EmailInvalid => RegisterField::Email,
            Self::PasswordRequired | Self::PasswordTooShort => RegisterField::Password,
            Self::PasswordMismatch => RegisterField::ConfirmPassword,
            Self::TermsNotAccepted => RegisterField::Terms,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub invite_code: String,
    pub agreed_to_terms: bool,
}

impl RegisterForm {
    /// Every failing field, at most one error per field.
    pub fn validate(&self) -> Vec<RegisterError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(RegisterError::NameRequired);
        }

        if self.email.trim().is_empty() {
            errors.push(RegisterError::EmailRequired);
        } else if !is_valid_email(&self.email) {
            errors.push(RegisterError::EmailInvalid);
        }

        if self.password.is_empty() {
            errors.push(RegisterError::PasswordRequired);
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push(RegisterError::PasswordTooShort);
        }

        if self.password != self.confirm_password {
            errors.push(RegisterError::PasswordMismatch);
        }

        if !self.agreed_to_terms {
            errors.push(RegisterError::TermsNotAccepted);
        }

        errors
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResetError {
    #[error("请输入邮箱地址")]
    EmailRequired,
    #[error("请输入有效的邮箱地址")]
    EmailInvalid,
}

pub fn validate_reset_email(email: &str) -> Result<(), ResetError> {
    if email.trim().is_empty() {
        return Err(ResetError::EmailRequired);
    }
    if !is_valid_email(email.trim()) {
        return Err(ResetError::EmailInvalid);
    }
    Ok(())
}

// ----------------------------------------------------------------------------
// Admin forms
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdminFormError {
    #[error("请输入要解封的 IP 地址")]
    IpRequired,
    #[error("请输入用户 ID")]
    UserIdRequired,
    #[error("请输入优惠码额度")]
    CreditRequired,
    #[error("优惠码额度必须是 1-100 之间的整数")]
    CreditInvalid,
    #[error("请输入要执行的命令")]
    CommandRequired,
    #[error("请至少选择一个目标节点")]
    NodeRequired,
    #[error("请填写公告标题和内容")]
    AnnouncementIncomplete,
}

pub fn validate_command(command: &str, nodes: &[String]) -> Result<(), AdminFormError> {
    if command.trim().is_empty() {
        return Err(AdminFormError::CommandRequired);
    }
    if nodes.is_empty() {
        return Err(AdminFormError::NodeRequired);
    }
    Ok(())
}

/// Expiry choices offered by the coupon generator, in hours.
pub const COUPON_EXPIRY_HOURS: &[u32] = &[24, 72, 168, 720];

/// Input of the coupon generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CouponDraft {
    pub prefix: String,
    pub credit: String,
    pub expire_hours: u32,
    pub shop: String,
    pub uses_per_user: u32,
    pub onetime: bool,
}

impl Default for CouponDraft {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            credit: String::new(),
            expire_hours: 24,
            shop: String::new(),
            uses_per_user: 1,
            onetime: false,
        }
    }
}

impl CouponDraft {
    pub fn credit(&self) -> Result<u32, AdminFormError> {
        let raw = self.credit.trim();
        if raw.is_empty() {
            return Err(AdminFormError::CreditRequired);
        }
        match raw.parse::<u32>() {
            Ok(credit) if (1..=100).contains(&credit) => Ok(credit),
            _ => Err(AdminFormError::CreditInvalid),
        }
    }

    /// Builds the coupon: prefix (upper-cased) plus an 8 character random
    /// hex suffix. The expiry is counted from `now`.
    pub fn generate<R: Rng>(
        &self,
        id: u32,
        now: chrono::NaiveDateTime,
        rng: &mut R,
    ) -> Result<Coupon, AdminFormError> {
        let credit = self.credit()?;
        let suffix: [u8; 4] = rng.gen();
        let code = format!(
            "{}{}",
            self.prefix.trim().to_uppercase(),
            hex::encode_upper(suffix)
        );
        let expire = now + chrono::Duration::hours(i64::from(self.expire_hours));
        Ok(Coupon {
            id,
            code,
            expire: expire.format("%Y-%m-%d %H:%M:%S").to_string(),
            shop: self.shop.trim().to_string(),
            credit,
            uses_per_user: self.uses_per_user.max(1),
            onetime: self.onetime,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_password_change_order_of_checks() {
        assert_eq!(
            validate_password_change("", "abc", "abc"),
            Err(PasswordChangeError::MissingFields)
        );
        assert_eq!(
            validate_password_change("old", "abc", "abd"),
            Err(PasswordChangeError::Mismatch)
        );
        assert_eq!(
            validate_password_change("old", "short", "short"),
            Err(PasswordChangeError::TooShort)
        );
        assert_eq!(
            validate_password_change("old", "longenough", "longenough"),
            Ok(())
        );
    }

    #[test]
    fn test_password_error_messages() {
        assert_eq!(
            PasswordChangeError::TooShort.to_string(),
            "新密码长度至少为 8 位"
        );
        assert_eq!(
            PasswordChangeError::Mismatch.to_string(),
            "新密码和确认密码不匹配"
        );
    }

    #[test]
    fn test_coupon_matching_ignores_case() {
        assert_eq!(check_coupon("NEWYEAR2026"), Ok(()));
        assert_eq!(check_coupon("newyear2026"), Ok(()));
        assert_eq!(check_coupon("NEWYEAR2025"), Err(CouponError::Invalid));
        assert_eq!(check_coupon("   "), Err(CouponError::Empty));
        assert_eq!(CouponError::Empty.to_string(), "请输入卡密");
    }

    #[test]
    fn test_resolve_top_up() {
        assert_eq!(resolve_top_up(Some(50), ""), Ok(50.0));
        assert_eq!(resolve_top_up(None, "12.5"), Ok(12.5));
        assert_eq!(resolve_top_up(None, ""), Err(TopUpError::NoAmount));
        assert_eq!(resolve_top_up(None, "abc"), Err(TopUpError::NoAmount));
        assert_eq!(resolve_top_up(None, "-3"), Err(TopUpError::NoAmount));
        assert_eq!(resolve_top_up(None, "0.5"), Err(TopUpError::BelowMinimum));
    }

    #[test]
    fn test_top_up_bonus_matches_tier_amount() {
        let tiers = [
            RechargeTier { amount: 10, bonus: 0 },
            RechargeTier { amount: 100, bonus: 15 },
        ];
        assert_eq!(top_up_bonus(&tiers, 100.0), 15);
        assert_eq!(top_up_bonus(&tiers, 10.0), 0);
        assert_eq!(top_up_bonus(&tiers, 99.5), 0);
        assert_eq!(top_up_bonus(&tiers, 0.0), 0);
    }

    #[test]
    fn test_purchase_affordability() {
        assert_eq!(check_affordable(49.99, 128.5), Ok(()));
        let err = check_affordable(159.99, 128.5).unwrap_err();
        assert_eq!(err.to_string(), "余额不足！需要 ¥159.99，当前余额 ¥128.5");
        assert!((shortfall(159.99, 128.5) - 31.49).abs() < 1e-9);
        assert_eq!(shortfall(10.0, 128.5), 0.0);
    }

    #[test]
    fn test_ticket_requires_title_and_content() {
        assert_eq!(validate_ticket(" ", "body"), Err(TicketError::MissingFields));
        assert_eq!(validate_ticket("title", ""), Err(TicketError::MissingFields));
        assert_eq!(validate_ticket("title", "body"), Ok(()));
    }

    #[test]
    fn test_register_form_reports_each_field() {
        let form = RegisterForm {
            email: "not-an-email".to_string(),
            password: "short".to_string(),
            confirm_password: "other".to_string(),
            ..Default::default()
        };
        let errors = form.validate();
        assert_eq!(
            errors,
            vec![
                RegisterError::NameRequired,
                RegisterError::EmailInvalid,
                RegisterError::PasswordTooShort,
                RegisterError::PasswordMismatch,
                RegisterError::TermsNotAccepted,
            ]
        );
        assert_eq!(errors[1].field(), RegisterField::Email);
    }

    #[test]
    fn test_register_form_valid() {
        let form = RegisterForm {
            name: "demo".to_string(),
            email: "demo@example.com".to_string(),
            password: "password123".to_string(),
            confirm_password: "password123".to_string(),
            invite_code: String::new(),
            agreed_to_terms: true,
        };
        assert!(form.validate().is_empty());
    }

    #[test]
    fn test_reset_email() {
        assert_eq!(validate_reset_email(""), Err(ResetError::EmailRequired));
        assert_eq!(validate_reset_email("a@b"), Err(ResetError::EmailInvalid));
        assert_eq!(validate_reset_email("a@b.c"), Ok(()));
    }

    #[test]
    fn test_command_validation() {
        assert_eq!(
            validate_command("df -h", &[]),
            Err(AdminFormError::NodeRequired)
        );
        assert_eq!(
            validate_command(" ", &["香港 IPLC 01".to_string()]),
            Err(AdminFormError::CommandRequired)
        );
        assert!(validate_command("df -h", &["香港 IPLC 01".to_string()]).is_ok());
    }

    #[test]
    fn test_coupon_draft_generates_prefixed_code() {
        let draft = CouponDraft {
            prefix: "vip".to_string(),
            credit: "15".to_string(),
            expire_hours: 72,
            ..Default::default()
        };
        let now = chrono::NaiveDate::from_ymd_opt(2026, 2, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let coupon = draft.generate(5, now, &mut rng).unwrap();
        assert!(coupon.code.starts_with("VIP"));
        assert_eq!(coupon.code.len(), 3 + 8);
        assert_eq!(coupon.expire, "2026-02-04 10:00:00");
        assert_eq!(coupon.credit, 15);
        assert_eq!(coupon.uses_per_user, 1);
        assert!(coupon.applies_to_all());
    }

    #[test]
    fn test_coupon_draft_carries_usage_limits() {
        let draft = CouponDraft {
            credit: "20".to_string(),
            shop: " 1,2 ".to_string(),
            uses_per_user: 3,
            onetime: true,
            ..Default::default()
        };
        let now = chrono::NaiveDate::from_ymd_opt(2026, 2, 1)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        let coupon = draft.generate(6, now, &mut rng).unwrap();
        assert_eq!(coupon.uses_per_user, 3);
        assert!(coupon.onetime);
        assert_eq!(coupon.shop, "1,2");

        let zero = CouponDraft { uses_per_user: 0, ..draft };
        assert_eq!(zero.generate(7, now, &mut rng).unwrap().uses_per_user, 1);
    }

    #[test]
    fn test_coupon_draft_requires_credit() {
        let mut draft = CouponDraft::default();
        assert_eq!(draft.credit(), Err(AdminFormError::CreditRequired));
        draft.credit = "150".to_string();
        assert_eq!(draft.credit(), Err(AdminFormError::CreditInvalid));
    }
}
