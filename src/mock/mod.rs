//! Fixed demo data rendered by the consoles until a backend is wired in.
//!
//! Every function returns a fresh owned copy so pages can seed their local
//! state from it and mutate freely.

pub mod admin;
pub mod user;

/// Sidebar announcement shown in the subscriber console.
pub const SIDEBAR_NOTICE: &str = "新年特惠活动开启！所有套餐8折优惠，限时3天！";

pub const DASHBOARD_NOTICE_TITLE: &str = "🎉 新年特惠活动开启！";
pub const DASHBOARD_NOTICE_BODY: &str = "尊敬的用户，为感谢您的支持，所有套餐8折优惠，限时3天！活动期间充值还能获得额外20%的流量奖励。不要错过哦！";

/// Traffic granted by the daily check-in.
pub const CHECKIN_REWARD: &str = "1.5GB";

pub const ADMIN_LOAD_PERCENT: u8 = 32;
pub const PANEL_VERSION: &str = "v2.1.0";

/// Node groups listed on the node page, keyed by class level.
pub const NODE_GROUPS: &[(u8, &str)] = &[
    (1, "VIP 1 节点"),
    (2, "VIP 2 节点"),
    (3, "VIP 3 节点"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use spanel_model::{OrderStatus, TicketStatus};

    #[test]
    fn test_every_node_belongs_to_a_group() {
        for node in user::nodes() {
            assert!(
                NODE_GROUPS.iter().any(|(class, _)| *class == node.class),
                "node {} has class {}",
                node.name,
                node.class
            );
        }
        let vip1 = user::nodes().iter().filter(|n| n.class == 1).count();
        assert_eq!(vip1, 4);
    }

    #[test]
    fn test_user_ids_unique() {
        let mut ids: Vec<u32> = admin::users().iter().map(|u| u.id).collect();
        ids.dedup();
        assert_eq!(ids.len(), 5);
        assert_eq!(admin::users().iter().filter(|u| u.is_admin).count(), 1);
    }

    #[test]
    fn test_seeded_ticket_ids_precede_new_ones() {
        let max = user::tickets().iter().map(|t| t.id).max();
        assert_eq!(max, Some(1005));
        assert!(user::tickets()
            .iter()
            .any(|t| t.status == TicketStatus::Closed));
    }

    #[test]
    fn test_failed_purchase_has_reason() {
        for purchase in user::purchases() {
            match purchase.status {
                OrderStatus::Failed => {
                    assert!(purchase.failure_reason.is_some());
                    assert!(purchase.completed_at.is_none());
                }
                _ => assert!(purchase.completed_at.is_some()),
            }
        }
    }

    #[test]
    fn test_commission_ledger_credits_and_debits() {
        let ledger = user::commission_history();
        let debits = ledger.iter().filter(|r| !r.is_credit()).count();
        assert_eq!(debits, 1);
    }

    #[test]
    fn test_stat_card_values_grouped() {
        let cards = admin::stat_cards();
        assert_eq!(cards.len(), 8);
        assert_eq!(cards[0].value, "2,847");
        assert_eq!(cards[2].value, "¥12,850.5");
        assert_eq!(cards[3].value, "¥384,250");
        assert_eq!(cards[2].change, "+23.8%");
    }

    #[test]
    fn test_daily_traffic_newest_first() {
        let days = user::daily_traffic();
        assert_eq!(days.len(), 15);
        assert!(days.windows(2).all(|w| w[0].date > w[1].date));
    }

    #[test]
    fn test_product_listing() {
        let products = admin::products();
        assert_eq!(products.iter().filter(|p| !p.listed).count(), 1);
        assert_eq!(products[3].content.expire, None);
    }
}
