//! Sidebar navigation manifests for both consoles.

/// One link in the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub name: &'static str,
    pub href: &'static str,
    pub icon: &'static str,
}

/// Titled group of links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub items: &'static [NavItem],
}

const fn item(name: &'static str, href: &'static str, icon: &'static str) -> NavItem {
    NavItem { name, href, icon }
}

pub const USER_NAV: &[NavSection] = &[
    NavSection {
        title: "我的",
        items: &[
            item("用户面板", "/dashboard", "🏠"),
            item("邀请返利", "/dashboard/invite", "🎁"),
        ],
    },
    NavSection {
        title: "商店",
        items: &[
            item("捐赠充值", "/dashboard/topup", "💰"),
            item("套餐购买", "/dashboard/shop", "🛒"),
            item("购买记录", "/dashboard/purchases", "🕒"),
        ],
    },
    NavSection {
        title: "使用",
        items: &[
            item("节点列表", "/dashboard/nodes", "✈️"),
            item("媒体解锁", "/dashboard/unlock", "🛡️"),
            item("技术支持", "/dashboard/tickets", "💬"),
        ],
    },
    NavSection {
        title: "账户",
        items: &[
            item("账户信息", "/dashboard/profile", "👤"),
            item("个人设定", "/dashboard/settings", "⚙️"),
            item("帮助文档", "/dashboard/docs", "❓"),
            item("流量记录", "/dashboard/traffic", "📄"),
        ],
    },
];

pub const ADMIN_NAV: &[NavSection] = &[
    NavSection {
        title: "管理",
        items: &[
            item("仪表盘", "/admin", "📊"),
            item("公告管理", "/admin/announcements", "📢"),
            item("工单管理", "/admin/tickets", "🎫"),
            item("下发命令", "/admin/commands", "💻"),
        ],
    },
    NavSection {
        title: "节点",
        items: &[
            item("节点列表", "/admin/nodes", "🖥️"),
            item("节点调整", "/admin/nodes/adjustment", "🎚️"),
            item("流量记录", "/admin/nodes/traffic", "📈"),
            item("已封禁 IP", "/admin/nodes/banned", "🚫"),
            item("已解封 IP", "/admin/nodes/unbanned", "✅"),
        ],
    },
    NavSection {
        title: "用户",
        items: &[
            item("用户列表", "/admin/users", "👥"),
            item("中转规则", "/admin/users/relay", "🔁"),
            item("邀请与返利", "/admin/users/invite", "🧾"),
            item("登录记录", "/admin/users/login-history", "🕘"),
            item("在线 IP", "/admin/users/online-ip", "🌐"),
        ],
    },
    NavSection {
        title: "审计",
        items: &[
            item("审计规则", "/admin/audit/rules", "⚖️"),
            item("审计记录", "/admin/audit/logs", "📄"),
        ],
    },
    NavSection {
        title: "交易",
        items: &[
            item("充值记录", "/admin/transactions/deposit", "👛"),
            item("商品管理", "/admin/transactions/products", "🛍️"),
            item("优惠码", "/admin/transactions/coupons", "🏷️"),
            item("购买记录", "/admin/orders", "🛒"),
        ],
    },
    NavSection {
        title: "系统",
        items: &[item("系统设置", "/admin/settings", "⚙️")],
    },
];

/// Path without query, fragment or trailing slash. The root stays "/".
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let trimmed = path[..end].trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// A link is active only when its href is exactly the current path.
pub fn is_active(current_path: &str, href: &str) -> bool {
    normalize_path(current_path) == normalize_path(href)
}

/// The entry highlighted for `current_path`, if any.
pub fn active_item(sections: &[NavSection], current_path: &str) -> Option<NavItem> {
    sections
        .iter()
        .flat_map(|s| s.items.iter())
        .find(|i| is_active(current_path, i.href))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_items(sections: &[NavSection]) -> Vec<NavItem> {
        sections.iter().flat_map(|s| s.items.iter().copied()).collect()
    }

    #[test]
    fn test_each_href_highlights_exactly_one_entry() {
        for sections in [USER_NAV, ADMIN_NAV] {
            let items = all_items(sections);
            for target in &items {
                let active: Vec<&NavItem> = items
                    .iter()
                    .filter(|i| is_active(target.href, i.href))
                    .collect();
                assert_eq!(active, vec![target], "href {}", target.href);
            }
        }
    }

    #[test]
    fn test_index_link_not_active_on_child_pages() {
        assert!(!is_active("/admin/nodes", "/admin"));
        assert!(!is_active("/dashboard/shop", "/dashboard"));
        assert!(is_active("/admin/", "/admin"));
        assert!(is_active("/dashboard/shop?tab=1", "/dashboard/shop"));
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/admin/users/"), "/admin/users");
        assert_eq!(normalize_path("/a#frag"), "/a");
    }

    #[test]
    fn test_active_item_lookup() {
        let found = active_item(ADMIN_NAV, "/admin/users/relay");
        assert_eq!(found.map(|i| i.name), Some("中转规则"));
        assert_eq!(active_item(USER_NAV, "/auth/login"), None);
    }

    #[test]
    fn test_manifest_sizes() {
        assert_eq!(all_items(USER_NAV).len(), 12);
        assert_eq!(all_items(ADMIN_NAV).len(), 21);
    }
}
