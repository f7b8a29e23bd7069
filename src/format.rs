//! Display formatting for figures, dates and usage bars.
//!
//! Everything here is pure so it can be shared by the server render and the
//! WASM client and tested without a DOM.

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;

const BYTES_PER_GB: f64 = 1_073_741_824.0;
const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

static MARKDOWN_HEADING: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?m)^#\s+(.+)$").ok());

/// Rounds to `places` decimals with ties away from zero. `format!` alone
/// rounds exact ties to even.
fn round_half_up(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

/// Package traffic allowance. 0 means unlimited.
pub fn format_traffic(gb: u32) -> String {
    if gb == 0 {
        "不限流量".to_string()
    } else if gb >= 1024 {
        format!("{:.0} TB", round_half_up(f64::from(gb) / 1024.0, 0))
    } else {
        format!("{gb} GB")
    }
}

/// Package validity in days.
pub fn format_duration(days: u32) -> String {
    if days >= 365 {
        format!("{:.0} 年", round_half_up(f64::from(days) / 365.0, 0))
    } else if days >= 30 {
        format!("{:.0} 个月", round_half_up(f64::from(days) / 30.0, 0))
    } else {
        format!("{days} 天")
    }
}

/// Port speed limit. 1000 Mbps and above is shown as unlimited.
pub fn format_speed(mbps: u32) -> String {
    if mbps >= 1000 {
        "不限速".to_string()
    } else {
        format!("{mbps} Mbps")
    }
}

pub fn format_money(amount: f64) -> String {
    format!("{:.2}", round_half_up(amount, 2))
}

/// Inserts thousands separators into the integer part: `12850.5` -> `12,850.5`.
pub fn group_thousands(value: f64) -> String {
    let raw = value.to_string();
    let (sign, raw) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Byte count as GB with two decimals.
pub fn bytes_to_gb(bytes: u64) -> String {
    format!("{:.2}", round_half_up(bytes as f64 / BYTES_PER_GB, 2))
}

/// Used share of an allowance in percent, capped at 100. A zero allowance
/// reports 0.
pub fn traffic_percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    (used as f64 / total as f64 * 100.0).min(100.0)
}

/// Colour band for a usage bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Green,
    Yellow,
    Orange,
    Red,
}

impl Tone {
    /// Subscriber traffic bars: <50 green, <80 orange, else red.
    pub fn for_traffic(percent: f64) -> Self {
        if percent < 50.0 {
            Self::Green
        } else if percent < 80.0 {
            Self::Orange
        } else {
            Self::Red
        }
    }

    /// Node bandwidth bars.
    pub fn for_bandwidth(percent: f64) -> Self {
        if percent >= 80.0 {
            Self::Red
        } else if percent >= 60.0 {
            Self::Orange
        } else {
            Self::Green
        }
    }

    /// Per-user traffic in the admin user table.
    pub fn for_user_traffic(percent: f64) -> Self {
        if percent >= 90.0 {
            Self::Red
        } else if percent >= 70.0 {
            Self::Orange
        } else if percent >= 50.0 {
            Self::Yellow
        } else {
            Self::Green
        }
    }

    pub fn bar_class(self) -> &'static str {
        match self {
            Self::Green => "bg-green-500",
            Self::Yellow => "bg-yellow-500",
            Self::Orange => "bg-orange-500",
            Self::Red => "bg-red-500",
        }
    }

    pub fn text_class(self) -> &'static str {
        match self {
            Self::Green => "text-green-600",
            Self::Yellow => "text-yellow-600",
            Self::Orange => "text-orange-600",
            Self::Red => "text-red-600",
        }
    }
}

fn parse_iso(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, ISO_FORMAT).ok()
}

/// `2025-12-31T23:59:59` -> `2025/12/31`. `None` means the date never
/// arrives and renders as "永久". Unparseable input is shown unchanged.
pub fn format_date(value: Option<&str>) -> String {
    match value {
        None => "永久".to_string(),
        Some(raw) => parse_iso(raw)
            .map(|dt| dt.format("%Y/%-m/%-d").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

/// `2026-02-01T10:30:00` -> `02/01 10:30`. Missing values render as "-".
pub fn format_short_datetime(value: Option<&str>) -> String {
    match value {
        None => "-".to_string(),
        Some(raw) => parse_iso(raw)
            .map(|dt| dt.format("%m/%d %H:%M").to_string())
            .unwrap_or_else(|| raw.to_string()),
    }
}

/// `2026-02-02T10:30:00` -> `2026/2/2 10:30:00`.
pub fn format_full_datetime(value: &str) -> String {
    parse_iso(value)
        .map(|dt| dt.format("%Y/%-m/%-d %H:%M:%S").to_string())
        .unwrap_or_else(|| value.to_string())
}

/// Flag emoji for a two-letter country code, e.g. "HK" -> 🇭🇰.
pub fn country_flag(code: &str) -> String {
    code.trim()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .filter_map(|c| char::from_u32(0x1F1E6 + (c.to_ascii_uppercase() as u32 - 'A' as u32)))
        .collect()
}

/// Title of a markdown document: the text of its first `# ` heading.
pub fn markdown_title(markdown: &str) -> String {
    MARKDOWN_HEADING
        .as_ref()
        .and_then(|re| re.captures(markdown))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| "无标题".to_string())
}

/// First `max` characters followed by "..." when the text is longer.
pub fn preview(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let head: String = text.chars().take(max).collect();
    format!("{head}...")
}

/// One-click import link understood by Clash-compatible clients.
pub fn clash_import_link(subscription_url: &str, name: &str) -> String {
    format!(
        "clash://install-config?url={}&name={}",
        urlencoding::encode(subscription_url),
        urlencoding::encode(name)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clash_import_link_encodes_query() {
        assert_eq!(
            clash_import_link("https://spanel.example.com/link/abc?mu=2", "sPanel"),
            "clash://install-config?url=https%3A%2F%2Fspanel.example.com%2Flink%2Fabc%3Fmu%3D2&name=sPanel"
        );
    }

    #[test]
    fn test_format_traffic() {
        assert_eq!(format_traffic(0), "不限流量");
        assert_eq!(format_traffic(300), "300 GB");
        assert_eq!(format_traffic(1074), "1 TB");
        assert_eq!(format_traffic(3222), "3 TB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(7), "7 天");
        assert_eq!(format_duration(30), "1 个月");
        assert_eq!(format_duration(90), "3 个月");
        assert_eq!(format_duration(365), "1 年");
    }

    #[test]
    fn test_exact_halves_round_up() {
        assert_eq!(format_traffic(2560), "3 TB");
        assert_eq!(format_traffic(1536), "2 TB");
        assert_eq!(format_duration(75), "3 个月");
        assert_eq!(format_duration(45), "2 个月");
        assert_eq!(format_duration(547), "1 年");
        assert_eq!(format_money(0.125), "0.13");
        assert_eq!(format_money(12.5), "12.50");
    }

    #[test]
    fn test_format_speed() {
        assert_eq!(format_speed(500), "500 Mbps");
        assert_eq!(format_speed(1000), "不限速");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(2847.0), "2,847");
        assert_eq!(group_thousands(12850.5), "12,850.5");
        assert_eq!(group_thousands(384250.0), "384,250");
        assert_eq!(group_thousands(15.0), "15");
        assert_eq!(group_thousands(-1200.0), "-1,200");
    }

    #[test]
    fn test_bytes_to_gb() {
        assert_eq!(bytes_to_gb(107_374_182_400), "100.00");
        assert_eq!(bytes_to_gb(5_368_709_120), "5.00");
        assert_eq!(bytes_to_gb(0), "0.00");
    }

    #[test]
    fn test_traffic_percent_caps_and_handles_zero() {
        assert_eq!(traffic_percent(50, 100), 50.0);
        assert_eq!(traffic_percent(300, 100), 100.0);
        assert_eq!(traffic_percent(10, 0), 0.0);
    }

    #[test]
    fn test_tone_thresholds() {
        assert_eq!(Tone::for_traffic(49.9), Tone::Green);
        assert_eq!(Tone::for_traffic(50.0), Tone::Orange);
        assert_eq!(Tone::for_traffic(80.0), Tone::Red);

        assert_eq!(Tone::for_bandwidth(59.9), Tone::Green);
        assert_eq!(Tone::for_bandwidth(67.8), Tone::Orange);
        assert_eq!(Tone::for_bandwidth(80.0), Tone::Red);

        assert_eq!(Tone::for_user_traffic(10.0), Tone::Green);
        assert_eq!(Tone::for_user_traffic(50.0), Tone::Yellow);
        assert_eq!(Tone::for_user_traffic(75.0), Tone::Orange);
        assert_eq!(Tone::for_user_traffic(90.0), Tone::Red);
        assert_eq!(Tone::Red.bar_class(), "bg-red-500");
    }

    #[test]
    fn test_format_dates() {
        assert_eq!(format_date(Some("2025-12-31T23:59:59")), "2025/12/31");
        assert_eq!(format_date(Some("2024-06-05T10:30:00")), "2024/6/5");
        assert_eq!(format_date(None), "永久");
        assert_eq!(format_short_datetime(Some("2026-02-01T10:30:00")), "02/01 10:30");
        assert_eq!(format_short_datetime(None), "-");
        assert_eq!(format_full_datetime("2026-02-02T08:45:00"), "2026/2/2 08:45:00");
        assert_eq!(format_full_datetime("not a date"), "not a date");
    }

    #[test]
    fn test_country_flag() {
        assert_eq!(country_flag("HK"), "🇭🇰");
        assert_eq!(country_flag("jp"), "🇯🇵");
    }

    #[test]
    fn test_markdown_title() {
        assert_eq!(markdown_title("# 系统维护通知\n\n正文"), "系统维护通知");
        assert_eq!(markdown_title("intro\n# Second\n"), "Second");
        assert_eq!(markdown_title("no heading here"), "无标题");
        assert_eq!(markdown_title("## only h2"), "无标题");
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("abcdef", 3), "abc...");
    }
}
