//! Traffic history: totals, the quota bar and daily records.

use dioxus::prelude::*;

use spanel_model::{DailyTraffic, TrafficStats};

use crate::app::components::{
    Badge, BadgeVariant, Card, PageHeader, Table, TableBody, TableCell, TableHead, TableHeader,
    TableRow, TitledCard, UsageBar,
};
use crate::format::Tone;
use crate::mock;

const NOTES: &[&str] = &[
    "流量统计每 5 分钟更新一次，可能有短暂延迟",
    "上传和下载流量都会计入总流量使用量",
    "套餐到期后流量会重置，请注意及时续费",
    "建议每日流量使用控制在 3GB 以内，避免超出套餐限额",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Period {
    Week,
    Month,
}

impl Period {
    fn days(self) -> usize {
        match self {
            Self::Week => 7,
            Self::Month => 15,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Week => "最近 7 天",
            Self::Month => "最近 15 天",
        }
    }
}

fn recent(records: &[DailyTraffic], period: Period) -> &[DailyTraffic] {
    &records[..period.days().min(records.len())]
}

fn usage_percent(stats: &TrafficStats) -> f64 {
    if stats.total_limit <= 0.0 {
        return 0.0;
    }
    stats.total_used / stats.total_limit * 100.0
}

fn gb(value: f64) -> String {
    format!("{value:.2} GB")
}

#[component]
pub fn Traffic() -> Element {
    let stats = use_signal(mock::user::traffic_stats);
    let records = use_signal(mock::user::daily_traffic);
    let mut period = use_signal(|| Period::Week);

    let s = stats();
    let percent = usage_percent(&s);
    let tone = Tone::for_traffic(percent);
    let percent_text = format!("{percent:.1}%");
    let percent_class = tone.text_class();
    let half_limit = format!("{:.0} GB", s.total_limit / 2.0);
    let rows = recent(&records.read(), period()).to_vec();
    let used_text = gb(s.total_used);
    let limit_text = gb(s.total_limit);

    rsx! {
        div { class: "space-y-6",
            PageHeader { title: "流量记录", subtitle: "查看您的流量使用情况和历史记录" }

            div { class: "grid grid-cols-1 gap-6 md:grid-cols-4",
                Figure { tint: "blue", label: "已用流量", value: gb(s.total_used), icon: "💽" }
                Figure { tint: "green", label: "剩余流量", value: gb(s.total_limit - s.total_used), icon: "📶" }
                Figure { tint: "purple", label: "今日使用", value: gb(s.today_used), icon: "📊" }
                Figure { tint: "orange", label: "日均使用", value: gb(s.week_average), icon: "📈" }
            }

            TitledCard { title: "总流量使用情况",
                div { class: "space-y-4",
                    div {
                        div { class: "mb-2 flex items-center justify-between",
                            span { class: "text-sm text-gray-600",
                                "已使用 {used_text} / 总计 {limit_text}"
                            }
                            span { class: "text-lg font-bold {percent_class}", "{percent_text}" }
                        }
                        UsageBar { percent, bar_class: tone.bar_class(), height: "h-4" }
                        div { class: "mt-2 flex items-center justify-between text-xs text-gray-500",
                            span { "0 GB" }
                            span { "{half_limit}" }
                            span { "{s.total_limit} GB" }
                        }
                    }
                    div { class: "grid grid-cols-2 gap-4 border-t border-gray-200 pt-4",
                        Direction { tint: "blue", icon: "⬆", label: "今日上传", value: gb(s.today_upload) }
                        Direction { tint: "green", icon: "⬇", label: "今日下载", value: gb(s.today_download) }
                    }
                }
            }

            Card {
                div { class: "flex items-center justify-between p-6 pb-3",
                    h3 { class: "text-lg font-semibold text-gray-900", "每日流量记录" }
                    div { class: "flex gap-2",
                        for option in [Period::Week, Period::Month] {
                            {
                                let label = option.label();
                                rsx! {
                                    button {
                                        key: "{label}",
                                        r#type: "button",
                                        onclick: move |_| period.set(option),
                                        Badge { variant: if_active(period() == option), class: "cursor-pointer", "{label}" }
                                    }
                                }
                            }
                        }
                    }
                }
                div { class: "p-6 pt-3",
                    Table {
                        TableHeader {
                            TableRow {
                                TableHead { "日期" }
                                TableHead { "上传" }
                                TableHead { "下载" }
                                TableHead { "总计" }
                                TableHead { "占比" }
                            }
                        }
                        TableBody {
                            for (index , record) in rows.into_iter().enumerate() {
                                DayRow { key: "{record.date}", record, today: index == 0 }
                            }
                        }
                    }
                }
            }

            Card { class: "border-blue-200 bg-blue-50",
                div { class: "space-y-2 p-6 text-sm text-blue-900",
                    p { class: "font-semibold", "流量统计说明" }
                    ul { class: "list-inside list-disc space-y-1 text-blue-800",
                        for note in NOTES {
                            li { "{note}" }
                        }
                    }
                }
            }
        }
    }
}

fn if_active(active: bool) -> BadgeVariant {
    if active {
        BadgeVariant::Default
    } else {
        BadgeVariant::Outline
    }
}

#[component]
fn DayRow(record: DailyTraffic, today: bool) -> Element {
    let share = record.percentage * 100.0;
    let bar = Tone::for_traffic(share).bar_class();
    let share_text = format!("{share:.0}%");
    let upload = gb(record.upload);
    let download = gb(record.download);
    rsx! {
        TableRow {
            TableCell {
                div { class: "flex items-center gap-2",
                    span { class: "text-gray-500", "📅" }
                    span { class: "text-sm text-gray-900", "{record.date}" }
                    if today {
                        Badge { class: "text-xs", "今天" }
                    }
                }
            }
            TableCell { span { class: "text-sm text-gray-900", "⬆ {upload}" } }
            TableCell { span { class: "text-sm text-gray-900", "⬇ {download}" } }
            TableCell { span { class: "text-sm font-semibold text-gray-900", {gb(record.total)} } }
            TableCell {
                div { class: "flex items-center gap-3",
                    div { class: "w-24",
                        UsageBar { percent: share, bar_class: bar }
                    }
                    span { class: "w-12 text-xs text-gray-600", "{share_text}" }
                }
            }
        }
    }
}

#[component]
fn Figure(tint: String, label: String, value: String, icon: String) -> Element {
    rsx! {
        Card { class: "border-{tint}-200 bg-gradient-to-br from-{tint}-50 to-{tint}-100",
            div { class: "flex items-center justify-between p-6",
                div {
                    p { class: "text-sm font-medium text-{tint}-700", "{label}" }
                    p { class: "mt-2 text-2xl font-bold text-{tint}-900", "{value}" }
                }
                div { class: "flex h-12 w-12 items-center justify-center rounded-full bg-{tint}-200 text-xl", "{icon}" }
            }
        }
    }
}

#[component]
fn Direction(tint: String, icon: String, label: String, value: String) -> Element {
    rsx! {
        div { class: "flex items-center gap-3",
            div { class: "flex h-10 w-10 items-center justify-center rounded-lg bg-{tint}-100 text-{tint}-600", "{icon}" }
            div {
                p { class: "text-xs text-gray-600", "{label}" }
                p { class: "text-sm font-semibold text-gray-900", "{value}" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_slices_records() {
        let records = mock::user::daily_traffic();
        assert_eq!(recent(&records, Period::Week).len(), 7);
        assert_eq!(recent(&records, Period::Month).len(), 15);
        assert_eq!(recent(&records[..3], Period::Month).len(), 3);
        assert_eq!(recent(&records, Period::Week)[0].date, "2025-01-29");
    }

    #[test]
    fn test_usage_percent_and_tone() {
        let stats = mock::user::traffic_stats();
        let percent = usage_percent(&stats);
        assert!((percent - 79.77).abs() < 0.01);
        assert_eq!(Tone::for_traffic(percent), Tone::Orange);
    }
}
