//! 日期展示
//!
//! 服务端返回的日期字符串格式不统一（纯日期、RFC 3339、无时区的日期时间），
//! 这里统一格式化为 `Mar 5, 2024` 这样的短日期。

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// 缺失日期时的占位文本
pub const MISSING_DATE: &str = "N/A";
/// 无法解析时的文本（与浏览器 `Date` 的行为一致）
pub const INVALID_DATE: &str = "Invalid Date";

const DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// 解析日期字符串，只保留日历日期部分
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

/// 格式化为短日期
///
/// - `None` 或空串返回 `"N/A"`
/// - 无法解析返回 `"Invalid Date"`
pub fn format_date(value: Option<&str>) -> String {
    match value.map(str::trim) {
        None | Some("") => MISSING_DATE.to_string(),
        Some(s) => match parse_date(s) {
            Some(date) => date.format(DISPLAY_FORMAT).to_string(),
            None => INVALID_DATE.to_string(),
        },
    }
}
