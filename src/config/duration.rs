//! # 令牌有效期解析
//!
//! 支持的写法：
//! - `30s` / `30sec` / `30seconds`
//! - `15m` / `15min` / `15minutes`
//! - `1h` / `1hr` / `1hours`
//! - `7d` / `7days`
//! - `2w` / `2weeks`
//! - 纯数字表示秒

use chrono::Duration;

use crate::error::{AppError, Result};

const UNITS: &[(&str, i64)] = &[
    ("seconds", 1),
    ("second", 1),
    ("secs", 1),
    ("sec", 1),
    ("s", 1),
    ("minutes", 60),
    ("minute", 60),
    ("mins", 60),
    ("min", 60),
    ("m", 60),
    ("hours", 3_600),
    ("hour", 3_600),
    ("hrs", 3_600),
    ("hr", 3_600),
    ("h", 3_600),
    ("days", 86_400),
    ("day", 86_400),
    ("d", 86_400),
    ("weeks", 604_800),
    ("week", 604_800),
    ("w", 604_800),
];

/// 解析有效期字符串，必须为正数
pub fn parse_lifetime(value: &str) -> Result<Duration> {
    let keyword = value.trim().to_lowercase();

    if let Ok(seconds) = keyword.parse::<i64>() {
        return positive(seconds, value);
    }

    for (suffix, unit) in UNITS {
        if let Some(amount) = parse_numeric_suffix(&keyword, suffix) {
            let seconds = amount
                .checked_mul(*unit)
                .ok_or_else(|| AppError::config(format!("有效期过长: {value}")))?;
            return positive(seconds, value);
        }
    }

    Err(AppError::config(format!("无法解析的有效期: {value:?}")))
}

fn parse_numeric_suffix(keyword: &str, suffix: &str) -> Option<i64> {
    keyword
        .strip_suffix(suffix)
        .and_then(|digits| digits.trim_end().parse::<i64>().ok())
}

fn positive(seconds: i64, raw: &str) -> Result<Duration> {
    if seconds <= 0 {
        return Err(AppError::config(format!("有效期必须大于0: {raw}")));
    }
    Duration::try_seconds(seconds).ok_or_else(|| AppError::config(format!("有效期过长: {raw}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_lifetimes() {
        assert_eq!(parse_lifetime("1h").unwrap(), Duration::hours(1));
        assert_eq!(parse_lifetime("7d").unwrap(), Duration::days(7));
    }

    #[test]
    fn test_parse_long_forms_and_spaces() {
        assert_eq!(parse_lifetime("30 minutes").unwrap(), Duration::minutes(30));
        assert_eq!(parse_lifetime("2Hours").unwrap(), Duration::hours(2));
        assert_eq!(parse_lifetime(" 1 week ").unwrap(), Duration::weeks(1));
        assert_eq!(parse_lifetime("45s").unwrap(), Duration::seconds(45));
    }

    #[test]
    fn test_bare_number_is_seconds() {
        assert_eq!(parse_lifetime("3600").unwrap(), Duration::hours(1));
    }

    #[test]
    fn test_reject_invalid_lifetimes() {
        assert!(parse_lifetime("").is_err());
        assert!(parse_lifetime("0h").is_err());
        assert!(parse_lifetime("-5m").is_err());
        assert!(parse_lifetime("soon").is_err());
        assert!(parse_lifetime("1y").is_err());
    }
}
