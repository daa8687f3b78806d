//! 日期时间序列化/反序列化工具
//!
//! - 序列化: `DateTime<Utc>` -> RFC3339 字符串
//! - 反序列化: RFC3339 字符串、无时区的 ISO 本地时间（按 UTC 处理）或 Unix 时间戳 -> `DateTime<Utc>`

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serializer};

/// 序列化 `DateTime<Utc>` 为 RFC3339 字符串
pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&dt.to_rfc3339())
}

/// 反序列化：RFC3339、ISO 本地时间或 Unix 时间戳（秒/毫秒自动识别）
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Timestamp {
        String(String),
        I64(i64),
    }

    match Timestamp::deserialize(deserializer)? {
        Timestamp::String(s) => parse_timestamp(&s)
            .ok_or_else(|| Error::custom(format!("Invalid timestamp: {s}"))),
        Timestamp::I64(ts) => {
            parse_unix_timestamp(ts).ok_or_else(|| Error::custom("Invalid Unix timestamp"))
        }
    }
}

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC3339 with an offset, and offset-less local date-times such as
/// `2024-01-01T00:00:00` or `2024-01-01T00:00:00.123456` (Java `LocalDateTime`),
/// which are taken as UTC.
fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// 解析 Unix 时间戳（自动判断秒/毫秒）
fn parse_unix_timestamp(ts: i64) -> Option<DateTime<Utc>> {
    // > 10^11 视为毫秒
    if ts > 100_000_000_000 {
        DateTime::from_timestamp_millis(ts)
    } else {
        DateTime::from_timestamp(ts, 0)
    }
}
