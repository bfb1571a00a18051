use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Todo {
    /// Assigned at creation, immutable
    pub id: Uuid,
    pub title: String,
    pub deadline: DateTime<Utc>,
    /// One-way flag: false -> true via the done endpoint
    pub done: bool,
    /// Set at creation, immutable
    pub created_at: DateTime<Utc>,
}

impl Todo {
    pub fn new(id: Uuid, title: String, deadline: DateTime<Utc>) -> Self {
        Self {
            id,
            title,
            deadline,
            done: false,
            created_at: Utc::now(),
        }
    }
}

/// Parse a deadline from request input.
///
/// Accepts an RFC 3339 timestamp or a bare `YYYY-MM-DD` date, which is
/// interpreted as midnight UTC.
pub fn parse_deadline(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    raw.parse::<NaiveDate>()
        .ok()
        .map(|date| Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

/// Serde adapter over [`parse_deadline`] for request DTO fields
pub fn deserialize_deadline<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;

    parse_deadline(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid deadline: {}", raw)))
}
