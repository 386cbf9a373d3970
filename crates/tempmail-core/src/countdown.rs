//! Expiry countdown rendering.
//!
//! Each tick recomputes the text from the expiry instant and the current
//! time. Urgency classes are only ever added; callers never remove them.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{Error, Result};
use crate::markup::classes;

/// Text shown once the deadline has passed.
pub const EXPIRED_TEXT: &str = "Expired";

const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_MINUTE: i64 = 60;

/// How close an expiry is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Urgency {
    /// At least an hour remains.
    Normal,
    /// Less than an hour remains.
    Warning,
    /// The deadline has passed.
    Expired,
}

impl Urgency {
    /// Class to add to the element, if any.
    pub const fn class(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Warning => Some(classes::TEXT_WARNING),
            Self::Expired => Some(classes::TEXT_DANGER),
        }
    }
}

/// Rendered state of a countdown element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownView {
    /// Text content to render.
    pub text: String,
    /// Urgency level.
    pub urgency: Urgency,
}

/// Parse an expiry attribute.
///
/// Accepts RFC 3339 timestamps, ISO date-times without an offset, and bare
/// dates. Values without an offset are taken as UTC, which is how the server
/// stores them.
pub fn parse_expiry(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }
    Err(Error::InvalidExpiry(raw.to_string()))
}

/// Render the countdown for `expires_at` as seen at `now`.
pub fn countdown_at(expires_at: DateTime<Utc>, now: DateTime<Utc>) -> CountdownView {
    let remaining = expires_at - now;
    if remaining <= chrono::TimeDelta::zero() {
        return CountdownView {
            text: EXPIRED_TEXT.to_string(),
            urgency: Urgency::Expired,
        };
    }

    let secs = remaining.num_seconds();
    let hours = secs / SECS_PER_HOUR;
    let minutes = (secs % SECS_PER_HOUR) / SECS_PER_MINUTE;

    if hours > 0 {
        CountdownView {
            text: format!("{hours}h {minutes}m remaining"),
            urgency: Urgency::Normal,
        }
    } else {
        CountdownView {
            text: format!("{minutes}m remaining"),
            urgency: Urgency::Warning,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn now() -> DateTime<Utc> {
        parse_expiry("2026-03-01T12:00:00Z").expect("valid")
    }

    #[test]
    fn test_parse_rfc3339_with_offset() {
        let dt = parse_expiry("2026-03-01T14:00:00+02:00").expect("valid");
        assert_eq!(dt, now());
    }

    #[test]
    fn test_parse_naive_is_utc() {
        let fractional = parse_expiry("2026-03-01T12:00:00.123456").expect("valid");
        assert_eq!(fractional.timestamp(), now().timestamp());
        assert_eq!(parse_expiry("2026-03-01 12:00:00").expect("valid"), now());
        assert_eq!(
            parse_expiry("2026-03-01").expect("valid"),
            now() - TimeDelta::hours(12)
        );
    }

    #[test]
    fn test_parse_garbage_fails() {
        assert!(matches!(parse_expiry("soon"), Err(Error::InvalidExpiry(s)) if s == "soon"));
        assert!(parse_expiry("").is_err());
    }

    #[test]
    fn test_expired_at_and_after_deadline() {
        let view = countdown_at(now(), now());
        assert_eq!(view.text, "Expired");
        assert_eq!(view.urgency, Urgency::Expired);
        assert_eq!(view.urgency.class(), Some("text-danger"));

        let view = countdown_at(now() - TimeDelta::days(1), now());
        assert_eq!(view.text, "Expired");
    }

    #[test]
    fn test_minutes_only_inside_last_hour() {
        let view = countdown_at(now() + TimeDelta::minutes(59) + TimeDelta::seconds(59), now());
        assert_eq!(view.text, "59m remaining");
        assert_eq!(view.urgency, Urgency::Warning);
        assert_eq!(view.urgency.class(), Some("text-warning"));
    }

    #[test]
    fn test_under_a_minute_renders_zero() {
        let view = countdown_at(now() + TimeDelta::seconds(30), now());
        assert_eq!(view.text, "0m remaining");
        assert_eq!(view.urgency, Urgency::Warning);
    }

    #[test]
    fn test_hours_and_minutes() {
        let view = countdown_at(now() + TimeDelta::hours(23) + TimeDelta::minutes(5), now());
        assert_eq!(view.text, "23h 5m remaining");
        assert_eq!(view.urgency, Urgency::Normal);
        assert_eq!(view.urgency.class(), None);

        let view = countdown_at(now() + TimeDelta::hours(1), now());
        assert_eq!(view.text, "1h 0m remaining");
        assert_eq!(view.urgency, Urgency::Normal);
    }

    #[test]
    fn test_sub_second_remainder_floors() {
        let view = countdown_at(now() + TimeDelta::milliseconds(3_600_999), now());
        assert_eq!(view.text, "1h 0m remaining");
    }
}
