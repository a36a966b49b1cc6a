//! Remote-store timestamps.
//!
//! The document store fills in timestamps on the server. Between a local
//! write and the server acknowledging it the value is unknown, so timestamps
//! are an explicit two-state value instead of "placeholder or string".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A timestamp assigned by the document store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "at", rename_all = "snake_case")]
pub enum Timestamp {
    /// Written locally; the server has not assigned a time yet.
    #[default]
    Pending,
    /// Assigned by the server.
    Resolved(DateTime<Utc>),
}

impl Timestamp {
    /// A resolved timestamp for the given instant.
    #[must_use]
    pub const fn at(instant: DateTime<Utc>) -> Self {
        Self::Resolved(instant)
    }

    /// The resolved instant, if the server has assigned one.
    #[must_use]
    pub const fn resolved(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Pending => None,
            Self::Resolved(at) => Some(*at),
        }
    }

    /// Whether the server has yet to assign this timestamp.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Resolve a pending timestamp with the server's time.
    ///
    /// An already-resolved timestamp keeps its original value.
    #[must_use]
    pub const fn resolve(self, server_time: DateTime<Utc>) -> Self {
        match self {
            Self::Pending => Self::Resolved(server_time),
            resolved @ Self::Resolved(_) => resolved,
        }
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::Resolved(instant)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_pending_resolves_once() {
        let ts = Timestamp::Pending.resolve(instant());
        assert_eq!(ts.resolved(), Some(instant()));

        let later = Utc.with_ymd_and_hms(2024, 3, 16, 0, 0, 0).unwrap();
        assert_eq!(ts.resolve(later).resolved(), Some(instant()));
    }

    #[test]
    fn test_serialized_forms() {
        let pending = serde_json::to_value(Timestamp::Pending).unwrap();
        assert_eq!(pending, serde_json::json!({ "state": "pending" }));

        let resolved = serde_json::to_value(Timestamp::at(instant())).unwrap();
        assert_eq!(resolved["state"], "resolved");
        assert_eq!(resolved["at"], "2024-03-15T12:00:00Z");
    }

    #[test]
    fn test_deserializes_resolved() {
        let ts: Timestamp =
            serde_json::from_str(r#"{"state":"resolved","at":"2024-03-15T12:00:00Z"}"#).unwrap();
        assert_eq!(ts, Timestamp::at(instant()));
        assert!(!ts.is_pending());
    }
}
