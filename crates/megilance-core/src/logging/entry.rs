//! One line of the session log.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single JSONL record.
///
/// Each line stands on its own so a crashed session still leaves a
/// readable file behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLogEntry {
    /// RFC 3339 timestamp with milliseconds, UTC.
    pub ts: String,
    pub level: String,
    /// Session label (profile name or "default").
    pub session: String,
    /// Module path of the event, e.g. `megilance_core::theme`.
    pub target: String,
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Value>,
    /// Enclosing spans, outermost first, joined with ` > `.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<String>,
}

impl SessionLogEntry {
    pub fn new(
        level: impl Into<String>,
        session: impl Into<String>,
        target: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            ts: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            level: level.into(),
            session: session.into(),
            target: target.into(),
            msg: msg.into(),
            fields: None,
            span: None,
        }
    }

    pub fn with_fields(mut self, fields: Value) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_span(mut self, span: impl Into<String>) -> Self {
        self.span = Some(span.into());
        self
    }

    /// Serialize without the trailing newline.
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_parts_are_omitted() {
        let entry = SessionLogEntry::new("info", "default", "megilance_core::theme", "theme set");
        let json = entry.to_json_line().unwrap();
        assert!(json.contains("\"level\":\"info\""));
        assert!(json.contains("\"session\":\"default\""));
        assert!(!json.contains("fields"));
        assert!(!json.contains("span"));
    }

    #[test]
    fn parses_back_with_fields() {
        let entry = SessionLogEntry::new("warn", "alice", "megilance_core::storage", "write skipped")
            .with_fields(serde_json::json!({ "key": "theme" }))
            .with_span("hydrate");
        let parsed = SessionLogEntry::from_json_line(&entry.to_json_line().unwrap()).unwrap();
        assert_eq!(parsed, entry);
    }
}
