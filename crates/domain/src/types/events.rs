//! Match task event stream types
//!
//! Events published on `GET /api/match/tasks/{taskId}/events` (SSE). The
//! payload is structured JSON when it parses, otherwise raw text.

use serde::{Deserialize, Serialize};

/// Named events emitted over a task event stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskEventName {
    #[serde(rename = "task_started")]
    Started,
    #[serde(rename = "task_progress")]
    Progress,
    #[serde(rename = "task_completed")]
    Completed,
    #[serde(rename = "task_failed")]
    Failed,
}

impl TaskEventName {
    /// Wire name of the event.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Started => "task_started",
            Self::Progress => "task_progress",
            Self::Completed => "task_completed",
            Self::Failed => "task_failed",
        }
    }

    /// Parse a wire event name; `None` for names this client does not know.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "task_started" => Some(Self::Started),
            "task_progress" => Some(Self::Progress),
            "task_completed" => Some(Self::Completed),
            "task_failed" => Some(Self::Failed),
            _ => None,
        }
    }

    /// Whether this event terminates the stream on the server side.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

/// Event payload: parsed JSON when possible, raw text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum EventPayload {
    Json(serde_json::Value),
    Text(String),
}

impl EventPayload {
    /// Build a payload from the raw `data` field of an SSE message.
    pub fn from_raw(raw: &str) -> Self {
        match serde_json::from_str(raw) {
            Ok(value) => Self::Json(value),
            // Keep raw string payload for non-JSON messages.
            Err(_) => Self::Text(raw.to_string()),
        }
    }

    /// The parsed JSON value, if this payload is structured.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }
}

/// One event delivered to a task event stream handler.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskEvent {
    pub name: TaskEventName,
    pub payload: EventPayload,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_names_round_trip() {
        for name in [
            TaskEventName::Started,
            TaskEventName::Progress,
            TaskEventName::Completed,
            TaskEventName::Failed,
        ] {
            assert_eq!(TaskEventName::parse(name.as_str()), Some(name));
        }
        assert_eq!(TaskEventName::parse("task_unknown"), None);
    }

    #[test]
    fn json_payloads_are_parsed() {
        let payload = EventPayload::from_raw(r#"{"percent":40}"#);
        assert_eq!(payload.as_json().and_then(|v| v["percent"].as_i64()), Some(40));
    }

    #[test]
    fn non_json_payloads_stay_raw() {
        let payload = EventPayload::from_raw("queued behind 2 tasks");
        assert_eq!(payload, EventPayload::Text("queued behind 2 tasks".into()));
    }

    #[test]
    fn terminal_events_are_flagged() {
        assert!(TaskEventName::Completed.is_terminal());
        assert!(TaskEventName::Failed.is_terminal());
        assert!(!TaskEventName::Progress.is_terminal());
    }
}
