//! Incremental parser for the SSE wire format
//!
//! Handles the subset of `text/event-stream` the backend emits: `event`,
//! `data` and `id` fields, comment lines, LF or CRLF line endings, and
//! multi-line data joined with `\n`. `retry` and unknown fields are
//! ignored. A message is dispatched on the first empty line after at least
//! one `data` field.

/// One decoded SSE message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SseMessage {
    /// Event name; "message" when the stream did not name one.
    pub event: String,
    /// Data payload; multi-line data is joined with `\n`.
    pub data: String,
    /// Last seen `id` field, if any.
    pub id: Option<String>,
}

/// Incremental SSE decoder. Feed it raw chunks, collect complete messages.
#[derive(Debug, Default)]
pub(crate) struct SseParser {
    buffer: Vec<u8>,
    event_name: String,
    data_lines: Vec<String>,
    id: Option<String>,
}

impl SseParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consume a chunk of bytes, returning every message it completes.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<SseMessage> {
        self.buffer.extend_from_slice(chunk);

        let mut messages = Vec::new();
        while let Some(newline) = self.buffer.iter().position(|&b| b == b'\n') {
            let mut line: Vec<u8> = self.buffer.drain(..=newline).collect();
            line.pop(); // the \n itself
            if line.last() == Some(&b'\r') {
                line.pop();
            }

            let line = String::from_utf8_lossy(&line).into_owned();
            if let Some(message) = self.process_line(&line) {
                messages.push(message);
            }
        }
        messages
    }

    fn process_line(&mut self, line: &str) -> Option<SseMessage> {
        if line.is_empty() {
            return self.dispatch();
        }

        // Comment line, used by servers as keep-alive.
        if line.starts_with(':') {
            return None;
        }

        let (field, value) = match line.split_once(':') {
            Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
            None => (line, ""),
        };

        match field {
            "event" => self.event_name = value.to_string(),
            "data" => self.data_lines.push(value.to_string()),
            "id" => self.id = Some(value.to_string()),
            // "retry" and unknown fields are ignored.
            _ => {}
        }
        None
    }

    fn dispatch(&mut self) -> Option<SseMessage> {
        let event_name = std::mem::take(&mut self.event_name);
        let data_lines = std::mem::take(&mut self.data_lines);

        if data_lines.is_empty() {
            // Per the SSE processing model, an empty data buffer means no
            // message; the event name is still reset.
            return None;
        }

        Some(SseMessage {
            event: if event_name.is_empty() { "message".to_string() } else { event_name },
            data: data_lines.join("\n"),
            id: self.id.clone(),
        })
    }
}
