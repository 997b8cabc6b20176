//! Match task event stream client
//!
//! Opens one long-lived SSE connection per task. The connection bypasses
//! the authorized transport: the bearer token is read from the credential
//! store once, at open time, and the connection is never re-authenticated
//! or reconnected.

use std::sync::Arc;

use futures::StreamExt;
use reqwest::header;
use stylematch_common::CredentialStore;
use stylematch_domain::{EventPayload, Result, StyleMatchError, TaskEvent, TaskEventName};
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, warn};

use super::parser::SseParser;
use crate::http::HttpClient;

/// Options for one event stream subscription.
#[derive(Default)]
pub struct StreamOptions {
    /// Cancelling this token closes the connection immediately; no handler
    /// is invoked afterwards.
    pub cancel: Option<CancellationToken>,
    /// Invoked once with the terminal error before the stream call returns
    /// it.
    pub on_error: Option<Box<dyn FnMut(&StyleMatchError) + Send>>,
}

impl StreamOptions {
    pub fn with_cancel(mut self, cancel: CancellationToken) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub fn with_error_handler(
        mut self,
        handler: impl FnMut(&StyleMatchError) + Send + 'static,
    ) -> Self {
        self.on_error = Some(Box::new(handler));
        self
    }
}

/// Client for `GET /api/match/tasks/{taskId}/events`.
pub struct EventStreamClient {
    http: HttpClient,
    base_url: String,
    store: Arc<dyn CredentialStore>,
}

impl EventStreamClient {
    /// Create an event stream client.
    ///
    /// # Errors
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(base_url: &str, store: Arc<dyn CredentialStore>) -> Result<Self> {
        // No overall deadline: the stream lives as long as the task runs.
        let http = HttpClient::builder()
            .without_timeout()
            .connect_timeout(std::time::Duration::from_secs(10))
            .build()?;

        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string(), store })
    }

    /// Subscribe to a task's events, invoking `on_event` per named event.
    ///
    /// Payloads are parsed as JSON when possible, otherwise delivered as
    /// raw text. Returns when the server closes the stream, the caller
    /// cancels, or a transport error occurs (in which case the error is
    /// also handed to `on_error` and then returned). No reconnect is
    /// attempted.
    #[instrument(skip(self, on_event, options), fields(task_id = %task_id))]
    pub async fn stream_task_events<F>(
        &self,
        task_id: &str,
        mut on_event: F,
        mut options: StreamOptions,
    ) -> Result<()>
    where
        F: FnMut(TaskEvent) + Send,
    {
        let token = self
            .store
            .load()
            .await?
            .map(|credentials| credentials.access_token)
            .filter(|token| !token.is_empty());

        let url = format!("{}/api/match/tasks/{}/events", self.base_url, task_id);
        let mut request = self
            .http
            .request(reqwest::Method::GET, &url)
            .header(header::ACCEPT, "text/event-stream");
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let result = self.run_stream(request, &mut on_event, &options.cancel).await;

        if let Err(err) = &result {
            if let Some(on_error) = options.on_error.as_mut() {
                on_error(err);
            }
        }
        result
    }

    async fn run_stream<F>(
        &self,
        request: reqwest::RequestBuilder,
        on_event: &mut F,
        cancel: &Option<CancellationToken>,
    ) -> Result<()>
    where
        F: FnMut(TaskEvent) + Send,
    {
        let cancel = cancel.clone().unwrap_or_default();

        let response = tokio::select! {
            biased;

            () = cancel.cancelled() => {
                debug!("event stream cancelled before the connection opened");
                return Ok(());
            }

            response = self.http.send(request) => response?,
        };
        let status = response.status();
        if !status.is_success() {
            return Err(StyleMatchError::Network(format!(
                "event stream rejected with status {status}"
            )));
        }

        let mut body = response.bytes_stream();
        let mut parser = SseParser::new();

        loop {
            tokio::select! {
                // Cancellation wins over a ready chunk so no handler runs
                // after the caller asked to stop.
                biased;

                () = cancel.cancelled() => {
                    debug!("event stream cancelled by caller");
                    return Ok(());
                }

                chunk = body.next() => match chunk {
                    Some(Ok(bytes)) => {
                        for message in parser.feed(&bytes) {
                            match TaskEventName::parse(&message.event) {
                                Some(name) => on_event(TaskEvent {
                                    name,
                                    payload: EventPayload::from_raw(&message.data),
                                }),
                                None => {
                                    debug!(event = %message.event, "ignoring unknown event");
                                }
                            }
                        }
                    }
                    Some(Err(err)) => {
                        warn!(error = %err, "event stream transport error");
                        return Err(StyleMatchError::Network(format!(
                            "event stream transport error: {err}"
                        )));
                    }
                    None => {
                        debug!("event stream closed by server");
                        return Ok(());
                    }
                }
            }
        }
    }
}
