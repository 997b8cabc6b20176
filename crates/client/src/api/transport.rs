//! Authenticated transport with single-flight token refresh
//!
//! Every request is annotated with the bearer token (when present) and the
//! active locale. A 401 response triggers the refresh protocol: concurrent
//! 401s share one refresh call, queued callers are released in enqueue
//! order once it settles, and each failed request is replayed at most once.
//!
//! The guard and queue are fields of this struct, so independent transports
//! (and their tests) cannot interfere with each other.

use std::sync::Arc;

use reqwest::{header, multipart, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use stylematch_common::{CredentialStore, LocaleProvider};
use stylematch_domain::{Envelope, RefreshRequest, RefreshResponse, Result, StyleMatchError};
use tokio::sync::{oneshot, Mutex};
use tracing::{debug, instrument, warn};

use crate::api::files::FilePayload;
use crate::config::ClientConfig;
use crate::http::HttpClient;

const REFRESH_PATH: &str = "/api/auth/refresh";

/// Shared state of the refresh protocol.
///
/// `in_flight` is the single-flight guard; `waiters` is the pending request
/// queue, drained exactly once per refresh in enqueue order.
#[derive(Default)]
struct RefreshState {
    in_flight: bool,
    waiters: Vec<oneshot::Sender<Option<String>>>,
}

/// Authenticated HTTP transport for the StyleMatch API.
pub struct ApiTransport {
    http: HttpClient,
    base_url: String,
    store: Arc<dyn CredentialStore>,
    locale: Arc<LocaleProvider>,
    refresh: Mutex<RefreshState>,
}

impl ApiTransport {
    /// Create a transport from a client configuration.
    ///
    /// # Errors
    /// Returns an error when the underlying HTTP client cannot be built.
    pub fn new(
        config: &ClientConfig,
        store: Arc<dyn CredentialStore>,
        locale: Arc<LocaleProvider>,
    ) -> Result<Self> {
        let mut builder = HttpClient::builder().timeout(config.timeout);
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            store,
            locale,
            refresh: Mutex::new(RefreshState::default()),
        })
    }

    /// Backend base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The credential store this transport reads and invalidates.
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// The locale provider feeding the `Accept-Language` header.
    pub fn locale(&self) -> &Arc<LocaleProvider> {
        &self.locale
    }

    /// Execute a GET request and unwrap the response envelope.
    #[instrument(skip(self, query), fields(path = %path))]
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let url = self.url(path);
        let query = owned_query(query);
        self.request_json(path, move |http| Ok(http.request(Method::GET, &url).query(&query)))
            .await
    }

    /// Execute a POST request with a JSON body and unwrap the envelope.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let payload = to_payload(body)?;
        self.request_json(path, move |http| Ok(http.request(Method::POST, &url).json(&payload)))
            .await
    }

    /// Execute a POST request without a body and unwrap the envelope.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        self.request_json(path, move |http| Ok(http.request(Method::POST, &url))).await
    }

    /// Execute a PUT request with a JSON body and unwrap the envelope.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let payload = to_payload(body)?;
        self.request_json(path, move |http| Ok(http.request(Method::PUT, &url).json(&payload)))
            .await
    }

    /// Execute a PATCH request with a JSON body and unwrap the envelope.
    #[instrument(skip(self, body), fields(path = %path))]
    pub async fn patch_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        let payload = to_payload(body)?;
        self.request_json(path, move |http| Ok(http.request(Method::PATCH, &url).json(&payload)))
            .await
    }

    /// Execute a DELETE request, checking only the envelope code.
    #[instrument(skip(self), fields(path = %path))]
    pub async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        let envelope: Envelope<serde_json::Value> = self
            .request_envelope(path, move |http| Ok(http.request(Method::DELETE, &url)))
            .await?;
        envelope.ensure_ok()
    }

    /// Execute a multipart POST, rebuilding the form on replay.
    #[instrument(skip(self, query, file), fields(path = %path))]
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        file: FilePayload,
    ) -> Result<T> {
        let url = self.url(path);
        let query = owned_query(query);
        self.request_json(path, move |http| {
            // The form is rebuilt from owned bytes on every attempt; a
            // multipart body cannot be reused after a failed send.
            let mut part = multipart::Part::bytes(file.bytes.clone())
                .file_name(file.file_name.clone());
            if let Some(content_type) = file.content_type.as_deref() {
                part = part.mime_str(content_type).map_err(|e| {
                    StyleMatchError::InvalidInput(format!("invalid content type: {e}"))
                })?;
            }
            let form = multipart::Form::new().part("file", part);
            Ok(http.request(Method::POST, &url).query(&query).multipart(form))
        })
        .await
    }

    async fn request_json<T, F>(&self, path: &str, build: F) -> Result<T>
    where
        T: DeserializeOwned,
        F: Fn(&HttpClient) -> Result<RequestBuilder> + Send + Sync,
    {
        self.request_envelope(path, build).await?.into_data()
    }

    async fn request_envelope<T, F>(&self, path: &str, build: F) -> Result<Envelope<T>>
    where
        T: DeserializeOwned,
        F: Fn(&HttpClient) -> Result<RequestBuilder> + Send + Sync,
    {
        let response = self.execute(path, &build).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(status_error(status, path, &body));
        }

        response
            .json()
            .await
            .map_err(|e| StyleMatchError::Internal(format!("failed to decode response body: {e}")))
    }

    /// Send a request through the 401 refresh protocol.
    async fn execute<F>(&self, path: &str, build: &F) -> Result<Response>
    where
        F: Fn(&HttpClient) -> Result<RequestBuilder> + Send + Sync,
    {
        let response = self.send_authorized(build, None).await?;
        if response.status() != StatusCode::UNAUTHORIZED {
            return Ok(response);
        }

        // The refresh endpoint must never enter its own refresh protocol;
        // a 401 from it is terminal and invalidates local credentials.
        if path.contains(REFRESH_PATH) {
            self.store.clear().await?;
            return Err(unauthorized(path));
        }

        let refresh_token = match self.store.load().await? {
            Some(credentials) if credentials.has_refresh_token() => credentials.refresh_token,
            _ => {
                debug!(path, "401 without a refresh token, clearing credentials");
                self.store.clear().await?;
                return Err(unauthorized(path));
            }
        };

        match self.join_or_run_refresh(&refresh_token).await? {
            Some(token) => {
                // The request has now been retried once; a second 401 is
                // terminal regardless of its cause.
                let replay = self.send_authorized(build, Some(&token)).await?;
                if replay.status() == StatusCode::UNAUTHORIZED {
                    warn!(path, "replay after refresh still unauthorized");
                    self.store.clear().await?;
                    return Err(unauthorized(path));
                }
                Ok(replay)
            }
            // The shared refresh failed; this caller rejects with its own
            // original 401.
            None => Err(unauthorized(path)),
        }
    }

    async fn send_authorized<F>(&self, build: &F, token_override: Option<&str>) -> Result<Response>
    where
        F: Fn(&HttpClient) -> Result<RequestBuilder> + Send + Sync,
    {
        let token = match token_override {
            Some(token) => Some(token.to_string()),
            None => self
                .store
                .load()
                .await?
                .map(|credentials| credentials.access_token)
                .filter(|token| !token.is_empty()),
        };

        let mut request = build(&self.http)?;
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        request = request.header(header::ACCEPT_LANGUAGE, self.locale.active().as_str());

        self.http.send(request).await
    }

    /// Share an in-flight refresh or become the caller that runs it.
    ///
    /// Returns `Some(token)` when a refresh produced a new access token,
    /// `None` when this caller was queued behind a refresh that failed. The
    /// caller that ran the refresh gets the refresh error itself.
    async fn join_or_run_refresh(&self, refresh_token: &str) -> Result<Option<String>> {
        let waiter = {
            let mut state = self.refresh.lock().await;
            if state.in_flight {
                let (tx, rx) = oneshot::channel();
                state.waiters.push(tx);
                Some(rx)
            } else {
                state.in_flight = true;
                None
            }
        };

        if let Some(rx) = waiter {
            debug!("refresh already in flight, queueing");
            // A dropped sender counts as a failed refresh.
            return Ok(rx.await.unwrap_or(None));
        }

        let outcome = self.run_refresh(refresh_token).await;

        let waiters = {
            let mut state = self.refresh.lock().await;
            state.in_flight = false;
            std::mem::take(&mut state.waiters)
        };

        match outcome {
            Ok(token) => {
                debug!(waiters = waiters.len(), "refresh succeeded, releasing queue");
                for tx in waiters {
                    let _ = tx.send(Some(token.clone()));
                }
                Ok(Some(token))
            }
            Err(err) => {
                warn!(error = %err, "token refresh failed, clearing credentials");
                for tx in waiters {
                    let _ = tx.send(None);
                }
                if let Err(clear_err) = self.store.clear().await {
                    warn!(error = %clear_err, "failed to clear credentials after refresh failure");
                }
                Err(err)
            }
        }
    }

    /// Issue the refresh call, bypassing the authorized request path.
    async fn run_refresh(&self, refresh_token: &str) -> Result<String> {
        debug!("issuing token refresh");
        let url = self.url(REFRESH_PATH);
        let body = RefreshRequest { refresh_token: refresh_token.to_string() };

        let request = self.http.request(Method::POST, &url).json(&body);
        let response = self.http.send(request).await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(status_error(status, REFRESH_PATH, &text));
        }

        let envelope: Envelope<RefreshResponse> = response.json().await.map_err(|e| {
            StyleMatchError::Internal(format!("failed to decode refresh response: {e}"))
        })?;
        let refreshed = envelope.into_data()?;

        self.store.update_access_token(&refreshed.access_token).await?;
        debug!("access token refreshed");
        Ok(refreshed.access_token)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn owned_query(query: &[(&str, String)]) -> Vec<(String, String)> {
    query.iter().map(|(key, value)| ((*key).to_string(), value.clone())).collect()
}

fn to_payload<B: Serialize + ?Sized>(body: &B) -> Result<serde_json::Value> {
    serde_json::to_value(body)
        .map_err(|e| StyleMatchError::Internal(format!("failed to serialize request body: {e}")))
}

fn unauthorized(path: &str) -> StyleMatchError {
    StyleMatchError::Auth(format!("{path} returned status 401 Unauthorized"))
}

fn status_error(status: StatusCode, path: &str, body: &str) -> StyleMatchError {
    let message = if body.is_empty() {
        format!("{path} returned status {status}")
    } else {
        format!("{path} returned status {status}: {body}")
    };

    match status.as_u16() {
        401 | 403 => StyleMatchError::Auth(message),
        404 => StyleMatchError::NotFound(message),
        400..=499 => StyleMatchError::InvalidInput(message),
        _ => StyleMatchError::Network(message),
    }
}
