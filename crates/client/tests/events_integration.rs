//! Event stream client behavior against a mock SSE backend.

#![allow(dead_code)]

#[path = "support.rs"]
mod support;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use stylematch_common::CredentialStore;
use stylematch_domain::{EventPayload, StyleMatchError, TaskEvent, TaskEventName};
use support::TestClient;
use tokio_util::sync::CancellationToken;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, ResponseTemplate};

fn sse_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.as_bytes().to_vec(), "text/event-stream")
}

fn collector() -> (Arc<Mutex<Vec<TaskEvent>>>, impl FnMut(TaskEvent) + Send) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let sink = events.clone();
    let handler = move |event: TaskEvent| {
        sink.lock().expect("collector lock").push(event);
    };
    (events, handler)
}

#[tokio::test]
async fn progress_events_deliver_parsed_json_payloads() -> anyhow::Result<()> {
    let ctx = TestClient::start_logged_in("stream-token", "refresh").await;

    Mock::given(method("GET"))
        .and(path("/api/match/tasks/t-1/events"))
        .and(header("Authorization", "Bearer stream-token"))
        .and(header("Accept", "text/event-stream"))
        .respond_with(sse_response(
            "event: task_started\ndata: {}\n\n\
             event: task_progress\ndata: {\"percent\": 40}\n\n\
             event: task_completed\ndata: {\"taskId\": \"t-1\"}\n\n",
        ))
        .expect(1)
        .mount(&ctx.server)
        .await;

    let (events, handler) = collector();
    let stream = ctx.client.task_events()?;
    stream.stream_task_events("t-1", handler, Default::default()).await?;

    let events = events.lock().expect("events lock");
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].name, TaskEventName::Started);

    // The handler receives the parsed object, not a string.
    assert_eq!(events[1].name, TaskEventName::Progress);
    match &events[1].payload {
        EventPayload::Json(value) => assert_eq!(value["percent"].as_i64(), Some(40)),
        other => panic!("expected json payload, got {:?}", other),
    }

    assert!(events[2].name.is_terminal());
    Ok(())
}

#[tokio::test]
async fn non_json_payloads_arrive_as_raw_text() -> anyhow::Result<()> {
    let ctx = TestClient::start_logged_in("stream-token", "refresh").await;

    Mock::given(method("GET"))
        .and(path("/api/match/tasks/t-2/events"))
        .respond_with(sse_response("event: task_progress\ndata: warming up\n\n"))
        .mount(&ctx.server)
        .await;

    let (events, handler) = collector();
    ctx.client.task_events()?.stream_task_events("t-2", handler, Default::default()).await?;

    let events = events.lock().expect("events lock");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].payload, EventPayload::Text("warming up".into()));
    Ok(())
}

#[tokio::test]
async fn unknown_event_names_are_skipped() -> anyhow::Result<()> {
    let ctx = TestClient::start_logged_in("stream-token", "refresh").await;

    Mock::given(method("GET"))
        .and(path("/api/match/tasks/t-3/events"))
        .respond_with(sse_response(
            ": keep-alive\n\
             event: heartbeat\ndata: {}\n\n\
             event: task_failed\ndata: {\"message\": \"no candidates\"}\n\n",
        ))
        .mount(&ctx.server)
        .await;

    let (events, handler) = collector();
    ctx.client.task_events()?.stream_task_events("t-3", handler, Default::default()).await?;

    let events = events.lock().expect("events lock");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].name, TaskEventName::Failed);
    Ok(())
}

#[tokio::test]
async fn cancellation_stops_handler_invocations() -> anyhow::Result<()> {
    let ctx = TestClient::start_logged_in("stream-token", "refresh").await;

    // The response only arrives after a delay; cancelling first must win.
    Mock::given(method("GET"))
        .and(path("/api/match/tasks/t-4/events"))
        .respond_with(
            sse_response("event: task_progress\ndata: {\"percent\": 99}\n\n")
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&ctx.server)
        .await;

    let cancel = CancellationToken::new();
    let (events, handler) = collector();

    let stream = ctx.client.task_events()?;
    let options = stylematch_client::StreamOptions::default().with_cancel(cancel.clone());

    let task = tokio::spawn(async move {
        stream.stream_task_events("t-4", handler, options).await
    });
    tokio::time::sleep(Duration::from_millis(50)).await;
    cancel.cancel();

    task.await.expect("join")?;
    assert!(events.lock().expect("events lock").is_empty());
    Ok(())
}

#[tokio::test]
async fn transport_errors_invoke_the_error_handler_and_terminate() {
    let ctx = TestClient::start_logged_in("stream-token", "refresh").await;

    Mock::given(method("GET"))
        .and(path("/api/match/tasks/t-5/events"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&ctx.server)
        .await;

    let error_calls = Arc::new(AtomicUsize::new(0));
    let counted = error_calls.clone();
    let options = stylematch_client::StreamOptions::default()
        .with_error_handler(move |_err: &StyleMatchError| {
            counted.fetch_add(1, Ordering::SeqCst);
        });

    let (events, handler) = collector();
    let stream = ctx.client.task_events().expect("stream client");
    let result = stream.stream_task_events("t-5", handler, options).await;

    assert!(matches!(result, Err(StyleMatchError::Network(_))));
    assert_eq!(error_calls.load(Ordering::SeqCst), 1);
    assert!(events.lock().expect("events lock").is_empty());
}

#[tokio::test]
async fn token_changes_after_open_are_not_reflected() -> anyhow::Result<()> {
    let ctx = TestClient::start_logged_in("open-time-token", "refresh").await;

    // The connection authorizes with whatever token was stored at open
    // time; later store mutations must not matter for this stream.
    Mock::given(method("GET"))
        .and(path("/api/match/tasks/t-6/events"))
        .and(header("Authorization", "Bearer open-time-token"))
        .respond_with(
            sse_response("event: task_completed\ndata: {}\n\n")
                .set_delay(Duration::from_millis(100)),
        )
        .expect(1)
        .mount(&ctx.server)
        .await;

    let (events, handler) = collector();
    let stream = ctx.client.task_events()?;

    let store = ctx.store.clone();
    let mutate = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        store.update_access_token("rotated-token").await
    });

    stream.stream_task_events("t-6", handler, Default::default()).await?;
    mutate.await.expect("join").expect("update");

    assert_eq!(events.lock().expect("events lock").len(), 1);
    Ok(())
}
