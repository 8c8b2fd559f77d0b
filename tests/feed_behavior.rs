//! Behavior-driven tests for the history feed adapter.
//!
//! These tests verify HOW the system talks to the remote endpoint:
//! authentication on every request, single-shot reads, and the retrying
//! write path that never produces a partial or duplicate row.

use chaintick_tests::{
    record, scripted_feed, Arc, HttpError, HttpMethod, HttpResponse, NewPriceRecord, PriceFeed,
    ScriptedClient,
};

use chaintick_core::FeedErrorKind;

// =============================================================================
// Read path
// =============================================================================

#[tokio::test]
async fn when_the_endpoint_answers_the_history_is_parsed_into_records() {
    // Given: a wire payload with mixed date spellings and a sparse row
    let body = r#"[
        {"Date":"01/05/2024","Price":42750.5,"Open":42000.0,"High":43100.0,
         "ChangePercentFromLastMonth":-2.4,"Volume":"500.00K"},
        {"Date":"2024-01-03","Price":41200.0}
    ]"#;
    let client = Arc::new(ScriptedClient::new(vec![Ok(HttpResponse::ok_json(body))]));
    let feed = scripted_feed(Arc::clone(&client));

    // When: fetching history
    let history = feed.fetch_history().await.expect("history parses");

    // Then: both rows arrive, sparse fields defaulted
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].volume, "500.00K");
    assert_eq!(history[1].open, 0.0);
    assert_eq!(history[1].volume, "0");
}

#[tokio::test]
async fn when_reading_every_request_carries_the_bearer_token() {
    let client = Arc::new(ScriptedClient::new(vec![Ok(HttpResponse::ok_json("[]"))]));
    let feed = scripted_feed(Arc::clone(&client));

    feed.fetch_history().await.expect("empty history is fine");

    let requests = client.requests();
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert_eq!(
        requests[0].headers.get("authorization").map(String::as_str),
        Some("Bearer test-token")
    );
}

#[tokio::test]
async fn when_a_read_fails_it_surfaces_immediately_without_retry() {
    let client = Arc::new(ScriptedClient::new(vec![Err(HttpError::new(
        "connection refused",
    ))]));
    let feed = scripted_feed(Arc::clone(&client));

    let error = feed.fetch_history().await.expect_err("read must fail");

    assert_eq!(error.kind(), FeedErrorKind::Unavailable);
    assert_eq!(client.request_count(), 1, "reads never retry");
}

#[tokio::test]
async fn when_the_endpoint_returns_garbage_the_error_names_parsing() {
    let client = Arc::new(ScriptedClient::new(vec![Ok(HttpResponse::ok_json(
        "not json at all",
    ))]));
    let feed = scripted_feed(client);

    let error = feed.fetch_history().await.expect_err("must fail");
    assert_eq!(error.kind(), FeedErrorKind::Parse);
}

// =============================================================================
// Write path: retry with backoff
// =============================================================================

fn new_record() -> NewPriceRecord {
    NewPriceRecord::new("01/05/2024", 42_750.5, Some(42_000.0), Some(43_100.0), None, None)
        .expect("valid record")
}

#[tokio::test]
async fn when_the_first_write_succeeds_no_retry_happens() {
    let client = Arc::new(ScriptedClient::new(vec![Ok(HttpResponse::ok_json(
        r#"{"Date":"01/05/2024","Price":42750.5,"id":"stored-1"}"#,
    ))]));
    let feed = scripted_feed(Arc::clone(&client));

    let stored = feed.submit(new_record()).await.expect("write succeeds");

    assert_eq!(stored.id.as_deref(), Some("stored-1"));
    assert_eq!(client.request_count(), 1);
}

#[tokio::test]
async fn when_two_writes_fail_the_third_attempt_still_lands() {
    let client = Arc::new(ScriptedClient::new(vec![
        Err(HttpError::new("reset")),
        Ok(HttpResponse {
            status: 503,
            body: String::from("busy"),
        }),
        Ok(HttpResponse::ok_json(
            r#"{"Date":"01/05/2024","Price":42750.5,"id":"stored-2"}"#,
        )),
    ]));
    let feed = scripted_feed(Arc::clone(&client));

    let stored = feed.submit(new_record()).await.expect("third attempt lands");

    assert_eq!(stored.id.as_deref(), Some("stored-2"));
    assert_eq!(client.request_count(), 3);
}

#[tokio::test]
async fn when_three_writes_fail_one_final_error_surfaces() {
    // Given: three consecutive simulated network failures
    let client = Arc::new(ScriptedClient::new(vec![
        Err(HttpError::new("failure one")),
        Err(HttpError::new("failure two")),
        Err(HttpError::new("failure three")),
    ]));
    let feed = scripted_feed(Arc::clone(&client));

    // When: submitting once
    let error = feed.submit(new_record()).await.expect_err("must exhaust");

    // Then: exactly three attempts, and the caller sees the last failure
    assert_eq!(client.request_count(), 3);
    assert!(error.message().contains("failure three"));
}

#[tokio::test]
async fn when_a_write_retries_the_same_row_is_sent_every_time() {
    // Given: two failures before success
    let client = Arc::new(ScriptedClient::new(vec![
        Err(HttpError::new("reset")),
        Err(HttpError::new("reset")),
        Ok(HttpResponse::ok_json(
            r#"{"Date":"01/05/2024","Price":42750.5,"id":"stored-3"}"#,
        )),
    ]));
    let feed = scripted_feed(Arc::clone(&client));

    feed.submit(new_record()).await.expect("write lands");

    // Then: every attempt posted the identical body — same generated id,
    // so no duplicate row can appear server-side
    let bodies: Vec<String> = client
        .requests()
        .iter()
        .map(|r| r.body.clone().expect("write has a body"))
        .collect();
    assert_eq!(bodies.len(), 3);
    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[1], bodies[2]);

    let parsed: serde_json::Value = serde_json::from_str(&bodies[0]).expect("body is json");
    assert!(parsed.get("id").and_then(|v| v.as_str()).is_some());
    assert_eq!(parsed["Price"], 42_750.5);
}

#[tokio::test]
async fn when_writing_numeric_fields_go_out_as_numbers() {
    let client = Arc::new(ScriptedClient::new(vec![Ok(HttpResponse::ok_json(
        r#"{"Date":"01/05/2024","Price":42750.5}"#,
    ))]));
    let feed = scripted_feed(Arc::clone(&client));

    feed.submit(new_record()).await.expect("write lands");

    let body = client.requests()[0].body.clone().expect("write has a body");
    let parsed: serde_json::Value = serde_json::from_str(&body).expect("body is json");

    assert!(parsed["Price"].is_f64());
    assert!(parsed["Open"].is_f64());
    assert!(parsed["High"].is_f64());
    assert!(parsed["ChangePercentFromLastMonth"].is_f64());
    assert!(parsed["Volume"].is_string());
}

// =============================================================================
// Wire round trip
// =============================================================================

#[test]
fn when_a_record_round_trips_the_wire_names_are_pascal_case() {
    let rendered = serde_json::to_value(record("01/05/2024", 42_750.5)).expect("serializes");

    assert_eq!(rendered["Date"], "01/05/2024");
    assert_eq!(rendered["Price"], 42_750.5);
    assert!(rendered.get("date").is_none());
}
