//! InsightClient の単体テスト（StubProvider を注入）

use std::sync::Arc;

use common::adapter::NoopLog;

use crate::adapter::{StubBehavior, StubProvider};
use crate::domain::{Trend, WeightEntry};
use crate::usecase::insight::{
    fallback_insight, insufficient_data_insight, InsightClient, InsightError,
};

fn entry(date: &str, weight: f64) -> WeightEntry {
    WeightEntry {
        id: date.to_string(),
        weight,
        date: date.to_string(),
        note: None,
    }
}

fn client_with(provider: &Arc<StubProvider>) -> InsightClient {
    InsightClient::new(provider.clone(), Arc::new(NoopLog))
}

#[test]
fn test_fewer_than_two_entries_makes_no_external_call() {
    let provider = Arc::new(StubProvider::valid_insight());
    let client = client_with(&provider);

    let none = client.request_insight(&[]);
    let one = client.request_insight(&[entry("2024-01-01T00:00:00+00:00", 80.0)]);

    assert_eq!(none, insufficient_data_insight());
    assert_eq!(one, insufficient_data_insight());
    assert_eq!(provider.http_calls(), 0);
}

#[test]
fn test_prompt_contains_all_entries_in_ascending_date_order() {
    let provider = Arc::new(StubProvider::valid_insight());
    let client = client_with(&provider);

    // 入力は降順
    client.request_insight(&[
        entry("2024-01-05T00:00:00+00:00", 79.2),
        entry("2024-01-01T00:00:00+00:00", 80.0),
    ]);

    let prompt = provider.last_prompt().expect("prompt must be built");
    let first = prompt
        .find("2024-01-01T00:00:00+00:00: 80kg")
        .expect("oldest entry in prompt");
    let second = prompt
        .find("2024-01-05T00:00:00+00:00: 79.2kg")
        .expect("newest entry in prompt");
    assert!(first < second);
    assert_eq!(provider.http_calls(), 1);
}

#[test]
fn test_valid_response_is_parsed() {
    let provider = Arc::new(StubProvider::valid_insight());
    let client = client_with(&provider);

    let insight = client.request_insight(&[
        entry("2024-01-01T00:00:00+00:00", 80.0),
        entry("2024-01-05T00:00:00+00:00", 79.2),
    ]);

    assert_eq!(insight.trend, Trend::Down);
    assert_eq!(insight.summary, "Your weight is trending down.");
}

#[test]
fn test_malformed_payload_degrades_to_fallback() {
    let provider = Arc::new(StubProvider::new(StubBehavior::Text(
        "this is not the requested JSON".to_string(),
    )));
    let client = client_with(&provider);

    let insight = client.request_insight(&[
        entry("2024-01-01T00:00:00+00:00", 80.0),
        entry("2024-01-05T00:00:00+00:00", 79.2),
    ]);

    assert_eq!(insight.trend, Trend::Stable);
    assert_eq!(insight.summary, "Analysis is not available right now.");
    assert_eq!(provider.http_calls(), 1);
}

#[test]
fn test_transport_failure_degrades_to_fallback() {
    let provider = Arc::new(StubProvider::new(StubBehavior::HttpError));
    let client = client_with(&provider);

    let insight = client.request_insight(&[
        entry("2024-01-01T00:00:00+00:00", 80.0),
        entry("2024-01-05T00:00:00+00:00", 79.2),
    ]);

    assert_eq!(
        insight,
        fallback_insight(&InsightError::Request("any".to_string()))
    );
}

#[test]
fn test_empty_response_degrades_to_fallback() {
    let provider = Arc::new(StubProvider::new(StubBehavior::Empty));
    let client = client_with(&provider);

    let insight = client.request_insight(&[
        entry("2024-01-01T00:00:00+00:00", 80.0),
        entry("2024-01-05T00:00:00+00:00", 79.2),
    ]);

    assert_eq!(insight.trend, Trend::Stable);
}

#[test]
fn test_fetch_insight_reports_failure_reason() {
    let entries = [
        entry("2024-01-01T00:00:00+00:00", 80.0),
        entry("2024-01-05T00:00:00+00:00", 79.2),
    ];

    let malformed = client_with(&Arc::new(StubProvider::new(StubBehavior::Text(
        "nope".to_string(),
    ))))
    .fetch_insight(&entries);
    assert!(matches!(malformed, Err(InsightError::Malformed(_))));

    let empty = client_with(&Arc::new(StubProvider::new(StubBehavior::Empty)))
        .fetch_insight(&entries);
    assert!(matches!(empty, Err(InsightError::EmptyResponse)));

    let transport = client_with(&Arc::new(StubProvider::new(StubBehavior::HttpError)))
        .fetch_insight(&entries);
    assert!(matches!(transport, Err(InsightError::Request(_))));
}
