use anyhow::Result;
use httpmock::prelude::*;
use json_batch_fetch::core::presenter;
use json_batch_fetch::utils::error::ErrorCategory;
use json_batch_fetch::{BatchFetcher, ElapsedTimeReporter, MonotonicClock, ReqwestHttpClient};
use serde_json::json;
use std::time::Duration;

fn fetcher() -> BatchFetcher<ReqwestHttpClient> {
    BatchFetcher::new(ReqwestHttpClient::new())
}

#[tokio::test]
async fn test_all_success_round_trip() -> Result<()> {
    let server = MockServer::start();
    let mocks = [
        server.mock(|when, then| {
            when.method(GET).path("/ftse-fsi.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"a": 1}));
        }),
        server.mock(|when, then| {
            when.method(GET).path("/gbp-hkd.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"b": 2}));
        }),
        server.mock(|when, then| {
            when.method(GET).path("/gbp-usd.json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"c": 3}));
        }),
    ];

    let urls = [
        server.url("/ftse-fsi.json"),
        server.url("/gbp-hkd.json"),
        server.url("/gbp-usd.json"),
    ];
    let urls: Vec<&str> = urls.iter().map(String::as_str).collect();

    let results = fetcher().fetch_urls(&urls).await?;

    for mock in &mocks {
        mock.assert();
    }
    assert_eq!(results, vec![json!({"a": 1}), json!({"b": 2}), json!({"c": 3})]);
    Ok(())
}

#[tokio::test]
async fn test_order_preserved_when_responses_arrive_reversed() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/first");
        then.status(200)
            .delay(Duration::from_millis(300))
            .json_body(json!({"n": 1}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/second");
        then.status(200)
            .delay(Duration::from_millis(150))
            .json_body(json!({"n": 2}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/third");
        then.status(200).json_body(json!({"n": 3}));
    });

    let urls = [server.url("/first"), server.url("/second"), server.url("/third")];
    let urls: Vec<&str> = urls.iter().map(String::as_str).collect();

    let results = fetcher().fetch_urls(&urls).await?;

    assert_eq!(results, vec![json!({"n": 1}), json!({"n": 2}), json!({"n": 3})]);
    Ok(())
}

#[tokio::test]
async fn test_one_not_found_fails_whole_batch() {
    let server = MockServer::start();
    let ok_first = server.mock(|when, then| {
        when.method(GET).path("/one");
        then.status(200).json_body(json!({"a": 1}));
    });
    let missing = server.mock(|when, then| {
        when.method(GET).path("/two");
        then.status(404);
    });
    let ok_third = server.mock(|when, then| {
        when.method(GET).path("/three");
        then.status(200).json_body(json!({"c": 3}));
    });

    let urls = [server.url("/one"), server.url("/two"), server.url("/three")];
    let urls: Vec<&str> = urls.iter().map(String::as_str).collect();

    let err = fetcher().fetch_urls(&urls).await.unwrap_err();

    ok_first.assert();
    missing.assert();
    ok_third.assert();
    assert_eq!(err.category(), ErrorCategory::Status);
    assert_eq!(err.to_string(), "Not Found");
}

#[tokio::test]
async fn test_malformed_json_fails_batch() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/good");
        then.status(200).json_body(json!({"a": 1}));
    });
    server.mock(|when, then| {
        when.method(GET).path("/bad");
        then.status(200).body("not json");
    });

    let urls = [server.url("/good"), server.url("/bad")];
    let urls: Vec<&str> = urls.iter().map(String::as_str).collect();

    let err = fetcher().fetch_urls(&urls).await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Parse);
    let rendered = presenter::render_failure(&err);
    assert!(rendered.starts_with(presenter::FAILURE_MESSAGE));
    assert!(!rendered.contains(&server.url("/bad")));
    assert!(!rendered.contains(&server.address().to_string()));
}

#[tokio::test]
async fn test_empty_input_issues_no_requests() -> Result<()> {
    let server = MockServer::start();
    let any = server.mock(|when, then| {
        when.method(GET);
        then.status(200).json_body(json!({}));
    });

    let results = fetcher().fetch_urls(&[]).await?;

    assert!(results.is_empty());
    any.assert_hits(0);
    Ok(())
}

#[tokio::test]
async fn test_reporter_runs_on_success_and_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/ok");
        then.status(200).json_body(json!([1, 2, 3]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/down");
        then.status(503);
    });

    let fetcher = fetcher();
    let reporter = ElapsedTimeReporter::new(MonotonicClock);

    let ok_url = server.url("/ok");
    let success = reporter.measure(fetcher.fetch_urls(&[ok_url.as_str()])).await;
    assert_eq!(success.outcome.unwrap(), vec![json!([1, 2, 3])]);
    assert!(success.elapsed.as_millis_f64() >= 0.0);

    let down_url = server.url("/down");
    let failure = reporter.measure(fetcher.fetch_urls(&[down_url.as_str()])).await;
    let err = failure.outcome.unwrap_err();
    assert_eq!(err.to_string(), "Service Unavailable");
    assert!(failure.elapsed.as_millis_f64() >= 0.0);
}
