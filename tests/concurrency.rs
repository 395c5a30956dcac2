//! Concurrent writers against one sink: every accepted POST lands as exactly
//! one intact line, in some order.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use debuglog_sink::log_record::LogRecord;
use debuglog_sink::{build_router, AppState, LogSink};
use std::collections::HashSet;
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn concurrent_posts_produce_one_intact_line_each() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("debug.log");
    let sink = Arc::new(LogSink::with_console(path.clone(), Box::new(std::io::sink())));
    let app = build_router(AppState::new(sink, None, 1024 * 1024));

    let n = 200;
    let padding = "z".repeat(512);
    let mut tasks = Vec::with_capacity(n);
    for i in 0..n {
        let app = app.clone();
        let body = serde_json::json!({
            "level": if i % 2 == 0 { "INFO" } else { "WARN" },
            "message": format!("request-{i}-{padding}"),
        })
        .to_string();

        tasks.push(tokio::spawn(async move {
            let req = Request::builder()
                .uri("/log")
                .method("POST")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::CONTENT_LENGTH, body.len())
                .body(Body::from(body))
                .unwrap();
            app.oneshot(req).await.unwrap().status()
        }));
    }

    for task in tasks {
        assert_eq!(task.await.unwrap(), StatusCode::OK);
    }

    let file = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = file.lines().collect();
    assert_eq!(lines.len(), n);

    let mut seen = HashSet::new();
    for line in lines {
        let record = LogRecord::parse_line(line).expect("well-formed line");
        let (id, tail) = record
            .message
            .strip_prefix("request-")
            .and_then(|m| m.split_once('-'))
            .expect("message prefix intact");
        assert_eq!(tail, padding);

        let id: usize = id.parse().unwrap();
        let expected_level = if id % 2 == 0 { "INFO" } else { "WARN" };
        assert_eq!(record.level, expected_level);
        assert!(seen.insert(id), "request {id} logged twice");
    }
    assert_eq!(seen.len(), n);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn timestamps_never_decrease_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("debug.log");
    let sink = Arc::new(LogSink::with_console(path.clone(), Box::new(std::io::sink())));

    let mut handles = Vec::new();
    for i in 0..64 {
        let sink = Arc::clone(&sink);
        handles.push(tokio::task::spawn_blocking(move || {
            sink.commit("INFO", &format!("tick {i}")).unwrap();
        }));
    }
    for h in handles {
        h.await.unwrap();
    }

    let file = std::fs::read_to_string(&path).unwrap();
    let stamps: Vec<String> = file
        .lines()
        .map(|l| LogRecord::parse_line(l).unwrap().timestamp)
        .collect();
    assert_eq!(stamps.len(), 64);
    // fixed-width format: lexical order is chronological order
    assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
}
