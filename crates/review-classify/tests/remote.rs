//! Tests for the remote classification strategy against a loopback server.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::mpsc;
use std::thread;

use review_classify::{Classifier, ClassifyError, RemoteClassifier, RemoteConfig, annotate};
use review_model::{CellValue, ReviewTable, Row};

/// Canned reply for one expected request.
enum Reply {
    Content(&'static str),
    ServerError,
}

/// Serves one canned reply per incoming request, then stops. Received request
/// bodies are sent back over the channel for inspection.
fn spawn_server(replies: Vec<Reply>) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    let (body_tx, body_rx) = mpsc::channel();

    thread::spawn(move || {
        for reply in replies {
            let Ok((stream, _)) = listener.accept() else {
                return;
            };
            let mut reader = BufReader::new(stream);
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).is_err() || line.trim().is_empty() {
                    break;
                }
                if let Some(value) = line
                    .to_ascii_lowercase()
                    .strip_prefix("content-length:")
                    .map(str::trim)
                {
                    content_length = value.parse().unwrap_or(0);
                }
            }
            let mut body = vec![0u8; content_length];
            reader.read_exact(&mut body).expect("read body");
            let _ = body_tx.send(String::from_utf8_lossy(&body).into_owned());

            let response = match reply {
                Reply::Content(content) => {
                    let payload = format!(
                        "{{\"choices\":[{{\"message\":{{\"content\":\"{content}\"}}}}]}}"
                    );
                    format!(
                        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\n\
                         Content-Length: {}\r\nConnection: close\r\n\r\n{payload}",
                        payload.len()
                    )
                }
                Reply::ServerError => "HTTP/1.1 500 Internal Server Error\r\n\
                     Content-Length: 0\r\nConnection: close\r\n\r\n"
                    .to_string(),
            };
            let mut stream = reader.into_inner();
            stream.write_all(response.as_bytes()).expect("write");
        }
    });

    (format!("http://{addr}/v1/chat/completions"), body_rx)
}

fn classifier_for(url: &str) -> RemoteClassifier {
    let config = RemoteConfig::new("test-key", "458").with_base_url(url);
    RemoteClassifier::new(config).expect("client")
}

fn text(value: &str) -> CellValue {
    CellValue::Text(value.to_string())
}

#[test]
fn classifies_sentiment_then_topic_per_row() {
    let (url, bodies) = spawn_server(vec![
        Reply::Content("Positive"),
        Reply::Content("Negative"),
        Reply::Content("Delivery"),
        Reply::Content("Pricing"),
    ]);
    let classifier = classifier_for(&url);
    let texts = vec![text("fast shipping"), text("too expensive")];
    let annotations = classifier.annotations(&texts).expect("classify");

    assert_eq!(annotations.len(), 2);
    assert_eq!(annotations[0].sentiment, "Positive");
    assert_eq!(annotations[0].topic, "Delivery");
    assert_eq!(annotations[0].feedback_type, None);
    assert_eq!(annotations[1].sentiment, "Negative");
    assert_eq!(annotations[1].topic, "Pricing");

    // First request carries the sentiment prompt and bounded output length.
    let first = bodies.recv().expect("first body");
    assert!(first.contains("\"project_id\":\"458\""));
    assert!(first.contains("Classify the sentiment"));
    assert!(first.contains("fast shipping"));
    assert!(first.contains("\"max_tokens\":10"));
    assert!(first.contains("\"temperature\":0.7"));
    // Third request switches to the topic prompt.
    let _second = bodies.recv().expect("second body");
    let third = bodies.recv().expect("third body");
    assert!(third.contains("Identify the topic"));
    assert!(third.contains("\"max_tokens\":20"));
}

#[test]
fn model_output_is_trimmed_but_not_validated() {
    let (url, _bodies) = spawn_server(vec![
        Reply::Content("  Mostly Fine  "),
        Reply::Content("Logistics"),
    ]);
    let classifier = classifier_for(&url);
    let annotations = classifier.annotations(&[text("ok")]).expect("classify");
    // Whatever the model says is passed through verbatim after trimming.
    assert_eq!(annotations[0].sentiment, "Mostly Fine");
    assert_eq!(annotations[0].topic, "Logistics");
}

#[test]
fn missing_cells_are_not_sent_over_the_wire() {
    let (url, bodies) = spawn_server(vec![
        Reply::Content("Positive"),
        Reply::Content("Delivery"),
    ]);
    let classifier = classifier_for(&url);
    let texts = vec![CellValue::Missing, text("quick delivery")];
    let annotations = classifier.annotations(&texts).expect("classify");

    assert_eq!(annotations[0].sentiment, "Neutral");
    assert_eq!(annotations[0].topic, "Unknown");
    assert_eq!(annotations[1].sentiment, "Positive");
    assert_eq!(annotations[1].topic, "Delivery");
    // Exactly two requests for the single text cell.
    assert!(bodies.try_iter().count() <= 2);
}

#[test]
fn failed_topic_call_leaves_no_partial_columns() {
    // Two sentiment calls succeed, the second topic call fails; the error
    // aborts the pass and the table keeps none of the computed labels.
    let (url, _bodies) = spawn_server(vec![
        Reply::Content("Positive"),
        Reply::Content("Negative"),
        Reply::Content("Delivery"),
        Reply::ServerError,
    ]);
    let classifier = classifier_for(&url);

    let mut table = ReviewTable::new(vec!["review".to_string()]);
    for value in ["fast shipping", "broken on arrival"] {
        let mut row = Row::default();
        row.insert("review", text(value));
        table.push_row(row);
    }
    let before = table.clone();

    let err = annotate(&mut table, "review", &classifier).unwrap_err();
    assert!(matches!(err, ClassifyError::Remote(_)));
    assert_eq!(table, before);
    assert!(!table.has_column("sentiment"));
    assert!(!table.has_column("topic"));
}

#[test]
fn unreachable_service_is_a_remote_error() {
    // Port from a listener that is immediately dropped.
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let classifier = classifier_for(&format!("http://{addr}/v1/chat/completions"));
    let err = classifier.annotations(&[text("hello")]).unwrap_err();
    assert!(matches!(err, ClassifyError::Remote(_)));
}
