use super::*;
use pretty_assertions::assert_eq;

#[derive(Debug, thiserror::Error)]
#[error("connection reset by peer")]
struct ConnectionReset;

#[derive(Debug, thiserror::Error)]
#[error("timed out after {0}ms")]
struct Timeout(u64, #[source] ConnectionReset);

#[derive(Debug, thiserror::Error)]
#[error("fetch failed")]
struct FetchFailed(#[source] Timeout);

#[derive(Debug, thiserror::Error)]
#[error("request failed")]
struct HttpError {
    status: u16,
    url: String,
}

#[test]
fn test_default_is_placeholder_text() {
    assert_eq!(
        Detail::default(),
        Detail::Text("No stack trace provided".to_string())
    );
}

#[test]
fn test_text_displays_unmodified() {
    assert_eq!(Detail::text("  at main.rs:10\n").to_string(), "  at main.rs:10\n");
    assert_eq!(Detail::text("").to_string(), "");
}

#[test]
fn test_null_displays_as_null() {
    assert_eq!(Detail::Null.to_string(), "null");
}

#[test]
fn test_error_keeps_fields_not_in_display() {
    let detail = Detail::from_error(HttpError {
        status: 503,
        url: "http://x".to_string(),
    });

    assert_eq!(detail.to_string(), "request failed");
    let http = detail
        .as_error()
        .and_then(|err| err.downcast_ref::<HttpError>())
        .unwrap();
    assert_eq!(http.status, 503);
    assert_eq!(http.url, "http://x");
    assert!(format!("{detail:?}").contains("503"));
}

#[test]
fn test_causes_walk_source_chain() {
    let detail = Detail::from_error(FetchFailed(Timeout(3000, ConnectionReset)));
    let causes: Vec<String> = detail.causes().map(ToString::to_string).collect();

    assert_eq!(
        causes,
        vec![
            "timed out after 3000ms".to_string(),
            "connection reset by peer".to_string(),
        ]
    );
}

#[test]
fn test_causes_empty_for_text_and_null() {
    assert_eq!(Detail::text("x").causes().count(), 0);
    assert_eq!(Detail::Null.causes().count(), 0);
    assert_eq!(Detail::from_error(ConnectionReset).causes().count(), 0);
}

#[test]
fn test_error_display_joins_causes() {
    let detail = Detail::from_error(FetchFailed(Timeout(5, ConnectionReset)));
    assert_eq!(
        detail.to_string(),
        "fetch failed: timed out after 5ms: connection reset by peer"
    );
}

#[test]
fn test_errors_compare_by_identity() {
    let shared: SharedError = Arc::new(ConnectionReset);
    assert_eq!(
        Detail::from_shared(shared.clone()),
        Detail::from(shared.clone())
    );
    assert_ne!(
        Detail::from_shared(shared),
        Detail::from_error(ConnectionReset)
    );
}

#[test]
fn test_boxed_error_conversion() {
    let boxed: Box<dyn Error + Send + Sync> = Box::new(Timeout(1, ConnectionReset));
    let detail = Detail::from(boxed);
    assert_eq!(detail.kind(), "error");
    assert_eq!(detail.to_string(), "timed out after 1ms: connection reset by peer");
}

#[test]
fn test_text_conversions() {
    assert_eq!(Detail::from("trace"), Detail::Text("trace".to_string()));
    assert_eq!(
        Detail::from(String::from("trace")),
        Detail::Text("trace".to_string())
    );
    assert_ne!(Detail::text(""), Detail::Null);
}

#[test]
fn test_kind_tags() {
    assert_eq!(Detail::text("x").kind(), "text");
    assert_eq!(Detail::Null.kind(), "null");
    assert_eq!(Detail::from_error(ConnectionReset).kind(), "error");
}
