use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_escape_json() {
    assert_eq!(escape_json("hello"), "hello");
    assert_eq!(escape_json("\"quoted\""), "\\\"quoted\\\"");
    assert_eq!(escape_json("line1\nline2"), "line1\\nline2");
    assert_eq!(escape_json("path\\file"), "path\\\\file");
    assert_eq!(escape_json("tab\there"), "tab\\there");
    assert_eq!(escape_json("bell\u{7}"), "bell\\u0007");
}

#[test]
fn test_arc_and_box_forward_to_inner_sink() {
    let memory = Arc::new(MemorySink::new());

    let boxed: Box<dyn DiagnosticSink> = Box::new(Arc::clone(&memory));
    boxed.record("via box", &Detail::Null);
    Arc::clone(&memory).record("via arc", &Detail::default());

    let messages: Vec<_> = memory.records().into_iter().map(|r| r.message).collect();
    assert_eq!(messages, vec!["via box".to_string(), "via arc".to_string()]);
}
