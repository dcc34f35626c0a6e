use super::*;

#[test]
fn renders_basic_markdown() {
    let html = render_markdown_html("Post at **9am** for reach.");
    assert_eq!(html, "<p>Post at <strong>9am</strong> for reach.</p>\n");
}

#[test]
fn renders_lists() {
    let html = render_markdown_html("- one\n- two\n");
    assert!(html.contains("<ul>"));
    assert!(html.contains("<li>two</li>"));
}

#[test]
fn strips_raw_html() {
    let html = render_markdown_html("hi <script>alert(1)</script> there");
    assert!(!html.contains("<script>"));
    assert!(html.contains("hi"));
    assert!(html.contains("there"));
}

#[test]
fn escapes_angle_brackets_in_text() {
    let html = render_markdown_html("`a < b`");
    assert!(html.contains("a &lt; b"));
}
