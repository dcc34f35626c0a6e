use super::*;

#[test]
fn trigger_markup_is_one_complete_link() {
    assert!(TRIGGER_MARKUP.starts_with(r##"<a href="#" class="assistant-trigger-link">"##));
    assert!(TRIGGER_MARKUP.ends_with("</a>"));
    assert_eq!(TRIGGER_MARKUP.matches("<a ").count(), 1);
}

#[test]
fn trigger_markup_carries_icon_and_label() {
    assert!(TRIGGER_MARKUP.contains(r#"<i class="fa-solid fa-robot"></i>"#));
    assert!(TRIGGER_MARKUP.contains("<span>AI Assistant</span>"));
}

#[test]
fn modal_element_ids_are_distinct() {
    assert_ne!(MODAL_ID, MESSAGES_ID);
    assert_ne!(MESSAGES_ID, INPUT_ID);
    assert_ne!(MODAL_ID, INPUT_ID);
}
