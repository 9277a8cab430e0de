use super::*;

#[test]
fn escape_dismisses() {
    assert!(is_dismiss_key("Escape"));
    assert!(is_dismiss_key("Esc"));
}

#[test]
fn other_keys_keep_dialog_open() {
    assert!(!is_dismiss_key("Enter"));
    assert!(!is_dismiss_key("e"));
    assert!(!is_dismiss_key(""));
}
