use super::*;

#[test]
fn preview_keeps_short_text() {
    assert_eq!(preview("dark"), "dark");
    assert_eq!(preview(""), "");
}

#[test]
fn preview_truncates_on_char_boundary() {
    let long = "é".repeat(PREVIEW_CHARS + 5);
    let short = preview(&long);
    assert_eq!(short.chars().count(), PREVIEW_CHARS + 1);
    assert!(short.ends_with('…'));
}
