use super::*;

// =============================================================
// ImageError
// =============================================================

#[test]
fn decode_error_names_the_file() {
    let message = ImageError::Decode.to_string();
    assert!(message.contains("decoded"));
}

#[test]
fn resource_error_names_the_browser() {
    let message = ImageError::ResourceUnavailable.to_string();
    assert!(message.contains("unavailable"));
}

#[test]
fn interrupted_error_names_the_drop() {
    let message = ImageError::Interrupted.to_string();
    assert!(message.contains("dropped"));
}

#[test]
fn errors_are_debug_formattable() {
    let s = format!("{:?}", ImageError::Decode);
    assert_eq!(s, "Decode");
}
