use super::*;

#[test]
fn unreserved_characters_pass_through() {
    let s = "AZaz09-_.!~*'()";
    assert_eq!(encode_uri_component(s), s);
}

#[test]
fn reserved_and_non_ascii_are_escaped() {
    assert_eq!(encode_uri_component("<a b=\"#\"/>"), "%3Ca%20b%3D%22%23%22%2F%3E");
    assert_eq!(encode_uri_component("%"), "%25");
    assert_eq!(encode_uri_component("é"), "%C3%A9");
}

#[test]
fn decode_reverses_encode() {
    let doc = r#"<svg viewBox="0 0 336 96"><rect fill="hsla(0, 0%, 50%, 0.93)"/></svg>"#;
    assert_eq!(decode_uri_component(&encode_uri_component(doc)).unwrap(), doc);
}

#[test]
fn decode_rejects_truncated_escapes() {
    assert!(decode_uri_component("abc%2").is_err());
    assert!(decode_uri_component("%zz").is_err());
    assert!(decode_uri_component("%FF").is_err());
}

#[test]
fn data_uri_prefix_is_checked() {
    let uri = to_data_uri("<svg/>");
    assert_eq!(uri, "data:image/svg+xml,%3Csvg%2F%3E");
    assert_eq!(from_data_uri(&uri).unwrap(), "<svg/>");
    assert!(from_data_uri("data:image/png;base64,AAAA").is_err());
}
