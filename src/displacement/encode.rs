use crate::foundation::error::{GlassError, GlassResult};

/// Prefix of an inline, percent-encoded SVG image reference.
pub const DATA_URI_PREFIX: &str = "data:image/svg+xml,";

const HEX: &[u8; 16] = b"0123456789ABCDEF";

fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(b, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

/// Percent-encode `s` the way `encodeURIComponent` does.
///
/// Every UTF-8 byte outside `A-Z a-z 0-9 - _ . ! ~ * ' ( )` becomes `%XX` (uppercase hex).
/// Output length is linear in the input length.
pub fn encode_uri_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 3 / 2);
    for &b in s.as_bytes() {
        if is_unreserved(b) {
            out.push(char::from(b));
        } else {
            out.push('%');
            out.push(char::from(HEX[usize::from(b >> 4)]));
            out.push(char::from(HEX[usize::from(b & 0x0f)]));
        }
    }
    out
}

/// Reverse of [`encode_uri_component`].
pub fn decode_uri_component(s: &str) -> GlassResult<String> {
    fn hex_val(b: u8) -> Option<u8> {
        match b {
            b'0'..=b'9' => Some(b - b'0'),
            b'a'..=b'f' => Some(b - b'a' + 10),
            b'A'..=b'F' => Some(b - b'A' + 10),
            _ => None,
        }
    }

    let bytes = s.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hi = bytes.get(i + 1).copied().and_then(hex_val);
            let lo = bytes.get(i + 2).copied().and_then(hex_val);
            let (Some(hi), Some(lo)) = (hi, lo) else {
                return Err(GlassError::validation(format!(
                    "malformed percent escape at byte {i}"
                )));
            };
            out.push((hi << 4) | lo);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).map_err(|_| GlassError::validation("decoded data is not UTF-8"))
}

/// Wrap a serialized SVG document as an inline image reference.
pub fn to_data_uri(document: &str) -> String {
    let encoded = encode_uri_component(document);
    let mut uri = String::with_capacity(DATA_URI_PREFIX.len() + encoded.len());
    uri.push_str(DATA_URI_PREFIX);
    uri.push_str(&encoded);
    uri
}

/// Extract the SVG document from an inline image reference.
pub fn from_data_uri(uri: &str) -> GlassResult<String> {
    let Some(payload) = uri.strip_prefix(DATA_URI_PREFIX) else {
        return Err(GlassError::validation(format!(
            "not an inline svg reference (expected '{DATA_URI_PREFIX}' prefix)"
        )));
    };
    decode_uri_component(payload)
}

#[cfg(test)]
#[path = "../../tests/unit/displacement/encode.rs"]
mod tests;
