//! Share-token encoding of the recipe view state.
//!
//! Token = percent-escape(base64(json(state))). The JSON field names and the
//! escaping rules match what browsers produce with `encodeURIComponent`, so
//! tokens round-trip through a URL fragment unchanged.
//!
//! The base64 payload holds one byte per character (Latin-1) whenever every
//! character fits, the way `btoa` writes it. Documents with wider characters
//! fall back to UTF-8.

use base64::{engine::general_purpose::STANDARD, Engine};
use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::types::{CatalogueError, CatalogueResult, DecodeError, DecodedState, UiState};

/// Location prefix in front of a share token.
pub const SHARE_PREFIX: &str = "#/share/";

/// Characters escaped in a token: everything except ASCII alphanumerics
/// and `-_.!~*'()`.
const FRAGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode `state` as an opaque, URL-safe token.
pub fn encode(state: &UiState) -> CatalogueResult<String> {
    let json = serde_json::to_string(state).map_err(CatalogueError::Encode)?;
    let payload = STANDARD.encode(to_latin1(&json).unwrap_or_else(|| json.into_bytes()));
    Ok(utf8_percent_encode(&payload, FRAGMENT).to_string())
}

/// Decode a token produced by [`encode`].
pub fn decode(token: &str) -> Result<DecodedState, DecodeError> {
    check_escapes(token)?;
    let payload = percent_decode_str(token)
        .decode_utf8()
        .map_err(|_| DecodeError::Utf8)?;
    let bytes = STANDARD.decode(payload.as_bytes())?;
    let json = String::from_utf8(bytes)
        .unwrap_or_else(|e| e.into_bytes().iter().map(|&b| b as char).collect());
    Ok(serde_json::from_str(&json)?)
}

/// Full location fragment (`#/share/<token>`) for `state`.
pub fn share_fragment(state: &UiState) -> CatalogueResult<String> {
    Ok(format!("{}{}", SHARE_PREFIX, encode(state)?))
}

/// Decode a location fragment of the form `#/share/<token>`.
pub fn decode_fragment(fragment: &str) -> Result<DecodedState, DecodeError> {
    let token = fragment
        .strip_prefix(SHARE_PREFIX)
        .ok_or(DecodeError::MissingPrefix)?;
    decode(token)
}

/// One byte per character, or `None` if any character is above U+00FF.
fn to_latin1(text: &str) -> Option<Vec<u8>> {
    text.chars().map(|c| u8::try_from(c).ok()).collect()
}

/// Every `%` must start a two-digit hex escape.
fn check_escapes(token: &str) -> Result<(), DecodeError> {
    let bytes = token.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let valid = bytes.len() > i + 2
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !valid {
                return Err(DecodeError::MalformedEscape(i));
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}
