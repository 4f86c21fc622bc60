//! URL-fragment-safe text codec.
//!
//! Share tokens are unpadded base64url (RFC 4648 section 5) over the UTF-8
//! bytes of the input, so they can be embedded in a URL fragment verbatim:
//! the alphabet is `[A-Za-z0-9_-]` and no `=` padding is emitted, which
//! keeps `+`, `/`, and `=` out of the fragment entirely.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use thiserror::Error;

/// Failures while turning a share token back into text.
///
/// Never produced by [`encode`]; any Unicode text is encodable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Token contains characters outside the base64url alphabet or has an
    /// impossible length.
    #[error("invalid share token: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// Token payload is not valid UTF-8.
    #[error("share token payload is not valid UTF-8")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Encode arbitrary text as an unpadded base64url token.
#[must_use]
pub fn encode(text: &str) -> String {
    URL_SAFE_NO_PAD.encode(text.as_bytes())
}

/// Decode a token produced by [`encode`] back into text.
///
/// Callers must treat a [`DecodeError`] as malformed or untrusted input;
/// no partial result is ever returned.
pub fn decode(token: &str) -> Result<String, DecodeError> {
    let bytes = URL_SAFE_NO_PAD.decode(token.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}
