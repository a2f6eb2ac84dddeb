// crates/pastelink-core/src/codec/token.rs

use std::fmt;

use crate::codec::{b64url, compress};
use crate::error::{Result, ShareError};

/// URL-safe compressed-and-encoded representation of a text blob.
/// Immutable once produced; an edit invalidates any previously built token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareToken(String);

impl ShareToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for ShareToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build a token: utf8 bytes -> zstd -> base64url.
///
/// Blank input (empty after trimming) yields `Ok(None)`; callers treat that
/// as "nothing to share". The token is a pure function of `text`.
pub fn encode(text: &str) -> Result<Option<ShareToken>> {
    if text.trim().is_empty() {
        return Ok(None);
    }

    let packed = compress::pack(text.as_bytes())?;
    Ok(Some(ShareToken(b64url::encode(&packed))))
}

/// Inverse of [`encode`]. All-or-nothing: no partial text escapes on failure.
pub fn decode(token: &str) -> Result<String> {
    if token.is_empty() {
        return Err(ShareError::MalformedToken("empty token".into()));
    }

    let packed = b64url::decode(token)?;
    let bytes = compress::unpack(&packed)?;

    String::from_utf8(bytes)
        .map_err(|e| ShareError::CorruptPayload(format!("decoded text is not utf-8: {e}")))
}
