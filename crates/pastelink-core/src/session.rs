// crates/pastelink-core/src/session.rs
//
// The session owns the current text and every piece of state derived from
// it. Codec and normalizer are pure functions; time is injected so feedback
// expiry stays deterministic under test.

use std::time::{Duration, Instant};

use crate::address::Address;
use crate::codec::token;
use crate::error::ShareError;
use crate::normalize::normalize;

/// Query key carrying a compressed ShareToken. Authoritative variant.
pub const TOKEN_PARAM: &str = "c";

/// Legacy query key carrying the text itself, percent-encoded only.
/// Honored on inbound load; never written.
pub const RAW_PARAM: &str = "response";

/// How long a status message stays visible once set.
pub const FEEDBACK_TTL: Duration = Duration::from_millis(2000);

pub const MSG_COPIED: &str = "Copied!";
pub const MSG_COPY_FAILED: &str = "Failed to copy";
pub const MSG_UNSUPPORTED: &str = "Sharing is not supported in this environment";
pub const MSG_BAD_LINK: &str = "Shared link is invalid or damaged";

/// Best-effort system clipboard. Success/failure feeds FeedbackState and is
/// never surfaced as a raw error.
pub trait Clipboard {
    fn write_text(&mut self, text: &str) -> bool;
}

/// What the external renderer receives for the current text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderInput {
    pub text: String,
    pub streaming: bool,
}

/// Parse failure reported back by the external renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFailure {
    pub code: i64,
    pub text: String,
}

/// Tagged outcome of a render attempt at the renderer boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Rendered,
    ParseFailure(RenderFailure),
}

struct Feedback {
    message: &'static str,
    set_at: Instant,
}

pub struct Session {
    address: Address,
    text: String,
    feedback: Option<Feedback>,
    banner: Option<RenderFailure>,
}

impl Session {
    /// Open a session on a page address. A present, non-empty token
    /// parameter is decoded and adopted; on failure the text stays empty and
    /// a transient status is set instead. Without a token, a non-empty
    /// legacy raw parameter is adopted verbatim.
    pub fn open(address: Address, now: Instant) -> Self {
        let mut session = Session {
            address,
            text: String::new(),
            feedback: None,
            banner: None,
        };

        if let Some(tok) = session.address.get(TOKEN_PARAM).map(str::to_owned) {
            if !tok.is_empty() {
                match token::decode(&tok) {
                    Ok(text) => session.text = text,
                    Err(ShareError::CapabilityUnavailable(_)) => {
                        session.set_feedback(MSG_UNSUPPORTED, now)
                    }
                    Err(_) => session.set_feedback(MSG_BAD_LINK, now),
                }
                return session;
            }
        }

        if let Some(raw) = session.address.get(RAW_PARAM).map(str::to_owned) {
            if !raw.is_empty() {
                session.text = raw;
            }
        }

        session
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    /// Replace the current text. Clears the render-failure banner; a pending
    /// share token for the old text is simply left stale in the address
    /// until the next share.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.banner = None;
    }

    /// Empty the text and strip both share parameters from the address.
    pub fn clear(&mut self) {
        self.text.clear();
        self.banner = None;
        self.address.remove(TOKEN_PARAM);
        self.address.remove(RAW_PARAM);
    }

    /// What to hand the external renderer. `None` while the text is empty
    /// (no output panel is shown at all).
    pub fn renderer_input(&self) -> Option<RenderInput> {
        if self.text.is_empty() {
            return None;
        }
        Some(RenderInput {
            text: normalize(&self.text),
            streaming: false,
        })
    }

    /// Encode the current text, write the token into the address, and copy
    /// the resulting link. Returns false (and leaves feedback untouched)
    /// when the text is blank.
    pub fn share(&mut self, clipboard: &mut dyn Clipboard, now: Instant) -> bool {
        let tok = match token::encode(&self.text) {
            Ok(Some(tok)) => tok,
            Ok(None) => return false,
            Err(_) => {
                // encode only fails when the environment lacks compression
                self.set_feedback(MSG_UNSUPPORTED, now);
                return false;
            }
        };

        self.address.set(TOKEN_PARAM, tok.as_str());
        self.address.remove(RAW_PARAM);

        let link = self.address.to_string();
        if clipboard.write_text(&link) {
            self.set_feedback(MSG_COPIED, now);
        } else {
            self.set_feedback(MSG_COPY_FAILED, now);
        }
        true
    }

    /// Pending status message, if one was set less than FEEDBACK_TTL ago.
    /// A newer message always replaces an older pending one, so an expired
    /// predecessor can never clear its successor.
    pub fn feedback(&self, now: Instant) -> Option<&'static str> {
        self.feedback
            .as_ref()
            .filter(|f| now.duration_since(f.set_at) < FEEDBACK_TTL)
            .map(|f| f.message)
    }

    /// Feed back the renderer's outcome. A parse failure becomes a banner
    /// that only the next edit clears.
    pub fn report_render(&mut self, outcome: RenderOutcome) {
        if let RenderOutcome::ParseFailure(failure) = outcome {
            self.banner = Some(failure);
        }
    }

    pub fn banner(&self) -> Option<&RenderFailure> {
        self.banner.as_ref()
    }

    fn set_feedback(&mut self, message: &'static str, now: Instant) {
        self.feedback = Some(Feedback {
            message,
            set_at: now,
        });
    }
}
