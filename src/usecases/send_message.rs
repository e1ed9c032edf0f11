//! Validation and draft building for outgoing messages.

use crate::domain::{identity::Identity, room::Room};

use super::contracts::MessageDraft;

/// Why a send attempt produced no store call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendRejection {
    /// Body is empty after trimming; the attempt is a silent no-op.
    EmptyBody,
    /// Nobody is signed in; the user must be notified.
    AuthenticationRequired,
}

/// A validated send: the draft to insert plus the exact entered text, kept
/// so the input can be restored byte-for-byte if the insert fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedSend {
    pub draft: MessageDraft,
    pub entered_text: String,
}

/// Validates an outgoing message and builds the row to insert. The body is
/// trimmed; the author label follows the identity's fallback chain.
pub fn prepare_send(
    identity: Option<Identity>,
    room: Room,
    entered: &str,
) -> Result<PreparedSend, SendRejection> {
    let body = entered.trim();
    if body.is_empty() {
        return Err(SendRejection::EmptyBody);
    }

    let identity = identity.ok_or(SendRejection::AuthenticationRequired)?;

    Ok(PreparedSend {
        draft: MessageDraft {
            room,
            author_id: identity.id.clone(),
            author_name: identity.display_label().to_owned(),
            body: body.to_owned(),
        },
        entered_text: entered.to_owned(),
    })
}
