//! User-visible notifications raised by the feed client.
//!
//! Notices are plain data; the presentation layer decides how to show them.
//! Nothing here is fatal: the worst outcome is an empty feed with an
//! explanatory notice.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    HistoryFetchFailed,
    SendFailed,
    AuthenticationRequired,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub detail: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn authentication_required() -> Self {
        Self::new(
            NoticeKind::AuthenticationRequired,
            "Connecte-toi pour envoyer un message.",
        )
    }

    /// Short heading shown before the detail text.
    pub fn title(&self) -> &'static str {
        match self.kind {
            NoticeKind::AuthenticationRequired => "Connexion requise",
            NoticeKind::HistoryFetchFailed | NoticeKind::SendFailed => "Erreur",
        }
    }
}
