use std::{path::PathBuf, time::Duration};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub supabase: SupabaseConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    /// When set, log lines go to this file instead of stderr so they do not
    /// interleave with the feed.
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    /// Access token of the signed-in user. Without it, reads may still work
    /// but sends are rejected with a sign-in notice.
    pub access_token: Option<String>,
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: "https://replace-me.supabase.co".to_owned(),
            anon_key: "replace-me".to_owned(),
            access_token: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatConfig {
    pub default_room: String,
    pub live_poll_interval_ms: u64,
}

impl ChatConfig {
    pub fn live_poll_interval(&self) -> Duration {
        Duration::from_millis(self.live_poll_interval_ms)
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            default_room: "general".to_owned(),
            live_poll_interval_ms: 1_500,
        }
    }
}
