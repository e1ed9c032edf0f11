use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, ChatConfig, LogConfig, SupabaseConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub supabase: Option<FileSupabaseConfig>,
    pub chat: Option<FileChatConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(supabase) = self.supabase {
            supabase.merge_into(&mut config.supabase);
        }

        if let Some(chat) = self.chat {
            chat.merge_into(&mut config.chat);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = Some(file);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileSupabaseConfig {
    pub url: Option<String>,
    pub anon_key: Option<String>,
    pub access_token: Option<String>,
}

impl FileSupabaseConfig {
    fn merge_into(self, config: &mut SupabaseConfig) {
        if let Some(url) = self.url {
            config.url = url;
        }

        if let Some(anon_key) = self.anon_key {
            config.anon_key = anon_key;
        }

        if let Some(access_token) = self.access_token {
            config.access_token = Some(access_token);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileChatConfig {
    pub default_room: Option<String>,
    pub live_poll_interval_ms: Option<u64>,
}

impl FileChatConfig {
    fn merge_into(self, config: &mut ChatConfig) {
        if let Some(default_room) = self.default_room {
            config.default_room = default_room;
        }

        if let Some(interval_ms) = self.live_poll_interval_ms {
            config.live_poll_interval_ms = interval_ms;
        }
    }
}
