use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;

use crate::infra::{
    config::{file_config::FileConfig, AppConfig},
    contracts::ConfigAdapter,
    error::AppError,
};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Config port reading `config.toml` next to the binary, or the explicit
/// `--config` path. A missing file is not an error: every section has
/// usable defaults (the placeholder backend url excepted).
#[derive(Debug, Clone)]
pub struct FileConfigAdapter {
    path: PathBuf,
}

impl FileConfigAdapter {
    pub fn new(path: Option<&Path>) -> Self {
        Self {
            path: path
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH)),
        }
    }
}

impl ConfigAdapter for FileConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(load(&self.path)?)
    }
}

pub fn load(config_path: &Path) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::default();

    if !config_path.exists() {
        return Ok(config);
    }

    let raw = fs::read_to_string(config_path).map_err(|source| AppError::ConfigRead {
        path: config_path.to_path_buf(),
        source,
    })?;

    let file_config: FileConfig = toml::from_str(&raw).map_err(|source| AppError::ConfigParse {
        path: config_path.to_path_buf(),
        source,
    })?;

    file_config.merge_into(&mut config);
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_defaults_when_file_is_missing() {
        let config = load(Path::new("./missing-config.toml")).expect("config must load");

        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn merges_file_values_over_defaults() {
        let dir = tempfile::tempdir().expect("temp dir must be creatable");
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            r#"
[logging]
level = "debug"

[supabase]
url = "https://demo.supabase.co"
anon_key = "anon-123"

[chat]
default_room = "sydney"
live_poll_interval_ms = 500
"#,
        )
        .expect("config fixture must be writable");

        let config = load(&config_path).expect("config must load");

        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.file, None);
        assert_eq!(config.supabase.url, "https://demo.supabase.co");
        assert_eq!(config.supabase.anon_key, "anon-123");
        assert_eq!(config.supabase.access_token, None);
        assert_eq!(config.chat.default_room, "sydney");
        assert_eq!(config.chat.live_poll_interval_ms, 500);
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let dir = tempfile::tempdir().expect("temp dir must be creatable");
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            r#"
[supabase]
access_token = "jwt-abc"
"#,
        )
        .expect("config fixture must be writable");

        let config = load(&config_path).expect("config must load");

        assert_eq!(config.supabase.access_token, Some("jwt-abc".to_owned()));
        assert_eq!(config.supabase.url, AppConfig::default().supabase.url);
        assert_eq!(config.chat.default_room, "general");
    }

    #[test]
    fn rejects_malformed_toml() {
        let dir = tempfile::tempdir().expect("temp dir must be creatable");
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "not valid [toml").expect("config fixture must be writable");

        let error = load(&config_path).expect_err("malformed config must fail");

        assert!(matches!(error, AppError::ConfigParse { .. }));
    }

    #[test]
    fn adapter_loads_through_the_config_port() {
        let dir = tempfile::tempdir().expect("temp dir must be creatable");
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "[chat]\ndefault_room = \"perth\"\n")
            .expect("config fixture must be writable");

        let adapter = FileConfigAdapter::new(Some(&config_path));
        let config = adapter.load().expect("config must load");

        assert_eq!(config.chat.default_room, "perth");
    }
}
