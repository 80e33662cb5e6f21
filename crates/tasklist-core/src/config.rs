use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, anyhow};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::http;
use crate::list_view::DEFAULT_PAGE_SIZE;

pub const CONFIG_ENV: &str = "TASKLIST_CONFIG";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    pub page_size: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// The fixed set of people a task can be assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UsersConfig {
    pub names: Vec<String>,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            names: vec![
                "User 1".to_string(),
                "User 2".to_string(),
                "User 3".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub api: ApiConfig,
    pub view: ViewConfig,
    pub users: UsersConfig,
    #[serde(skip)]
    pub loaded_from: Option<PathBuf>,
}

impl Config {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let cfg: Config = toml::from_str(text).context("failed to parse tasklist config")?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Resolve and read the config file: an explicit path, then
    /// `$TASKLIST_CONFIG`, then `<config dir>/tasklist/config.toml`. With no
    /// file anywhere the defaults apply.
    #[tracing::instrument(skip(override_path))]
    pub fn load(override_path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = resolve_config_path(override_path) else {
            warn!("no tasklist config found; using defaults");
            return Ok(Self::default());
        };

        if override_path.is_none() && !path.exists() {
            debug!(path = %path.display(), "default config file absent; using defaults");
            return Ok(Self::default());
        }

        info!(path = %path.display(), "loading tasklist config");
        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut cfg = Self::from_toml_str(&text)
            .with_context(|| format!("invalid config in {}", path.display()))?;
        cfg.loaded_from = Some(path);
        Ok(cfg)
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.view.page_size == 0 {
            return Err(anyhow!("view.page_size must be a positive integer"));
        }
        if self.users.names.iter().all(|name| name.trim().is_empty()) {
            return Err(anyhow!("users.names must list at least one user"));
        }
        http::collection_url(&self.api.base_url)?;
        Ok(())
    }
}

fn resolve_config_path(override_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path.to_path_buf());
    }

    if let Ok(from_env) = std::env::var(CONFIG_ENV)
        && !from_env.trim().is_empty()
    {
        return Some(PathBuf::from(from_env));
    }

    dirs::config_dir().map(|dir| dir.join("tasklist").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn empty_file_means_defaults() {
        let cfg = Config::from_toml_str("").unwrap();
        assert_eq!(cfg.api.base_url, "http://localhost:3001");
        assert_eq!(cfg.view.page_size, 4);
        assert_eq!(cfg.users.names.len(), 3);
    }

    #[test]
    fn partial_tables_override_only_their_keys() {
        let cfg = Config::from_toml_str(
            r#"
            [api]
            base_url = "https://tasks.internal:8443/api"

            [users]
            names = ["Ada", "Grace"]
            "#,
        )
        .unwrap();

        assert_eq!(cfg.api.base_url, "https://tasks.internal:8443/api");
        assert_eq!(cfg.view.page_size, 4);
        assert_eq!(cfg.users.names, vec!["Ada", "Grace"]);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(Config::from_toml_str("[view]\npage_size = 0").is_err());
        assert!(Config::from_toml_str("[users]\nnames = []").is_err());
        assert!(Config::from_toml_str("[api]\nbase_url = \"nope\"").is_err());
        assert!(Config::from_toml_str("[api]\nbase = \"http://x\"").is_err());
    }

    #[test]
    fn load_reads_explicit_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[view]\npage_size = 10").unwrap();

        let cfg = Config::load(Some(file.path())).unwrap();
        assert_eq!(cfg.view.page_size, 10);
        assert_eq!(cfg.loaded_from.as_deref(), Some(file.path()));
    }

    #[test]
    fn load_fails_for_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Config::load(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
