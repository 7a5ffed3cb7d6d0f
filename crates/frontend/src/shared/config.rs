use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides `api.base_url`
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub lists: ListsConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ListsConfig {
    pub products_page_size: usize,
    pub sales_page_size: usize,
}

impl Default for ListsConfig {
    fn default() -> Self {
        Self {
            products_page_size: 12,
            sales_page_size: 15,
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:8000/api"
timeout_secs = 30

[lists]
products_page_size = 12
sales_page_size = 15
"#;

/// Load configuration
///
/// Search order:
/// 1. Explicit path (`--config`)
/// 2. config.toml next to the executable
/// 3. Falls back to embedded default config
///
/// `STOREFRONT_API_URL` is applied on top of whichever file was used.
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let mut config: Config = match find_config_file(explicit)? {
        Some(path) => {
            tracing::info!("Loading config from: {}", path.display());
            let contents = std::fs::read_to_string(&path)?;
            toml::from_str(&contents)?
        }
        None => {
            tracing::info!("Using default embedded configuration");
            toml::from_str(DEFAULT_CONFIG)?
        }
    };

    if let Ok(url) = std::env::var(API_URL_ENV) {
        if !url.trim().is_empty() {
            tracing::info!("{} overrides api.base_url: {}", API_URL_ENV, url);
            config.api.base_url = url.trim().to_string();
        }
    }
    Ok(config)
}

fn find_config_file(explicit: Option<&Path>) -> anyhow::Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.exists() {
            anyhow::bail!("config file not found: {}", path.display());
        }
        return Ok(Some(path.to_path_buf()));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");
            if config_path.exists() {
                return Ok(Some(config_path));
            }
            tracing::debug!("config.toml not found at: {}", config_path.display());
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config: Result<Config, _> = toml::from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
        assert_eq!(config.api.timeout(), Duration::from_secs(30));
        assert_eq!(config.lists, ListsConfig::default());
    }

    #[test]
    fn test_lists_section_is_optional() {
        let config: Config = toml::from_str(
            r#"
            [api]
            base_url = "https://loja.example.com/api"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.lists.products_page_size, 12);
        assert_eq!(config.lists.sales_page_size, 15);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        assert!(load_config(Some(Path::new("/nonexistent/console.toml"))).is_err());
    }

    #[test]
    fn test_explicit_file_is_loaded() {
        let path = std::env::temp_dir().join(format!("storefront-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            r#"
            [api]
            base_url = "https://loja.example.com/api"
            timeout_secs = 5

            [lists]
            products_page_size = 24
            sales_page_size = 50
            "#,
        )
        .unwrap();

        let config = load_config(Some(&path));
        let _ = std::fs::remove_file(&path);
        let config = config.unwrap();
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.lists.products_page_size, 24);
        assert_eq!(config.lists.sales_page_size, 50);
    }
}
