//! # Configuration
//!
//! Override hierarchy: defaults → config file → env vars → CLI flags.
//!
//! The config file lives at `~/.p360/config.toml` unless `--config` points
//! elsewhere. A missing file is not an error; every setting has a default.

use log::{debug, info, warn};
use p360_core::{BrandSegmentRegistry, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct P360Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    /// Extra brand → segment entries, applied over the built-in table.
    #[serde(default)]
    pub segments: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub login_url: Option<String>,
    pub search_url: Option<String>,
    pub user_agent: Option<String>,
    pub page_size: Option<u32>,
    pub records_to_return: Option<u32>,
    pub username: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DisplayConfig {
    pub items_per_page: Option<usize>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOGIN_URL: &str = "https://dmp-us.informaticacloud.com/saas/public/core/v3/login";
pub const DEFAULT_SEARCH_URL: &str =
    "https://usw1-mdm.dmp-us.informaticacloud.com/search/public/api/v1/search";
pub const DEFAULT_USER_AGENT: &str = concat!("p360/", env!("CARGO_PKG_VERSION"));
pub const DEFAULT_API_PAGE_SIZE: u32 = 200;
pub const DEFAULT_RECORDS_TO_RETURN: u32 = 1000;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub login_url: String,
    pub search_url: String,
    pub user_agent: String,
    pub api_page_size: u32,
    pub records_to_return: u32,
    pub items_per_page: usize,
    pub username: Option<String>,
    pub password: Option<String>,
    pub registry: BrandSegmentRegistry,
}

/// Values given on the command line. `None` means not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub username: Option<String>,
    pub password: Option<String>,
    pub items_per_page: Option<usize>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.p360/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".p360").join("config.toml"))
}

/// Load config from `path`, or from the default location when `path` is None.
///
/// A missing file yields `P360Config::default()`. A malformed file yields
/// `ConfigError::Parse`.
pub fn load_config(path: Option<&Path>) -> Result<P360Config, ConfigError> {
    let path = match path.map(Path::to_path_buf).or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(P360Config::default());
        }
    };

    if !path.exists() {
        info!("No config file at {}, using defaults", path.display());
        return Ok(P360Config::default());
    }

    let contents = fs::read_to_string(&path)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<P360Config, ConfigError> {
    Ok(toml::from_str(contents)?)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &P360Config, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env<F>(config: &P360Config, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // URLs: env → config → default
    let login_url = env("P360_LOGIN_URL")
        .or_else(|| config.api.login_url.clone())
        .unwrap_or_else(|| DEFAULT_LOGIN_URL.to_string());

    let search_url = env("P360_SEARCH_URL")
        .or_else(|| config.api.search_url.clone())
        .unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string());

    // Credentials: CLI → env → config (password is never read from the file)
    let username = cli
        .username
        .clone()
        .or_else(|| env("P360_USERNAME"))
        .or_else(|| config.api.username.clone());

    let password = cli.password.clone().or_else(|| env("P360_PASSWORD"));

    let items_per_page = cli
        .items_per_page
        .or(config.display.items_per_page)
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .max(1);

    let registry = BrandSegmentRegistry::builtin().extended(
        config
            .segments
            .iter()
            .map(|(brand, segment)| (brand.clone(), segment.clone())),
    );

    ResolvedConfig {
        login_url,
        search_url,
        user_agent: config
            .api
            .user_agent
            .clone()
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        api_page_size: config.api.page_size.unwrap_or(DEFAULT_API_PAGE_SIZE),
        records_to_return: config
            .api
            .records_to_return
            .unwrap_or(DEFAULT_RECORDS_TO_RETURN),
        items_per_page,
        username,
        password,
        registry,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&P360Config::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.login_url, DEFAULT_LOGIN_URL);
        assert_eq!(resolved.search_url, DEFAULT_SEARCH_URL);
        assert_eq!(resolved.api_page_size, DEFAULT_API_PAGE_SIZE);
        assert_eq!(resolved.records_to_return, DEFAULT_RECORDS_TO_RETURN);
        assert_eq!(resolved.items_per_page, DEFAULT_PAGE_SIZE);
        assert!(resolved.username.is_none());
        assert!(resolved.password.is_none());
        assert_eq!(resolved.registry, BrandSegmentRegistry::builtin());
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config = parse_config(
            r#"
[display]
items_per_page = 20
"#,
        )
        .unwrap();
        assert_eq!(config.display.items_per_page, Some(20));
        assert!(config.api.login_url.is_none());
        assert!(config.segments.is_empty());
    }

    #[test]
    fn test_segments_table_extends_registry() {
        let config = parse_config(
            r#"
[segments]
Apple = "Tecnologia"
"Tok&Stok" = "Móveis"
"#,
        )
        .unwrap();
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.registry.segment_of("Apple"), "Tecnologia");
        assert_eq!(resolved.registry.segment_of("Tok&Stok"), "Móveis");
        assert_eq!(resolved.registry.segment_of("Bartira"), "Móveis");
    }

    #[test]
    fn test_env_and_cli_precedence() {
        let config = parse_config(
            r#"
[api]
login_url = "http://config/login"
search_url = "http://config/search"
username = "from-config"
"#,
        )
        .unwrap();
        let env: HashMap<&str, &str> = HashMap::from([
            ("P360_LOGIN_URL", "http://env/login"),
            ("P360_USERNAME", "from-env"),
            ("P360_PASSWORD", "secret"),
        ]);
        let cli = CliOverrides {
            username: Some("from-cli".to_string()),
            items_per_page: Some(0),
            ..Default::default()
        };

        let resolved = resolve_with_env(&config, &cli, |key| env.get(key).map(|v| v.to_string()));
        assert_eq!(resolved.login_url, "http://env/login");
        assert_eq!(resolved.search_url, "http://config/search");
        assert_eq!(resolved.username.as_deref(), Some("from-cli"));
        assert_eq!(resolved.password.as_deref(), Some("secret"));
        assert_eq!(resolved.items_per_page, 1);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(matches!(
            parse_config("[api\nlogin_url = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("p360-config-that-does-not-exist.toml");
        let config = load_config(Some(&path)).unwrap();
        assert!(config.api.login_url.is_none());
    }
}
