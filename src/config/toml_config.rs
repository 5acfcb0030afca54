use crate::adapters::{HttpLeaderboard, JsonFileLeaderboard};
use crate::core::catalog::PlaceCatalog;
use crate::core::embedded::embedded_catalog;
use crate::core::leaderboard::DEFAULT_HARMFUL_LIMIT;
use crate::core::matcher::FallbackMode;
use crate::domain::ports::LeaderboardSource;
use crate::utils::error::{FinderError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_LEADERBOARD_PATH: &str = "data/leaderboard.json";
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub catalog: CatalogConfig,
    pub search: SearchConfig,
    pub leaderboard: LeaderboardConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog replacing the built-in one.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub fallback: FallbackMode,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    File,
    Http,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardConfig {
    pub source: SourceKind,
    pub path: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_seconds: u64,
    pub harmful_limit: usize,
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::File,
            path: Some(DEFAULT_LEADERBOARD_PATH.to_string()),
            endpoint: None,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            harmful_limit: DEFAULT_HARMFUL_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FinderError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FinderError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        result.to_string()
    }

    pub fn load_catalog(&self) -> Result<PlaceCatalog> {
        match &self.catalog.path {
            Some(path) => PlaceCatalog::from_file(path),
            None => Ok(embedded_catalog()),
        }
    }

    pub fn leaderboard_source(&self) -> Result<Box<dyn LeaderboardSource>> {
        let lb = &self.leaderboard;
        match lb.source {
            SourceKind::File => {
                let path = validation::validate_required_field("leaderboard.path", &lb.path)?;
                Ok(Box::new(JsonFileLeaderboard::new(path)))
            }
            SourceKind::Http => {
                let endpoint =
                    validation::validate_required_field("leaderboard.endpoint", &lb.endpoint)?;
                let timeout = Duration::from_secs(lb.timeout_seconds);
                Ok(Box::new(HttpLeaderboard::new(endpoint.as_str(), timeout)?))
            }
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        self.validate_catalog()?;
        self.validate_leaderboard()
    }

    /// Checks the settings `search` and `categories` depend on.
    pub fn validate_catalog(&self) -> Result<()> {
        if let Some(path) = &self.catalog.path {
            validation::validate_path("catalog.path", path)?;
        }
        Ok(())
    }

    pub fn validate_leaderboard(&self) -> Result<()> {
        let lb = &self.leaderboard;
        match lb.source {
            SourceKind::File => {
                let path = validation::validate_required_field("leaderboard.path", &lb.path)?;
                validation::validate_path("leaderboard.path", path)?;
            }
            SourceKind::Http => {
                let endpoint =
                    validation::validate_required_field("leaderboard.endpoint", &lb.endpoint)?;
                validation::validate_url("leaderboard.endpoint", endpoint)?;
            }
        }
        validation::validate_range("leaderboard.timeout_seconds", lb.timeout_seconds, 1, 300)?;
        validation::validate_positive_number("leaderboard.harmful_limit", lb.harmful_limit, 1)?;

        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();

        assert!(config.catalog.path.is_none());
        assert_eq!(config.search.fallback, FallbackMode::Substring);
        assert_eq!(config.leaderboard.source, SourceKind::File);
        assert_eq!(config.leaderboard.path.as_deref(), Some(DEFAULT_LEADERBOARD_PATH));
        assert_eq!(config.leaderboard.harmful_limit, 5);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_toml_config() {
        let toml_content = r#"
[catalog]
path = "data/places.json"

[search]
fallback = "word-prefix"

[leaderboard]
source = "http"
endpoint = "https://api.example.com/leaderboard"
timeout_seconds = 30
harmful_limit = 3

[output]
format = "json"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.catalog.path.as_deref(), Some("data/places.json"));
        assert_eq!(config.search.fallback, FallbackMode::WordPrefix);
        assert_eq!(config.leaderboard.source, SourceKind::Http);
        assert_eq!(config.leaderboard.timeout_seconds, 30);
        assert_eq!(config.leaderboard.harmful_limit, 3);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("PLACE_FINDER_TEST_ENDPOINT", "https://test.api.com/scores");

        let toml_content = r#"
[leaderboard]
source = "http"
endpoint = "${PLACE_FINDER_TEST_ENDPOINT}"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.leaderboard.endpoint.as_deref(),
            Some("https://test.api.com/scores")
        );

        std::env::remove_var("PLACE_FINDER_TEST_ENDPOINT");
    }

    #[test]
    fn test_unknown_env_var_is_kept() {
        let toml_content = r#"
[catalog]
path = "${PLACE_FINDER_SURELY_UNSET_VAR}/places.json"
"#;
        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.catalog.path.as_deref(),
            Some("${PLACE_FINDER_SURELY_UNSET_VAR}/places.json")
        );
    }

    #[test]
    fn test_invalid_toml() {
        let err = AppConfig::from_toml_str("[leaderboard\nsource = ").unwrap_err();
        assert!(matches!(err, FinderError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_unknown_fallback_mode_is_rejected() {
        let toml_content = r#"
[search]
fallback = "levenshtein"
"#;
        assert!(AppConfig::from_toml_str(toml_content).is_err());
    }

    #[test]
    fn test_config_validation() {
        let http_without_endpoint = AppConfig::from_toml_str(
            r#"
[leaderboard]
source = "http"
"#,
        )
        .unwrap();
        assert!(matches!(
            http_without_endpoint.validate(),
            Err(FinderError::MissingConfigError { .. })
        ));

        let bad_url = AppConfig::from_toml_str(
            r#"
[leaderboard]
source = "http"
endpoint = "invalid-url"
"#,
        )
        .unwrap();
        assert!(bad_url.validate().is_err());

        let zero_limit = AppConfig::from_toml_str(
            r#"
[leaderboard]
harmful_limit = 0
"#,
        )
        .unwrap();
        assert!(zero_limit.validate().is_err());

        let long_timeout = AppConfig::from_toml_str(
            r#"
[leaderboard]
timeout_seconds = 3600
"#,
        )
        .unwrap();
        assert!(long_timeout.validate().is_err());
    }

    #[test]
    fn test_unresolved_leaderboard_endpoint_leaves_catalog_valid() {
        let config = AppConfig::from_toml_str(
            r#"
[leaderboard]
source = "http"
endpoint = "${PLACE_FINDER_SURELY_UNSET_URL}"
"#,
        )
        .unwrap();

        assert!(config.validate_catalog().is_ok());
        assert!(matches!(
            config.validate_leaderboard(),
            Err(FinderError::InvalidConfigValueError { .. })
        ));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[output]
format = "json"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_load_embedded_catalog_by_default() {
        let config = AppConfig::default();
        let catalog = config.load_catalog().unwrap();
        assert!(catalog.contains_key("food"));
    }

    #[test]
    fn test_leaderboard_source_selection() {
        let mut config = AppConfig::default();
        assert!(config.leaderboard_source().unwrap().describe().starts_with("file"));

        config.leaderboard.source = SourceKind::Http;
        config.leaderboard.endpoint = Some("http://localhost:8080/leaderboard".to_string());
        assert_eq!(
            config.leaderboard_source().unwrap().describe(),
            "endpoint http://localhost:8080/leaderboard"
        );
    }
}
