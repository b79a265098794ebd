//! Configuration management for the librank service.
//!
//! Handles loading configuration from TOML files and environment
//! variables, with sensible defaults for all settings. Priority:
//! environment variables > TOML file > defaults.

use crate::core::error::{LibrankError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub ranking: RankingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Listen host
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Catalog and index artifact configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Data repository directory holding books.json and
    /// inverted_index.json
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

/// Ranking formula tunables
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RankingConfig {
    /// Corpus size used in IDF computation. A fixed estimate, not a
    /// live document count.
    #[serde(default = "default_corpus_size_estimate")]
    pub corpus_size_estimate: u64,

    /// Weight of the text relevance component
    #[serde(default = "default_text_weight")]
    pub text_weight: f64,

    /// Weight of the title match component
    #[serde(default = "default_title_weight")]
    pub title_weight: f64,

    /// Weight of the author match component
    #[serde(default = "default_author_weight")]
    pub author_weight: f64,

    /// Weight of the recency component
    #[serde(default = "default_recency_weight")]
    pub recency_weight: f64,

    /// Minimum final score for any scored result
    #[serde(default = "default_score_floor")]
    pub score_floor: f64,

    /// Default number of results to return
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Maximum results per query
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,

    /// Recency reference year; defaults to the clock when unset
    #[serde(default)]
    pub current_year: Option<i32>,
}

// Default value functions
fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    7002
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data_repository")
}

fn default_corpus_size_estimate() -> u64 {
    50_000
}

fn default_text_weight() -> f64 {
    0.40
}

fn default_title_weight() -> f64 {
    0.35
}

fn default_author_weight() -> f64 {
    0.15
}

fn default_recency_weight() -> f64 {
    0.10
}

fn default_score_floor() -> f64 {
    0.1
}

fn default_limit() -> usize {
    25
}

fn default_max_limit() -> usize {
    100
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            corpus_size_estimate: default_corpus_size_estimate(),
            text_weight: default_text_weight(),
            title_weight: default_title_weight(),
            author_weight: default_author_weight(),
            recency_weight: default_recency_weight(),
            score_floor: default_score_floor(),
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            current_year: None,
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| LibrankError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    ///
    /// The file is resolved from `path` when given, otherwise from
    /// the `LIBRANK_CONFIG` env var, otherwise `librank.toml` in the
    /// working directory. A missing file is not an error; defaults
    /// apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Ok(config_path) = env::var("LIBRANK_CONFIG") {
            Self::from_file(config_path)?
        } else if Path::new("librank.toml").exists() {
            Self::from_file("librank.toml")?
        } else {
            Self::default()
        };

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        if let Ok(host) = env::var("LIBRANK_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("LIBRANK_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Ok(data_dir) = env::var("LIBRANK_DATA_DIR") {
            self.catalog.data_dir = PathBuf::from(data_dir);
        }

        if let Ok(corpus_size) = env::var("LIBRANK_CORPUS_SIZE") {
            if let Ok(size) = corpus_size.parse() {
                self.ranking.corpus_size_estimate = size;
            }
        }
        if let Ok(default_limit) = env::var("LIBRANK_DEFAULT_LIMIT") {
            if let Ok(limit) = default_limit.parse() {
                self.ranking.default_limit = limit;
            }
        }
        if let Ok(max_limit) = env::var("LIBRANK_MAX_LIMIT") {
            if let Ok(limit) = max_limit.parse() {
                self.ranking.max_limit = limit;
            }
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(LibrankError::ConfigError(
                "Server port must be non-zero".to_string(),
            ));
        }

        let ranking = &self.ranking;
        if ranking.corpus_size_estimate == 0 {
            return Err(LibrankError::ConfigError(
                "Corpus size estimate must be non-zero".to_string(),
            ));
        }

        let weights = [
            ("text_weight", ranking.text_weight),
            ("title_weight", ranking.title_weight),
            ("author_weight", ranking.author_weight),
            ("recency_weight", ranking.recency_weight),
        ];
        for (name, weight) in weights {
            if !(0.0..=1.0).contains(&weight) {
                return Err(LibrankError::ConfigError(format!(
                    "{name} must be within [0, 1]"
                )));
            }
        }
        let weight_sum: f64 = weights.iter().map(|(_, w)| w).sum();
        if weight_sum <= 0.0 {
            return Err(LibrankError::ConfigError(
                "At least one ranking weight must be positive".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&ranking.score_floor) {
            return Err(LibrankError::ConfigError(
                "Score floor must be within [0, 1]".to_string(),
            ));
        }

        if ranking.default_limit == 0 {
            return Err(LibrankError::ConfigError(
                "Default limit must be non-zero".to_string(),
            ));
        }
        if ranking.default_limit > ranking.max_limit {
            return Err(LibrankError::ConfigError(
                "Default limit cannot exceed max limit".to_string(),
            ));
        }

        Ok(())
    }

    /// Log configuration at startup
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Host: {}", self.server.host);
        tracing::info!("  Port: {}", self.server.port);
        tracing::info!("  Data dir: {:?}", self.catalog.data_dir);
        tracing::info!(
            "  Corpus size estimate: {}",
            self.ranking.corpus_size_estimate
        );
        tracing::info!(
            "  Weights: text {:.2}, title {:.2}, author {:.2}, recency {:.2}",
            self.ranking.text_weight,
            self.ranking.title_weight,
            self.ranking.author_weight,
            self.ranking.recency_weight
        );
        tracing::info!("  Score floor: {}", self.ranking.score_floor);
        tracing::info!("  Default limit: {}", self.ranking.default_limit);
        tracing::info!("  Max limit: {}", self.ranking.max_limit);
        if let Some(year) = self.ranking.current_year {
            tracing::info!("  Current year override: {year}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.port, 7002);
        assert_eq!(config.ranking.corpus_size_estimate, 50_000);
        assert_eq!(config.ranking.score_floor, 0.1);
        assert_eq!(config.ranking.default_limit, 25);
        assert!(config.ranking.current_year.is_none());
    }

    #[test]
    fn test_default_weights_sum_to_one() {
        let ranking = RankingConfig::default();
        let sum = ranking.text_weight
            + ranking.title_weight
            + ranking.author_weight
            + ranking.recency_weight;
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_config_validation_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_weight_out_of_range() {
        let mut config = Config::default();
        config.ranking.title_weight = 1.5;
        assert!(config.validate().is_err());

        config = Config::default();
        config.ranking.text_weight = -0.1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_all_weights_zero() {
        let mut config = Config::default();
        config.ranking.text_weight = 0.0;
        config.ranking.title_weight = 0.0;
        config.ranking.author_weight = 0.0;
        config.ranking.recency_weight = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_limits() {
        let mut config = Config::default();
        config.ranking.default_limit = 0;
        assert!(config.validate().is_err());

        config = Config::default();
        config.ranking.default_limit = 500;
        config.ranking.max_limit = 100;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_env_var_override() {
        env::set_var("LIBRANK_PORT", "9000");
        env::set_var("LIBRANK_CORPUS_SIZE", "75000");

        let mut config = Config::default();
        config.merge_env();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.ranking.corpus_size_estimate, 75_000);

        env::remove_var("LIBRANK_PORT");
        env::remove_var("LIBRANK_CORPUS_SIZE");
    }

    #[test]
    #[serial]
    fn test_env_var_data_dir() {
        env::set_var("LIBRANK_DATA_DIR", "/srv/books");

        let mut config = Config::default();
        config.merge_env();

        assert_eq!(config.catalog.data_dir, PathBuf::from("/srv/books"));

        env::remove_var("LIBRANK_DATA_DIR");
    }

    #[test]
    fn test_toml_deserialization() {
        let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [catalog]
            data_dir = "/data/repository"

            [ranking]
            corpus_size_estimate = 100000
            text_weight = 0.5
            title_weight = 0.3
            author_weight = 0.1
            recency_weight = 0.1
            score_floor = 0.05
            default_limit = 10
            max_limit = 50
            current_year = 2026
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.catalog.data_dir, PathBuf::from("/data/repository"));
        assert_eq!(config.ranking.corpus_size_estimate, 100_000);
        assert_eq!(config.ranking.score_floor, 0.05);
        assert_eq!(config.ranking.current_year, Some(2026));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let toml = r#"
            [server]
            port = 8081
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.ranking.default_limit, 25);
    }
}
