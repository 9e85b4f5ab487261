//! Config loading tests.
//!
//! Tests for `ConfigLoader` on an application config embedding
//! `CommonConfig`: defaults, overrides, validation, and pushing HTTP
//! settings into the shared client.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use trader_common::config::{CommonConfig, ConfigError, ConfigLoader, LogLevel};
use trader_common::http::http_user_agent;

#[derive(Debug, Deserialize)]
struct BotConfig {
    common: CommonConfig,
    exchange: String,
    #[serde(default)]
    pairs: Vec<String>,
}

/// Write `content` to `config.toml` in `dir` and return its path.
fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, content).expect("write config.toml");
    path
}

/// Every `[common]` key set explicitly.
#[test]
fn full_common_section_is_loaded() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(
        tmp.path(),
        r#"
exchange = "kraken"
pairs = ["BTC-USD", "ETH-USD"]

[common]
log_level = "debug"
http_timeout_secs = 30
user_agent = "tradebot/1.0"
data_dir = "/var/lib/tradebot"
"#,
    );

    let config = BotConfig::load(&path).expect("load config");
    assert_eq!(config.exchange, "kraken");
    assert_eq!(config.pairs.len(), 2);
    assert_eq!(config.common.log_level, LogLevel::Debug);
    assert_eq!(config.common.http_timeout_secs, 30);
    assert_eq!(config.common.user_agent.as_deref(), Some("tradebot/1.0"));
    assert_eq!(config.common.data_dir(), PathBuf::from("/var/lib/tradebot"));
    config.common.validate().expect("valid config");
}

/// An empty `[common]` table takes every default.
#[test]
fn empty_common_section_uses_defaults() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(tmp.path(), "exchange = \"binance\"\n[common]\n");

    let config = BotConfig::load(&path).expect("load config");
    assert_eq!(config.common, CommonConfig::default());
    assert!(config.pairs.is_empty());
}

/// Unknown log levels are a parse error, not a silent default.
#[test]
fn unknown_log_level_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(
        tmp.path(),
        "exchange = \"x\"\n[common]\nlog_level = \"loud\"\n",
    );

    assert!(matches!(
        BotConfig::load(&path),
        Err(ConfigError::ParseError(_))
    ));
}

/// A zero timeout parses but fails validation and is refused by `apply`.
#[test]
fn zero_timeout_fails_validation_and_apply() {
    let tmp = TempDir::new().unwrap();
    let path = write_config(
        tmp.path(),
        "exchange = \"x\"\n[common]\nhttp_timeout_secs = 0\n",
    );

    let config = BotConfig::load(&path).expect("load config");
    assert!(matches!(
        config.common.validate(),
        Err(ConfigError::ValidationError(_))
    ));
    assert!(matches!(
        config.common.apply(),
        Err(ConfigError::ValidationError(_))
    ));
}

/// `apply` installs the configured user agent.
#[test]
fn apply_sets_user_agent() {
    let config = CommonConfig {
        user_agent: Some("config-test-agent".to_string()),
        ..CommonConfig::default()
    };
    config.apply().expect("apply config");
    assert_eq!(http_user_agent().as_deref(), Some("config-test-agent"));
}
