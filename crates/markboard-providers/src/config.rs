//! Advisor configuration and factory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use markboard_core::model::Thresholds;
use markboard_core::traits::Advisor;

use crate::gemini::GeminiAdvisor;
use crate::mock::MockAdvisor;

/// Configuration for a single advisor backend.
///
/// Note: Custom Debug impl masks API keys to prevent accidental exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AdvisorConfig {
    Gemini {
        api_key: String,
        #[serde(default)]
        base_url: Option<String>,
    },
    Mock {
        #[serde(default)]
        reply: String,
    },
}

impl std::fmt::Debug for AdvisorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdvisorConfig::Gemini {
                api_key: _,
                base_url,
            } => f
                .debug_struct("Gemini")
                .field("api_key", &"***")
                .field("base_url", base_url)
                .finish(),
            AdvisorConfig::Mock { reply } => {
                f.debug_struct("Mock").field("reply", reply).finish()
            }
        }
    }
}

/// Top-level markboard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkboardConfig {
    /// Advisor configurations keyed by name.
    #[serde(default)]
    pub advisors: HashMap<String, AdvisorConfig>,
    /// Default advisor to use.
    #[serde(default = "default_advisor")]
    pub default_advisor: String,
    /// Default model to use.
    #[serde(default = "default_model")]
    pub default_model: String,
    /// Default grading cutoffs for sessions started from this config.
    #[serde(default)]
    pub thresholds: Thresholds,
    /// Output directory for exports.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_advisor() -> String {
    "gemini".to_string()
}
fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("./markboard-exports")
}

impl Default for MarkboardConfig {
    fn default() -> Self {
        Self {
            advisors: HashMap::new(),
            default_advisor: default_advisor(),
            default_model: default_model(),
            thresholds: Thresholds::default(),
            output_dir: default_output_dir(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Resolve env vars in an advisor config.
fn resolve_advisor_config(config: &AdvisorConfig) -> AdvisorConfig {
    match config {
        AdvisorConfig::Gemini { api_key, base_url } => AdvisorConfig::Gemini {
            api_key: resolve_env_vars(api_key),
            base_url: base_url.as_ref().map(|u| resolve_env_vars(u)),
        },
        AdvisorConfig::Mock { reply } => AdvisorConfig::Mock {
            reply: reply.clone(),
        },
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `markboard.toml` in the current directory
/// 2. `~/.config/markboard/config.toml`
///
/// Environment variable override: `MARKBOARD_GEMINI_KEY`.
pub fn load_config() -> Result<MarkboardConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<MarkboardConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("markboard.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<MarkboardConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => MarkboardConfig::default(),
    };

    // Apply env var override
    if let Ok(key) = std::env::var("MARKBOARD_GEMINI_KEY") {
        config
            .advisors
            .entry("gemini".into())
            .or_insert(AdvisorConfig::Gemini {
                api_key: String::new(),
                base_url: None,
            });
        if let Some(AdvisorConfig::Gemini { api_key, .. }) = config.advisors.get_mut("gemini") {
            *api_key = key;
        }
    }

    // Resolve env vars in all advisor configs
    let resolved: HashMap<String, AdvisorConfig> = config
        .advisors
        .iter()
        .map(|(k, v)| (k.clone(), resolve_advisor_config(v)))
        .collect();
    config.advisors = resolved;

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("markboard"))
}

/// Create an advisor instance from its configuration.
pub fn create_advisor(config: &AdvisorConfig) -> Result<Box<dyn Advisor>> {
    match config {
        AdvisorConfig::Gemini { api_key, base_url } => {
            anyhow::ensure!(!api_key.is_empty(), "gemini advisor requires an api_key");
            Ok(Box::new(GeminiAdvisor::new(api_key, base_url.clone())?))
        }
        AdvisorConfig::Mock { reply } => {
            let mock = if reply.is_empty() {
                MockAdvisor::new(HashMap::new())
            } else {
                MockAdvisor::with_fixed_reply(reply)
            };
            Ok(Box::new(mock))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_env_vars_basic() {
        std::env::set_var("_MARKBOARD_TEST_VAR", "hello");
        assert_eq!(resolve_env_vars("${_MARKBOARD_TEST_VAR}"), "hello");
        assert_eq!(
            resolve_env_vars("prefix_${_MARKBOARD_TEST_VAR}_suffix"),
            "prefix_hello_suffix"
        );
        std::env::remove_var("_MARKBOARD_TEST_VAR");
    }

    #[test]
    fn default_config() {
        let config = MarkboardConfig::default();
        assert_eq!(config.default_advisor, "gemini");
        assert_eq!(config.default_model, "gemini-3-flash-preview");
        assert_eq!(config.thresholds.passing, 60.0);
        assert_eq!(config.thresholds.excellent, 85.0);
        assert_eq!(config.thresholds.max_score, 100.0);
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
default_advisor = "gemini"
default_model = "gemini-3-flash-preview"

[advisors.gemini]
type = "gemini"
api_key = "test-key"

[advisors.mock]
type = "mock"
reply = "固定回复"

[thresholds]
passing = 55.0
excellent = 90.0
max_score = 120.0
"#;
        let config: MarkboardConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.advisors.len(), 2);
        assert!(matches!(
            config.advisors.get("gemini"),
            Some(AdvisorConfig::Gemini { .. })
        ));
        assert_eq!(config.thresholds.passing, 55.0);
        assert_eq!(config.thresholds.max_score, 120.0);
    }

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("markboard.toml");
        std::fs::write(
            &path,
            r#"
[advisors.gemini]
type = "gemini"
api_key = "${_MARKBOARD_CFG_KEY}"
"#,
        )
        .unwrap();

        std::env::set_var("_MARKBOARD_CFG_KEY", "resolved-key");
        let config = load_config_from(Some(&path)).unwrap();
        std::env::remove_var("_MARKBOARD_CFG_KEY");

        match config.advisors.get("gemini").unwrap() {
            AdvisorConfig::Gemini { api_key, .. } => assert_eq!(api_key, "resolved-key"),
            other => panic!("unexpected advisor config: {other:?}"),
        }
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let result = load_config_from(Some(Path::new("/definitely/not/here.toml")));
        assert!(result.is_err());
    }

    #[test]
    fn debug_masks_api_key() {
        let config = AdvisorConfig::Gemini {
            api_key: "super-secret".into(),
            base_url: None,
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn create_gemini_without_key_fails() {
        let config = AdvisorConfig::Gemini {
            api_key: String::new(),
            base_url: None,
        };
        assert!(create_advisor(&config).is_err());
    }

    #[test]
    fn create_mock_advisor() {
        let config = AdvisorConfig::Mock {
            reply: "好".into(),
        };
        let advisor = create_advisor(&config).unwrap();
        assert_eq!(advisor.name(), "mock");
    }
}
