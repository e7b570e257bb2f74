//! Ollama backend configuration from TOML (`[ollama]` section)

use super::{ConfigIssue, ConfigIssueCode, Severity, lenient_string};
use ask_domain::Model;
use ask_domain::core::model::DEFAULT_MODEL;
use serde::{Deserialize, Serialize};

/// Where Ollama listens when `OLLAMA_HOST` is unset
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOllamaConfig {
    /// Base URL of the Ollama server. A bare `host:port` is accepted.
    #[serde(deserialize_with = "lenient_string")]
    pub base_url: String,
    /// Model used for every question (default: "gemma:2b")
    #[serde(deserialize_with = "lenient_string")]
    pub model: String,
}

impl Default for FileOllamaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl FileOllamaConfig {
    /// Base URL with a scheme and without a trailing slash.
    ///
    /// `OLLAMA_HOST` is commonly set as `0.0.0.0:11434`, so a missing
    /// scheme defaults to `http://`.
    pub fn normalized_base_url(&self) -> String {
        self.with_scheme().trim_end_matches('/').to_string()
    }

    // Scheme is detected before trailing slashes go, so `http://` stays
    // a scheme with no host instead of turning into host `http`.
    fn with_scheme(&self) -> String {
        let raw = self.base_url.trim();
        if raw.contains("://") {
            raw.to_string()
        } else {
            format!("http://{}", raw)
        }
    }

    /// Parse the model name, collecting an issue if it is empty.
    pub fn parse_model(&self) -> (Option<Model>, Vec<ConfigIssue>) {
        match self.model.parse::<Model>() {
            Ok(model) => (Some(model), vec![]),
            Err(_) => (
                None,
                vec![ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::EmptyModelName {
                        field: "ollama.model".to_string(),
                    },
                    message: "ollama.model: model name is empty".to_string(),
                }],
            ),
        }
    }

    /// Validate the base URL, collecting an issue if it cannot be parsed.
    pub fn parse_base_url(&self) -> (Option<reqwest::Url>, Vec<ConfigIssue>) {
        match reqwest::Url::parse(&self.with_scheme()) {
            Ok(url) if url.has_host() => (Some(url), vec![]),
            _ => (
                None,
                vec![ConfigIssue {
                    severity: Severity::Error,
                    code: ConfigIssueCode::InvalidUrl {
                        field: "ollama.base_url".to_string(),
                        value: self.base_url.clone(),
                    },
                    message: format!("ollama.base_url: '{}' is not a valid URL", self.base_url),
                }],
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_base_url(url: &str) -> FileOllamaConfig {
        FileOllamaConfig {
            base_url: url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_normalized_base_url() {
        assert_eq!(
            FileOllamaConfig::default().normalized_base_url(),
            "http://localhost:11434"
        );
        assert_eq!(
            with_base_url("0.0.0.0:11434").normalized_base_url(),
            "http://0.0.0.0:11434"
        );
        assert_eq!(
            with_base_url("https://ollama.internal/").normalized_base_url(),
            "https://ollama.internal"
        );
    }

    #[test]
    fn test_parse_model() {
        let (model, issues) = FileOllamaConfig::default().parse_model();
        assert_eq!(model, Some(Model::default()));
        assert!(issues.is_empty());

        let config = FileOllamaConfig {
            model: "  ".to_string(),
            ..Default::default()
        };
        let (model, issues) = config.parse_model();
        assert!(model.is_none());
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Error);
    }

    #[test]
    fn test_scheme_only_url_is_not_treated_as_host() {
        let config = with_base_url("http://");
        assert_eq!(config.normalized_base_url(), "http:");
        assert!(config.parse_base_url().0.is_none());

        let (url, issues) = with_base_url("https:///").parse_base_url();
        assert!(url.is_none());
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_parse_base_url_accepts_trailing_slash() {
        let (url, issues) = with_base_url("http://gpu-box:11434/").parse_base_url();
        assert!(issues.is_empty());
        assert_eq!(url.unwrap().host_str(), Some("gpu-box"));
    }

    #[test]
    fn test_parse_base_url_rejects_garbage() {
        let (url, issues) = with_base_url("http://").parse_base_url();
        assert!(url.is_none());
        assert!(matches!(issues[0].code, ConfigIssueCode::InvalidUrl { .. }));
    }
}
