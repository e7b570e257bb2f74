//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain types on demand.

mod ollama;
mod server;

pub use ollama::{DEFAULT_BASE_URL, FileOllamaConfig};
pub use server::FileServerConfig;

use serde::{Deserialize, Deserializer, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the server cannot start with this configuration.
    Error,
    /// Non-fatal: the server starts but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    EmptyModelName { field: String },
    InvalidUrl { field: String, value: String },
    /// Port 0 asks the OS for a random port.
    EphemeralPort,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

/// Accept a scalar of any type as a string.
///
/// Environment values are typed by figment, so `OLLAMA_ASK_OLLAMA__MODEL=7`
/// arrives as an integer even though every model name is text.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Bool(bool),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Signed(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Bool(b) => b.to_string(),
    })
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// HTTP server settings
    pub server: FileServerConfig,
    /// Ollama backend settings
    pub ollama: FileOllamaConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        issues.extend(self.ollama.parse_model().1);
        issues.extend(self.ollama.parse_base_url().1);

        if self.server.port == 0 {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::EphemeralPort,
                message: "server.port is 0, a random port will be chosen".to_string(),
            });
        }

        issues
    }

    /// True if any issue is fatal
    pub fn has_errors(issues: &[ConfigIssue]) -> bool {
        issues.iter().any(|i| i.severity == Severity::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[server]
host = "0.0.0.0"
port = 8080

[ollama]
base_url = "http://gpu-box:11434"
model = "llama3"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.ollama.base_url, "http://gpu-box:11434");
        assert_eq!(config.ollama.model, "llama3");
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[ollama]
model = "mistral"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ollama.model, "mistral");
        // Defaults should apply
        assert_eq!(config.ollama.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.server, FileServerConfig::default());
    }

    #[test]
    fn test_numeric_model_and_host_are_read_as_text() {
        let toml_str = r#"
[server]
host = 1234

[ollama]
model = 7
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ollama.model, "7");
        assert_eq!(config.server.host, "1234");
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert_eq!(config.server.bind_address(), "127.0.0.1:5000");
        assert_eq!(config.ollama.model, "gemma:2b");
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_issues() {
        let mut config = FileConfig::default();
        config.ollama.model = String::new();
        config.ollama.base_url = "http://".to_string();
        config.server.port = 0;

        let issues = config.validate();
        assert_eq!(issues.len(), 3);
        assert!(FileConfig::has_errors(&issues));
        assert!(issues.iter().any(|i| i.code == ConfigIssueCode::EphemeralPort));
    }

    #[test]
    fn test_warning_only_is_not_fatal() {
        let mut config = FileConfig::default();
        config.server.port = 0;
        assert!(!FileConfig::has_errors(&config.validate()));
    }
}
