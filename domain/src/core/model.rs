//! Model value object naming the backend model

use super::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Model used when nothing else is configured
pub const DEFAULT_MODEL: &str = "gemma:2b";

/// Name of the single model served by the backend (Value Object)
///
/// Names follow the backend's `name[:tag]` convention, e.g. `gemma:2b`
/// or `llama3`. Only emptiness is rejected; whether the model actually
/// exists is for the backend to decide at generation time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Model(String);

impl Model {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidModel(name));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether two names refer to the same model.
    ///
    /// A name without a tag means `latest`, so `llama3` matches `llama3:latest`.
    pub fn matches(&self, other: &Model) -> bool {
        fn normalized(name: &str) -> std::borrow::Cow<'_, str> {
            if name.contains(':') {
                name.into()
            } else {
                format!("{name}:latest").into()
            }
        }
        normalized(self.as_str()) == normalized(other.as_str())
    }
}

impl Default for Model {
    /// Returns the default model (gemma:2b)
    fn default() -> Self {
        Model(DEFAULT_MODEL.to_string())
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Model::new(s)
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default().as_str(), "gemma:2b");
    }

    #[test]
    fn test_parse_trims_and_rejects_empty() {
        let model: Model = " llama3 ".parse().unwrap();
        assert_eq!(model.as_str(), "llama3");
        assert!("".parse::<Model>().is_err());
        assert!("   ".parse::<Model>().is_err());
    }

    #[test]
    fn test_matches_implicit_latest_tag() {
        let bare = Model::new("llama3").unwrap();
        let tagged = Model::new("llama3:latest").unwrap();
        assert!(bare.matches(&tagged));
        assert!(tagged.matches(&bare));
        assert!(!Model::default().matches(&bare));
    }

    #[test]
    fn test_deserialize_rejects_empty() {
        assert!(serde_json::from_str::<Model>("\"\"").is_err());
        let model: Model = serde_json::from_str("\"gemma:7b\"").unwrap();
        assert_eq!(model.to_string(), "gemma:7b");
    }
}
