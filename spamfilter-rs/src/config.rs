use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub corpus: CorpusConfig,
    pub model: ModelConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CorpusConfig {
    pub spam_dir: String,
    pub ham_dir: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    pub smoothing: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::SpamFilterError::Config(e.to_string()))?;

        toml::from_str(&content)
            .map_err(|e| crate::error::SpamFilterError::Config(e.to_string()))
    }

    pub fn default() -> Self {
        Self {
            corpus: CorpusConfig {
                spam_dir: "corpus/spam".to_string(),
                ham_dir: "corpus/ham".to_string(),
            },
            model: ModelConfig { smoothing: 1.0 },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model.smoothing, 1.0);
        assert_eq!(config.corpus.spam_dir, "corpus/spam");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[corpus]
spam_dir = "data/spam"
ham_dir = "data/ham"

[model]
smoothing = 0.5

[logging]
level = "debug"
"#,
        )
        .unwrap();

        let config = Config::from_file(&path).unwrap();
        assert_eq!(config.corpus.spam_dir, "data/spam");
        assert_eq!(config.corpus.ham_dir, "data/ham");
        assert_eq!(config.model.smoothing, 0.5);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_from_file_missing() {
        let result = Config::from_file("does-not-exist.toml");
        assert!(result.is_err());
    }
}
