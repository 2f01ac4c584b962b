use crate::error::ScorerError;
use serde::Deserialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScorerConfig {
    pub report: Option<ReportConfig>,
    pub relevance: Option<RelevanceConfig>,
    pub batch: Option<BatchConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "md".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct RelevanceConfig {
    #[serde(default)]
    pub embedding_enabled: bool,
    #[serde(default)]
    pub stop_words: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

fn default_extensions() -> Vec<String> {
    vec!["json".to_string()]
}

impl ScorerConfig {
    pub fn report_format(&self) -> &str {
        self.report
            .as_ref()
            .map(|report| report.format.as_str())
            .unwrap_or("md")
    }

    pub fn embedding_enabled(&self) -> bool {
        self.relevance
            .as_ref()
            .map(|relevance| relevance.embedding_enabled)
            .unwrap_or(false)
    }

    /// Stopwords for the embedding cleaner; `None` disables stopword removal.
    pub fn stop_words(&self) -> Option<HashSet<String>> {
        let words = self
            .relevance
            .as_ref()
            .map(|relevance| relevance.stop_words.as_slice())
            .unwrap_or_default();
        if words.is_empty() {
            return None;
        }
        Some(
            words
                .iter()
                .map(|word| word.trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        )
    }

    pub fn batch_extensions(&self) -> Vec<String> {
        self.batch
            .as_ref()
            .map(|batch| batch.extensions.clone())
            .unwrap_or_else(default_extensions)
    }

    pub fn validate(&self) -> Result<(), ScorerError> {
        if !matches!(self.report_format(), "md" | "json") {
            return Err(ScorerError::ConfigParse(format!(
                "unsupported report.format: {}",
                self.report_format()
            )));
        }

        if let Some(batch) = &self.batch {
            if batch.extensions.is_empty() {
                return Err(ScorerError::ConfigParse(
                    "batch.extensions cannot be empty".to_string(),
                ));
            }
            if batch
                .extensions
                .iter()
                .any(|extension| extension.trim().trim_start_matches('.').is_empty())
            {
                return Err(ScorerError::ConfigParse(
                    "batch.extensions entries must be non-empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_tables_are_missing() {
        let cfg: ScorerConfig = toml::from_str("").expect("empty config should parse");
        assert_eq!(cfg.report_format(), "md");
        assert!(!cfg.embedding_enabled());
        assert!(cfg.stop_words().is_none());
        assert_eq!(cfg.batch_extensions(), vec!["json".to_string()]);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn stop_words_are_normalized() {
        let cfg: ScorerConfig = toml::from_str(
            r#"
[relevance]
embedding_enabled = true
stop_words = [" The ", "AND", ""]
"#,
        )
        .expect("config should parse");

        let words = cfg.stop_words().expect("stop words should be present");
        assert!(cfg.embedding_enabled());
        assert!(words.contains("the"));
        assert!(words.contains("and"));
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn validate_rejects_unknown_report_format() {
        let cfg: ScorerConfig = toml::from_str(
            r#"
[report]
format = "sarif"
"#,
        )
        .expect("config should parse");

        let err = cfg.validate().expect_err("sarif is not supported");
        assert!(err.to_string().contains("report.format"));
    }

    #[test]
    fn validate_rejects_empty_extension_list() {
        let cfg: ScorerConfig = toml::from_str(
            r#"
[batch]
extensions = []
"#,
        )
        .expect("config should parse");

        assert!(cfg.validate().is_err());
    }
}
