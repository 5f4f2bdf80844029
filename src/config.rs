use crate::error::{CatalogError, Result};
use divi_catalog_common::{AcceptMode, ExtractionRules, Vocabulary, VocabularyFile};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 出力ファイル名
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputFiles {
    pub overview: String,
    pub overview_with_urls: String,
    pub summary: String,
    pub detail: String,
    pub html: String,
    pub xlsx: String,
    pub json: String,
}

impl Default for OutputFiles {
    fn default() -> Self {
        Self {
            overview: "Compleet_Overzicht_Divis.csv".into(),
            overview_with_urls: "Compleet_Overzicht_Divis_v2.csv".into(),
            summary: "Catalogus_Per_Categorie.csv".into(),
            detail: "Catalogus_Detail.csv".into(),
            html: "Divi_Catalogus_Interactief.html".into(),
            xlsx: "Compleet_Overzicht_Divis.xlsx".into(),
            json: "Divi_Catalogus.json".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 語彙にないカテゴリを拒否する
    pub strict_categories: bool,
    /// 追加の語彙ファイル（JSON）
    pub vocabulary_file: Option<PathBuf>,
    pub extraction: ExtractionRules,
    pub page_title: String,
    pub output_files: OutputFiles,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strict_categories: false,
            vocabulary_file: None,
            extraction: ExtractionRules::default(),
            page_title: "Indiveo Divi Catalogus".into(),
            output_files: OutputFiles::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "config loaded");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CatalogError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("divi-catalog").join("config.json"))
    }

    /// CLIの --strict を優先
    pub fn accept_mode(&self, strict_flag: bool) -> AcceptMode {
        if strict_flag || self.strict_categories {
            AcceptMode::Strict
        } else {
            AcceptMode::Lenient
        }
    }

    /// 組み込み語彙 + 語彙ファイル
    pub fn vocabulary(&self) -> Result<Vocabulary> {
        match &self.vocabulary_file {
            Some(path) => {
                if !path.exists() {
                    return Err(CatalogError::FileNotFound(path.display().to_string()));
                }
                let file = VocabularyFile::from_file(path)?;
                Ok(Vocabulary::with_overrides(&file)?)
            }
            None => Ok(Vocabulary::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"strict_categories": true}"#).unwrap();
        assert!(config.strict_categories);
        assert_eq!(config.extraction.prose_threshold, 150);
        assert_eq!(config.output_files.summary, "Catalogus_Per_Categorie.csv");
    }

    #[test]
    fn test_accept_mode() {
        let config = Config::default();
        assert_eq!(config.accept_mode(false), AcceptMode::Lenient);
        assert_eq!(config.accept_mode(true), AcceptMode::Strict);
    }

    #[test]
    fn test_missing_vocabulary_file() {
        let config = Config {
            vocabulary_file: Some(PathBuf::from("/nonexistent/vocab.json")),
            ..Default::default()
        };
        assert!(matches!(config.vocabulary(), Err(CatalogError::FileNotFound(_))));
    }
}
