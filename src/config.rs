use crate::error::{BrandMatchError, Result};
use brand_match_common::{MatchSettings, DEFAULT_THRESHOLD, DEFAULT_TOP_N};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 類似度閾値 (0-100)
    pub threshold: u32,
    /// 1説明あたりの候補数
    pub top_n: usize,
    pub description_column: Option<String>,
    pub brand_column: Option<String>,
    pub id_column: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            top_n: DEFAULT_TOP_N,
            description_column: None,
            brand_column: None,
            id_column: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| BrandMatchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("brand-match").join("config.json"))
    }

    /// CLI引数で上書きした照合パラメータ（範囲外はエラー）
    pub fn match_settings(&self, threshold: Option<u32>, top_n: Option<usize>) -> Result<MatchSettings> {
        let settings = MatchSettings::new(
            threshold.unwrap_or(self.threshold),
            top_n.unwrap_or(self.top_n),
        )?;
        Ok(settings)
    }
}
