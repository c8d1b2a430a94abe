use crate::error::{TranslationTableError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use translation_table_common::{ColumnWidths, RenderOptions, TableLayout, TruncateMode, WidthRule, DEFAULT_SUFFIX};

/// 設定ファイルの場所を上書きする環境変数
pub const CONFIG_ENV: &str = "TRANSLATION_TABLE_CONFIG";

pub const DEFAULT_INPUT: &str = "Project明治回帰.yaml";
pub const DEFAULT_TEMPLATE: &str = "src/translation-table-template.md";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: PathBuf,
    pub template: PathBuf,
    pub layout: TableLayout,
    pub suffix: String,
    pub width_rule: WidthRule,
    pub truncate_mode: TruncateMode,
    pub widths: ColumnWidths,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            template: PathBuf::from(DEFAULT_TEMPLATE),
            layout: TableLayout::Reference,
            suffix: DEFAULT_SUFFIX.into(),
            width_rule: WidthRule::Ascii,
            truncate_mode: TruncateMode::Exact,
            widths: ColumnWidths::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            tracing::debug!(path = %config_path.display(), "設定ファイルを読み込み");
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)?;
        Ok(config_path)
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
        // 環境変数を優先
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }

        let home = dirs::home_dir()
            .ok_or_else(|| TranslationTableError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("translation-table").join("config.json"))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            layout: self.layout,
            widths: self.widths,
            suffix: self.suffix.clone(),
            width_rule: self.width_rule,
            truncate_mode: self.truncate_mode,
        }
    }
}
