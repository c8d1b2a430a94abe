//! 用語集・テンプレートの読み込みと文書生成
//!
//! ## 変更履歴
//! - 2026-10-19: 初期作成

use crate::config::Config;
use crate::error::{TranslationTableError, Result};
use std::path::Path;
use translation_table_common::{parse_glossary, render_document, GlossaryEntry, GlossaryTable};

/// テキストファイルを読み込む（存在しなければ FileNotFound）
pub fn read_text(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(TranslationTableError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(path)?)
}

/// 用語集YAMLを読み込む
pub fn load_glossary(path: &Path) -> Result<Vec<GlossaryEntry>> {
    let content = read_text(path)?;
    let entries = parse_glossary(&content)?;
    tracing::info!(path = %path.display(), records = entries.len(), "用語集を読み込み");
    Ok(entries)
}

/// 用語集を読み込み、除外・並び替え済みの一覧にする
pub fn load_table(path: &Path, strict: bool) -> Result<GlossaryTable> {
    let entries = load_glossary(path)?;
    let table = if strict {
        GlossaryTable::from_entries_strict(entries)?
    } else {
        GlossaryTable::from_entries(entries)
    };
    Ok(table)
}

/// 設定に従ってテンプレート＋対訳表の文書を生成
pub fn render_file(config: &Config, strict: bool, no_template: bool) -> Result<String> {
    let table = load_table(&config.input, strict)?;

    let template = if no_template {
        None
    } else {
        Some(read_text(&config.template)?)
    };

    tracing::debug!(layout = %config.layout, rows = table.len(), "対訳表を生成");
    Ok(render_document(template.as_deref(), &table, &config.render_options()))
}
