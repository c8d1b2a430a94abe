//! 用語集YAMLパーサー
//!
//! トップレベルがマッピングの配列であるYAML文書を読み、
//! `en` / `ja` / `common` / `yamato` を文字列として取り出す。

use crate::error::{Error, Result};
use crate::types::{Field, GlossaryEntry};
use serde_yaml::{Mapping, Value};

/// YAML文書を用語集レコードの列にパース
///
/// 空の文書は空の用語集として扱う。
///
/// # Examples
/// ```
/// use translation_table_common::parse_glossary;
///
/// let entries = parse_glossary("- en: Apple\n  ja: りんご\n").unwrap();
/// assert_eq!(entries[0].ja.as_deref(), Some("りんご"));
/// ```
pub fn parse_glossary(yaml: &str) -> Result<Vec<GlossaryEntry>> {
    if yaml.trim().is_empty() {
        return Ok(Vec::new());
    }

    let items = match serde_yaml::from_str::<Value>(yaml)? {
        Value::Null => return Ok(Vec::new()),
        Value::Sequence(items) => items,
        other => {
            return Err(Error::InvalidDocument(format!(
                "top-level value must be a sequence, found {}",
                kind(&other)
            )))
        }
    };

    let entries = items
        .into_iter()
        .enumerate()
        .map(|(index, value)| parse_entry(index, value))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(records = entries.len(), "用語集YAMLを読み込み");
    Ok(entries)
}

fn parse_entry(index: usize, value: Value) -> Result<GlossaryEntry> {
    let map = match value {
        Value::Mapping(map) => map,
        other => {
            return Err(Error::InvalidDocument(format!(
                "record #{} must be a mapping, found {}",
                index,
                kind(&other)
            )))
        }
    };

    Ok(GlossaryEntry {
        index,
        en: scalar_field(index, &map, Field::En)?,
        ja: scalar_field(index, &map, Field::Ja)?,
        common: scalar_field(index, &map, Field::Common)?,
        yamato: scalar_field(index, &map, Field::Yamato)?,
    })
}

/// スカラー値を文字列化（nullは未設定扱い）
fn scalar_field(index: usize, map: &Mapping, field: Field) -> Result<Option<String>> {
    match map.get(field.key()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(Error::InvalidDocument(format!(
            "record #{} field `{}` must be a scalar, found {}",
            index,
            field.key(),
            kind(other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
