//! 用語集の型定義
//!
//! - GlossaryEntry: YAML配列の1要素（英・和・参考訳・大和言葉）
//! - GlossaryTable: 不完全なレコードを除外し、英語見出しで並べた一覧

use crate::error::{Error, Result};

/// 用語集のフィールド
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    En,
    Ja,
    Common,
    Yamato,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::En, Field::Ja, Field::Common, Field::Yamato];

    /// キー名から逆引き
    pub fn from_key(key: &str) -> Option<Field> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }

    /// YAML上のキー名
    pub fn key(self) -> &'static str {
        match self {
            Field::En => "en",
            Field::Ja => "ja",
            Field::Common => "common",
            Field::Yamato => "yamato",
        }
    }
}

/// 用語集の1レコード
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlossaryEntry {
    /// 元のYAML配列内の位置（0始まり）
    pub index: usize,
    pub en: Option<String>,     // 英
    pub ja: Option<String>,     // 和
    pub common: Option<String>, // 参考訳
    pub yamato: Option<String>, // 大和言葉
}

impl GlossaryEntry {
    pub fn new(en: &str, ja: &str) -> Self {
        Self {
            en: Some(en.to_string()),
            ja: Some(ja.to_string()),
            ..Default::default()
        }
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::En => self.en.as_deref(),
            Field::Ja => self.ja.as_deref(),
            Field::Common => self.common.as_deref(),
            Field::Yamato => self.yamato.as_deref(),
        }
    }

    /// 表に載せるのに足りない必須フィールド（英→和の順で最初の1つ）
    pub fn missing_field(&self) -> Option<Field> {
        if self.en.is_none() {
            Some(Field::En)
        } else if self.ja.is_none() {
            Some(Field::Ja)
        } else {
            None
        }
    }

    pub fn is_renderable(&self) -> bool {
        self.missing_field().is_none()
    }

    /// 並び替えキー（英語見出しの小文字）
    pub fn sort_key(&self) -> String {
        self.en.as_deref().unwrap_or_default().to_lowercase()
    }
}

/// 除外されたレコード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkippedEntry {
    pub index: usize,
    pub field: Field,
}

/// 描画対象の用語一覧
#[derive(Debug, Clone, Default)]
pub struct GlossaryTable {
    entries: Vec<GlossaryEntry>,
    skipped: Vec<SkippedEntry>,
}

impl GlossaryTable {
    /// 英・和の揃ったレコードだけを残し、英語見出しの大文字小文字を無視して安定ソートする
    pub fn from_entries(entries: Vec<GlossaryEntry>) -> Self {
        let mut kept = Vec::with_capacity(entries.len());
        let mut skipped = Vec::new();

        for entry in entries {
            match entry.missing_field() {
                Some(field) => {
                    tracing::warn!(index = entry.index, field = field.key(), "必須フィールドがないため除外");
                    skipped.push(SkippedEntry { index: entry.index, field });
                }
                None => kept.push(entry),
            }
        }

        kept.sort_by_cached_key(GlossaryEntry::sort_key);
        tracing::debug!(rows = kept.len(), skipped = skipped.len(), "用語一覧を構築");

        Self { entries: kept, skipped }
    }

    /// 不完全なレコードがあればエラーにする
    pub fn from_entries_strict(entries: Vec<GlossaryEntry>) -> Result<Self> {
        if let Some(entry) = entries.iter().find(|e| !e.is_renderable()) {
            let field = entry.missing_field().map(Field::key).unwrap_or_default();
            return Err(Error::MissingField { index: entry.index, field });
        }
        Ok(Self::from_entries(entries))
    }

    pub fn entries(&self) -> &[GlossaryEntry] {
        &self.entries
    }

    pub fn skipped(&self) -> &[SkippedEntry] {
        &self.skipped
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 英語見出しが大文字小文字を無視して重複しているグループ
    pub fn duplicates(&self) -> Vec<&[GlossaryEntry]> {
        let mut groups = Vec::new();
        let mut start = 0;

        for i in 1..=self.entries.len() {
            let boundary = i == self.entries.len()
                || self.entries[i].sort_key() != self.entries[start].sort_key();
            if boundary {
                if i - start > 1 {
                    groups.push(&self.entries[start..i]);
                }
                start = i;
            }
        }

        groups
    }
}
