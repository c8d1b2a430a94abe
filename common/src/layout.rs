//! 表レイアウト定義
//!
//! 列の並び・見出し・区切り行・セルの切り詰め方をレイアウトごとに持つ。

use crate::types::Field;
use serde::{Deserialize, Serialize};

// ============================================
// 既定の列幅
// ============================================

/// referenceレイアウトの表示幅予算（英・和・参考訳）
pub const REFERENCE_WIDTH: usize = 31;

/// yamatoレイアウトの文字数上限
pub const YAMATO_CHARS: usize = 30;
pub const YAMATO_MARK_CHARS: usize = 20;

/// セルの切り詰め方
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellPolicy {
    /// 切り詰めない
    Full,
    /// 表示幅で切り詰め（省略記号付き）
    Width(usize),
    /// 文字数で切り出し（省略記号なし）
    Chars(usize),
}

impl CellPolicy {
    fn with_limit(self, limit: Option<usize>) -> Self {
        match (self, limit) {
            (CellPolicy::Width(_), Some(n)) => CellPolicy::Width(n),
            (CellPolicy::Chars(_), Some(n)) => CellPolicy::Chars(n),
            (policy, _) => policy,
        }
    }
}

/// 列定義
#[derive(Debug, Clone, Copy)]
pub struct ColumnDefinition {
    pub field: Field,
    pub label: &'static str,
    pub separator: &'static str,
    pub policy: CellPolicy,
}

const EN: ColumnDefinition = ColumnDefinition { field: Field::En, label: "英", separator: "----", policy: CellPolicy::Full };
const JA: ColumnDefinition = ColumnDefinition { field: Field::Ja, label: "和", separator: "----", policy: CellPolicy::Full };
const COMMON: ColumnDefinition = ColumnDefinition { field: Field::Common, label: "参考訳", separator: "--------", policy: CellPolicy::Full };
const YAMATO: ColumnDefinition = ColumnDefinition { field: Field::Yamato, label: "＊", separator: "----", policy: CellPolicy::Full };

const fn limited(column: ColumnDefinition, policy: CellPolicy) -> ColumnDefinition {
    ColumnDefinition { policy, ..column }
}

pub const COMPACT_COLUMNS: &[ColumnDefinition] = &[EN, JA];

pub const REFERENCE_COLUMNS: &[ColumnDefinition] = &[
    limited(EN, CellPolicy::Width(REFERENCE_WIDTH)),
    limited(JA, CellPolicy::Width(REFERENCE_WIDTH)),
    limited(COMMON, CellPolicy::Width(REFERENCE_WIDTH)),
];

pub const YAMATO_COLUMNS: &[ColumnDefinition] = &[
    limited(EN, CellPolicy::Chars(YAMATO_CHARS)),
    limited(JA, CellPolicy::Chars(YAMATO_CHARS)),
    limited(COMMON, CellPolicy::Chars(YAMATO_CHARS)),
    limited(YAMATO, CellPolicy::Chars(YAMATO_MARK_CHARS)),
];

/// 列ごとの上限の上書き（未指定はレイアウト既定値）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnWidths {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub en: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ja: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yamato: Option<usize>,
}

impl ColumnWidths {
    pub fn get(&self, field: Field) -> Option<usize> {
        match field {
            Field::En => self.en,
            Field::Ja => self.ja,
            Field::Common => self.common,
            Field::Yamato => self.yamato,
        }
    }

    pub fn set(&mut self, field: Field, width: usize) {
        let slot = match field {
            Field::En => &mut self.en,
            Field::Ja => &mut self.ja,
            Field::Common => &mut self.common,
            Field::Yamato => &mut self.yamato,
        };
        *slot = Some(width);
    }
}

/// 表レイアウト
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableLayout {
    /// 英・和の2列、切り詰めなし
    Compact,
    /// 英・和・参考訳の3列、表示幅31で切り詰め
    #[default]
    Reference,
    /// 英・和・参考訳・大和言葉の4列、文字数で切り出し
    Yamato,
}

impl TableLayout {
    pub fn base_columns(self) -> &'static [ColumnDefinition] {
        match self {
            TableLayout::Compact => COMPACT_COLUMNS,
            TableLayout::Reference => REFERENCE_COLUMNS,
            TableLayout::Yamato => YAMATO_COLUMNS,
        }
    }

    /// 上書きを反映した列定義。切り詰めなしの列は上書きの対象外
    pub fn columns(self, widths: &ColumnWidths) -> Vec<ColumnDefinition> {
        self.base_columns()
            .iter()
            .map(|c| ColumnDefinition {
                policy: c.policy.with_limit(widths.get(c.field)),
                ..*c
            })
            .collect()
    }

    /// 見出し行 `| 英 | 和 | 参考訳 |`
    pub fn header(self) -> String {
        let mut line = String::from("|");
        for column in self.base_columns() {
            line.push_str(&format!(" {} |", column.label));
        }
        line
    }

    /// 区切り行 `|----|----|--------|`
    pub fn separator(self) -> String {
        let mut line = String::from("|");
        for column in self.base_columns() {
            line.push_str(column.separator);
            line.push('|');
        }
        line
    }
}

impl std::str::FromStr for TableLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" | "2" => Ok(TableLayout::Compact),
            "reference" | "ref" | "3" => Ok(TableLayout::Reference),
            "yamato" | "4" => Ok(TableLayout::Yamato),
            _ => Err(format!("Unknown layout: {}. Use compact, reference, or yamato", s)),
        }
    }
}

impl std::fmt::Display for TableLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TableLayout::Compact => write!(f, "compact"),
            TableLayout::Reference => write!(f, "reference"),
            TableLayout::Yamato => write!(f, "yamato"),
        }
    }
}
