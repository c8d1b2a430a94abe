//! Markdown対訳表の生成
//!
//! テンプレート本文 → 見出し行 → 区切り行 → 各レコード行 の順に組み立てる。
//! 全体をメモリ上で作ってから返すので、途中で失敗しても中途半端な表は出力されない。

use crate::layout::{CellPolicy, ColumnDefinition, ColumnWidths, TableLayout};
use crate::types::{GlossaryEntry, GlossaryTable};
use crate::width::{self, TruncateMode, WidthRule, DEFAULT_SUFFIX};

/// 描画オプション
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub layout: TableLayout,
    pub widths: ColumnWidths,
    pub suffix: String,
    pub width_rule: WidthRule,
    pub truncate_mode: TruncateMode,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            layout: TableLayout::default(),
            widths: ColumnWidths::default(),
            suffix: DEFAULT_SUFFIX.to_string(),
            width_rule: WidthRule::default(),
            truncate_mode: TruncateMode::default(),
        }
    }
}

/// テンプレートと表を連結した文書全体
///
/// テンプレートが改行で終わっていなければ改行を補う。
pub fn render_document(template: Option<&str>, table: &GlossaryTable, options: &RenderOptions) -> String {
    let mut out = String::new();

    if let Some(template) = template {
        out.push_str(template);
        if !template.ends_with('\n') {
            out.push('\n');
        }
    }

    out.push_str(&render_table(table, options));
    out
}

/// 見出し行・区切り行・レコード行
pub fn render_table(table: &GlossaryTable, options: &RenderOptions) -> String {
    let columns = options.layout.columns(&options.widths);

    let mut out = String::new();
    out.push_str(&options.layout.header());
    out.push('\n');
    out.push_str(&options.layout.separator());
    out.push('\n');

    for entry in table.entries() {
        out.push_str(&render_row(entry, &columns, options));
        out.push('\n');
    }

    out
}

/// `|英|和|参考訳|` 形式の1行。未設定の任意フィールドは空セル
pub fn render_row(entry: &GlossaryEntry, columns: &[ColumnDefinition], options: &RenderOptions) -> String {
    let mut line = String::from("|");
    for column in columns {
        let value = entry.get(column.field).unwrap_or_default();
        line.push_str(&format_cell(value, column.policy, options));
        line.push('|');
    }
    line
}

/// 切り詰めとエスケープ。exactモードはエスケープ後の幅で予算内に収める
fn format_cell(value: &str, policy: CellPolicy, options: &RenderOptions) -> String {
    match policy {
        CellPolicy::Full => escape_cell(value),
        CellPolicy::Width(limit) => match options.truncate_mode {
            TruncateMode::Exact => width::truncate_units(
                &escaped_units(value),
                limit,
                &escape_cell(&options.suffix),
                options.width_rule,
            ),
            TruncateMode::Legacy => escape_cell(&width::truncate_to_width(
                value,
                limit,
                &options.suffix,
                options.width_rule,
                TruncateMode::Legacy,
            )),
        },
        CellPolicy::Chars(limit) => escape_cell(&width::slice_chars(value, limit)),
    }
}

/// エスケープ後の表示単位（`\|` と改行由来の空白はそれぞれ1単位）
fn escaped_units(text: &str) -> Vec<String> {
    let mut units = Vec::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let unit = match c {
            '|' => "\\|".to_string(),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                " ".to_string()
            }
            '\n' => " ".to_string(),
            _ => c.to_string(),
        };
        units.push(unit);
    }
    units
}

/// セル内の `|` をエスケープし、改行を空白にする
pub fn escape_cell(text: &str) -> String {
    escaped_units(text).concat()
}
