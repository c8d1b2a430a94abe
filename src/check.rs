//! 用語集の検査
//!
//! 英・和の欠けたレコードと、大文字小文字を無視して重複する英語見出しを報告する。

use std::fmt;
use translation_table_common::{GlossaryEntry, GlossaryTable, SkippedEntry};

/// 重複グループ内の1件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateEntry {
    pub index: usize,
    pub en: String,
}

/// 検査結果
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub total: usize,
    pub renderable: usize,
    pub skipped: Vec<SkippedEntry>,
    pub duplicates: Vec<Vec<DuplicateEntry>>,
}

impl CheckReport {
    /// 問題の件数（除外レコード数＋重複グループ数）
    pub fn problem_count(&self) -> usize {
        self.skipped.len() + self.duplicates.len()
    }

    pub fn is_clean(&self) -> bool {
        self.problem_count() == 0
    }
}

pub fn check_entries(entries: Vec<GlossaryEntry>) -> CheckReport {
    let total = entries.len();
    let table = GlossaryTable::from_entries(entries);

    let duplicates = table
        .duplicates()
        .into_iter()
        .map(|group| {
            group
                .iter()
                .map(|e| DuplicateEntry {
                    index: e.index,
                    en: e.en.clone().unwrap_or_default(),
                })
                .collect()
        })
        .collect();

    CheckReport {
        total,
        renderable: table.len(),
        skipped: table.skipped().to_vec(),
        duplicates,
    }
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "レコード数: {}", self.total)?;
        writeln!(f, "出力対象: {}", self.renderable)?;

        writeln!(f, "除外: {}", self.skipped.len())?;
        for skipped in &self.skipped {
            writeln!(f, "  #{}: {} がありません", skipped.index, skipped.field.key())?;
        }

        writeln!(f, "重複する見出し: {}組", self.duplicates.len())?;
        for group in &self.duplicates {
            let items: Vec<String> = group
                .iter()
                .map(|d| format!("{} (#{})", d.en, d.index))
                .collect();
            writeln!(f, "  {}", items.join(", "))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use translation_table_common::Field;

    fn entry(index: usize, en: Option<&str>, ja: Option<&str>) -> GlossaryEntry {
        GlossaryEntry {
            index,
            en: en.map(String::from),
            ja: ja.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_clean_glossary() {
        let report = check_entries(vec![
            entry(0, Some("Apple"), Some("りんご")),
            entry(1, Some("banana"), Some("バナナ")),
        ]);
        assert!(report.is_clean());
        assert_eq!(report.total, 2);
        assert_eq!(report.renderable, 2);
    }

    #[test]
    fn test_report_problems() {
        let report = check_entries(vec![
            entry(0, Some("Meiji"), Some("明治")),
            entry(1, Some("Fig"), None),
            entry(2, Some("meiji"), Some("めいじ")),
        ]);

        assert_eq!(report.total, 3);
        assert_eq!(report.renderable, 2);
        assert_eq!(report.skipped, vec![SkippedEntry { index: 1, field: Field::Ja }]);
        assert_eq!(report.duplicates.len(), 1);
        assert_eq!(report.problem_count(), 2);

        let text = report.to_string();
        assert!(text.contains("#1: ja がありません"));
        assert!(text.contains("Meiji (#0), meiji (#2)"));
    }
}
