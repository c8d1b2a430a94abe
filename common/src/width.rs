//! 表示幅を考慮した文字列の切り詰め
//!
//! Markdown表のセル幅を揃えるため、半角1・全角2として幅を数え、
//! 予算を超える文字列を省略記号付きで切り詰める。

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

/// 既定の省略記号
pub const DEFAULT_SUFFIX: &str = "...";

/// 1文字あたりの表示幅の数え方
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthRule {
    /// ASCIIは1、それ以外はすべて2
    #[default]
    Ascii,
    /// Unicode East Asian Widthに従う（結合文字は0）
    Unicode,
}

impl WidthRule {
    pub fn char_width(self, c: char) -> usize {
        match self {
            WidthRule::Ascii => {
                if c.is_ascii() {
                    1
                } else {
                    2
                }
            }
            WidthRule::Unicode => c.width().unwrap_or(0),
        }
    }

    pub fn str_width(self, s: &str) -> usize {
        s.chars().map(|c| self.char_width(c)).sum()
    }
}

impl std::str::FromStr for WidthRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ascii" => Ok(WidthRule::Ascii),
            "unicode" | "east-asian" => Ok(WidthRule::Unicode),
            _ => Err(format!("Unknown width rule: {}. Use ascii or unicode", s)),
        }
    }
}

impl std::fmt::Display for WidthRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WidthRule::Ascii => write!(f, "ascii"),
            WidthRule::Unicode => write!(f, "unicode"),
        }
    }
}

/// 切り詰め方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TruncateMode {
    /// 結果の表示幅が必ず予算以内に収まる
    #[default]
    Exact,
    /// 旧スクリプト互換: 超過した文字数から省略記号の文字数を引いて切る
    Legacy,
}

impl std::fmt::Display for TruncateMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TruncateMode::Exact => write!(f, "exact"),
            TruncateMode::Legacy => write!(f, "legacy"),
        }
    }
}

/// 表示幅 `width` に収まるよう `s` を切り詰める
///
/// 収まる場合は元の文字列をそのまま返す。
///
/// # Examples
/// ```
/// use translation_table_common::width::{truncate_to_width, TruncateMode, WidthRule};
///
/// let s = truncate_to_width("hello world", 5, "...", WidthRule::Ascii, TruncateMode::Exact);
/// assert_eq!(s, "he...");
/// ```
pub fn truncate_to_width(
    s: &str,
    width: usize,
    suffix: &str,
    rule: WidthRule,
    mode: TruncateMode,
) -> String {
    match mode {
        TruncateMode::Exact => truncate_exact(s, width, suffix, rule),
        TruncateMode::Legacy => truncate_legacy(s, width, suffix, rule),
    }
}

/// 省略記号込みで幅 `width` 以内。省略記号自体が入らない場合は記号なしで切る
fn truncate_exact(s: &str, width: usize, suffix: &str, rule: WidthRule) -> String {
    let units: Vec<&str> = s
        .char_indices()
        .map(|(i, c)| &s[i..i + c.len_utf8()])
        .collect();
    truncate_units(&units, width, suffix, rule)
}

/// 分割できない表示単位の列を、省略記号込みで幅 `width` 以内に切り詰める
///
/// エスケープ列（`\|` など）を1単位として渡せば途中で切れない。
pub fn truncate_units<S: AsRef<str>>(units: &[S], width: usize, suffix: &str, rule: WidthRule) -> String {
    let total: usize = units.iter().map(|u| rule.str_width(u.as_ref())).sum();
    if total <= width {
        return units.iter().map(AsRef::as_ref).collect();
    }

    let suffix_width = rule.str_width(suffix);
    let (budget, suffix) = if suffix_width <= width {
        (width - suffix_width, suffix)
    } else {
        (width, "")
    };

    let mut result = String::new();
    let mut used = 0;
    for unit in units {
        let w = rule.str_width(unit.as_ref());
        if used + w > budget {
            break;
        }
        result.push_str(unit.as_ref());
        used += w;
    }
    result.push_str(suffix);
    result
}

/// 幅が予算を超えた時点の文字数から省略記号の文字数を引いた分だけ残す。
/// 最後の1文字で超えた場合は切り詰めない。
fn truncate_legacy(s: &str, width: usize, suffix: &str, rule: WidthRule) -> String {
    let total = s.chars().count();
    let suffix_len = suffix.chars().count();
    let mut accumulated = 0;

    for (i, c) in s.chars().enumerate() {
        accumulated += rule.char_width(c);
        let consumed = i + 1;
        if accumulated <= width || consumed == total {
            continue;
        }
        let keep = consumed.saturating_sub(suffix_len);
        return s.chars().take(keep).chain(suffix.chars()).collect();
    }

    s.to_string()
}

/// 先頭から `count` 文字を取り出す（省略記号なし）
pub fn slice_chars(s: &str, count: usize) -> String {
    s.chars().take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(s: &str, width: usize) -> String {
        truncate_to_width(s, width, DEFAULT_SUFFIX, WidthRule::Ascii, TruncateMode::Exact)
    }

    fn legacy(s: &str, width: usize) -> String {
        truncate_to_width(s, width, DEFAULT_SUFFIX, WidthRule::Ascii, TruncateMode::Legacy)
    }

    #[test]
    fn test_char_width_ascii_rule() {
        assert_eq!(WidthRule::Ascii.char_width('a'), 1);
        assert_eq!(WidthRule::Ascii.char_width('明'), 2);
        assert_eq!(WidthRule::Ascii.char_width('ｱ'), 2);
        assert_eq!(WidthRule::Ascii.char_width('é'), 2);
        assert_eq!(WidthRule::Ascii.str_width("明治回帰"), 8);
    }

    #[test]
    fn test_char_width_unicode_rule() {
        assert_eq!(WidthRule::Unicode.char_width('a'), 1);
        assert_eq!(WidthRule::Unicode.char_width('明'), 2);
        assert_eq!(WidthRule::Unicode.char_width('ｱ'), 1);
        assert_eq!(WidthRule::Unicode.char_width('é'), 1);
    }

    #[test]
    fn test_exact_ascii_fits() {
        assert_eq!(exact("hello", 5), "hello");
        assert_eq!(exact("hello", 10), "hello");
        assert_eq!(exact("", 0), "");
    }

    #[test]
    fn test_exact_ascii_truncates() {
        assert_eq!(exact("hello world", 5), "he...");
        assert_eq!(exact("hello world", 8), "hello...");
    }

    #[test]
    fn test_exact_cjk() {
        assert_eq!(exact("明治回帰", 8), "明治回帰");
        // 幅7: 省略記号3 + 全角2文字(4)
        assert_eq!(exact("明治回帰計画", 7), "明治...");
        // 幅6: 全角1文字(2) + 3 = 5、もう1文字は入らない
        assert_eq!(exact("明治回帰計画", 6), "明...");
    }

    #[test]
    fn test_exact_budget_smaller_than_suffix() {
        assert_eq!(exact("hello", 2), "he");
        assert_eq!(exact("hello", 0), "");
        assert_eq!(exact("明治", 1), "");
    }

    #[test]
    fn test_exact_result_never_exceeds_width() {
        let samples = ["hello world", "明治回帰", "mixed 明治 text", "ｱｲｳｴｵ", "a明b治c"];
        for s in samples {
            for width in 0..20 {
                let out = exact(s, width);
                assert!(
                    WidthRule::Ascii.str_width(&out) <= width,
                    "{:?} を幅{}で切り詰めた結果 {:?} が超過",
                    s,
                    width,
                    out
                );
            }
        }
    }

    #[test]
    fn test_exact_custom_suffix() {
        let s = truncate_to_width("hello world", 6, "…", WidthRule::Ascii, TruncateMode::Exact);
        // 「…」は非ASCIIなので幅2
        assert_eq!(s, "hell…");
    }

    #[test]
    fn test_legacy_character_count_quirks() {
        // 超過した6文字目から省略記号3文字分を引くので3文字残る
        assert_eq!(legacy("hello world", 5), "hel...");
        // 最後の1文字で超過した場合はそのまま
        assert_eq!(legacy("hello!", 5), "hello!");
        assert_eq!(legacy("hello", 5), "hello");
    }

    #[test]
    fn test_legacy_cjk_counts_characters() {
        // 4文字目で幅8 > 7、4 - 3 = 1文字 + 省略記号
        assert_eq!(legacy("明治回帰計画", 7), "明...");
    }

    #[test]
    fn test_legacy_budget_smaller_than_suffix() {
        assert_eq!(legacy("hello world", 1), "...");
        assert_eq!(legacy("", 0), "");
    }

    #[test]
    fn test_unicode_rule_halfwidth_kana() {
        let s = "ｱｲｳｴｵｶｷｸ";
        let unicode = |w| truncate_to_width(s, w, DEFAULT_SUFFIX, WidthRule::Unicode, TruncateMode::Exact);
        // 半角カナは幅1なので8で収まる
        assert_eq!(unicode(8), s);
        assert_eq!(unicode(7), "ｱｲｳｴ...");
        // asciiルールでは幅2として数える
        assert_eq!(exact(s, 8), "ｱｲ...");
    }

    #[test]
    fn test_unicode_rule_combining_mark_kept_with_base() {
        let s = "abcde\u{301}fghij";
        assert_eq!(WidthRule::Unicode.str_width(s), 10);

        let out = truncate_to_width(s, 8, DEFAULT_SUFFIX, WidthRule::Unicode, TruncateMode::Exact);
        assert_eq!(out, "abcde\u{301}...");
        assert_eq!(WidthRule::Unicode.str_width(&out), 8);

        let out = truncate_to_width(s, 7, DEFAULT_SUFFIX, WidthRule::Unicode, TruncateMode::Exact);
        assert_eq!(out, "abcd...");
    }

    #[test]
    fn test_truncate_units_never_splits_unit() {
        let units = ["a", "\\|", "b", "c", "d"];
        assert_eq!(truncate_units(&units, 5, "..", WidthRule::Ascii), "a\\|..");
        assert_eq!(truncate_units(&units, 4, "..", WidthRule::Ascii), "a..");
        assert_eq!(truncate_units(&units, 6, "..", WidthRule::Ascii), "a\\|bcd");
    }

    #[test]
    fn test_slice_chars() {
        assert_eq!(slice_chars("明治回帰", 2), "明治");
        assert_eq!(slice_chars("abc", 10), "abc");
        assert_eq!(slice_chars("abc", 0), "");
    }

    #[test]
    fn test_parse_width_rule() {
        assert_eq!("ASCII".parse::<WidthRule>().unwrap(), WidthRule::Ascii);
        assert_eq!("unicode".parse::<WidthRule>().unwrap(), WidthRule::Unicode);
        assert!("cjk".parse::<WidthRule>().is_err());
    }
}
