use crate::config::Config;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use translation_table_common::{Field, TableLayout, TruncateMode, WidthRule};

#[derive(Parser)]
#[command(name = "translation-table")]
#[command(about = "英和用語集YAMLからMarkdown対訳表を生成", long_about = None)]
pub struct Cli {
    // 省略時は render
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// テンプレートと対訳表を出力
    Render(RenderArgs),

    /// 用語集の欠落・重複を検査
    Check {
        /// 用語集YAMLファイル
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// 問題があれば異常終了
        #[arg(long)]
        strict: bool,
    },

    /// 設定を表示/初期化
    Config {
        /// 設定を表示
        #[arg(long)]
        show: bool,

        /// 既定の設定ファイルを書き出す
        #[arg(long)]
        init: bool,
    },
}

#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// 用語集YAMLファイル
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// 表の前に出力するテンプレート
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// 出力ファイル（省略時は標準出力）
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 表レイアウト (compact/reference/yamato)
    #[arg(short, long)]
    pub layout: Option<TableLayout>,

    /// 列の上限を上書き (例: --width ja=20)。複数指定可
    #[arg(short = 'w', long = "width", value_name = "FIELD=N")]
    pub widths: Vec<WidthOverride>,

    /// 切り詰め時の省略記号
    #[arg(long)]
    pub suffix: Option<String>,

    /// 表示幅の数え方 (ascii/unicode)
    #[arg(long)]
    pub width_rule: Option<WidthRule>,

    /// 旧スクリプト互換の切り詰め
    #[arg(long)]
    pub legacy_truncation: bool,

    /// 英・和の欠けたレコードがあれば異常終了
    #[arg(long)]
    pub strict: bool,

    /// テンプレートを出力しない
    #[arg(long)]
    pub no_template: bool,
}

impl RenderArgs {
    /// コマンドライン指定で設定を上書き
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(template) = &self.template {
            config.template = template.clone();
        }
        if let Some(layout) = self.layout {
            config.layout = layout;
        }
        if let Some(suffix) = &self.suffix {
            config.suffix = suffix.clone();
        }
        if let Some(rule) = self.width_rule {
            config.width_rule = rule;
        }
        if self.legacy_truncation {
            config.truncate_mode = TruncateMode::Legacy;
        }
        for w in &self.widths {
            config.widths.set(w.field, w.width);
        }
        config
    }
}

/// `--width` の1指定
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidthOverride {
    pub field: Field,
    pub width: usize,
}

impl std::str::FromStr for WidthOverride {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, value) = s
            .split_once('=')
            .ok_or_else(|| format!("Invalid width: {}. Use FIELD=N (e.g. ja=20)", s))?;
        let field = Field::from_key(key.trim().to_lowercase().as_str())
            .ok_or_else(|| format!("Unknown field: {}. Use en, ja, common, or yamato", key))?;
        let width = value
            .trim()
            .parse()
            .map_err(|_| format!("Invalid width value: {}", value))?;
        Ok(WidthOverride { field, width })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let cli = Cli::try_parse_from(["translation-table"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_render_args() {
        let cli = Cli::try_parse_from([
            "translation-table",
            "render",
            "-i",
            "glossary.yaml",
            "--layout",
            "yamato",
            "--width-rule",
            "unicode",
            "--legacy-truncation",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);

        let Some(Commands::Render(args)) = cli.command else {
            panic!("renderを期待");
        };
        let config = args.apply(Config::default());
        assert_eq!(config.input, PathBuf::from("glossary.yaml"));
        assert_eq!(config.layout, TableLayout::Yamato);
        assert_eq!(config.width_rule, WidthRule::Unicode);
        assert_eq!(config.truncate_mode, TruncateMode::Legacy);
        assert_eq!(config.template, Config::default().template);
    }

    #[test]
    fn test_width_overrides() {
        let cli = Cli::try_parse_from([
            "translation-table",
            "render",
            "--width",
            "ja=20",
            "-w",
            "Yamato=6",
        ])
        .unwrap();

        let Some(Commands::Render(args)) = cli.command else {
            panic!("renderを期待");
        };
        let mut base = Config::default();
        base.widths.en = Some(40);

        let config = args.apply(base);
        assert_eq!(config.widths.ja, Some(20));
        assert_eq!(config.widths.yamato, Some(6));
        // 指定のない列は設定ファイルの値を保つ
        assert_eq!(config.widths.en, Some(40));
        assert_eq!(config.widths.common, None);
    }

    #[test]
    fn test_invalid_width_rejected() {
        assert!("ja".parse::<WidthOverride>().is_err());
        assert!("kana=3".parse::<WidthOverride>().is_err());
        assert!("ja=-1".parse::<WidthOverride>().is_err());
        assert_eq!(
            "common=12".parse::<WidthOverride>().unwrap(),
            WidthOverride { field: Field::Common, width: 12 }
        );
    }

    #[test]
    fn test_unknown_layout_rejected() {
        let result = Cli::try_parse_from(["translation-table", "render", "--layout", "wide"]);
        assert!(result.is_err());
    }
}
