//! サブコマンドの実行
//!
//! 出力先を引数で受け取り、標準出力には文書・レポートだけを書く。

use crate::check;
use crate::cli::{Commands, RenderArgs};
use crate::config::Config;
use crate::error::{TranslationTableError, Result};
use crate::loader;
use std::io::Write;

/// コマンドを実行（省略時は既定の設定で render）
pub fn run<W: Write>(command: Option<Commands>, config: Config, out: &mut W) -> Result<()> {
    let command = command.unwrap_or_else(|| Commands::Render(RenderArgs::default()));

    match command {
        Commands::Render(args) => {
            let config = args.apply(config);
            let document = loader::render_file(&config, args.strict, args.no_template)?;

            match &args.output {
                Some(path) => {
                    std::fs::write(path, &document)?;
                    tracing::info!(path = %path.display(), "対訳表を保存");
                }
                None => {
                    out.write_all(document.as_bytes())?;
                    out.flush()?;
                }
            }
        }

        Commands::Check { input, strict } => {
            let path = input.unwrap_or(config.input);
            let entries = loader::load_glossary(&path)?;
            let report = check::check_entries(entries);

            write!(out, "{}", report)?;

            if strict && !report.is_clean() {
                return Err(TranslationTableError::CheckFailed(report.problem_count()));
            }
        }

        Commands::Config { show, init } => {
            if init {
                let path = Config::default().save()?;
                writeln!(out, "✔ 設定ファイルを作成しました: {}", path.display())?;
            }

            if show || !init {
                let config = if init { Config::default() } else { config };
                let path = Config::config_path()?;
                writeln!(out, "設定:")?;
                writeln!(out, "  ファイル: {}{}", path.display(), if path.exists() { "" } else { " (未作成)" })?;
                writeln!(out, "  入力: {}", config.input.display())?;
                writeln!(out, "  テンプレート: {}", config.template.display())?;
                writeln!(out, "  レイアウト: {}", config.layout)?;
                writeln!(out, "  省略記号: {}", config.suffix)?;
                writeln!(out, "  幅の数え方: {}", config.width_rule)?;
                writeln!(out, "  切り詰め: {}", config.truncate_mode)?;
                writeln!(out, "  列幅: {}", serde_json::to_string(&config.widths)?)?;
            }
        }
    }

    Ok(())
}
