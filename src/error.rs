use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranslationTableError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("検査で{0}件の問題が見つかりました")]
    CheckFailed(usize),

    #[error(transparent)]
    Common(#[from] translation_table_common::Error),
}

pub type Result<T> = std::result::Result<T, TranslationTableError>;
