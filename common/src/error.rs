//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    #[error("Record #{index} is missing `{field}`")]
    MissingField { index: usize, field: &'static str },
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
