//! 英和用語集YAMLからMarkdown対訳表を生成するツール

pub mod check;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
