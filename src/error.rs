//! # 统一错误处理模块
//!
//! 定义 opencc-batch 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// opencc-batch 统一错误类型
#[derive(Error, Debug)]
pub enum OpenccBatchError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create backup: {path}")]
    BackupError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 转换引擎错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to load OpenCC configuration '{mode}'\nReason: {reason}")]
    EngineInit { mode: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 交互错误
    // ─────────────────────────────────────────────────────────────
    #[error("Confirmation prompt failed: {0}")]
    PromptError(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, OpenccBatchError>;
