//! # 批量转换模块
//!
//! 对文件或目录中的文本文件做原地转换。
//!
//! ## 功能
//! - 自动检测输入类型（文件/目录）
//! - 收集文本文件列表
//! - 顺序处理：编码规范化 -> 转换 -> 备份 -> 写回
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 使用
//! - 使用 `encoding/`, `engine/`
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod filter;
pub mod runner;

pub use runner::{convert_path, BatchOptions};

/// 备份文件后缀
pub const BACKUP_SUFFIX: &str = ".bak";
