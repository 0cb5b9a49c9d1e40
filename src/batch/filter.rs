//! # 文本文件过滤器
//!
//! 仅根据扩展名推断 MIME 类型，不读取文件内容。
//!
//! ## 依赖关系
//! - 被 `batch/collector.rs` 使用
//! - 使用 `mime_guess` 的静态扩展名表

use std::path::Path;

/// 路径是否被视为文本文件（MIME 顶级类型为 `text`）
pub fn is_text(path: &Path) -> bool {
    mime_guess::from_path(path)
        .first()
        .map(|mime| mime.type_() == mime_guess::mime::TEXT)
        .unwrap_or(false)
}
