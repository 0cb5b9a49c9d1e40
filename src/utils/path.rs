//! # 路径规范化
//!
//! 按字面处理 `.` 与 `..`，不访问文件系统，不解析符号链接。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - 无外部模块依赖

use std::path::{Component, Path, PathBuf};

/// 规范化路径
///
/// - 去掉 `.` 段
/// - `..` 抵消前一个普通段；位于开头的相对 `..` 保留
/// - 根目录上的 `..` 被丢弃
/// - 结果为空时返回 `.`
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }

    parts.iter().collect()
}
