//! # 文件收集器
//!
//! 根据输入路径收集待转换的文本文件列表。
//!
//! ## 功能
//! - 支持单文件和目录输入
//! - 递归目录搜索，每层按文件名排序
//! - 不进入目录符号链接（无循环）；指向普通文件的符号链接照常收集
//! - 跳过 `.bak` 备份文件
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `batch/filter.rs` 判定文本文件

use super::filter;
use super::BACKUP_SUFFIX;
use crate::utils::path;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 输入路径类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// 普通文件
    File,
    /// 目录
    Directory,
    /// 既不是文件也不是目录（不存在等）
    Invalid,
}

/// 文件收集器
pub struct FileCollector {
    /// 规范化后的输入路径
    input: PathBuf,
}

impl FileCollector {
    /// 创建新的文件收集器（路径按字面规范化）
    pub fn new(input: &Path) -> Self {
        Self {
            input: path::normalize(input),
        }
    }

    /// 规范化后的输入路径
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// 输入路径类型
    pub fn kind(&self) -> InputKind {
        if self.input.is_file() {
            InputKind::File
        } else if self.input.is_dir() {
            InputKind::Directory
        } else {
            InputKind::Invalid
        }
    }

    /// 收集所有候选文本文件
    pub fn collect(&self) -> Vec<PathBuf> {
        match self.kind() {
            InputKind::File => {
                if is_candidate(&self.input) {
                    vec![self.input.clone()]
                } else {
                    vec![]
                }
            }
            InputKind::Directory => WalkDir::new(&self.input)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.path().is_file())
                .filter(|e| is_candidate(e.path()))
                .map(|e| e.path().to_path_buf())
                .collect(),
            InputKind::Invalid => vec![],
        }
    }
}

fn is_candidate(path: &Path) -> bool {
    !is_backup(path) && filter::is_text(path)
}

fn is_backup(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext) == BACKUP_SUFFIX)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "内容").unwrap();
    }

    #[test]
    fn test_collect_nested_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        touch(root, "b.txt");
        touch(root, "a.md");
        touch(root, "img.png");
        touch(root, "sub/c.txt");
        touch(root, "sub/deeper/d.html");
        touch(root, "sub/deeper/e.zip");
        touch(root, "sub/deeper/f.txt.bak");
        touch(root, "Makefile");

        let collector = FileCollector::new(root);
        assert_eq!(collector.kind(), InputKind::Directory);

        let files = collector.collect();
        let rel: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root).unwrap().to_path_buf())
            .collect();

        assert_eq!(
            rel,
            vec![
                PathBuf::from("a.md"),
                PathBuf::from("b.txt"),
                PathBuf::from("sub/c.txt"),
                PathBuf::from("sub/deeper/d.html"),
            ]
        );
    }

    #[test]
    fn test_collect_single_file() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "one.txt");
        touch(dir.path(), "two.png");

        let text = FileCollector::new(&dir.path().join("one.txt"));
        assert_eq!(text.kind(), InputKind::File);
        assert_eq!(text.collect(), vec![dir.path().join("one.txt")]);

        let binary = FileCollector::new(&dir.path().join("two.png"));
        assert!(binary.collect().is_empty());
    }

    #[test]
    fn test_collect_invalid_path() {
        let dir = TempDir::new().unwrap();
        let collector = FileCollector::new(&dir.path().join("missing"));
        assert_eq!(collector.kind(), InputKind::Invalid);
        assert!(collector.collect().is_empty());
    }

    #[test]
    fn test_input_is_normalized() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "sub/one.txt");
        let messy = dir.path().join("sub").join("..").join(".").join("sub");
        let collector = FileCollector::new(&messy);
        assert_eq!(collector.input(), dir.path().join("sub"));
        assert_eq!(collector.collect(), vec![dir.path().join("sub/one.txt")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_symlinks_kept_dir_symlinks_not_descended() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "real/a.txt");
        std::os::unix::fs::symlink(dir.path(), dir.path().join("real/loop")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("linkdir")).unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("real/a.txt"),
            dir.path().join("link.txt"),
        )
        .unwrap();
        std::os::unix::fs::symlink(
            dir.path().join("missing.txt"),
            dir.path().join("dangling.txt"),
        )
        .unwrap();

        let files = FileCollector::new(dir.path()).collect();
        assert_eq!(
            files,
            vec![dir.path().join("link.txt"), dir.path().join("real/a.txt")]
        );
    }
}
