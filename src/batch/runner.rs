//! # 批量执行器
//!
//! 逐个处理候选文件，单线程、无并发。
//!
//! ## 功能
//! - 编码规范化（可能阻塞等待用户确认）
//! - 调用转换引擎
//! - 写回前生成 `.bak` 备份（`--append` 时不备份）
//! - 进度条显示与结果汇总
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `batch/collector.rs`, `encoding/`, `engine/`
//! - 使用 `utils/progress.rs`, `utils/output.rs`

use super::collector::{FileCollector, InputKind};
use super::BACKUP_SUFFIX;
use crate::encoding::{self, Confirm, Normalization};
use crate::engine::Converter;
use crate::error::{OpenccBatchError, Result};
use crate::utils::{output, progress};

use indicatif::ProgressBar;
use std::fs;
use std::path::{Path, PathBuf};

/// 批量转换选项
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// 直接覆盖，不生成备份
    pub append: bool,
    /// 只列出候选文件
    pub dry_run: bool,
    /// 显示进度条
    pub show_progress: bool,
}

/// 单个文件处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// 转换成功（`transcoded` 表示先做了编码转换）
    Converted { path: PathBuf, transcoded: bool },
    /// 跳过（编码未确认或无法判定）
    Skipped(PathBuf),
}

/// 批量处理结果统计
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchResult {
    /// 转换数量
    pub converted: usize,
    /// 其中经过编码转换的数量
    pub transcoded: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 已处理文件
    pub processed: Vec<PathBuf>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Converted { path, transcoded } => {
                self.converted += 1;
                if transcoded {
                    self.transcoded += 1;
                }
                self.processed.push(path);
            }
            ProcessResult::Skipped(_) => self.skipped += 1,
        }
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.converted + self.skipped
    }
}

/// 批量执行器
pub struct BatchRunner<'a> {
    engine: &'a dyn Converter,
    options: BatchOptions,
}

impl<'a> BatchRunner<'a> {
    /// 创建新的批量执行器
    pub fn new(engine: &'a dyn Converter, options: BatchOptions) -> Self {
        Self { engine, options }
    }

    /// 顺序处理文件列表，遇到 I/O 错误立即中止
    pub fn run(&self, files: &[PathBuf], confirm: &mut dyn Confirm) -> Result<BatchResult> {
        let pb = if self.options.show_progress {
            progress::create_progress_bar(files.len() as u64, "Converting")
        } else {
            progress::create_hidden_bar()
        };

        let mut batch_result = BatchResult::default();
        for file in files {
            let result = self.process_file(file, confirm, &pb);
            if result.is_err() {
                pb.abandon();
            }
            batch_result.merge(result?);
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(batch_result)
    }

    /// 处理单个文件
    pub fn process_file(
        &self,
        path: &Path,
        confirm: &mut dyn Confirm,
        pb: &ProgressBar,
    ) -> Result<ProcessResult> {
        let normalization = pb.suspend(|| encoding::ensure_utf8(path, confirm))?;
        if !normalization.proceed() {
            return Ok(ProcessResult::Skipped(path.to_path_buf()));
        }

        let original = fs::read(path).map_err(|e| OpenccBatchError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        let content = String::from_utf8_lossy(&original);
        let converted = self.engine.convert(&content);

        if !self.options.append {
            let backup = backup_path(path);
            fs::write(&backup, &original).map_err(|e| OpenccBatchError::BackupError {
                path: backup.display().to_string(),
                source: e,
            })?;
        }

        fs::write(path, converted).map_err(|e| OpenccBatchError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        })?;

        pb.suspend(|| output::print_success(&path.display().to_string()));

        Ok(ProcessResult::Converted {
            path: path.to_path_buf(),
            transcoded: matches!(normalization, Normalization::Transcoded(_)),
        })
    }
}

/// `<path>.bak`
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// 转换文件或目录
///
/// 输入既不是文件也不是目录时只打印提示，返回空结果。
pub fn convert_path(
    root: &Path,
    engine: &dyn Converter,
    confirm: &mut dyn Confirm,
    options: BatchOptions,
) -> Result<BatchResult> {
    let collector = FileCollector::new(root);

    if collector.kind() == InputKind::Invalid {
        output::print_warning(&format!(
            "{} is not a valid path",
            collector.input().display()
        ));
        return Ok(BatchResult::default());
    }

    let files = collector.collect();
    if files.is_empty() {
        output::print_info(&format!(
            "No text files found under {}",
            collector.input().display()
        ));
        return Ok(BatchResult::default());
    }

    if options.dry_run {
        output::print_info(&format!("{} file(s) would be converted:", files.len()));
        for file in &files {
            println!("    {}", file.display());
        }
        return Ok(BatchResult::default());
    }

    output::print_info(&format!("Found {} text file(s)", files.len()));
    BatchRunner::new(engine, options).run(&files, confirm)
}
