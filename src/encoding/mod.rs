//! # 编码规范化模块
//!
//! 保证待转换文件为 UTF-8。
//!
//! ## 流程
//! - 探测样本编码，UTF-8 直接放行（不重写、不再读取）
//! - 空文件：跳过
//! - 无法判定编码（含 NUL 字节）：跳过，不询问
//! - 其他编码：经 `Confirm` 确认后整体解码并以 UTF-8 覆盖写回；拒绝则跳过
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 调用
//! - 子模块: detect, confirm
//! - 使用 `utils/output.rs`

pub mod confirm;
pub mod detect;

pub use confirm::{Confirm, PolicyConfirm};

use crate::error::{OpenccBatchError, Result};
use crate::utils::output;

use encoding_rs::Encoding;
use std::fs;
use std::path::Path;

/// 编码规范化结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    /// 已是 UTF-8
    AlreadyUtf8,
    /// 已从指定编码转为 UTF-8
    Transcoded(&'static Encoding),
    /// 用户拒绝转码
    Declined(&'static Encoding),
    /// 空文件，无需转换
    Empty,
    /// 无法判定编码
    Undetected,
}

impl Normalization {
    /// 是否可以继续转换
    pub fn proceed(&self) -> bool {
        matches!(self, Normalization::AlreadyUtf8 | Normalization::Transcoded(_))
    }
}

/// 确保文件为 UTF-8
pub fn ensure_utf8(path: &Path, confirm: &mut dyn Confirm) -> Result<Normalization> {
    let sample = detect::read_sample(path)?;
    if sample.is_empty() {
        output::print_skip(&format!("{}: empty file", path.display()));
        return Ok(Normalization::Empty);
    }

    let encoding = match detect::detect(&sample) {
        Some(encoding) if detect::is_utf8_label(encoding) => return Ok(Normalization::AlreadyUtf8),
        Some(encoding) => encoding,
        None => {
            output::print_skip(&format!(
                "{}: encoding could not be determined",
                path.display()
            ));
            return Ok(Normalization::Undetected);
        }
    };

    output::print_warning(&format!("{}: detected {}", path.display(), encoding.name()));

    if !confirm.confirm_transcode(path, encoding)? {
        output::print_skip(&format!("{}: left as {}", path.display(), encoding.name()));
        return Ok(Normalization::Declined(encoding));
    }

    transcode_to_utf8(path, encoding)?;
    output::print_transcode(&path.display().to_string(), encoding.name());
    Ok(Normalization::Transcoded(encoding))
}

/// 整体解码并以 UTF-8 覆盖写回，非法序列替换为 U+FFFD
fn transcode_to_utf8(path: &Path, encoding: &'static Encoding) -> Result<()> {
    let bytes = fs::read(path).map_err(|e| OpenccBatchError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let (text, _, had_errors) = encoding.decode(&bytes);
    if had_errors {
        output::print_warning(&format!(
            "{}: malformed {} sequences replaced",
            path.display(),
            encoding.name()
        ));
    }

    fs::write(path, text.as_bytes()).map_err(|e| OpenccBatchError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    })
}
