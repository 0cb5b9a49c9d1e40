//! # 转码确认
//!
//! 非 UTF-8 文件是否转码由注入的 `Confirm` 回调决定：
//! - `PolicyConfirm`: 按 `--encoding-policy` 询问 / 总是转码 / 总是跳过
//! - 闭包: 测试中直接注入
//!
//! ## 依赖关系
//! - 被 `encoding/mod.rs` 和 `commands/batch.rs` 使用
//! - 使用 `dialoguer` 交互确认

use crate::cli::EncodingPolicy;
use crate::error::{OpenccBatchError, Result};

use dialoguer::theme::ColorfulTheme;
use encoding_rs::Encoding;
use std::path::Path;

/// 转码确认回调
pub trait Confirm {
    /// 返回 `true` 表示把 `path` 从 `encoding` 转为 UTF-8
    fn confirm_transcode(&mut self, path: &Path, encoding: &'static Encoding) -> Result<bool>;
}

impl<F> Confirm for F
where
    F: FnMut(&Path, &'static Encoding) -> Result<bool>,
{
    fn confirm_transcode(&mut self, path: &Path, encoding: &'static Encoding) -> Result<bool> {
        self(path, encoding)
    }
}

/// 按策略确认
pub struct PolicyConfirm {
    policy: EncodingPolicy,
    theme: ColorfulTheme,
}

impl PolicyConfirm {
    pub fn new(policy: EncodingPolicy) -> Self {
        Self {
            policy,
            theme: ColorfulTheme::default(),
        }
    }
}

impl Confirm for PolicyConfirm {
    fn confirm_transcode(&mut self, path: &Path, encoding: &'static Encoding) -> Result<bool> {
        match self.policy {
            EncodingPolicy::Convert => Ok(true),
            EncodingPolicy::Skip => Ok(false),
            EncodingPolicy::Ask => dialoguer::Confirm::with_theme(&self.theme)
                .with_prompt(format!(
                    "{} is {}, convert it to UTF-8?",
                    path.display(),
                    encoding.name()
                ))
                .default(false)
                .interact()
                .map_err(|e| OpenccBatchError::PromptError(e.to_string())),
        }
    }
}
