//! # 转换引擎模块
//!
//! 封装外部 OpenCC 实现（`ferrous-opencc`），每次调用构建一次，按引用传递。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `batch/runner.rs` 使用
//! - 使用 `cli/options.rs` 中的 `ConversionMode`

use crate::cli::ConversionMode;
use crate::error::{OpenccBatchError, Result};

use ferrous_opencc::config::BuiltinConfig;
use ferrous_opencc::OpenCC;

/// 文本转换器
pub trait Converter {
    /// 转换整段文本，总是返回结果
    fn convert(&self, text: &str) -> String;
}

/// 基于 OpenCC 内置配置的转换引擎
pub struct OpenccEngine {
    mode: ConversionMode,
    inner: OpenCC,
}

impl OpenccEngine {
    /// 按模式加载内置配置
    pub fn new(mode: ConversionMode) -> Result<Self> {
        let inner =
            OpenCC::from_config(builtin_config(mode)).map_err(|e| OpenccBatchError::EngineInit {
                mode: mode.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self { mode, inner })
    }

    /// 当前模式
    pub fn mode(&self) -> ConversionMode {
        self.mode
    }
}

impl Converter for OpenccEngine {
    fn convert(&self, text: &str) -> String {
        self.inner.convert(text)
    }
}

fn builtin_config(mode: ConversionMode) -> BuiltinConfig {
    match mode {
        ConversionMode::S2t => BuiltinConfig::S2t,
        ConversionMode::T2s => BuiltinConfig::T2s,
        ConversionMode::S2tw => BuiltinConfig::S2tw,
        ConversionMode::Tw2s => BuiltinConfig::Tw2s,
        ConversionMode::S2hk => BuiltinConfig::S2hk,
        ConversionMode::Hk2s => BuiltinConfig::Hk2s,
        ConversionMode::S2twp => BuiltinConfig::S2twp,
        ConversionMode::Tw2sp => BuiltinConfig::Tw2sp,
        ConversionMode::T2tw => BuiltinConfig::T2tw,
        ConversionMode::Tw2t => BuiltinConfig::Tw2t,
        ConversionMode::T2hk => BuiltinConfig::T2hk,
        ConversionMode::Hk2t => BuiltinConfig::Hk2t,
        ConversionMode::T2jp => BuiltinConfig::T2jp,
        ConversionMode::Jp2t => BuiltinConfig::Jp2t,
    }
}
