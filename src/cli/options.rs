//! # 枚举型选项
//!
//! 转换模式与编码处理策略。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - `ConversionMode` 传递给 `engine/`，`EncodingPolicy` 传递给 `encoding/`

use clap::ValueEnum;

/// 转换模式（对应 OpenCC 内置配置）
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Hash)]
pub enum ConversionMode {
    /// Simplified -> Traditional
    #[value(name = "s2t")]
    S2t,
    /// Traditional -> Simplified
    #[value(name = "t2s")]
    T2s,
    /// Simplified -> Traditional (Taiwan)
    #[value(name = "s2tw")]
    S2tw,
    /// Traditional (Taiwan) -> Simplified
    #[value(name = "tw2s")]
    Tw2s,
    /// Simplified -> Traditional (Hong Kong)
    #[value(name = "s2hk")]
    S2hk,
    /// Traditional (Hong Kong) -> Simplified
    #[value(name = "hk2s")]
    Hk2s,
    /// Simplified -> Traditional (Taiwan) with Taiwanese phrases
    #[value(name = "s2twp")]
    S2twp,
    /// Traditional (Taiwan) -> Simplified with Mainland phrases
    #[value(name = "tw2sp")]
    Tw2sp,
    /// Traditional -> Traditional (Taiwan)
    #[value(name = "t2tw")]
    T2tw,
    /// Traditional (Taiwan) -> Traditional
    #[value(name = "tw2t")]
    Tw2t,
    /// Traditional -> Traditional (Hong Kong)
    #[value(name = "t2hk")]
    T2hk,
    /// Traditional (Hong Kong) -> Traditional
    #[value(name = "hk2t")]
    Hk2t,
    /// Traditional -> Japanese Shinjitai
    #[value(name = "t2jp")]
    T2jp,
    /// Japanese Shinjitai -> Traditional
    #[value(name = "jp2t")]
    Jp2t,
}

impl ConversionMode {
    /// 所有模式
    #[cfg(test)]
    pub const ALL: [ConversionMode; 14] = [
        ConversionMode::S2t,
        ConversionMode::T2s,
        ConversionMode::S2tw,
        ConversionMode::Tw2s,
        ConversionMode::S2hk,
        ConversionMode::Hk2s,
        ConversionMode::S2twp,
        ConversionMode::Tw2sp,
        ConversionMode::T2tw,
        ConversionMode::Tw2t,
        ConversionMode::T2hk,
        ConversionMode::Hk2t,
        ConversionMode::T2jp,
        ConversionMode::Jp2t,
    ];

    /// OpenCC 配置名
    pub fn config_name(self) -> &'static str {
        match self {
            ConversionMode::S2t => "s2t",
            ConversionMode::T2s => "t2s",
            ConversionMode::S2tw => "s2tw",
            ConversionMode::Tw2s => "tw2s",
            ConversionMode::S2hk => "s2hk",
            ConversionMode::Hk2s => "hk2s",
            ConversionMode::S2twp => "s2twp",
            ConversionMode::Tw2sp => "tw2sp",
            ConversionMode::T2tw => "t2tw",
            ConversionMode::Tw2t => "tw2t",
            ConversionMode::T2hk => "t2hk",
            ConversionMode::Hk2t => "hk2t",
            ConversionMode::T2jp => "t2jp",
            ConversionMode::Jp2t => "jp2t",
        }
    }

    /// 反向模式
    pub fn inverse(self) -> ConversionMode {
        match self {
            ConversionMode::S2t => ConversionMode::T2s,
            ConversionMode::T2s => ConversionMode::S2t,
            ConversionMode::S2tw => ConversionMode::Tw2s,
            ConversionMode::Tw2s => ConversionMode::S2tw,
            ConversionMode::S2hk => ConversionMode::Hk2s,
            ConversionMode::Hk2s => ConversionMode::S2hk,
            ConversionMode::S2twp => ConversionMode::Tw2sp,
            ConversionMode::Tw2sp => ConversionMode::S2twp,
            ConversionMode::T2tw => ConversionMode::Tw2t,
            ConversionMode::Tw2t => ConversionMode::T2tw,
            ConversionMode::T2hk => ConversionMode::Hk2t,
            ConversionMode::Hk2t => ConversionMode::T2hk,
            ConversionMode::T2jp => ConversionMode::Jp2t,
            ConversionMode::Jp2t => ConversionMode::T2jp,
        }
    }
}

impl std::fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.config_name())
    }
}

/// 非 UTF-8 文件的处理策略
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum EncodingPolicy {
    /// Ask before transcoding each file
    Ask,
    /// Always transcode to UTF-8
    Convert,
    /// Never transcode; skip the file
    Skip,
}
