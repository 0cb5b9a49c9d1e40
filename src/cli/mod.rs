//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 输入模式
//! - 默认: `INPUT` 视为字面文本，转换后直接打印
//! - `--path`: `INPUT` 视为文件或目录，批量转换其中的文本文件
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: options

pub mod options;

pub use options::{ConversionMode, EncodingPolicy};

use clap::Parser;

/// opencc-batch - 中文简繁及地区字形批量转换
#[derive(Parser, Debug)]
#[command(name = "opencc-batch")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Convert Chinese text or text files between Simplified, Traditional and regional scripts",
    long_about = None
)]
pub struct Cli {
    /// Literal text to convert, or a file/directory when --path is set
    pub input: Option<String>,

    /// Treat INPUT as a file or directory and convert text files in place
    #[arg(short, long, default_value_t = false)]
    pub path: bool,

    /// Conversion mode
    #[arg(short, long, value_enum, default_value_t = ConversionMode::S2t)]
    pub mode: ConversionMode,

    /// Use the inverse of --mode (e.g. s2t becomes t2s)
    #[arg(short, long, default_value_t = false)]
    pub reverse: bool,

    /// Overwrite files directly without writing a .bak backup
    #[arg(short, long, default_value_t = false)]
    pub append: bool,

    /// What to do with files that are not UTF-8
    #[arg(short, long, value_enum, default_value_t = EncodingPolicy::Ask)]
    pub encoding_policy: EncodingPolicy,

    /// List the files that would be converted without touching them
    #[arg(short = 'n', long, default_value_t = false)]
    pub dry_run: bool,
}

impl Cli {
    /// 实际生效的转换模式（考虑 `--reverse`）
    pub fn effective_mode(&self) -> ConversionMode {
        if self.reverse {
            self.mode.inverse()
        } else {
            self.mode
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["opencc-batch", "汉字"]).unwrap();
        assert_eq!(cli.input.as_deref(), Some("汉字"));
        assert!(!cli.path);
        assert!(!cli.append);
        assert!(!cli.dry_run);
        assert_eq!(cli.mode, ConversionMode::S2t);
        assert_eq!(cli.encoding_policy, EncodingPolicy::Ask);
        assert_eq!(cli.effective_mode(), ConversionMode::S2t);
    }

    #[test]
    fn test_parse_path_mode() {
        let cli = Cli::try_parse_from([
            "opencc-batch",
            "--path",
            "docs",
            "-m",
            "s2twp",
            "--append",
            "-e",
            "convert",
        ])
        .unwrap();
        assert!(cli.path);
        assert!(cli.append);
        assert_eq!(cli.mode, ConversionMode::S2twp);
        assert_eq!(cli.encoding_policy, EncodingPolicy::Convert);
    }

    #[test]
    fn test_reverse_flips_mode() {
        let cli = Cli::try_parse_from(["opencc-batch", "-r", "-m", "s2hk", "x"]).unwrap();
        assert_eq!(cli.effective_mode(), ConversionMode::Hk2s);
    }

    #[test]
    fn test_input_is_optional() {
        let cli = Cli::try_parse_from(["opencc-batch", "--path"]).unwrap();
        assert!(cli.input.is_none());
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Cli::try_parse_from(["opencc-batch", "-m", "s2x", "x"]).is_err());
    }
}
