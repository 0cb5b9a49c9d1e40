//! # 命令执行模块
//!
//! 根据 `--path` 选择字面文本转换或批量文件转换。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `engine/`
//! - 子模块: text, batch

pub mod batch;
pub mod text;

use crate::cli::Cli;
use crate::engine::OpenccEngine;
use crate::error::Result;
use crate::utils::output;

/// 执行命令
///
/// 缺少输入时只打印用法错误，不加载引擎。
pub fn run(cli: Cli) -> Result<()> {
    let Some(input) = required_input(&cli) else {
        if cli.path {
            output::print_error("A file or directory path is required with --path");
        } else {
            output::print_error("No text given; pass a string or use --path <PATH>");
        }
        return Ok(());
    };

    let engine = OpenccEngine::new(cli.effective_mode())?;

    if cli.path {
        batch::execute(input, &engine, &cli)
    } else {
        text::execute(input, &engine)
    }
}

/// 非空的 `INPUT`
fn required_input(cli: &Cli) -> Option<&str> {
    cli.input.as_deref().filter(|input| !input.is_empty())
}
