//! # opencc-batch - 中文简繁及地区字形转换工具
//!
//! 转换命令行给出的字符串，或原地批量转换文件/目录中的文本文件。
//!
//! ## 用法
//! - `opencc-batch 汉字` - 转换字面文本
//! - `opencc-batch --path docs/` - 批量转换，写回前生成 `.bak` 备份
//! - `opencc-batch --path docs/ --append` - 直接覆盖，不生成备份
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (文件收集与批量转换)
//!   │     ├── encoding/  (编码探测与转码)
//!   │     └── engine/    (OpenCC 转换引擎)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod encoding;
mod engine;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
