//! # 批量文件转换命令
//!
//! 原地转换文件或目录中的文本文件。
//!
//! ## 功能
//! - 构建编码确认策略（非终端环境下 `ask` 退化为 `skip`）
//! - 调用 `batch::convert_path`
//! - 打印汇总
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `batch/`, `encoding/`
//! - 使用 `utils/output.rs`

use crate::batch::{self, BatchOptions};
use crate::cli::{Cli, EncodingPolicy};
use crate::encoding::PolicyConfirm;
use crate::engine::OpenccEngine;
use crate::error::Result;
use crate::utils::output;

use std::path::Path;

/// 执行批量转换
pub fn execute(input: &str, engine: &OpenccEngine, cli: &Cli) -> Result<()> {
    output::print_header(&format!("Converting files ({})", engine.mode()));

    let interactive = console::Term::stderr().is_term();
    let policy = resolve_policy(cli.encoding_policy, interactive);
    if policy != cli.encoding_policy {
        output::print_warning("No terminal attached; non-UTF-8 files will be skipped");
    }

    let options = BatchOptions {
        append: cli.append,
        dry_run: cli.dry_run,
        show_progress: console::user_attended(),
    };

    let mut confirm = PolicyConfirm::new(policy);
    let result = batch::convert_path(Path::new(input), engine, &mut confirm, options)?;

    if !options.dry_run {
        output::print_done(&format!(
            "Processed {} file(s) with '{}': {} converted ({} transcoded), {} skipped",
            result.total(),
            engine.mode(),
            result.converted,
            result.transcoded,
            result.skipped
        ));
    }

    Ok(())
}

/// 交互不可用时，`ask` 退化为 `skip`
fn resolve_policy(requested: EncodingPolicy, interactive: bool) -> EncodingPolicy {
    match requested {
        EncodingPolicy::Ask if !interactive => EncodingPolicy::Skip,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_policy() {
        assert_eq!(resolve_policy(EncodingPolicy::Ask, true), EncodingPolicy::Ask);
        assert_eq!(resolve_policy(EncodingPolicy::Ask, false), EncodingPolicy::Skip);
        assert_eq!(resolve_policy(EncodingPolicy::Convert, false), EncodingPolicy::Convert);
        assert_eq!(resolve_policy(EncodingPolicy::Skip, true), EncodingPolicy::Skip);
    }
}
