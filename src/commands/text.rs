//! # 字面文本转换
//!
//! 直接转换命令行给出的字符串并打印，不访问文件系统。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `engine/`

use crate::engine::Converter;
use crate::error::Result;

/// 执行文本转换
pub fn execute(text: &str, engine: &dyn Converter) -> Result<()> {
    println!("{}", convert_text(text, engine));
    Ok(())
}

/// 转换字面文本
pub fn convert_text(text: &str, engine: &dyn Converter) -> String {
    engine.convert(text)
}
