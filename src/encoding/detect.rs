//! # 编码探测
//!
//! 读取文件前缀样本并猜测其编码。
//!
//! ## 判定顺序
//! 1. BOM（UTF-8 / UTF-16LE / UTF-16BE）
//! 2. 空样本或含 NUL 字节 -> 无标签
//! 3. 合法 UTF-8（允许样本末尾被截断的多字节序列，纯 ASCII 亦属此类）
//! 4. 其余交给 `chardetng`
//!
//! ## 依赖关系
//! - 被 `encoding/mod.rs` 使用
//! - 使用 `encoding_rs`, `chardetng`

use crate::error::{OpenccBatchError, Result};

use chardetng::EncodingDetector;
use encoding_rs::{Encoding, UTF_8};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 样本大小（字节）
pub const SAMPLE_SIZE: usize = 64 * 1024;

/// 文件前缀样本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    /// 至多 `SAMPLE_SIZE` 字节
    pub bytes: Vec<u8>,
    /// 文件长于 `SAMPLE_SIZE`，样本末尾可能切断多字节序列
    pub truncated: bool,
}

impl Sample {
    /// 完整文件内容构成的样本
    pub fn complete(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            truncated: false,
        }
    }

    /// 样本是否为空
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// 读取文件前 `SAMPLE_SIZE` 字节
///
/// 多读一个字节用于判断文件是否被截断。
pub fn read_sample(path: &Path) -> Result<Sample> {
    let file = File::open(path).map_err(|e| OpenccBatchError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut bytes = Vec::with_capacity(SAMPLE_SIZE.min(8192));
    file.take(SAMPLE_SIZE as u64 + 1)
        .read_to_end(&mut bytes)
        .map_err(|e| OpenccBatchError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;

    let truncated = bytes.len() > SAMPLE_SIZE;
    bytes.truncate(SAMPLE_SIZE);
    Ok(Sample { bytes, truncated })
}

/// 猜测样本编码，无法判定时返回 `None`
pub fn detect(sample: &Sample) -> Option<&'static Encoding> {
    let bytes = sample.bytes.as_slice();

    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return Some(encoding);
    }

    if bytes.is_empty() || bytes.contains(&0) {
        return None;
    }

    if is_utf8(bytes, sample.truncated) {
        return Some(UTF_8);
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, !sample.truncated);
    Some(detector.guess(None, true))
}

/// 编码标签是否为 UTF-8（不区分大小写）
pub fn is_utf8_label(encoding: &'static Encoding) -> bool {
    encoding.name().eq_ignore_ascii_case("utf-8")
}

/// 字节是否为合法 UTF-8
///
/// 仅当样本被截断时，才容忍末尾的不完整序列（`error_len() == None`）。
fn is_utf8(bytes: &[u8], truncated: bool) -> bool {
    match std::str::from_utf8(bytes) {
        Ok(_) => true,
        Err(e) => truncated && e.error_len().is_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::{GBK, UTF_16LE};

    #[test]
    fn test_detect_ascii_and_utf8() {
        assert_eq!(detect(&Sample::complete(b"plain ascii text\n")), Some(UTF_8));
        assert_eq!(detect(&Sample::complete("简体中文文本".as_bytes())), Some(UTF_8));
    }

    #[test]
    fn test_detect_truncated_utf8_sample() {
        let bytes = "汉字".as_bytes();
        // 截断最后一个字符的末字节
        let sample = Sample {
            bytes: bytes[..bytes.len() - 1].to_vec(),
            truncated: true,
        };
        assert_eq!(detect(&sample), Some(UTF_8));
    }

    #[test]
    fn test_incomplete_tail_in_whole_file_is_not_utf8() {
        // GBK 编码的 "version 刖"：末尾 EB BE 恰似不完整的 UTF-8 三字节序列
        let bytes = b"version \xEB\xBE";
        let detected = detect(&Sample::complete(bytes)).unwrap();
        assert!(!is_utf8_label(detected));
    }

    #[test]
    fn test_read_sample_marks_truncation() {
        let dir = tempfile::TempDir::new().unwrap();
        let short = dir.path().join("short.txt");
        let exact = dir.path().join("exact.txt");
        let long = dir.path().join("long.txt");
        std::fs::write(&short, b"abc").unwrap();
        std::fs::write(&exact, vec![b'a'; SAMPLE_SIZE]).unwrap();
        std::fs::write(&long, vec![b'a'; SAMPLE_SIZE + 10]).unwrap();

        assert!(!read_sample(&short).unwrap().truncated);
        let exact_sample = read_sample(&exact).unwrap();
        assert!(!exact_sample.truncated);
        assert_eq!(exact_sample.bytes.len(), SAMPLE_SIZE);
        let long_sample = read_sample(&long).unwrap();
        assert!(long_sample.truncated);
        assert_eq!(long_sample.bytes.len(), SAMPLE_SIZE);
    }

    #[test]
    fn test_detect_no_label() {
        assert_eq!(detect(&Sample::complete(b"")), None);
        assert_eq!(detect(&Sample::complete(b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR")), None);
    }

    #[test]
    fn test_detect_bom() {
        assert_eq!(detect(&Sample::complete(b"\xEF\xBB\xBFabc")), Some(UTF_8));
        assert_eq!(detect(&Sample::complete(b"\xFF\xFEa\0b\0")), Some(UTF_16LE));
    }

    #[test]
    fn test_detect_gbk() {
        let text = "这是一段用于编码探测的简体中文文本，内容需要足够长才能让探测器给出可靠的判断。\
                    中华人民共和国成立于一九四九年，首都位于北京。";
        let (bytes, _, _) = GBK.encode(text);
        let detected = detect(&Sample::complete(&bytes)).unwrap();
        assert!(!is_utf8_label(detected));
        let (decoded, _, had_errors) = detected.decode(&bytes);
        assert!(!had_errors);
        assert_eq!(decoded, text);
    }

    #[test]
    fn test_is_utf8_label() {
        assert!(is_utf8_label(UTF_8));
        assert!(!is_utf8_label(GBK));
    }
}
