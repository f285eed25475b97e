//! 文件输入适配器
//!
//! 读取文件开头的少量字节并交给解码器。

use super::decoder::decode;
use super::header::WavHeader;
use crate::error::{HeaderError, HeaderResult};
use crate::tools::constants::defaults::HEADER_READ_LIMIT;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 读取文件开头最多 `HEADER_READ_LIMIT` 字节
///
/// # 错误
///
/// * `HeaderError::IoFailure` - 文件不存在、无权限或读取失败（错误信息包含路径）
///
/// 不足44字节的文件不在此处报错，交由解码器返回 `TooShort`。
pub fn read_header_bytes<P: AsRef<Path>>(path: P) -> HeaderResult<Vec<u8>> {
    let path = path.as_ref();

    let file = File::open(path).map_err(|e| with_path(e, "无法打开文件 / cannot open", path))?;

    let mut bytes = Vec::with_capacity(HEADER_READ_LIMIT as usize);
    file.take(HEADER_READ_LIMIT)
        .read_to_end(&mut bytes)
        .map_err(|e| with_path(e, "读取失败 / read failed", path))?;

    Ok(bytes)
}

/// 读取并解码文件头
pub fn read_file_header<P: AsRef<Path>>(path: P) -> HeaderResult<WavHeader> {
    let bytes = read_header_bytes(path)?;
    decode(&bytes)
}

/// 保留原始错误类型，附加路径信息
fn with_path(err: std::io::Error, context: &str, path: &Path) -> HeaderError {
    HeaderError::IoFailure(std::io::Error::new(
        err.kind(),
        format!("{context} {}: {err}", path.display()),
    ))
}
