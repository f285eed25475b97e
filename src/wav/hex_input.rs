//! 十六进制文本输入适配器
//!
//! 将从十六进制编辑器复制的文本（可带空格分隔、大小写不限）转换为原始字节，再交给解码器。

use super::decoder::decode;
use super::header::WavHeader;
use crate::error::{HeaderError, HeaderResult};

/// 规范化并解析十六进制文本
///
/// 去除所有空白、统一大写后，要求长度为偶数且仅含十六进制数字，然后两两成对转换为字节。
pub fn parse_hex(text: &str) -> HeaderResult<Vec<u8>> {
    let digits: Vec<u8> = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .enumerate()
        .map(|(position, c)| {
            nibble(c).ok_or_else(|| {
                HeaderError::MalformedHexInput(format!(
                    "非十六进制字符 / non-hex character {c:?} at digit {position}"
                ))
            })
        })
        .collect::<HeaderResult<_>>()?;

    if digits.is_empty() {
        return Err(HeaderError::MalformedHexInput(
            "输入为空 / empty input".to_string(),
        ));
    }

    if digits.len() % 2 != 0 {
        return Err(HeaderError::MalformedHexInput(format!(
            "奇数个十六进制数字 / odd number of hex digits ({})",
            digits.len()
        )));
    }

    Ok(digits
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}

/// 解析十六进制文本形式的文件头
///
/// 少于88个十六进制数字时由解码器返回 `TooShort`。
pub fn read_hex_header(text: &str) -> HeaderResult<WavHeader> {
    let bytes = parse_hex(text)?;
    decode(&bytes)
}

#[inline]
fn nibble(c: char) -> Option<u8> {
    c.to_digit(16).map(|d| d as u8)
}
