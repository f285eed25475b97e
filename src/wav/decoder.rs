//! WAV文件头解码器
//!
//! 按固定偏移校验四个ASCII标记，再以小端序读取九个数值字段。纯函数，无副作用。

use super::header::{HeaderField, WavHeader};
use crate::error::{HeaderError, HeaderResult};
use crate::tools::constants::layout;

/// 解码规范44字节WAV文件头
///
/// # 错误
///
/// * `HeaderError::TooShort` - 输入少于44字节
/// * `HeaderError::RiffMismatch` / `WaveMismatch` / `FmtMismatch` / `DataMismatch` -
///   对应标记不匹配（按此顺序检查，返回第一个失败的标记）
///
/// 44字节之后的内容被忽略；派生字段一致性不在此处校验。
///
/// # 示例
///
/// ```rust
/// use wav_header_reader::wav::decode;
///
/// let bytes = [0u8; 10];
/// assert!(decode(&bytes).is_err());
/// ```
pub fn decode(bytes: &[u8]) -> HeaderResult<WavHeader> {
    if bytes.len() < layout::HEADER_LEN {
        return Err(HeaderError::TooShort {
            actual: bytes.len(),
        });
    }

    check_marker(bytes, layout::RIFF_OFFSET, layout::RIFF_MARKER)
        .map_err(|found| HeaderError::RiffMismatch { found })?;
    check_marker(bytes, layout::WAVE_OFFSET, layout::WAVE_MARKER)
        .map_err(|found| HeaderError::WaveMismatch { found })?;
    check_marker(bytes, layout::FMT_OFFSET, layout::FMT_MARKER)
        .map_err(|found| HeaderError::FmtMismatch { found })?;
    check_marker(bytes, layout::DATA_OFFSET, layout::DATA_MARKER)
        .map_err(|found| HeaderError::DataMismatch { found })?;

    Ok(WavHeader::new(
        read_u32(bytes, HeaderField::ChunkSize),
        read_u32(bytes, HeaderField::Subchunk1Size),
        read_u16(bytes, HeaderField::AudioFormat),
        read_u16(bytes, HeaderField::NumChannels),
        read_u32(bytes, HeaderField::SampleRate),
        read_u32(bytes, HeaderField::ByteRate),
        read_u16(bytes, HeaderField::BlockAlign),
        read_u16(bytes, HeaderField::BitsPerSample),
        read_u32(bytes, HeaderField::Subchunk2Size),
    ))
}

/// 精确匹配标记，不匹配时返回实际读到的4字节
fn check_marker(
    bytes: &[u8],
    offset: usize,
    expected: &[u8; layout::MARKER_LEN],
) -> Result<(), [u8; layout::MARKER_LEN]> {
    let found = take4(bytes, offset);
    if &found == expected { Ok(()) } else { Err(found) }
}

// 以下读取函数的调用方已保证 bytes.len() >= HEADER_LEN，且所有偏移+宽度 <= 44

#[inline]
fn take4(bytes: &[u8], offset: usize) -> [u8; layout::MARKER_LEN] {
    [
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ]
}

#[inline]
fn read_u32(bytes: &[u8], field: HeaderField) -> u32 {
    debug_assert_eq!(field.width(), 4);
    u32::from_le_bytes(take4(bytes, field.offset()))
}

#[inline]
fn read_u16(bytes: &[u8], field: HeaderField) -> u16 {
    debug_assert_eq!(field.width(), 2);
    let offset = field.offset();
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}
