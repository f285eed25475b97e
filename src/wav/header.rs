//! WAV文件头记录
//!
//! 解码结果的不可变值类型，以及九个数值字段的统一描述表。

use crate::error::{HeaderError, HeaderResult};
use crate::tools::constants::pcm;
use serde::Serialize;

/// 文件头数值字段（按报告顺序排列）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderField {
    ChunkSize,
    Subchunk1Size,
    AudioFormat,
    NumChannels,
    SampleRate,
    ByteRate,
    BlockAlign,
    BitsPerSample,
    Subchunk2Size,
}

impl HeaderField {
    /// 报告顺序下的全部字段
    pub const ALL: [HeaderField; 9] = [
        HeaderField::ChunkSize,
        HeaderField::Subchunk1Size,
        HeaderField::AudioFormat,
        HeaderField::NumChannels,
        HeaderField::SampleRate,
        HeaderField::ByteRate,
        HeaderField::BlockAlign,
        HeaderField::BitsPerSample,
        HeaderField::Subchunk2Size,
    ];

    /// 字段在文件头中的字节偏移
    pub const fn offset(self) -> usize {
        match self {
            HeaderField::ChunkSize => 4,
            HeaderField::Subchunk1Size => 16,
            HeaderField::AudioFormat => 20,
            HeaderField::NumChannels => 22,
            HeaderField::SampleRate => 24,
            HeaderField::ByteRate => 28,
            HeaderField::BlockAlign => 32,
            HeaderField::BitsPerSample => 34,
            HeaderField::Subchunk2Size => 40,
        }
    }

    /// 字段宽度（2或4字节）
    pub const fn width(self) -> usize {
        match self {
            HeaderField::AudioFormat
            | HeaderField::NumChannels
            | HeaderField::BlockAlign
            | HeaderField::BitsPerSample => 2,
            _ => 4,
        }
    }

    /// 报告中使用的字段名
    pub const fn label(self) -> &'static str {
        match self {
            HeaderField::ChunkSize => "Chunk Size",
            HeaderField::Subchunk1Size => "Subchunk 1 Size",
            HeaderField::AudioFormat => "Audio Format",
            HeaderField::NumChannels => "Number Of Channels",
            HeaderField::SampleRate => "Sample Rate",
            HeaderField::ByteRate => "Byte Rate",
            HeaderField::BlockAlign => "Block Align",
            HeaderField::BitsPerSample => "Bits Per Sample",
            HeaderField::Subchunk2Size => "Subchunk 2 Size",
        }
    }
}

/// 解码后的规范WAV文件头
///
/// 只能由 [`decode`](crate::wav::decode) 成功解码产生，构造后不可变。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WavHeader {
    chunk_size: u32,
    subchunk1_size: u32,
    audio_format: u16,
    num_channels: u16,
    sample_rate: u32,
    byte_rate: u32,
    block_align: u16,
    bits_per_sample: u16,
    subchunk2_size: u32,
}

impl WavHeader {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        chunk_size: u32,
        subchunk1_size: u32,
        audio_format: u16,
        num_channels: u16,
        sample_rate: u32,
        byte_rate: u32,
        block_align: u16,
        bits_per_sample: u16,
        subchunk2_size: u32,
    ) -> Self {
        Self {
            chunk_size,
            subchunk1_size,
            audio_format,
            num_channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
            subchunk2_size,
        }
    }

    pub fn chunk_size(&self) -> u32 {
        self.chunk_size
    }

    pub fn subchunk1_size(&self) -> u32 {
        self.subchunk1_size
    }

    /// 1 = PCM
    pub fn audio_format(&self) -> u16 {
        self.audio_format
    }

    pub fn num_channels(&self) -> u16 {
        self.num_channels
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn byte_rate(&self) -> u32 {
        self.byte_rate
    }

    pub fn block_align(&self) -> u16 {
        self.block_align
    }

    pub fn bits_per_sample(&self) -> u16 {
        self.bits_per_sample
    }

    /// data子块声明的字节数
    pub fn subchunk2_size(&self) -> u32 {
        self.subchunk2_size
    }

    /// 按字段取值（统一扩展为u32）
    pub fn value(&self, field: HeaderField) -> u32 {
        match field {
            HeaderField::ChunkSize => self.chunk_size,
            HeaderField::Subchunk1Size => self.subchunk1_size,
            HeaderField::AudioFormat => self.audio_format as u32,
            HeaderField::NumChannels => self.num_channels as u32,
            HeaderField::SampleRate => self.sample_rate,
            HeaderField::ByteRate => self.byte_rate,
            HeaderField::BlockAlign => self.block_align as u32,
            HeaderField::BitsPerSample => self.bits_per_sample as u32,
            HeaderField::Subchunk2Size => self.subchunk2_size,
        }
    }

    /// 字段在文件中的原始字节（小端，按存储顺序）
    pub fn raw_bytes(&self, field: HeaderField) -> Vec<u8> {
        let value = self.value(field);
        value.to_le_bytes()[..field.width()].to_vec()
    }

    /// 按存储顺序的大写十六进制文本，例如 ChunkSize=36 → "24000000"
    pub fn raw_hex(&self, field: HeaderField) -> String {
        self.raw_bytes(field)
            .iter()
            .map(|b| format!("{b:02X}"))
            .collect()
    }

    /// 是否为未压缩PCM
    pub fn is_pcm(&self) -> bool {
        self.audio_format == pcm::AUDIO_FORMAT_PCM
    }

    /// 按采样率、声道数、位深计算的期望字节率
    pub fn expected_byte_rate(&self) -> u64 {
        self.sample_rate as u64 * self.expected_block_align()
    }

    /// 按声道数、位深计算的期望块对齐
    ///
    /// 每个样本占用的字节数向上取整（12位 → 2字节，20位 → 3字节），
    /// 与WAV写入端按整字节存放非8倍数位深的做法一致。
    pub fn expected_block_align(&self) -> u64 {
        self.num_channels as u64 * (self.bits_per_sample as u64).div_ceil(8)
    }

    /// 列出派生字段与声明字段的不一致之处
    ///
    /// 解码本身从不因这些问题失败，结果仅用于提示或严格模式。
    pub fn consistency_issues(&self) -> Vec<String> {
        let mut issues = Vec::new();

        if !self.is_pcm() {
            issues.push(format!(
                "audioFormat={} (非PCM / not PCM, expected {})",
                self.audio_format,
                pcm::AUDIO_FORMAT_PCM
            ));
        }
        if self.subchunk1_size != pcm::FMT_CHUNK_SIZE {
            issues.push(format!(
                "subchunk1Size={} (expected {} for PCM)",
                self.subchunk1_size,
                pcm::FMT_CHUNK_SIZE
            ));
        }
        if self.block_align as u64 != self.expected_block_align() {
            issues.push(format!(
                "blockAlign={} != numChannels*ceil(bitsPerSample/8)={}",
                self.block_align,
                self.expected_block_align()
            ));
        }
        if self.byte_rate as u64 != self.expected_byte_rate() {
            issues.push(format!(
                "byteRate={} != sampleRate*numChannels*ceil(bitsPerSample/8)={}",
                self.byte_rate,
                self.expected_byte_rate()
            ));
        }

        issues
    }

    /// 严格校验：存在任何不一致即返回 `Inconsistent`
    pub fn validate_strict(&self) -> HeaderResult<()> {
        let issues = self.consistency_issues();
        if issues.is_empty() {
            Ok(())
        } else {
            Err(HeaderError::Inconsistent(issues.join("; ")))
        }
    }
}
