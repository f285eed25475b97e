//! 常量和默认配置集中管理
//!
//! 规范44字节WAV文件头的全部偏移、宽度和标记集中定义，避免在解码器与格式化器之间重复。

/// 规范WAV文件头布局
pub mod layout {
    /// 规范文件头长度（字节）
    pub const HEADER_LEN: usize = 44;

    /// 标记字段宽度
    pub const MARKER_LEN: usize = 4;

    /// "RIFF" 块标识，偏移0
    pub const RIFF_OFFSET: usize = 0;
    pub const RIFF_MARKER: &[u8; MARKER_LEN] = b"RIFF";

    /// "WAVE" 格式标识，偏移8
    pub const WAVE_OFFSET: usize = 8;
    pub const WAVE_MARKER: &[u8; MARKER_LEN] = b"WAVE";

    /// "fmt " 子块标识，偏移12
    pub const FMT_OFFSET: usize = 12;
    pub const FMT_MARKER: &[u8; MARKER_LEN] = b"fmt ";

    /// "data" 子块标识，偏移36
    pub const DATA_OFFSET: usize = 36;
    pub const DATA_MARKER: &[u8; MARKER_LEN] = b"data";
}

/// PCM格式常量
pub mod pcm {
    /// audioFormat == 1 表示未压缩PCM
    pub const AUDIO_FORMAT_PCM: u16 = 1;

    /// PCM的fmt子块长度
    pub const FMT_CHUNK_SIZE: u32 = 16;
}

/// 默认配置值
pub mod defaults {
    /// 文件读取上限（字节）
    ///
    /// 仅前44字节在结构上是必需的，多读的部分留作余量。
    pub const HEADER_READ_LIMIT: u64 = 128;

    /// 目录模式下识别的文件扩展名
    pub const WAV_EXTENSIONS: &[&str] = &["wav", "wave"];
}
