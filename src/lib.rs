//! WAV Header Reader
//!
//! 规范PCM WAV（RIFF/WAVE）44字节文件头解析工具。
//!
//! ## 核心特性
//! - 固定偏移的 "RIFF" / "WAVE" / "fmt " / "data" 标记校验，错误精确到具体标记
//! - 小端序字段解码，与主机字节序无关
//! - 文件与十六进制文本两种输入适配器
//! - 文本 / 表格 / JSON 三种报告格式

pub mod error;
pub mod tools;
pub mod wav;

// 重新导出核心类型
pub use error::{ErrorCategory, HeaderError, HeaderResult};
pub use tools::formatter::render;
pub use wav::{HeaderField, WavHeader, decode, read_file_header, read_hex_header};
