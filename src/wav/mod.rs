//! WAV文件头解析模块
//!
//! 解码器是纯函数；文件与十六进制文本两个适配器只负责把外部输入变成字节。

mod decoder;
mod file_input;
mod header;
mod hex_input;

pub use decoder::decode;
pub use file_input::{read_file_header, read_header_bytes};
pub use header::{HeaderField, WavHeader};
pub use hex_input::{parse_hex, read_hex_header};
