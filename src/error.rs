//! 统一错误处理框架
//!
//! WAV文件头解析过程中所有错误类型的定义。每个标记错误都携带实际读到的4个字节，
//! 便于诊断"不是RIFF"、"不是WAVE"与"非规范fmt/data布局"之间的区别。

use std::fmt;
use std::io;

/// 文件头解析相关的统一错误类型
#[derive(Debug)]
pub enum HeaderError {
    /// 输入字节数不足规范文件头长度（44字节）
    TooShort { actual: usize },

    /// 偏移0处不是 "RIFF"
    RiffMismatch { found: [u8; 4] },

    /// 偏移8处不是 "WAVE"
    WaveMismatch { found: [u8; 4] },

    /// 偏移12处不是 "fmt "
    FmtMismatch { found: [u8; 4] },

    /// 偏移36处不是 "data"
    DataMismatch { found: [u8; 4] },

    /// 十六进制文本包含非法字符或长度为奇数
    MalformedHexInput(String),

    /// 文件打开/读取失败
    IoFailure(io::Error),

    /// 派生字段不一致（仅严格模式产生）
    Inconsistent(String),
}

/// 将4字节标记渲染为可读文本（不可打印字节以 `\xNN` 表示）
fn marker_text(bytes: &[u8; 4]) -> String {
    bytes.iter().flat_map(|b| b.escape_ascii()).map(char::from).collect()
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderError::TooShort { actual } => write!(
                f,
                "文件头长度不足 / header too short: {actual} bytes, canonical WAV header needs {}",
                crate::tools::constants::layout::HEADER_LEN
            ),
            HeaderError::RiffMismatch { found } => write!(
                f,
                "\"RIFF\" 块描述符不符合规范WAV格式 / chunk id is \"{}\", expected \"RIFF\"",
                marker_text(found)
            ),
            HeaderError::WaveMismatch { found } => write!(
                f,
                "\"RIFF\" 块格式不符合规范WAV格式 / format is \"{}\", expected \"WAVE\"",
                marker_text(found)
            ),
            HeaderError::FmtMismatch { found } => write!(
                f,
                "\"fmt\" 子块不符合规范WAV格式 / subchunk1 id is \"{}\", expected \"fmt \"",
                marker_text(found)
            ),
            HeaderError::DataMismatch { found } => write!(
                f,
                "\"data\" 子块不符合规范WAV格式 / subchunk2 id is \"{}\", expected \"data\"",
                marker_text(found)
            ),
            HeaderError::MalformedHexInput(msg) => {
                write!(f, "十六进制输入无效 / malformed hex input: {msg}")
            }
            HeaderError::IoFailure(err) => write!(f, "文件I/O错误 / I/O failure: {err}"),
            HeaderError::Inconsistent(msg) => {
                write!(f, "文件头字段不一致 / inconsistent header: {msg}")
            }
        }
    }
}

impl std::error::Error for HeaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HeaderError::IoFailure(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for HeaderError {
    fn from(err: io::Error) -> Self {
        HeaderError::IoFailure(err)
    }
}

/// 文件头解析操作的标准Result类型
pub type HeaderResult<T> = Result<T, HeaderError>;

// ==================== 错误分类系统 ====================
// 用于退出码映射和目录模式下的失败统计

/// 错误类别枚举
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum ErrorCategory {
    /// 结构错误（长度不足、标记不匹配）
    Structure,
    /// 输入错误（十六进制文本无效）
    Input,
    /// I/O相关错误（文件不存在、权限不足等）
    Io,
    /// 严格模式下的字段一致性错误
    Consistency,
}

impl ErrorCategory {
    /// 从HeaderError提取错误类别
    pub fn from_header_error(e: &HeaderError) -> Self {
        match e {
            HeaderError::TooShort { .. }
            | HeaderError::RiffMismatch { .. }
            | HeaderError::WaveMismatch { .. }
            | HeaderError::FmtMismatch { .. }
            | HeaderError::DataMismatch { .. } => Self::Structure,
            HeaderError::MalformedHexInput(_) => Self::Input,
            HeaderError::IoFailure(_) => Self::Io,
            HeaderError::Inconsistent(_) => Self::Consistency,
        }
    }

    /// 获取错误类别的显示名称
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Structure => "结构错误 / structure",
            Self::Input => "输入错误 / input",
            Self::Io => "I/O错误 / io",
            Self::Consistency => "一致性错误 / consistency",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_text_escapes_binary() {
        assert_eq!(marker_text(b"RIFF"), "RIFF");
        assert_eq!(marker_text(&[0x58, 0x00, b'F', b'F']), "X\\x00FF");
    }

    #[test]
    fn test_display_names_marker() {
        let err = HeaderError::WaveMismatch { found: *b"AVI " };
        let msg = err.to_string();
        assert!(msg.contains("AVI "));
        assert!(msg.contains("WAVE"));
    }

    #[test]
    fn test_category_mapping() {
        let io = HeaderError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        assert_eq!(ErrorCategory::from_header_error(&io), ErrorCategory::Io);
        assert!(std::error::Error::source(&io).is_some());

        let short = HeaderError::TooShort { actual: 3 };
        assert_eq!(
            ErrorCategory::from_header_error(&short),
            ErrorCategory::Structure
        );

        let hex = HeaderError::MalformedHexInput("odd".to_string());
        assert_eq!(ErrorCategory::from_header_error(&hex), ErrorCategory::Input);
    }
}
