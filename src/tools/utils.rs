//! 工具函数模块
//!
//! 文件路径处理等通用工具函数。

use std::path::Path;

/// 提取文件名（返回String，用于日志显示）
#[inline]
pub fn extract_filename_lossy(path: &Path) -> String {
    path.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// 提取小写扩展名，没有扩展名时返回空串
#[inline]
pub fn extract_extension_lowercase(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_helpers() {
        let path = Path::new("/music/Track 01.WAV");
        assert_eq!(extract_filename_lossy(path), "Track 01.WAV");
        assert_eq!(extract_extension_lowercase(path), "wav");
        assert_eq!(extract_extension_lowercase(Path::new("README")), "");
    }
}
