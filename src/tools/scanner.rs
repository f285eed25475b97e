//! 文件扫描模块
//!
//! 目录模式下收集其中的WAV文件。

use super::constants::defaults::WAV_EXTENSIONS;
use super::utils;
use crate::error::{HeaderError, HeaderResult};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 扫描目录中的WAV文件（按路径排序）
///
/// `recursive` 为 false 时只看目录本层。无法访问的条目被跳过。
pub fn scan_wav_files(dir_path: &Path, recursive: bool) -> HeaderResult<Vec<PathBuf>> {
    if !dir_path.exists() {
        return Err(HeaderError::IoFailure(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("目录不存在 / directory not found: {}", dir_path.display()),
        )));
    }

    if !dir_path.is_dir() {
        return Err(HeaderError::IoFailure(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("路径不是目录 / not a directory: {}", dir_path.display()),
        )));
    }

    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut wav_files: Vec<PathBuf> = WalkDir::new(dir_path)
        .max_depth(max_depth)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|path| is_wav_path(path))
        .collect();

    wav_files.sort();

    Ok(wav_files)
}

/// 扩展名是否为WAV（不区分大小写）
pub fn is_wav_path(path: &Path) -> bool {
    let ext = utils::extract_extension_lowercase(path);
    WAV_EXTENSIONS.contains(&ext.as_str())
}

/// 显示文件扫描结果
pub fn show_scan_results(dir_path: &Path, wav_files: &[PathBuf], verbose: bool) {
    if wav_files.is_empty() {
        println!(
            "[WARNING] 在目录 {} 中没有找到WAV文件 / no WAV files found",
            dir_path.display()
        );
        return;
    }

    if verbose {
        println!("[INFO] 找到 {} 个WAV文件 / found WAV files", wav_files.len());
        for (i, file) in wav_files.iter().enumerate() {
            println!("   {}. {}", i + 1, utils::extract_filename_lossy(file));
        }
        println!();
    }
}
