//! 工具层集成测试
//!
//! 测试文件处理、目录扫描、报告格式化和结果写出的集成功能。

use std::fs;
use std::path::{Path, PathBuf};
use wav_header_reader::error::ErrorCategory;
use wav_header_reader::tools::{self, AppConfig, InputSource, OutputFormat};
use wav_header_reader::wav;

const STEREO_HEX: &str = "52494646 24000000 57415645 666D7420 10000000 0100 0200 \
                          44AC0000 10B10200 0400 1000 64617461 00000000";

fn base_config() -> AppConfig {
    AppConfig {
        input_path: None,
        verbose: false,
        output_path: None,
        format: OutputFormat::Text,
        strict: false,
        recursive: false,
    }
}

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("wav_header_reader_tools_{name}"));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_stereo_wav(path: &Path) {
    let mut bytes = wav::parse_hex(STEREO_HEX).unwrap();
    // 附带少量样本数据，解码只看前44字节
    bytes.extend_from_slice(&[0u8; 16]);
    fs::write(path, bytes).unwrap();
}

// ============================================================================
// 单文件处理
// ============================================================================

#[test]
fn test_process_file_report() {
    let dir = scratch_dir("single");
    let path = dir.join("stereo.wav");
    write_stereo_wav(&path);

    let config = AppConfig {
        input_path: Some(path.clone()),
        ..base_config()
    };
    assert_eq!(config.input_source(), InputSource::File(path.clone()));

    let report = tools::process_file(&path, &config).unwrap();
    assert_eq!(report.source, path.display().to_string());
    assert_eq!(report.header.num_channels(), 2);
    assert!(report.warnings.is_empty());

    let text = tools::render_report(&report, OutputFormat::Text);
    assert!(text.starts_with("Chunk Descriptor Id: \"RIFF\".\n"));
    assert!(text.contains("Number Of Channels: 2\n"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_process_missing_file_is_io() {
    let err = tools::process_file(Path::new("/nonexistent/a.wav"), &base_config()).unwrap_err();
    assert_eq!(ErrorCategory::from_header_error(&err), ErrorCategory::Io);
}

// ============================================================================
// 目录模式
// ============================================================================

#[test]
fn test_process_directory_mixed() {
    let dir = scratch_dir("batch");
    write_stereo_wav(&dir.join("a_good.wav"));
    fs::write(dir.join("b_short.wav"), b"RIFF").unwrap();
    fs::write(dir.join("ignored.txt"), b"not audio").unwrap();

    let config = AppConfig {
        input_path: Some(dir.clone()),
        ..base_config()
    };
    assert_eq!(config.input_source(), InputSource::Directory(dir.clone()));

    let summary = tools::process_directory(&dir, &config).unwrap();
    assert_eq!(summary.total(), 2);
    assert_eq!(summary.reports().len(), 1);
    assert_eq!(summary.failures().len(), 1);
    assert_eq!(summary.first_failure(), Some(ErrorCategory::Structure));

    let text = tools::format_batch(&summary, OutputFormat::Text);
    // 成功与失败按扫描顺序交错输出
    let good = text.find("a_good.wav ===").unwrap();
    let short = text.find("b_short.wav ===").unwrap();
    assert!(good < short);
    assert!(text[short..].contains("Failed: "));

    let json: serde_json::Value =
        serde_json::from_str(&tools::format_batch(&summary, OutputFormat::Json)).unwrap();
    assert_eq!(json["reports"].as_array().unwrap().len(), 1);
    assert_eq!(json["failures"].as_array().unwrap().len(), 1);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_empty_directory_has_no_failures() {
    let dir = scratch_dir("empty");
    let summary = tools::process_directory(&dir, &base_config()).unwrap();
    assert_eq!(summary.total(), 0);
    assert_eq!(summary.first_failure(), None);
    let _ = fs::remove_dir_all(&dir);
}

// ============================================================================
// 格式化与写出
// ============================================================================

#[test]
fn test_table_and_json_formats() {
    let report = tools::process_hex(STEREO_HEX, &base_config()).unwrap();

    let table = tools::render_report(&report, OutputFormat::Table);
    assert!(table.contains("0x44AC0000"));
    assert!(table.contains("176400"));

    let json: serde_json::Value =
        serde_json::from_str(&tools::render_report(&report, OutputFormat::Json)).unwrap();
    assert_eq!(json["source"], "<hex input>");
    assert_eq!(json["header"]["byte_rate"], 176400);
}

#[test]
fn test_write_output_to_file_has_header() {
    let dir = scratch_dir("output");
    let out = dir.join("report.txt");
    let config = AppConfig {
        output_path: Some(out.clone()),
        ..base_config()
    };

    let report = tools::process_hex(STEREO_HEX, &config).unwrap();
    let body = tools::render(&report.header);
    tools::write_output(&body, &report.source, &config).unwrap();

    let written = fs::read_to_string(&out).unwrap();
    assert!(written.starts_with("WAV Header Reader v"));
    assert!(written.contains("log date: "));
    assert!(written.contains("Header of: <hex input>\n"));
    assert!(written.ends_with(&body));

    let _ = fs::remove_dir_all(&dir);
}
