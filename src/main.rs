//! WAV Header Reader - 主程序入口
//!
//! 纯流程控制器：选择输入来源，调用解码与格式化，统一处理错误和退出码。

use std::io;
use std::process;
use wav_header_reader::{
    error::{ErrorCategory, HeaderError},
    tools::{self, AppConfig, InputSource},
};

/// 错误退出码定义
mod exit_codes {
    /// I/O错误
    pub const IO_ERROR: i32 = 1;
    /// 文件头结构错误（长度不足/标记不匹配）
    pub const STRUCTURE_ERROR: i32 = 2;
    /// 十六进制输入无效
    pub const INPUT_ERROR: i32 = 3;
    /// 严格模式下字段不一致
    pub const CONSISTENCY_ERROR: i32 = 4;
}

fn exit_code_for(category: ErrorCategory) -> i32 {
    match category {
        ErrorCategory::Io => exit_codes::IO_ERROR,
        ErrorCategory::Structure => exit_codes::STRUCTURE_ERROR,
        ErrorCategory::Input => exit_codes::INPUT_ERROR,
        ErrorCategory::Consistency => exit_codes::CONSISTENCY_ERROR,
    }
}

/// 获取错误建议文本
fn get_error_suggestion(error: &HeaderError) -> &'static str {
    match error {
        HeaderError::TooShort { .. } => {
            "规范WAV文件头至少需要44字节（88个十六进制数字） / A canonical WAV header needs 44 bytes (88 hex digits)"
        }
        HeaderError::RiffMismatch { .. } | HeaderError::WaveMismatch { .. } => {
            "输入不是RIFF/WAVE文件 / Input is not a RIFF/WAVE file"
        }
        HeaderError::FmtMismatch { .. } | HeaderError::DataMismatch { .. } => {
            "文件可能带有扩展fmt子块或在data之前有其他块，仅支持规范44字节布局 / Only the canonical 44-byte layout is supported (no extended fmt or extra chunks)"
        }
        HeaderError::MalformedHexInput(_) => {
            "仅输入十六进制数字，可用空格分隔字节 / Enter hex digits only, optionally space-separated"
        }
        HeaderError::IoFailure(_) => {
            "检查文件路径是否正确，文件是否存在且可读 / Check if file path is correct, file exists and is readable"
        }
        HeaderError::Inconsistent(_) => {
            "去掉 --strict 可忽略派生字段不一致 / Drop --strict to accept inconsistent derived fields"
        }
    }
}

/// 错误处理和建议
fn handle_error(error: HeaderError) -> ! {
    eprintln!("[ERROR] 错误 / Error: {error}");
    eprintln!("[INFO] 建议 / Suggestion: {}", get_error_suggestion(&error));

    process::exit(exit_code_for(ErrorCategory::from_header_error(&error)));
}

/// 交互式十六进制输入模式
fn process_interactive_mode(config: &AppConfig) -> Result<(), HeaderError> {
    let stdin = io::stdin();
    let line = tools::prompt_hex_line(&mut stdin.lock(), &mut io::stdout())?;

    let report = tools::process_hex(&line, config)?;
    tools::write_output(
        &tools::render_report(&report, config.format),
        &report.source,
        config,
    )
}

/// 单文件模式
fn process_single_mode(config: &AppConfig, path: &std::path::Path) -> Result<(), HeaderError> {
    let report = tools::process_file(path, config)?;
    tools::write_output(
        &tools::render_report(&report, config.format),
        &report.source,
        config,
    )
}

/// 目录模式：返回第一个失败文件的错误类别
fn process_batch_mode(
    config: &AppConfig,
    dir: &std::path::Path,
) -> Result<Option<ErrorCategory>, HeaderError> {
    let summary = tools::process_directory(dir, config)?;
    if summary.total() > 0 {
        let output = tools::format_batch(&summary, config.format);
        tools::write_output(&output, &dir.display().to_string(), config)?;
    }
    Ok(summary.first_failure())
}

/// 应用程序主逻辑
fn run() -> Result<Option<ErrorCategory>, HeaderError> {
    // 1. 解析命令行参数
    let config = tools::parse_args();

    // 2. 显示启动信息
    tools::show_startup_info(&config);

    // 3. 根据输入来源选择处理方式
    let batch_failure = match config.input_source() {
        InputSource::Interactive => process_interactive_mode(&config).map(|()| None)?,
        InputSource::File(path) => process_single_mode(&config, &path).map(|()| None)?,
        InputSource::Directory(dir) => process_batch_mode(&config, &dir)?,
    };

    tools::show_completion_info(&config);
    Ok(batch_failure)
}

fn main() {
    match run() {
        Ok(None) => {}
        Ok(Some(category)) => {
            eprintln!(
                "[ERROR] 部分文件解析失败 / some files failed: {}",
                category.display_name()
            );
            process::exit(exit_code_for(category));
        }
        Err(error) => handle_error(error),
    }
}
