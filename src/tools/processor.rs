//! 处理流程模块
//!
//! 把输入来源（文件、目录、交互式十六进制）接到解码器上，生成报告并写出。

use super::cli::{AppConfig, OutputFormat};
use super::formatter::{self, FailedEntry, HeaderReport};
use super::scanner;
use super::utils;
use crate::error::{ErrorCategory, HeaderError, HeaderResult};
use crate::wav::{self, WavHeader};
use std::io::{BufRead, Write};
use std::path::Path;

/// 交互式输入在报告中的来源名
pub const HEX_SOURCE_LABEL: &str = "<hex input>";

/// 交互式提示语
pub const HEX_PROMPT: &str = "Enter the WAV file header hexadecimal string: ";

/// 对解码结果应用严格模式并生成报告
///
/// 非严格模式下一致性问题只在 verbose 时记入报告，默认报告与字段列表完全一致。
pub fn build_report(
    source: String,
    header: WavHeader,
    config: &AppConfig,
) -> HeaderResult<HeaderReport> {
    if config.strict {
        header.validate_strict()?;
    }

    let warnings = if config.verbose {
        header.consistency_issues()
    } else {
        Vec::new()
    };

    Ok(HeaderReport {
        source,
        header,
        warnings,
    })
}

/// 处理单个WAV文件
pub fn process_file(path: &Path, config: &AppConfig) -> HeaderResult<HeaderReport> {
    let header = wav::read_file_header(path)?;
    build_report(path.display().to_string(), header, config)
}

/// 处理一段十六进制文本
pub fn process_hex(text: &str, config: &AppConfig) -> HeaderResult<HeaderReport> {
    let header = wav::read_hex_header(text)?;
    build_report(HEX_SOURCE_LABEL.to_string(), header, config)
}

/// 输出提示并读取一行十六进制文本
///
/// 输入流已结束时返回空串，由十六进制解析报告为无效输入。
/// 非UTF-8字节属于输入内容错误（`MalformedHexInput`），只有真正的读失败才是 `IoFailure`。
pub fn prompt_hex_line<R: BufRead, W: Write>(input: &mut R, prompt: &mut W) -> HeaderResult<String> {
    writeln!(prompt, "{HEX_PROMPT}")?;
    prompt.flush()?;

    let mut raw = Vec::new();
    input.read_until(b'\n', &mut raw)?;

    String::from_utf8(raw).map_err(|e| {
        HeaderError::MalformedHexInput(format!(
            "非UTF-8字节 / invalid UTF-8 at byte {}",
            e.utf8_error().valid_up_to()
        ))
    })
}

/// 目录模式下单个文件的结果
#[derive(Debug)]
pub enum BatchOutcome {
    Decoded(HeaderReport),
    Failed {
        entry: FailedEntry,
        category: ErrorCategory,
    },
}

/// 目录模式的处理结果（保持扫描顺序）
#[derive(Debug, Default)]
pub struct BatchSummary {
    pub outcomes: Vec<BatchOutcome>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// 成功解码的报告（扫描顺序）
    pub fn reports(&self) -> Vec<&HeaderReport> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                BatchOutcome::Decoded(report) => Some(report),
                BatchOutcome::Failed { .. } => None,
            })
            .collect()
    }

    /// 失败记录（扫描顺序）
    pub fn failures(&self) -> Vec<&FailedEntry> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                BatchOutcome::Failed { entry, .. } => Some(entry),
                BatchOutcome::Decoded(_) => None,
            })
            .collect()
    }

    /// 第一个失败的错误类别（用于退出码）
    pub fn first_failure(&self) -> Option<ErrorCategory> {
        self.outcomes.iter().find_map(|o| match o {
            BatchOutcome::Failed { category, .. } => Some(*category),
            BatchOutcome::Decoded(_) => None,
        })
    }

    pub fn record_report(&mut self, report: HeaderReport) {
        self.outcomes.push(BatchOutcome::Decoded(report));
    }

    pub fn record_failure(&mut self, path: &Path, error: &HeaderError) {
        self.outcomes.push(BatchOutcome::Failed {
            entry: FailedEntry {
                source: path.display().to_string(),
                error: error.to_string(),
            },
            category: ErrorCategory::from_header_error(error),
        });
    }
}

/// 逐个处理目录中的WAV文件
///
/// 单个文件失败不会中断处理，失败信息记入汇总并输出到stderr。
pub fn process_directory(dir_path: &Path, config: &AppConfig) -> HeaderResult<BatchSummary> {
    let wav_files = scanner::scan_wav_files(dir_path, config.recursive)?;
    scanner::show_scan_results(dir_path, &wav_files, config.verbose);

    let mut summary = BatchSummary::default();

    for (index, wav_file) in wav_files.iter().enumerate() {
        if config.verbose {
            println!(
                "[PROCESSING] [{}/{}] 处理 / Processing: {}",
                index + 1,
                wav_files.len(),
                utils::extract_filename_lossy(wav_file)
            );
        }

        match process_file(wav_file, config) {
            Ok(report) => summary.record_report(report),
            Err(e) => {
                let category = ErrorCategory::from_header_error(&e);
                eprintln!(
                    "[FAIL] [{}/{}] {} - [{}] {e}",
                    index + 1,
                    wav_files.len(),
                    utils::extract_filename_lossy(wav_file),
                    category.display_name()
                );
                summary.record_failure(wav_file, &e);
            }
        }
    }

    Ok(summary)
}

/// 渲染目录模式汇总
pub fn format_batch(summary: &BatchSummary, format: OutputFormat) -> String {
    let reports = summary.reports();
    let failures = summary.failures();

    if format == OutputFormat::Json {
        return formatter::render_batch_json(&reports, &failures);
    }

    let mut output = String::new();
    for outcome in &summary.outcomes {
        match outcome {
            BatchOutcome::Decoded(report) => {
                output.push_str(&format!("=== {} ===\n", report.source));
                output.push_str(&formatter::render_report(report, format));
            }
            BatchOutcome::Failed { entry, .. } => {
                output.push_str(&format!("=== {} ===\n", entry.source));
                output.push_str(&format!("Failed: {}\n", entry.error));
            }
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Total: {}  Decoded: {}  Failed: {}\n",
        summary.total(),
        reports.len(),
        failures.len()
    ));

    output
}

/// 写出结果：指定了输出文件时写入文件，否则打印到stdout
///
/// 文本和表格报告写入文件时带日期头部；JSON保持原样以便机器读取。
pub fn write_output(output: &str, source: &str, config: &AppConfig) -> HeaderResult<()> {
    match &config.output_path {
        Some(output_path) => {
            let mut content = match config.format {
                OutputFormat::Json => String::new(),
                _ => formatter::create_output_header(source),
            };
            content.push_str(output);
            std::fs::write(output_path, content)?;
            if config.verbose {
                println!("[INFO] 结果已保存到 / saved to: {}", output_path.display());
            }
        }
        None => print!("{output}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn config(strict: bool) -> AppConfig {
        AppConfig {
            input_path: None,
            verbose: false,
            output_path: None,
            format: OutputFormat::Text,
            strict,
            recursive: false,
        }
    }

    fn verbose_config() -> AppConfig {
        AppConfig {
            verbose: true,
            ..config(false)
        }
    }

    // blockAlign 声明为 3，与 1*16/8=2 不一致
    const ODD_ALIGN_HEX: &str = "524946462400000057415645666D7420100000000100010044AC000088580100030010006461746100000000";

    #[test]
    fn test_prompt_reads_one_line() {
        let mut input = Cursor::new(b"52 49\nsecond line\n".to_vec());
        let mut prompt = Vec::new();
        let line = prompt_hex_line(&mut input, &mut prompt).unwrap();
        assert_eq!(line, "52 49\n");
        assert!(String::from_utf8(prompt).unwrap().starts_with(HEX_PROMPT));
    }

    #[test]
    fn test_prompt_non_utf8_is_malformed_input() {
        let mut input = Cursor::new(vec![0x35, 0x32, 0xFF, 0xFE, b'\n']);
        let mut prompt = Vec::new();
        let err = prompt_hex_line(&mut input, &mut prompt).unwrap_err();
        assert!(matches!(err, HeaderError::MalformedHexInput(_)));
        assert_eq!(ErrorCategory::from_header_error(&err), ErrorCategory::Input);
    }

    #[test]
    fn test_prompt_at_eof_gives_malformed_input() {
        let mut input = Cursor::new(Vec::new());
        let mut prompt = Vec::new();
        let line = prompt_hex_line(&mut input, &mut prompt).unwrap();
        assert!(matches!(
            process_hex(&line, &config(false)),
            Err(HeaderError::MalformedHexInput(_))
        ));
    }

    #[test]
    fn test_verbose_lenient_mode_keeps_warnings() {
        let report = process_hex(ODD_ALIGN_HEX, &verbose_config()).unwrap();
        assert_eq!(report.source, HEX_SOURCE_LABEL);
        assert_eq!(report.header.block_align(), 3);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn test_default_report_has_no_warning_lines() {
        // audioFormat=3（IEEE float），默认模式下照常解码且报告只含字段
        let float_hex = ODD_ALIGN_HEX.replacen("01000100", "03000100", 1);
        let report = process_hex(&float_hex, &config(false)).unwrap();
        assert_eq!(report.header.audio_format(), 3);
        assert!(report.warnings.is_empty());

        for format in [OutputFormat::Text, OutputFormat::Table] {
            let text = formatter::render_report(&report, format);
            assert!(!text.contains("WARNING"), "{format:?}: {text}");
        }

        let verbose = process_hex(&float_hex, &verbose_config()).unwrap();
        let text = formatter::render_report(&verbose, OutputFormat::Text);
        assert!(text.contains("[WARNING] audioFormat=3"));
    }

    #[test]
    fn test_strict_mode_rejects_inconsistency() {
        assert!(matches!(
            process_hex(ODD_ALIGN_HEX, &config(true)),
            Err(HeaderError::Inconsistent(_))
        ));
    }

    #[test]
    fn test_format_batch_counts() {
        let mut summary = BatchSummary::default();
        summary.record_report(process_hex(ODD_ALIGN_HEX, &config(false)).unwrap());
        summary.record_failure(Path::new("bad.wav"), &HeaderError::TooShort { actual: 10 });

        let text = format_batch(&summary, OutputFormat::Text);
        assert!(text.contains("=== bad.wav ==="));
        assert!(text.ends_with("Total: 2  Decoded: 1  Failed: 1\n"));
        assert_eq!(summary.first_failure(), Some(ErrorCategory::Structure));
    }

    #[test]
    fn test_format_batch_keeps_scan_order() {
        let mut summary = BatchSummary::default();
        summary.record_failure(Path::new("a_bad.wav"), &HeaderError::TooShort { actual: 4 });
        summary.record_report(process_hex(ODD_ALIGN_HEX, &config(false)).unwrap());
        summary.record_failure(
            Path::new("c_bad.wav"),
            &HeaderError::RiffMismatch { found: *b"RIFX" },
        );

        let text = format_batch(&summary, OutputFormat::Text);
        let a = text.find("=== a_bad.wav ===").unwrap();
        let b = text.find(&format!("=== {HEX_SOURCE_LABEL} ===")).unwrap();
        let c = text.find("=== c_bad.wav ===").unwrap();
        assert!(a < b && b < c);
        assert_eq!(summary.first_failure(), Some(ErrorCategory::Structure));
    }
}
