//! 输出格式化模块
//!
//! 将解码后的文件头渲染为文本、表格或JSON。渲染本身是纯函数，写出由调用方负责。

use super::cli::OutputFormat;
use crate::wav::{HeaderField, WavHeader};
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table, presets::UTF8_FULL};
use serde::Serialize;

/// 应用程序版本信息
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 单个输入的解析报告
#[derive(Debug, Clone, Serialize)]
pub struct HeaderReport {
    /// 输入来源（文件路径或 "<hex input>"）
    pub source: String,
    pub header: WavHeader,
    /// 非严格模式下检出的一致性问题（仅 verbose 时填充）
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// 目录模式下的失败记录
#[derive(Debug, Clone, Serialize)]
pub struct FailedEntry {
    pub source: String,
    pub error: String,
}

/// 渲染逐字段文本报告
///
/// 每个字段两行：存储顺序的原始十六进制，以及十进制值。
pub fn render(header: &WavHeader) -> String {
    let mut output = String::new();

    output.push_str("Chunk Descriptor Id: \"RIFF\".\n");
    output.push_str("Format: \"WAVE\".\n");

    for field in HeaderField::ALL {
        if field == HeaderField::Subchunk1Size {
            output.push_str("\"fmt \" Subchunk:\n");
        }
        if field == HeaderField::Subchunk2Size {
            output.push_str("\"data\" Subchunk:\n");
        }
        output.push_str(&format!(
            "{} is little endian 0x{}\n",
            field.label(),
            header.raw_hex(field)
        ));
        output.push_str(&format!("{}: {}\n", field.label(), header.value(field)));
    }

    output
}

/// 渲染表格报告（Field / Offset / Raw / Value）
pub fn render_table(header: &WavHeader) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Field / 字段", "Offset", "Raw (LE)", "Value / 值"]);

    for field in HeaderField::ALL {
        table.add_row(vec![
            Cell::new(field.label()),
            Cell::new(field.offset()).set_alignment(CellAlignment::Right),
            Cell::new(format!("0x{}", header.raw_hex(field))),
            Cell::new(header.value(field)).set_alignment(CellAlignment::Right),
        ]);
    }

    table.to_string()
}

/// 渲染JSON报告
pub fn render_json(report: &HeaderReport) -> String {
    serde_json::to_string_pretty(report).unwrap_or_default()
}

/// 按配置格式渲染单个报告
pub fn render_report(report: &HeaderReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let mut output = render_json(report);
            output.push('\n');
            output
        }
        OutputFormat::Table => {
            let mut output = render_table(&report.header);
            output.push('\n');
            append_warnings(&mut output, &report.warnings);
            output
        }
        OutputFormat::Text => {
            let mut output = render(&report.header);
            append_warnings(&mut output, &report.warnings);
            output
        }
    }
}

/// 渲染目录模式的JSON汇总
pub fn render_batch_json(reports: &[&HeaderReport], failures: &[&FailedEntry]) -> String {
    #[derive(Serialize)]
    struct BatchJson<'a> {
        reports: &'a [&'a HeaderReport],
        failures: &'a [&'a FailedEntry],
    }

    let mut output = serde_json::to_string_pretty(&BatchJson { reports, failures })
        .unwrap_or_default();
    output.push('\n');
    output
}

fn append_warnings(output: &mut String, warnings: &[String]) {
    for warning in warnings {
        output.push_str(&format!("[WARNING] {warning}\n"));
    }
}

/// 创建输出文件头部信息
pub fn create_output_header(source: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("WAV Header Reader v{VERSION}\n"));
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    output.push_str(&format!("log date: {now}\n"));
    output.push_str(&format!("Header of: {source}\n"));
    output.push_str(
        "--------------------------------------------------------------------------------\n",
    );

    output
}
