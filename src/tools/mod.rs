//! 工具模块集合
//!
//! 包含CLI、文件扫描、格式化等工具模块，支持main.rs的流程控制。

pub mod cli;
pub mod constants;
pub mod formatter;
pub mod processor;
pub mod scanner;
pub mod utils;

// 重新导出主要的公共接口
pub use cli::{
    AppConfig, InputSource, OutputFormat, parse_args, show_completion_info, show_startup_info,
};
pub use formatter::{
    FailedEntry, HeaderReport, create_output_header, render, render_json, render_report,
    render_table,
};
pub use processor::{
    BatchOutcome, BatchSummary, format_batch, process_directory, process_file, process_hex,
    prompt_hex_line, write_output,
};
pub use scanner::scan_wav_files;
