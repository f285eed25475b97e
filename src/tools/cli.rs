//! 命令行接口模块
//!
//! 负责命令行参数解析、配置管理和程序信息展示。

use clap::{Arg, ArgMatches, Command};
use std::path::PathBuf;

/// 应用程序版本信息
const VERSION: &str = env!("CARGO_PKG_VERSION");
const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// 报告输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// 逐字段的文本报告
    #[default]
    Text,
    /// comfy-table 表格
    Table,
    /// JSON（便于脚本处理）
    Json,
}

impl OutputFormat {
    fn from_arg(value: &str) -> Self {
        match value {
            "table" => OutputFormat::Table,
            "json" => OutputFormat::Json,
            _ => OutputFormat::Text,
        }
    }
}

/// 输入来源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// 未指定路径：交互式读取一行十六进制文本
    Interactive,
    /// 单个WAV文件
    File(PathBuf),
    /// 目录：扫描其中的WAV文件
    Directory(PathBuf),
}

/// 应用程序配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// 输入文件或目录路径；None 表示交互式十六进制输入
    pub input_path: Option<PathBuf>,

    /// 是否显示详细信息
    pub verbose: bool,

    /// 输出文件路径（可选）
    pub output_path: Option<PathBuf>,

    /// 报告格式
    pub format: OutputFormat,

    /// 严格模式：派生字段不一致视为错误
    pub strict: bool,

    /// 目录模式下是否递归子目录
    pub recursive: bool,
}

impl AppConfig {
    /// 根据路径类型判断输入来源
    pub fn input_source(&self) -> InputSource {
        match &self.input_path {
            None => InputSource::Interactive,
            Some(path) if path.is_dir() => InputSource::Directory(path.clone()),
            Some(path) => InputSource::File(path.clone()),
        }
    }
}

/// 构建命令行定义
pub fn build_command() -> Command {
    Command::new("wav-header-reader")
        .version(VERSION)
        .about(DESCRIPTION)
        .author("MacinMeter Team")
        .arg(
            Arg::new("INPUT")
                .help("WAV文件或目录路径。如果不指定，将提示输入十六进制文件头 / WAV file or directory; prompts for a hex header when omitted")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("显示详细处理信息")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("输出结果到文件")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("报告格式 / report format")
                .value_parser(["text", "table", "json"])
                .default_value("text"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .help("字节率/块对齐/PCM格式不一致时报错 / fail on inconsistent derived fields")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("recursive")
                .long("recursive")
                .short('r')
                .help("目录模式下递归扫描子目录")
                .action(clap::ArgAction::SetTrue),
        )
}

/// 从解析结果创建配置
pub fn config_from_matches(matches: &ArgMatches) -> AppConfig {
    AppConfig {
        input_path: matches.get_one::<String>("INPUT").map(PathBuf::from),
        verbose: matches.get_flag("verbose"),
        output_path: matches.get_one::<String>("output").map(PathBuf::from),
        format: matches
            .get_one::<String>("format")
            .map(|s| OutputFormat::from_arg(s))
            .unwrap_or_default(),
        strict: matches.get_flag("strict"),
        recursive: matches.get_flag("recursive"),
    }
}

/// 解析命令行参数并创建配置
pub fn parse_args() -> AppConfig {
    config_from_matches(&build_command().get_matches())
}

/// 显示程序启动信息
pub fn show_startup_info(config: &AppConfig) {
    if config.verbose {
        println!("[INFO] WAV Header Reader v{VERSION} 启动 / starting");
        println!("[INFO] {DESCRIPTION}");
        match config.input_source() {
            InputSource::Interactive => {
                println!("[INFO] 输入来源: 交互式十六进制 / input: interactive hex")
            }
            InputSource::File(path) => {
                println!("[INFO] 输入文件 / input file: {}", path.display())
            }
            InputSource::Directory(path) => {
                println!("[INFO] 扫描目录 / scanning directory: {}", path.display())
            }
        }
        if config.strict {
            println!("[INFO] 严格模式已启用 / strict mode enabled");
        }
        println!();
    }
}

/// 显示程序完成信息
pub fn show_completion_info(config: &AppConfig) {
    if config.verbose {
        println!("[INFO] 处理完成 / done");
    }
}
