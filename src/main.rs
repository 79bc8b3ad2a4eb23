//! rsindexer 命令行入口
//! 用法：rsindexer <PATH> [--rules <RULES_JSON>] [--format text|json] [-v]

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use rsindexer::{ConfigManager, FileProcessor, GlobalConfig, OutputFormat, ReportFormatter};

#[derive(Parser, Debug)]
#[command(name = "rsindexer", version, about = "Apply word analysis rules to a text file")]
struct Cli {
    /// 待分析的文本文件
    path: Option<PathBuf>,

    /// JSON 规则文件，缺省使用内置规则
    #[arg(short = 'r', long = "rules")]
    rules: Option<PathBuf>,

    /// 输出格式：text / json
    #[arg(short = 'F', long = "format", default_value = "text")]
    format: OutputFormat,

    /// 输出调试日志
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// 一次执行的结果：退出码 + 需要写到 stdout 的内容
#[derive(Debug)]
struct Outcome {
    code: u8,
    output: String,
}

impl Outcome {
    fn failure() -> Self {
        Self { code: 1, output: String::new() }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = base_config(&cli);
    init_logging(&config);

    let outcome = execute(&cli, config);
    if !outcome.output.is_empty() {
        println!("{}", outcome.output);
    }
    ExitCode::from(outcome.code)
}

// 日志写到 stderr，stdout 只输出结果
fn init_logging(config: &GlobalConfig) {
    let default_level = if config.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

// 不涉及文件读取的配置项，日志初始化前即可确定
fn base_config(cli: &Cli) -> GlobalConfig {
    ConfigManager::custom()
        .output_format(cli.format)
        .verbose(cli.verbose)
        .build()
}

/// 执行完整流程，缺少路径或任何错误都返回退出码 1
fn execute(cli: &Cli, config: GlobalConfig) -> Outcome {
    let Some(path) = cli.path.as_deref() else {
        error!("Usage: rsindexer <path-to-file>");
        return Outcome::failure();
    };

    match run(cli, config, path) {
        Ok(output) => Outcome { code: 0, output },
        Err(e) => {
            error!("Error processing file: {:#}", e);
            Outcome::failure()
        }
    }
}

fn run(cli: &Cli, mut config: GlobalConfig, path: &Path) -> anyhow::Result<String> {
    if let Some(rules_path) = &cli.rules {
        config.rules = ConfigManager::load_rules(rules_path)
            .with_context(|| format!("failed to load rules from {}", rules_path.display()))?;
    }

    let processor = FileProcessor::from_config(&config);
    let results = processor
        .process_file(path)
        .with_context(|| format!("failed to process {}", path.display()))?;

    Ok(ReportFormatter::render(&results, &processor.rule_names(), config.output_format)?)
}
