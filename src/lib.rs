//! rsindexer - 基于规则的文本词分析工具
//! 读取文本文件、按空白和标点切分词，再执行可配置的分析规则

// 导出全局错误类型
pub use self::error::{RsindexerError, RsiResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder, OutputFormat, RuleEntry};

// 导出规则模块核心接口
pub use self::rule::{
    ProcessingRule, RuleConfig, RuleResult, RuleType, LengthOperator,
    StartsWithLetterRule, LengthFilterRule, RuleFactory
};

// 导出提取模块核心接口
pub use self::extractor::WordExtractor;

// 导出处理模块核心接口
pub use self::processor::{FileProcessor, ResultMap};

// 导出工具模块核心接口
pub use self::utils::ReportFormatter;

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod extractor;
pub mod processor;
pub mod utils;
