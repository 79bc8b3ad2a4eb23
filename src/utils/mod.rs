//! 工具模块：结果格式化等辅助功能
pub mod report_formatter;

pub use self::report_formatter::ReportFormatter;
