//! 处理模块：文件读取与规则执行
pub mod file_processor;

// 导出核心接口
pub use self::file_processor::{FileProcessor, ResultMap};
