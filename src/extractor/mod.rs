//! 提取模块：从原始文本中提取词
pub mod word_extractor;

pub use self::word_extractor::WordExtractor;
