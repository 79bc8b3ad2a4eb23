//! 词提取器
//! 按行切分文本，以空白和标点作为分隔符提取词

use std::io::BufRead;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::RsiResult;

/// 分隔符：一个或多个空白，或单个标点字符
static WORD_DELIMITER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"\s+|[,.;:!?"()\[\]{}]"#).expect("word delimiter pattern is valid")
});

/// 词提取器
#[derive(Debug, Default, Clone, Copy)]
pub struct WordExtractor;

impl WordExtractor {
    pub fn new() -> Self {
        Self
    }

    /// 切分单行文本，丢弃空白词
    pub fn tokenize_line(&self, line: &str) -> Vec<String> {
        WORD_DELIMITER
            .split(line)
            .filter(|word| !word.trim().is_empty())
            .map(str::to_string)
            .collect()
    }

    /// 逐行切分整段文本，分隔符不会跨行
    pub fn tokenize_text(&self, text: &str) -> Vec<String> {
        text.lines().flat_map(|line| self.tokenize_line(line)).collect()
    }

    /// 从读取器逐行提取词
    pub fn tokenize_reader<R: BufRead>(&self, reader: R) -> RsiResult<Vec<String>> {
        let mut words = Vec::new();
        for line in reader.lines() {
            words.extend(self.tokenize_line(&line?));
        }
        Ok(words)
    }
}
