//! 文件处理器核心：读取文件、提取词并依次执行已注册的规则
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::config::GlobalConfig;
use crate::error::{RsiResult, RsindexerError};
use crate::extractor::WordExtractor;
use crate::rule::{ProcessingRule, RuleConfig, RuleFactory, RuleResult};

/// 规则名称 -> 规则结果
pub type ResultMap = HashMap<String, RuleResult>;

/// 文件处理器
#[derive(Debug, Default)]
pub struct FileProcessor {
    rules: Vec<Box<dyn ProcessingRule>>,
    extractor: WordExtractor,
}

impl FileProcessor {
    /// 创建无规则的处理器
    pub fn new() -> Self {
        Self::default()
    }

    /// 按配置顺序注册规则
    pub fn with_rules<'a>(configs: impl IntoIterator<Item = &'a RuleConfig>) -> Self {
        let mut processor = Self::new();
        for config in configs {
            processor.add_rule(RuleFactory::create(config));
        }
        processor
    }

    /// 由全局配置创建处理器
    pub fn from_config(config: &GlobalConfig) -> Self {
        Self::with_rules(&config.rules)
    }

    /// 追加规则（只增不删）
    pub fn add_rule(&mut self, rule: Box<dyn ProcessingRule>) {
        self.rules.push(rule);
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// 按注册顺序返回规则名称
    pub fn rule_names(&self) -> Vec<String> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// 处理文件：读取 -> 提取词 -> 执行规则
    pub fn process_file(&self, path: impl AsRef<Path>) -> RsiResult<ResultMap> {
        let path = path.as_ref();
        info!("Processing file: {}", path.display());

        if !path.exists() {
            return Err(RsindexerError::FileNotFound(path.to_path_buf()));
        }

        // 文件句柄随 reader 离开作用域释放
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RsindexerError::FileNotFound(path.to_path_buf()),
            _ => RsindexerError::IoError(e),
        })?;
        let words = self.extractor.tokenize_reader(BufReader::new(file))?;
        info!("Extracted {} words from file", words.len());

        Ok(self.process_words(&words))
    }

    /// 对已提取的词序列执行全部规则
    pub fn process_words(&self, words: &[String]) -> ResultMap {
        let mut results = HashMap::with_capacity(self.rules.len());
        for rule in &self.rules {
            let name = rule.name();
            let result = rule.process(words);
            debug!("规则执行完成：{} => {}", name, result);
            if results.insert(name.clone(), result).is_some() {
                warn!("规则名称重复，结果被覆盖：{}", name);
            }
        }
        results
    }
}
