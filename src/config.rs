//! 全局配置管理,存储所有可配置项

use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::{RsiResult, RsindexerError};
use crate::rule::{LengthOperator, RuleConfig, RuleFactory};

/// 结果输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = RsindexerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(RsindexerError::InvalidInput(format!("Unknown output format: {}", s))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// 规则文件中的单条规则（参数为松散类型，由规则工厂校验）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleEntry {
    #[serde(rename = "type")]
    pub rule_type: String,
    #[serde(default)]
    pub params: Vec<Value>,
}

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 按注册顺序执行的规则
    pub rules: Vec<RuleConfig>,
    // 输出格式
    pub output_format: OutputFormat,
    // 是否启用详细日志
    pub verbose: bool,
}

impl GlobalConfig {
    /// 默认规则集：M/m 开头计数 + 长度大于 5 的词
    pub fn default_rules() -> Vec<RuleConfig> {
        vec![
            RuleConfig::StartsWithLetter { letter: 'M', ignore_case: true },
            RuleConfig::LengthFilter { threshold: 5, operator: LengthOperator::GreaterThan },
        ]
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            rules: Self::default_rules(),
            output_format: OutputFormat::Text,
            verbose: false,
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }

    /// 从 JSON 规则文件加载规则配置
    ///
    /// 文件内容为 `[{"type": "LENGTH_FILTER", "params": [5, "GREATER_THAN"]}, ...]`，
    /// 任意一条规则无效时整体失败
    pub fn load_rules(path: impl AsRef<Path>) -> RsiResult<Vec<RuleConfig>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(RsindexerError::FileNotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        let rules = Self::parse_rules(&content)?;
        debug!("规则文件加载成功：{}，规则数：{}", path.display(), rules.len());
        Ok(rules)
    }

    /// 解析 JSON 规则文本
    pub fn parse_rules(content: &str) -> RsiResult<Vec<RuleConfig>> {
        let entries: Vec<RuleEntry> = serde_json::from_str(content)?;
        entries
            .iter()
            .map(|entry| RuleFactory::parse_config(&entry.rule_type, &entry.params))
            .collect()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    /// 替换整个规则集
    pub fn rules(mut self, rules: Vec<RuleConfig>) -> Self {
        self.config.rules = rules;
        self
    }

    pub fn add_rule(mut self, rule: RuleConfig) -> Self {
        self.config.rules.push(rule);
        self
    }

    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.config.output_format = format;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}

impl Default for CustomConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ConfigManager::get_default();
        assert_eq!(config.rules, GlobalConfig::default_rules());
        assert_eq!(config.output_format, OutputFormat::Text);
        assert!(!config.verbose);
    }

    #[test]
    fn test_custom_builder() {
        let config = ConfigManager::custom()
            .rules(vec![])
            .add_rule(RuleConfig::StartsWithLetter { letter: 'a', ignore_case: true })
            .output_format(OutputFormat::Json)
            .verbose(true)
            .build();
        assert_eq!(config.rules, vec![RuleConfig::StartsWithLetter { letter: 'a', ignore_case: true }]);
        assert_eq!(config.output_format, OutputFormat::Json);
        assert!(config.verbose);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!(matches!(
            "xlsx".parse::<OutputFormat>(),
            Err(RsindexerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_rules() {
        let rules = ConfigManager::parse_rules(
            r#"[
                {"type": "STARTS_WITH_LETTER", "params": ["a", true]},
                {"type": "length_filter", "params": [3, "<="]},
                {"type": "STARTS_WITH_LETTER", "params": ["Z"]}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            rules,
            vec![
                RuleConfig::StartsWithLetter { letter: 'a', ignore_case: true },
                RuleConfig::LengthFilter { threshold: 3, operator: LengthOperator::LessThanOrEqual },
                RuleConfig::StartsWithLetter { letter: 'Z', ignore_case: false },
            ]
        );
    }

    #[test]
    fn test_parse_rules_rejects_invalid_entries() {
        let result = ConfigManager::parse_rules(r#"[{"type": "LENGTH_FILTER", "params": [5]}]"#);
        assert!(matches!(result, Err(RsindexerError::InvalidConfiguration(_))));

        let result = ConfigManager::parse_rules(r#"[{"type": "UNKNOWN"}]"#);
        assert!(matches!(result, Err(RsindexerError::InvalidConfiguration(_))));

        let result = ConfigManager::parse_rules("not json");
        assert!(matches!(result, Err(RsindexerError::JsonError(_))));
    }

    #[test]
    fn test_load_rules_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"type": "LENGTH_FILTER", "params": [5, "GREATER_THAN"]}}]"#).unwrap();

        let rules = ConfigManager::load_rules(file.path()).unwrap();
        assert_eq!(
            rules,
            vec![RuleConfig::LengthFilter { threshold: 5, operator: LengthOperator::GreaterThan }]
        );
    }

    #[test]
    fn test_load_rules_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = ConfigManager::load_rules(dir.path().join("missing-rules.json"));
        assert!(matches!(result, Err(RsindexerError::FileNotFound(_))));
    }
}
