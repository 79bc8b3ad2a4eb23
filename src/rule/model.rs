//! 规则数据模型定义
//! 仅存储规则配置与结果数据，支持序列化/反序列化

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RsindexerError;

/// 规则类型标签（规则文件中的 `type` 字段）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleType {
    StartsWithLetter,
    LengthFilter,
}

impl RuleType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleType::StartsWithLetter => "STARTS_WITH_LETTER",
            RuleType::LengthFilter => "LENGTH_FILTER",
        }
    }
}

impl FromStr for RuleType {
    type Err = RsindexerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        [RuleType::StartsWithLetter, RuleType::LengthFilter]
            .into_iter()
            .find(|rule_type| rule_type.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| RsindexerError::invalid_config(format!("Unknown rule type: {}", s)))
    }
}

impl fmt::Display for RuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 长度比较运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LengthOperator {
    EqualTo,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
}

impl LengthOperator {
    pub const ALL: [LengthOperator; 5] = [
        LengthOperator::EqualTo,
        LengthOperator::LessThan,
        LengthOperator::GreaterThan,
        LengthOperator::LessThanOrEqual,
        LengthOperator::GreaterThanOrEqual,
    ];

    /// 规则名称中使用的符号
    pub fn symbol(&self) -> &'static str {
        match self {
            LengthOperator::EqualTo => "=",
            LengthOperator::LessThan => "<",
            LengthOperator::GreaterThan => ">",
            LengthOperator::LessThanOrEqual => "<=",
            LengthOperator::GreaterThanOrEqual => ">=",
        }
    }

    /// 规则文件中使用的名称
    pub fn as_str(&self) -> &'static str {
        match self {
            LengthOperator::EqualTo => "EQUAL_TO",
            LengthOperator::LessThan => "LESS_THAN",
            LengthOperator::GreaterThan => "GREATER_THAN",
            LengthOperator::LessThanOrEqual => "LESS_THAN_OR_EQUAL",
            LengthOperator::GreaterThanOrEqual => "GREATER_THAN_OR_EQUAL",
        }
    }

    /// 判断 `length <op> threshold` 是否成立
    pub fn compare(&self, length: i64, threshold: i64) -> bool {
        match self {
            LengthOperator::EqualTo => length == threshold,
            LengthOperator::LessThan => length < threshold,
            LengthOperator::GreaterThan => length > threshold,
            LengthOperator::LessThanOrEqual => length <= threshold,
            LengthOperator::GreaterThanOrEqual => length >= threshold,
        }
    }
}

impl FromStr for LengthOperator {
    type Err = RsindexerError;

    /// 同时接受名称（GREATER_THAN）和符号（>）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(raw) || op.symbol() == raw)
            .ok_or_else(|| RsindexerError::invalid_config(format!("Unknown length operator: {}", s)))
    }
}

impl fmt::Display for LengthOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// 强类型规则配置，构造时即完成校验
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleConfig {
    StartsWithLetter {
        letter: char,
        #[serde(default)]
        ignore_case: bool,
    },
    LengthFilter {
        threshold: i64,
        operator: LengthOperator,
    },
}

impl RuleConfig {
    pub fn rule_type(&self) -> RuleType {
        match self {
            RuleConfig::StartsWithLetter { .. } => RuleType::StartsWithLetter,
            RuleConfig::LengthFilter { .. } => RuleType::LengthFilter,
        }
    }
}

/// 规则执行结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleResult {
    Count(u64),
    Words(Vec<String>),
}

impl RuleResult {
    pub fn as_count(&self) -> Option<u64> {
        match self {
            RuleResult::Count(n) => Some(*n),
            RuleResult::Words(_) => None,
        }
    }

    pub fn as_words(&self) -> Option<&[String]> {
        match self {
            RuleResult::Words(words) => Some(words),
            RuleResult::Count(_) => None,
        }
    }
}

// ======== 为 RuleResult 实现 Display trait（用于 CLI 输出） ========
impl fmt::Display for RuleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleResult::Count(n) => write!(f, "{}", n),
            RuleResult::Words(words) => write!(f, "[{}]", words.join(", ")),
        }
    }
}
