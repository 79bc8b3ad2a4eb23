//! 规则工厂
//! 负责把规则类型标签和参数转换为可执行规则，所有参数在构造时完成校验

use serde_json::Value;
use tracing::debug;

use super::base::ProcessingRule;
use super::length_filter::LengthFilterRule;
use super::model::{LengthOperator, RuleConfig, RuleType};
use super::starts_with_letter::StartsWithLetterRule;
use crate::error::{RsiResult, RsindexerError};

/// 规则工厂
pub struct RuleFactory;

impl RuleFactory {
    /// 创建首字母计数规则
    pub fn create_starts_with_letter_rule(letter: char, ignore_case: bool) -> Box<dyn ProcessingRule> {
        Box::new(StartsWithLetterRule::new(letter, ignore_case))
    }

    /// 创建词长过滤规则
    pub fn create_length_filter_rule(threshold: i64, operator: LengthOperator) -> Box<dyn ProcessingRule> {
        Box::new(LengthFilterRule::new(threshold, operator))
    }

    /// 从强类型配置创建规则
    pub fn create(config: &RuleConfig) -> Box<dyn ProcessingRule> {
        match *config {
            RuleConfig::StartsWithLetter { letter, ignore_case } => {
                Self::create_starts_with_letter_rule(letter, ignore_case)
            }
            RuleConfig::LengthFilter { threshold, operator } => {
                Self::create_length_filter_rule(threshold, operator)
            }
        }
    }

    /// 从类型标签和松散参数创建规则（规则文件入口）
    ///
    /// # 参数
    /// - `type_tag`: `STARTS_WITH_LETTER` / `LENGTH_FILTER`（不区分大小写）
    /// - `params`: 规则参数，含义取决于规则类型
    ///
    /// # 错误
    /// 类型未知或参数缺失/类型不符时返回 `InvalidConfiguration`
    pub fn create_rule(type_tag: &str, params: &[Value]) -> RsiResult<Box<dyn ProcessingRule>> {
        let config = Self::parse_config(type_tag, params)?;
        debug!("规则创建成功：{:?}", config);
        Ok(Self::create(&config))
    }

    /// 校验松散参数并转换为强类型配置
    pub fn parse_config(type_tag: &str, params: &[Value]) -> RsiResult<RuleConfig> {
        match type_tag.parse::<RuleType>()? {
            RuleType::StartsWithLetter => Self::parse_starts_with_letter(params),
            RuleType::LengthFilter => Self::parse_length_filter(params),
        }
    }

    fn parse_starts_with_letter(params: &[Value]) -> RsiResult<RuleConfig> {
        let letter = params
            .first()
            .and_then(Value::as_str)
            .and_then(single_char)
            .ok_or_else(|| {
                RsindexerError::invalid_config("StartsWithLetter rule requires a single character parameter")
            })?;

        // 忽略大小写标志缺失或不是布尔值时按大小写敏感处理
        let ignore_case = params.get(1).and_then(Value::as_bool).unwrap_or(false);

        Ok(RuleConfig::StartsWithLetter { letter, ignore_case })
    }

    fn parse_length_filter(params: &[Value]) -> RsiResult<RuleConfig> {
        let missing =
            || RsindexerError::invalid_config("LengthFilter rule requires an integer and an operator parameter");

        if params.len() < 2 {
            return Err(missing());
        }
        let threshold = params[0].as_i64().ok_or_else(missing)?;
        let operator = params[1]
            .as_str()
            .ok_or_else(missing)?
            .parse::<LengthOperator>()?;

        Ok(RuleConfig::LengthFilter { threshold, operator })
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
