//! 词长过滤规则
//! 按码点长度与阈值比较过滤词，保留原始顺序和重复项

use super::base::ProcessingRule;
use super::model::{LengthOperator, RuleResult};

/// 按词长过滤
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthFilterRule {
    threshold: i64,
    operator: LengthOperator,
}

impl LengthFilterRule {
    pub fn new(threshold: i64, operator: LengthOperator) -> Self {
        Self { threshold, operator }
    }

    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    pub fn operator(&self) -> LengthOperator {
        self.operator
    }
}

impl ProcessingRule for LengthFilterRule {
    fn name(&self) -> String {
        format!("Words with length {} {}", self.operator.symbol(), self.threshold)
    }

    fn process(&self, words: &[String]) -> RuleResult {
        let matched = words
            .iter()
            .filter(|word| {
                let length = word.chars().count() as i64;
                self.operator.compare(length, self.threshold)
            })
            .cloned()
            .collect();
        RuleResult::Words(matched)
    }
}
