//! 规则能力抽象
//! 所有规则都是对词序列的纯函数，规则之间互不共享状态

use std::fmt;

use super::model::RuleResult;

/// 文本处理规则
///
/// 内置实现见 [`StartsWithLetterRule`](super::StartsWithLetterRule) 与
/// [`LengthFilterRule`](super::LengthFilterRule)，调用方也可以实现本 trait
/// 注册自定义规则。
pub trait ProcessingRule: Send + Sync {
    /// 由配置确定的可读名称，同一配置必须返回同一名称
    fn name(&self) -> String;

    /// 对词序列执行规则，空输入返回空结果而不是失败
    fn process(&self, words: &[String]) -> RuleResult;
}

impl fmt::Debug for dyn ProcessingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessingRule").field("name", &self.name()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct WordCountRule;

    impl ProcessingRule for WordCountRule {
        fn name(&self) -> String {
            "Count Rule".to_string()
        }

        fn process(&self, words: &[String]) -> RuleResult {
            RuleResult::Count(words.len() as u64)
        }
    }

    struct JoinRule;

    impl ProcessingRule for JoinRule {
        fn name(&self) -> String {
            "Join Rule".to_string()
        }

        fn process(&self, words: &[String]) -> RuleResult {
            if words.is_empty() {
                return RuleResult::Words(Vec::new());
            }
            RuleResult::Words(vec![words.join("-")])
        }
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_custom_rules_through_trait_object() {
        let rules: Vec<Box<dyn ProcessingRule>> = vec![Box::new(WordCountRule), Box::new(JoinRule)];
        let input = words(&["apple", "banana", "cherry", "date"]);

        assert_eq!(rules[0].process(&input), RuleResult::Count(4));
        assert_eq!(
            rules[1].process(&input),
            RuleResult::Words(vec!["apple-banana-cherry-date".to_string()])
        );
        assert_ne!(rules[0].name(), rules[1].name());
    }

    #[test]
    fn test_custom_rule_empty_input() {
        assert_eq!(WordCountRule.process(&[]), RuleResult::Count(0));
        assert_eq!(JoinRule.process(&[]), RuleResult::Words(vec![]));
    }

    #[test]
    fn test_debug_shows_name() {
        let rule: Box<dyn ProcessingRule> = Box::new(WordCountRule);
        assert_eq!(format!("{:?}", rule), r#"ProcessingRule { name: "Count Rule" }"#);
    }
}
