//! 首字母计数规则
//! 统计以指定字符开头的词数量，可选忽略大小写

use super::base::ProcessingRule;
use super::model::RuleResult;

/// 统计以指定字符开头的词
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartsWithLetterRule {
    letter: char,
    ignore_case: bool,
    upper: char,
    lower: char,
}

impl StartsWithLetterRule {
    pub fn new(letter: char, ignore_case: bool) -> Self {
        Self {
            letter,
            ignore_case,
            upper: single_upper(letter),
            lower: single_lower(letter),
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn ignore_case(&self) -> bool {
        self.ignore_case
    }

    fn matches(&self, first: char) -> bool {
        if self.ignore_case {
            first == self.letter || first == self.upper || first == self.lower
        } else {
            first == self.letter
        }
    }
}

impl ProcessingRule for StartsWithLetterRule {
    fn name(&self) -> String {
        if self.ignore_case {
            format!("Words starting with {}/{}", self.upper, self.lower)
        } else {
            format!("Words starting with {}", self.letter)
        }
    }

    fn process(&self, words: &[String]) -> RuleResult {
        let count = words
            .iter()
            .filter_map(|word| word.chars().next())
            .filter(|first| self.matches(*first))
            .count();
        RuleResult::Count(count as u64)
    }
}

// 大小写映射只在结果为单个码点时生效（如 'ß' 的大写是 "SS"，保持原字符）
fn single_upper(c: char) -> char {
    let mut mapped = c.to_uppercase();
    match (mapped.next(), mapped.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

fn single_lower(c: char) -> char {
    let mut mapped = c.to_lowercase();
    match (mapped.next(), mapped.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}
