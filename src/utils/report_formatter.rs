//! 结果输出格式化工具
//! 把规则结果渲染为 `name: value` 文本行或 JSON

use std::collections::BTreeMap;
use std::collections::HashSet;

use crate::config::OutputFormat;
use crate::error::RsiResult;
use crate::processor::ResultMap;

/// 结果格式化工具
pub struct ReportFormatter;

impl ReportFormatter {
    /// 按指定格式渲染结果
    ///
    /// `order` 为期望的输出顺序（通常是规则注册顺序），未出现在其中的结果按名称排序追加
    pub fn render(results: &ResultMap, order: &[String], format: OutputFormat) -> RsiResult<String> {
        match format {
            OutputFormat::Text => Ok(Self::to_text_lines(results, order).join("\n")),
            OutputFormat::Json => Self::to_pretty_json(results),
        }
    }

    /// 每条结果一行 `name: value`
    pub fn to_text_lines(results: &ResultMap, order: &[String]) -> Vec<String> {
        let mut seen = HashSet::new();
        let mut lines = Vec::with_capacity(results.len());

        for name in order {
            if !seen.insert(name.as_str()) {
                continue;
            }
            if let Some(result) = results.get(name) {
                lines.push(format!("{}: {}", name, result));
            }
        }

        let mut rest: Vec<_> = results
            .iter()
            .filter(|(name, _)| !seen.contains(name.as_str()))
            .collect();
        rest.sort_by(|a, b| a.0.cmp(b.0));
        lines.extend(rest.into_iter().map(|(name, result)| format!("{}: {}", name, result)));

        lines
    }

    /// 格式化 JSON（键按名称排序，保证输出稳定）
    pub fn to_pretty_json(results: &ResultMap) -> RsiResult<String> {
        let sorted: BTreeMap<_, _> = results.iter().collect();
        Ok(serde_json::to_string_pretty(&sorted)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::RuleResult;

    fn sample_results() -> ResultMap {
        let mut results = ResultMap::new();
        results.insert("Words starting with M/m".to_string(), RuleResult::Count(2));
        results.insert(
            "Words with length > 5".to_string(),
            RuleResult::Words(vec!["Monday".to_string(), "mechanism".to_string()]),
        );
        results
    }

    #[test]
    fn test_text_lines_follow_order() {
        let order = vec!["Words with length > 5".to_string(), "Words starting with M/m".to_string()];
        let lines = ReportFormatter::to_text_lines(&sample_results(), &order);
        assert_eq!(
            lines,
            vec!["Words with length > 5: [Monday, mechanism]", "Words starting with M/m: 2"]
        );
    }

    #[test]
    fn test_text_lines_skip_duplicates_and_append_rest() {
        let order = vec!["Words starting with M/m".to_string(), "Words starting with M/m".to_string()];
        let lines = ReportFormatter::to_text_lines(&sample_results(), &order);
        assert_eq!(
            lines,
            vec!["Words starting with M/m: 2", "Words with length > 5: [Monday, mechanism]"]
        );
    }

    #[test]
    fn test_render_text_empty() {
        let rendered = ReportFormatter::render(&ResultMap::new(), &[], OutputFormat::Text).unwrap();
        assert_eq!(rendered, "");
    }

    #[test]
    fn test_render_json() {
        let rendered = ReportFormatter::render(&sample_results(), &[], OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value["Words starting with M/m"], 2);
        assert_eq!(value["Words with length > 5"], serde_json::json!(["Monday", "mechanism"]));
    }
}
