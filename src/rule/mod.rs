//! 规则模块：规则数据模型、规则实现与规则工厂
pub mod model;
pub mod base;
pub mod starts_with_letter;
pub mod length_filter;
pub mod factory;

// 导出核心接口
pub use self::model::{LengthOperator, RuleConfig, RuleResult, RuleType};
pub use self::base::ProcessingRule;
pub use self::starts_with_letter::StartsWithLetterRule;
pub use self::length_filter::LengthFilterRule;
pub use self::factory::RuleFactory;
