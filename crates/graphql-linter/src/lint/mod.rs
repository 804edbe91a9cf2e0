mod linter;
pub mod rules;

pub use linter::{all_rule_ids, rule_catalogue, Linter, READ_FAILURE_RULE};
pub use rules::{all_rules, LintRule, RuleGroup};
