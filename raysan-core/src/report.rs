// raysan-core/src/report.rs
//! Aggregate statistics over many sanitization results.
//!
//! License: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::result::SanitizationResult;

/// How many rules `top_rules` lists.
pub const TOP_RULES_LIMIT: usize = 10;

/// Average processing time above which a performance hint is emitted.
pub const SLOW_AVERAGE_MS: f64 = 10.0;

/// Share of all rule applications above which one rule counts as dominant.
pub const DOMINANT_RULE_SHARE: f64 = 0.5;

/// Below this many applications, dominance is not reported.
pub const DOMINANCE_MIN_APPLICATIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleUsage {
    pub rule_name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SanitizationReport {
    pub total_sanitizations: usize,
    /// Results whose sanitized value differs from the original.
    pub modified_count: usize,
    pub total_processing_time_ms: f64,
    pub average_processing_time_ms: f64,
    /// Most frequently applied rules, by descending count; ties keep first-seen order.
    pub top_rules: Vec<RuleUsage>,
    pub total_warnings: usize,
    pub recommendations: Vec<String>,
}

/// Summarizes `results`. Pure aggregation; an empty slice yields zeros.
pub fn generate_report(results: &[SanitizationResult]) -> SanitizationReport {
    let total_sanitizations = results.len();
    let modified_count = results.iter().filter(|r| r.was_modified()).count();
    let total_processing_time_ms: f64 = results.iter().map(|r| r.metadata.processing_time_ms).sum();
    let average_processing_time_ms = if total_sanitizations == 0 {
        0.0
    } else {
        total_processing_time_ms / total_sanitizations as f64
    };
    let total_warnings = results.iter().map(|r| r.warnings.len()).sum();

    // Counts keyed by first-seen position so the stable sort below breaks ties by it.
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut usage: Vec<RuleUsage> = Vec::new();
    for rule_name in results.iter().flat_map(|r| r.applied_rules.iter()) {
        match positions.get(rule_name.as_str()) {
            Some(&idx) => usage[idx].count += 1,
            None => {
                positions.insert(rule_name.as_str(), usage.len());
                usage.push(RuleUsage {
                    rule_name: rule_name.clone(),
                    count: 1,
                });
            }
        }
    }
    let total_applications: usize = usage.iter().map(|u| u.count).sum();
    usage.sort_by(|a, b| b.count.cmp(&a.count));
    usage.truncate(TOP_RULES_LIMIT);

    let recommendations = recommendations(
        total_sanitizations,
        average_processing_time_ms,
        &usage,
        total_applications,
        total_warnings,
    );

    SanitizationReport {
        total_sanitizations,
        modified_count,
        total_processing_time_ms,
        average_processing_time_ms,
        top_rules: usage,
        total_warnings,
        recommendations,
    }
}

fn recommendations(
    total_sanitizations: usize,
    average_ms: f64,
    top_rules: &[RuleUsage],
    total_applications: usize,
    total_warnings: usize,
) -> Vec<String> {
    let mut out = Vec::new();
    if total_sanitizations == 0 {
        out.push("No sanitization results to analyze.".to_string());
        return out;
    }
    if average_ms > SLOW_AVERAGE_MS {
        out.push(format!(
            "Average processing time is {:.2} ms; consider lowering max_depth or disabling deep sanitization for large inputs.",
            average_ms
        ));
    }
    if let Some(top) = top_rules.first() {
        let share = top.count as f64 / total_applications as f64;
        if total_applications >= DOMINANCE_MIN_APPLICATIONS && share > DOMINANT_RULE_SHARE {
            out.push(format!(
                "Rule '{}' accounts for {:.0}% of rule applications; consider cleaning this data at its source.",
                top.rule_name,
                share * 100.0
            ));
        }
    }
    if total_warnings > 0 {
        out.push(format!(
            "{} warning(s) were raised; review failing custom rules.",
            total_warnings
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;

    fn result(rules: &[&str], warnings: usize, time_ms: f64) -> SanitizationResult {
        SanitizationResult::new(
            Value::from("in"),
            Value::from(if rules.is_empty() { "in" } else { "out" }),
            rules.iter().map(|r| r.to_string()).collect(),
            (0..warnings).map(|i| format!("w{}", i)).collect(),
            time_ms,
        )
    }

    #[test]
    fn test_empty_report() {
        let report = generate_report(&[]);
        assert_eq!(report.total_sanitizations, 0);
        assert_eq!(report.average_processing_time_ms, 0.0);
        assert!(report.top_rules.is_empty());
        assert_eq!(report.recommendations, ["No sanitization results to analyze."]);
    }

    #[test]
    fn test_counts_and_tie_order() {
        let results = [
            result(&["b", "a"], 0, 1.0),
            result(&["a", "c"], 1, 2.0),
            result(&["b"], 0, 3.0),
            result(&[], 0, 2.0),
        ];
        let report = generate_report(&results);
        assert_eq!(report.total_sanitizations, 4);
        assert_eq!(report.modified_count, 3);
        assert_eq!(report.total_processing_time_ms, 8.0);
        assert_eq!(report.average_processing_time_ms, 2.0);
        assert_eq!(report.total_warnings, 1);
        let names: Vec<&str> = report.top_rules.iter().map(|u| u.rule_name.as_str()).collect();
        // "b" and "a" tie at 2; "b" was seen first.
        assert_eq!(names, ["b", "a", "c"]);
        assert_eq!(report.recommendations.len(), 1);
    }

    #[test]
    fn test_top_rules_are_capped() {
        let names: Vec<String> = (0..15).map(|i| format!("r{}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let report = generate_report(&[result(&refs, 0, 0.0)]);
        assert_eq!(report.top_rules.len(), TOP_RULES_LIMIT);
        assert_eq!(report.top_rules[0].rule_name, "r0");
    }

    #[test]
    fn test_slow_and_dominant_recommendations() {
        let results: Vec<SanitizationResult> = (0..12).map(|_| result(&["hot"], 0, 20.0)).collect();
        let report = generate_report(&results);
        assert_eq!(report.recommendations.len(), 2);
        assert!(report.recommendations[0].contains("Average processing time"));
        assert!(report.recommendations[1].contains("'hot'"));
    }
}
