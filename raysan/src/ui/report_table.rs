// raysan/src/ui/report_table.rs
//! Table rendering for the rule listing and the sanitization report.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};
use owo_colors::OwoColorize;
use std::io::{self, Write};

use raysan_core::{SanitizationReport, SanitizationRule};

use crate::ui::theme::{color_for, table_color_for, ThemeEntry, ThemeMap};

fn new_table(header: Vec<&str>, supports_color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    if supports_color {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table
}

/// A cell coloured by `entry` when colour is on.
fn themed_cell<T: ToString>(content: T, entry: ThemeEntry, theme: &ThemeMap, supports_color: bool) -> Cell {
    let cell = Cell::new(content);
    match table_color_for(entry, theme) {
        Some(color) if supports_color => cell.fg(color),
        _ => cell,
    }
}

fn write_heading<W: Write>(writer: &mut W, title: &str, theme: &ThemeMap, supports_color: bool) -> io::Result<()> {
    match color_for(ThemeEntry::Header, theme) {
        Some(color) if supports_color => writeln!(writer, "{}", title.color(color).bold()),
        _ => writeln!(writer, "{}", title),
    }
}

/// Renders the rules in the order they run.
pub fn rules_table(rules: &[SanitizationRule], theme: &ThemeMap, supports_color: bool) -> Table {
    let mut table = new_table(vec!["Priority", "Rule", "Description"], supports_color);
    for rule in rules {
        table.add_row(vec![
            themed_cell(rule.priority, ThemeEntry::SummaryOccurrences, theme, supports_color)
                .set_alignment(CellAlignment::Right),
            themed_cell(&rule.name, ThemeEntry::SummaryRuleName, theme, supports_color),
            Cell::new(&rule.description),
        ]);
    }
    table
}

pub fn print_rules<W: Write>(
    rules: &[SanitizationRule],
    writer: &mut W,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    write_heading(writer, "Sanitization Rules", theme, supports_color)?;
    writeln!(writer, "{}", rules_table(rules, theme, supports_color))
}

/// Writes the summary metrics, the top-rules table and any recommendations.
pub fn print_report<W: Write>(
    report: &SanitizationReport,
    writer: &mut W,
    theme: &ThemeMap,
    supports_color: bool,
) -> io::Result<()> {
    write_heading(writer, "Sanitization Report", theme, supports_color)?;

    let mut summary = new_table(vec!["Metric", "Value"], supports_color);
    summary
        .add_row(vec!["Total sanitizations".to_string(), report.total_sanitizations.to_string()])
        .add_row(vec!["Modified".to_string(), report.modified_count.to_string()])
        .add_row(vec!["Total time (ms)".to_string(), format!("{:.3}", report.total_processing_time_ms)])
        .add_row(vec!["Average time (ms)".to_string(), format!("{:.3}", report.average_processing_time_ms)])
        .add_row(vec!["Warnings".to_string(), report.total_warnings.to_string()]);
    writeln!(writer, "{}", summary)?;

    if !report.top_rules.is_empty() {
        let mut top = new_table(vec!["Rule", "Applications"], supports_color);
        for usage in &report.top_rules {
            top.add_row(vec![
                themed_cell(&usage.rule_name, ThemeEntry::SummaryRuleName, theme, supports_color),
                themed_cell(usage.count, ThemeEntry::SummaryOccurrences, theme, supports_color)
                    .set_alignment(CellAlignment::Right),
            ]);
        }
        writeln!(writer, "{}", top)?;
    }

    for recommendation in &report.recommendations {
        match color_for(ThemeEntry::Info, theme) {
            Some(color) if supports_color => writeln!(writer, "- {}", recommendation.color(color))?,
            _ => writeln!(writer, "- {}", recommendation)?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use raysan_core::{builtin_rules, generate_report};

    #[test]
    fn rules_table_lists_every_rule() {
        let theme = ThemeStyle::default_theme_map();
        let rendered = rules_table(&builtin_rules(), &theme, false).to_string();
        for rule in builtin_rules() {
            assert!(rendered.contains(&rule.name), "missing {}", rule.name);
        }
        assert!(!rendered.contains('\u{1b}'));
    }

    #[test]
    fn rule_names_and_counts_use_summary_colors() {
        let theme = ThemeStyle::default_theme_map();
        let colored = rules_table(&builtin_rules(), &theme, true).to_string();
        assert!(colored.contains('\u{1b}'), "expected escape codes in:\n{}", colored);
        let plain = String::from_utf8(strip_ansi_escapes::strip(colored.as_bytes())).unwrap();
        assert!(plain.contains("remove_null_bytes"));

        let mut uncolored = theme.clone();
        uncolored.insert(ThemeEntry::SummaryRuleName, ThemeStyle { fg: None });
        uncolored.insert(ThemeEntry::SummaryOccurrences, ThemeStyle { fg: None });
        let rendered = rules_table(&builtin_rules(), &uncolored, true).to_string();
        assert!(!rendered.contains('\u{1b}'), "unexpected escape codes in:\n{}", rendered);
    }

    #[test]
    fn empty_report_prints_note() {
        let report = generate_report(&[]);
        let mut buf = Vec::new();
        print_report(&report, &mut buf, &ThemeStyle::default_theme_map(), false).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("Total sanitizations"));
        assert!(out.contains("- No sanitization results to analyze."));
    }
}
