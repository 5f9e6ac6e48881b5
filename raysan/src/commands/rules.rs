// raysan/src/commands/rules.rs
//! `raysan rules`: prints the rules a fresh sanitizer runs.

use anyhow::Result;
use is_terminal::IsTerminal;
use std::io::{self, Write};

use raysan_core::SanitizationEngine;

use crate::ui::report_table;
use crate::ui::theme::ThemeMap;

pub fn run_rules(engine: &dyn SanitizationEngine, theme: &ThemeMap) -> Result<()> {
    let mut rules = engine.sanitization_rules();
    rules.sort_by_key(|rule| std::cmp::Reverse(rule.priority));

    let stdout = io::stdout();
    let supports_color = stdout.is_terminal();
    let mut writer = stdout.lock();
    report_table::print_rules(&rules, &mut writer, theme, supports_color)?;
    writer.flush()?;
    Ok(())
}
