// raysan/src/commands/sanitize.rs
//! `raysan sanitize`: JSON in, sanitized JSON out.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io;
use std::path::{Path, PathBuf};

use raysan_core::{
    generate_report, merge_config, ConfigOverrides, SanitizationConfig, SanitizationEngine,
    SanitizationResult, Value,
};

use crate::cli::SanitizeCommand;
use crate::commands::{info_msg, warn_msg};
use crate::ui::report_table;
use crate::ui::theme::ThemeMap;
use crate::utils::input::write_output;

/// Options for [`run_sanitize`], separated from clap so tests can build them directly.
pub struct SanitizeOptions {
    pub input: String,
    pub output_path: Option<PathBuf>,
    pub lines: bool,
    pub report: bool,
    pub quiet: bool,
}

/// Flags that were not given stay `None` so the config file value wins.
pub fn overrides_from(cmd: &SanitizeCommand) -> ConfigOverrides {
    ConfigOverrides {
        enable_deep_sanitization: cmd.no_deep.then_some(false),
        enable_strict_mode: cmd.strict.then_some(true),
        max_depth: cmd.max_depth,
        preserve_whitespace: cmd.preserve_whitespace.then_some(true),
    }
}

/// Loads the config file (or defaults) and applies command-line overrides.
pub fn build_config(config_path: Option<&Path>, overrides: &ConfigOverrides) -> Result<SanitizationConfig> {
    let base = match config_path {
        Some(path) => SanitizationConfig::load_from_file(path)?,
        None => SanitizationConfig::default(),
    };
    let config = merge_config(base, overrides);
    config.validate().context("Invalid command-line overrides")?;
    Ok(config)
}

/// Parses the whole input as one document, or each non-empty line as its own.
pub fn parse_documents(input: &str, lines: bool) -> Result<Vec<Value>> {
    if !lines {
        let value = serde_json::from_str(input).context("Failed to parse input as JSON")?;
        return Ok(vec![value]);
    }

    input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            serde_json::from_str(line).with_context(|| format!("Failed to parse JSON on line {}", idx + 1))
        })
        .collect()
}

fn render(results: &[SanitizationResult]) -> Result<String> {
    let mut out = String::new();
    for result in results {
        out.push_str(&serde_json::to_string(&result.sanitized).context("Failed to serialize sanitized value")?);
        out.push('\n');
    }
    Ok(out)
}

pub fn run_sanitize(
    engine: &dyn SanitizationEngine,
    config: &SanitizationConfig,
    opts: SanitizeOptions,
    theme: &ThemeMap,
) -> Result<()> {
    info!("Starting sanitize operation.");
    let documents = parse_documents(&opts.input, opts.lines)?;
    debug!("Parsed {} document(s).", documents.len());

    let results = engine.batch_sanitize(&documents, Some(config));

    if !opts.quiet {
        for (idx, result) in results.iter().enumerate() {
            for warning in &result.warnings {
                if opts.lines {
                    warn_msg(format!("Document {}: {}", idx + 1, warning), theme);
                } else {
                    warn_msg(warning, theme);
                }
            }
        }
    }

    write_output(opts.output_path.as_deref(), &render(&results)?)?;

    if let Some(path) = &opts.output_path {
        if !opts.quiet {
            info_msg(format!("Wrote {} document(s) to {}", results.len(), path.display()), theme);
        }
    }

    if opts.report {
        let report = generate_report(&results);
        let supports_color = io::stderr().is_terminal();
        report_table::print_report(&report, &mut io::stderr(), theme, supports_color)?;
    }

    info!("Sanitize operation completed.");
    Ok(())
}
