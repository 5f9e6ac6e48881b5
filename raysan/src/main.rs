// raysan/src/main.rs
//! Raysan entry point.
//!
//! Exit codes: `0` success, `1` when `check` finds input that needs
//! sanitizing, `2` on any error.

use anyhow::{Context, Result};
use clap::Parser;
use log::LevelFilter;
use std::process::ExitCode;

use raysan::cli::{Cli, Commands};
use raysan::commands::{self, check, html, rules, sanitize};
use raysan::logger;
use raysan::ui::theme::{build_theme_map, ThemeMap, ThemeStyle};
use raysan::utils::input::read_input;
use raysan_core::Sanitizer;

const EXIT_NEEDS_SANITIZATION: u8 = 1;
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.quiet {
        Some(LevelFilter::Off)
    } else if cli.debug {
        Some(LevelFilter::Debug)
    } else {
        None
    };
    logger::init_logger(level);

    let theme = match build_theme_map(cli.theme.as_deref()) {
        Ok(theme) => theme,
        Err(e) => {
            let fallback = ThemeStyle::default_theme_map();
            commands::error_msg(format!("{:#}", e), &fallback);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match run(cli, &theme) {
        Ok(code) => code,
        Err(e) => {
            commands::error_msg(format!("{:#}", e), &theme);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli, theme: &ThemeMap) -> Result<ExitCode> {
    let engine = Sanitizer::new();

    match cli.command {
        Commands::Sanitize(cmd) => {
            let config = sanitize::build_config(cmd.config.as_deref(), &sanitize::overrides_from(&cmd))?;
            let opts = sanitize::SanitizeOptions {
                input: read_input(cmd.input_file.as_deref())?,
                output_path: cmd.output,
                lines: cmd.lines,
                report: cmd.report,
                quiet: cli.quiet,
            };
            sanitize::run_sanitize(&engine, &config, opts, theme).context("Sanitization failed")?;
        }
        Commands::Html(cmd) => {
            html::run_html(html::HtmlOptions {
                input: read_input(cmd.input_file.as_deref())?,
                allow_tags: cmd.allow_tags,
                allow_attrs: cmd.allow_attrs,
            })?;
        }
        Commands::Check(cmd) => {
            let input = read_input(cmd.input_file.as_deref())?;
            if check::check_input(&input) {
                if !cli.quiet {
                    commands::warn_msg("Input needs sanitization.", theme);
                }
                return Ok(ExitCode::from(EXIT_NEEDS_SANITIZATION));
            }
            if !cli.quiet {
                commands::success_msg("Input is clean.", theme);
            }
        }
        Commands::Rules => rules::run_rules(&engine, theme)?,
    }

    Ok(ExitCode::SUCCESS)
}
