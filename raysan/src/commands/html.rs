// raysan/src/commands/html.rs
//! `raysan html`: best-effort HTML scrubbing.

use anyhow::Result;
use log::info;

use raysan_core::sanitize_html;

use crate::utils::input::write_output;

pub struct HtmlOptions {
    pub input: String,
    pub allow_tags: Option<Vec<String>>,
    pub allow_attrs: Option<Vec<String>>,
}

fn as_strs(list: &Option<Vec<String>>) -> Option<Vec<&str>> {
    list.as_ref().map(|items| items.iter().map(|s| s.trim()).collect())
}

/// Returns the scrubbed HTML; the input's trailing newline, if any, is kept.
pub fn scrub(opts: &HtmlOptions) -> String {
    let tags = as_strs(&opts.allow_tags);
    let attrs = as_strs(&opts.allow_attrs);
    sanitize_html(&opts.input, tags.as_deref(), attrs.as_deref())
}

pub fn run_html(opts: HtmlOptions) -> Result<()> {
    info!("Starting html operation.");
    write_output(None, &scrub(&opts))?;
    info!("Html operation completed.");
    Ok(())
}
