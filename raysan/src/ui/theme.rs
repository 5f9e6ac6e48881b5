// raysan/src/ui/theme.rs
//! Colour theme for `raysan` terminal messages.
//!
//! A theme maps each [`ThemeEntry`] to an optional foreground colour drawn from
//! the 16 named ANSI colours. Themes load from YAML; entries a file leaves out
//! keep their default colour.

use anyhow::{Context, Result};
use comfy_table::Color as TableColor;
use owo_colors::AnsiColors;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub type ThemeMap = HashMap<ThemeEntry, ThemeStyle>;

/// The styled parts of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeEntry {
    Header,
    Success,
    Info,
    Warn,
    Error,
    /// Rule names in the `rules` listing and the report.
    SummaryRuleName,
    /// Priorities and application counts next to rule names.
    SummaryOccurrences,
}

impl ThemeEntry {
    pub const ALL: [ThemeEntry; 7] = [
        ThemeEntry::Header,
        ThemeEntry::Success,
        ThemeEntry::Info,
        ThemeEntry::Warn,
        ThemeEntry::Error,
        ThemeEntry::SummaryRuleName,
        ThemeEntry::SummaryOccurrences,
    ];

    fn default_color(self) -> AnsiColors {
        match self {
            ThemeEntry::Header => AnsiColors::BrightWhite,
            ThemeEntry::Success => AnsiColors::Green,
            ThemeEntry::Info => AnsiColors::Cyan,
            ThemeEntry::Warn => AnsiColors::Yellow,
            ThemeEntry::Error => AnsiColors::Red,
            ThemeEntry::SummaryRuleName => AnsiColors::BrightBlue,
            ThemeEntry::SummaryOccurrences => AnsiColors::Magenta,
        }
    }
}

const COLOR_NAMES: [(&str, AnsiColors); 16] = [
    ("black", AnsiColors::Black),
    ("red", AnsiColors::Red),
    ("green", AnsiColors::Green),
    ("yellow", AnsiColors::Yellow),
    ("blue", AnsiColors::Blue),
    ("magenta", AnsiColors::Magenta),
    ("cyan", AnsiColors::Cyan),
    ("white", AnsiColors::White),
    ("brightblack", AnsiColors::BrightBlack),
    ("brightred", AnsiColors::BrightRed),
    ("brightgreen", AnsiColors::BrightGreen),
    ("brightyellow", AnsiColors::BrightYellow),
    ("brightblue", AnsiColors::BrightBlue),
    ("brightmagenta", AnsiColors::BrightMagenta),
    ("brightcyan", AnsiColors::BrightCyan),
    ("brightwhite", AnsiColors::BrightWhite),
];

/// A named ANSI colour, validated on parse.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct ThemeColor(AnsiColors);

#[derive(Debug, Clone)]
pub struct ParseThemeColorError(String);

impl fmt::Display for ParseThemeColorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names: Vec<&str> = COLOR_NAMES.iter().map(|(name, _)| *name).collect();
        write!(f, "Invalid theme color '{}'; expected one of: {}.", self.0, names.join(", "))
    }
}

impl std::error::Error for ParseThemeColorError {}

impl FromStr for ThemeColor {
    type Err = ParseThemeColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        COLOR_NAMES
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|&(_, ansi)| ThemeColor(ansi))
            .ok_or(ParseThemeColorError(s.to_string()))
    }
}

impl TryFrom<String> for ThemeColor {
    type Error = ParseThemeColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ThemeColor> for String {
    fn from(color: ThemeColor) -> Self {
        color.name().to_string()
    }
}

impl From<AnsiColors> for ThemeColor {
    fn from(ansi: AnsiColors) -> Self {
        ThemeColor(ansi)
    }
}

impl ThemeColor {
    pub fn name(&self) -> &'static str {
        COLOR_NAMES
            .iter()
            .find(|(_, ansi)| *ansi == self.0)
            .map_or("white", |(name, _)| *name)
    }

    pub fn to_ansi_color(&self) -> AnsiColors {
        self.0
    }

    /// The same colour for comfy-table cells. comfy-table follows crossterm's
    /// naming, where the plain ANSI colours are the `Dark*` variants.
    pub fn to_table_color(&self) -> TableColor {
        match self.0 {
            AnsiColors::Black => TableColor::Black,
            AnsiColors::Red => TableColor::DarkRed,
            AnsiColors::Green => TableColor::DarkGreen,
            AnsiColors::Yellow => TableColor::DarkYellow,
            AnsiColors::Blue => TableColor::DarkBlue,
            AnsiColors::Magenta => TableColor::DarkMagenta,
            AnsiColors::Cyan => TableColor::DarkCyan,
            AnsiColors::White => TableColor::Grey,
            AnsiColors::BrightBlack => TableColor::DarkGrey,
            AnsiColors::BrightRed => TableColor::Red,
            AnsiColors::BrightGreen => TableColor::Green,
            AnsiColors::BrightYellow => TableColor::Yellow,
            AnsiColors::BrightBlue => TableColor::Blue,
            AnsiColors::BrightMagenta => TableColor::Magenta,
            AnsiColors::BrightCyan => TableColor::Cyan,
            AnsiColors::BrightWhite => TableColor::White,
            _ => TableColor::Reset,
        }
    }
}

/// Style for one [`ThemeEntry`]. `fg: None` prints uncoloured.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ThemeStyle {
    pub fg: Option<ThemeColor>,
}

/// Loads the theme at `theme_path`, or the default theme when none is given.
pub fn build_theme_map(theme_path: Option<&Path>) -> Result<ThemeMap> {
    match theme_path {
        Some(path) => ThemeStyle::load_from_file(path),
        None => Ok(ThemeStyle::default_theme_map()),
    }
}

impl ThemeStyle {
    /// Loads a YAML theme and fills missing entries from the default theme.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ThemeMap> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read theme file {}", path.display()))?;
        let mut theme: ThemeMap = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse theme file {}", path.display()))?;

        for (entry, style) in Self::default_theme_map() {
            theme.entry(entry).or_insert(style);
        }
        Ok(theme)
    }

    pub fn default_theme_map() -> ThemeMap {
        ThemeEntry::ALL
            .iter()
            .map(|&entry| (entry, ThemeStyle { fg: Some(entry.default_color().into()) }))
            .collect()
    }
}

fn theme_color(entry: ThemeEntry, theme: &ThemeMap) -> Option<ThemeColor> {
    theme.get(&entry).and_then(|style| style.fg)
}

/// Foreground colour for `entry`, if the theme sets one.
pub fn color_for(entry: ThemeEntry, theme: &ThemeMap) -> Option<AnsiColors> {
    theme_color(entry, theme).map(|color| color.to_ansi_color())
}

/// Foreground colour for `entry` as a comfy-table colour.
pub fn table_color_for(entry: ThemeEntry, theme: &ThemeMap) -> Option<TableColor> {
    theme_color(entry, theme).map(|color| color.to_table_color())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_named_colors() {
        assert!("red".parse::<ThemeColor>().is_ok());
        assert_eq!("BrightGreen".parse::<ThemeColor>().unwrap().to_ansi_color(), AnsiColors::BrightGreen);
        assert!("unknown".parse::<ThemeColor>().is_err());
    }

    #[test]
    fn default_theme_covers_every_entry() {
        let theme = ThemeStyle::default_theme_map();
        for entry in ThemeEntry::ALL {
            assert!(color_for(entry, &theme).is_some(), "missing {:?}", entry);
        }
        assert_eq!(color_for(ThemeEntry::Warn, &theme), Some(AnsiColors::Yellow));
    }

    #[test]
    fn partial_theme_file_keeps_defaults() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "warn:\n  fg: brightred\ninfo:\n  fg: ~")?;
        let theme = ThemeStyle::load_from_file(file.path())?;
        assert_eq!(color_for(ThemeEntry::Warn, &theme), Some(AnsiColors::BrightRed));
        assert_eq!(color_for(ThemeEntry::Info, &theme), None);
        assert_eq!(color_for(ThemeEntry::Error, &theme), Some(AnsiColors::Red));
        Ok(())
    }

    #[test]
    fn theme_round_trips_through_yaml() -> Result<()> {
        let theme = ThemeStyle::default_theme_map();
        let text = serde_yml::to_string(&theme)?;
        assert!(text.contains("brightblue"));
        let parsed: ThemeMap = serde_yml::from_str(&text)?;
        assert_eq!(parsed, theme);
        Ok(())
    }

    #[test]
    fn table_colors_follow_ansi_brightness() {
        let plain: ThemeColor = "red".parse().unwrap();
        let bright: ThemeColor = "brightred".parse().unwrap();
        assert_eq!(plain.to_table_color(), TableColor::DarkRed);
        assert_eq!(bright.to_table_color(), TableColor::Red);
        assert_eq!(bright.name(), "brightred");
    }

    #[test]
    fn invalid_theme_color_is_rejected() -> Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        writeln!(file, "warn:\n  fg: chartreuse")?;
        assert!(ThemeStyle::load_from_file(file.path()).is_err());
        Ok(())
    }
}
