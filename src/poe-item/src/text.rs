//! Text segmentation for copied item tooltips
//!
//! Tooltip text is a list of lines split into groups by a literal
//! `--------` marker line. Everything in here is a pure string transform:
//! no keywords, no catalog lookups.

use once_cell::sync::Lazy;
use regex::Regex;

/// Literal line separating property groups in a tooltip
pub const SEPARATOR: &str = "--------";

/// `+15(10-20)`: a rolled value followed by its roll range (advanced copy)
static VALUE_WITH_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([+-]?\d+(?:[.,]\d+)?)\([+-]?\d+(?:[.,]\d+)?-[+-]?\d+(?:[.,]\d+)?\)")
        .expect("value-with-range pattern is valid")
});

/// `(10-20)` with no rolled value in front of it
static BARE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\([+-]?\d+(?:[.,]\d+)?-[+-]?\d+(?:[.,]\d+)?\)").expect("range pattern is valid")
});

static NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+(?:[.,]\d+)?").expect("number pattern is valid"));

static SIGNED_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+-]?\d+(?:[.,]\d+)?").expect("signed number pattern is valid"));

static INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+-]?\d+").expect("integer pattern is valid"));

static DAMAGE_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)-(\d+)").expect("damage range pattern is valid"));

/// A tooltip split into trimmed, non-empty lines and separator groups.
///
/// Borrowed from the source text; building one never fails, an empty or
/// whitespace-only input simply has no lines.
#[derive(Debug, Clone)]
pub struct ItemBlock<'a> {
    text: &'a str,
    lines: Vec<&'a str>,
    groups: Vec<Vec<&'a str>>,
}

impl<'a> ItemBlock<'a> {
    pub fn new(text: &'a str) -> Self {
        let lines: Vec<&'a str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let mut groups = Vec::new();
        let mut current = Vec::new();
        for line in &lines {
            if *line == SEPARATOR {
                if !current.is_empty() {
                    groups.push(std::mem::take(&mut current));
                }
            } else {
                current.push(*line);
            }
        }
        if !current.is_empty() {
            groups.push(current);
        }

        Self {
            text,
            lines,
            groups,
        }
    }

    /// The verbatim source text
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// All non-empty lines, separators included
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line groups between separators; never contains an empty group
    pub fn groups(&self) -> &[Vec<&'a str>] {
        &self.groups
    }

    /// First group: rarity, name and type lines
    pub fn header(&self) -> &[&'a str] {
        self.groups.first().map_or(&[], Vec::as_slice)
    }

    /// True if any line is exactly `line`
    pub fn has_line(&self, line: &str) -> bool {
        !line.is_empty() && self.lines.iter().any(|l| *l == line)
    }

    /// True if any line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        !needle.is_empty() && self.lines.iter().any(|l| l.contains(needle))
    }

    /// Value of the first line starting with `prefix`, prefix removed.
    ///
    /// First occurrence wins: gem level lines precede the requirements group,
    /// which repeats the same `Level:` prefix.
    pub fn property(&self, prefix: &str) -> Option<&'a str> {
        if prefix.is_empty() {
            return None;
        }
        self.lines
            .iter()
            .find_map(|line| line.strip_prefix(prefix))
            .map(str::trim)
    }
}

/// A stat line split into what is shown, what is looked up, and its numbers
#[derive(Debug, Clone, PartialEq)]
pub struct StatText {
    /// Source line with roll ranges removed, numbers untouched
    pub text: String,
    /// Lookup form: every number replaced by `#`
    pub template: String,
    /// Numbers in order of appearance
    pub values: Vec<f64>,
}

/// Normalize a stat line for identity lookup.
///
/// `+15(10-20) to maximum Life` and `+15 to maximum Life` both give the
/// template `+# to maximum Life` and the value `15`. A bare range such as
/// `+(10-20) to maximum Life` becomes `#` in the template and contributes no
/// value. Returns `None` if a number cannot be read.
pub fn normalize_stat_line(line: &str) -> Option<StatText> {
    let text = VALUE_WITH_RANGE.replace_all(line, "${1}").into_owned();
    let without_ranges = BARE_RANGE.replace_all(&text, "#");
    let template = number_placeholders(&without_ranges);
    let values = SIGNED_NUMBER
        .find_iter(&without_ranges)
        .map(|m| parse_number(m.as_str()))
        .collect::<Option<Vec<_>>>()?;

    Some(StatText {
        text,
        template,
        values,
    })
}

/// Replace every number with `#`: `Has 1 Abyssal Socket` -> `Has # Abyssal Socket`
pub fn number_placeholders(text: &str) -> String {
    NUMBER.replace_all(text, "#").into_owned()
}

/// Parse a number written with either `.` or `,` as decimal separator
pub fn parse_number(text: &str) -> Option<f64> {
    text.trim().replace(',', ".").parse::<f64>().ok()
}

/// First number in a property value, e.g. `6.50%` -> 6.5
pub fn first_number(value: &str) -> Option<f64> {
    SIGNED_NUMBER
        .find(value)
        .and_then(|m| parse_number(m.as_str()))
}

/// First integer in a property value, e.g. `+20% (augmented)` -> 20
pub fn first_integer(value: &str) -> Option<i64> {
    INTEGER.find(value).and_then(|m| m.as_str().parse().ok())
}

/// All `min-max` pairs in a property value, e.g. `10-20 (augmented), 3-5`
pub fn damage_ranges(value: &str) -> Vec<(u32, u32)> {
    DAMAGE_RANGE
        .captures_iter(value)
        .filter_map(|caps| Some((caps[1].parse().ok()?, caps[2].parse().ok()?)))
        .collect()
}

/// Read a grouped count such as `242,923,155` ignoring separators
pub fn grouped_integer(value: &str) -> Option<u64> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Format a computed value: integral values without a fraction, others
/// with at most two decimals.
pub fn format_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let formatted = format!("{:.2}", value);
        formatted.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
