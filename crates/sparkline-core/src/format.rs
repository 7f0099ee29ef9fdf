// File: crates/sparkline-core/src/format.rs
// Summary: Display formatting of the headline value (host formatter, number pattern, locale default).
// Notes:
// - The strategy is resolved once per render into a `ValueFormatter`.
// - Formatting never fails: a missing host formatter or a bad pattern falls back.

use std::collections::HashMap;
use std::fmt;

use log::warn;
use thiserror::Error;

/// Per-field formatters supplied by the host (its native formatting rules).
pub trait FieldFormatters {
    /// Format `value` for `field`; `None` when the host has no formatter for it.
    fn format(&self, field: &str, value: f64) -> Option<String>;

    fn has_formatter(&self, field: &str) -> bool;
}

type FormatFn = Box<dyn Fn(f64) -> String>;

/// Map of field name to formatting closure.
#[derive(Default)]
pub struct FormatterMap {
    inner: HashMap<String, FormatFn>,
}

impl FormatterMap {
    pub fn new() -> Self { Self::default() }

    pub fn with(mut self, field: impl Into<String>, f: impl Fn(f64) -> String + 'static) -> Self {
        self.inner.insert(field.into(), Box::new(f));
        self
    }
}

impl fmt::Debug for FormatterMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inner.keys()).finish()
    }
}

impl FieldFormatters for FormatterMap {
    fn format(&self, field: &str, value: f64) -> Option<String> {
        self.inner.get(field).map(|f| f(value))
    }

    fn has_formatter(&self, field: &str) -> bool { self.inner.contains_key(field) }
}

/// Formatting strategy for one render.
pub enum ValueFormatter<'a> {
    /// The host's own formatter for the value field.
    Host { formatters: &'a dyn FieldFormatters, field: &'a str },
    /// A configured number pattern such as `#,##0.0`.
    Pattern(NumberPattern),
    /// Locale-aware default stringification.
    Locale,
}

impl<'a> ValueFormatter<'a> {
    /// Pick the strategy: host formatter for `field` if present, else the
    /// configured pattern if it parses, else the locale default.
    pub fn resolve(host: Option<&'a dyn FieldFormatters>, field: &'a str, pattern: Option<&str>) -> Self {
        if let Some(formatters) = host.filter(|h| h.has_formatter(field)) {
            return ValueFormatter::Host { formatters, field };
        }
        match pattern.map(NumberPattern::parse) {
            Some(Ok(p)) => ValueFormatter::Pattern(p),
            Some(Err(e)) => {
                warn!("value format ignored: {e}");
                ValueFormatter::Locale
            }
            None => ValueFormatter::Locale,
        }
    }

    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormatter::Host { formatters, field } => {
                formatters.format(field, value).unwrap_or_else(|| format_locale(value))
            }
            ValueFormatter::Pattern(p) => p.format(value),
            ValueFormatter::Locale => format_locale(value),
        }
    }
}

impl fmt::Debug for ValueFormatter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueFormatter::Host { field, .. } => f.debug_struct("Host").field("field", field).finish(),
            ValueFormatter::Pattern(p) => f.debug_tuple("Pattern").field(p).finish(),
            ValueFormatter::Locale => f.write_str("Locale"),
        }
    }
}

/// Default numeric stringification (en-US): grouped thousands, at most three
/// fraction digits, trailing zeros trimmed.
pub fn format_locale(value: f64) -> String {
    if let Some(s) = non_finite(value) { return s; }
    render_number(value, 1, 0, 3, true)
}

fn non_finite(value: f64) -> Option<String> {
    if value.is_nan() { return Some("NaN".to_string()); }
    if value.is_infinite() {
        return Some(if value > 0.0 { "∞".to_string() } else { "-∞".to_string() });
    }
    None
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern '{0}' has no digit placeholders")]
    NoDigits(String),
    #[error("pattern '{0}' has more than one decimal point")]
    MultipleDecimalPoints(String),
    #[error("pattern '{0}' has an unterminated quoted literal")]
    UnterminatedQuote(String),
}

/// Spreadsheet-style number pattern: `[prefix] #,##0.00 [%] [suffix]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberPattern {
    pub prefix: String,
    pub suffix: String,
    pub min_int_digits: usize,
    pub min_frac_digits: usize,
    pub max_frac_digits: usize,
    pub grouping: bool,
    pub percent: bool,
}

impl NumberPattern {
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let mut p = NumberPattern {
            prefix: String::new(),
            suffix: String::new(),
            min_int_digits: 0,
            min_frac_digits: 0,
            max_frac_digits: 0,
            grouping: false,
            percent: false,
        };
        let mut seen_digits = false;
        let mut in_fraction = false;
        let mut chars = pattern.chars();
        while let Some(c) = chars.next() {
            let literal = match c {
                '#' | '0' => {
                    seen_digits = true;
                    if in_fraction {
                        p.max_frac_digits += 1;
                        if c == '0' { p.min_frac_digits = p.max_frac_digits; }
                    } else if c == '0' {
                        p.min_int_digits += 1;
                    }
                    continue;
                }
                ',' if seen_digits && !in_fraction => {
                    p.grouping = true;
                    continue;
                }
                '.' if seen_digits || chars.clone().next().is_some_and(|n| n == '0' || n == '#') => {
                    if in_fraction { return Err(PatternError::MultipleDecimalPoints(pattern.to_string())); }
                    in_fraction = true;
                    seen_digits = true;
                    continue;
                }
                '%' => {
                    p.percent = true;
                    "%".to_string()
                }
                '"' => {
                    let mut lit = String::new();
                    loop {
                        match chars.next() {
                            Some('"') => break,
                            Some(ch) => lit.push(ch),
                            None => return Err(PatternError::UnterminatedQuote(pattern.to_string())),
                        }
                    }
                    lit
                }
                '\\' => chars.next().map(String::from).unwrap_or_default(),
                other => other.to_string(),
            };
            if seen_digits { p.suffix.push_str(&literal); } else { p.prefix.push_str(&literal); }
        }
        if !seen_digits {
            return Err(PatternError::NoDigits(pattern.to_string()));
        }
        Ok(p)
    }

    pub fn format(&self, value: f64) -> String {
        if let Some(s) = non_finite(value) { return s; }
        let scaled = if self.percent { value * 100.0 } else { value };
        let body = render_number(scaled, self.min_int_digits, self.min_frac_digits, self.max_frac_digits, self.grouping);
        match body.strip_prefix('-') {
            Some(unsigned) => format!("-{}{}{}", self.prefix, unsigned, self.suffix),
            None => format!("{}{}{}", self.prefix, body, self.suffix),
        }
    }
}

/// Round `value` to `max_frac` decimals and lay it out with the given digit rules.
fn render_number(value: f64, min_int: usize, min_frac: usize, max_frac: usize, grouping: bool) -> String {
    let fixed = format!("{:.*}", max_frac, value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut frac = frac_part.to_string();
    while frac.len() > min_frac && frac.ends_with('0') { frac.pop(); }

    let int_trimmed = int_part.trim_start_matches('0');
    let mut int = if int_trimmed.len() < min_int {
        format!("{}{}", "0".repeat(min_int - int_trimmed.len()), int_trimmed)
    } else {
        int_trimmed.to_string()
    };
    if grouping { int = group_thousands(&int); }
    if int.is_empty() && frac.is_empty() { int.push('0'); }

    let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    if frac.is_empty() {
        format!("{sign}{int}")
    } else {
        format!("{sign}{int}.{frac}")
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 { out.push(','); }
        out.push(ch);
    }
    out
}
