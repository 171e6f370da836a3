//! Rendering a [`FullName`] as text.
//!
//! # Formats
//!
//! - `Default`: parts joined with spaces, unchanged.
//! - `Snake` / `Kebab`: diacritics stripped, lowercased, every character
//!   outside `[a-z0-9_]` replaced with `_` or `-`.
//! - `Camel` / `CapCamel`: diacritics stripped, case kept, every character
//!   outside `[a-zA-Z0-9_]` deleted; `Camel` lowercases the first character.

use std::fmt;
use std::str::FromStr;

use unicode_normalization::UnicodeNormalization;

use crate::name::{FullName, initial_of};

/// Output format of a rendered name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// `Jean P. Tremblay`
    #[default]
    Default,
    /// `jean_p_tremblay`
    Snake,
    /// `jean-p-tremblay`
    Kebab,
    /// `jeanPTremblay`
    Camel,
    /// `JeanPTremblay`
    CapCamel,
}

impl Format {
    /// Every format.
    pub const ALL: [Self; 5] = [
        Self::Default,
        Self::Snake,
        Self::Kebab,
        Self::Camel,
        Self::CapCamel,
    ];

    const fn key(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Snake => "snake",
            Self::Kebab => "kebab",
            Self::Camel => "camel",
            Self::CapCamel => "cap-camel",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned for an unknown format name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown format '{0}'")]
pub struct UnknownFormat(String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.key() == s)
            .ok_or_else(|| UnknownFormat(s.to_owned()))
    }
}

/// Renders `name` in `format`.
///
/// A middle name, when present, is rendered as its initial (followed by a
/// period in the default format only) if `with_middle_initial` is set, and
/// in full otherwise.
///
/// # Examples
///
/// ```
/// use qngng::{Format, FullName, Gender, format_name};
///
/// let name = FullName::new("Jean", "Tremblay", Gender::Male).with_middle_name("Pierre");
///
/// assert_eq!(format_name(&name, Format::Default, true), "Jean P. Tremblay");
/// assert_eq!(format_name(&name, Format::Camel, true), "jeanPTremblay");
/// assert_eq!(format_name(&name, Format::Snake, false), "jean_pierre_tremblay");
/// ```
#[must_use]
pub fn format_name(name: &FullName, format: Format, with_middle_initial: bool) -> String {
    let raw = raw_name(name, format, with_middle_initial);

    match format {
        Format::Default => raw,
        Format::Snake => normalize(&raw, "_", true),
        Format::Kebab => normalize(&raw, "-", true),
        Format::Camel => lowercase_first(&normalize(&raw, "", false)),
        Format::CapCamel => normalize(&raw, "", false),
    }
}

fn raw_name(name: &FullName, format: Format, with_middle_initial: bool) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(3);

    if !name.given_name().is_empty() {
        parts.push(name.given_name().to_owned());
    }

    if let Some(middle) = name.middle_name() {
        if with_middle_initial {
            let mut initial = initial_of(middle).unwrap_or_default();
            if format == Format::Default {
                initial.push('.');
            }
            parts.push(initial);
        } else {
            parts.push(middle.to_owned());
        }
    }

    if !name.surname().is_empty() {
        parts.push(name.surname().to_owned());
    }

    parts.join(" ")
}

/// Strips diacritics using compatibility decomposition, dropping every
/// character that is not ASCII afterwards.
///
/// # Examples
///
/// ```
/// use qngng::strip_diacritics;
///
/// assert_eq!(strip_diacritics("Hélène Côté"), "Helene Cote");
/// ```
#[must_use]
pub fn strip_diacritics(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}

/// Strips diacritics, optionally lowercases, then replaces every character
/// outside `[a-zA-Z0-9_]` with `separator` (which may be empty).
fn normalize(text: &str, separator: &str, lowercase: bool) -> String {
    let mut stripped = strip_diacritics(text);
    if lowercase {
        stripped.make_ascii_lowercase();
    }

    let mut out = String::with_capacity(stripped.len());
    for c in stripped.chars() {
        if is_word_char(c) {
            out.push(c);
        } else {
            out.push_str(separator);
        }
    }
    out
}

const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}
