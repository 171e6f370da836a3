//! Name value types.
//!
//! `PartialName` fragments only live while a standard name is assembled;
//! `FullName` is what the generator hands out and the formatter renders.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::NameError;

/// Grammatical gender attached to first names and pre-formed full names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Masculine names.
    Male,
    /// Feminine names.
    Female,
}

impl Gender {
    /// Both genders, in the order sources are loaded.
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Suffix used in record source keys (`m` or `f`).
    #[must_use]
    pub const fn key_suffix(self) -> &'static str {
        match self {
            Self::Male => "m",
            Self::Female => "f",
        }
    }

    /// Returns `true` when `filter` admits this gender (`None` admits both).
    #[must_use]
    pub fn matches(self, filter: Option<Self>) -> bool {
        filter.is_none_or(|wanted| wanted == self)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => f.write_str("male"),
            Self::Female => f.write_str("female"),
        }
    }
}

/// Error returned when a string names neither gender.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender '{0}' (expected 'male' or 'female')")]
pub struct ParseGenderError(String);

impl FromStr for Gender {
    type Err = ParseGenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(ParseGenderError(s.to_owned())),
        }
    }
}

/// A first-name or surname fragment from the standard pools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialName {
    text: String,
    gender: Option<Gender>,
}

impl PartialName {
    /// Creates a fragment. Surnames carry no gender.
    #[must_use]
    pub fn new(text: impl Into<String>, gender: Option<Gender>) -> Self {
        Self {
            text: text.into(),
            gender,
        }
    }

    /// The fragment text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The fragment gender, if any.
    #[must_use]
    pub const fn gender(&self) -> Option<Gender> {
        self.gender
    }
}

/// A generated full name.
///
/// The surname may itself be a hyphen-joined composite (`Tremblay-Gagnon`).
///
/// # Example
///
/// ```
/// use qngng::{FullName, Gender};
///
/// let name = FullName::new("Jean", "Tremblay", Gender::Male).with_middle_name("Pierre");
///
/// assert_eq!(name.middle_initial().as_deref(), Ok("P"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullName {
    given_name: String,
    surname: String,
    gender: Gender,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    middle_name: Option<String>,
}

impl FullName {
    /// Creates a full name without a middle name.
    #[must_use]
    pub fn new(given_name: impl Into<String>, surname: impl Into<String>, gender: Gender) -> Self {
        Self {
            given_name: given_name.into(),
            surname: surname.into(),
            gender,
            middle_name: None,
        }
    }

    /// Returns the same name with `middle_name` attached.
    #[must_use]
    pub fn with_middle_name(self, middle_name: impl Into<String>) -> Self {
        Self {
            middle_name: Some(middle_name.into()),
            ..self
        }
    }

    /// The given (first) name.
    #[must_use]
    pub fn given_name(&self) -> &str {
        &self.given_name
    }

    /// The surname, possibly a hyphenated composite.
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// The gender of the given name.
    #[must_use]
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// The middle name, if one was drawn. Empty strings count as absent.
    #[must_use]
    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref().filter(|m| !m.is_empty())
    }

    /// Uppercased first character of the middle name.
    ///
    /// # Errors
    ///
    /// Returns [`NameError::MissingMiddleName`] when there is no middle name;
    /// callers are expected to check [`FullName::middle_name`] first.
    pub fn middle_initial(&self) -> Result<String, NameError> {
        self.middle_name()
            .and_then(initial_of)
            .ok_or(NameError::MissingMiddleName)
    }
}

/// Uppercased first character of `text`, if it has one.
pub(crate) fn initial_of(text: &str) -> Option<String> {
    text.chars().next().map(|c| c.to_uppercase().collect())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[test]
    fn middle_initial_is_uppercased_first_character() {
        let name = FullName::new("Jean", "Tremblay", Gender::Male).with_middle_name("pierre");
        assert_eq!(name.middle_initial(), Ok("P".to_owned()));
    }

    #[test]
    fn middle_initial_keeps_diacritics() {
        let name = FullName::new("Marie", "Roy", Gender::Female).with_middle_name("émilie");
        assert_eq!(name.middle_initial(), Ok("É".to_owned()));
    }

    #[rstest]
    #[case::absent(FullName::new("Jean", "Tremblay", Gender::Male))]
    #[case::empty(FullName::new("Jean", "Tremblay", Gender::Male).with_middle_name(""))]
    fn middle_initial_requires_middle_name(#[case] name: FullName) {
        assert_eq!(name.middle_initial(), Err(NameError::MissingMiddleName));
    }

    #[rstest]
    #[case("male", Gender::Male)]
    #[case("female", Gender::Female)]
    fn parses_gender(#[case] raw: &str, #[case] expected: Gender) {
        assert_eq!(raw.parse::<Gender>(), Ok(expected));
    }

    #[rstest]
    #[case("other")]
    #[case("MALE")]
    #[case("Female")]
    fn rejects_anything_but_lowercase_gender(#[case] raw: &str) {
        assert_eq!(
            raw.parse::<Gender>(),
            Err(ParseGenderError(raw.to_owned()))
        );
    }

    #[rstest]
    #[case(Gender::Male, None, true)]
    #[case(Gender::Male, Some(Gender::Male), true)]
    #[case(Gender::Male, Some(Gender::Female), false)]
    fn gender_filter_matching(
        #[case] gender: Gender,
        #[case] filter: Option<Gender>,
        #[case] expected: bool,
    ) {
        assert_eq!(gender.matches(filter), expected);
    }

    #[test]
    fn full_name_serializes_to_camel_case() {
        let name = FullName::new("Jean", "Tremblay", Gender::Male);
        let json = serde_json::to_string(&name).expect("serialize");
        assert_eq!(
            json,
            r#"{"givenName":"Jean","surname":"Tremblay","gender":"male"}"#
        );
    }
}
