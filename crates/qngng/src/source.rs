//! Record sources.
//!
//! A source maps a key such as `std-names-m` or `uda-hosts-f` to a list of
//! raw records. A key with no backing data is not an error: a category may
//! simply not define one gender. Content that exists but does not parse is.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;

use crate::error::RecordError;
use crate::name::Gender;

/// A raw entry from a record source. Either field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Record {
    /// Given name.
    #[serde(default)]
    pub name: Option<String>,
    /// Surname.
    #[serde(default)]
    pub surname: Option<String>,
}

impl Record {
    /// Creates a record from optional parts.
    #[must_use]
    pub fn new(name: Option<&str>, surname: Option<&str>) -> Self {
        Self {
            name: name.map(str::to_owned),
            surname: surname.map(str::to_owned),
        }
    }
}

/// Keyed lookup of raw records.
pub trait RecordSource {
    /// Loads the records stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] when the source exists but cannot be read or
    /// parsed. A missing source yields `Ok(vec![])`.
    fn load(&self, key: &str) -> Result<Vec<Record>, RecordError>;
}

/// Builds a source key: `{base}-m`, `{base}-f`, or `base` when ungendered.
#[must_use]
pub fn record_key(base: &str, gender: Option<Gender>) -> String {
    match gender {
        Some(g) => format!("{base}-{}", g.key_suffix()),
        None => base.to_owned(),
    }
}

/// Parses the JSON content of the source stored under `key`.
///
/// # Errors
///
/// Returns [`RecordError::Malformed`] when `json` is not an array of
/// objects.
pub fn parse_records(key: &str, json: &str) -> Result<Vec<Record>, RecordError> {
    serde_json::from_str(json).map_err(|e| RecordError::Malformed {
        key: key.to_owned(),
        message: e.to_string(),
    })
}

macro_rules! packaged {
    ($($key:literal),* $(,)?) => {
        &[$(($key, include_str!(concat!("../data/", $key, ".json")))),*]
    };
}

const PACKAGED: &[(&str, &str)] = packaged![
    "std-names-m",
    "std-names-f",
    "std-surnames",
    "uda-actors-m",
    "uda-actors-f",
    "uda-hosts-m",
    "uda-hosts-f",
    "uda-singers-m",
    "uda-singers-f",
    "sn-m",
    "sn-f",
    "d31-m",
    "d31-f",
    "dug-m",
];

/// The name lists compiled into the crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedSource;

impl EmbeddedSource {
    /// Keys with packaged data.
    pub fn keys() -> impl Iterator<Item = &'static str> {
        PACKAGED.iter().map(|(key, _)| *key)
    }
}

impl RecordSource for EmbeddedSource {
    fn load(&self, key: &str) -> Result<Vec<Record>, RecordError> {
        PACKAGED
            .iter()
            .find(|(k, _)| *k == key)
            .map_or_else(|| Ok(Vec::new()), |(k, json)| parse_records(k, json))
    }
}

/// Name lists read from `{key}.json` files in a directory.
#[derive(Debug)]
pub struct DirSource {
    root: PathBuf,
    dir: Dir,
}

impl DirSource {
    /// Opens `root` for reading.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError::Io`] if the directory cannot be opened.
    pub fn open(root: &Path) -> Result<Self, RecordError> {
        let dir = Dir::open_ambient_dir(root, ambient_authority()).map_err(|e| {
            RecordError::Io {
                path: root.to_path_buf(),
                message: e.to_string(),
            }
        })?;
        Ok(Self {
            root: root.to_path_buf(),
            dir,
        })
    }

    /// The directory this source reads from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl RecordSource for DirSource {
    fn load(&self, key: &str) -> Result<Vec<Record>, RecordError> {
        let file_name = format!("{key}.json");
        match self.dir.read_to_string(&file_name) {
            Ok(contents) => parse_records(key, &contents),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(RecordError::Io {
                path: self.root.join(file_name),
                message: e.to_string(),
            }),
        }
    }
}

/// In-memory records keyed like the packaged sources.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: HashMap<String, Vec<Record>>,
}

impl MemorySource {
    /// Creates an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `records` under `key`, replacing any previous list.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, records: Vec<Record>) -> Self {
        self.records.insert(key.into(), records);
        self
    }

    /// Stores given-name-only records under `key`.
    #[must_use]
    pub fn with_names(self, key: impl Into<String>, names: &[&str]) -> Self {
        let records = names.iter().map(|n| Record::new(Some(*n), None)).collect();
        self.with(key, records)
    }

    /// Stores surname-only records under `key`.
    #[must_use]
    pub fn with_surnames(self, key: impl Into<String>, surnames: &[&str]) -> Self {
        let records = surnames
            .iter()
            .map(|s| Record::new(None, Some(*s)))
            .collect();
        self.with(key, records)
    }
}

impl RecordSource for MemorySource {
    fn load(&self, key: &str) -> Result<Vec<Record>, RecordError> {
        Ok(self.records.get(key).cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("std-surnames", None, "std-surnames")]
    #[case("uda-hosts", Some(Gender::Male), "uda-hosts-m")]
    #[case("d31", Some(Gender::Female), "d31-f")]
    fn builds_record_keys(
        #[case] base: &str,
        #[case] gender: Option<Gender>,
        #[case] expected: &str,
    ) {
        assert_eq!(record_key(base, gender), expected);
    }

    #[test]
    fn parses_records_with_optional_fields() {
        let json = r#"[{"name": "Jean"}, {"surname": "Tremblay"}, {"name": "Ti-Guy", "surname": "Émond", "note": "ignored"}]"#;
        let records = parse_records("test", json).expect("valid records");
        assert_eq!(
            records,
            vec![
                Record::new(Some("Jean"), None),
                Record::new(None, Some("Tremblay")),
                Record::new(Some("Ti-Guy"), Some("Émond")),
            ]
        );
    }

    #[rstest]
    #[case::not_json("not json")]
    #[case::not_an_array(r#"{"name": "Jean"}"#)]
    #[case::wrong_field_type(r#"[{"name": 42}]"#)]
    fn rejects_malformed_content(#[case] json: &str) {
        let result = parse_records("broken", json);
        assert!(matches!(
            result,
            Err(RecordError::Malformed { ref key, .. }) if key == "broken"
        ));
    }

    #[test]
    fn every_packaged_source_parses() {
        for key in EmbeddedSource::keys() {
            let records = EmbeddedSource.load(key).expect("packaged data parses");
            assert!(!records.is_empty(), "{key} is empty");
        }
    }

    #[test]
    fn embedded_source_yields_nothing_for_absent_key() {
        assert_eq!(EmbeddedSource.load("dug-f"), Ok(Vec::new()));
    }

    #[test]
    fn dir_source_reads_and_tolerates_missing_files() {
        let tmp = tempfile::tempdir().expect("temp dir");
        std::fs::write(tmp.path().join("sn-m.json"), r#"[{"name": "Jean", "surname": "Talon"}]"#)
            .expect("write source");
        let source = DirSource::open(tmp.path()).expect("open dir");

        assert_eq!(
            source.load("sn-m"),
            Ok(vec![Record::new(Some("Jean"), Some("Talon"))])
        );
        assert_eq!(source.load("sn-f"), Ok(Vec::new()));
    }

    #[test]
    fn dir_source_reports_malformed_files() {
        let tmp = tempfile::tempdir().expect("temp dir");
        std::fs::write(tmp.path().join("std-surnames.json"), "[{").expect("write source");
        let source = DirSource::open(tmp.path()).expect("open dir");

        assert!(matches!(
            source.load("std-surnames"),
            Err(RecordError::Malformed { .. })
        ));
    }

    #[test]
    fn dir_source_rejects_missing_directory() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let missing = tmp.path().join("nowhere");
        assert!(matches!(
            DirSource::open(&missing),
            Err(RecordError::Io { .. })
        ));
    }
}
