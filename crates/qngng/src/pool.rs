//! Name pools built once per generation session.
//!
//! The standard category keeps two independent pools (first names and
//! surnames) that the sampler combines at draw time. Every other category is
//! expanded into a flat list of ready-made [`FullName`] values.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use tracing::{debug, warn};

use crate::category::Category;
use crate::error::RecordError;
use crate::name::{FullName, Gender, PartialName};
use crate::source::{Record, RecordSource, record_key};

const STD_NAMES: &str = "std-names";
const STD_SURNAMES: &str = "std-surnames";

/// Which standard pool a draw came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    /// First names (also used for middle names).
    FirstNames,
    /// Surname fragments.
    Surnames,
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstNames => f.write_str("first-name"),
            Self::Surnames => f.write_str("surname"),
        }
    }
}

/// Read-only pools for one generation session.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
///
/// use qngng::{Category, Gender, MemorySource, NamePools};
///
/// let source = MemorySource::new()
///     .with_names("std-names-m", &["Jean"])
///     .with_names("std-names-f", &["Marie"])
///     .with_surnames("std-surnames", &["Tremblay"]);
///
/// let pools = NamePools::build(&source, Some(Gender::Male), &BTreeSet::from([Category::Std]))
///     .expect("pools build");
///
/// assert_eq!(pools.first_names().len(), 1);
/// assert!(pools.has_std());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePools {
    gender_filter: Option<Gender>,
    first_names: Vec<PartialName>,
    surnames: Vec<PartialName>,
    categories: BTreeMap<Category, Vec<FullName>>,
}

impl NamePools {
    /// Loads the standard pools plus one list per requested category.
    ///
    /// `std` is registered with an empty placeholder list; the sampler
    /// composes standard names from the first-name and surname pools instead.
    ///
    /// # Errors
    ///
    /// Returns [`RecordError`] if any source exists but cannot be read or
    /// parsed.
    pub fn build<S>(
        source: &S,
        gender_filter: Option<Gender>,
        categories: &BTreeSet<Category>,
    ) -> Result<Self, RecordError>
    where
        S: RecordSource + ?Sized,
    {
        let mut first_names = Vec::new();
        for gender in wanted_genders(gender_filter) {
            let key = record_key(STD_NAMES, Some(gender));
            let records = source.load(&key)?;
            first_names.extend(collect_kept(&key, records, |record| {
                non_blank(record.name).map(|text| PartialName::new(text, Some(gender)))
            }));
        }

        let records = source.load(STD_SURNAMES)?;
        let surnames = collect_kept(STD_SURNAMES, records, |record| {
            non_blank(record.surname).map(|text| PartialName::new(text, None))
        });

        let mut pools = BTreeMap::new();
        for &category in categories {
            let names = if category.is_std() {
                Vec::new()
            } else {
                load_category(source, category, gender_filter)?
            };
            pools.insert(category, names);
        }

        debug!(
            first_names = first_names.len(),
            surnames = surnames.len(),
            categories = pools.len(),
            "name pools built"
        );

        Ok(Self {
            gender_filter,
            first_names,
            surnames,
            categories: pools,
        })
    }

    /// Gender filter the pools were built with.
    #[must_use]
    pub const fn gender_filter(&self) -> Option<Gender> {
        self.gender_filter
    }

    /// Standard first-name pool.
    #[must_use]
    pub fn first_names(&self) -> &[PartialName] {
        &self.first_names
    }

    /// Standard surname pool.
    #[must_use]
    pub fn surnames(&self) -> &[PartialName] {
        &self.surnames
    }

    /// Pre-formed names of `category`; `None` when it was not requested.
    #[must_use]
    pub fn category(&self, category: Category) -> Option<&[FullName]> {
        self.categories.get(&category).map(Vec::as_slice)
    }

    /// Requested categories, in key order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.categories.keys().copied()
    }

    /// Returns `true` when `std` is among the requested categories.
    #[must_use]
    pub fn has_std(&self) -> bool {
        self.categories.contains_key(&Category::Std)
    }
}

fn wanted_genders(filter: Option<Gender>) -> impl Iterator<Item = Gender> {
    Gender::ALL.into_iter().filter(move |g| g.matches(filter))
}

fn load_category<S>(
    source: &S,
    category: Category,
    gender_filter: Option<Gender>,
) -> Result<Vec<FullName>, RecordError>
where
    S: RecordSource + ?Sized,
{
    let mut names = Vec::new();
    for gender in wanted_genders(gender_filter) {
        let key = record_key(category.key(), Some(gender));
        let records = source.load(&key)?;
        names.extend(collect_kept(&key, records, |record| {
            let given = non_blank(record.name)?;
            let surname = non_blank(record.surname)?;
            Some(FullName::new(given, surname, gender))
        }));
    }
    if names.is_empty() {
        warn!(%category, gender = ?gender_filter, "requested category has no names");
    }
    Ok(names)
}

/// Maps records through `keep`, dropping those it rejects.
fn collect_kept<T>(key: &str, records: Vec<Record>, keep: impl Fn(Record) -> Option<T>) -> Vec<T> {
    let total = records.len();
    let kept: Vec<T> = records.into_iter().filter_map(keep).collect();
    debug!(
        key,
        kept = kept.len(),
        skipped = total - kept.len(),
        "records loaded"
    );
    kept
}

fn non_blank(field: Option<String>) -> Option<String> {
    field.filter(|text| !text.trim().is_empty())
}
