//! Error types for the qngng crate.
//!
//! Each concern gets its own `thiserror` enum so callers can tell a
//! corrupted data source apart from a request that the pools cannot satisfy.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::category::Category;
use crate::name::Gender;
use crate::pool::PoolKind;

/// Errors raised by name value accessors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    /// A middle initial was requested from a name without a middle name.
    #[error("full name has no middle name to take an initial from")]
    MissingMiddleName,
}

/// Errors raised while loading records from a source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The source exists but its content is not a JSON array of records.
    #[error("malformed record source '{key}': {message}")]
    Malformed {
        /// Source key, e.g. `std-names-m`.
        key: String,
        /// Description of the parse error.
        message: String,
    },

    /// The source exists but could not be read.
    #[error("failed to read record source at '{path}': {message}")]
    Io {
        /// Path of the source file.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },
}

/// Errors raised when generation options contradict the available pools.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No category was requested.
    #[error("at least one category is required")]
    NoCategories,

    /// A standard-only option was requested without the `std` category.
    #[error("cannot request a {option} without the `std` category")]
    RequiresStd {
        /// Human-readable option name.
        option: &'static str,
    },
}

/// Errors raised while drawing a name from the pools.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SampleError {
    /// A standard pool holds fewer distinct entries than the draw needs.
    #[error("{pool} pool has {available} entries but {requested} distinct entries were requested")]
    InsufficientData {
        /// Pool that ran short.
        pool: PoolKind,
        /// Number of distinct entries requested.
        requested: usize,
        /// Number of entries in the pool.
        available: usize,
    },

    /// A pre-formed category has no entry for the gender filter in force.
    #[error("category `{category}` has no names{}", gender_suffix(.gender.as_ref()))]
    EmptyCategory {
        /// Category that was drawn.
        category: Category,
        /// Gender filter the pools were built with.
        gender: Option<Gender>,
    },

    /// There is no category to draw from.
    #[error("no category to draw a name from")]
    NoCategories,

    /// A first-name entry without a gender reached the sampler.
    #[error("first name '{name}' has no gender")]
    UngenderedGivenName {
        /// Text of the offending entry.
        name: String,
    },
}

fn gender_suffix(gender: Option<&Gender>) -> String {
    gender.map_or_else(String::new, |g| format!(" for gender {g}"))
}

/// Errors raised by the wheel animation.
#[derive(Debug, Error)]
pub enum WheelError {
    /// Writing to the output sink failed.
    #[error("failed to write wheel output: {0}")]
    Io(#[from] io::Error),

    /// Drawing the next name failed.
    #[error(transparent)]
    Sample(#[from] SampleError),
}
