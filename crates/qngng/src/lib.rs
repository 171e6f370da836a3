//! Québécois name generator.
//!
//! Produces random full names from curated lists of Québécois first names,
//! surnames and celebrity names, rendered in one of several text formats.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Loading name lists from the packaged data or a directory of JSON files
//! - Building gender-filtered pools per category
//! - Composing standard names with optional middle and double surnames
//! - Rendering as plain text, `snake_case`, `kebab-case` or camel case
//! - A decelerating "wheel" that reveals a name on a terminal
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use qngng::{
//!     Category, EmbeddedSource, Format, GeneratorOptions, Gender, NameGenerator, NamePools,
//!     format_name,
//! };
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let categories = BTreeSet::from([Category::Std, Category::UdaSingers]);
//! let pools = NamePools::build(&EmbeddedSource, Some(Gender::Female), &categories)
//!     .expect("packaged data loads");
//! let generator = NameGenerator::new(pools, GeneratorOptions::default()).expect("valid options");
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let name = generator.random_full_name(&mut rng).expect("name drawn");
//!
//! assert_eq!(name.gender(), Gender::Female);
//! assert!(!format_name(&name, Format::Kebab, false).contains(' '));
//! ```

mod category;
pub mod cli;
mod config;
mod error;
mod format;
mod generator;
mod name;
mod pool;
mod source;
mod wheel;

pub use category::{Category, CategorySelection, UnknownCategory};
pub use config::QngngSettings;
pub use error::{ConfigError, NameError, RecordError, SampleError, WheelError};
pub use format::{Format, UnknownFormat, format_name, strip_diacritics};
pub use generator::{GeneratorOptions, NameGenerator, SurnameCount};
pub use name::{FullName, Gender, ParseGenderError, PartialName};
pub use pool::{NamePools, PoolKind};
pub use source::{
    DirSource, EmbeddedSource, MemorySource, Record, RecordSource, parse_records, record_key,
};
pub use wheel::{Pause, ThreadPause, frame_delay, spin};
