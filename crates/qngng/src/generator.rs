//! Random full-name sampling.
//!
//! A draw first picks one requested category uniformly, treating `std` as a
//! single bucket regardless of pool sizes. A `std` draw composes a name from
//! distinct first-name and surname entries; any other draw picks one
//! pre-formed name from the category list.

use rand::Rng;
use rand::seq::IndexedRandom;
use tracing::trace;

use crate::category::Category;
use crate::error::{ConfigError, SampleError};
use crate::name::{FullName, PartialName};
use crate::pool::{NamePools, PoolKind};

/// Number of surname fragments in a standard name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SurnameCount {
    /// One surname (`Tremblay`).
    #[default]
    Single,
    /// A double-barrelled surname (`Tremblay-Gagnon`).
    Double,
}

impl SurnameCount {
    /// Number of distinct surname entries to draw.
    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Double => 2,
        }
    }
}

/// Options applying to standard names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Number of surname fragments.
    pub surname_count: SurnameCount,
    /// Whether to draw a middle name.
    pub with_middle_name: bool,
}

/// Draws full names from a fixed set of pools.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
///
/// use qngng::{Category, GeneratorOptions, MemorySource, NameGenerator, NamePools};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let source = MemorySource::new()
///     .with_names("std-names-m", &["Jean"])
///     .with_surnames("std-surnames", &["Tremblay"]);
/// let pools = NamePools::build(&source, None, &BTreeSet::from([Category::Std])).expect("pools");
/// let generator = NameGenerator::new(pools, GeneratorOptions::default()).expect("options");
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let name = generator.random_full_name(&mut rng).expect("name");
///
/// assert_eq!(name.given_name(), "Jean");
/// assert_eq!(name.surname(), "Tremblay");
/// ```
#[derive(Debug, Clone)]
pub struct NameGenerator {
    pools: NamePools,
    options: GeneratorOptions,
    categories: Vec<Category>,
}

impl NameGenerator {
    /// Creates a generator after checking `options` against the pools.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if no category was requested, or if a double
    /// surname or middle name is requested without the `std` category.
    pub fn new(pools: NamePools, options: GeneratorOptions) -> Result<Self, ConfigError> {
        let categories: Vec<Category> = pools.categories().collect();
        if categories.is_empty() {
            return Err(ConfigError::NoCategories);
        }
        if !pools.has_std() {
            if options.surname_count == SurnameCount::Double {
                return Err(ConfigError::RequiresStd {
                    option: "double surname",
                });
            }
            if options.with_middle_name {
                return Err(ConfigError::RequiresStd {
                    option: "middle name",
                });
            }
        }
        Ok(Self {
            pools,
            options,
            categories,
        })
    }

    /// The pools this generator draws from.
    #[must_use]
    pub const fn pools(&self) -> &NamePools {
        &self.pools
    }

    /// The options in force.
    #[must_use]
    pub const fn options(&self) -> GeneratorOptions {
        self.options
    }

    /// Draws one full name.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::InsufficientData`] when a standard pool is too
    /// small for the distinct draw, and [`SampleError::EmptyCategory`] when
    /// the drawn category has no names for the gender filter.
    pub fn random_full_name<R>(&self, rng: &mut R) -> Result<FullName, SampleError>
    where
        R: Rng + ?Sized,
    {
        let category = *self
            .categories
            .choose(rng)
            .ok_or(SampleError::NoCategories)?;
        trace!(%category, "category drawn");

        if category.is_std() {
            return self.random_std_full_name(rng);
        }

        self.pools
            .category(category)
            .and_then(|names| names.choose(rng))
            .cloned()
            .ok_or(SampleError::EmptyCategory {
                category,
                gender: self.pools.gender_filter(),
            })
    }

    fn random_std_full_name<R>(&self, rng: &mut R) -> Result<FullName, SampleError>
    where
        R: Rng + ?Sized,
    {
        let wanted = 1 + usize::from(self.options.with_middle_name);
        let first_names =
            choose_distinct(rng, self.pools.first_names(), wanted, PoolKind::FirstNames)?;
        let surnames = choose_distinct(
            rng,
            self.pools.surnames(),
            self.options.surname_count.get(),
            PoolKind::Surnames,
        )?;
        let surname = surnames
            .iter()
            .map(|s| s.text())
            .collect::<Vec<_>>()
            .join("-");

        let (given, middle) = match first_names.as_slice() {
            [given] => (*given, None),
            [given, middle] => (*given, Some(*middle)),
            _ => {
                return Err(SampleError::InsufficientData {
                    pool: PoolKind::FirstNames,
                    requested: wanted,
                    available: first_names.len(),
                });
            }
        };
        let gender = given
            .gender()
            .ok_or_else(|| SampleError::UngenderedGivenName {
                name: given.text().to_owned(),
            })?;

        let name = FullName::new(given.text(), surname, gender);
        Ok(match middle {
            Some(middle) => name.with_middle_name(middle.text()),
            None => name,
        })
    }
}

/// Draws `amount` distinct entries of `pool` without replacement.
fn choose_distinct<'a, R>(
    rng: &mut R,
    pool: &'a [PartialName],
    amount: usize,
    kind: PoolKind,
) -> Result<Vec<&'a PartialName>, SampleError>
where
    R: Rng + ?Sized,
{
    if pool.len() < amount {
        return Err(SampleError::InsufficientData {
            pool: kind,
            requested: amount,
            available: pool.len(),
        });
    }
    Ok(pool.choose_multiple(rng, amount).collect())
}
