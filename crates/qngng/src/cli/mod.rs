//! Command-line surface for the `qngng` binary.
//!
//! Parsing is left to clap; [`Cli::resolve`] then applies the flag
//! combination rules and produces a [`Request`], and [`run`] executes it.
//! Both are plain functions so they can be exercised without spawning a
//! process.

use std::collections::BTreeSet;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tracing::debug;

use crate::category::{Category, CategorySelection};
use crate::config::QngngSettings;
use crate::error::{ConfigError, RecordError, SampleError, WheelError};
use crate::format::{Format, format_name};
use crate::generator::{GeneratorOptions, NameGenerator, SurnameCount};
use crate::name::Gender;
use crate::pool::NamePools;
use crate::source::{DirSource, EmbeddedSource, RecordSource};
use crate::wheel::{ThreadPause, spin};

/// `qngng` command arguments.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "qngng", about = "Québécois name generator", version)]
pub struct Cli {
    /// Print a male or female name.
    #[arg(short = 'g', long, value_name = "gender")]
    pub gender: Option<Gender>,
    /// Shorthand for `--gender=male`.
    #[arg(short = 'm', long)]
    pub male: bool,
    /// Shorthand for `--gender=female`.
    #[arg(short = 'f', long)]
    pub female: bool,
    /// Print name in `snake_case` format.
    #[arg(short = 's', long)]
    pub snake_case: bool,
    /// Print name in `kebab-case` format.
    #[arg(short = 'k', long)]
    pub kebab_case: bool,
    /// Print name in `camelCase` format.
    #[arg(short = 'C', long)]
    pub camel_case: bool,
    /// Print name in `CapitalizedCamelCase` format.
    #[arg(long)]
    pub cap_camel_case: bool,
    /// Category name (repeatable; `all` and `uda` select groups).
    #[arg(short = 'c', long = "cat", value_name = "category")]
    pub cats: Vec<String>,
    /// Create a double-barrelled surname (only available for the `std` category).
    #[arg(short = 'd', long)]
    pub double_surname: bool,
    /// Generate a middle initial (only available for the `std` category).
    #[arg(short = 'I', long)]
    pub middle_initial: bool,
    /// Generate a middle name (only available for the `std` category).
    #[arg(short = 'M', long)]
    pub middle_name: bool,
    /// Spin a wheel to find a name (only use interactively).
    #[arg(short = 'w', long)]
    pub wheel: bool,
    /// Seed the random generator for reproducible output.
    #[arg(long, value_name = "seed")]
    pub seed: Option<u64>,
    /// Read name lists from this directory instead of the packaged data.
    #[arg(long, value_name = "path")]
    pub data_dir: Option<PathBuf>,
}

/// A validated generation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// Requested gender; `None` draws one per run so that every name part
    /// comes from the same gender's lists.
    pub gender: Option<Gender>,
    /// Output format.
    pub format: Format,
    /// Expanded categories.
    pub categories: BTreeSet<Category>,
    /// Standard-name options.
    pub options: GeneratorOptions,
    /// Render the middle name as an initial.
    pub with_middle_initial: bool,
    /// Spin the wheel instead of printing once.
    pub wheel: bool,
    /// Fixed RNG seed.
    pub seed: Option<u64>,
    /// Directory source overriding the packaged data.
    pub data_dir: Option<PathBuf>,
}

impl Cli {
    /// Validates flag combinations and merges `settings` underneath.
    ///
    /// # Errors
    ///
    /// Returns [`CliError`] for mutually exclusive flags, unknown
    /// categories, and standard-only flags used without `std`.
    pub fn resolve(self, settings: &QngngSettings) -> Result<Request, CliError> {
        let gender = self.resolve_gender()?;

        if self.middle_name && self.middle_initial {
            return Err(CliError::ConflictingMiddleName);
        }

        let format = self.resolve_format()?;

        let selections = self
            .cats
            .iter()
            .map(|raw| {
                raw.parse::<CategorySelection>()
                    .map_err(|_| CliError::UnknownCategory { name: raw.clone() })
            })
            .collect::<Result<Vec<_>, _>>()?;
        let categories = CategorySelection::expand_all(&selections);

        if !categories.contains(&Category::Std) {
            let std_only = [
                (self.double_surname, "--double-surname"),
                (self.middle_name, "--middle-name"),
                (self.middle_initial, "--middle-initial"),
            ];
            if let Some((_, flag)) = std_only.into_iter().find(|(set, _)| *set) {
                return Err(CliError::RequiresStd { flag });
            }
        }

        let surname_count = if self.double_surname {
            SurnameCount::Double
        } else {
            SurnameCount::Single
        };

        Ok(Request {
            gender,
            format,
            categories,
            options: GeneratorOptions {
                surname_count,
                with_middle_name: self.middle_name || self.middle_initial,
            },
            with_middle_initial: self.middle_initial,
            wheel: self.wheel || settings.wheel,
            seed: self.seed.or(settings.seed),
            data_dir: self.data_dir.or_else(|| settings.data_dir.clone()),
        })
    }

    fn resolve_gender(&self) -> Result<Option<Gender>, CliError> {
        let given = [self.gender.is_some(), self.male, self.female];
        if given.into_iter().filter(|set| *set).count() > 1 {
            return Err(CliError::ConflictingGender);
        }
        Ok(if self.male {
            Some(Gender::Male)
        } else if self.female {
            Some(Gender::Female)
        } else {
            self.gender
        })
    }

    fn resolve_format(&self) -> Result<Format, CliError> {
        let flags = [
            (self.snake_case, Format::Snake),
            (self.kebab_case, Format::Kebab),
            (self.camel_case, Format::Camel),
            (self.cap_camel_case, Format::CapCamel),
        ];
        let mut chosen = flags.into_iter().filter(|(set, _)| *set).map(|(_, f)| f);
        let format = chosen.next().unwrap_or_default();
        if chosen.next().is_some() {
            return Err(CliError::ConflictingFormat);
        }
        Ok(format)
    }
}

/// Draws a name for `request` and writes it to `out`, or spins the wheel.
///
/// Without a requested gender, one is drawn from the seeded generator before
/// the pools are built, so a given name and its middle name always share a
/// gender.
///
/// # Errors
///
/// Returns [`RunError`] if the data cannot be loaded, the request cannot be
/// satisfied by the pools, or `out` fails.
pub fn run<W>(request: &Request, out: &mut W) -> Result<(), RunError>
where
    W: Write + ?Sized,
{
    let seed = request.seed.unwrap_or_else(random_seed);
    debug!(seed, "random generator seeded");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let gender = request.gender.unwrap_or_else(|| random_gender(&mut rng));
    debug!(%gender, "gender selected");

    let source: Box<dyn RecordSource> = match &request.data_dir {
        Some(dir) => Box::new(DirSource::open(dir)?),
        None => Box::new(EmbeddedSource),
    };
    let pools = NamePools::build(source.as_ref(), Some(gender), &request.categories)?;
    let generator = NameGenerator::new(pools, request.options)?;

    let mut render = || {
        generator
            .random_full_name(&mut rng)
            .map(|name| format_name(&name, request.format, request.with_middle_initial))
    };

    if request.wheel {
        spin(out, &mut ThreadPause, render)?;
    } else {
        let name = render()?;
        writeln!(out, "{name}")?;
    }
    Ok(())
}

fn random_seed() -> u64 {
    rand::rng().random()
}

fn random_gender<R: Rng + ?Sized>(rng: &mut R) -> Gender {
    if rng.random() {
        Gender::Male
    } else {
        Gender::Female
    }
}

/// Errors from validating command-line flags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// More than one gender flag was given.
    #[error("Cannot specify more than one option amongst `--gender`, `--male`, and `--female`.")]
    ConflictingGender,
    /// Both middle-name flags were given.
    #[error("Cannot specify more than one option amongst `--middle-initial` and `--middle-name`.")]
    ConflictingMiddleName,
    /// More than one format flag was given.
    #[error(
        "Cannot specify more than one option amongst `--snake-case`, `--kebab-case`, `--camel-case`, and `--cap-camel-case`."
    )]
    ConflictingFormat,
    /// A category key is not recognized.
    #[error("Unknown category `{name}`.")]
    UnknownCategory {
        /// The key as given.
        name: String,
    },
    /// A standard-only flag was given without the `std` category.
    #[error("Cannot specify `{flag}` without the `std` category.")]
    RequiresStd {
        /// The offending flag.
        flag: &'static str,
    },
}

/// Errors surfaced while running a request.
#[derive(Debug, Error)]
pub enum RunError {
    /// Settings could not be loaded.
    #[error("failed to load settings: {0}")]
    Settings(String),
    /// Command-line flags were invalid.
    #[error(transparent)]
    Cli(#[from] CliError),
    /// A name list could not be loaded.
    #[error(transparent)]
    Record(#[from] RecordError),
    /// The request contradicts the pools.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// A name could not be drawn.
    #[error(transparent)]
    Sample(#[from] SampleError),
    /// The wheel failed.
    #[error(transparent)]
    Wheel(#[from] WheelError),
    /// Writing the name failed.
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}
