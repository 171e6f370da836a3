//! The closed set of name categories.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// A named source of name data.
///
/// `Std` is composable (first names and surnames drawn independently); every
/// other category is a flat list of ready-made full names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Standard composable names.
    Std,
    /// UDA actors.
    UdaActors,
    /// UDA TV and radio hosts.
    UdaHosts,
    /// UDA singers.
    UdaSingers,
    /// People honoured by street names.
    StreetNames,
    /// Characters from *District 31*.
    District31,
    /// Characters from *Dans une galaxie près de chez vous*.
    Galaxie,
}

impl Category {
    /// Every category, in key order.
    pub const ALL: [Self; 7] = [
        Self::Std,
        Self::UdaActors,
        Self::UdaHosts,
        Self::UdaSingers,
        Self::StreetNames,
        Self::District31,
        Self::Galaxie,
    ];

    /// The three UDA categories.
    pub const UDA: [Self; 3] = [Self::UdaActors, Self::UdaHosts, Self::UdaSingers];

    /// Stable key used on the command line and in record source keys.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Std => "std",
            Self::UdaActors => "uda-actors",
            Self::UdaHosts => "uda-hosts",
            Self::UdaSingers => "uda-singers",
            Self::StreetNames => "sn",
            Self::District31 => "d31",
            Self::Galaxie => "dug",
        }
    }

    /// Returns `true` for the composable standard category.
    #[must_use]
    pub const fn is_std(self) -> bool {
        matches!(self, Self::Std)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned for a key outside the category set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|cat| cat.key() == s)
            .ok_or_else(|| UnknownCategory(s.to_owned()))
    }
}

/// A category as selected on the command line, before expansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySelection {
    /// A single category.
    One(Category),
    /// Every category.
    All,
    /// The UDA categories.
    Uda,
}

impl CategorySelection {
    /// Expands the selection into concrete categories.
    #[must_use]
    pub fn expand(self) -> Vec<Category> {
        match self {
            Self::One(cat) => vec![cat],
            Self::All => Category::ALL.to_vec(),
            Self::Uda => Category::UDA.to_vec(),
        }
    }

    /// Expands and merges several selections; no selection means `std`.
    #[must_use]
    pub fn expand_all(selections: &[Self]) -> BTreeSet<Category> {
        if selections.is_empty() {
            return BTreeSet::from([Category::Std]);
        }
        selections.iter().flat_map(|sel| sel.expand()).collect()
    }
}

impl FromStr for CategorySelection {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "uda" => Ok(Self::Uda),
            other => other.parse().map(Self::One),
        }
    }
}
