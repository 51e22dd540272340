//! Product Sorting

use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::products::Product;

/// Error returned for an unrecognised sort name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort option: {0:?}")]
pub struct UnknownSortOption(pub String);

/// Product listing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Name, A to Z
    NameAsc,

    /// Name, Z to A
    NameDesc,

    /// Best nutrition grade first
    GradeAsc,

    /// Worst nutrition grade first
    GradeDesc,
}

impl SortOption {
    /// Every option, in menu order.
    pub const ALL: [Self; 4] = [Self::NameAsc, Self::NameDesc, Self::GradeAsc, Self::GradeDesc];

    /// Wire name of this option.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
            Self::GradeAsc => "grade-asc",
            Self::GradeDesc => "grade-desc",
        }
    }

    /// Compare two products under this ordering.
    ///
    /// Products without a recognisable grade sort after graded ones in both grade orders.
    #[must_use]
    pub fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            Self::NameAsc => compare_names(a, b),
            Self::NameDesc => compare_names(b, a),
            Self::GradeAsc => match (a.grade(), b.grade()) {
                (Some(a), Some(b)) => a.cmp(&b),
                (a, b) => a.is_none().cmp(&b.is_none()),
            },
            Self::GradeDesc => match (a.grade(), b.grade()) {
                (Some(a), Some(b)) => b.cmp(&a),
                (a, b) => a.is_none().cmp(&b.is_none()),
            },
        }
    }
}

impl FromStr for SortOption {
    type Err = UnknownSortOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| UnknownSortOption(s.to_owned()))
    }
}

impl Display for SortOption {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Stable-sort `products` in place.
pub fn sort_products(products: &mut [Product], option: SortOption) {
    products.sort_by(|a, b| option.compare(a, b));
}

fn compare_names(a: &Product, b: &Product) -> Ordering {
    let a = a.product_name.as_deref().unwrap_or_default();
    let b = b.product_name.as_deref().unwrap_or_default();

    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
