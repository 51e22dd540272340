//! Nutrition Grades

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

/// Error returned when a string is not a Nutri-Score letter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown nutrition grade: {0:?}")]
pub struct UnknownGrade(pub String);

/// Nutri-Score grade, `A` being the best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NutritionGrade {
    /// Grade A
    A,

    /// Grade B
    B,

    /// Grade C
    C,

    /// Grade D
    D,

    /// Grade E
    E,
}

impl NutritionGrade {
    /// Lowercase letter as used by the upstream catalog.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
            Self::E => "e",
        }
    }
}

impl FromStr for NutritionGrade {
    type Err = UnknownGrade;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" => Ok(Self::A),
            "b" => Ok(Self::B),
            "c" => Ok(Self::C),
            "d" => Ok(Self::D),
            "e" => Ok(Self::E),
            _ => Err(UnknownGrade(s.to_owned())),
        }
    }
}

impl Display for NutritionGrade {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
