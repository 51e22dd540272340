//! Product Codes

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when constructing a product code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProductCodeError {
    /// The code was empty or contained only whitespace.
    #[error("product code must not be empty")]
    Empty,
}

/// Opaque, globally unique product identifier (usually a barcode).
///
/// Codes compare by exact string equality and are never normalised.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductCode(String);

impl ProductCode {
    /// Create a product code.
    ///
    /// # Errors
    ///
    /// Returns [`ProductCodeError::Empty`] if the code is empty or whitespace only.
    pub fn new(code: impl Into<String>) -> Result<Self, ProductCodeError> {
        let code = code.into();

        if code.trim().is_empty() {
            return Err(ProductCodeError::Empty);
        }

        Ok(Self(code))
    }

    /// Borrow the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ProductCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProductCode {
    type Err = ProductCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ProductCode {
    type Error = ProductCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ProductCode {
    type Error = ProductCodeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductCode> for String {
    fn from(code: ProductCode) -> Self {
        code.0
    }
}

impl PartialEq<str> for ProductCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProductCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn new_accepts_barcodes() -> TestResult {
        let code = ProductCode::new("737628064502")?;

        assert_eq!(code.as_str(), "737628064502");
        assert_eq!(code.to_string(), "737628064502");

        Ok(())
    }

    #[test]
    fn new_rejects_empty_and_blank_codes() {
        assert_eq!(ProductCode::new(""), Err(ProductCodeError::Empty));
        assert_eq!(ProductCode::new("   "), Err(ProductCodeError::Empty));
    }

    #[test]
    fn codes_are_not_normalised() -> TestResult {
        let padded = ProductCode::new(" 42")?;
        let plain = ProductCode::new("42")?;

        assert_ne!(padded, plain);

        Ok(())
    }

    #[test]
    fn deserialising_validates() {
        let blank = serde_json::from_str::<ProductCode>("\"\"");
        let valid = serde_json::from_str::<ProductCode>("\"3017620422003\"");

        assert!(blank.is_err(), "blank code should not deserialise");
        assert!(valid.is_ok(), "barcode should deserialise");
    }
}
