//! Lenient decoding for upstream fields that arrive as numbers or numeric strings.

use serde::{Deserialize, Deserializer, de::Error};
use serde_json::Value;

use crate::products::Product;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u64),
    Text(String),
}

pub(super) fn lenient_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrString>::deserialize(deserializer)? {
        None => Ok(0),
        Some(NumberOrString::Number(number)) => Ok(number),
        Some(NumberOrString::Text(text)) if text.trim().is_empty() => Ok(0),
        Some(NumberOrString::Text(text)) => text.trim().parse().map_err(D::Error::custom),
    }
}

pub(super) fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    u32::try_from(lenient_u64(deserializer)?).map_err(D::Error::custom)
}

/// Decode a product list, dropping entries that are not valid products.
pub(super) fn valid_products<'de, D>(deserializer: D) -> Result<Vec<Product>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Value>>::deserialize(deserializer)?.unwrap_or_default();

    Ok(raw
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect())
}

/// Decode an optional product, treating an invalid record as absent.
pub(super) fn valid_product<'de, D>(deserializer: D) -> Result<Option<Product>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Value>::deserialize(deserializer)?
        .and_then(|value| serde_json::from_value(value).ok()))
}
