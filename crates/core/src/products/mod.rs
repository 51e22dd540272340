//! Products
//!
//! Products are produced by the upstream catalog. Apart from [`Product::code`] every field is
//! optional descriptive metadata and may be missing from any given record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

mod code;
mod grade;

pub use code::{ProductCode, ProductCodeError};
pub use grade::{NutritionGrade, UnknownGrade};

/// Product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Product code (barcode)
    pub code: ProductCode,

    /// Product name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    /// Comma separated brand names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brands: Option<String>,

    /// Comma separated category names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,

    /// Normalised category tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories_tags: Option<Vec<String>>,

    /// Main image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Front-of-pack image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_front_url: Option<String>,

    /// Thumbnail image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_small_url: Option<String>,

    /// Ingredient list as printed on the pack
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredients_text: Option<String>,

    /// Legacy nutrition grade letter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition_grades: Option<String>,

    /// Nutri-Score grade letter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutriscore_grade: Option<String>,

    /// Nutrition facts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutriments: Option<Nutriments>,

    /// Comma separated labels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<String>,

    /// Normalised label tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels_tags: Option<Vec<String>>,

    /// Declared allergens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergens: Option<String>,

    /// Stores the product is sold in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stores: Option<String>,

    /// Countries the product is sold in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub countries: Option<String>,

    /// Serving size description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serving_size: Option<String>,

    /// Upstream fields without a typed counterpart, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Product {
    /// Create a product carrying only its code.
    #[must_use]
    pub fn new(code: ProductCode) -> Self {
        Self {
            code,
            product_name: None,
            brands: None,
            categories: None,
            categories_tags: None,
            image_url: None,
            image_front_url: None,
            image_small_url: None,
            ingredients_text: None,
            nutrition_grades: None,
            nutriscore_grade: None,
            nutriments: None,
            labels: None,
            labels_tags: None,
            allergens: None,
            stores: None,
            countries: None,
            serving_size: None,
            extra: Map::new(),
        }
    }

    /// Set the product name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = Some(name.into());
        self
    }

    /// Name to show for this product, falling back to its code.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.product_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| self.code.as_str())
    }

    /// The product's grade, preferring the Nutri-Score over the legacy grade field.
    ///
    /// Returns `None` when neither field holds a recognisable grade letter.
    #[must_use]
    pub fn grade(&self) -> Option<NutritionGrade> {
        [&self.nutriscore_grade, &self.nutrition_grades]
            .into_iter()
            .filter_map(Option::as_deref)
            .find(|grade| !grade.trim().is_empty())
            .and_then(|grade| grade.parse().ok())
    }
}

/// Nutrition facts, per serving and per 100g, keyed like the upstream catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutriments {
    /// Energy (kJ)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,

    /// Energy (kcal)
    #[serde(
        rename = "energy-kcal",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub energy_kcal: Option<f64>,

    /// Energy per 100g (kcal)
    #[serde(
        rename = "energy-kcal_100g",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub energy_kcal_100g: Option<f64>,

    /// Energy per 100g (kJ)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy_100g: Option<f64>,

    /// Fat
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,

    /// Fat per 100g
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_100g: Option<f64>,

    /// Saturated fat
    #[serde(
        rename = "saturated-fat",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub saturated_fat: Option<f64>,

    /// Saturated fat per 100g
    #[serde(
        rename = "saturated-fat_100g",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub saturated_fat_100g: Option<f64>,

    /// Carbohydrates
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates: Option<f64>,

    /// Carbohydrates per 100g
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates_100g: Option<f64>,

    /// Sugars
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugars: Option<f64>,

    /// Sugars per 100g
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sugars_100g: Option<f64>,

    /// Fiber
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,

    /// Fiber per 100g
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber_100g: Option<f64>,

    /// Proteins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proteins: Option<f64>,

    /// Proteins per 100g
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proteins_100g: Option<f64>,

    /// Salt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<f64>,

    /// Salt per 100g
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt_100g: Option<f64>,

    /// Sodium
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,

    /// Sodium per 100g
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium_100g: Option<f64>,
}
