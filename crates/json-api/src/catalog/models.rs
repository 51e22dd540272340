//! Catalog Models

use std::collections::BTreeMap;

use pantry::{
    catalog::{ProductDetail, ProductsPage},
    products::{Nutriments, Product, ProductCode, ProductCodeError},
};
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductPayload {
    /// Product code (barcode)
    pub code: String,

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

    /// Ingredient list
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
    pub nutriments: Option<NutrimentsPayload>,

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

    /// Any other upstream catalog fields, returned as received
    #[serde(flatten)]
    #[salvo(schema(value_type = Object))]
    pub extra: BTreeMap<String, Value>,
}

impl From<Product> for ProductPayload {
    fn from(product: Product) -> Self {
        let Product {
            code,
            product_name,
            brands,
            categories,
            categories_tags,
            image_url,
            image_front_url,
            image_small_url,
            ingredients_text,
            nutrition_grades,
            nutriscore_grade,
            nutriments,
            labels,
            labels_tags,
            allergens,
            stores,
            countries,
            serving_size,
            extra,
        } = product;

        Self {
            code: code.into(),
            product_name,
            brands,
            categories,
            categories_tags,
            image_url,
            image_front_url,
            image_small_url,
            ingredients_text,
            nutrition_grades,
            nutriscore_grade,
            nutriments: nutriments.map(Into::into),
            labels,
            labels_tags,
            allergens,
            stores,
            countries,
            serving_size,
            extra: extra.into_iter().collect(),
        }
    }
}

impl TryFrom<ProductPayload> for Product {
    type Error = ProductCodeError;

    fn try_from(payload: ProductPayload) -> Result<Self, Self::Error> {
        let ProductPayload {
            code,
            product_name,
            brands,
            categories,
            categories_tags,
            image_url,
            image_front_url,
            image_small_url,
            ingredients_text,
            nutrition_grades,
            nutriscore_grade,
            nutriments,
            labels,
            labels_tags,
            allergens,
            stores,
            countries,
            serving_size,
            extra,
        } = payload;

        Ok(Self {
            code: ProductCode::new(code)?,
            product_name,
            brands,
            categories,
            categories_tags,
            image_url,
            image_front_url,
            image_small_url,
            ingredients_text,
            nutrition_grades,
            nutriscore_grade,
            nutriments: nutriments.map(Into::into),
            labels,
            labels_tags,
            allergens,
            stores,
            countries,
            serving_size,
            extra: extra.into_iter().collect(),
        })
    }
}

/// Nutrition facts, keyed like the upstream catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct NutrimentsPayload {
    /// Energy (kJ)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,

    /// Energy (kcal)
    #[serde(rename = "energy-kcal", default, skip_serializing_if = "Option::is_none")]
    pub energy_kcal: Option<f64>,

    /// Energy per 100g (kcal)
    #[serde(rename = "energy-kcal_100g", default, skip_serializing_if = "Option::is_none")]
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
    #[serde(rename = "saturated-fat", default, skip_serializing_if = "Option::is_none")]
    pub saturated_fat: Option<f64>,

    /// Saturated fat per 100g
    #[serde(rename = "saturated-fat_100g", default, skip_serializing_if = "Option::is_none")]
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

impl From<Nutriments> for NutrimentsPayload {
    fn from(nutriments: Nutriments) -> Self {
        let Nutriments {
            energy,
            energy_kcal,
            energy_kcal_100g,
            energy_100g,
            fat,
            fat_100g,
            saturated_fat,
            saturated_fat_100g,
            carbohydrates,
            carbohydrates_100g,
            sugars,
            sugars_100g,
            fiber,
            fiber_100g,
            proteins,
            proteins_100g,
            salt,
            salt_100g,
            sodium,
            sodium_100g,
        } = nutriments;

        Self {
            energy,
            energy_kcal,
            energy_kcal_100g,
            energy_100g,
            fat,
            fat_100g,
            saturated_fat,
            saturated_fat_100g,
            carbohydrates,
            carbohydrates_100g,
            sugars,
            sugars_100g,
            fiber,
            fiber_100g,
            proteins,
            proteins_100g,
            salt,
            salt_100g,
            sodium,
            sodium_100g,
        }
    }
}

impl From<NutrimentsPayload> for Nutriments {
    fn from(payload: NutrimentsPayload) -> Self {
        let NutrimentsPayload {
            energy,
            energy_kcal,
            energy_kcal_100g,
            energy_100g,
            fat,
            fat_100g,
            saturated_fat,
            saturated_fat_100g,
            carbohydrates,
            carbohydrates_100g,
            sugars,
            sugars_100g,
            fiber,
            fiber_100g,
            proteins,
            proteins_100g,
            salt,
            salt_100g,
            sodium,
            sodium_100g,
        } = payload;

        Self {
            energy,
            energy_kcal,
            energy_kcal_100g,
            energy_100g,
            fat,
            fat_100g,
            saturated_fat,
            saturated_fat_100g,
            carbohydrates,
            carbohydrates_100g,
            sugars,
            sugars_100g,
            fiber,
            fiber_100g,
            proteins,
            proteins_100g,
            salt,
            salt_100g,
            sodium,
            sodium_100g,
        }
    }
}

/// Products Page Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsPageResponse {
    /// Total matching products
    pub count: u64,

    /// One-based page number
    pub page: u32,

    /// Number of pages
    pub page_count: u64,

    /// Products per page
    pub page_size: u32,

    /// Products on this page
    pub products: Vec<ProductPayload>,

    /// Products skipped before this page
    pub skip: u64,
}

impl From<ProductsPage> for ProductsPageResponse {
    fn from(page: ProductsPage) -> Self {
        Self {
            count: page.count,
            page: page.page,
            page_count: page.page_count,
            page_size: page.page_size,
            products: page.products.into_iter().map(Into::into).collect(),
            skip: page.skip,
        }
    }
}

/// Product Detail Response
///
/// `status` is `1` when the product was found. Missing products and upstream failures share the
/// same shape, with `product: null`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDetailResponse {
    /// The barcode that was looked up
    pub code: String,

    /// The product, when found
    pub product: Option<ProductPayload>,

    /// `1` when found, `0` otherwise
    pub status: u32,

    /// Human readable status
    pub status_verbose: String,
}

impl From<ProductDetail> for ProductDetailResponse {
    fn from(detail: ProductDetail) -> Self {
        Self {
            code: detail.code,
            product: detail.product.map(Into::into),
            status: detail.status,
            status_verbose: detail.status_verbose,
        }
    }
}

/// Categories Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CategoriesResponse {
    /// Category tags offered for browsing
    pub categories: Vec<String>,
}
