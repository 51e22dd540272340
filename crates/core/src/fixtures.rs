//! Fixtures
//!
//! A small, fixed product set used when the upstream catalog is not reachable and in tests.

use crate::{
    catalog::{MAX_PAGE_SIZE, PageRequest, ProductsPage},
    products::{Nutriments, Product, ProductCode, ProductCodeError},
};

struct SampleProduct {
    code: &'static str,
    name: &'static str,
    brands: &'static str,
    categories: &'static str,
    image: &'static str,
    grade: &'static str,
    ingredients: &'static str,
    nutriments: Nutriments,
}

fn samples() -> [SampleProduct; 3] {
    [
        SampleProduct {
            code: "737628064502",
            name: "Organic Milk",
            brands: "Horizon Organic",
            categories: "Dairy, Milk",
            image: "https://via.placeholder.com/200?text=Milk",
            grade: "a",
            ingredients: "Organic Grade A Lowfat Milk, Vitamin A Palmitate, Vitamin D3",
            nutriments: Nutriments {
                energy_kcal_100g: Some(50.0),
                fat_100g: Some(1.5),
                carbohydrates_100g: Some(5.0),
                proteins_100g: Some(3.5),
                ..Nutriments::default()
            },
        },
        SampleProduct {
            code: "5000112548426",
            name: "Chocolate Bar",
            brands: "Cadbury",
            categories: "Snacks, Sweets, Chocolate",
            image: "https://via.placeholder.com/200?text=Chocolate",
            grade: "d",
            ingredients: "Milk chocolate, Sugar, Cocoa butter, Cocoa mass, Milk powder",
            nutriments: Nutriments {
                energy_kcal_100g: Some(530.0),
                fat_100g: Some(30.0),
                carbohydrates_100g: Some(57.0),
                sugars_100g: Some(56.0),
                proteins_100g: Some(7.3),
                ..Nutriments::default()
            },
        },
        SampleProduct {
            code: "8076809513296",
            name: "Whole Wheat Bread",
            brands: "Nature's Own",
            categories: "Breads",
            image: "https://via.placeholder.com/200?text=Bread",
            grade: "b",
            ingredients: "Whole wheat flour, Water, Yeast, Salt",
            nutriments: Nutriments {
                energy_kcal_100g: Some(247.0),
                fat_100g: Some(3.5),
                carbohydrates_100g: Some(43.0),
                proteins_100g: Some(8.0),
                ..Nutriments::default()
            },
        },
    ]
}

impl SampleProduct {
    fn into_product(self) -> Result<Product, ProductCodeError> {
        let mut product = Product::new(ProductCode::new(self.code)?).with_name(self.name);

        product.brands = Some(self.brands.to_owned());
        product.categories = Some(self.categories.to_owned());
        product.image_url = Some(self.image.to_owned());
        product.nutriscore_grade = Some(self.grade.to_owned());
        product.ingredients_text = Some(self.ingredients.to_owned());
        product.nutriments = Some(self.nutriments);

        Ok(product)
    }
}

/// The sample products: organic milk, a chocolate bar and wholewheat bread.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    samples()
        .into_iter()
        .filter_map(|sample| sample.into_product().ok())
        .collect()
}

/// A full page built by cycling through the sample products.
///
/// Each entry gets a unique `-{index}` code suffix and a `(Sample n)` name suffix so that cart
/// lines built from the page stay distinct.
#[must_use]
pub fn sample_products_page(request: PageRequest) -> ProductsPage {
    let products: Vec<Product> = sample_products()
        .into_iter()
        .cycle()
        .zip(0..request.page_size.min(MAX_PAGE_SIZE))
        .filter_map(|(sample, index)| {
            let code = ProductCode::new(format!("{}-{index}", sample.code)).ok()?;
            let name = format!("{} (Sample {})", sample.display_name(), index + 1);

            Some(Product {
                code,
                product_name: Some(name),
                ..sample
            })
        })
        .collect();

    ProductsPage {
        count: u64::try_from(products.len()).unwrap_or(u64::MAX),
        page: request.page,
        page_count: 1,
        page_size: request.page_size,
        products,
        skip: 0,
    }
}
