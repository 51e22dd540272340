use pantry::{
    catalog::ProductsPage,
    products::{NutritionGrade, Product},
};
use tabled::{
    builder::Builder,
    settings::{
        Color, Style, Theme,
        object::{Columns, Rows},
    },
};

const PLACEHOLDER: &str = "-";

fn grade_label(product: &Product) -> String {
    product
        .grade()
        .map_or(PLACEHOLDER, NutritionGrade::as_str)
        .to_uppercase()
}

fn product_row(product: &Product) -> [String; 4] {
    [
        product.code.to_string(),
        product.display_name().to_owned(),
        product
            .brands
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_owned()),
        grade_label(product),
    ]
}

/// Print a page of products as a table followed by a paging summary.
pub(crate) fn print_page(page: &ProductsPage) {
    if page.is_empty() {
        println!("no products found (page {})", page.page);
        return;
    }

    let mut builder = Builder::default();

    builder.push_record(["Code", "Name", "Brands", "Grade"]);

    for product in &page.products {
        builder.push_record(product_row(product));
    }

    let mut table = builder.build();

    table.with(Theme::from(Style::modern_rounded()));
    table.modify(Rows::first(), Color::BOLD);

    println!("{table}");
    println!(
        "page {} of {} ({} products)",
        page.page, page.page_count, page.count
    );
}

/// Print one product as a two-column table.
pub(crate) fn print_product(product: &Product) {
    let mut builder = Builder::default();

    let fields = [
        ("Code", Some(product.code.to_string())),
        ("Name", Some(product.display_name().to_owned())),
        ("Brands", product.brands.clone()),
        ("Categories", product.categories.clone()),
        ("Serving size", product.serving_size.clone()),
        ("Grade", Some(grade_label(product))),
        ("Ingredients", product.ingredients_text.clone()),
    ];

    for (label, value) in fields {
        builder.push_record([
            label.to_owned(),
            value.unwrap_or_else(|| PLACEHOLDER.to_owned()),
        ]);
    }

    if let Some(nutriments) = &product.nutriments {
        let per_100g = [
            ("Energy (kcal/100g)", nutriments.energy_kcal_100g),
            ("Fat (g/100g)", nutriments.fat_100g),
            ("Carbohydrates (g/100g)", nutriments.carbohydrates_100g),
            ("Sugars (g/100g)", nutriments.sugars_100g),
            ("Proteins (g/100g)", nutriments.proteins_100g),
            ("Salt (g/100g)", nutriments.salt_100g),
        ];

        for (label, value) in per_100g
            .into_iter()
            .filter_map(|(label, value)| value.map(|value| (label, value)))
        {
            builder.push_record([label.to_owned(), format!("{value}")]);
        }
    }

    let mut table = builder.build();

    table.with(Theme::from(Style::modern_rounded()));
    table.modify(Columns::first(), Color::BOLD);

    println!("{table}");
}
