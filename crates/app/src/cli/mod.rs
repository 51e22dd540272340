use std::sync::Arc;

use clap::{Parser, Subcommand};
use pantry_app::{
    catalog::CatalogService,
    context::{AppContext, CatalogArgs},
};

mod categories;
mod category;
mod page;
mod product;
mod products;
mod search;
mod table;

#[derive(Debug, Parser)]
#[command(name = "pantry-app", about = "Pantry catalog CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    catalog: CatalogArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List the popular categories
    Categories,

    /// Browse the whole catalog
    Products(products::ProductsArgs),

    /// Search products by name or barcode
    Search(search::SearchArgs),

    /// Browse one category
    Category(category::CategoryArgs),

    /// Show a single product
    Product(product::ProductArgs),
}

fn catalog_service(catalog: &CatalogArgs) -> Result<Arc<dyn CatalogService>, String> {
    AppContext::from_catalog_config(catalog.catalog_config())
        .map(|context| context.catalog)
        .map_err(|error| format!("failed to set up catalog: {error}"))
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        let Self { catalog, command } = self;

        match command {
            Commands::Categories => categories::run(),
            Commands::Products(args) => products::run(catalog_service(&catalog)?.as_ref(), args).await,
            Commands::Search(args) => search::run(catalog_service(&catalog)?.as_ref(), args).await,
            Commands::Category(args) => category::run(catalog_service(&catalog)?.as_ref(), args).await,
            Commands::Product(args) => product::run(catalog_service(&catalog)?.as_ref(), args).await,
        }
    }
}
