use clap::Args;
use pantry_app::catalog::CatalogService;

use super::table;

#[derive(Debug, Args)]
pub(crate) struct ProductArgs {
    /// Product barcode
    barcode: String,
}

pub(crate) async fn run(catalog: &dyn CatalogService, args: ProductArgs) -> Result<(), String> {
    let detail = catalog.by_barcode(args.barcode).await;

    match detail.product() {
        Some(product) => table::print_product(product),
        None => println!("{}: {}", detail.code, detail.status_verbose),
    }

    Ok(())
}
