use clap::{Args, ValueEnum};
use pantry_app::catalog::CatalogService;

use super::{page::PageArgs, table};

/// How search terms are interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum SearchKind {
    /// Full-text search on product names.
    #[default]
    Name,

    /// Exact barcode lookup.
    Barcode,
}

#[derive(Debug, Args)]
pub(crate) struct SearchArgs {
    /// Search terms
    terms: String,

    /// Search by name or by barcode
    #[arg(long = "by", value_enum, default_value_t = SearchKind::Name)]
    kind: SearchKind,

    #[command(flatten)]
    page: PageArgs,
}

pub(crate) async fn run(catalog: &dyn CatalogService, args: SearchArgs) -> Result<(), String> {
    let terms = args.terms.trim().to_owned();

    match args.kind {
        SearchKind::Name => {
            let page = catalog.search(terms, args.page.request()).await;

            args.page.print(page);
        }
        SearchKind::Barcode => {
            let detail = catalog.by_barcode(terms).await;

            match detail.product() {
                Some(product) => table::print_product(product),
                None => println!("no product with barcode {}", detail.code),
            }
        }
    }

    Ok(())
}
