use clap::Args;
use pantry_app::catalog::CatalogService;

use super::page::PageArgs;

#[derive(Debug, Args)]
pub(crate) struct ProductsArgs {
    #[command(flatten)]
    page: PageArgs,
}

pub(crate) async fn run(catalog: &dyn CatalogService, args: ProductsArgs) -> Result<(), String> {
    let page = catalog.list(args.page.request()).await;

    args.page.print(page);

    Ok(())
}
