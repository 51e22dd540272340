use clap::Args;
use pantry_app::catalog::CatalogService;

use super::page::PageArgs;

#[derive(Debug, Args)]
pub(crate) struct CategoryArgs {
    /// Category tag, e.g. `dairy` (see `categories`)
    category: String,

    #[command(flatten)]
    page: PageArgs,
}

pub(crate) async fn run(catalog: &dyn CatalogService, args: CategoryArgs) -> Result<(), String> {
    if args.category.trim().is_empty() {
        return Err("category cannot be empty".to_string());
    }

    let page = catalog
        .by_category(args.category, args.page.request())
        .await;

    args.page.print(page);

    Ok(())
}
