use clap::Args;
use pantry::catalog::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, PageRequest, ProductsPage, SortOption};

/// Paging and ordering shared by the listing commands.
#[derive(Debug, Args)]
pub(crate) struct PageArgs {
    /// One-based page number
    #[arg(long, default_value_t = DEFAULT_PAGE)]
    page: u32,

    /// Products per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: u32,

    /// Reorder the page (name-asc, name-desc, grade-asc, grade-desc)
    #[arg(long)]
    sort: Option<SortOption>,
}

impl PageArgs {
    pub(crate) fn request(&self) -> PageRequest {
        PageRequest::new(self.page, self.page_size)
    }

    /// Apply the requested ordering and print the page.
    pub(crate) fn print(&self, mut page: ProductsPage) {
        if let Some(sort) = self.sort {
            page.sort(sort);
        }

        super::table::print_page(&page);
    }
}
