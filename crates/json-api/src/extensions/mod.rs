//! Extension traits

mod depot;
mod query;
mod result;

pub(crate) use depot::DepotExt as _;
pub(crate) use query::{PageQueryExt as _, SortQueryExt as _};
pub(crate) use result::ResultExt as _;
