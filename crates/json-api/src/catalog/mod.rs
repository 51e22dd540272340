//! Catalog
//!
//! Pass-through proxy to the catalog gateway. These routes always answer 200 with a well-formed
//! body; upstream failures arrive here already replaced by empty results.

mod handlers;
pub(crate) mod models;

pub(crate) use handlers::*;
