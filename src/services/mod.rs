//! Local, pure logic between the store client and the command handlers.

pub mod listing_format;
pub mod path_projector;

pub use listing_format::{format_entry_date, render, ListingStyle};
pub use path_projector::{
    is_root, normalize_query_path, project, sort_and_dedup, subtree_names, PathEntry, ROOT,
};
