//! One-level directory view over flat credential names.
//!
//! The store answers a path query with every credential below the path, at any
//! depth. Listing only wants the immediate children, so names nested more than
//! one level down are collapsed into a synthetic directory entry such as
//! `/dir/nested/`.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::models::{Credential, CredentialSummary};

/// Query path meaning "list everything".
pub const ROOT: &str = "/";

/// One row of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathEntry {
    /// Full credential name for leaves, `"{parent}/{segment}/"` for directories
    pub display_name: String,

    /// True when the entry stands for credentials nested deeper than one level
    pub is_directory: bool,

    /// Timestamp of the credential the entry was derived from
    pub created_at: DateTime<Utc>,
}

impl PathEntry {
    /// Entry for a credential that was matched by exact name.
    pub fn leaf(credential: &Credential) -> Self {
        Self {
            display_name: credential.name.clone(),
            is_directory: false,
            created_at: credential.version_created_at,
        }
    }
}

/// Ensure a leading `/`. An empty path means the root.
///
/// A trailing `/` is kept as given because the store query is sent verbatim.
pub fn normalize_query_path(path: &str) -> String {
    if path.is_empty() {
        ROOT.to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

/// Whether a normalized query path addresses the root.
pub fn is_root(path: &str) -> bool {
    path.trim_end_matches('/').is_empty()
}

/// The prefix stripped from every name before segmenting. Empty for the root.
fn strip_prefix(query_path: &str) -> &str {
    query_path.trim_end_matches('/')
}

/// Reduce one credential name to its entry one level below `prefix`.
///
/// `prefix` only matches whole segments: `/ab/c` is not under `/a`. A name
/// that is not under the prefix is listed as a leaf under its full name.
fn reduce(name: &str, prefix: &str) -> (String, bool) {
    let remainder = name
        .strip_prefix(prefix)
        .and_then(|rest| rest.strip_prefix('/'));

    match remainder.and_then(|rest| rest.split_once('/')) {
        Some((first, _)) => (format!("{prefix}/{first}/"), true),
        None => (name.to_string(), false),
    }
}

/// Project path-search results onto a sorted, de-duplicated one-level listing.
///
/// An empty input yields an empty listing; falling back to an exact-name
/// lookup for a non-root path is the caller's job.
pub fn project(credentials: &[CredentialSummary], query_path: &str) -> Vec<PathEntry> {
    let query_path = normalize_query_path(query_path);
    let prefix = strip_prefix(&query_path);

    let entries = credentials
        .iter()
        .map(|credential| {
            let (display_name, is_directory) = reduce(&credential.name, prefix);
            PathEntry {
                display_name,
                is_directory,
                created_at: credential.version_created_at,
            }
        })
        .collect();

    sort_and_dedup(entries)
}

/// Stable sort by display name, then keep the first entry of each name.
///
/// Applying this to its own output changes nothing.
pub fn sort_and_dedup(mut entries: Vec<PathEntry>) -> Vec<PathEntry> {
    entries.sort_by(|a, b| a.display_name.cmp(&b.display_name));

    let mut seen = HashSet::with_capacity(entries.len());
    entries.retain(|entry| seen.insert(entry.display_name.clone()));
    entries
}

/// Every credential name strictly under `query_path`, in the order the store
/// returned them.
///
/// Recursive delete walks this list as-is; it is neither sorted nor collapsed.
pub fn subtree_names<'a>(credentials: &'a [CredentialSummary], query_path: &str) -> Vec<&'a str> {
    let query_path = normalize_query_path(query_path);
    let under = format!("{}/", strip_prefix(&query_path));

    credentials
        .iter()
        .map(|credential| credential.name.as_str())
        .filter(|name| name.starts_with(&under) && name.len() > under.len())
        .collect()
}
