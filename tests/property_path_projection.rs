//! Property-based tests for path projection
//!
//! Verifies that the listing is sorted, unique, one level deep and stable
//! under re-application for arbitrary credential names.

use chrono::{TimeZone, Utc};
use proptest::prelude::*;

use credhub_fs::services::{project, sort_and_dedup, subtree_names};
use credhub_fs::CredentialSummary;

fn name_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z0-9]{1,4}", 1..5).prop_map(|segments| format!("/{}", segments.join("/")))
}

fn summaries_strategy() -> impl Strategy<Value = Vec<CredentialSummary>> {
    prop::collection::vec(name_strategy(), 0..30).prop_map(|names| {
        names
            .into_iter()
            .enumerate()
            .map(|(i, name)| {
                let at = Utc.timestamp_opt(1_600_000_000 + i as i64, 0).unwrap();
                CredentialSummary::new(name, at)
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_root_listing_is_sorted_and_unique(creds in summaries_strategy()) {
        let entries = project(&creds, "/");
        for pair in entries.windows(2) {
            prop_assert!(pair[0].display_name < pair[1].display_name);
        }
    }

    #[test]
    fn prop_root_entries_are_one_level_deep(creds in summaries_strategy()) {
        for entry in project(&creds, "/") {
            let trimmed = entry.display_name.trim_start_matches('/').trim_end_matches('/');
            prop_assert!(!trimmed.contains('/'), "{} is nested", entry.display_name);
            prop_assert_eq!(entry.is_directory, entry.display_name.ends_with('/'));
        }
    }

    #[test]
    fn prop_every_credential_is_represented(creds in summaries_strategy()) {
        let entries = project(&creds, "/");
        for cred in &creds {
            let covered = entries.iter().any(|entry| {
                entry.display_name == cred.name
                    || (entry.is_directory && cred.name.starts_with(&entry.display_name))
            });
            prop_assert!(covered, "{} not covered", cred.name);
        }
    }

    #[test]
    fn prop_sort_and_dedup_is_idempotent(creds in summaries_strategy()) {
        let once = project(&creds, "/");
        prop_assert_eq!(sort_and_dedup(once.clone()), once);
    }

    #[test]
    fn prop_subtree_names_are_under_path(creds in summaries_strategy(), dir in "[a-z0-9]{1,4}") {
        let path = format!("/{dir}");
        let under = format!("{path}/");
        let names = subtree_names(&creds, &path);
        prop_assert!(names.iter().all(|name| name.starts_with(&under)));
        let expected = creds.iter().filter(|c| c.name.starts_with(&under)).count();
        prop_assert_eq!(names.len(), expected);
    }
}
