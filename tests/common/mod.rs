//! Common test utilities for integration tests
//!
//! Provides an in-memory credential store and fixtures shared across the
//! command and property test files.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use credhub_fs::domain::models::VALUE_TYPE;
use credhub_fs::{Credential, CredentialStore, CredentialSummary, StoreError, StoreResult};

/// Fixed timestamp: 2020-01-`day` 00:00:00 UTC
pub fn at(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, day, 0, 0, 0).unwrap()
}

/// Which store call should fail, and with what
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Get,
    Find,
    /// Fail the delete of the n-th call (0-based)
    DeleteAt(usize),
}

#[derive(Default)]
struct State {
    credentials: Vec<Credential>,
    deleted: Vec<String>,
    delete_calls: usize,
    failure: Option<Failure>,
}

/// Credential store backed by a vector, preserving insertion order the way the
/// real store preserves its own ordering in path searches.
#[derive(Default)]
pub struct InMemoryCredentialStore {
    state: Mutex<State>,
}

impl InMemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with `(name, value)` pairs, timestamps 2020-01-01, 02, ...
    pub fn with(entries: &[(&str, &str)]) -> Self {
        let store = Self::new();
        for (i, (name, value)) in entries.iter().enumerate() {
            store.insert(name, value, at(i as u32 + 1));
        }
        store
    }

    pub fn insert(&self, name: &str, value: &str, version_created_at: DateTime<Utc>) {
        self.state.lock().unwrap().credentials.push(Credential {
            id: None,
            name: name.to_string(),
            credential_type: VALUE_TYPE.to_string(),
            value: value.to_string(),
            version_created_at,
        });
    }

    pub fn fail_on(&self, failure: Failure) {
        self.state.lock().unwrap().failure = Some(failure);
    }

    pub fn names(&self) -> Vec<String> {
        let state = self.state.lock().unwrap();
        state.credentials.iter().map(|c| c.name.clone()).collect()
    }

    /// Names deleted so far, in call order
    pub fn deleted(&self) -> Vec<String> {
        self.state.lock().unwrap().deleted.clone()
    }

    fn injected(status: u16) -> StoreError {
        StoreError::ServerError {
            status: reqwest::StatusCode::from_u16(status).unwrap(),
            body: "injected failure".to_string(),
        }
    }
}

#[async_trait]
impl CredentialStore for InMemoryCredentialStore {
    async fn get_by_name(&self, name: &str) -> StoreResult<Credential> {
        let state = self.state.lock().unwrap();
        if state.failure == Some(Failure::Get) {
            return Err(Self::injected(500));
        }
        if name.is_empty() {
            return Err(StoreError::InvalidName);
        }

        let matches: Vec<_> = state.credentials.iter().filter(|c| c.name == name).collect();
        match matches.len() {
            0 => Err(StoreError::NotFound {
                name: name.to_string(),
            }),
            1 => Ok(matches[0].clone()),
            count => Err(StoreError::Ambiguous {
                name: name.to_string(),
                count,
            }),
        }
    }

    async fn find_by_path(&self, path: &str) -> StoreResult<Vec<CredentialSummary>> {
        let state = self.state.lock().unwrap();
        if state.failure == Some(Failure::Find) {
            return Err(Self::injected(500));
        }

        let under = format!("{}/", path.trim_end_matches('/'));
        Ok(state
            .credentials
            .iter()
            .filter(|c| c.name.starts_with(&under) && c.name != path)
            .map(CredentialSummary::from)
            .collect())
    }

    async fn delete_by_name(&self, name: &str) -> StoreResult<()> {
        let mut state = self.state.lock().unwrap();
        let call = state.delete_calls;
        state.delete_calls += 1;
        if state.failure == Some(Failure::DeleteAt(call)) {
            return Err(Self::injected(500));
        }

        let before = state.credentials.len();
        state.credentials.retain(|c| c.name != name);
        if state.credentials.len() == before {
            return Err(StoreError::NotFound {
                name: name.to_string(),
            });
        }
        state.deleted.push(name.to_string());
        Ok(())
    }

    async fn set_by_name(&self, name: &str, value: &str) -> StoreResult<Credential> {
        if name.is_empty() {
            return Err(StoreError::InvalidName);
        }
        let mut state = self.state.lock().unwrap();
        state.credentials.retain(|c| c.name != name);
        let credential = Credential {
            id: None,
            name: name.to_string(),
            credential_type: VALUE_TYPE.to_string(),
            value: value.to_string(),
            version_created_at: at(28),
        };
        state.credentials.push(credential.clone());
        Ok(credential)
    }
}
