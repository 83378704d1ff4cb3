use async_trait::async_trait;

use crate::domain::errors::StoreResult;
use crate::domain::models::{Credential, CredentialSummary};

/// Flat, name-keyed credential store
///
/// The store has no notion of directories. Names merely contain `/`
/// separators; hierarchy is reconstructed client-side by the path projector.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Fetch the single credential whose name matches exactly
    ///
    /// # Errors
    /// - `InvalidName` if `name` is empty
    /// - `NotFound` if nothing matches
    /// - `Ambiguous` if the store returns more than one match
    async fn get_by_name(&self, name: &str) -> StoreResult<Credential>;

    /// Fetch name and timestamp of every credential strictly under `path`
    ///
    /// An empty result is valid and is not an error. The result never contains
    /// a credential named exactly `path`.
    async fn find_by_path(&self, path: &str) -> StoreResult<Vec<CredentialSummary>>;

    /// Delete the credential whose name matches exactly
    ///
    /// # Errors
    /// - `NotFound` if nothing matches
    async fn delete_by_name(&self, name: &str) -> StoreResult<()>;

    /// Write a new `value` version of the named credential
    async fn set_by_name(&self, name: &str, value: &str) -> StoreResult<Credential>;
}
