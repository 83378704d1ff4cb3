//! Domain layer for credhub-fs
//!
//! This module contains the credential models, the closed error taxonomy of the
//! store client, and the port trait that command handlers program against.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{StoreError, StoreResult};
