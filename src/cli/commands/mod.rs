//! CLI command implementations.

pub mod cat;
pub mod ls;
pub mod rm;
pub mod set;
