//! Error types produced while flattening configuration into arguments.

mod access;
mod types;

pub use access::AccessError;
pub use types::{ArgsError, ArgsResult};

#[cfg(test)]
mod tests;
