//! Code generation for the derives.
//!
//! `configuration` emits the property table and accessor for nested option
//! groups; `record` emits the ordered sub-field table for structured
//! arguments. Both also implement the shape conversions so the derived types
//! slot into parent configurations without extra glue.

pub(crate) mod configuration;
pub(crate) mod record;
