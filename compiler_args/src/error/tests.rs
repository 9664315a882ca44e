//! Tests for error construction and formatting.

use std::error::Error as _;

use anyhow::{Result, anyhow, ensure};
use rstest::rstest;

use super::{AccessError, ArgsError};

#[rstest]
fn unknown_accessor_becomes_schema_violation() -> Result<()> {
    let err = ArgsError::from_access(
        "compiler.namespace[0].manifest".to_owned(),
        "Namespace",
        AccessError::unknown("manifest"),
    );
    let ArgsError::SchemaViolation { path, message } = &err else {
        return Err(anyhow!("expected schema violation, got {err:?}"));
    };
    ensure!(path == "compiler.namespace[0].manifest", "path was {path}");
    ensure!(message.contains("`Namespace`"), "owner missing: {message}");
    ensure!(
        err.to_string().starts_with("schema violation at 'compiler.namespace[0].manifest'"),
        "display was {err}"
    );
    Ok(())
}

#[rstest]
fn failed_accessor_keeps_its_source() -> Result<()> {
    let err = ArgsError::from_access(
        "output".to_owned(),
        "Options",
        AccessError::failed("permission denied"),
    );
    ensure!(
        matches!(err, ArgsError::Introspection { .. }),
        "expected introspection failure"
    );
    ensure!(err.path() == "output", "path was {}", err.path());
    let source = err.source().ok_or_else(|| anyhow!("source should be kept"))?;
    ensure!(source.to_string() == "permission denied", "source was {source}");
    Ok(())
}

#[rstest]
fn cyclic_configuration_names_the_type() {
    let err = ArgsError::CyclicConfiguration {
        path: "child.parent".to_owned(),
        type_name: "Parent",
    };
    assert_eq!(
        err.to_string(),
        "cyclic configuration at 'child.parent': `Parent` is already being serialized"
    );
}
