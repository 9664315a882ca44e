//! Command-line surface of the demo.

use camino::Utf8PathBuf;
use clap::Parser;
use compiler_args::{ArgumentSerializer, SerializerOptions};

use crate::config::{BuildConfiguration, CompilerConfiguration, Define, Namespace};
use crate::error::{InvocationError, Result};

/// Prints the arguments a compiler would receive for the given options.
#[derive(Debug, Parser)]
#[command(name = "compile-invocation", version, about)]
pub struct Cli {
    /// Emit debug information.
    #[arg(long)]
    pub debug: Option<bool>,
    /// Source root; repeat for several.
    #[arg(long = "source-path", value_name = "DIR")]
    pub source_paths: Vec<Utf8PathBuf>,
    /// Library path; repeat for several.
    #[arg(long = "library-path", value_name = "DIR")]
    pub library_paths: Vec<Utf8PathBuf>,
    /// Namespace mapping as `URI=MANIFEST`.
    #[arg(long = "namespace", value_name = "URI=MANIFEST")]
    pub namespaces: Vec<String>,
    /// Conditional constant as `NAME` or `NAME=VALUE`.
    #[arg(long = "define", value_name = "NAME[=VALUE]")]
    pub defines: Vec<String>,
    /// Output file.
    #[arg(long)]
    pub output: Option<Utf8PathBuf>,
    /// Minimum runtime version.
    #[arg(long)]
    pub target_player: Option<String>,
    /// Character introducing each flag.
    #[arg(long, default_value_t = '-')]
    pub marker: char,
    /// Print one flag group per line instead of one token per line.
    #[arg(long)]
    pub diagnostic: bool,
    /// Log the walk at trace level on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Serializer configured from the command line.
    #[must_use]
    pub fn serializer(&self) -> ArgumentSerializer {
        ArgumentSerializer::new().with_options(SerializerOptions {
            marker: self.marker,
            ..SerializerOptions::default()
        })
    }

    /// Builds the configuration tree described by the options.
    ///
    /// # Errors
    ///
    /// Returns [`InvocationError`] when a `--define` or `--namespace` value
    /// is malformed.
    pub fn to_configuration(&self) -> Result<BuildConfiguration> {
        let namespace = self
            .namespaces
            .iter()
            .map(|raw| parse_namespace(raw))
            .collect::<Result<Vec<_>>>()?;
        let define = self
            .defines
            .iter()
            .map(|raw| parse_define(raw))
            .collect::<Result<Vec<_>>>()?;
        Ok(BuildConfiguration {
            compiler_configuration: CompilerConfiguration {
                debug: self.debug,
                source_path: non_empty(&self.source_paths),
                library_path: non_empty(&self.library_paths),
                namespace,
                define,
            },
            output: self.output.clone(),
            target_version: self.target_player.clone(),
        })
    }
}

/// Repeated options left unset stay absent rather than rendering `flag=`.
fn non_empty(paths: &[Utf8PathBuf]) -> Option<Vec<Utf8PathBuf>> {
    (!paths.is_empty()).then(|| paths.to_vec())
}

/// Parses `URI=MANIFEST`.
///
/// # Errors
///
/// Fails when either side is missing.
pub fn parse_namespace(raw: &str) -> Result<Namespace> {
    match raw.split_once('=') {
        Some((uri, manifest)) if !uri.is_empty() && !manifest.is_empty() => Ok(Namespace {
            uri: uri.to_owned(),
            manifest: Utf8PathBuf::from(manifest),
        }),
        _ => Err(InvocationError::InvalidNamespace(raw.to_owned())),
    }
}

/// Parses `NAME` or `NAME=VALUE`.
///
/// # Errors
///
/// Fails when the name is empty.
pub fn parse_define(raw: &str) -> Result<Define> {
    let (name, value) = match raw.split_once('=') {
        Some((name, value)) => (name, Some(value.to_owned())),
        None => (raw, None),
    };
    if name.is_empty() {
        return Err(InvocationError::InvalidDefine(raw.to_owned()));
    }
    Ok(Define {
        name: name.to_owned(),
        value,
    })
}
