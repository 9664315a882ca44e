//! Typed configuration tree for the demo compiler.

use camino::Utf8PathBuf;
use compiler_args::{ArgumentRecord, Configuration};

/// Maps a namespace URI to its component manifest.
#[derive(Debug, Clone, PartialEq, Eq, ArgumentRecord)]
#[compiler_args(order(uri, manifest))]
pub struct Namespace {
    /// Namespace URI.
    pub uri: String,
    /// Manifest listing the namespace's components.
    pub manifest: Utf8PathBuf,
}

/// A conditional compilation constant.
#[derive(Debug, Clone, PartialEq, Eq, ArgumentRecord)]
#[compiler_args(order(name, value))]
pub struct Define {
    /// Constant name, e.g. `CONFIG::debug`.
    pub name: String,
    /// Constant value; omitted when unset.
    pub value: Option<String>,
}

/// Options rendered under the `compiler.` group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Configuration)]
pub struct CompilerConfiguration {
    /// Emit debug information.
    pub debug: Option<bool>,
    /// Source roots.
    pub source_path: Option<Vec<Utf8PathBuf>>,
    /// Library paths.
    pub library_path: Option<Vec<Utf8PathBuf>>,
    /// Namespace manifests.
    pub namespace: Vec<Namespace>,
    /// Conditional compilation constants.
    pub define: Vec<Define>,
}

/// Root of the demo configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Configuration)]
pub struct BuildConfiguration {
    /// Compiler options.
    pub compiler_configuration: CompilerConfiguration,
    /// Output file.
    pub output: Option<Utf8PathBuf>,
    /// Minimum runtime version.
    #[compiler_args(flag = "target-player")]
    pub target_version: Option<String>,
}
