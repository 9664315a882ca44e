//! Core crate for flattening typed compiler configuration into argument lists.
//!
//! A configuration is a tree of option groups. Each group implements
//! [`Configuration`], usually through `#[derive(Configuration)]`, and each
//! structured argument implements [`ArgumentRecord`]. The
//! [`ArgumentSerializer`] walks the tree in declaration order and renders
//! every property into one of four shapes:
//!
//! | Shape | Output |
//! | --- | --- |
//! | nested configuration | `-group.option=value` |
//! | argument record(s) | `-option sub1 sub2` |
//! | list of values | `-option=v1 -option+=v2`, or `-option=` when empty |
//! | scalar | `-option=value` |
//!
//! ```
//! use compiler_args::{ArgumentRecord, Configuration, to_arguments};
//!
//! #[derive(ArgumentRecord)]
//! #[compiler_args(order(uri, manifest))]
//! struct Namespace {
//!     uri: String,
//!     manifest: String,
//! }
//!
//! #[derive(Configuration)]
//! struct CompilerConfiguration {
//!     debug: Option<bool>,
//!     namespace: Vec<Namespace>,
//! }
//!
//! #[derive(Configuration)]
//! struct Options {
//!     compiler_configuration: CompilerConfiguration,
//!     source_path: Vec<String>,
//! }
//!
//! let options = Options {
//!     compiler_configuration: CompilerConfiguration {
//!         debug: Some(true),
//!         namespace: vec![Namespace {
//!             uri: "http://ns.example.com".to_owned(),
//!             manifest: "manifest.xml".to_owned(),
//!         }],
//!     },
//!     source_path: vec!["src".to_owned(), "generated".to_owned()],
//! };
//!
//! let args = to_arguments(&options)?;
//! assert_eq!(
//!     args.as_slice(),
//!     [
//!         "-compiler.debug=true",
//!         "-compiler.namespace",
//!         "http://ns.example.com",
//!         "manifest.xml",
//!         "-source-path=src",
//!         "-source-path+=generated",
//!     ]
//! );
//! # Ok::<(), compiler_args::ArgsError>(())
//! ```

pub use compiler_args_macros::{ArgumentRecord, Configuration};

mod arguments;
mod error;
mod introspect;
mod naming;
mod options;
mod schema;
mod serializer;
mod shape;
mod sink;

pub use arguments::{ArgumentEntry, Arguments, Diagnostic};
pub use error::{AccessError, ArgsError, ArgsResult};
pub use naming::Naming;
pub use options::SerializerOptions;
pub use schema::{ArgumentRecord, Configuration, Property};
pub use serializer::{ArgumentSerializer, to_arguments};
pub use shape::{EntryValue, Fragment, ScalarText, Shape, ShapeElement, ToFragment, ToShape};
pub use sink::{DiagnosticSink, NoopSink, TracingSink};
