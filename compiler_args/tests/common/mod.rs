//! Shared fixtures: a small compiler configuration tree.

use std::path::PathBuf;

use compiler_args::{ArgumentRecord, Configuration};
use indexmap::IndexMap;

/// A `-namespace uri manifest` argument.
#[derive(Debug, Clone, ArgumentRecord)]
#[compiler_args(order(uri, manifest))]
pub struct Namespace {
    pub manifest: PathBuf,
    pub uri: String,
}

/// A `-define name value` argument.
#[derive(Debug, Clone, ArgumentRecord)]
#[compiler_args(order(name, value))]
pub struct Define {
    pub name: String,
    pub value: Option<String>,
}

/// A record whose map sub-field flattens into key/value tokens.
#[derive(Debug, Clone, ArgumentRecord)]
#[compiler_args(order(frame, classes))]
pub struct Frame {
    pub frame: String,
    pub classes: IndexMap<String, Option<String>>,
}

/// Font manager options, nested under the compiler group.
#[derive(Debug, Clone, Default, Configuration)]
pub struct FontsConfiguration {
    pub advanced_anti_aliasing: Option<bool>,
    pub managers: Option<Vec<String>>,
}

/// The compiler option group.
#[derive(Debug, Clone, Default, Configuration)]
pub struct CompilerConfiguration {
    pub debug: Option<bool>,
    pub source_path: Option<Vec<PathBuf>>,
    pub namespace: Option<Vec<Namespace>>,
    pub fonts_configuration: Option<FontsConfiguration>,
    pub define: Option<Vec<Define>>,
    pub locale: Option<Vec<String>>,
}

/// Metadata option group.
#[derive(Debug, Clone, Default, Configuration)]
pub struct MetadataConfiguration {
    pub title: Option<String>,
    pub contributor: Option<Vec<String>>,
}

/// Root of the fixture tree.
#[derive(Debug, Clone, Default, Configuration)]
pub struct ApplicationConfiguration {
    pub compiler_configuration: Option<CompilerConfiguration>,
    pub metadata_configuration: Option<MetadataConfiguration>,
    pub default_size: Option<String>,
    pub frame: Option<Frame>,
    pub output: Option<PathBuf>,
    #[compiler_args(skip)]
    pub cache_dir: Option<PathBuf>,
    #[compiler_args(flag = "target-player")]
    pub player_version: Option<String>,
}

/// A fully populated configuration exercising every shape.
pub fn sample() -> ApplicationConfiguration {
    let mut classes = IndexMap::new();
    classes.insert("mx.core.Application".to_owned(), Some("app".to_owned()));
    classes.insert("mx.managers.SystemManager".to_owned(), None);

    ApplicationConfiguration {
        compiler_configuration: Some(CompilerConfiguration {
            debug: Some(true),
            source_path: Some(vec![PathBuf::from("src/main/flex"), PathBuf::from("gen")]),
            namespace: Some(vec![
                Namespace {
                    uri: "http://ns.adobe.com/mxml/2009".to_owned(),
                    manifest: PathBuf::from("mxml-manifest.xml"),
                },
                Namespace {
                    uri: "library://ns.adobe.com/flex/spark".to_owned(),
                    manifest: PathBuf::from("spark-manifest.xml"),
                },
            ]),
            fonts_configuration: Some(FontsConfiguration {
                advanced_anti_aliasing: Some(false),
                managers: None,
            }),
            define: Some(vec![Define {
                name: "CONFIG::debug".to_owned(),
                value: Some("true".to_owned()),
            }]),
            locale: Some(Vec::new()),
        }),
        metadata_configuration: Some(MetadataConfiguration {
            title: Some("Demo".to_owned()),
            contributor: Some(vec!["alice".to_owned(), "bob".to_owned(), "carol".to_owned()]),
        }),
        default_size: None,
        frame: Some(Frame {
            frame: "two".to_owned(),
            classes,
        }),
        output: Some(PathBuf::from("target/app.swf")),
        cache_dir: Some(PathBuf::from("/tmp/cache")),
        player_version: Some("10.0.0".to_owned()),
    }
}

/// Expected tokens for [`sample`].
pub const SAMPLE_TOKENS: &[&str] = &[
    "-compiler.debug=true",
    "-compiler.source-path=src/main/flex",
    "-compiler.source-path+=gen",
    "-compiler.namespace",
    "http://ns.adobe.com/mxml/2009",
    "mxml-manifest.xml",
    "-compiler.namespace",
    "library://ns.adobe.com/flex/spark",
    "spark-manifest.xml",
    "-compiler.fonts.advanced-anti-aliasing=false",
    "-compiler.define",
    "CONFIG::debug",
    "true",
    "-compiler.locale=",
    "-metadata.title=Demo",
    "-metadata.contributor=alice",
    "-metadata.contributor+=bob",
    "-metadata.contributor+=carol",
    "-frame",
    "two",
    "mx.core.Application",
    "app",
    "mx.managers.SystemManager",
    "-output=target/app.swf",
    "-target-player=10.0.0",
];
