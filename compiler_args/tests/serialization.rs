//! Behavioural tests for flattening configuration trees into arguments.

mod common;

use std::collections::BTreeMap;

use anyhow::Result;
use compiler_args::{
    ArgumentEntry, ArgumentRecord, ArgumentSerializer, Configuration, NoopSink, SerializerOptions,
    to_arguments,
};
use rstest::rstest;

use common::{ApplicationConfiguration, CompilerConfiguration, SAMPLE_TOKENS, sample};

#[derive(Configuration)]
struct FooBar {
    foo_bar: Option<String>,
}

#[derive(Configuration)]
struct Items {
    items: Vec<String>,
}

#[derive(Configuration)]
struct CompilerOptionsConfiguration {
    debug: bool,
}

#[derive(Configuration)]
#[expect(non_snake_case, reason = "mirrors accessor-style property names")]
struct CamelCaseRoot {
    compilerOptionsConfiguration: CompilerOptionsConfiguration,
}

#[derive(ArgumentRecord)]
#[compiler_args(order(uri, manifest))]
struct Namespace {
    manifest: String,
    uri: String,
}

#[derive(Configuration)]
struct WithNamespace {
    namespace: Namespace,
}

#[derive(ArgumentRecord)]
#[compiler_args(order(name, options))]
struct Theme {
    name: String,
    options: BTreeMap<String, String>,
}

#[derive(Configuration)]
struct WithTheme {
    theme: Theme,
}

#[rstest]
fn unset_configuration_renders_nothing() -> Result<()> {
    let tree = to_arguments(&ApplicationConfiguration::default())?;
    assert!(tree.is_empty(), "unexpected tokens {tree:?}");
    let scalar = to_arguments(&FooBar { foo_bar: None })?;
    assert!(scalar.is_empty());
    Ok(())
}

#[rstest]
fn missing_configuration_renders_nothing() -> Result<()> {
    let args = ArgumentSerializer::new().arguments(None::<&ApplicationConfiguration>)?;
    assert!(args.is_empty());
    Ok(())
}

#[rstest]
fn scalar_property_renders_assignment() -> Result<()> {
    let args = to_arguments(&FooBar {
        foo_bar: Some("baz".to_owned()),
    })?;
    assert_eq!(args.as_slice(), ["-foo-bar=baz"]);
    Ok(())
}

#[rstest]
#[case::empty(&[], &["-items="])]
#[case::single(&["a"], &["-items=a"])]
#[case::three(&["a", "b", "c"], &["-items=a", "-items+=b", "-items+=c"])]
fn list_property_uses_additive_flags(
    #[case] items: &[&str],
    #[case] expected: &[&str],
) -> Result<()> {
    let config = Items {
        items: items.iter().map(|item| (*item).to_owned()).collect(),
    };
    let args = to_arguments(&config)?;
    assert_eq!(args.as_slice(), expected);
    assert_eq!(args.groups().len(), expected.len());
    Ok(())
}

#[rstest]
fn nested_configuration_suffix_is_stripped() -> Result<()> {
    let args = to_arguments(&CamelCaseRoot {
        compilerOptionsConfiguration: CompilerOptionsConfiguration { debug: true },
    })?;
    assert_eq!(args.as_slice(), ["-compiler-options.debug=true"]);
    Ok(())
}

#[rstest]
fn record_renders_sub_fields_in_declared_order() -> Result<()> {
    let args = to_arguments(&WithNamespace {
        namespace: Namespace {
            manifest: "m.xml".to_owned(),
            uri: "http://x".to_owned(),
        },
    })?;
    assert_eq!(args.as_slice(), ["-namespace", "http://x", "m.xml"]);
    Ok(())
}

#[rstest]
fn record_map_sub_field_interleaves_keys_and_values() -> Result<()> {
    let options = BTreeMap::from([
        ("color".to_owned(), "blue".to_owned()),
        ("accent".to_owned(), "red".to_owned()),
    ]);
    let args = to_arguments(&WithTheme {
        theme: Theme {
            name: "halo".to_owned(),
            options,
        },
    })?;
    assert_eq!(
        args.as_slice(),
        ["-theme", "halo", "accent", "red", "color", "blue"]
    );
    Ok(())
}

#[rstest]
fn full_tree_renders_in_declaration_order() -> Result<()> {
    let args = to_arguments(&sample())?;
    assert_eq!(args.as_slice(), SAMPLE_TOKENS);
    Ok(())
}

#[rstest]
fn groups_match_the_collected_entries() -> Result<()> {
    let serializer = ArgumentSerializer::new().with_sink(NoopSink);
    let config = sample();
    let entries = serializer.entries(Some(&config))?;
    let args = serializer.arguments(Some(&config))?;
    assert_eq!(args.groups(), entries);
    Ok(())
}

#[rstest]
fn repeated_serialization_is_identical() -> Result<()> {
    let config = sample();
    let first = to_arguments(&config)?;
    let second = to_arguments(&config)?;
    assert_eq!(first, second);
    Ok(())
}

#[rstest]
fn options_change_marker_and_naming() -> Result<()> {
    let serializer = ArgumentSerializer::new()
        .with_sink(NoopSink)
        .with_options(SerializerOptions {
            marker: '+',
            accessor_prefix: None,
            nested_suffix: String::new(),
        });
    let config = ApplicationConfiguration {
        compiler_configuration: Some(CompilerConfiguration {
            debug: Some(false),
            ..CompilerConfiguration::default()
        }),
        ..ApplicationConfiguration::default()
    };
    let args = serializer.arguments(Some(&config))?;
    assert_eq!(args.as_slice(), ["+compiler-configuration.debug=false"]);
    assert_eq!(
        args.groups(),
        [ArgumentEntry::flag("compiler-configuration.debug=false")]
    );
    Ok(())
}

#[rstest]
fn trait_objects_serialize_like_concrete_types() -> Result<()> {
    let config = sample();
    let erased: &dyn Configuration = &config;
    let args = to_arguments(erased)?;
    assert_eq!(args.as_slice(), SAMPLE_TOKENS);
    Ok(())
}
