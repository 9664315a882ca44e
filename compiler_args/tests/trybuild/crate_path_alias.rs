//! Trybuild fixture verifying `#[compiler_args(crate = "...")]` resolves
//! every generated path through a renamed import.

use compiler_args as my_args;
use my_args::{ArgumentRecord, Configuration};

#[derive(ArgumentRecord)]
#[compiler_args(crate = "my_args", order(uri, manifest))]
struct Namespace {
    uri: String,
    manifest: String,
}

#[derive(Configuration)]
#[compiler_args(crate = "my_args")]
struct AliasedConfiguration {
    debug: Option<bool>,
    namespace: Vec<Namespace>,
    #[compiler_args(flag = "target-player")]
    player: String,
}

fn main() {
    let config = AliasedConfiguration {
        debug: Some(true),
        namespace: vec![Namespace {
            uri: "http://x".to_owned(),
            manifest: "m.xml".to_owned(),
        }],
        player: "10".to_owned(),
    };
    let result = my_args::to_arguments(&config);
    let _: my_args::ArgsResult<my_args::Arguments> = result;
}
