//! Trybuild fixture verifying unit structs derive an empty schema.

use compiler_args::{Configuration, Property};

#[derive(Configuration)]
struct Empty;

fn main() {
    let schema: &'static [Property] = Configuration::schema(&Empty);
    assert!(schema.is_empty());
}
