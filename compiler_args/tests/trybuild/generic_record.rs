//! Trybuild fixture verifying the derives carry generic parameters and
//! bounds through to the generated impls.

use compiler_args::{ArgumentRecord, Configuration, ToFragment, ToShape};

#[derive(ArgumentRecord)]
#[compiler_args(order(key, value))]
struct Pair<V>
where
    V: ToFragment,
{
    key: String,
    value: V,
}

#[derive(Configuration)]
struct Tagged<'a, T: ToShape> {
    label: &'a str,
    tag: Option<T>,
    pairs: Vec<Pair<u32>>,
}

fn main() {
    let config = Tagged {
        label: "demo",
        tag: Some(7_u8),
        pairs: vec![Pair { key: "k".to_owned(), value: 1 }],
    };
    let _ = compiler_args::to_arguments(&config);
}
