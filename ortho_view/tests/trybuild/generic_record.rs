//! Trybuild fixture verifying the derive on generic structs with lifetimes,
//! raw identifiers and skipped fields that are not projectable.

use std::borrow::Cow;
use std::cell::Cell;

use ortho_view::{Options, Projectable, project};
use serde_json::json;

#[derive(Projectable)]
#[view(rename_all = "camelCase")]
struct Page<'a, T, const N: usize>
where
    T: Clone,
{
    #[view(groups = "admin")]
    r#type: Cow<'a, str>,
    items: Vec<T>,
    window: [u8; N],
    #[view(skip)]
    hits: Cell<u32>,
    #[view(omit_empty)]
    next_cursor: Option<String>,
}

#[derive(Clone, Projectable)]
struct Unit;

fn main() {
    let page = Page {
        r#type: Cow::Borrowed("listing"),
        items: vec![Unit, Unit],
        window: [1, 2],
        hits: Cell::new(3),
        next_cursor: None,
    };
    let projected = project(&Options::new(["admin"]), &page);
    assert_eq!(
        projected.ok(),
        Some(json!({"type": "listing", "items": [{}, {}], "window": [1, 2]})),
    );
    assert_eq!(page.hits.get(), 3);
}
