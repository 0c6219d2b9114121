//! Trybuild fixture verifying `#[view(crate = "...")]` works with a
//! dependency renamed through `use ... as`.

use ortho_view as views;
use serde_json::json;
use views::{Options, Projectable, project};

/// Generated impls must reference types through `views` rather than
/// `ortho_view`.
#[derive(Projectable)]
#[view(crate = "views")]
struct Aliased {
    #[view(groups = "api")]
    value: String,
    count: u32,
}

fn main() {
    let aliased = Aliased {
        value: "hello".into(),
        count: 1,
    };
    let projected: views::ProjectResult<_> = project(&Options::new(["api"]), &aliased);
    assert_eq!(projected.ok(), Some(json!({"value": "hello", "count": 1})));
}
