//! Group-selective projection of Rust values into `serde_json` trees.
//!
//! A single model can expose several views (public, private, admin, summary)
//! without per-view serialisation code. Fields carry group tags; a projection
//! includes only fields whose groups intersect the caller's active groups.
//! Untagged fields are always included unless a flattened parent passes its
//! own groups down to them.
//!
//! The [`Projectable`] derive emits a static field table for a struct. The
//! projector walks that table, applies the visibility rules, flattens
//! composed fields into their parent and normalises nested records,
//! sequences and maps into [`serde_json::Value`].
//!
//! ```
//! use ortho_view::{Options, Projectable, project};
//! use serde_json::json;
//!
//! #[derive(Projectable)]
//! struct Contact {
//!     #[view(groups = "private")]
//!     email: String,
//! }
//!
//! #[derive(Projectable)]
//! #[view(rename_all = "camelCase")]
//! struct Profile {
//!     user_id: u64,
//!     #[view(groups = "admin", omit_empty)]
//!     notes: Vec<String>,
//!     #[view(flatten)]
//!     contact: Contact,
//! }
//!
//! let profile = Profile {
//!     user_id: 7,
//!     notes: vec!["vip".into()],
//!     contact: Contact { email: "ada@example.com".into() },
//! };
//!
//! let public = project(&Options::new(["public"]), &profile)?;
//! assert_eq!(public, json!({"userId": 7}));
//!
//! let everything = project(&Options::new(["admin", "private"]), &profile)?;
//! assert_eq!(
//!     everything,
//!     json!({"userId": 7, "notes": ["vip"], "email": "ada@example.com"}),
//! );
//! # Ok::<_, ortho_view::ProjectError>(())
//! ```
//!
//! The projector does not detect reference cycles. Values reachable through
//! `Rc`/`Arc` cycles recurse until the stack is exhausted.

extern crate self as ortho_view;

pub use ortho_view_macros::Projectable;

mod context;
mod encodable;
mod error;
mod impls;
mod options;
mod projector;
mod record;
mod shape;

pub use context::Context;
pub use encodable::{View, to_encodable};
pub use error::{KeyKind, ProjectError, ProjectResult};
pub use impls::Encoded;
pub use options::Options;
pub use projector::project;
pub use record::{FieldDescriptor, Record};
pub use shape::{ProjectKey, ProjectSelf, Projectable, Shape};

/// Items referenced by derive-generated code.
#[doc(hidden)]
pub mod __private {
    pub use serde::Serialize;
}
