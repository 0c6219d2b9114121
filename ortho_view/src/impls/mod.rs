//! [`crate::Projectable`] and [`crate::ProjectKey`] implementations for
//! standard library and `serde_json` types.

mod collections;
mod passthrough;
mod pointers;
mod scalars;

pub use passthrough::Encoded;
