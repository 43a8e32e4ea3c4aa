//! # bsonify - values to documents
//!
//! bsonify walks arbitrary nested Rust values (records, maps, optionals,
//! boxed unions) and turns them into ordered documents in one of two shapes:
//!
//! - **dump**: a nested [Document](document::Document) that mirrors the
//!   structure of the value;
//! - **set update**: a flat document whose keys are dot-joined paths to each
//!   leaf, ready to be used as the field set of a `$set` update.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bsonify::doc;
//! use bsonify::common::Value;
//! use bsonify_derive::Inspect;
//!
//! #[derive(Inspect)]
//! struct Profile {
//!     #[bson = "nick,omitempty"]
//!     nick: String,
//!     #[bson = "age"]
//!     age: Option<u32>,
//! }
//!
//! #[derive(Inspect)]
//! struct User {
//!     #[bson = "name"]
//!     name: String,
//!     #[bson = "profile"]
//!     profile: Profile,
//! }
//!
//! let user = User { name: "Ann".into(), profile: Profile { nick: String::new(), age: None } };
//!
//! assert_eq!(
//!     bsonify::set_update_document(&user)?,
//!     doc!{
//!         name: "Ann",
//!         "profile.age": (Value::unset::<Option<u32>>()),
//!     }
//! );
//! ```
//!
//! ## Module Organization
//!
//! - [`bsonify`] - Entry points and the configured [`Bsonify`](bsonify::Bsonify) handle
//! - [`bsonify_builder`] - Builder for [`Bsonify`](bsonify::Bsonify)
//! - [`bsonify_config`] - Conversion options
//! - [`common`] - [`Value`](common::Value) and constants
//! - [`document`] - The ordered output [`Document`](document::Document) and the `doc!` macro
//! - [`errors`] - Error types and result definitions
//! - [`inspect`] - The [`Inspect`](inspect::Inspect) and [`Record`](inspect::Record) traits

use crate::bsonify::Bsonify;
use std::sync::LazyLock;

pub mod bsonify;
pub mod bsonify_builder;
pub mod bsonify_config;
pub mod common;
pub mod document;
pub mod errors;
pub mod inspect;

mod engine;

pub use crate::bsonify::{dump, set_update_document, set_update_mapping};

pub(crate) static DEFAULT_BSONIFY: LazyLock<Bsonify> = LazyLock::new(Bsonify::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bsonify_uses_dot_separator() {
        assert_eq!(DEFAULT_BSONIFY.config().field_separator(), common::DEFAULT_FIELD_SEPARATOR);
    }
}
