#![recursion_limit = "128"]
//! # bsonify Derive Macros
//!
//! This crate provides the `Inspect` derive macro, which lets a type be walked
//! by the bsonify conversion engine.
//!
//! ## Structs
//!
//! Structs with named fields become records. Each field can carry a `bson`
//! attribute controlling its name and omission policy, either as a raw tag
//! string or in structured form:
//!
//! - `#[bson = "name,omitempty"]` - emitted as `name`, omitted while zero
//! - `#[bson = ",omitempty"]` - keeps the declared name, omitted while zero
//! - `#[bson = "-"]` - never emitted
//! - `#[bson(rename = "name", omitempty)]` - same as `"name,omitempty"`
//! - `#[bson(skip)]` - same as `"-"`
//!
//! ```rust,ignore
//! use bsonify_derive::Inspect;
//!
//! #[derive(Inspect)]
//! pub struct User {
//!     #[bson = "name"]
//!     pub name: String,
//!     #[bson(rename = "mail", omitempty)]
//!     pub email: String,
//!     #[bson(skip)]
//!     pub password_hash: String,
//! }
//! ```
//!
//! ## Enums
//!
//! Enums whose variants are unit variants or hold exactly one value become
//! unions: a variant holding a value is looked through, a unit variant is
//! an unset value.
//!
//! ```rust,ignore
//! #[derive(Inspect)]
//! pub enum Payment {
//!     Card(Card),
//!     Transfer(Transfer),
//!     Pending,
//! }
//! ```

extern crate proc_macro;
mod inspect;

use crate::inspect::{generate_inspect_for_enum, generate_inspect_for_struct};
use proc_macro::TokenStream;
use syn::{Data, DeriveInput};

/// Derives `bsonify::inspect::Inspect` (and `bsonify::inspect::Record` for
/// structs).
///
/// # Attributes
///
/// - `#[bson = "tag"]` - raw field tag, `name[,option...]` or `-`
/// - `#[bson(rename = "name", omitempty, skip)]` - structured field tag
///
/// # Errors
///
/// Returns a compile error if:
/// - The struct is a tuple or unit struct
/// - An enum variant holds more than one value
/// - A field carries more than one `bson` attribute
/// - The type is a union
#[proc_macro_derive(Inspect, attributes(bson))]
pub fn derive_inspect(input: TokenStream) -> TokenStream {
    let ast = syn::parse_macro_input!(input as DeriveInput);

    match ast.data {
        Data::Struct(ref data) => {
            let result = generate_inspect_for_struct(&ast, data);
            match result {
                Ok(token_stream) => token_stream.into(),
                Err(e) => {
                    let error = syn::Error::new(
                        e.span(),
                        format!(
                            "Failed to derive Inspect for struct '{}': {}.\n\
                             Only structs with named fields are supported.",
                            ast.ident, e
                        ),
                    );
                    error.to_compile_error().into()
                }
            }
        },
        Data::Enum(ref data) => {
            let result = generate_inspect_for_enum(&ast, data);
            match result {
                Ok(token_stream) => token_stream.into(),
                Err(e) => {
                    let error = syn::Error::new(
                        e.span(),
                        format!(
                            "Failed to derive Inspect for enum '{}': {}.\n\
                             Each variant must be a unit variant or hold exactly one value.",
                            ast.ident, e
                        ),
                    );
                    error.to_compile_error().into()
                }
            }
        },
        Data::Union(_) => {
            let error = syn::Error::new_spanned(
                &ast,
                "Cannot derive Inspect for unions. Unions are not supported by the Inspect derive macro.",
            );
            error.to_compile_error().into()
        }
    }
}
