use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{
    parse_quote, Attribute, DataEnum, DataStruct, DeriveInput, Expr, ExprLit, Field, Fields, Generics, Lit,
    LitStr, Meta, Result,
};

const TAG_SKIP: &str = "-";
const OPTION_OMIT_EMPTY: &str = "omitempty";

pub(crate) fn generate_inspect_for_struct(ast: &DeriveInput, data: &DataStruct) -> Result<TokenStream> {
    // Parse out all the fields from the struct
    let fields: Vec<&Field> = match &data.fields {
        Fields::Named(fields) => fields.named.iter().collect(),
        Fields::Unnamed(fields) => {
            return Err(syn::Error::new(fields.span(), "tuple structs have no field names"))
        }
        Fields::Unit => return Err(syn::Error::new(ast.ident.span(), "unit structs have no fields")),
    };

    let mut idents = Vec::with_capacity(fields.len());
    let mut declared_names = Vec::with_capacity(fields.len());
    let mut tags = Vec::with_capacity(fields.len());
    for field in &fields {
        let Some(ident) = field.ident.as_ref() else {
            return Err(syn::Error::new(field.span(), "field has no name"));
        };
        idents.push(ident);
        declared_names.push(ident.unraw().to_string());
        tags.push(match field_tag(&field.attrs)? {
            Some(tag) => quote! { ::std::option::Option::Some(#tag) },
            None => quote! { ::std::option::Option::None },
        });
    }
    let indices: Vec<usize> = (0..fields.len()).collect();

    let name = &ast.ident;
    let type_name = name.to_string();
    let generics = add_trait_bounds(ast.generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    // Generate the implementation of the traits
    let gen = quote! {
        impl #impl_generics bsonify::inspect::Inspect for #name #ty_generics #where_clause {
            fn kind(&self) -> bsonify::inspect::Kind<'_> {
                bsonify::inspect::Kind::Record(self)
            }

            fn is_zero(&self) -> bool {
                bsonify::inspect::Record::all_fields_zero(self)
            }
        }

        impl #impl_generics bsonify::inspect::Record for #name #ty_generics #where_clause {
            fn schema(&self) -> &'static bsonify::inspect::RecordSchema {
                static SCHEMA: ::std::sync::LazyLock<bsonify::inspect::RecordSchema> =
                    ::std::sync::LazyLock::new(|| {
                        bsonify::inspect::RecordSchema::new(
                            #type_name,
                            &[#(bsonify::inspect::FieldSpec::new(#declared_names, #tags)),*],
                        )
                    });
                &SCHEMA
            }

            fn field(&self, index: usize) -> ::std::option::Option<&dyn bsonify::inspect::Inspect> {
                match index {
                    #(#indices => ::std::option::Option::Some(&self.#idents as &dyn bsonify::inspect::Inspect),)*
                    _ => ::std::option::Option::None,
                }
            }
        }
    };

    Ok(gen)
}

pub(crate) fn generate_inspect_for_enum(ast: &DeriveInput, data: &DataEnum) -> Result<TokenStream> {
    let name = &ast.ident;
    let generics = add_trait_bounds(ast.generics.clone());
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    let variant_count = data.variants.len();
    if variant_count == 0 {
        return Err(syn::Error::new(name.span(), "enums without variants cannot hold a value"));
    }
    let mut kind_arms = Vec::with_capacity(variant_count);
    let mut zero_arms = Vec::with_capacity(variant_count);
    let mut key_arms = Vec::with_capacity(variant_count);

    for variant in &data.variants {
        let variant_ident = &variant.ident;
        match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                kind_arms.push(quote! {
                    #name::#variant_ident(inner) => bsonify::inspect::Kind::Indirection(
                        ::std::option::Option::Some(inner as &dyn bsonify::inspect::Inspect)
                    )
                });
                zero_arms.push(quote! { #name::#variant_ident(_) => false });
                key_arms.push(quote! {
                    #name::#variant_ident(inner) => bsonify::inspect::Inspect::as_key(inner)
                });
            }
            Fields::Unit => {
                kind_arms.push(quote! {
                    #name::#variant_ident => bsonify::inspect::Kind::Indirection(::std::option::Option::None)
                });
                zero_arms.push(quote! { #name::#variant_ident => true });
                key_arms.push(quote! { #name::#variant_ident => ::std::option::Option::None });
            }
            _ => {
                return Err(syn::Error::new(
                    variant.span(),
                    format!("variant '{}' must be a unit variant or hold exactly one value", variant_ident),
                ))
            }
        }
    }

    let gen = quote! {
        impl #impl_generics bsonify::inspect::Inspect for #name #ty_generics #where_clause {
            fn kind(&self) -> bsonify::inspect::Kind<'_> {
                match self {
                    #(#kind_arms,)*
                }
            }

            fn is_zero(&self) -> bool {
                match self {
                    #(#zero_arms,)*
                }
            }

            fn as_key(&self) -> ::std::option::Option<&str> {
                match self {
                    #(#key_arms,)*
                }
            }
        }
    };

    Ok(gen)
}

/// Reads the `bson` attribute of a field and lowers it to a raw tag string.
fn field_tag(attrs: &[Attribute]) -> Result<Option<LitStr>> {
    let mut tag: Option<LitStr> = None;
    for attr in attrs {
        if !attr.path().is_ident("bson") {
            continue;
        }
        if tag.is_some() {
            return Err(syn::Error::new(attr.span(), "duplicate bson attribute"));
        }

        tag = Some(match &attr.meta {
            Meta::NameValue(name_value) => match &name_value.value {
                Expr::Lit(ExprLit { lit: Lit::Str(s), .. }) => s.clone(),
                other => return Err(syn::Error::new(other.span(), "bson tag must be a string literal")),
            },
            Meta::List(_) => structured_tag(attr)?,
            Meta::Path(path) => {
                return Err(syn::Error::new(path.span(), "expected #[bson = \"...\"] or #[bson(...)]"))
            }
        });
    }
    Ok(tag)
}

fn structured_tag(attr: &Attribute) -> Result<LitStr> {
    let mut rename: Option<String> = None;
    let mut omit_empty = false;
    let mut skip = false;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("rename") {
            let value = meta.value()?;
            let s: LitStr = value.parse()?;
            rename = Some(s.value());
            Ok(())
        } else if meta.path.is_ident("omitempty") {
            omit_empty = true;
            Ok(())
        } else if meta.path.is_ident("skip") {
            skip = true;
            Ok(())
        } else {
            Err(meta.error("unsupported bson option, expected `rename`, `omitempty` or `skip`"))
        }
    })?;

    let tag = if skip {
        TAG_SKIP.to_string()
    } else {
        let mut tag = rename.unwrap_or_default();
        if omit_empty {
            tag.push(',');
            tag.push_str(OPTION_OMIT_EMPTY);
        }
        tag
    };
    Ok(LitStr::new(&tag, attr.span()))
}

// Add a bound `T: Inspect` to every type parameter T.
fn add_trait_bounds(mut generics: Generics) -> Generics {
    for param in generics.type_params_mut() {
        param.bounds.push(parse_quote!(bsonify::inspect::Inspect));
    }
    generics
}
