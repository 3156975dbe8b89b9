use proc_macro::TokenStream;
use quote::quote;
use syn::{
    Data, DeriveInput, Error, Field, Fields, GenericArgument, Ident, LitStr, PathArguments,
    Result, Type,
    parse::{Parse, ParseStream},
};

pub(crate) fn expand_from_parts(input: &DeriveInput) -> Result<TokenStream> {
    let Data::Struct(data) = &input.data else {
        Err(Error::new_spanned(
            input,
            "`FromParts` may only be derived on structs.",
        ))?
    };

    let Fields::Named(fields) = &data.fields else {
        Err(Error::new_spanned(
            input,
            "`FromParts` may only be derived on structs with named fields.",
        ))?
    };

    let fields = fields
        .named
        .iter()
        .map(FieldMetadata::parse)
        .map(Result::transpose)
        .flatten() // Skip fields without an attribute.
        .collect::<Result<Vec<_>>>()?;

    let mut text_cases = Vec::new();
    let mut raw_cases = Vec::new();

    let mut seen: Vec<(Representation, String)> = Vec::new();

    for field in fields {
        let FieldMetadata {
            name,
            part,
            representation,
            is_vec,
        } = field;

        let claim = (representation, part.value());
        if seen.contains(&claim) {
            Err(Error::new_spanned(&part, "Part names must be unique."))?
        }
        seen.push(claim);

        let assignment = match (representation, is_vec) {
            (Representation::Text, false) => quote! { self.#name = Some(value.to_owned()) },
            (Representation::Text, true) => quote! { self.#name.push(value.to_owned()) },
            (Representation::Raw, false) => quote! { self.#name = Some(value) },
            (Representation::Raw, true) => quote! { self.#name.push(value) },
        };

        let case = quote! { #part => { #assignment } };

        match representation {
            Representation::Text => text_cases.push(case),
            Representation::Raw => raw_cases.push(case),
        }
    }

    let add_text = (!text_cases.is_empty()).then(|| {
        quote! {
            fn add_text(&mut self, name: &str, value: &str) {
                match name {
                    #(#text_cases)*
                    _ => {}
                };
            }
        }
    });

    let add_raw = (!raw_cases.is_empty()).then(|| {
        quote! {
            fn add_raw(&mut self, name: &str, value: Bytes) {
                match name {
                    #(#raw_cases)*
                    _ => {}
                };
            }
        }
    });

    let name = &input.ident;

    let expanded = quote! {
        impl FromParts for #name {
            #add_text
            #add_raw
        }
    };

    Ok(expanded.into())
}

/// The decode path a field receives from, keyed by its value type.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Representation {
    Text,
    Raw,
}

#[derive(Debug)]
struct FieldMetadata {
    name: Ident,
    part: LitStr,
    representation: Representation,
    is_vec: bool,
}

impl FieldMetadata {
    fn parse(field: &Field) -> Result<Option<Self>> {
        let name = field.ident.clone().unwrap();

        let Some(attr) = field.attrs.iter().find(|a| a.path().is_ident("part")) else {
            return Ok(None);
        };

        let PartAttribute { part } = attr.meta.require_list()?.parse_args()?;

        let Type::Path(path) = &field.ty else {
            Err(Error::new_spanned(
                &field.ty,
                "Field must have a type annotation.",
            ))?
        };

        let Some(segment) = path.path.segments.first() else {
            Err(Error::new_spanned(
                &path.path.segments,
                "Field must have an `Option<T>` or `Vec<T>` type.",
            ))?
        };

        let is_vec = if segment.ident == "Option" {
            false
        } else if segment.ident == "Vec" {
            true
        } else {
            Err(Error::new_spanned(
                &segment.ident,
                "Field must have an `Option<T>` or `Vec<T>` type.",
            ))?
        };

        let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
            Err(Error::new_spanned(
                &segment.arguments,
                "Field container must have a generic parameter.",
            ))?
        };

        let Some(GenericArgument::Type(Type::Path(inner))) = arguments.args.first() else {
            Err(Error::new_spanned(
                &arguments.args,
                "Field container must have a generic type parameter.",
            ))?
        };

        let Some(inner) = inner.path.segments.last() else {
            Err(Error::new_spanned(
                &inner.path,
                "Field container must have a generic type parameter.",
            ))?
        };

        let representation = if inner.ident == "String" {
            Representation::Text
        } else if inner.ident == "Bytes" {
            Representation::Raw
        } else {
            Err(Error::new_spanned(
                &inner.ident,
                "Field value type must be `String` or `Bytes`.",
            ))?
        };

        Ok(Some(Self {
            name,
            part,
            representation,
            is_vec,
        }))
    }
}

#[derive(Debug)]
struct PartAttribute {
    part: LitStr,
}

impl Parse for PartAttribute {
    fn parse(input: ParseStream) -> Result<Self> {
        let part = input.parse::<LitStr>()?;
        Ok(Self { part })
    }
}
