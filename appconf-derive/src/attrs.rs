//! Attribute parsing for `#[conf(...)]` annotations.
//!
//! This module extracts and validates configuration attributes from struct fields
//! during macro expansion.

use proc_macro2::Span;
use syn::spanned::Spanned;
use syn::{Field, LitStr};

/// Custom parser selection for a field.
#[derive(Debug)]
pub enum Parser {
    /// `#[conf(parser)]`: `Self::parse_<field name in lower case>`
    Convention,
    /// `#[conf(parser = "path::to::fn")]`
    Path(syn::Path),
}

/// Parsed `#[conf(...)]` attributes from a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Default value strategy:
    /// - `None`: Field is required (no default)
    /// - `Some(None)`: Use `Default::default()`
    /// - `Some(Some(tokens))`: Use explicit token stream as default value
    pub default: Option<Option<proc_macro2::TokenStream>>,

    /// Custom parser replacing `FromRaw` coercion.
    pub parser: Option<Parser>,

    /// Span of the first `#[conf(...)]` attribute, if any.
    pub span: Option<Span>,
}

impl FieldAttrs {
    /// Extract and parse `#[conf(...)]` attributes from a struct field.
    ///
    /// Attributes other than `conf` are left for other macros.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("conf") {
                continue;
            }
            attrs.span.get_or_insert(attr.span());

            attr.parse_nested_meta(|meta| {
                // default or default = value
                if meta.path.is_ident("default") {
                    if attrs.default.is_some() {
                        return Err(meta.error("duplicate default attribute"));
                    }
                    if meta.input.peek(syn::Token![=]) {
                        let value = meta.value()?;
                        let expr: syn::Expr = value.parse()?;
                        attrs.default = Some(Some(quote::quote!(#expr)));
                    } else {
                        attrs.default = Some(None);
                    }
                    return Ok(());
                }

                // parser or parser = "function::path"
                if meta.path.is_ident("parser") {
                    if attrs.parser.is_some() {
                        return Err(meta.error("duplicate parser attribute"));
                    }
                    if meta.input.peek(syn::Token![=]) {
                        let value = meta.value()?;
                        let lit: LitStr = value.parse()?;
                        attrs.parser = Some(Parser::Path(lit.parse()?));
                    } else {
                        attrs.parser = Some(Parser::Convention);
                    }
                    return Ok(());
                }

                Err(meta.error("unsupported conf attribute, expected `default` or `parser`"))
            })?;
        }

        Ok(attrs)
    }
}
