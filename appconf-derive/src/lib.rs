//! Derive macro implementation for appconf

use proc_macro::TokenStream;
use quote::{format_ident, quote, ToTokens};
use syn::ext::IdentExt;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

mod attrs;

use attrs::{FieldAttrs, Parser};

/// Whether a field name marks an environment-backed field.
///
/// The name must contain at least one cased character and no lower-case
/// characters, so `PORT` and `DB_URL2` qualify while `port`, `Port` and `_`
/// do not.
fn is_env_name(name: &str) -> bool {
    name.chars().any(char::is_uppercase) && !name.chars().any(char::is_lowercase)
}

/// `AppConfig` derive macro
///
/// Implements `appconf::AppConfig` and `Display` for a struct with named
/// fields. Only fields whose name is entirely upper-case are loaded; every
/// other field is initialised with `Default::default()`.
///
/// # Supported Attributes
///
/// **Field-level** (upper-case fields only):
/// - `#[conf(default)]`: Use `Default::default()` if the variable is not set
/// - `#[conf(default = value)]`: Use an explicit default value if the variable is not set
/// - `#[conf(parser = "func")]`: Convert with `func(RawValue) -> Result<T, E>`
/// - `#[conf(parser)]`: Convert with `Self::parse_<field name in lower case>`
///
/// # Example
///
/// See the `appconf` crate documentation for usage examples.
#[proc_macro_derive(AppConfig, attributes(conf))]
pub fn derive_app_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "AppConfig only supports structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "AppConfig only supports structs",
            ));
        }
    };

    let mut initializers = Vec::with_capacity(fields.len());
    let mut descriptors = Vec::new();
    let mut entries = Vec::new();

    for field in fields {
        let Some(field_name) = field.ident.as_ref() else {
            return Err(syn::Error::new_spanned(field, "expected a named field"));
        };
        let field_type = &field.ty;
        let attrs = FieldAttrs::from_field(field)?;
        let env_var_name = field_name.unraw().to_string();

        if !is_env_name(&env_var_name) {
            if let Some(span) = attrs.span {
                return Err(syn::Error::new(
                    span,
                    "conf attributes are only allowed on upper-case fields; \
                     other fields are never loaded from the environment",
                ));
            }
            initializers.push(quote! {
                #field_name: ::core::default::Default::default()
            });
            continue;
        }

        let default_expr = match &attrs.default {
            Some(Some(value)) => quote! { ::core::option::Option::Some(#value) },
            Some(None) => quote! {
                ::core::option::Option::Some(::core::default::Default::default())
            },
            None => quote! { ::core::option::Option::None },
        };

        let resolve_expr = match &attrs.parser {
            Some(parser) => {
                let func = match parser {
                    Parser::Path(path) => path.to_token_stream(),
                    Parser::Convention => {
                        let method =
                            format_ident!("parse_{}", env_var_name.to_lowercase());
                        quote! { Self::#method }
                    }
                };
                quote! {
                    ::appconf::de::resolve::<#field_type, _, _>(
                        __env,
                        #env_var_name,
                        #default_expr,
                        |__raw| #func(__raw).map_err(|__err| ::std::string::ToString::to_string(&__err)),
                    )?
                }
            }
            None => match &attrs.default {
                Some(default) => {
                    let default_value = match default {
                        Some(value) => value.clone(),
                        None => quote! { ::core::default::Default::default() },
                    };
                    quote! {
                        ::appconf::de::resolve_with_default::<#field_type, _>(
                            __env,
                            #env_var_name,
                            #default_value,
                        )?
                    }
                }
                None => quote! {
                    ::appconf::de::resolve_required::<#field_type, _>(__env, #env_var_name)?
                },
            },
        };

        initializers.push(quote! {
            #field_name: #resolve_expr
        });

        let type_name = field_type.to_token_stream().to_string().replace(' ', "");
        let has_default = attrs.default.is_some();
        let has_parser = attrs.parser.is_some();
        descriptors.push(quote! {
            ::appconf::FieldDescriptor {
                name: #env_var_name,
                type_name: #type_name,
                has_default: #has_default,
                has_parser: #has_parser,
            }
        });

        entries.push(quote! {
            (#env_var_name, &self.#field_name as &dyn ::core::fmt::Debug)
        });
    }

    Ok(quote! {
        impl #impl_generics ::appconf::AppConfig for #struct_name #ty_generics #where_clause {
            const FIELDS: &'static [::appconf::FieldDescriptor] = &[#(#descriptors),*];

            fn from_env<__E>(__env: &__E) -> ::core::result::Result<Self, ::appconf::ConfigError>
            where
                __E: ::appconf::EnvSource + ?Sized,
            {
                ::core::result::Result::Ok(Self {
                    #(#initializers),*
                })
            }

            fn entries(&self) -> ::std::vec::Vec<(&'static str, &dyn ::core::fmt::Debug)> {
                ::std::vec![#(#entries),*]
            }
        }

        impl #impl_generics ::core::fmt::Display for #struct_name #ty_generics #where_clause {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.debug_map()
                    .entries(::appconf::AppConfig::entries(self))
                    .finish()
            }
        }
    })
}
