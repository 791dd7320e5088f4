//! Implementation of the `#[derive(KeyPaths)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, parse_macro_input};

/// Main implementation of the `KeyPaths` derive macro.
pub fn derive_key_paths_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = expand(&input);

    TokenStream::from(expanded)
}

fn expand(input: &DeriveInput) -> TokenStream2 {
    match &input.data {
        Data::Struct(data_struct) => {
            generate_struct_key_paths(&input.ident, &input.generics, &data_struct.fields)
        }
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "KeyPaths can only be derived for structs, not enums. Use #[derive(CasePaths)] for enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "KeyPaths cannot be derived for unions.")
                .to_compile_error()
        }
    }
}

fn generate_struct_key_paths(name: &Ident, generics: &Generics, fields: &Fields) -> TokenStream2 {
    match fields {
        Fields::Named(named_fields) => {
            let methods = named_fields.named.iter().filter_map(|field| {
                let field_name = field.ident.as_ref()?;
                let field_type = &field.ty;
                let method_name = format_ident!("{}_key_path", field_name);

                Some(quote! {
                    /// Returns a writable key path to the `#field_name` field.
                    #[inline]
                    #[must_use]
                    pub fn #method_name() -> impl ::statecraft::paths::KeyPath<Self, #field_type> + Clone {
                        ::statecraft::paths::FunctionKeyPath::new(
                            |root: &Self| &root.#field_name,
                            |root: &mut Self| &mut root.#field_name,
                        )
                    }
                })
            });

            let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

            quote! {
                impl #impl_generics #name #type_generics #where_clause {
                    #(#methods)*
                }
            }
        }
        Fields::Unnamed(_) => syn::Error::new_spanned(
            name,
            "KeyPaths can only be derived for structs with named fields, not tuple structs.",
        )
        .to_compile_error(),
        Fields::Unit => syn::Error::new_spanned(
            name,
            "KeyPaths cannot be derived for unit structs (structs with no fields).",
        )
        .to_compile_error(),
    }
}
