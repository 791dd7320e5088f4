//! Implementation of the `#[derive(CasePaths)]` macro.
//!
//! Every variant gets a case path whose `extract` consumes the enum and whose
//! `embed` rebuilds the variant. Multi-field and struct variants are carried
//! as tuples in declaration order.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Generics, Ident, Type, Variant, parse_macro_input};

/// Main implementation of the `CasePaths` derive macro.
pub fn derive_case_paths_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = expand(&input);

    TokenStream::from(expanded)
}

fn expand(input: &DeriveInput) -> TokenStream2 {
    match &input.data {
        Data::Enum(data_enum) => generate_enum_case_paths(
            &input.ident,
            &input.generics,
            &data_enum.variants.iter().collect::<Vec<_>>(),
        ),
        Data::Struct(_) => syn::Error::new_spanned(
            &input.ident,
            "CasePaths can only be derived for enums, not structs. Use #[derive(KeyPaths)] for structs.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "CasePaths cannot be derived for unions.")
                .to_compile_error()
        }
    }
}

fn generate_enum_case_paths(name: &Ident, generics: &Generics, variants: &[&Variant]) -> TokenStream2 {
    let methods: Vec<TokenStream2> = variants
        .iter()
        .map(|variant| generate_variant_case_path(variant))
        .collect();

    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    quote! {
        impl #impl_generics #name #type_generics #where_clause {
            #(#methods)*
        }
    }
}

fn generate_variant_case_path(variant: &Variant) -> TokenStream2 {
    let variant_name = &variant.ident;
    let method_name = format_ident!("{}_case", to_snake_case(&variant_name.to_string()));

    match &variant.fields {
        Fields::Unit => unit_case_path(variant_name, &method_name),
        Fields::Unnamed(fields) => {
            let field_types: Vec<&Type> = fields.unnamed.iter().map(|field| &field.ty).collect();
            if let [field_type] = field_types.as_slice() {
                single_field_case_path(variant_name, &method_name, field_type)
            } else {
                tuple_case_path(variant_name, &method_name, &field_types)
            }
        }
        Fields::Named(fields) => {
            let field_names: Vec<&Ident> = fields
                .named
                .iter()
                .filter_map(|field| field.ident.as_ref())
                .collect();
            let field_types: Vec<&Type> = fields.named.iter().map(|field| &field.ty).collect();
            struct_case_path(variant_name, &method_name, &field_names, &field_types)
        }
    }
}

fn unit_case_path(variant_name: &Ident, method_name: &Ident) -> TokenStream2 {
    quote! {
        /// Returns a case path to the `#variant_name` variant.
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::statecraft::paths::CasePath<Self, ()> + Clone {
            ::statecraft::paths::FunctionCasePath::new(
                |root: Self| match root {
                    Self::#variant_name => Some(()),
                    #[allow(unreachable_patterns)]
                    _ => None,
                },
                |(): ()| Self::#variant_name,
            )
        }
    }
}

fn single_field_case_path(variant_name: &Ident, method_name: &Ident, field_type: &Type) -> TokenStream2 {
    quote! {
        /// Returns a case path to the `#variant_name` variant.
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::statecraft::paths::CasePath<Self, #field_type> + Clone {
            ::statecraft::paths::FunctionCasePath::new(
                |root: Self| match root {
                    Self::#variant_name(value) => Some(value),
                    #[allow(unreachable_patterns)]
                    _ => None,
                },
                |value: #field_type| Self::#variant_name(value),
            )
        }
    }
}

fn tuple_case_path(variant_name: &Ident, method_name: &Ident, field_types: &[&Type]) -> TokenStream2 {
    let tuple_type = quote! { (#(#field_types),*) };
    let bindings: Vec<Ident> = (0..field_types.len())
        .map(|index| format_ident!("v{}", index))
        .collect();

    quote! {
        /// Returns a case path to the `#variant_name` variant, carrying its
        /// fields as a tuple.
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::statecraft::paths::CasePath<Self, #tuple_type> + Clone {
            ::statecraft::paths::FunctionCasePath::new(
                |root: Self| match root {
                    Self::#variant_name(#(#bindings),*) => Some((#(#bindings),*)),
                    #[allow(unreachable_patterns)]
                    _ => None,
                },
                |(#(#bindings),*): #tuple_type| Self::#variant_name(#(#bindings),*),
            )
        }
    }
}

fn struct_case_path(
    variant_name: &Ident,
    method_name: &Ident,
    field_names: &[&Ident],
    field_types: &[&Type],
) -> TokenStream2 {
    let tuple_type = quote! { (#(#field_types),*) };

    quote! {
        /// Returns a case path to the `#variant_name` variant, carrying its
        /// fields as a tuple in declaration order.
        #[inline]
        #[must_use]
        pub fn #method_name() -> impl ::statecraft::paths::CasePath<Self, #tuple_type> + Clone {
            ::statecraft::paths::FunctionCasePath::new(
                |root: Self| match root {
                    Self::#variant_name { #(#field_names),* } => Some((#(#field_names),*)),
                    #[allow(unreachable_patterns)]
                    _ => None,
                },
                |(#(#field_names),*): #tuple_type| Self::#variant_name { #(#field_names),* },
            )
        }
    }
}

/// Converts a `PascalCase` variant name to `snake_case`.
fn to_snake_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len() + 4);
    let chars: Vec<char> = input.chars().collect();

    for (index, &character) in chars.iter().enumerate() {
        if character.is_uppercase() {
            if index > 0 {
                let previous = chars[index - 1];
                let next_is_lowercase = chars.get(index + 1).is_some_and(|c| c.is_lowercase());

                // "keyPress" -> "key_press", "XMLParser" -> "xml_parser"
                if previous.is_lowercase() || (previous.is_uppercase() && next_is_lowercase) {
                    result.push('_');
                }
            }
            result.extend(character.to_lowercase());
        } else {
            result.push(character);
        }
    }

    result
}
