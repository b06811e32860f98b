//! Derive macros for the `aoc-solver` framework

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{Attribute, Data, DeriveInput, Fields, LitInt, LitStr, Token, parse_macro_input};

/// Implements `Solver` by dispatching each part to `PartSolver<N>`.
///
/// ```ignore
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 2)]
/// struct Chiton;
///
/// impl PartSolver<1> for Chiton { /* ... */ }
/// impl PartSolver<2> for Chiton { /* ... */ }
/// ```
///
/// Parts outside `1..=max_parts` answer `SolveError::PartNotImplemented`.
#[proc_macro_derive(AocSolver, attributes(aoc_solver))]
pub fn derive_aoc_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_aoc_solver(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Submits the type as a `SolverPlugin` so registries built with
/// `register_all_plugins` find it.
///
/// ```ignore
/// #[derive(AocSolver, AutoRegisterSolver)]
/// #[aoc_solver(max_parts = 2)]
/// #[aoc(year = 2021, day = 15, tags = ["grid", "dijkstra"])]
/// pub struct Chiton;
/// ```
///
/// The type must be a unit struct implementing `Solver`.
#[proc_macro_derive(AutoRegisterSolver, attributes(aoc))]
pub fn derive_auto_register_solver(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_auto_register(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn find_attr<'a>(input: &'a DeriveInput, name: &str) -> syn::Result<&'a Attribute> {
    input
        .attrs
        .iter()
        .find(|attr| attr.path().is_ident(name))
        .ok_or_else(|| {
            syn::Error::new_spanned(&input.ident, format!("missing #[{name}(...)] attribute"))
        })
}

fn expand_aoc_solver(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let attr = find_attr(input, "aoc_solver")?;

    let mut max_parts: Option<u8> = None;
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("max_parts") {
            let lit: LitInt = meta.value()?.parse()?;
            max_parts = Some(lit.base10_parse()?);
            Ok(())
        } else {
            Err(meta.error("unsupported key, expected `max_parts`"))
        }
    })?;

    let max_parts = match max_parts {
        Some(0) => return Err(syn::Error::new_spanned(attr, "`max_parts` must be at least 1")),
        Some(n) => n,
        None => return Err(syn::Error::new_spanned(attr, "missing `max_parts = N`")),
    };

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let arms = (1..=max_parts).map(|part| {
        quote! {
            #part => <Self as ::aoc_solver::PartSolver<#part>>::solve(shared),
        }
    });

    Ok(quote! {
        impl #impl_generics ::aoc_solver::Solver for #name #ty_generics #where_clause {
            const PARTS: u8 = #max_parts;

            fn solve_part(
                shared: &mut <Self as ::aoc_solver::AocParser>::SharedData<'_>,
                part: u8,
            ) -> ::core::result::Result<::std::string::String, ::aoc_solver::SolveError> {
                match part {
                    #(#arms)*
                    _ => ::core::result::Result::Err(
                        ::aoc_solver::SolveError::PartNotImplemented(part),
                    ),
                }
            }
        }
    })
}

fn expand_auto_register(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let is_unit = matches!(&input.data, Data::Struct(s) if matches!(s.fields, Fields::Unit));
    if !is_unit || !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "AutoRegisterSolver requires a non-generic unit struct",
        ));
    }

    let attr = find_attr(input, "aoc")?;

    let mut year: Option<u16> = None;
    let mut day: Option<u8> = None;
    let mut tags: Vec<LitStr> = Vec::new();
    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("year") {
            let lit: LitInt = meta.value()?.parse()?;
            year = Some(lit.base10_parse()?);
        } else if meta.path.is_ident("day") {
            let lit: LitInt = meta.value()?.parse()?;
            let value: u8 = lit.base10_parse()?;
            if !(1..=25).contains(&value) {
                return Err(syn::Error::new_spanned(lit, "day must be within 1..=25"));
            }
            day = Some(value);
        } else if meta.path.is_ident("tags") {
            let _eq = meta.value()?;
            let content;
            syn::bracketed!(content in meta.input);
            tags.extend(Punctuated::<LitStr, Token![,]>::parse_terminated(&content)?);
        } else {
            return Err(meta.error("unsupported key, expected `year`, `day` or `tags`"));
        }
        Ok(())
    })?;

    let year = year.ok_or_else(|| syn::Error::new_spanned(attr, "missing `year = YYYY`"))?;
    let day = day.ok_or_else(|| syn::Error::new_spanned(attr, "missing `day = D`"))?;
    let name = &input.ident;

    Ok(quote! {
        const _: () = {
            trait MustImplementSolver: ::aoc_solver::Solver {}
            impl MustImplementSolver for #name {}
        };

        ::aoc_solver::inventory::submit! {
            ::aoc_solver::SolverPlugin {
                year: #year,
                day: #day,
                solver: &#name,
                tags: &[#(#tags),*],
            }
        }
    })
}
