#![allow(unknown_lints)]
#![allow(require_stability_comment)]

use proc_macro::TokenStream;

use proc_macro2::{Ident, Span};

#[macro_use]
extern crate quote;

fn image_number(input: TokenStream) -> usize {
    let item: syn::LitInt = syn::parse(input).expect("failed to parse input");
    item.base10_parse::<usize>().expect("image number must be an integer")
}

/// Runs image generator `N` into `test_NNNN.img` and evaluates to the image's SHA-256, hex encoded.
#[cfg(not(tarpaulin_include))]
#[proc_macro]
pub fn generate_image(input: TokenStream) -> TokenStream {
    let num_to_gen = image_number(input);
    let filename = format!("test_{:04}.img", num_to_gen);
    let generate_fn = Ident::new(
        format!("generate_{:04}", num_to_gen).as_str(),
        Span::call_site(),
    );
    let output = quote! {
        {
            use std::fs::OpenOptions;
            let file = OpenOptions::new().read(true).write(true).create(true).open(#filename).unwrap();

            #generate_fn(&file);
            drop(file);

            extfs_tests::imagegen::digest_file(#filename)
        }
    };
    output.into()
}

/// Opens image `N` as a disk.
#[cfg(not(tarpaulin_include))]
#[proc_macro]
pub fn load_image(input: TokenStream) -> TokenStream {
    let num_to_gen = image_number(input);
    let filename = format!("test_{:04}.img", num_to_gen);
    let output = quote! {
        DiskFile::open(#filename).unwrap()
    };
    output.into()
}

/// `assert_or_err!(condition, error)` returns `Err(error.into())` when the condition is false.
#[cfg(not(tarpaulin_include))]
#[proc_macro]
pub fn assert_or_err(input: TokenStream) -> TokenStream {
    let params = syn::parse_macro_input!(input with syn::punctuated::Punctuated<syn::Expr, syn::Token![,]>::parse_terminated);
    assert_eq!(params.len(), 2, "assert_or_err! takes a condition and an error");
    let test = &params[0];
    let error = &params[1];
    let output = quote! {
        if (!(#test)) {
            return Err(#error.into());
        }
    };
    output.into()
}

/// Marks a test that logs through extfs's test logger.
#[cfg(not(tarpaulin_include))]
#[proc_macro_attribute]
pub fn test_fs(_: TokenStream, item: TokenStream) -> TokenStream {
    let input_fn = syn::parse_macro_input!(item as syn::ItemFn);
    let input_attrs = input_fn.attrs.clone();
    let input_sig = input_fn.sig.clone();
    let input_blk = input_fn.block.stmts.clone();
    let output = quote! {
        #[test]
        #(#input_attrs)*
        #input_sig {
            extfs::test::logging::init_log();
            #(#input_blk)*
        }
    };
    output.into()
}
