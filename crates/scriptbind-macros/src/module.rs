//! Implementation of the `#[native_module]` attribute macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Item, ItemMod, Visibility, parse_macro_input};

use crate::attrs::{ScriptAttrs, strip_script_attrs};
use crate::function::exported_function;

pub fn native_module_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    if !attr.is_empty() {
        return syn::Error::new_spanned(
            TokenStream2::from(attr),
            "#[native_module] takes no arguments",
        )
        .to_compile_error()
        .into();
    }

    let input = parse_macro_input!(item as ItemMod);

    match native_module_inner(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn native_module_inner(mut input: ItemMod) -> syn::Result<TokenStream2> {
    let Some((_, items)) = input.content.as_mut() else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "#[native_module] needs an inline module body",
        ));
    };

    let mut declarations = Vec::new();
    for item in items.iter_mut() {
        if let Some(decl) = declaration(item)? {
            declarations.push(decl);
        }
        if let Some(attrs) = item_attrs_mut(item) {
            strip_script_attrs(attrs);
        }
    }

    items.push(syn::parse_quote! {
        /// Members of this module in declaration order.
        pub fn __declarations() -> ::std::vec::Vec<::scriptbind_core::Declaration> {
            ::std::vec![#(#declarations),*]
        }
    });
    items.push(syn::parse_quote! {
        /// Names this module as a type for registration.
        pub struct Exports;
    });
    items.push(syn::parse_quote! {
        impl ::scriptbind_core::NativeModule for Exports {
            fn declarations() -> ::std::vec::Vec<::scriptbind_core::Declaration> {
                __declarations()
            }
        }
    });

    Ok(quote! { #input })
}

/// The declaration expression for one item, or `None` if it isn't a
/// public member.
fn declaration(item: &Item) -> syn::Result<Option<TokenStream2>> {
    let (vis, attrs, ident) = match item {
        Item::Fn(f) => (&f.vis, &f.attrs, &f.sig.ident),
        Item::Const(c) => (&c.vis, &c.attrs, &c.ident),
        Item::Static(s) => (&s.vis, &s.attrs, &s.ident),
        Item::Struct(s) => (&s.vis, &s.attrs, &s.ident),
        Item::Enum(e) => (&e.vis, &e.attrs, &e.ident),
        Item::Union(u) => (&u.vis, &u.attrs, &u.ident),
        Item::Type(t) => (&t.vis, &t.attrs, &t.ident),
        Item::Trait(t) => (&t.vis, &t.attrs, &t.ident),
        Item::Mod(m) => (&m.vis, &m.attrs, &m.ident),
        _ => return Ok(None),
    };

    if !matches!(vis, Visibility::Public(_)) {
        return Ok(None);
    }

    let script = ScriptAttrs::from_attrs(attrs)?;
    if script.skip {
        return Ok(None);
    }
    let name = script.name.unwrap_or_else(|| ident.to_string());

    let decl = match item {
        Item::Fn(f) => {
            let exported = exported_function(&f.sig, &name)?;
            quote! { ::scriptbind_core::Declaration::Function(#exported) }
        }
        Item::Const(_) | Item::Static(_) => quote! { ::scriptbind_core::Declaration::Constant(#name) },
        Item::Mod(_) => quote! { ::scriptbind_core::Declaration::Module(#name) },
        _ => quote! { ::scriptbind_core::Declaration::Type(#name) },
    };
    Ok(Some(decl))
}

fn item_attrs_mut(item: &mut Item) -> Option<&mut Vec<syn::Attribute>> {
    match item {
        Item::Fn(f) => Some(&mut f.attrs),
        Item::Const(c) => Some(&mut c.attrs),
        Item::Static(s) => Some(&mut s.attrs),
        Item::Struct(s) => Some(&mut s.attrs),
        Item::Enum(e) => Some(&mut e.attrs),
        Item::Union(u) => Some(&mut u.attrs),
        Item::Type(t) => Some(&mut t.attrs),
        Item::Trait(t) => Some(&mut t.attrs),
        Item::Mod(m) => Some(&mut m.attrs),
        _ => None,
    }
}
