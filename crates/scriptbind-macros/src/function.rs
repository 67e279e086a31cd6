//! Implementation of the `#[function]` attribute and the per-function
//! metadata shared with `#[native_module]`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{FnArg, ItemFn, Signature, Type, parse_macro_input};

use crate::attrs::FunctionAttrs;

pub fn function_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let attrs = parse_macro_input!(attr as FunctionAttrs);
    let input = parse_macro_input!(item as ItemFn);

    match function_inner(&attrs, &input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn function_inner(attrs: &FunctionAttrs, input: &ItemFn) -> syn::Result<TokenStream2> {
    let fn_name = &input.sig.ident;
    let fn_vis = &input.vis;
    let script_name = attrs.name.clone().unwrap_or_else(|| fn_name.to_string());

    let meta_fn_name = format_ident!("__scriptbind_{}_meta", fn_name);
    let exported = exported_function(&input.sig, &script_name)?;

    Ok(quote! {
        #input

        #[doc(hidden)]
        #fn_vis fn #meta_fn_name() -> ::scriptbind_core::ExportedFunction {
            #exported
        }
    })
}

/// Build an `ExportedFunction` expression for a plain function signature.
///
/// Parameter tags come from each type's `ParamType` impl, so a parameter type
/// that cannot cross the boundary fails to compile here.
pub fn exported_function(sig: &Signature, script_name: &str) -> syn::Result<TokenStream2> {
    check_signature(sig)?;

    let fn_name = &sig.ident;
    let tys = param_types(sig)?;
    let indices = 0..tys.len();

    Ok(quote! {
        ::scriptbind_core::ExportedFunction::new(
            #script_name,
            ::std::vec![#(<#tys as ::scriptbind_core::ParamType>::TAG),*],
            |__args: &::scriptbind_core::Arguments<'_>| -> ::std::result::Result<(), ::scriptbind_core::NativeError> {
                let _ = #fn_name(#(__args.get::<#tys>(#indices)?),*);
                ::std::result::Result::Ok(())
            },
        )
    })
}

fn check_signature(sig: &Signature) -> syn::Result<()> {
    if !sig.generics.params.is_empty() || sig.generics.where_clause.is_some() {
        return Err(syn::Error::new_spanned(
            &sig.generics,
            "script-bound functions cannot be generic",
        ));
    }
    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "script-bound functions cannot be async",
        ));
    }
    if let Some(variadic) = &sig.variadic {
        return Err(syn::Error::new_spanned(
            variadic,
            "script-bound functions cannot be variadic",
        ));
    }
    Ok(())
}

fn param_types(sig: &Signature) -> syn::Result<Vec<&Type>> {
    sig.inputs
        .iter()
        .map(|arg| match arg {
            FnArg::Receiver(receiver) => Err(syn::Error::new_spanned(
                receiver,
                "script-bound functions cannot take `self`",
            )),
            FnArg::Typed(pat_type) => match pat_type.ty.as_ref() {
                Type::ImplTrait(ty) => Err(syn::Error::new_spanned(
                    ty,
                    "script-bound functions cannot take `impl Trait` parameters",
                )),
                ty => check_param_type(ty).map(|()| ty),
            },
        })
        .collect()
}

/// Reject parameter types that can never implement `ParamType`. Anything
/// else is left to the trait bound in the generated code.
fn check_param_type(ty: &Type) -> syn::Result<()> {
    let supported = match ty {
        Type::Paren(inner) => return check_param_type(&inner.elem),
        Type::Group(inner) => return check_param_type(&inner.elem),
        Type::Reference(r) => r.mutability.is_none() && is_path_ident(&r.elem, "str"),
        Type::Path(_) => !is_path_ident(ty, "bool") && !is_path_ident(ty, "char"),
        Type::Macro(_) | Type::Verbatim(_) => true,
        _ => false,
    };
    if supported {
        Ok(())
    } else {
        Err(syn::Error::new_spanned(
            ty,
            "unsupported parameter type: script arguments decode to integers, `f32`, `f64`, `&str` or `String`",
        ))
    }
}

fn is_path_ident(ty: &Type, name: &str) -> bool {
    matches!(ty, Type::Path(p) if p.qself.is_none() && p.path.is_ident(name))
}
