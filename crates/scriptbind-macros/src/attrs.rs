//! Attribute parsing for the scriptbind macros.

use syn::{
    Attribute, Ident, LitStr, Token,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
};

/// Parsed `#[function(...)]` arguments.
#[derive(Debug, Default)]
pub struct FunctionAttrs {
    /// Script-visible name (default: the Rust function name)
    pub name: Option<String>,
}

impl Parse for FunctionAttrs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut result = Self::default();

        if input.is_empty() {
            return Ok(result);
        }

        let items = Punctuated::<NameValue, Token![,]>::parse_terminated(input)?;
        for item in items {
            match item.name.to_string().as_str() {
                "name" => result.name = Some(item.value.value()),
                other => {
                    return Err(syn::Error::new(
                        item.name.span(),
                        format!("unknown function attribute: {other}"),
                    ));
                }
            }
        }

        Ok(result)
    }
}

/// `ident = "literal"`
struct NameValue {
    name: Ident,
    value: LitStr,
}

impl Parse for NameValue {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name: Ident = input.parse()?;
        let _: Token![=] = input.parse()?;
        let value: LitStr = input.parse()?;
        Ok(NameValue { name, value })
    }
}

/// Parsed `#[script(...)]` helper attributes on a module item.
#[derive(Debug, Default)]
pub struct ScriptAttrs {
    /// Override the script-visible name
    pub name: Option<String>,
    /// Leave the item out of the module's declarations
    pub skip: bool,
}

impl ScriptAttrs {
    pub fn from_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut result = Self::default();

        for attr in attrs {
            if !is_script_attr(attr) {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let value: LitStr = meta.value()?.parse()?;
                    result.name = Some(value.value());
                } else if meta.path.is_ident("skip") {
                    result.skip = true;
                } else {
                    return Err(meta.error(format!(
                        "unknown script attribute: {}",
                        meta.path.get_ident().map(|i| i.to_string()).unwrap_or_default()
                    )));
                }
                Ok(())
            })?;
        }

        Ok(result)
    }
}

pub fn is_script_attr(attr: &Attribute) -> bool {
    attr.path().is_ident("script")
}

/// Drop `#[script(...)]` helpers so they don't reach the compiler.
pub fn strip_script_attrs(attrs: &mut Vec<Attribute>) {
    attrs.retain(|attr| !is_script_attr(attr));
}
