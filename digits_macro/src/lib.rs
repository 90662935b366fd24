extern crate proc_macro;
use proc_macro::TokenStream;
use quote::{quote, ToTokens};

//      _
//   __| | ___  ___
//  / _` |/ _ \/ __|
// | (_| |  __/ (__
//  \__,_|\___|\___|
//  FIGLET: dec

/// A `DecimalString` literal, checked at compile time.
///
/// Accepts a string literal (`dec!("0042")`) or an unsuffixed decimal integer
/// literal (`dec!(42)`). The expansion is a `const` expression.
#[proc_macro]
pub fn dec(input: TokenStream) -> TokenStream {
    match syn::parse::<DecimalLiteral>(input) {
        Ok(literal) => literal.into_token_stream().into(),
        Err(e) => e.to_compile_error().into(),
    }
}

//  ____                _
// |  _ \ __ _ _ __ ___(_)_ __   __ _
// | |_) / _` | '__/ __| | '_ \ / _` |
// |  __/ (_| | |  \__ \ | | | | (_| |
// |_|   \__,_|_|  |___/_|_| |_|\__, |
//                              |___/
//  FIGLET: Parsing

struct DecimalLiteral(syn::LitStr);

impl syn::parse::Parse for DecimalLiteral {
    fn parse(input: syn::parse::ParseStream<'_>) -> syn::Result<Self> {
        let lit: syn::Lit = input.parse()?;
        let literal = match lit {
            syn::Lit::Str(lit) => {
                check_digits(&lit.value(), &lit)?;
                lit
            }
            syn::Lit::Int(lit) => {
                if !lit.suffix().is_empty() {
                    return Err(syn::Error::new(
                        lit.span(),
                        "integer suffixes are not allowed in decimal literals",
                    ));
                }
                // Checked as written, so radix prefixes and `_` separators fail.
                let written = lit.to_string();
                check_digits(&written, &lit)?;
                syn::LitStr::new(&written, lit.span())
            }
            lit => {
                return Err(syn::Error::new(
                    lit.span(),
                    "expected a string or integer literal",
                ))
            }
        };
        if !input.is_empty() {
            return Err(input.error("unexpected tokens after decimal literal"));
        }
        Ok(Self(literal))
    }
}

fn check_digits(digits: &str, spanned: &impl syn::spanned::Spanned) -> syn::Result<()> {
    if digits.is_empty() {
        return Err(syn::Error::new(spanned.span(), "empty decimal literal"));
    }
    match digits.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        Some((position, found)) => Err(syn::Error::new(
            spanned.span(),
            format!("invalid digit `{}` at position {}", found, position),
        )),
        None => Ok(()),
    }
}

//  _____                            _
// | ____|_  ___ __   __ _ _ __  ___(_) ___  _ __
// |  _| \ \/ / '_ \ / _` | '_ \/ __| |/ _ \| '_ \
// | |___ >  <| |_) | (_| | | | \__ \ | (_) | | | |
// |_____/_/\_\ .__/ \__,_|_| |_|___/_|\___/|_| |_|
//            |_|
//  FIGLET: Expansion

impl quote::ToTokens for DecimalLiteral {
    fn to_tokens(&self, out: &mut proc_macro2::TokenStream) {
        let digits = &self.0;
        out.extend(quote! {
            ::digits::DecimalString::from_static_unchecked(#digits)
        })
    }
}
