use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod expand;
mod utils;

/// Generates the named conversion surface for a case style enum.
///
/// For every unit variant this emits a `<name>_to_words` tokenizer binding and a
/// `words_to_<name>` formatter binding, and for every ordered pair of variants a
/// `<from>_to_<to>` conversion function. It also implements `ALL`, `name()`, `converter()`
/// and `FromStr` on the enum.
///
/// The enum must derive `Clone, Copy, PartialEq` and provide inherent `tokenize`, `format`
/// and `convert` methods. Conversion functions pass their optional input straight to
/// `convert`, tokenizer bindings treat `None` as an empty string.
///
/// # Attributes
///
/// - `#[conversions(error = "ParseCaseError")]` on the enum: the `FromStr` error type. It must
///   implement `From<String>`.
/// - `#[case(name = "screaming", alias = "screaming-snake")]` on a variant: override the
///   canonical name (defaults to the variant name in snake case) and add extra names accepted
///   by `FromStr`.
#[proc_macro_derive(Conversions, attributes(conversions, case))]
pub fn conversions(item: TokenStream) -> TokenStream {
    // NOTE: A derive is enough here, the enum itself is left untouched.
    let input = parse_macro_input!(item as DeriveInput);

    expand::expand(&input)
        .unwrap_or_else(|err| err.into_compile_error())
        .into()
}
