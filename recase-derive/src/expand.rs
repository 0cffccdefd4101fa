use std::collections::HashMap;

use darling::{FromDeriveInput, FromVariant, ast::Data};
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{DeriveInput, Ident, LitStr, Path, Result, Visibility};

use crate::utils::{is_snake_ident, pascal_to_snake};

/// Names that would make the generated tokenizer and formatter bindings collide.
const RESERVED_NAMES: &[&str] = &["words"];

#[derive(FromDeriveInput)]
#[darling(attributes(conversions), supports(enum_unit))]
struct ConversionsInput {
    /// The identifier of the style enum.
    ident: Ident,
    /// The visibility of the style enum, reused for every generated item.
    vis: Visibility,
    data: Data<CaseVariant, ()>,
    /// The error type returned by the generated `FromStr` implementation.
    error: Path,
}

#[derive(FromVariant)]
#[darling(attributes(case))]
struct CaseVariant {
    /// The identifier of the variant.
    ident: Ident,
    /// The name override. Defaults to the variant identifier in snake case.
    name: Option<LitStr>,
    /// Extra names accepted when parsing the style.
    #[darling(multiple)]
    alias: Vec<LitStr>,
}

/// A single case style with its resolved name.
struct Style {
    variant: Ident,
    name: String,
    aliases: Vec<String>,
}

impl Style {
    fn try_from(variant: CaseVariant) -> Result<Self> {
        let (name, span) = match &variant.name {
            Some(lit) => (lit.value(), lit.span()),
            None => (pascal_to_snake(&variant.ident.to_string()), variant.ident.span()),
        };

        if !is_snake_ident(&name) {
            return Err(syn::Error::new(
                span,
                format!("Invalid case name '{name}'. Names must be lowercase snake_case identifiers"),
            ));
        }

        if RESERVED_NAMES.contains(&name.as_str()) {
            return Err(syn::Error::new(span, format!("The case name '{name}' is reserved")));
        }

        Ok(Self {
            variant: variant.ident,
            name,
            aliases: variant.alias.iter().map(LitStr::value).collect(),
        })
    }

    /// The style name as prose, used in generated docs.
    fn human(&self) -> String {
        self.name.replace('_', " ")
    }

    fn tokenizer_ident(&self) -> Ident {
        format_ident!("{}_to_words", self.name)
    }

    fn formatter_ident(&self) -> Ident {
        format_ident!("words_to_{}", self.name)
    }

    fn converter_ident(&self, to: &Self) -> Ident {
        format_ident!("{}_to_{}", self.name, to.name)
    }

    /// Every string `FromStr` accepts for this style.
    fn accepted(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.name.as_str()).chain(self.aliases.iter().map(String::as_str))
    }
}

/// Builds the generated items for a resolved set of styles.
struct ConversionsBuilder<'a> {
    ident: &'a Ident,
    vis: &'a Visibility,
    styles: &'a [Style],
}

impl ConversionsBuilder<'_> {
    /// Build the `<name>_to_words` and `words_to_<name>` bindings for a style.
    fn build_bindings(&self, style: &Style) -> TokenStream {
        let ident = self.ident;
        let vis = self.vis;
        let variant = &style.variant;
        let tokenizer = style.tokenizer_ident();
        let formatter = style.formatter_ident();

        let tokenizer_doc = format!(
            "Splits a {} case string into lowercase words.\n\n`None` is treated as an empty string.",
            style.human()
        );
        let formatter_doc = format!("Joins lowercase words into a {} case string.", style.human());

        quote! {
            #[doc = #tokenizer_doc]
            #vis fn #tokenizer<'a>(input: impl Into<Option<&'a str>>) -> Vec<String> {
                #ident::#variant.tokenize(input.into().unwrap_or_default())
            }

            #[doc = #formatter_doc]
            #vis fn #formatter<S: AsRef<str>>(words: &[S]) -> String {
                #ident::#variant.format(words)
            }
        }
    }

    /// Build the named conversion function from `from` to `to`.
    fn build_conversion(&self, from: &Style, to: &Style) -> TokenStream {
        let ident = self.ident;
        let vis = self.vis;
        let from_variant = &from.variant;
        let to_variant = &to.variant;
        let name = from.converter_ident(to);

        let doc = if from.name == to.name {
            format!(
                "Identity conversion for {} case: returns the input unchanged.\n\n\
                `None` converts to an empty string.",
                from.human()
            )
        } else {
            format!(
                "Converts a {} case string into {} case.\n\n`None` converts to an empty string.",
                from.human(),
                to.human()
            )
        };

        quote! {
            #[doc = #doc]
            #vis fn #name<'a>(input: impl Into<Option<&'a str>>) -> String {
                #ident::#from_variant.convert(#ident::#to_variant, input)
            }
        }
    }

    /// Build the `converter` lookup table arm for a pair.
    fn build_converter_arm(&self, from: &Style, to: &Style) -> TokenStream {
        let from_variant = &from.variant;
        let to_variant = &to.variant;
        let name = from.converter_ident(to);

        quote! {
            (Self::#from_variant, Self::#to_variant) => {
                fn convert(input: Option<&str>) -> String {
                    #name(input)
                }
                convert
            }
        }
    }

    fn build_impl(&self, error: &Path) -> TokenStream {
        let ident = self.ident;
        let vis = self.vis;
        let count = self.styles.len();
        let variants: Vec<_> = self.styles.iter().map(|style| &style.variant).collect();
        let names: Vec<_> = self.styles.iter().map(|style| style.name.as_str()).collect();

        let converter_arms = self.styles.iter().flat_map(|from| {
            self.styles.iter().map(move |to| self.build_converter_arm(from, to))
        });

        let parse_arms = self.styles.iter().map(|style| {
            let variant = &style.variant;
            let accepted: Vec<_> = style.accepted().collect();
            quote! { #(#accepted)|* => Ok(Self::#variant) }
        });

        quote! {
            impl #ident {
                /// Every case style, in declaration order.
                #vis const ALL: [Self; #count] = [#(Self::#variants),*];

                /// The canonical name of the case style.
                #vis const fn name(self) -> &'static str {
                    match self {
                        #(Self::#variants => #names),*
                    }
                }

                /// Returns the named conversion function from `self` to `to`.
                #vis fn converter(self, to: Self) -> fn(Option<&str>) -> String {
                    match (self, to) {
                        #(#converter_arms)*
                    }
                }
            }

            impl ::core::str::FromStr for #ident {
                type Err = #error;

                fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                    match s {
                        #(#parse_arms,)*
                        other => Err(<#error as ::core::convert::From<String>>::from(other.to_owned())),
                    }
                }
            }
        }
    }
}

/// Rejects any name or alias that is accepted by more than one style.
fn check_unique(styles: &[Style]) -> Result<()> {
    let mut seen: HashMap<&str, &Ident> = HashMap::new();

    for style in styles {
        for accepted in style.accepted() {
            if let Some(previous) = seen.insert(accepted, &style.variant) {
                return Err(syn::Error::new_spanned(
                    &style.variant,
                    format!(
                        "The name '{accepted}' is used by both `{previous}` and `{}`",
                        style.variant
                    ),
                ));
            }
        }
    }

    Ok(())
}

/// Rejects styles whose names would generate the same function twice, e.g. `a` with `to_b`
/// and `a_to` with `b` both yield `a_to_to_b`.
fn check_functions(styles: &[Style]) -> Result<()> {
    let mut seen: HashMap<String, &Ident> = HashMap::new();

    for style in styles {
        let functions = [style.tokenizer_ident(), style.formatter_ident()]
            .into_iter()
            .chain(styles.iter().map(|to| style.converter_ident(to)));

        for function in functions {
            let function = function.to_string();
            if let Some(previous) = seen.get(function.as_str()) {
                return Err(syn::Error::new_spanned(
                    &style.variant,
                    format!(
                        "The generated function `{function}` is defined by both `{previous}` and `{}`",
                        style.variant
                    ),
                ));
            }
            seen.insert(function, &style.variant);
        }
    }

    Ok(())
}

pub(crate) fn expand(input: &DeriveInput) -> Result<TokenStream> {
    let parsed = ConversionsInput::from_derive_input(input)?;

    // Structs never get here, `supports(enum_unit)` rejects them while parsing.
    let variants = parsed.data.take_enum().unwrap_or_default();

    if variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &parsed.ident,
            "Conversions requires at least one case style",
        ));
    }

    let styles = variants.into_iter().map(Style::try_from).collect::<Result<Vec<_>>>()?;
    check_unique(&styles)?;
    check_functions(&styles)?;

    let builder = ConversionsBuilder { ident: &parsed.ident, vis: &parsed.vis, styles: &styles };

    let bindings = styles.iter().map(|style| builder.build_bindings(style));
    let conversions = styles
        .iter()
        .flat_map(|from| styles.iter().map(move |to| (from, to)))
        .map(|(from, to)| builder.build_conversion(from, to));
    let implementation = builder.build_impl(&parsed.error);

    Ok(quote! {
        #implementation

        #(#bindings)*

        #(#conversions)*
    })
}
