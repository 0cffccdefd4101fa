//! Convert identifiers between nine naming-case styles.
//!
//! Every conversion is a tokenizer followed by a formatter: the source string is split into
//! lowercase words with the source style's rule, and the words are joined with the target
//! style's rule. The styles are listed by [`Case`]:
//! - [`Case::Camel`]: `myVariableName`
//! - [`Case::Pascal`]: `MyVariableName`
//! - [`Case::Snake`]: `my_variable_name`
//! - [`Case::Screaming`]: `MY_VARIABLE_NAME`
//! - [`Case::Kebab`]: `my-variable-name`
//! - [`Case::Dot`]: `my.variable.name`
//! - [`Case::Path`]: `my/variable/name`
//! - [`Case::Upper`]: `MYVARIABLENAME`
//! - [`Case::Lower`]: `myvariablename`
//!
//! Each ordered pair of styles has a named function, e.g. [`camel_to_snake`] or
//! [`kebab_to_screaming`], and each style has a tokenizer (`<style>_to_words`) and a
//! formatter (`words_to_<style>`) binding for custom pairings. All of them accept either a
//! `&str` or `None`, which converts to an empty string.
//!
//! ```
//! assert_eq!(recase::camel_to_snake("myVariableName"), "my_variable_name");
//! assert_eq!(recase::kebab_to_screaming("my-var-name"), "MY_VAR_NAME");
//! assert_eq!(recase::camel_to_snake(None), "");
//!
//! let words = recase::dot_to_words("my.var.name");
//! assert_eq!(recase::words_to_pascal(&words), "MyVarName");
//! ```
//!
//! The word boundaries of [`Case::Upper`] and [`Case::Lower`] are lost, so converting out of
//! them always yields a single word.

mod case;
pub use case::*;

mod convert;
pub use convert::{convert, normalize};

mod format;
mod tokenize;
