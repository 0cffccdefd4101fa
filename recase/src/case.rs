use std::fmt;

use recase_derive::Conversions;

/// A naming-case style.
///
/// Deriving `Conversions` generates the named conversion functions of this crate: one
/// `<from>_to_<to>` function per ordered pair of styles, plus `<style>_to_words` and
/// `words_to_<style>` for every style.
#[derive(Conversions, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[conversions(error = "ParseCaseError")]
pub enum Case {
    /// `myVariableName`
    Camel,
    /// `MyVariableName`
    Pascal,
    /// `my_variable_name`
    Snake,
    /// `MY_VARIABLE_NAME`
    #[case(alias = "screaming_snake", alias = "screaming-snake", alias = "constant")]
    Screaming,
    /// `my-variable-name`
    #[case(alias = "dash")]
    Kebab,
    /// `my.variable.name`
    #[case(alias = "dotted")]
    Dot,
    /// `my/variable/name`
    #[case(alias = "slash")]
    Path,
    /// `MYVARIABLENAME`, no word boundaries.
    #[case(alias = "upper_flat", alias = "upper-flat")]
    Upper,
    /// `myvariablename`, no word boundaries.
    #[case(alias = "lower_flat", alias = "lower-flat", alias = "flat")]
    Lower,
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The error returned when parsing an unknown case style name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown case style `{0}`")]
pub struct ParseCaseError(String);

impl ParseCaseError {
    /// The rejected input.
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl From<String> for ParseCaseError {
    fn from(input: String) -> Self {
        tracing::debug!(%input, "rejected case style name");
        Self(input)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Case {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Case {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
