use crate::Case;

/// Normalizes an optional input: `None` becomes an empty string.
pub fn normalize<'a>(input: impl Into<Option<&'a str>>) -> &'a str {
    input.into().unwrap_or_default()
}

impl Case {
    /// Converts `input` from this style to `to`.
    ///
    /// `None` and empty input convert to an empty string. Converting to the same style returns
    /// the input as is, without splitting and rejoining it.
    pub fn convert<'a>(self, to: Self, input: impl Into<Option<&'a str>>) -> String {
        let input = normalize(input);
        if input.is_empty() {
            return String::new();
        }

        if self == to {
            return input.to_owned();
        }

        let words = self.tokenize(input);
        tracing::trace!(from = %self, %to, words = words.len(), "converting case");

        to.format(&words)
    }
}

/// Converts `input` from the `from` style to the `to` style.
///
/// Equivalent to [`Case::convert`].
pub fn convert<'a>(from: Case, to: Case, input: impl Into<Option<&'a str>>) -> String {
    from.convert(to, input)
}
