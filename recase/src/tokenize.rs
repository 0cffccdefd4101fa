use std::sync::LazyLock;

use regex::Regex;

use crate::Case;

/// A lowercase letter or digit directly followed by an uppercase letter: `myVar`, `v2Api`.
static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid boundary regex"));

/// An uppercase letter directly followed by an uppercase letter that starts a word: `HTTPServer`.
static UPPER_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])([A-Z][a-z])").expect("valid boundary regex"));

impl Case {
    /// Splits `input` into lowercase words using this style's word boundaries.
    ///
    /// No validation happens: input that does not follow the style is split on a best-effort
    /// basis. An empty input yields a single empty word.
    pub fn tokenize(self, input: &str) -> Vec<String> {
        match self {
            Self::Camel | Self::Pascal => split_humps(input),
            Self::Snake => split_lowercase(input, '_'),
            Self::Screaming => input.to_lowercase().split('_').map(str::to_owned).collect(),
            Self::Kebab => split_lowercase(input, '-'),
            Self::Dot => split_lowercase(input, '.'),
            Self::Path => split_lowercase(input, '/'),
            Self::Upper | Self::Lower => vec![input.to_lowercase()],
        }
    }
}

fn split_lowercase(input: &str, separator: char) -> Vec<String> {
    input.split(separator).map(str::to_lowercase).collect()
}

/// Splits camel and pascal case on the two boundary rules, applied in order.
fn split_humps(input: &str) -> Vec<String> {
    let spaced = LOWER_UPPER.replace_all(input, "$1 $2");
    let spaced = UPPER_WORD.replace_all(&spaced, "$1 $2");

    spaced.split(' ').map(str::to_lowercase).collect()
}
