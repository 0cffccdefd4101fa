use crate::Case;

impl Case {
    /// Joins `words` into a string of this style.
    ///
    /// Words are expected to be lowercase already; only the casing of the output and the
    /// separators are controlled here.
    pub fn format<S: AsRef<str>>(self, words: &[S]) -> String {
        match self {
            Self::Camel => {
                let mut result = String::new();
                for (i, word) in words.iter().enumerate() {
                    if i == 0 {
                        result.push_str(word.as_ref());
                    } else {
                        push_capitalized(&mut result, word.as_ref());
                    }
                }
                result
            }
            Self::Pascal => {
                let mut result = String::new();
                for word in words {
                    push_capitalized(&mut result, word.as_ref());
                }
                result
            }
            Self::Snake => join(words, "_"),
            Self::Screaming => join(words, "_").to_uppercase(),
            Self::Kebab => join(words, "-"),
            Self::Dot => join(words, "."),
            Self::Path => join(words, "/"),
            Self::Upper => join(words, "").to_uppercase(),
            Self::Lower => join(words, "").to_lowercase(),
        }
    }
}

fn join<S: AsRef<str>>(words: &[S], separator: &str) -> String {
    let mut result = String::new();
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            result.push_str(separator);
        }
        result.push_str(word.as_ref());
    }
    result
}

/// Uppercase the first character of `word` and leave the rest unchanged.
fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [&str; 3] = ["my", "variable", "name"];

    #[test]
    fn humps() {
        assert_eq!(Case::Camel.format(&WORDS), "myVariableName");
        assert_eq!(Case::Pascal.format(&WORDS), "MyVariableName");
    }

    #[test]
    fn separated() {
        assert_eq!(Case::Snake.format(&WORDS), "my_variable_name");
        assert_eq!(Case::Screaming.format(&WORDS), "MY_VARIABLE_NAME");
        assert_eq!(Case::Kebab.format(&WORDS), "my-variable-name");
        assert_eq!(Case::Dot.format(&WORDS), "my.variable.name");
        assert_eq!(Case::Path.format(&WORDS), "my/variable/name");
    }

    #[test]
    fn flat() {
        assert_eq!(Case::Upper.format(&WORDS), "MYVARIABLENAME");
        assert_eq!(Case::Lower.format(&WORDS), "myvariablename");
    }

    #[test]
    fn casing_of_input_words_is_not_normalized() {
        // Only the first character is touched when capitalizing.
        assert_eq!(Case::Camel.format(&["Http", "sERVER"]), "HttpSERVER");
        assert_eq!(Case::Snake.format(&["My", "Var"]), "My_Var");
        assert_eq!(Case::Lower.format(&["My", "Var"]), "myvar");
    }

    #[test]
    fn empty() {
        let none: [&str; 0] = [];
        for case in Case::ALL {
            assert_eq!(case.format(&none), "");
            assert_eq!(case.format(&[""]), "");
        }
        assert_eq!(Case::Snake.format(&["", "private"]), "_private");
        assert_eq!(Case::Camel.format(&["my", "", "var"]), "myVar");
    }

    #[test]
    fn owned_words() {
        let words = vec![String::from("owned"), String::from("words")];
        assert_eq!(Case::Kebab.format(&words), "owned-words");
    }
}
