/// Convert a PascalCase identifier to snake_case.
pub(crate) fn pascal_to_snake(s: &str) -> String {
    let mut result =
        String::with_capacity(s.len() + s.chars().filter(|c| c.is_uppercase()).count());
    let mut prev_was_lower = false;

    for ch in s.chars() {
        if ch.is_uppercase() && prev_was_lower && !result.is_empty() {
            result.push('_');
        }
        result.push(ch.to_ascii_lowercase());
        prev_was_lower = ch.is_lowercase() || ch.is_ascii_digit();
    }

    result
}

/// Whether `s` can be used as the snake_case prefix of a generated function name.
pub(crate) fn is_snake_ident(s: &str) -> bool {
    let mut chars = s.chars();

    let Some(first) = chars.next() else {
        return false;
    };

    first.is_ascii_lowercase()
        && chars.all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '_')
        && !s.ends_with('_')
        && !s.contains("__")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pascal_to_snake_splits_words() {
        assert_eq!(pascal_to_snake("Camel"), "camel");
        assert_eq!(pascal_to_snake("ScreamingSnake"), "screaming_snake");
        assert_eq!(pascal_to_snake("Utf8Path"), "utf8_path");
    }

    #[test]
    fn snake_idents() {
        assert!(is_snake_ident("snake"));
        assert!(is_snake_ident("screaming_snake"));
        assert!(is_snake_ident("utf8"));

        assert!(!is_snake_ident(""));
        assert!(!is_snake_ident("screaming-snake"));
        assert!(!is_snake_ident("Snake"));
        assert!(!is_snake_ident("8bit"));
        assert!(!is_snake_ident("trailing_"));
        assert!(!is_snake_ident("double__under"));
    }
}
