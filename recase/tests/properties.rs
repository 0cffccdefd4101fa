use proptest::prelude::*;
use recase::{Case, convert, normalize};

const SEPARATED: [Case; 5] = [Case::Snake, Case::Screaming, Case::Kebab, Case::Dot, Case::Path];

fn any_case() -> impl Strategy<Value = Case> {
    prop::sample::select(Case::ALL.to_vec())
}

fn separated_case() -> impl Strategy<Value = Case> {
    prop::sample::select(SEPARATED.to_vec())
}

/// Lowercase alphanumeric words without separators.
fn words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z0-9]{1,8}", 1..6)
}

proptest! {
    #[test]
    fn identity_returns_input(case in any_case(), input in ".*") {
        prop_assert_eq!(case.convert(case, input.as_str()), normalize(input.as_str()));
    }

    #[test]
    fn none_is_empty(from in any_case(), to in any_case()) {
        prop_assert_eq!(convert(from, to, None), "");
        prop_assert_eq!(from.converter(to)(None), "");
    }

    #[test]
    fn separated_round_trip(case in separated_case(), words in words()) {
        prop_assert_eq!(case.tokenize(&case.format(&words)), words);
    }

    #[test]
    fn flat_styles_yield_one_word(input in ".*") {
        prop_assert_eq!(Case::Upper.tokenize(&input).len(), 1);
        prop_assert_eq!(Case::Lower.tokenize(&input).len(), 1);
    }

    #[test]
    fn flat_styles_lose_boundaries(case in separated_case(), to in any_case(), words in words()) {
        let flat = Case::Lower.format(&words);
        let converted = Case::Lower.convert(to, flat.as_str());

        prop_assert_eq!(to.tokenize(&converted).len(), 1);
        prop_assert_eq!(Case::Lower.convert(case, flat.as_str()), case.format(&[flat.as_str()]));
    }

    #[test]
    fn tokens_are_lowercase(case in any_case(), input in "[A-Za-z0-9_./-]{0,24}") {
        for word in case.tokenize(&input) {
            prop_assert_eq!(word.to_lowercase(), word);
        }
    }
}
