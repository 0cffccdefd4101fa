#![cfg(feature = "serde")]

use recase::Case;

#[test]
fn test_serialize_by_name() {
    let json = serde_json::to_string(&[Case::Camel, Case::Screaming, Case::Lower]).unwrap();
    assert_eq!(json, r#"["camel","screaming","lower"]"#);
}

#[test]
fn test_deserialize_names_and_aliases() {
    let cases: Vec<Case> =
        serde_json::from_str(r#"["kebab","screaming-snake","upper-flat"]"#).unwrap();
    assert_eq!(cases, [Case::Kebab, Case::Screaming, Case::Upper]);

    let err = serde_json::from_str::<Case>(r#""title""#).unwrap_err();
    assert!(err.to_string().contains("unknown case style `title`"));
}
