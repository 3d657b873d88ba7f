//! Property-based tests for core types.

#[allow(clippy::unwrap_used)]
mod tests {
    use crate::name::{looks_like_script_name, ScriptName};
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_valid_stems_always_accepted(stem in "[a-z][a-z0-9_]{0,7}") {
            let name = ScriptName::new(format!("{stem}.m")).unwrap();
            assert_eq!(name.stem(), stem);
        }

        #[test]
        fn test_normalization_is_idempotent(stem in "[A-Za-z][A-Za-z0-9_]{0,7}") {
            let once = ScriptName::new(format!("{stem}.M")).unwrap();
            let twice = ScriptName::new(once.as_str()).unwrap();
            assert_eq!(once, twice);
        }

        #[test]
        fn test_display_parse_roundtrip(stem in "[A-Za-z][A-Za-z0-9_]{0,7}") {
            let name = ScriptName::new(format!("{stem}.m")).unwrap();
            let parsed: ScriptName = name.to_string().parse().unwrap();
            assert_eq!(name, parsed);
        }

        #[test]
        fn test_accepted_names_look_like_script_names(stem in "[A-Za-z][A-Za-z0-9_]{0,7}") {
            let token = format!("{stem}.m");
            if ScriptName::new(&token).is_ok() {
                assert!(looks_like_script_name(&token));
            }
        }
    }
}
