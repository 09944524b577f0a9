//! Property-based tests for folder-name sanitization, file classification
//! and order numbering

use proptest::prelude::*;

use werkstatt::backend::netfolder::classify::classify;
use werkstatt::backend::netfolder::sync::sanitize_folder_name;
use werkstatt::backend::orders::numbering::{format_order_number, next_suffix, parse_suffix};

const FORBIDDEN: [char; 7] = ['<', '>', ':', '"', '|', '?', '*'];

proptest! {
    #[test]
    fn test_sanitized_names_contain_no_forbidden_characters(name in ".*") {
        let sanitized = sanitize_folder_name(&name);
        prop_assert!(sanitized.chars().all(|c| !FORBIDDEN.contains(&c)));
    }

    #[test]
    fn test_sanitization_replaces_one_for_one(name in ".*") {
        let sanitized = sanitize_folder_name(&name);
        prop_assert_eq!(sanitized.chars().count(), name.chars().count());
        for (original, replaced) in name.chars().zip(sanitized.chars()) {
            if FORBIDDEN.contains(&original) {
                prop_assert_eq!(replaced, '_');
            } else {
                prop_assert_eq!(replaced, original);
            }
        }
    }

    #[test]
    fn test_classify_always_routes_to_a_known_subfolder(file_name in ".*") {
        let subfolder = classify(&file_name);
        prop_assert!(["CAD_CAM", "Bilder", "Dokumentation", "Dokumente"].contains(&subfolder));
    }

    #[test]
    fn test_order_numbers_round_trip(suffix in 1u32..100_000) {
        let number = format_order_number('F', "2507", suffix);
        prop_assert_eq!(parse_suffix(&number, 'F', "2507"), Some(suffix));
    }

    #[test]
    fn test_next_suffix_is_strictly_greater_than_all_taken(suffixes in proptest::collection::vec(1u32..10_000, 0..20)) {
        let taken: Vec<String> = suffixes
            .iter()
            .map(|s| format_order_number('F', "2507", *s))
            .collect();
        let next = next_suffix(taken.iter().map(|s| s.as_str()), 'F', "2507");
        prop_assert!(suffixes.iter().all(|s| *s < next));
        if suffixes.is_empty() {
            prop_assert_eq!(next, 1);
        }
    }
}
