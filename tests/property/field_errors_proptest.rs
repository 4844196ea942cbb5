//! Property-based tests for validation message formatting

use lengua_client::shared::FieldErrors;
use proptest::collection::{btree_map, vec};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_one_line_per_field(
        errors in btree_map("[a-z_]{1,12}", vec("[a-zA-Z ]{1,20}", 1..4), 1..6)
    ) {
        let rendered = errors
            .clone()
            .into_iter()
            .collect::<FieldErrors>()
            .to_string();
        let lines: Vec<&str> = rendered.split('\n').collect();

        prop_assert_eq!(lines.len(), errors.len());
        for (line, (field, messages)) in lines.iter().zip(errors.iter()) {
            prop_assert_eq!(*line, format!("{}: {}", field, messages.join(", ")));
        }
    }
}
