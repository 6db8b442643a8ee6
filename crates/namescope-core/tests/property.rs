use namescope_core::{
    needs_quotes, transform_standard_naming, truncate_identifier, Dialect, NameTransformer,
    NamingContext, RenderMode, TRUNCATION_MARKER,
};
use proptest::prelude::*;

fn any_dialect() -> impl Strategy<Value = Dialect> {
    prop::sample::select(Dialect::ALL.to_vec())
}

proptest! {
    #[test]
    fn table_normalization_is_idempotent(raw in "\\PC{0,80}", dialect in any_dialect()) {
        let transformer = NameTransformer::new(dialect);
        let once = transformer.normalize_table_name(&raw);
        let twice = transformer.normalize_table_name(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn schema_names_are_legal_bare_tokens(raw in "\\PC{0,80}", dialect in any_dialect()) {
        let transformer = NameTransformer::new(dialect);
        let name = transformer.normalize_schema_name(&raw);
        prop_assert!(!name.is_empty());
        prop_assert!(name.chars().all(|c| c == '_' || c.is_ascii_alphanumeric()));
        prop_assert!(name.chars().count() <= transformer.max_name_length());
    }

    #[test]
    fn truncation_length_is_bounded(name in "\\PC{0,120}", max_len in 0usize..80) {
        let truncated = truncate_identifier(&name, max_len);
        let len = name.chars().count();
        prop_assert_eq!(truncated.chars().count(), len.min(max_len));
        if len <= max_len {
            prop_assert_eq!(truncated, name);
        } else if max_len > TRUNCATION_MARKER.len() {
            prop_assert!(truncated.contains(TRUNCATION_MARKER));
        }
    }

    #[test]
    fn quoting_decision_is_total(raw in "\\PC{0,40}") {
        for dialect in Dialect::ALL {
            let _ = needs_quotes(&raw, dialect);
        }
    }

    #[test]
    fn standard_naming_only_emits_identifier_chars(raw in "\\PC{0,80}") {
        let name = transform_standard_naming(&raw);
        prop_assert!(name.chars().all(|c| c == '_' || c.is_ascii_alphanumeric()));
        prop_assert_eq!(transform_standard_naming(&name), name);
    }

    #[test]
    fn plain_names_agree_across_contexts(
        raw in "[A-Za-z_][A-Za-z0-9_]{0,20}",
        dialect in any_dialect(),
    ) {
        prop_assume!(Dialect::ALL.iter().all(|d| !needs_quotes(&raw, *d)));

        let transformer = NameTransformer::new(dialect);
        let table = transformer.normalize_table_name(&raw);
        prop_assert_eq!(&table, &transformer.normalize_schema_name(&raw));
        prop_assert_eq!(&table, &transformer.normalize_column_name(&raw, RenderMode::Plain));
        prop_assert_eq!(
            format!("'{table}'"),
            transformer.normalize_column_name(&raw, RenderMode::Template)
        );
    }

    #[test]
    fn long_columns_are_only_truncated_in_schema_and_table_positions(
        raw in "[a-z_][a-z0-9_]{30,250}",
        dialect in any_dialect(),
    ) {
        let transformer = NameTransformer::new(dialect);
        let table = transformer.normalize_table_name(&raw);
        let column = transformer.normalize_column_name(&raw, RenderMode::Plain);
        let budget = transformer.max_name_length();

        prop_assert_eq!(column.chars().count(), raw.chars().count());
        if raw.chars().count() <= budget {
            prop_assert_eq!(&table, &column);
        } else {
            prop_assert_eq!(table.chars().count(), budget);
            prop_assert_eq!(&table, &truncate_identifier(&column, budget));
        }
        prop_assert_eq!(
            &transformer.normalize(&raw, NamingContext::Column).normalized,
            &table
        );
    }
}
