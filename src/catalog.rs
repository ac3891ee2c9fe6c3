//! Field catalog: the static choices offered by the column and filter pickers

/// Field names offered to value column and filter pickers
pub const FIELD_LIST: &[&str] = &[
    "Result_snap",
    "Result_context",
    "Result_EPI",
    "Result_HMSBook",
    "Result_JobId",
    "Result_InstrumentId",
    "Result_Errors",
    "Result_PortfolioId",
    "Result_LegalEntity",
    "Result_Desk",
];

/// Aggregation keywords shown as a hint next to the aggregation input.
/// The input itself is free text and is not checked against this list.
pub const AGGREGATION_FUNCTIONS: &[&str] = &["sum", "avg", "min", "max", "count", "any_value"];

/// A filter operator identifier paired with its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOperator {
    pub value: &'static str,
    pub label: &'static str,
}

pub const FILTER_OPERATORS: &[FilterOperator] = &[
    FilterOperator {
        value: "equal",
        label: "Equal",
    },
    FilterOperator {
        value: "not_equal",
        label: "Not Equal",
    },
    FilterOperator {
        value: "in",
        label: "In",
    },
    FilterOperator {
        value: "not_in",
        label: "Not In",
    },
    FilterOperator {
        value: "less",
        label: "Less Than",
    },
    FilterOperator {
        value: "greater",
        label: "Greater Than",
    },
];

/// Look up the display label for an operator value
pub fn operator_label(value: &str) -> Option<&'static str> {
    FILTER_OPERATORS
        .iter()
        .find(|op| op.value == value)
        .map(|op| op.label)
}

/// Operator values in catalog order, for option cycling
pub fn operator_values() -> Vec<String> {
    FILTER_OPERATORS
        .iter()
        .map(|op| op.value.to_string())
        .collect()
}

/// Field names available to pickers: the static list followed by any
/// configured extras, without duplicates
#[derive(Debug, Clone)]
pub struct FieldCatalog {
    fields: Vec<String>,
}

impl FieldCatalog {
    pub fn new(extra_fields: &[String]) -> Self {
        let mut fields: Vec<String> = FIELD_LIST.iter().map(|f| f.to_string()).collect();
        for extra in extra_fields {
            if !extra.is_empty() && !fields.contains(extra) {
                fields.push(extra.clone());
            }
        }
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self::new(&[])
    }
}

/// Pick the option after `current`. Text that is not one of the options
/// (including empty text) starts from the first option.
pub fn next_option<'a>(options: &'a [String], current: &str) -> Option<&'a str> {
    if options.is_empty() {
        return None;
    }
    let next = match options.iter().position(|o| o == current) {
        Some(i) => (i + 1) % options.len(),
        None => 0,
    };
    Some(&options[next])
}

/// Pick the option before `current`. Unknown text starts from the last option.
pub fn prev_option<'a>(options: &'a [String], current: &str) -> Option<&'a str> {
    if options.is_empty() {
        return None;
    }
    let prev = match options.iter().position(|o| o == current) {
        Some(0) | None => options.len() - 1,
        Some(i) => i - 1,
    };
    Some(&options[prev])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_operator_label_known() {
        assert_eq!(operator_label("not_in"), Some("Not In"));
        assert_eq!(operator_label("greater"), Some("Greater Than"));
    }

    #[test]
    fn test_operator_label_unknown() {
        assert_eq!(operator_label("between"), None);
        assert_eq!(operator_label(""), None);
    }

    #[test]
    fn test_operator_values_order() {
        assert_eq!(
            operator_values(),
            opts(&["equal", "not_equal", "in", "not_in", "less", "greater"])
        );
    }

    #[test]
    fn test_catalog_default_is_static_list() {
        let catalog = FieldCatalog::default();
        assert_eq!(catalog.fields().len(), FIELD_LIST.len());
        assert_eq!(catalog.fields()[0], "Result_snap");
        assert_eq!(catalog.fields()[9], "Result_Desk");
    }

    #[test]
    fn test_catalog_appends_extras_without_duplicates() {
        let extras = opts(&["Result_Book", "Result_Desk", "", "Result_Book"]);
        let catalog = FieldCatalog::new(&extras);
        assert_eq!(catalog.fields().len(), FIELD_LIST.len() + 1);
        assert_eq!(catalog.fields().last().unwrap(), "Result_Book");
    }

    #[test]
    fn test_next_option_from_empty_starts_at_first() {
        let options = opts(&["a", "b", "c"]);
        assert_eq!(next_option(&options, ""), Some("a"));
        assert_eq!(next_option(&options, "custom"), Some("a"));
    }

    #[test]
    fn test_next_option_wraps() {
        let options = opts(&["a", "b", "c"]);
        assert_eq!(next_option(&options, "b"), Some("c"));
        assert_eq!(next_option(&options, "c"), Some("a"));
    }

    #[test]
    fn test_prev_option_wraps() {
        let options = opts(&["a", "b", "c"]);
        assert_eq!(prev_option(&options, "a"), Some("c"));
        assert_eq!(prev_option(&options, "c"), Some("b"));
        assert_eq!(prev_option(&options, ""), Some("c"));
    }

    #[test]
    fn test_option_cycling_empty_list() {
        assert_eq!(next_option(&[], "a"), None);
        assert_eq!(prev_option(&[], "a"), None);
    }
}
