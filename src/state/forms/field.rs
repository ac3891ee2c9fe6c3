//! Form slots: one focusable input each, bound to a part of the form state

use crate::request::FormState;

/// How an input is edited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotKind {
    Checkbox,
    Text,
    /// Free text that can also be cycled through a list of known values
    Choice,
    Buttons,
}

/// A single focusable input. Row slots carry the row index they edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Official,
    InvalidateCache,
    JobIds,
    ValueColumn(usize),
    Aggregation,
    FilterField(usize),
    FilterType(usize),
    FilterValue(usize),
    PivotAggColumn,
    PivotColumn,
    PivotValues,
    Distinct,
    ExportFormat,
    Buttons,
}

impl Slot {
    /// Slots for the current form shape, in focus order
    pub fn layout(form: &FormState) -> Vec<Slot> {
        let mut slots = vec![Slot::Official, Slot::InvalidateCache, Slot::JobIds];
        slots.extend((0..form.value_cols.len()).map(Slot::ValueColumn));
        slots.push(Slot::Aggregation);
        for i in 0..form.filters.len() {
            slots.extend([Slot::FilterField(i), Slot::FilterType(i), Slot::FilterValue(i)]);
        }
        slots.extend([
            Slot::PivotAggColumn,
            Slot::PivotColumn,
            Slot::PivotValues,
            Slot::Distinct,
            Slot::ExportFormat,
            Slot::Buttons,
        ]);
        slots
    }

    pub fn kind(&self) -> SlotKind {
        match self {
            Slot::Official | Slot::InvalidateCache | Slot::Distinct => SlotKind::Checkbox,
            Slot::ValueColumn(_) | Slot::FilterField(_) | Slot::FilterType(_) => SlotKind::Choice,
            Slot::Buttons => SlotKind::Buttons,
            _ => SlotKind::Text,
        }
    }

    pub fn label(&self) -> String {
        match self {
            Slot::Official => "Official".to_string(),
            Slot::InvalidateCache => "Invalidate cache".to_string(),
            Slot::JobIds => "Job IDs (comma separated)".to_string(),
            Slot::ValueColumn(i) => format!("Value column {}", i + 1),
            Slot::Aggregation => "Aggregation (comma separated)".to_string(),
            Slot::FilterField(i) => format!("Filter {} field", i + 1),
            Slot::FilterType(i) => format!("Filter {} type", i + 1),
            Slot::FilterValue(i) => format!("Filter {} value", i + 1),
            Slot::PivotAggColumn => "Pivot agg column".to_string(),
            Slot::PivotColumn => "Pivot column".to_string(),
            Slot::PivotValues => "Pivot values (comma separated)".to_string(),
            Slot::Distinct => "Distinct".to_string(),
            Slot::ExportFormat => "Export format".to_string(),
            Slot::Buttons => "Actions".to_string(),
        }
    }

    /// Path of this input as reported by `FormState::missing_fields`,
    /// for required inputs only
    pub fn required_path(&self) -> Option<String> {
        match self {
            Slot::ValueColumn(i) => Some(format!("valueCols[{i}].field")),
            Slot::FilterField(i) => Some(format!("filters[{i}].field")),
            Slot::FilterType(i) => Some(format!("filters[{i}].filterType")),
            Slot::FilterValue(i) => Some(format!("filters[{i}].value")),
            Slot::ExportFormat => Some("exportFormat".to_string()),
            _ => None,
        }
    }

    pub fn text<'a>(&self, form: &'a FormState) -> Option<&'a str> {
        let text = match self {
            Slot::JobIds => &form.job_ids,
            Slot::ValueColumn(i) => &form.value_cols.get(*i)?.field,
            Slot::Aggregation => &form.aggregation,
            Slot::FilterField(i) => &form.filters.get(*i)?.field,
            Slot::FilterType(i) => &form.filters.get(*i)?.filter_type,
            Slot::FilterValue(i) => &form.filters.get(*i)?.value,
            Slot::PivotAggColumn => &form.pivot.agg_column,
            Slot::PivotColumn => &form.pivot.pivot_column,
            Slot::PivotValues => &form.pivot.pivot_values,
            Slot::ExportFormat => &form.export_format,
            _ => return None,
        };
        Some(text.as_str())
    }

    pub fn text_mut<'a>(&self, form: &'a mut FormState) -> Option<&'a mut String> {
        let text = match self {
            Slot::JobIds => &mut form.job_ids,
            Slot::ValueColumn(i) => &mut form.value_column_mut(*i)?.field,
            Slot::Aggregation => &mut form.aggregation,
            Slot::FilterField(i) => &mut form.filter_mut(*i)?.field,
            Slot::FilterType(i) => &mut form.filter_mut(*i)?.filter_type,
            Slot::FilterValue(i) => &mut form.filter_mut(*i)?.value,
            Slot::PivotAggColumn => &mut form.pivot.agg_column,
            Slot::PivotColumn => &mut form.pivot.pivot_column,
            Slot::PivotValues => &mut form.pivot.pivot_values,
            Slot::ExportFormat => &mut form.export_format,
            _ => return None,
        };
        Some(text)
    }

    pub fn checked(&self, form: &FormState) -> Option<bool> {
        match self {
            Slot::Official => Some(form.official),
            Slot::InvalidateCache => Some(form.invalidate_cache),
            Slot::Distinct => Some(form.distinct),
            _ => None,
        }
    }

    /// Flip a checkbox; returns false for any other kind of slot
    pub fn toggle(&self, form: &mut FormState) -> bool {
        let flag = match self {
            Slot::Official => &mut form.official,
            Slot::InvalidateCache => &mut form.invalidate_cache,
            Slot::Distinct => &mut form.distinct,
            _ => return false,
        };
        *flag = !*flag;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_for_new_form() {
        let slots = Slot::layout(&FormState::new());
        assert_eq!(
            slots,
            vec![
                Slot::Official,
                Slot::InvalidateCache,
                Slot::JobIds,
                Slot::Aggregation,
                Slot::PivotAggColumn,
                Slot::PivotColumn,
                Slot::PivotValues,
                Slot::Distinct,
                Slot::ExportFormat,
                Slot::Buttons,
            ]
        );
    }

    #[test]
    fn test_layout_includes_rows() {
        let mut form = FormState::new();
        form.add_value_column();
        form.add_value_column();
        form.add_filter();
        let slots = Slot::layout(&form);
        assert_eq!(slots.len(), 10 + 2 + 3);
        assert_eq!(slots[3], Slot::ValueColumn(0));
        assert_eq!(slots[4], Slot::ValueColumn(1));
        assert_eq!(slots[5], Slot::Aggregation);
        assert_eq!(slots[6], Slot::FilterField(0));
        assert_eq!(slots[8], Slot::FilterValue(0));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(Slot::Distinct.kind(), SlotKind::Checkbox);
        assert_eq!(Slot::FilterType(0).kind(), SlotKind::Choice);
        assert_eq!(Slot::FilterValue(0).kind(), SlotKind::Text);
        assert_eq!(Slot::Buttons.kind(), SlotKind::Buttons);
    }

    #[test]
    fn test_required_paths_match_validation() {
        let mut form = FormState::new();
        form.add_value_column();
        form.add_filter();
        form.export_format.clear();

        let required: Vec<String> = Slot::layout(&form)
            .iter()
            .filter_map(Slot::required_path)
            .collect();

        assert_eq!(required, form.missing_fields());
    }

    #[test]
    fn test_text_mut_edits_bound_field() {
        let mut form = FormState::new();
        form.add_filter();
        Slot::FilterType(0)
            .text_mut(&mut form)
            .unwrap()
            .push_str("equal");
        Slot::PivotValues.text_mut(&mut form).unwrap().push('a');
        assert_eq!(form.filters[0].filter_type, "equal");
        assert_eq!(form.pivot.pivot_values, "a");
        assert_eq!(Slot::FilterType(0).text(&form), Some("equal"));
    }

    #[test]
    fn test_text_for_missing_row_is_none() {
        let mut form = FormState::new();
        assert!(Slot::ValueColumn(0).text(&form).is_none());
        assert!(Slot::FilterValue(2).text_mut(&mut form).is_none());
        assert!(Slot::Official.text(&form).is_none());
    }

    #[test]
    fn test_toggle_checkbox() {
        let mut form = FormState::new();
        assert!(Slot::InvalidateCache.toggle(&mut form));
        assert!(form.invalidate_cache);
        assert_eq!(Slot::InvalidateCache.checked(&form), Some(true));
        assert!(!Slot::JobIds.toggle(&mut form));
    }
}
