//! Editable form state for one request editing session

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use super::error::RequestError;

pub const DEFAULT_EXPORT_FORMAT: &str = "avro";

/// One selected value column
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValueColumn {
    #[serde(deserialize_with = "null_as_empty")]
    pub field: String,
}

/// One filter row; every part is required
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterRow {
    #[serde(deserialize_with = "null_as_empty")]
    pub field: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub filter_type: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub value: String,
}

/// Raw pivot inputs; every part is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PivotGroup {
    #[serde(deserialize_with = "null_as_empty")]
    pub agg_column: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub pivot_column: String,
    /// Comma separated
    #[serde(deserialize_with = "null_as_empty")]
    pub pivot_values: String,
}

impl PivotGroup {
    pub fn is_empty(&self) -> bool {
        self.agg_column.is_empty() && self.pivot_column.is_empty() && self.pivot_values.is_empty()
    }
}

/// Form values from a reset form group carry `null` for cleared text
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Which of the two variable-length row lists an operation targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowList {
    ValueCols,
    Filters,
}

impl fmt::Display for RowList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowList::ValueCols => write!(f, "valueCols"),
            RowList::Filters => write!(f, "filters"),
        }
    }
}

/// Everything the user has entered so far. Text inputs are kept raw;
/// splitting and trimming happens when the request document is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormState {
    pub official: bool,
    pub invalidate_cache: bool,
    #[serde(deserialize_with = "null_as_empty")]
    pub job_ids: String,
    pub value_cols: Vec<ValueColumn>,
    #[serde(deserialize_with = "null_as_empty")]
    pub aggregation: String,
    pub filters: Vec<FilterRow>,
    #[serde(rename = "pivotGroup")]
    pub pivot: PivotGroup,
    pub distinct: bool,
    #[serde(deserialize_with = "null_as_empty")]
    pub export_format: String,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            official: false,
            invalidate_cache: false,
            job_ids: String::new(),
            value_cols: Vec::new(),
            aggregation: String::new(),
            filters: Vec::new(),
            pivot: PivotGroup::default(),
            distinct: false,
            export_format: DEFAULT_EXPORT_FORMAT.to_string(),
        }
    }

    /// Reset every input to its initial value
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    pub fn add_value_column(&mut self) {
        self.value_cols.push(ValueColumn::default());
        tracing::debug!("Added value column (count {})", self.value_cols.len());
    }

    pub fn remove_value_column(&mut self, index: usize) -> Result<ValueColumn, RequestError> {
        check_index(RowList::ValueCols, index, self.value_cols.len())?;
        let removed = self.value_cols.remove(index);
        tracing::debug!("Removed value column {index}");
        Ok(removed)
    }

    pub fn add_filter(&mut self) {
        self.filters.push(FilterRow::default());
        tracing::debug!("Added filter (count {})", self.filters.len());
    }

    pub fn remove_filter(&mut self, index: usize) -> Result<FilterRow, RequestError> {
        check_index(RowList::Filters, index, self.filters.len())?;
        let removed = self.filters.remove(index);
        tracing::debug!("Removed filter {index}");
        Ok(removed)
    }

    pub fn value_column_mut(&mut self, index: usize) -> Option<&mut ValueColumn> {
        self.value_cols.get_mut(index)
    }

    pub fn filter_mut(&mut self, index: usize) -> Option<&mut FilterRow> {
        self.filters.get_mut(index)
    }

    /// Paths of every required input that is still empty, in form order.
    /// Whitespace-only text counts as filled in.
    pub fn missing_fields(&self) -> Vec<String> {
        let mut missing = Vec::new();
        for (i, col) in self.value_cols.iter().enumerate() {
            if col.field.is_empty() {
                missing.push(format!("valueCols[{i}].field"));
            }
        }
        for (i, filter) in self.filters.iter().enumerate() {
            if filter.field.is_empty() {
                missing.push(format!("filters[{i}].field"));
            }
            if filter.filter_type.is_empty() {
                missing.push(format!("filters[{i}].filterType"));
            }
            if filter.value.is_empty() {
                missing.push(format!("filters[{i}].value"));
            }
        }
        if self.export_format.is_empty() {
            missing.push("exportFormat".to_string());
        }
        missing
    }

    pub fn is_valid(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

fn check_index(list: RowList, index: usize, len: usize) -> Result<(), RequestError> {
    if index < len {
        Ok(())
    } else {
        Err(RequestError::IndexOutOfRange { list, index, len })
    }
}

/// Split comma separated text into trimmed pieces. Empty text gives no
/// pieces; empty pieces between commas are kept.
pub fn split_trim(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|s| s.trim().to_string()).collect()
}
