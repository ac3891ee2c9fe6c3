//! Request document: the JSON object handed to the warehouse

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::error::RequestError;
use super::form::{split_trim, FormState, PivotGroup, ValueColumn};

/// Condition attached to one field in the filter model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCondition {
    pub filter_type: String,
    pub value: String,
}

/// Pivot shaping; serializes as `{}` when nothing was entered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pivot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agg_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pivot_values: Option<Vec<String>>,
}

impl From<&PivotGroup> for Pivot {
    fn from(group: &PivotGroup) -> Self {
        if group.is_empty() {
            return Self::default();
        }
        Self {
            agg_column: non_empty(&group.agg_column),
            pivot_column: non_empty(&group.pivot_column),
            pivot_values: (!group.pivot_values.is_empty())
                .then(|| split_trim(&group.pivot_values)),
        }
    }
}

/// Warehouse query request. Field order here is the key order on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDocument {
    pub official: bool,
    pub invalidate_cache: bool,
    pub job_ids: Vec<String>,
    pub value_cols: Vec<ValueColumn>,
    pub aggregation: Vec<String>,
    /// Keyed by filter field in first-insertion order, numeric-looking
    /// names included; a later row for the same field replaces the earlier
    /// condition
    pub filter_model: IndexMap<String, FilterCondition>,
    pub pivot: Pivot,
    pub distinct: bool,
    pub export_format: String,
}

impl RequestDocument {
    /// Render as JSON with 2-space indentation
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Build the request document for a form. Fails without producing anything
/// when a required input is empty; the form is never modified.
pub fn build_request_document(form: &FormState) -> Result<RequestDocument, RequestError> {
    let missing = form.missing_fields();
    if !missing.is_empty() {
        return Err(RequestError::Validation { missing });
    }

    let mut filter_model = IndexMap::new();
    for filter in &form.filters {
        filter_model.insert(
            filter.field.clone(),
            FilterCondition {
                filter_type: filter.filter_type.clone(),
                value: filter.value.clone(),
            },
        );
    }

    Ok(RequestDocument {
        official: form.official,
        invalidate_cache: form.invalidate_cache,
        job_ids: split_trim(&form.job_ids),
        value_cols: form
            .value_cols
            .iter()
            .map(|vc| ValueColumn {
                field: vc.field.clone(),
            })
            .collect(),
        aggregation: split_trim(&form.aggregation),
        filter_model,
        pivot: Pivot::from(&form.pivot),
        distinct: form.distinct,
        export_format: form.export_format.clone(),
    })
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
