//! SQL preview of a request document
//!
//! Shows roughly what the warehouse will run for a request. The preview is
//! informational only; the request document is what gets copied.

use super::document::{FilterCondition, RequestDocument};
use super::form::split_trim;

const RESULT_TABLE_PREFIX: &str = "Result_";

/// Clause-part accumulator. Each clause renders as `CLAUSE a, b` and is
/// left out when it has no parts.
#[derive(Debug, Clone, Default)]
pub struct SqlBuilder {
    select: Vec<String>,
    from: Vec<String>,
    where_parts: Vec<String>,
    group_by: Vec<String>,
    suffix: Option<String>,
}

impl SqlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(mut self, part: impl Into<String>) -> Self {
        self.select.push(part.into());
        self
    }

    pub fn from_table(mut self, part: impl Into<String>) -> Self {
        self.from.push(part.into());
        self
    }

    pub fn and_where(mut self, part: impl Into<String>) -> Self {
        self.where_parts.push(part.into());
        self
    }

    pub fn group_by(mut self, part: impl Into<String>) -> Self {
        self.group_by.push(part.into());
        self
    }

    /// Text appended after all clauses, e.g. a PIVOT operator
    pub fn suffix(mut self, text: impl Into<String>) -> Self {
        self.suffix = Some(text.into());
        self
    }

    pub fn build(&self) -> String {
        let clauses = [
            clause("SELECT", &self.select, ", "),
            clause("FROM", &self.from, ", "),
            clause("WHERE", &self.where_parts, " AND "),
            clause("GROUP BY", &self.group_by, ", "),
            self.suffix.clone(),
        ];
        clauses.into_iter().flatten().collect::<Vec<_>>().join(" ")
    }
}

fn clause(keyword: &str, parts: &[String], separator: &str) -> Option<String> {
    if parts.is_empty() {
        None
    } else {
        Some(format!("{keyword} {}", parts.join(separator)))
    }
}

/// Build the SQL preview for a request against `results_table`
pub fn preview_sql(doc: &RequestDocument, results_table: &str) -> String {
    let columns: Vec<String> = doc
        .value_cols
        .iter()
        .map(|vc| qualify_column(&vc.field))
        .collect();

    let mut builder = SqlBuilder::new();
    if columns.is_empty() {
        builder = builder.select("Result.*");
    }
    for column in &columns {
        builder = builder.select(column.clone());
    }
    builder = builder.from_table(results_table);

    for (field, condition) in &doc.filter_model {
        builder = builder.and_where(filter_condition(&qualify_column(field), condition));
    }

    if doc.distinct {
        for column in &columns {
            builder = builder.group_by(column.clone());
        }
    }

    // PIVOT needs at least one value to be valid SQL
    if let (Some(pivot_column), Some(pivot_values)) =
        (&doc.pivot.pivot_column, &doc.pivot.pivot_values)
    {
        let agg = doc.pivot.agg_column.as_deref().unwrap_or("Value");
        let values = pivot_values
            .iter()
            .map(|v| quote(v))
            .collect::<Vec<_>>()
            .join(", ");
        builder = builder.suffix(format!("PIVOT (SUM({agg}) FOR {pivot_column} IN ({values}))"));
    }

    builder.build()
}

/// `Result_Desk` becomes `Result.Desk`; anything else is left alone
fn qualify_column(field: &str) -> String {
    match field.strip_prefix(RESULT_TABLE_PREFIX) {
        Some(rest) if !rest.is_empty() => format!("Result.{rest}"),
        _ => field.to_string(),
    }
}

fn filter_condition(column: &str, condition: &FilterCondition) -> String {
    let value = &condition.value;
    match condition.filter_type.as_str() {
        "not_equal" => format!("{column} <> {}", quote(value)),
        "less" => format!("{column} < {}", quote(value)),
        "greater" => format!("{column} > {}", quote(value)),
        "in" => format!("{column} IN ({})", quote_list(value)),
        "not_in" => format!("{column} NOT IN ({})", quote_list(value)),
        _ => format!("{column} = {}", quote(value)),
    }
}

fn quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

fn quote_list(value: &str) -> String {
    split_trim(value)
        .iter()
        .map(|v| quote(v))
        .collect::<Vec<_>>()
        .join(", ")
}
