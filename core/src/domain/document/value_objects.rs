use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::domain::common::entities::app_errors::CoreError;

use super::entities::{Document, ID_FIELD};

/// Filter operator for a document field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,  // equals (default)
    Ne,  // not equals
    Gt,  // greater than
    Gte, // greater than or equal
    Lt,  // less than
    Lte, // less than or equal
    In,  // in list (comma-separated)
    Nin, // not in list (comma-separated)
}

impl FromStr for FilterOperator {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "eq" => Ok(FilterOperator::Eq),
            "ne" => Ok(FilterOperator::Ne),
            "gt" => Ok(FilterOperator::Gt),
            "gte" => Ok(FilterOperator::Gte),
            "lt" => Ok(FilterOperator::Lt),
            "lte" => Ok(FilterOperator::Lte),
            "in" => Ok(FilterOperator::In),
            "nin" => Ok(FilterOperator::Nin),
            other => Err(CoreError::InvalidFilter(format!(
                "unknown operator '{other}'"
            ))),
        }
    }
}

/// Raw value(s) a query parameter carried; repeated keys give `Many`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Single(String),
    Many(Vec<String>),
}

impl FilterValue {
    pub fn as_slice(&self) -> &[String] {
        match self {
            FilterValue::Single(value) => std::slice::from_ref(value),
            FilterValue::Many(values) => values,
        }
    }
}

/// Filter condition for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCondition {
    pub field: String,
    pub operator: FilterOperator,
    pub value: FilterValue,
}

impl FieldCondition {
    pub fn equals(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            operator: FilterOperator::Eq,
            value: FilterValue::Single(value.into()),
        }
    }

    /// Parse a query key like `name` or `price[gte]` together with its values.
    pub fn parse(key: &str, mut values: Vec<String>) -> Result<Self, CoreError> {
        let (field, operator) = match key.find('[') {
            // `tags[]=a&tags[]=b` is the array form of a plain equality
            Some(open) if key.ends_with(']') => match &key[open + 1..key.len() - 1] {
                "" => (&key[..open], FilterOperator::Eq),
                operator => (&key[..open], operator.parse::<FilterOperator>()?),
            },
            _ => (key, FilterOperator::Eq),
        };

        if field.is_empty() {
            return Err(CoreError::InvalidFilter(format!("'{key}' names no field")));
        }

        let value = if values.len() == 1 {
            FilterValue::Single(values.remove(0))
        } else {
            FilterValue::Many(values)
        };

        Ok(Self {
            field: field.to_string(),
            operator,
            value,
        })
    }

    /// Values the operator compares against. `in` and `nin` split each raw
    /// value on commas.
    pub fn operands(&self) -> Vec<&str> {
        let raw = self.value.as_slice().iter().map(String::as_str);
        match self.operator {
            FilterOperator::In | FilterOperator::Nin => raw
                .flat_map(|value| value.split(','))
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .collect(),
            _ => raw.collect(),
        }
    }
}

/// Case-insensitive substring match of `term` against any of `fields`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPredicate {
    pub fields: Vec<String>,
    pub term: String,
}

impl SearchPredicate {
    /// Returns `None` when either the trimmed term or the field list is empty.
    pub fn new(fields: &[String], term: &str) -> Option<Self> {
        let term = term.trim();
        if term.is_empty() || fields.is_empty() {
            return None;
        }

        Some(Self {
            fields: fields.to_vec(),
            term: term.to_string(),
        })
    }
}

/// Conjunction of field conditions and an optional search predicate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub conditions: Vec<FieldCondition>,
    pub search: Option<SearchPredicate>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, condition: FieldCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty() && self.search.is_none()
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// Sort specification for a single field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// Parsed sort parameters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortParams {
    pub sorts: Vec<SortSpec>,
}

impl SortParams {
    pub fn new() -> Self {
        Self { sorts: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.sorts.is_empty()
    }

    /// Parse sort string like "field1,-field2,field3"
    pub fn from_string(s: &str) -> Self {
        let mut sorts = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            if let Some(stripped) = part.strip_prefix('-') {
                if stripped.is_empty() {
                    continue;
                }
                sorts.push(SortSpec {
                    field: stripped.to_string(),
                    direction: SortDirection::Desc,
                });
            } else {
                sorts.push(SortSpec {
                    field: part.to_string(),
                    direction: SortDirection::Asc,
                });
            }
        }
        Self { sorts }
    }
}

/// Field selection. Only top-level fields are addressed; `a.b` keeps all of `a`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Projection {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

impl Projection {
    /// Parse a select string like "name,email" or "-phone".
    pub fn from_string(s: &str) -> Self {
        let mut projection = Self::default();
        for part in s.split(',') {
            let part = part.trim();
            let (target, negated) = match part.strip_prefix('-') {
                Some(stripped) => (&mut projection.exclude, stripped),
                None => (&mut projection.include, part),
            };
            let field = negated.split('.').next().unwrap_or_default();
            if !field.is_empty() && !target.iter().any(|f| f == field) {
                target.push(field.to_string());
            }
        }
        projection
    }

    pub fn is_empty(&self) -> bool {
        self.include.is_empty() && self.exclude.is_empty()
    }

    /// Inclusion wins when both lists are given; exclusions then trim the
    /// included set. The id field survives unless excluded explicitly.
    pub fn apply(&self, document: &mut Document) {
        if !self.include.is_empty() {
            document.retain(|key, _| key == ID_FIELD || self.include.iter().any(|f| f == key));
        }
        for field in &self.exclude {
            document.remove(field);
        }
    }
}

/// Related-document expansion: a bare reference path, or a path with its own
/// field selection for the referenced documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PopulateSpec {
    Path(String),
    Detailed {
        path: String,
        #[serde(default)]
        select: Option<String>,
    },
}

impl PopulateSpec {
    pub fn detailed(path: impl Into<String>, select: impl Into<String>) -> Self {
        PopulateSpec::Detailed {
            path: path.into(),
            select: Some(select.into()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            PopulateSpec::Path(path) => path,
            PopulateSpec::Detailed { path, .. } => path,
        }
    }

    pub fn projection(&self) -> Projection {
        match self {
            PopulateSpec::Detailed {
                select: Some(select),
                ..
            } => Projection::from_string(select),
            _ => Projection::default(),
        }
    }

    /// Normalize untyped populate configuration: a string (whitespace
    /// separated paths), an object `{ path, select? }`, or an array of either.
    /// Anything else is skipped with a warning.
    pub fn normalize(value: &Value) -> Vec<PopulateSpec> {
        match value {
            Value::Array(entries) => entries.iter().flat_map(Self::normalize_entry).collect(),
            other => Self::normalize_entry(other),
        }
    }

    fn normalize_entry(value: &Value) -> Vec<PopulateSpec> {
        match value {
            Value::String(paths) => paths
                .split_whitespace()
                .map(|path| PopulateSpec::Path(path.to_string()))
                .collect(),
            Value::Object(_) => match serde_json::from_value::<PopulateSpec>(value.clone()) {
                Ok(spec @ PopulateSpec::Detailed { .. }) => vec![spec],
                _ => {
                    warn!(entry = %value, "Ignoring populate entry without a path");
                    Vec::new()
                }
            },
            other => {
                warn!(entry = %other, "Ignoring populate entry of unsupported type");
                Vec::new()
            }
        }
    }
}

impl From<&str> for PopulateSpec {
    fn from(path: &str) -> Self {
        PopulateSpec::Path(path.to_string())
    }
}

/// Everything a document accessor needs to serve one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindQuery {
    pub filter: Filter,
    pub projection: Projection,
    pub sort: SortParams,
    pub skip: u64,
    pub limit: Option<u64>,
    pub populate: Vec<PopulateSpec>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_condition_parse_simple() {
        let condition = FieldCondition::parse("status", vec!["pending".to_string()]).unwrap();
        assert_eq!(condition.field, "status");
        assert_eq!(condition.operator, FilterOperator::Eq);
        assert_eq!(condition.value, FilterValue::Single("pending".to_string()));
    }

    #[test]
    fn test_condition_parse_with_operator() {
        let condition = FieldCondition::parse("age[gte]", vec!["50".to_string()]).unwrap();
        assert_eq!(condition.field, "age");
        assert_eq!(condition.operator, FilterOperator::Gte);
        assert_eq!(condition.operands(), vec!["50"]);
    }

    #[test]
    fn test_condition_parse_rejects_unknown_operator() {
        let result = FieldCondition::parse("age[between]", vec!["1".to_string()]);
        assert!(matches!(result, Err(CoreError::InvalidFilter(_))));

        let result = FieldCondition::parse("[gt]", vec!["1".to_string()]);
        assert!(matches!(result, Err(CoreError::InvalidFilter(_))));
    }

    #[test]
    fn test_in_operands_split_on_commas() {
        let condition = FieldCondition::parse(
            "status[in]",
            vec!["pending, accepted".to_string(), "declined".to_string()],
        )
        .unwrap();
        assert_eq!(condition.operands(), vec!["pending", "accepted", "declined"]);
    }

    #[test]
    fn test_sort_parse() {
        let sort = SortParams::from_string("-createdAt, name,,-");
        assert_eq!(sort.sorts.len(), 2);
        assert_eq!(sort.sorts[0].field, "createdAt");
        assert_eq!(sort.sorts[0].direction, SortDirection::Desc);
        assert_eq!(sort.sorts[1].field, "name");
        assert_eq!(sort.sorts[1].direction, SortDirection::Asc);
    }

    #[test]
    fn test_search_requires_term_and_fields() {
        let fields = vec!["name".to_string()];
        assert!(SearchPredicate::new(&fields, "   ").is_none());
        assert!(SearchPredicate::new(&[], "ada").is_none());

        let search = SearchPredicate::new(&fields, "  ada ").unwrap();
        assert_eq!(search.term, "ada");
    }

    #[test]
    fn test_projection_keeps_id_and_selected_fields() {
        let mut document = json!({
            "id": "1", "name": "Ada", "email": "ada@example.com", "phone": "0600"
        })
        .as_object()
        .cloned()
        .unwrap();

        Projection::from_string("name, email").apply(&mut document);

        let mut keys: Vec<&str> = document.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["email", "id", "name"]);
    }

    #[test]
    fn test_projection_exclusion() {
        let mut document = json!({ "id": "1", "name": "Ada", "phone": "0600" })
            .as_object()
            .cloned()
            .unwrap();

        Projection::from_string("-phone").apply(&mut document);

        assert!(document.contains_key("name"));
        assert!(!document.contains_key("phone"));
    }

    #[test]
    fn test_populate_normalize() {
        let specs = PopulateSpec::normalize(&json!([
            "owner organization",
            { "path": "recipient", "select": "name" },
            42,
            { "select": "name" }
        ]));

        assert_eq!(
            specs,
            vec![
                PopulateSpec::Path("owner".to_string()),
                PopulateSpec::Path("organization".to_string()),
                PopulateSpec::detailed("recipient", "name"),
            ]
        );
    }

    #[test]
    fn test_populate_normalize_single_entry() {
        assert_eq!(
            PopulateSpec::normalize(&json!({ "path": "owner" })),
            vec![PopulateSpec::Detailed {
                path: "owner".to_string(),
                select: None
            }]
        );
        assert!(PopulateSpec::normalize(&Value::Null).is_empty());
    }
}
