//! In-process evaluation of filters and sort orders over JSON documents.
//!
//! Query parameters arrive as strings; they are compared numerically against
//! numbers, as booleans against booleans and verbatim against strings. A
//! condition on an array field holds when any element satisfies it.

use std::cmp::Ordering;

use serde_json::Value;

use crate::domain::document::{
    entities::{Document, lookup},
    value_objects::{
        FieldCondition, Filter, FilterOperator, SearchPredicate, SortDirection, SortParams,
    },
};

pub fn matches(filter: &Filter, document: &Document) -> bool {
    filter
        .conditions
        .iter()
        .all(|condition| condition_matches(condition, document))
        && filter
            .search
            .as_ref()
            .is_none_or(|search| search_matches(search, document))
}

fn condition_matches(condition: &FieldCondition, document: &Document) -> bool {
    let stored = lookup(document, &condition.field);
    let operands = condition.operands();

    match condition.operator {
        FilterOperator::Eq | FilterOperator::In => operands
            .iter()
            .any(|operand| stored.is_some_and(|value| equals(value, operand))),
        FilterOperator::Ne | FilterOperator::Nin => operands
            .iter()
            .all(|operand| !stored.is_some_and(|value| equals(value, operand))),
        operator => operands.iter().all(|operand| {
            stored
                .and_then(|value| compare(value, operand))
                .is_some_and(|ordering| satisfies(operator, ordering))
        }),
    }
}

fn equals(stored: &Value, operand: &str) -> bool {
    match stored {
        Value::Array(items) => items.iter().any(|item| scalar_equals(item, operand)),
        other => scalar_equals(other, operand),
    }
}

fn scalar_equals(stored: &Value, operand: &str) -> bool {
    match stored {
        Value::String(s) => s == operand,
        Value::Number(n) => match (n.as_f64(), operand.trim().parse::<f64>()) {
            (Some(a), Ok(b)) => a == b,
            _ => false,
        },
        Value::Bool(b) => operand.parse::<bool>().is_ok_and(|parsed| parsed == *b),
        Value::Null => operand == "null",
        Value::Array(_) | Value::Object(_) => false,
    }
}

/// Ordering of a stored scalar relative to the operand, when comparable
fn compare(stored: &Value, operand: &str) -> Option<Ordering> {
    match stored {
        Value::Number(n) => n.as_f64()?.partial_cmp(&operand.trim().parse::<f64>().ok()?),
        Value::String(s) => Some(s.as_str().cmp(operand)),
        _ => None,
    }
}

fn satisfies(operator: FilterOperator, ordering: Ordering) -> bool {
    match operator {
        FilterOperator::Gt => ordering == Ordering::Greater,
        FilterOperator::Gte => ordering != Ordering::Less,
        FilterOperator::Lt => ordering == Ordering::Less,
        FilterOperator::Lte => ordering != Ordering::Greater,
        _ => false,
    }
}

fn search_matches(search: &SearchPredicate, document: &Document) -> bool {
    let needle = search.term.to_lowercase();
    let contains = |value: &Value| {
        value
            .as_str()
            .is_some_and(|s| s.to_lowercase().contains(&needle))
    };

    search.fields.iter().any(|field| match lookup(document, field) {
        Some(Value::Array(items)) => items.iter().any(contains),
        Some(value) => contains(value),
        None => false,
    })
}

/// Compares two documents by each sort key in turn.
pub fn compare_documents(a: &Document, b: &Document, sort: &SortParams) -> Ordering {
    for spec in &sort.sorts {
        let ordering = compare_values(lookup(a, &spec.field), lookup(b, &spec.field));
        let ordering = match spec.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Missing and null sort first, then numbers, strings, objects, arrays and
/// booleans.
fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    fn rank(value: Option<&Value>) -> u8 {
        match value {
            None | Some(Value::Null) => 0,
            Some(Value::Number(_)) => 1,
            Some(Value::String(_)) => 2,
            Some(Value::Object(_)) => 3,
            Some(Value::Array(_)) => 4,
            Some(Value::Bool(_)) => 5,
        }
    }

    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => rank(a).cmp(&rank(b)),
    }
}
