//! Translation of document filters and sort orders into Postgres expressions
//! over the `documents.data` JSONB column.
//!
//! Every expression keeps the semantics of the in-process matcher: scalars
//! compare by type, arrays match when any element does, and a condition on a
//! missing field is false (true for `ne` and `nin`).

use sea_orm::{
    Condition,
    sea_query::{Expr, Order, SimpleExpr, Value},
};

use crate::domain::document::value_objects::{
    FieldCondition, Filter, FilterOperator, SearchPredicate, SortDirection, SortParams,
};

/// SQL text with its own `$N` placeholders and the values bound to them.
#[derive(Debug, Default)]
struct Fragment {
    sql: String,
    values: Vec<Value>,
}

impl Fragment {
    fn push(&mut self, sql: &str) -> &mut Self {
        self.sql.push_str(sql);
        self
    }

    fn bind(&mut self, value: impl Into<Value>) -> &mut Self {
        self.values.push(value.into());
        self.sql.push_str(&format!("${}", self.values.len()));
        self
    }

    /// `data -> 'a' -> 'b'`: the JSON value at a dotted path
    fn json(&mut self, field: &str) -> &mut Self {
        self.push("(data");
        for segment in field.split('.') {
            self.push(" -> ").bind(segment.to_string());
        }
        self.push(")")
    }

    /// `data -> 'a' ->> 'b'`: the same value rendered as text
    fn text(&mut self, field: &str) -> &mut Self {
        let mut segments: Vec<&str> = field.split('.').collect();
        let last = segments.pop().unwrap_or_default();
        self.push("(data");
        for segment in segments {
            self.push(" -> ").bind(segment.to_string());
        }
        self.push(" ->> ").bind(last.to_string()).push(")")
    }

    fn type_is(&mut self, field: &str, json_type: &str) -> &mut Self {
        self.push("jsonb_typeof(")
            .json(field)
            .push(&format!(") = '{json_type}'"))
    }

    fn into_expr(self) -> SimpleExpr {
        Expr::cust_with_values(self.sql, self.values)
    }
}

pub fn filter_condition(filter: &Filter) -> Condition {
    let mut condition = Condition::all();
    for field_condition in &filter.conditions {
        condition = condition.add(field_condition_expr(field_condition));
    }
    if let Some(search) = &filter.search {
        condition = condition.add(search_condition(search));
    }
    condition
}

fn field_condition_expr(condition: &FieldCondition) -> Condition {
    let field = condition.field.as_str();
    let operands = condition.operands();

    match condition.operator {
        FilterOperator::Eq | FilterOperator::In => operands.iter().fold(
            Condition::any().add(Expr::cust("FALSE")),
            |any, operand| any.add(equals(field, operand)),
        ),
        FilterOperator::Ne | FilterOperator::Nin => {
            operands.iter().fold(Condition::all(), |all, operand| {
                all.add(Condition::all().not().add(equals(field, operand)))
            })
        }
        operator => operands.iter().fold(Condition::all(), |all, operand| {
            all.add(compare(field, operator, operand))
        }),
    }
}

/// True when the stored value, or any element of a stored array, equals the
/// operand. Never NULL.
fn equals(field: &str, operand: &str) -> SimpleExpr {
    let number = operand.trim().parse::<f64>().ok().filter(|n| n.is_finite());
    let mut fragment = Fragment::default();

    fragment.push("COALESCE((CASE jsonb_typeof(").json(field).push(")");
    fragment
        .push(" WHEN 'string' THEN ")
        .text(field)
        .push(" = ")
        .bind(operand.to_string());
    fragment
        .push(" WHEN 'boolean' THEN ")
        .text(field)
        .push(" = ")
        .bind(operand.to_string());
    fragment.push(" WHEN 'number' THEN ");
    match number {
        Some(number) => fragment
            .push("(")
            .text(field)
            .push(")::float8 = ")
            .bind(number),
        None => fragment.push("FALSE"),
    };
    fragment.push(&format!(" WHEN 'null' THEN {}", operand == "null"));
    fragment
        .push(" WHEN 'array' THEN ")
        .json(field)
        .push(" @> jsonb_build_array(")
        .bind(operand.to_string())
        .push("::text)");
    if let Some(number) = number {
        fragment
            .push(" OR ")
            .json(field)
            .push(" @> jsonb_build_array(")
            .bind(number)
            .push("::float8)");
    }
    if let Ok(boolean) = operand.parse::<bool>() {
        fragment
            .push(" OR ")
            .json(field)
            .push(" @> jsonb_build_array(")
            .bind(boolean)
            .push("::boolean)");
    }
    fragment.push(" ELSE FALSE END), FALSE)");

    fragment.into_expr()
}

/// Range comparison on scalars: numerically against numbers, byte-wise
/// against strings.
fn compare(field: &str, operator: FilterOperator, operand: &str) -> SimpleExpr {
    let sql_operator = match operator {
        FilterOperator::Gt => ">",
        FilterOperator::Gte => ">=",
        FilterOperator::Lt => "<",
        _ => "<=",
    };
    let number = operand.trim().parse::<f64>().ok().filter(|n| n.is_finite());
    let mut fragment = Fragment::default();

    fragment.push("COALESCE((CASE jsonb_typeof(").json(field).push(")");
    fragment.push(" WHEN 'number' THEN ");
    match number {
        Some(number) => fragment
            .push("(")
            .text(field)
            .push(&format!(")::float8 {sql_operator} "))
            .bind(number),
        None => fragment.push("FALSE"),
    };
    fragment
        .push(" WHEN 'string' THEN ")
        .text(field)
        .push(&format!(" COLLATE \"C\" {sql_operator} "))
        .bind(operand.to_string());
    fragment.push(" ELSE FALSE END), FALSE)");

    fragment.into_expr()
}

/// OR of per-field case-insensitive containment. Array fields match when any
/// string element contains the term.
fn search_condition(search: &SearchPredicate) -> Condition {
    let pattern = like_contains(&search.term);

    search.fields.iter().fold(Condition::any(), |any, field| {
        let mut fragment = Fragment::default();
        fragment.push("COALESCE((CASE jsonb_typeof(").json(field).push(")");
        fragment
            .push(" WHEN 'string' THEN ")
            .text(field)
            .push(" ILIKE ")
            .bind(pattern.clone());
        fragment
            .push(" WHEN 'array' THEN EXISTS (SELECT 1 FROM jsonb_array_elements(")
            .json(field)
            .push(") AS element WHERE jsonb_typeof(element) = 'string'")
            .push(" AND element #>> '{}' ILIKE ")
            .bind(pattern.clone())
            .push(")");
        fragment.push(" ELSE FALSE END), FALSE)");
        any.add(fragment.into_expr())
    })
}

/// Sort keys for each spec: a type rank (missing and null, numbers, strings,
/// objects, arrays, booleans), then strings byte-wise, then numbers and
/// booleans by value.
pub fn order_by(sort: &SortParams) -> Vec<(SimpleExpr, Order)> {
    let mut keys = Vec::new();
    for spec in &sort.sorts {
        let order = match spec.direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        };
        let field = spec.field.as_str();

        let mut rank = Fragment::default();
        rank.push("CASE jsonb_typeof(")
            .json(field)
            .push(") WHEN 'number' THEN 1 WHEN 'string' THEN 2 WHEN 'object' THEN 3")
            .push(" WHEN 'array' THEN 4 WHEN 'boolean' THEN 5 ELSE 0 END");

        let mut text = Fragment::default();
        text.push("(CASE WHEN ")
            .type_is(field, "string")
            .push(" THEN ")
            .text(field)
            .push(" END) COLLATE \"C\"");

        let mut scalar = Fragment::default();
        scalar
            .push("CASE WHEN jsonb_typeof(")
            .json(field)
            .push(") IN ('number', 'boolean') THEN ")
            .json(field)
            .push(" END");

        keys.push((rank.into_expr(), order.clone()));
        keys.push((text.into_expr(), order.clone()));
        keys.push((scalar.into_expr(), order));
    }
    keys
}

fn like_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '%' | '_' | '\\' => {
                out.push('\\');
                out.push(ch);
            }
            c => out.push(c),
        }
    }
    out
}

fn like_contains(s: &str) -> String {
    format!("%{}%", like_escape(s))
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    use super::*;
    use crate::entity::documents;

    fn where_clause(condition: Condition) -> (String, usize) {
        let statement = documents::Entity::find()
            .filter(condition)
            .build(DbBackend::Postgres);
        let values = statement.values.map(|values| values.0.len()).unwrap_or(0);
        (statement.sql, values)
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_contains("50%_off\\"), "%50\\%\\_off\\\\%");
    }

    #[test]
    fn nested_paths_bind_each_segment() {
        let mut fragment = Fragment::default();
        fragment.text("address.city");

        assert_eq!(fragment.sql, "(data -> $1 ->> $2)");
        assert_eq!(fragment.values.len(), 2);
    }

    #[test]
    fn equality_binds_values_instead_of_inlining_them() {
        let filter = Filter::new().with(FieldCondition::equals("name", "x' OR 1=1 --"));

        let (sql, values) = where_clause(filter_condition(&filter));

        assert!(!sql.contains("OR 1=1"));
        assert!(values > 0);
    }

    #[test]
    fn search_is_a_disjunction_over_fields() {
        let filter = Filter {
            conditions: Vec::new(),
            search: SearchPredicate::new(&["name".to_string(), "email".to_string()], "al"),
        };

        let (sql, _) = where_clause(filter_condition(&filter));

        assert_eq!(sql.matches("ILIKE").count(), 4);
        assert!(sql.contains(" OR "));
    }

    #[test]
    fn empty_in_list_matches_nothing() {
        let condition = FieldCondition::parse("status[in]", vec![",".to_string()]).unwrap();

        let (sql, values) = where_clause(field_condition_expr(&condition));

        assert!(sql.contains("FALSE"));
        assert_eq!(values, 0);
    }

    #[test]
    fn every_sort_field_yields_three_keys() {
        let keys = order_by(&SortParams::from_string("-createdAt,name"));

        assert_eq!(keys.len(), 6);
        assert!(matches!(keys[0].1, Order::Desc));
        assert!(matches!(keys[3].1, Order::Asc));
    }
}
