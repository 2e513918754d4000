//! Rendering a finished [`Predicate`] for Sea-ORM consumers.
//!
//! Columns are addressed by their wire name through `Expr::col(Alias::new(..))`
//! so the translation owns no entity types; the repository layer decides which
//! query the condition attaches to. The page query and the count query built
//! from the same condition are independent reads and may be issued
//! concurrently.

use sea_orm::Condition;
use sea_orm::sea_query::{Alias, Expr, ExprTrait, Func, SimpleExpr};
use serde_json::Value;

use super::predicate::{FieldCondition, Predicate, SearchTerm};

/// Escape LIKE wildcards to prevent wildcard injection.
/// Escapes: % (match any) and _ (match single char).
fn escape_like_wildcards(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

fn json_to_sea(value: &Value) -> sea_orm::Value {
    match value {
        Value::Null => sea_orm::Value::String(None),
        Value::Bool(b) => (*b).into(),
        Value::Number(n) => {
            if let Some(int) = n.as_i64() {
                int.into()
            } else {
                n.as_f64().unwrap_or_default().into()
            }
        }
        Value::String(s) => s.clone().into(),
        // Arrays and objects never reach a scalar position; degrade to text.
        other => other.to_string().into(),
    }
}

/// Case-insensitive substring condition: `UPPER(col) LIKE UPPER('%..%')`
/// with the needle's own wildcards escaped.
fn contains_expr(field: &str, needle: &str) -> SimpleExpr {
    let column = Expr::col(Alias::new(field));
    let pattern = format!("%{}%", escape_like_wildcards(needle).to_uppercase());
    Func::upper(column).like(pattern)
}

fn search_condition(terms: &[SearchTerm]) -> Condition {
    let mut any = Condition::any();
    for term in terms {
        any = any.add(contains_expr(&term.field, &term.needle));
    }
    any
}

/// Render the predicate as one AND-condition.
///
/// An empty predicate renders an empty all-group, which matches everything.
#[must_use]
pub fn apply_predicate(predicate: &Predicate) -> Condition {
    let mut condition = Condition::all();

    if let Some(terms) = predicate.search_terms() {
        condition = condition.add(search_condition(terms));
    }

    for (field, cond) in predicate.iter() {
        let column = || Expr::col(Alias::new(field));
        condition = match cond {
            FieldCondition::Equals(Value::Null) => condition.add(column().is_null()),
            FieldCondition::Equals(value) => condition.add(column().eq(json_to_sea(value))),
            FieldCondition::Contains(needle) => condition.add(contains_expr(field, needle)),
            FieldCondition::In(values) => {
                condition.add(column().is_in(values.iter().map(json_to_sea)))
            }
            FieldCondition::Range { gte, lte } => {
                let mut condition = condition;
                if let Some(bound) = gte {
                    condition = condition.add(column().gte(json_to_sea(bound)));
                }
                if let Some(bound) = lte {
                    condition = condition.add(column().lte(json_to_sea(bound)));
                }
                condition
            }
        };
    }

    condition
}
