use serde::Serialize;

/// Numeric literal, keeping the lexical distinction between `10` and `10.0`.
///
/// The subkind is fixed when the text is read: an input without a decimal
/// point is an `Integer`, one with a decimal point is a `Decimal`. The two
/// never compare equal, even for the same magnitude.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum NumberValue {
    Integer(i64),
    Decimal(f64),
}

/// A resolved enum constant: registered type identity plus constant name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumLiteral {
    pub enum_type: String,
    pub constant: String,
}

/// Typed literal value on the right-hand side of a condition or SET item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum QueryValue {
    String(String),
    Number(NumberValue),
    Boolean(bool),
    Enum(EnumLiteral),
    /// Bind parameter: `"?1"` for positional, `"name"` for `:name` and for
    /// bare identifiers used as implicit named parameters.
    Parameter(String),
    /// IN lists; BETWEEN always builds a two-element array.
    Array(Vec<QueryValue>),
    /// Children of an AND/OR/NOT grouping node. Never empty.
    Conditions(Vec<QueryCondition>),
}

impl QueryValue {
    pub const TRUE: QueryValue = QueryValue::Boolean(true);
    pub const FALSE: QueryValue = QueryValue::Boolean(false);
}

/// Comparison and combination operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Condition {
    Equals,
    GreaterThan,
    GreaterEqualsThan,
    LesserThan,
    LesserEqualsThan,
    Like,
    Between,
    In,
    And,
    Or,
    Not,
}

/// A single predicate, or a grouping node whose value holds child conditions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryCondition {
    /// Left-hand field name; `_AND` / `_OR` / `_NOT` for grouping nodes.
    pub name: String,
    pub operator: Condition,
    pub value: QueryValue,
}

impl QueryCondition {
    /// Build a grouping node tagged with a combination operator.
    pub(crate) fn grouping(operator: Condition, children: Vec<QueryCondition>) -> Self {
        let name = match operator {
            Condition::And => "_AND",
            Condition::Or => "_OR",
            Condition::Not => "_NOT",
            _ => unreachable!("grouping nodes are tagged AND/OR/NOT only"),
        };

        QueryCondition {
            name: name.to_string(),
            operator,
            value: QueryValue::Conditions(children),
        }
    }
}

/// WHERE clause wrapper holding the single root condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Where {
    pub condition: QueryCondition,
}

/// One ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sort {
    pub field: String,
    pub ascending: bool,
}

/// A parsed SELECT statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectQuery {
    pub entity: String,
    /// Projected fields, unique, in textual order. Empty means all fields.
    pub fields: Vec<String>,
    pub where_clause: Option<Where>,
    pub sorts: Vec<Sort>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
    pub is_count: bool,
}

/// A parsed DELETE statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeleteQuery {
    pub entity: String,
    /// Selector fields for partial deletes; empty removes the whole record.
    pub fields: Vec<String>,
    pub where_clause: Option<Where>,
}

/// A parsed UPDATE statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateQuery {
    pub entity: String,
    /// SET assignments in textual order; duplicate fields are kept, not merged.
    pub set_items: Vec<(String, QueryValue)>,
    pub where_clause: Option<Where>,
}
