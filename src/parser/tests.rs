//! Tests for the EQL parser.

use crate::ast::*;
use crate::error::{QueryError, QueryResult};
use crate::parser::Parser;
use crate::registry::EnumRegistry;

fn sample_registry() -> EnumRegistry {
    let registry = EnumRegistry::new();
    registry.register("orders.Status", ["OPEN", "CLOSED", "SHIPPED"]);
    registry
}

fn try_select(input: &str, entity: Option<&str>) -> QueryResult<SelectQuery> {
    let registry = sample_registry();
    let mut parser = Parser::new(input, &registry)?;
    parser.parse_select(entity)
}

fn try_delete(input: &str, entity: Option<&str>) -> QueryResult<DeleteQuery> {
    let registry = sample_registry();
    let mut parser = Parser::new(input, &registry)?;
    parser.parse_delete(entity)
}

fn try_update(input: &str, entity: Option<&str>) -> QueryResult<UpdateQuery> {
    let registry = sample_registry();
    let mut parser = Parser::new(input, &registry)?;
    parser.parse_update(entity)
}

/// Parse just a WHERE body and return its root condition.
fn parse_where(input: &str) -> QueryCondition {
    let query = try_select(&format!("FROM orders WHERE {}", input), None).unwrap();
    query.where_clause.unwrap().condition
}

#[test]
fn test_select_all() {
    let query = try_select("FROM users", None).unwrap();
    assert_eq!(query.entity, "users");
    assert!(query.fields.is_empty());
    assert!(query.where_clause.is_none());
    assert!(query.sorts.is_empty());
    assert!(!query.is_count);
}

#[test]
fn test_select_fields() {
    let query = try_select("SELECT name, age FROM users", None).unwrap();
    assert_eq!(query.fields, vec!["name".to_string(), "age".to_string()]);
}

#[test]
fn test_select_fields_are_unique() {
    let query = try_select("SELECT name, age, name FROM users", None).unwrap();
    assert_eq!(query.fields, vec!["name".to_string(), "age".to_string()]);
}

#[test]
fn test_explicit_entity_wins_over_fallback() {
    let query = try_select("FROM entity", Some("newEntity")).unwrap();
    assert_eq!(query.entity, "entity");
}

#[test]
fn test_fallback_entity_used_when_clause_absent() {
    let query = try_select("", Some("entity")).unwrap();
    assert_eq!(query.entity, "entity");

    let query = try_select("WHERE age > 10", Some("users")).unwrap();
    assert_eq!(query.entity, "users");
    assert!(query.where_clause.is_some());
}

#[test]
fn test_missing_entity() {
    let err = try_select("", None).unwrap_err();
    assert!(matches!(err, QueryError::MissingEntityError(_)));

    // A blank fallback counts as absent
    let err = try_select("WHERE age > 10", Some("  ")).unwrap_err();
    assert!(matches!(err, QueryError::MissingEntityError(_)));
}

#[test]
fn test_count_this() {
    let query = try_select("SELECT COUNT (THIS) FROM users WHERE age > 18", None).unwrap();
    assert!(query.is_count);
    assert!(query.fields.is_empty());
    assert!(query.where_clause.is_some());
}

#[test]
fn test_order_by() {
    let query = try_select("FROM users ORDER BY name ASC, age DESC, city", None).unwrap();
    assert_eq!(
        query.sorts,
        vec![
            Sort {
                field: "name".to_string(),
                ascending: true
            },
            Sort {
                field: "age".to_string(),
                ascending: false
            },
            Sort {
                field: "city".to_string(),
                ascending: true
            },
        ]
    );
}

#[test]
fn test_order_by_without_from() {
    let query = try_select("ORDER BY name DESC", Some("users")).unwrap();
    assert_eq!(query.entity, "users");
    assert_eq!(query.sorts.len(), 1);
}

#[test]
fn test_skip_limit() {
    let query = try_select("FROM users SKIP 5 LIMIT 10", None).unwrap();
    assert_eq!(query.skip, Some(5));
    assert_eq!(query.limit, Some(10));

    let query = try_select("FROM users", None).unwrap();
    assert_eq!(query.skip, None);
    assert_eq!(query.limit, None);
}

#[test]
fn test_negative_skip_limit() {
    let err = try_select("FROM users LIMIT -1", None).unwrap_err();
    assert!(matches!(err, QueryError::InvalidArgumentError(_)));

    let err = try_select("FROM users SKIP -3", None).unwrap_err();
    assert!(matches!(err, QueryError::InvalidArgumentError(_)));
}

#[test]
fn test_trailing_tokens_rejected() {
    let err = try_select("FROM users nonsense", None).unwrap_err();
    assert!(matches!(err, QueryError::SyntaxError(_)));
}

#[test]
fn test_simple_equals() {
    let condition = parse_where("age = 10");
    assert_eq!(
        condition,
        QueryCondition {
            name: "age".to_string(),
            operator: Condition::Equals,
            value: QueryValue::Number(NumberValue::Integer(10)),
        }
    );
}

#[test]
fn test_comparison_operators() {
    assert_eq!(parse_where("age > 10").operator, Condition::GreaterThan);
    assert_eq!(
        parse_where("age >= 10").operator,
        Condition::GreaterEqualsThan
    );
    assert_eq!(parse_where("age < 10").operator, Condition::LesserThan);
    assert_eq!(
        parse_where("age <= 10").operator,
        Condition::LesserEqualsThan
    );
}

#[test]
fn test_like() {
    let condition = parse_where("name LIKE 'A%'");
    assert_eq!(condition.operator, Condition::Like);
    assert_eq!(condition.value, QueryValue::String("A%".to_string()));
}

#[test]
fn test_dotted_field_name() {
    let condition = parse_where("address.city = 'Paris'");
    assert_eq!(condition.name, "address.city");
}

#[test]
fn test_in_list_value_typing() {
    let condition = parse_where("age IN (10, 12.12, 'otavio', ?1, :param)");
    assert_eq!(condition.name, "age");
    assert_eq!(condition.operator, Condition::In);

    if let QueryValue::Array(values) = condition.value {
        assert_eq!(values.len(), 5);
        assert_eq!(values[0], QueryValue::Number(NumberValue::Integer(10)));
        assert_eq!(values[1], QueryValue::Number(NumberValue::Decimal(12.12)));
        assert_eq!(values[2], QueryValue::String("otavio".to_string()));
        assert_eq!(values[3], QueryValue::Parameter("?1".to_string()));
        assert_eq!(values[4], QueryValue::Parameter("param".to_string()));
    } else {
        panic!("Expected array value");
    }
}

#[test]
fn test_integer_and_decimal_stay_distinct() {
    let ten = parse_where("salary = 10").value;
    let ten_decimal = parse_where("salary = 10.0").value;
    assert_eq!(ten, QueryValue::Number(NumberValue::Integer(10)));
    assert_eq!(ten_decimal, QueryValue::Number(NumberValue::Decimal(10.0)));
    assert_ne!(ten, ten_decimal);
}

#[test]
fn test_value_building_is_deterministic() {
    let first = parse_where("age IN (10, 12.12, 'otavio', ?1, :param)");
    let second = parse_where("age IN (10, 12.12, 'otavio', ?1, :param)");
    assert_eq!(first, second);
}

#[test]
fn test_boolean_values() {
    assert_eq!(parse_where("active = TRUE").value, QueryValue::TRUE);
    assert_eq!(parse_where("active = false").value, QueryValue::FALSE);
}

#[test]
fn test_bare_identifier_is_named_parameter() {
    let condition = parse_where("name = username");
    assert_eq!(
        condition.value,
        QueryValue::Parameter("username".to_string())
    );
}

#[test]
fn test_enum_value() {
    let condition = parse_where("status = orders.Status.OPEN");
    assert_eq!(
        condition.value,
        QueryValue::Enum(EnumLiteral {
            enum_type: "orders.Status".to_string(),
            constant: "OPEN".to_string(),
        })
    );
}

#[test]
fn test_enum_resolution_failure() {
    let err = try_select("FROM orders WHERE status = orders.Status.BOGUS", None).unwrap_err();
    assert!(matches!(err, QueryError::EnumResolutionError(_)));

    let err = try_select("FROM orders WHERE status = nowhere.Missing.X", None).unwrap_err();
    assert!(matches!(err, QueryError::EnumResolutionError(_)));
}

#[test]
fn test_or_then_and_keeps_nonstandard_shape() {
    // `a OR b AND c` accumulates flat on OR with a singleton AND group,
    // not the conventional OR[a, AND[b, c]]
    let condition = parse_where("age = 10 OR salary = 10.15 AND name = ?1");
    assert_eq!(condition.name, "_OR");
    assert_eq!(condition.operator, Condition::Or);

    let children = if let QueryValue::Conditions(children) = &condition.value {
        children
    } else {
        panic!("Expected condition list");
    };
    assert_eq!(children.len(), 3);
    assert_eq!(
        children[0],
        QueryCondition {
            name: "age".to_string(),
            operator: Condition::Equals,
            value: QueryValue::Number(NumberValue::Integer(10)),
        }
    );
    assert_eq!(
        children[1],
        QueryCondition {
            name: "salary".to_string(),
            operator: Condition::Equals,
            value: QueryValue::Number(NumberValue::Decimal(10.15)),
        }
    );
    assert_eq!(
        children[2],
        QueryCondition {
            name: "_AND".to_string(),
            operator: Condition::And,
            value: QueryValue::Conditions(vec![QueryCondition {
                name: "name".to_string(),
                operator: Condition::Equals,
                value: QueryValue::Parameter("?1".to_string()),
            }]),
        }
    );
}

#[test]
fn test_same_connective_accumulates_flat() {
    let condition = parse_where("a = 1 AND b = 2 AND c = 3");
    assert_eq!(condition.name, "_AND");

    if let QueryValue::Conditions(children) = &condition.value {
        assert_eq!(children.len(), 3);
        assert_eq!(children[0].name, "a");
        assert_eq!(children[1].name, "b");
        assert_eq!(children[2].name, "c");
    } else {
        panic!("Expected condition list");
    }
}

#[test]
fn test_outer_connective_never_switches() {
    // Each differing connective wraps only its own predicate; the list stays
    // tagged with the first connective seen
    let condition = parse_where("a = 1 AND b = 2 OR c = 3 AND d = 4");
    assert_eq!(condition.name, "_AND");

    if let QueryValue::Conditions(children) = &condition.value {
        assert_eq!(children.len(), 4);
        assert_eq!(children[0].name, "a");
        assert_eq!(children[1].name, "b");
        assert_eq!(children[2].name, "_OR");
        assert_eq!(children[3].name, "d");
    } else {
        panic!("Expected condition list");
    }
}

#[test]
fn test_not_predicate() {
    let condition = parse_where("NOT age = 10");
    assert_eq!(
        condition,
        QueryCondition {
            name: "_NOT".to_string(),
            operator: Condition::Not,
            value: QueryValue::Conditions(vec![QueryCondition {
                name: "age".to_string(),
                operator: Condition::Equals,
                value: QueryValue::Number(NumberValue::Integer(10)),
            }]),
        }
    );
}

#[test]
fn test_not_inside_connective() {
    let condition = parse_where("a = 1 AND NOT b = 2");
    if let QueryValue::Conditions(children) = &condition.value {
        assert_eq!(children.len(), 2);
        assert_eq!(children[1].name, "_NOT");
        assert_eq!(children[1].operator, Condition::Not);
    } else {
        panic!("Expected condition list");
    }
}

#[test]
fn test_between_builds_a_pair() {
    let condition = parse_where("age BETWEEN 18 AND 65");
    assert_eq!(condition.operator, Condition::Between);
    assert_eq!(
        condition.value,
        QueryValue::Array(vec![
            QueryValue::Number(NumberValue::Integer(18)),
            QueryValue::Number(NumberValue::Integer(65)),
        ])
    );
}

#[test]
fn test_between_and_is_not_a_connective() {
    // The AND inside BETWEEN is consumed by the predicate; the OR after it
    // is the first combination-level connective
    let condition = parse_where("age BETWEEN 18 AND 65 OR name = 'Ada'");
    assert_eq!(condition.name, "_OR");

    if let QueryValue::Conditions(children) = &condition.value {
        assert_eq!(children.len(), 2);
        assert_eq!(children[0].operator, Condition::Between);
        assert_eq!(children[1].name, "name");
    } else {
        panic!("Expected condition list");
    }
}

#[test]
fn test_in_requires_parenthesized_list() {
    let err = try_select("FROM users WHERE age IN 5", None).unwrap_err();
    assert!(matches!(err, QueryError::SyntaxError(_)));
}

#[test]
fn test_unbalanced_parentheses() {
    let err = try_select("FROM users WHERE age IN (1, 2", None).unwrap_err();
    assert!(matches!(err, QueryError::SyntaxError(_)));
}

#[test]
fn test_missing_value() {
    let err = try_select("FROM users WHERE age =", None).unwrap_err();
    assert!(matches!(err, QueryError::SyntaxError(_)));
}

#[test]
fn test_unknown_operator() {
    let err = try_select("FROM users WHERE age <> 5", None).unwrap_err();
    assert!(matches!(err, QueryError::SyntaxError(_)));
}

#[test]
fn test_delete() {
    let query = try_delete("DELETE FROM entity", None).unwrap();
    assert_eq!(query.entity, "entity");
    assert!(query.fields.is_empty());
    assert!(query.where_clause.is_none());
}

#[test]
fn test_delete_with_fields_and_where() {
    let query = try_delete("DELETE name, age FROM users WHERE age < 18", None).unwrap();
    assert_eq!(query.fields, vec!["name".to_string(), "age".to_string()]);
    assert!(query.where_clause.is_some());
}

#[test]
fn test_delete_fallback_entity() {
    let query = try_delete("WHERE age < 18", Some("users")).unwrap();
    assert_eq!(query.entity, "users");

    let err = try_delete("", None).unwrap_err();
    assert!(matches!(err, QueryError::MissingEntityError(_)));
}

#[test]
fn test_update() {
    let query = try_update("UPDATE users SET age = 31, name = 'Ada' WHERE id = ?1", None).unwrap();
    assert_eq!(query.entity, "users");
    assert_eq!(
        query.set_items,
        vec![
            (
                "age".to_string(),
                QueryValue::Number(NumberValue::Integer(31))
            ),
            ("name".to_string(), QueryValue::String("Ada".to_string())),
        ]
    );
    assert!(query.where_clause.is_some());
}

#[test]
fn test_update_duplicate_set_fields_kept_in_order() {
    let query = try_update("UPDATE users SET age = 1, age = 2", None).unwrap();
    assert_eq!(query.set_items.len(), 2);
    assert_eq!(query.set_items[0].0, "age");
    assert_eq!(query.set_items[1].0, "age");
    assert_eq!(
        query.set_items[1].1,
        QueryValue::Number(NumberValue::Integer(2))
    );
}

#[test]
fn test_update_explicit_entity_wins() {
    let query = try_update("UPDATE users SET age = 1", Some("people")).unwrap();
    assert_eq!(query.entity, "users");
}

#[test]
fn test_update_set_only_uses_fallback() {
    let query = try_update("SET age = 1", Some("users")).unwrap();
    assert_eq!(query.entity, "users");
}

#[test]
fn test_update_requires_set() {
    let err = try_update("UPDATE users age = 1", None).unwrap_err();
    assert!(matches!(err, QueryError::SyntaxError(_)));
}

#[test]
fn test_update_set_value_can_be_enum() {
    let query = try_update("UPDATE orders SET status = orders.Status.SHIPPED", None).unwrap();
    assert_eq!(
        query.set_items[0].1,
        QueryValue::Enum(EnumLiteral {
            enum_type: "orders.Status".to_string(),
            constant: "SHIPPED".to_string(),
        })
    );
}
