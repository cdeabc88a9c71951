//! WHERE-clause parsing: predicates and AND/OR/NOT combination.
//!
//! Connectives do not follow SQL precedence. Predicates accumulate flat on
//! the first connective seen; a differing connective wraps only its own
//! right-hand predicate in a singleton group appended to the outer list, and
//! the outer connective never changes. `a OR b AND c` therefore parses to
//! `OR[a, b, AND[c]]`, not `OR[a, AND[b, c]]`.

use crate::ast::{Condition, QueryCondition, QueryValue};
use crate::error::{QueryError, QueryResult};
use crate::lexer::Token;
use crate::parser::Parser;

impl Parser<'_> {
    /// Parse a full WHERE body into a single root condition. A lone
    /// predicate is returned as-is, without a grouping wrapper.
    pub(super) fn parse_condition_tree(&mut self) -> QueryResult<QueryCondition> {
        let mut root = self.parse_predicate()?;
        let mut combined: Option<Condition> = None;

        loop {
            let connective = match self.current_token() {
                Token::And => Condition::And,
                Token::Or => Condition::Or,
                _ => break,
            };
            self.advance();
            let predicate = self.parse_predicate()?;

            match combined {
                None => {
                    root = QueryCondition::grouping(connective, vec![root, predicate]);
                    combined = Some(connective);
                }
                Some(current) if current == connective => {
                    push_child(&mut root, predicate);
                }
                Some(_) => {
                    let singleton = QueryCondition::grouping(connective, vec![predicate]);
                    push_child(&mut root, singleton);
                }
            }
        }

        Ok(root)
    }

    /// Parse a single `[NOT] name operator value` predicate.
    fn parse_predicate(&mut self) -> QueryResult<QueryCondition> {
        if *self.current_token() == Token::Not {
            self.advance();
            let inner = self.parse_predicate()?;
            return Ok(QueryCondition::grouping(Condition::Not, vec![inner]));
        }

        let name = self.expect_field_name()?;

        let operator = match self.current_token() {
            Token::Equal => Condition::Equals,
            Token::GreaterThan => Condition::GreaterThan,
            Token::GreaterThanEq => Condition::GreaterEqualsThan,
            Token::LessThan => Condition::LesserThan,
            Token::LessThanEq => Condition::LesserEqualsThan,
            Token::Like => Condition::Like,
            Token::In => Condition::In,
            Token::Between => Condition::Between,
            other => {
                return Err(QueryError::SyntaxError(format!(
                    "Expected comparison operator after '{}', got {:?}",
                    name, other
                )));
            }
        };
        self.advance();

        let value = match operator {
            Condition::In => {
                if *self.current_token() != Token::LeftParen {
                    return Err(QueryError::SyntaxError(format!(
                        "Expected '(' after IN on field '{}'",
                        name
                    )));
                }
                self.parse_value()?
            }
            Condition::Between => {
                // The AND here belongs to BETWEEN, consumed before connective
                // scanning resumes
                let low = self.parse_value()?;
                self.expect(Token::And)?;
                let high = self.parse_value()?;
                QueryValue::Array(vec![low, high])
            }
            _ => self.parse_value()?,
        };

        Ok(QueryCondition {
            name,
            operator,
            value,
        })
    }
}

fn push_child(root: &mut QueryCondition, child: QueryCondition) {
    match &mut root.value {
        QueryValue::Conditions(children) => children.push(child),
        _ => unreachable!("combination root always holds a condition list"),
    }
}
