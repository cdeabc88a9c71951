//! Literal value construction: tokens into typed `QueryValue` nodes.
//!
//! Handles:
//! - Numbers, keeping the integer/decimal lexical split
//! - Quoted strings
//! - TRUE / FALSE keywords
//! - Bind parameters: `?N` positional, `:name` named
//! - Dotted enum paths resolved through the registry
//! - Bare identifiers as implicit named parameters
//! - Parenthesized comma lists for IN

use crate::ast::{NumberValue, QueryValue};
use crate::error::{QueryError, QueryResult};
use crate::lexer::Token;
use crate::parser::Parser;

impl Parser<'_> {
    pub(super) fn parse_value(&mut self) -> QueryResult<QueryValue> {
        match self.current_token().clone() {
            Token::Integer(n) => {
                self.advance();
                Ok(QueryValue::Number(NumberValue::Integer(n)))
            }
            Token::Float(f) => {
                self.advance();
                Ok(QueryValue::Number(NumberValue::Decimal(f)))
            }
            Token::String(s) => {
                self.advance();
                Ok(QueryValue::String(s))
            }
            Token::True => {
                self.advance();
                Ok(QueryValue::TRUE)
            }
            Token::False => {
                self.advance();
                Ok(QueryValue::FALSE)
            }
            Token::Placeholder(p) => {
                self.advance();
                Ok(QueryValue::Parameter(p))
            }
            Token::LeftParen => self.parse_value_list(),
            Token::Identifier(name) => {
                self.advance();
                if *self.current_token() == Token::Dot {
                    let path = self.read_dotted_path(name)?;
                    let literal = self.registry.resolve(&path)?;
                    Ok(QueryValue::Enum(literal))
                } else {
                    // Bare identifier: implicit named parameter
                    Ok(QueryValue::Parameter(name))
                }
            }
            other => Err(QueryError::SyntaxError(format!(
                "Expected value, got {:?}",
                other
            ))),
        }
    }

    /// Parenthesized comma list, as used by IN.
    fn parse_value_list(&mut self) -> QueryResult<QueryValue> {
        self.expect(Token::LeftParen)?;

        let mut values = Vec::new();
        loop {
            values.push(self.parse_value()?);

            if *self.current_token() == Token::Comma {
                self.advance();
            } else {
                break;
            }
        }

        self.expect(Token::RightParen)?;
        Ok(QueryValue::Array(values))
    }

    fn read_dotted_path(&mut self, head: String) -> QueryResult<String> {
        let mut path = head;

        while *self.current_token() == Token::Dot {
            self.advance();
            let part = self.expect_identifier()?;
            path.push('.');
            path.push_str(&part);
        }

        Ok(path)
    }
}
