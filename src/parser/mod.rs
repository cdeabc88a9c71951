//! Recursive-descent parser for EQL statements.
//!
//! The parser works over the token stream produced by [`crate::lexer`].
//! Statement-level clause slicing lives here; condition parsing and value
//! construction are split into submodules.

mod conditions;
mod values;

#[cfg(test)]
mod tests;

use crate::ast::{DeleteQuery, SelectQuery, Sort, UpdateQuery, Where};
use crate::error::{QueryError, QueryResult};
use crate::lexer::{Lexer, Token};
use crate::registry::EnumRegistry;

pub struct Parser<'a> {
    tokens: Vec<Token>,
    position: usize,
    registry: &'a EnumRegistry,
}

impl<'a> Parser<'a> {
    pub fn new(input: &str, registry: &'a EnumRegistry) -> QueryResult<Self> {
        let mut lexer = Lexer::new(input);
        let tokens = lexer.tokenize()?;

        Ok(Self {
            tokens,
            position: 0,
            registry,
        })
    }

    fn current_token(&self) -> &Token {
        self.tokens.get(self.position).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) {
        if self.position < self.tokens.len() {
            self.position += 1;
        }
    }

    fn expect(&mut self, expected: Token) -> QueryResult<()> {
        if self.current_token() == &expected {
            self.advance();
            Ok(())
        } else {
            Err(QueryError::SyntaxError(format!(
                "Expected {:?}, got {:?}",
                expected,
                self.current_token()
            )))
        }
    }

    pub(crate) fn expect_identifier(&mut self) -> QueryResult<String> {
        match self.current_token().clone() {
            Token::Identifier(name) => {
                self.advance();
                Ok(name)
            }
            other => Err(QueryError::SyntaxError(format!(
                "Expected identifier, got {:?}",
                other
            ))),
        }
    }

    /// Field names may be dotted (`address.city`).
    fn expect_field_name(&mut self) -> QueryResult<String> {
        let mut name = self.expect_identifier()?;

        while *self.current_token() == Token::Dot {
            self.advance();
            let part = self.expect_identifier()?;
            name.push('.');
            name.push_str(&part);
        }

        Ok(name)
    }

    fn expect_end(&mut self) -> QueryResult<()> {
        match self.current_token() {
            Token::Eof => Ok(()),
            other => Err(QueryError::SyntaxError(format!(
                "Unexpected token after end of statement: {:?}",
                other
            ))),
        }
    }

    /// Parse a SELECT statement. Every clause is optional; an empty input
    /// with a fallback entity is a valid "select everything" query.
    pub fn parse_select(&mut self, fallback_entity: Option<&str>) -> QueryResult<SelectQuery> {
        let mut fields = Vec::new();
        let mut is_count = false;

        if *self.current_token() == Token::Select {
            self.advance();
            if *self.current_token() == Token::Count {
                self.advance();
                self.expect(Token::LeftParen)?;
                self.expect(Token::This)?;
                self.expect(Token::RightParen)?;
                is_count = true;
            } else {
                fields = self.parse_field_list()?;
            }
        }

        let explicit = self.parse_from_clause()?;
        let where_clause = self.parse_optional_where()?;

        let sorts = if *self.current_token() == Token::Order {
            self.advance();
            self.expect(Token::By)?;
            self.parse_sort_list()?
        } else {
            Vec::new()
        };

        let skip = self.parse_optional_bound(Token::Skip, "SKIP")?;
        let limit = self.parse_optional_bound(Token::Limit, "LIMIT")?;

        self.expect_end()?;
        let entity = resolve_entity(explicit, fallback_entity)?;

        Ok(SelectQuery {
            entity,
            fields,
            where_clause,
            sorts,
            skip,
            limit,
            is_count,
        })
    }

    /// Parse a DELETE statement. Fields after DELETE select a partial
    /// delete in dialects that support it.
    pub fn parse_delete(&mut self, fallback_entity: Option<&str>) -> QueryResult<DeleteQuery> {
        let mut fields = Vec::new();

        if *self.current_token() == Token::Delete {
            self.advance();
            if matches!(self.current_token(), Token::Identifier(_)) {
                fields = self.parse_field_list()?;
            }
        }

        let explicit = self.parse_from_clause()?;
        let where_clause = self.parse_optional_where()?;

        self.expect_end()?;
        let entity = resolve_entity(explicit, fallback_entity)?;

        Ok(DeleteQuery {
            entity,
            fields,
            where_clause,
        })
    }

    /// Parse an UPDATE statement. The SET clause is mandatory; the
    /// `UPDATE entity` prefix is not, mirroring clause-less SELECT texts.
    pub fn parse_update(&mut self, fallback_entity: Option<&str>) -> QueryResult<UpdateQuery> {
        let explicit = if *self.current_token() == Token::Update {
            self.advance();
            Some(self.expect_identifier()?)
        } else {
            None
        };

        self.expect(Token::Set)?;

        let mut set_items = Vec::new();
        loop {
            let field = self.expect_field_name()?;
            self.expect(Token::Equal)?;
            let value = self.parse_value()?;
            set_items.push((field, value));

            if *self.current_token() == Token::Comma {
                self.advance();
            } else {
                break;
            }
        }

        let where_clause = self.parse_optional_where()?;

        self.expect_end()?;
        let entity = resolve_entity(explicit, fallback_entity)?;

        Ok(UpdateQuery {
            entity,
            set_items,
            where_clause,
        })
    }

    fn parse_from_clause(&mut self) -> QueryResult<Option<String>> {
        if *self.current_token() == Token::From {
            self.advance();
            Ok(Some(self.expect_identifier()?))
        } else {
            Ok(None)
        }
    }

    fn parse_optional_where(&mut self) -> QueryResult<Option<Where>> {
        if *self.current_token() == Token::Where {
            self.advance();
            let condition = self.parse_condition_tree()?;
            Ok(Some(Where { condition }))
        } else {
            Ok(None)
        }
    }

    /// Comma-separated field names, unique by construction (first
    /// occurrence wins).
    fn parse_field_list(&mut self) -> QueryResult<Vec<String>> {
        let mut fields = Vec::new();

        loop {
            let name = self.expect_field_name()?;
            if !fields.contains(&name) {
                fields.push(name);
            }

            if *self.current_token() == Token::Comma {
                self.advance();
            } else {
                break;
            }
        }

        Ok(fields)
    }

    fn parse_sort_list(&mut self) -> QueryResult<Vec<Sort>> {
        let mut sorts = Vec::new();

        loop {
            let field = self.expect_field_name()?;

            let ascending = if *self.current_token() == Token::Desc {
                self.advance();
                false
            } else if *self.current_token() == Token::Asc {
                self.advance();
                true
            } else {
                true
            };

            sorts.push(Sort { field, ascending });

            if *self.current_token() == Token::Comma {
                self.advance();
            } else {
                break;
            }
        }

        Ok(sorts)
    }

    fn parse_optional_bound(&mut self, keyword: Token, label: &str) -> QueryResult<Option<i64>> {
        if *self.current_token() != keyword {
            return Ok(None);
        }
        self.advance();

        match self.current_token() {
            Token::Integer(n) => {
                let n = *n;
                self.advance();
                if n < 0 {
                    return Err(QueryError::InvalidArgumentError(format!(
                        "{} must not be negative: {}",
                        label, n
                    )));
                }
                Ok(Some(n))
            }
            other => Err(QueryError::SyntaxError(format!(
                "Expected integer after {}, got {:?}",
                label, other
            ))),
        }
    }
}

/// An explicit target clause in the text always wins; the fallback entity
/// only applies when the text carries no clause. Blank fallbacks count as
/// absent, so a built query never holds a blank entity name.
fn resolve_entity(explicit: Option<String>, fallback: Option<&str>) -> QueryResult<String> {
    if let Some(name) = explicit {
        return Ok(name);
    }

    match fallback {
        Some(name) if !name.trim().is_empty() => Ok(name.to_string()),
        _ => Err(QueryError::MissingEntityError(
            "query has no target clause and no fallback entity was supplied".to_string(),
        )),
    }
}
