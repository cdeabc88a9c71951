//! Entry points: one provider per statement form.
//!
//! Providers own the enum registry and turn `(text, fallback entity)` pairs
//! into immutable query records. An explicit FROM/UPDATE target in the text
//! always wins over the fallback; the fallback only applies when the text
//! carries no target clause at all.

use std::sync::Arc;

use crate::ast::{DeleteQuery, SelectQuery, UpdateQuery};
use crate::error::QueryResult;
use crate::parser::Parser;
use crate::registry::EnumRegistry;

/// Parses SELECT statements.
pub struct SelectProvider {
    registry: Arc<EnumRegistry>,
}

impl SelectProvider {
    pub fn new(registry: Arc<EnumRegistry>) -> Self {
        Self { registry }
    }

    pub fn parse(&self, input: &str, entity: Option<&str>) -> QueryResult<SelectQuery> {
        let mut parser = Parser::new(input, &self.registry)?;
        let query = parser.parse_select(entity)?;
        tracing::debug!("parsed select query on entity '{}'", query.entity);
        Ok(query)
    }
}

/// Parses DELETE statements.
pub struct DeleteProvider {
    registry: Arc<EnumRegistry>,
}

impl DeleteProvider {
    pub fn new(registry: Arc<EnumRegistry>) -> Self {
        Self { registry }
    }

    pub fn parse(&self, input: &str, entity: Option<&str>) -> QueryResult<DeleteQuery> {
        let mut parser = Parser::new(input, &self.registry)?;
        let query = parser.parse_delete(entity)?;
        tracing::debug!("parsed delete query on entity '{}'", query.entity);
        Ok(query)
    }
}

/// Parses UPDATE statements.
pub struct UpdateProvider {
    registry: Arc<EnumRegistry>,
}

impl UpdateProvider {
    pub fn new(registry: Arc<EnumRegistry>) -> Self {
        Self { registry }
    }

    pub fn parse(&self, input: &str, entity: Option<&str>) -> QueryResult<UpdateQuery> {
        let mut parser = Parser::new(input, &self.registry)?;
        let query = parser.parse_update(entity)?;
        tracing::debug!(
            "parsed update query on entity '{}' ({} set items)",
            query.entity,
            query.set_items.len()
        );
        Ok(query)
    }
}
