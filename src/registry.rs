//! Enum registry backing dotted-path constant resolution.
//!
//! Query text may carry enum literals such as `orders.Status.OPEN`. There is
//! no runtime type loading to lean on, so callers register their enum types
//! up front; parsing then resolves dotted paths against the registered set.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::ast::EnumLiteral;
use crate::error::{QueryError, QueryResult};

/// Thread-safe registry of enum types keyed by fully-qualified name.
///
/// Registration is idempotent (re-registering a type replaces its constants)
/// and lookups take a shared read lock, so concurrent parses are safe. The
/// map doubles as the resolution cache: lookups are O(1) and side-effect
/// free.
#[derive(Default)]
pub struct EnumRegistry {
    types: RwLock<HashMap<String, Vec<String>>>,
}

impl EnumRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an enum type under its fully-qualified name together with
    /// the names of its constants.
    pub fn register<I, S>(&self, enum_type: &str, constants: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let constants: Vec<String> = constants.into_iter().map(Into::into).collect();
        self.types
            .write()
            .unwrap()
            .insert(enum_type.to_string(), constants);
    }

    /// Resolve a dotted `path.to.EnumType.CONSTANT` literal.
    ///
    /// The constant name is everything after the last `.`; the rest is the
    /// type's fully-qualified name. Unknown types and unknown constants both
    /// fail with an error naming the full input path.
    pub fn resolve(&self, path: &str) -> QueryResult<EnumLiteral> {
        let (enum_type, constant) = path.rsplit_once('.').ok_or_else(|| {
            QueryError::EnumResolutionError(format!("not a dotted enum path: '{}'", path))
        })?;

        let types = self.types.read().unwrap();
        let constants = types.get(enum_type).ok_or_else(|| {
            QueryError::EnumResolutionError(format!(
                "unknown enum type '{}' in '{}'",
                enum_type, path
            ))
        })?;

        if !constants.iter().any(|c| c == constant) {
            return Err(QueryError::EnumResolutionError(format!(
                "enum type '{}' has no constant '{}' in '{}'",
                enum_type, constant, path
            )));
        }

        Ok(EnumLiteral {
            enum_type: enum_type.to_string(),
            constant: constant.to_string(),
        })
    }
}
