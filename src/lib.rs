//! EQL Core - storage-independent entity query language parser.
//!
//! This crate parses a small SQL-like query language (SELECT, DELETE and
//! UPDATE forms) into typed, immutable query records that storage adapters
//! can translate into native queries against arbitrary backing stores. It
//! performs no execution and has no storage engine dependencies.
//!
//! # Main Components
//!
//! - **Lexer**: Turns query text into tokens
//! - **Parser**: Recursive-descent parser producing the query AST
//! - **Providers**: Entry points for SELECT / DELETE / UPDATE statements
//! - **EnumRegistry**: Resolves dotted enum constant paths in literals
//!
//! # Example
//!
//! ```rust
//! use eql_core::{EnumRegistry, SelectProvider};
//! use std::sync::Arc;
//!
//! let registry = Arc::new(EnumRegistry::new());
//! let provider = SelectProvider::new(registry);
//!
//! let query = provider
//!     .parse("SELECT name, age FROM users WHERE age > 18 ORDER BY name ASC", None)
//!     .unwrap();
//! assert_eq!(query.entity, "users");
//! assert_eq!(query.fields, vec!["name".to_string(), "age".to_string()]);
//! assert!(query.where_clause.is_some());
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod provider;
pub mod quote;
pub mod registry;

// Re-export main types for convenience
pub use ast::{
    Condition, DeleteQuery, EnumLiteral, NumberValue, QueryCondition, QueryValue, SelectQuery,
    Sort, UpdateQuery, Where,
};
pub use error::{QueryError, QueryResult};
pub use lexer::{Lexer, Token};
pub use parser::Parser;
pub use provider::{DeleteProvider, SelectProvider, UpdateProvider};
pub use registry::EnumRegistry;
