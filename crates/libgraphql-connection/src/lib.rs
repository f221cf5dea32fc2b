//! Relay-style connection generation for GraphQL schema documents.
//!
//! Fields marked with a connection directive (`@connection` by default) are
//! rewritten to return a generated `{Type}Connection` type and gain the
//! standard `after`/`first`/`before`/`last` pagination arguments. The
//! `PageInfo`, `{Type}Edge`, and `{Type}Connection` types are generated once
//! per schema (per base type for edges and connections), and everything else
//! in the schema is left as it was.
//!
//! ```
//! use libgraphql_connection::ConnectionConfig;
//!
//! let transformed = libgraphql_connection::transform_str(
//!     ConnectionConfig::default(),
//!     "type User { userId: Int, posts: [Post!]! @connection }\n\
//!      type Post { postId: Int }\n\
//!      type Query { user: User }",
//! )?;
//!
//! assert_eq!(
//!     transformed.rewritten_fields().iter().map(|f| f.to_string()).collect::<Vec<_>>(),
//!     vec!["User.posts".to_string()],
//! );
//! # Ok::<(), libgraphql_connection::ConnectionTransformError>(())
//! ```

pub mod ast;
mod connection_config;
mod directive_annotation;
pub mod file_reader;
pub mod loc;
pub mod rewrite;
pub mod scan;
mod schema_document;
pub mod synth;
mod transform;
mod type_ref;
pub mod validate;

pub use connection_config::CacheHintConfig;
pub use connection_config::ConnectionConfig;
pub use connection_config::DEFAULT_CACHE_HINT_ARGUMENT_NAME;
pub use connection_config::DEFAULT_CACHE_HINT_DIRECTIVE_NAME;
pub use connection_config::DEFAULT_CONNECTION_DIRECTIVE_NAME;
pub use rewrite::connection_directive_declaration;
pub use rewrite::default_connection_directive_declaration;
pub use schema_document::DefinitionOrigin;
pub use schema_document::SchemaDocument;
pub use schema_document::SourcedDefinition;
pub use transform::ConnectionTransformError;
pub use transform::ConnectionTransformer;
pub use transform::TransformedSchema;
pub use transform::transform_str;
pub use type_ref::base_type_name;

#[cfg(test)]
mod tests;
