mod marker_directive;
mod pagination_arguments;
mod schema_rewriter;

pub use marker_directive::connection_directive_declaration;
pub use marker_directive::default_connection_directive_declaration;
pub use pagination_arguments::is_pagination_argument;
pub use pagination_arguments::PAGINATION_ARGUMENTS;
pub use schema_rewriter::merge_synthesized_types;
pub use schema_rewriter::rewrite_marked_fields;

#[cfg(test)]
mod tests;
