use crate::ast;
use crate::connection_config::DEFAULT_CONNECTION_DIRECTIVE_NAME;

/// `directive @{directive_name} on FIELD_DEFINITION`
pub(crate) fn marker_directive_definition(
    directive_name: &str,
) -> ast::schema::DirectiveDefinition {
    ast::schema::DirectiveDefinition {
        position: ast::SYNTHESIZED_POS,
        description: None,
        name: directive_name.to_string(),
        arguments: vec![],
        repeatable: false,
        locations: vec![ast::schema::DirectiveLocation::FieldDefinition],
    }
}

/// SDL declaring the marker directive, for inclusion in schemas that are
/// passed through the transform.
///
/// ```
/// assert_eq!(
///     libgraphql_connection::connection_directive_declaration("paginated"),
///     "directive @paginated on FIELD_DEFINITION",
/// );
/// ```
pub fn connection_directive_declaration(directive_name: &str) -> String {
    let doc = ast::schema::Document {
        definitions: vec![ast::schema::Definition::DirectiveDefinition(
            marker_directive_definition(directive_name),
        )],
    };
    doc.to_string().trim_end().to_string()
}

/// [connection_directive_declaration] for the default `@connection` name.
pub fn default_connection_directive_declaration() -> String {
    connection_directive_declaration(DEFAULT_CONNECTION_DIRECTIVE_NAME)
}
