use crate::ast;
use crate::directive_annotation;
use crate::rewrite::marker_directive::marker_directive_definition;
use crate::rewrite::pagination_arguments;
use crate::scan::ConnectionScan;
use crate::scan::FieldCoordinate;
use crate::schema_document;
use crate::schema_document::SchemaDocument;
use crate::schema_document::SourcedDefinition;
use crate::synth;
use crate::type_ref;
use crate::ConnectionConfig;
use crate::ConnectionTransformError;

type Result<T> = std::result::Result<T, ConnectionTransformError>;

/// Assembles the output document: synthesized types first, then the marker
/// directive's declaration (only when the input didn't declare it), then every
/// original definition in its original order.
pub fn merge_synthesized_types(
    original: SchemaDocument,
    synthesized: Vec<ast::schema::TypeDefinition>,
    config: &ConnectionConfig,
) -> SchemaDocument {
    let mut definitions = Vec::with_capacity(
        synthesized.len() + original.definitions.len() + 1,
    );

    definitions.extend(synthesized.into_iter().map(|type_def| {
        SourcedDefinition::synthesized(ast::schema::Definition::TypeDefinition(type_def))
    }));

    if !original.defines_directive(config.directive_name()) {
        log::debug!(
            "Adding a declaration for the `@{}` directive.",
            config.directive_name(),
        );
        definitions.push(SourcedDefinition::synthesized(
            ast::schema::Definition::DirectiveDefinition(
                marker_directive_definition(config.directive_name()),
            ),
        ));
    }

    definitions.extend(original.definitions);
    SchemaDocument { definitions }
}

/// Rewrites every field the scan marked: its type becomes the base type's
/// `Connection` type, the four pagination arguments are appended, and the
/// marker directive is removed. Returns the rewritten fields in document
/// order.
pub fn rewrite_marked_fields(
    document: &mut SchemaDocument,
    scan: &ConnectionScan,
    config: &ConnectionConfig,
) -> Result<Vec<FieldCoordinate>> {
    let directive_name = config.directive_name();
    let mut rewritten = vec![];

    for SourcedDefinition { def, origin } in document.definitions.iter_mut() {
        let Some((parent_type_name, fields)) = schema_document::output_fields_mut(def) else {
            continue;
        };
        let parent_type_name = parent_type_name.to_string();

        for field in fields.iter_mut() {
            if !directive_annotation::has_directive(&field.directives, directive_name) {
                continue;
            }

            let coordinate = FieldCoordinate::new(
                parent_type_name.as_str(),
                field.name.as_str(),
            );
            let Some(base_type_name) = scan.marked_base_type(&coordinate) else {
                continue;
            };

            if let Some(conflicting_arg) = field.arguments.iter()
                .find(|arg| pagination_arguments::is_pagination_argument(&arg.name)) {
                return Err(ConnectionTransformError::PaginationArgumentConflict {
                    argument_name: conflicting_arg.name.to_string(),
                    directive_name: directive_name.to_string(),
                    field: coordinate,
                    location: origin.location_at(conflicting_arg.position),
                });
            }

            rewrite_field(field, base_type_name, directive_name);
            log::trace!("Rewrote `{coordinate}` as a connection field.");
            rewritten.push(coordinate);
        }
    }

    log::debug!("Rewrote {} connection fields.", rewritten.len());
    Ok(rewritten)
}

fn rewrite_field(
    field: &mut ast::schema::Field,
    base_type_name: &str,
    directive_name: &str,
) {
    field.field_type = type_ref::named(synth::connection_type_name(base_type_name));
    field.arguments.extend(pagination_arguments::pagination_arguments());
    field.directives.retain(|directive| directive.name != directive_name);
}
