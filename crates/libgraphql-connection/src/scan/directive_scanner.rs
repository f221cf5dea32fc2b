use crate::ast;
use crate::directive_annotation;
use crate::loc;
use crate::scan::ConnectionScan;
use crate::scan::FieldCoordinate;
use crate::schema_document::SchemaDocument;
use crate::schema_document::SourcedDefinition;
use crate::type_ref;
use crate::validate::SchemaValidationError;
use crate::CacheHintConfig;
use crate::ConnectionConfig;
use indexmap::IndexMap;

/// Walks every named type and every object/interface field of `document`
/// once, recording marked fields, existing type names, and (when enabled)
/// aggregated cache hints.
pub fn scan_schema(
    document: &SchemaDocument,
    config: &ConnectionConfig,
) -> ConnectionScan {
    let mut scan = ConnectionScan::default();
    let mut type_def_locations: IndexMap<&str, loc::SchemaDefLocation> =
        IndexMap::new();

    for sourced in document.definitions() {
        let Some(type_name) = sourced.type_name() else {
            continue;
        };

        if !sourced.is_type_extension() {
            let def_location = sourced.location();
            if let Some(prev_location) = type_def_locations.get(type_name) {
                log::trace!(
                    "Found a duplicate definition of the `{type_name}` type \
                    at {def_location}.",
                );
                scan.duplicate_type_definitions.push(
                    SchemaValidationError::DuplicateTypeDefinition {
                        type_name: type_name.to_string(),
                        def1: prev_location.to_owned(),
                        def2: def_location,
                    }
                );
            } else {
                type_def_locations.insert(type_name, def_location);
            }
        }

        if !scan.existing_type_names.contains_key(type_name) {
            scan.existing_type_names.insert(
                type_name.to_string(),
                sourced.location(),
            );
        }

        if let Some(cache_hints) = config.cache_hints() {
            visit_type_cache_hint(&mut scan, cache_hints, sourced, type_name);
        }

        if let Some((parent_type_name, fields)) = sourced.output_fields() {
            for field in fields {
                visit_field(&mut scan, config, parent_type_name, field);
            }
        }
    }

    log::debug!(
        "Scanned {} types: found {} fields marked with `@{}` across {} base \
        types.",
        scan.existing_type_names.len(),
        scan.marked_fields.len(),
        config.directive_name(),
        scan.referenced_base_types.len(),
    );

    scan
}

fn visit_type_cache_hint(
    scan: &mut ConnectionScan,
    cache_hints: &CacheHintConfig,
    sourced: &SourcedDefinition,
    type_name: &str,
) {
    let max_age = directive_annotation::find_directive(
        sourced.type_directives(),
        cache_hints.directive_name(),
    ).and_then(|directive| directive_annotation::int_argument(
        directive,
        cache_hints.argument_name(),
    ));

    if let Some(max_age) = max_age {
        log::trace!("Recording a cache hint of {max_age} from the `{type_name}` type.");
        scan.record_cache_hint(type_name, max_age);
    }
}

fn visit_field(
    scan: &mut ConnectionScan,
    config: &ConnectionConfig,
    parent_type_name: &str,
    field: &ast::schema::Field,
) {
    let base_type_name = type_ref::base_type_name(&field.field_type);

    if directive_annotation::has_directive(&field.directives, config.directive_name()) {
        log::trace!(
            "`{parent_type_name}.{}` is marked as a connection of \
            `{base_type_name}`.",
            field.name,
        );
        scan.record_marked_field(
            FieldCoordinate::new(parent_type_name, field.name.as_str()),
            base_type_name,
        );
    }

    // A hint on any field returning the base type raises that base type's
    // aggregate, whether or not the field is marked.
    if let Some(cache_hints) = config.cache_hints() {
        let max_age = directive_annotation::find_directive(
            &field.directives,
            cache_hints.directive_name(),
        ).and_then(|directive| directive_annotation::int_argument(
            directive,
            cache_hints.argument_name(),
        ));

        if let Some(max_age) = max_age {
            log::trace!(
                "Recording a cache hint of {max_age} for `{base_type_name}` \
                from `{parent_type_name}.{}`.",
                field.name,
            );
            scan.record_cache_hint(base_type_name, max_age);
        }
    }
}
