use crate::ast;
use crate::directive_annotation;
use crate::scan::ConnectionScan;
use crate::synth::pagination_types;
use crate::ConnectionConfig;
use crate::ConnectionTransformError;

type Result<T> = std::result::Result<T, ConnectionTransformError>;

/// Builds the `PageInfo`, `*Edge`, and `*Connection` type definitions a scan
/// calls for.
///
/// `PageInfo` comes first (and is skipped when the schema already defines
/// one), followed by one `Edge`/`Connection` pair per base type in the order
/// the scan first saw each base type. Fails if a generated `Edge` or
/// `Connection` name is already taken by a type in the schema.
pub fn synthesize_types(
    scan: &ConnectionScan,
    config: &ConnectionConfig,
) -> Result<Vec<ast::schema::TypeDefinition>> {
    let mut synthesized = vec![];

    if scan.has_type(pagination_types::PAGE_INFO_TYPE_NAME) {
        log::debug!(
            "Using the schema's own `{}` type.",
            pagination_types::PAGE_INFO_TYPE_NAME,
        );
    } else {
        synthesized.push(pagination_types::page_info_type());
    }

    for (base_type_name, spec) in scan.connection_specs() {
        for synthesized_type_name in [
            pagination_types::edge_type_name(base_type_name),
            pagination_types::connection_type_name(base_type_name),
        ] {
            if let Some(existing_location) = scan.existing_type_location(&synthesized_type_name) {
                return Err(ConnectionTransformError::NameCollision {
                    base_type_name: base_type_name.to_string(),
                    existing_location: existing_location.to_owned(),
                    synthesized_type_name,
                });
            }
        }

        let cache_hint = config.cache_hints()
            .zip(spec.cache_hint)
            .map(|(cache_hints, max_age)| directive_annotation::int_directive(
                cache_hints.directive_name(),
                cache_hints.argument_name(),
                max_age,
            ));

        log::trace!(
            "Synthesizing connection types for `{base_type_name}` (cache hint: \
            {:?}).",
            spec.cache_hint,
        );
        synthesized.push(pagination_types::edge_type(base_type_name, cache_hint.as_ref()));
        synthesized.push(pagination_types::connection_type(base_type_name, cache_hint.as_ref()));
    }

    Ok(synthesized)
}
