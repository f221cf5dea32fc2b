use std::fmt::Write;

pub const SMALL_SCHEMA: &str =
    include_str!("small_schema.graphql");

/// Builds a schema with `num_types` entity types. Every entity has a marked
/// field for each of the next `connections_per_type` entities (wrapping
/// around), so the number of distinct base types grows with `num_types`
/// while every base type is referenced by several marked fields.
pub fn synthetic_schema(
    num_types: usize,
    connections_per_type: usize,
    with_cache_hints: bool,
) -> String {
    let mut sdl = String::new();

    sdl.push_str("type Query {\n");
    for idx in 0..num_types {
        let _ = writeln!(sdl, "  entity{idx}(id: ID!): Entity{idx}");
    }
    sdl.push_str("}\n\n");

    for idx in 0..num_types {
        if with_cache_hints {
            let _ = writeln!(sdl, "type Entity{idx} @cacheControl(maxAge: {}) {{", idx % 60);
        } else {
            let _ = writeln!(sdl, "type Entity{idx} {{");
        }
        sdl.push_str("  id: ID!\n  name: String\n");
        for offset in 1..=connections_per_type {
            let target = (idx + offset) % num_types;
            let _ = writeln!(sdl, "  related{target}: [Entity{target}!]! @connection");
        }
        sdl.push_str("}\n\n");
    }

    sdl
}
