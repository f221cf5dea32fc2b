use crate::loc;
use thiserror::Error;

/// A single structural problem found in an assembled schema.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaValidationError {
    #[error(
        "The `{argument_name}` argument is defined more than once on \
        `{type_name}.{parent_field_name}` (at {location})"
    )]
    DuplicateArgumentDefinition {
        argument_name: String,
        location: loc::SchemaDefLocation,
        parent_field_name: String,
        type_name: String,
    },

    #[error(
        "Multiple directives were defined with the name `@{directive_name}` \
        (at {def1} and {def2})"
    )]
    DuplicateDirectiveDefinition {
        directive_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error(
        "Multiple fields named `{field_name}` were defined on the \
        `{type_name}` type (at {def1} and {def2})"
    )]
    DuplicateFieldDefinition {
        field_name: String,
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error(
        "Multiple GraphQL types with the name `{type_name}` were defined (at \
        {def1} and {def2})"
    )]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SchemaDefLocation,
        def2: loc::SchemaDefLocation,
    },

    #[error(
        "Attempted to extend the `{type_name}` type, but no type with that \
        name is defined (at {extension_location})"
    )]
    ExtensionOfUndefinedType {
        type_name: String,
        extension_location: loc::SchemaDefLocation,
    },

    #[error(
        "There is no type defined with the name `{undefined_type_name}` \
        (referenced by {referenced_by} at {ref_location})"
    )]
    UndefinedTypeName {
        referenced_by: String,
        ref_location: loc::SchemaDefLocation,
        undefined_type_name: String,
    },
}
