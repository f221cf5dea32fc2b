use crate::file_reader;
use crate::loc;
use crate::scan::FieldCoordinate;
use crate::validate::SchemaValidationError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConnectionTransformError {
    #[error(
        "The `{synthesized_type_name}` type generated for connections of \
        `{base_type_name}` conflicts with an existing type of the same name \
        (defined at {existing_location})"
    )]
    NameCollision {
        base_type_name: String,
        existing_location: loc::SchemaDefLocation,
        synthesized_type_name: String,
    },

    #[error(
        "`{field}` is marked with `@{directive_name}` but already defines an \
        `{argument_name}` argument (at {location}), which is one of the \
        pagination arguments added to connection fields"
    )]
    PaginationArgumentConflict {
        argument_name: String,
        directive_name: String,
        field: FieldCoordinate,
        location: loc::SchemaDefLocation,
    },

    #[error("Error parsing schema document {file:?}: {err}")]
    ParseError {
        file: PathBuf,
        err: String,
    },

    #[error("Failure while trying to read a schema file from disk: {0}")]
    SchemaFileReadError(#[source] Box<file_reader::ReadSchemaFileError>),

    #[error(
        "Encountered the following structural errors in the transformed \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    ValidationErrors {
        errors: Vec<SchemaValidationError>,
    },
}
