mod schema_validation_error;
mod schema_validator;

pub use schema_validation_error::SchemaValidationError;
pub use schema_validator::SchemaValidator;
