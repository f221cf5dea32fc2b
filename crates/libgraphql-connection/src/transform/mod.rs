mod connection_transform_error;
mod connection_transformer;
mod transformed_schema;

pub use connection_transform_error::ConnectionTransformError;
pub use connection_transformer::ConnectionTransformer;
pub use connection_transformer::transform_str;
pub use transformed_schema::TransformedSchema;
