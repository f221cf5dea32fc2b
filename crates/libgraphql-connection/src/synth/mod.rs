mod pagination_types;
mod type_synthesizer;

pub use pagination_types::connection_type_name;
pub use pagination_types::edge_type_name;
pub use pagination_types::PAGE_INFO_TYPE_NAME;
pub use type_synthesizer::synthesize_types;
