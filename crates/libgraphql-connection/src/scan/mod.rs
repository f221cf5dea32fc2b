mod connection_scan;
mod directive_scanner;
mod field_coordinate;

pub use connection_scan::ConnectionScan;
pub use connection_scan::ConnectionSpec;
pub use directive_scanner::scan_schema;
pub use field_coordinate::FieldCoordinate;
