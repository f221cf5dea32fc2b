use crate::loc;
use crate::scan::FieldCoordinate;
use crate::validate::SchemaValidationError;
use indexmap::IndexMap;
use indexmap::IndexSet;

/// What the transform needs to know about one base type that a marked field
/// returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionSpec {
    /// Highest cache-hint max-age aggregated for this base type. Always
    /// `None` when cache-hint propagation is disabled.
    pub cache_hint: Option<i32>,
}

/// Everything the directive scanner learned from one pass over a schema.
///
/// Built fresh for each transform and handed explicitly to the synthesizer
/// and rewriter.
#[derive(Clone, Debug, Default)]
pub struct ConnectionScan {
    pub(crate) cache_hint_by_base_type: IndexMap<String, i32>,
    pub(crate) duplicate_type_definitions: Vec<SchemaValidationError>,
    pub(crate) existing_type_names: IndexMap<String, loc::SchemaDefLocation>,
    pub(crate) marked_fields: IndexMap<FieldCoordinate, String>,
    pub(crate) referenced_base_types: IndexSet<String>,
}
impl ConnectionScan {
    /// Highest max-age recorded for `base_type_name`, if any.
    pub fn cache_hint(&self, base_type_name: &str) -> Option<i32> {
        self.cache_hint_by_base_type.get(base_type_name).copied()
    }

    /// One [ConnectionSpec] per base type that needs an `Edge`/`Connection`
    /// pair, in the order the base types were first seen.
    pub fn connection_specs(&self) -> impl Iterator<Item = (&str, ConnectionSpec)> {
        self.referenced_base_types.iter().map(|base_type_name| (
            base_type_name.as_str(),
            ConnectionSpec {
                cache_hint: self.cache_hint(base_type_name),
            },
        ))
    }

    pub fn duplicate_type_definitions(&self) -> &[SchemaValidationError] {
        &self.duplicate_type_definitions
    }

    /// Location of the first definition (or extension) of `type_name`.
    pub fn existing_type_location(
        &self,
        type_name: &str,
    ) -> Option<&loc::SchemaDefLocation> {
        self.existing_type_names.get(type_name)
    }

    pub fn existing_type_names(&self) -> impl Iterator<Item = &str> {
        self.existing_type_names.keys().map(|s| s.as_str())
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.existing_type_names.contains_key(type_name)
    }

    /// Base type name of a marked field, or `None` if the field isn't
    /// marked.
    pub fn marked_base_type(&self, coordinate: &FieldCoordinate) -> Option<&str> {
        self.marked_fields.get(coordinate).map(|s| s.as_str())
    }

    pub fn marked_fields(&self) -> &IndexMap<FieldCoordinate, String> {
        &self.marked_fields
    }

    pub fn referenced_base_types(&self) -> &IndexSet<String> {
        &self.referenced_base_types
    }

    pub(crate) fn record_cache_hint(&mut self, base_type_name: &str, max_age: i32) {
        match self.cache_hint_by_base_type.get_mut(base_type_name) {
            Some(current) if *current >= max_age => (),
            Some(current) => *current = max_age,
            None => {
                self.cache_hint_by_base_type.insert(base_type_name.to_string(), max_age);
            },
        }
    }

    pub(crate) fn record_marked_field(
        &mut self,
        coordinate: FieldCoordinate,
        base_type_name: &str,
    ) {
        self.referenced_base_types.insert(base_type_name.to_string());
        self.marked_fields.insert(coordinate, base_type_name.to_string());
    }
}
