use crate::ast;
use crate::loc;
use crate::schema_document::SchemaDocument;
use crate::schema_document::SourcedDefinition;
use crate::type_ref;
use crate::validate::SchemaValidationError;
use std::collections::HashMap;
use std::collections::HashSet;

/// Checks an assembled schema for structural problems: duplicate type,
/// directive, field, and argument definitions, extensions of undefined types,
/// and references to undefined types.
///
/// Every problem is collected; validation never stops at the first error.
pub struct SchemaValidator<'a> {
    defined_type_names: HashSet<&'a str>,
    document: &'a SchemaDocument,
    errors: Vec<SchemaValidationError>,
    field_locations: HashMap<(&'a str, &'a str), loc::SchemaDefLocation>,
}
impl<'a> SchemaValidator<'a> {
    pub fn new(document: &'a SchemaDocument) -> Self {
        Self {
            defined_type_names: HashSet::new(),
            document,
            errors: vec![],
            field_locations: HashMap::new(),
        }
    }

    pub fn validate(mut self) -> Vec<SchemaValidationError> {
        self.collect_definitions();

        let document = self.document;
        for sourced in document.definitions() {
            self.validate_definition(sourced);
        }

        log::debug!(
            "Validated {} definitions: found {} errors.",
            document.definitions().len(),
            self.errors.len(),
        );
        self.errors
    }

    fn collect_definitions(&mut self) {
        let mut type_locations: HashMap<&'a str, loc::SchemaDefLocation> =
            HashMap::new();
        let mut directive_locations: HashMap<&'a str, loc::SchemaDefLocation> =
            HashMap::new();

        let document = self.document;
        for sourced in document.definitions() {
            match &sourced.def {
                ast::schema::Definition::TypeDefinition(_) => {
                    let Some(type_name) = sourced.type_name() else { continue };
                    let location = sourced.location();
                    if let Some(prev_location) = type_locations.get(type_name) {
                        self.errors.push(SchemaValidationError::DuplicateTypeDefinition {
                            type_name: type_name.to_string(),
                            def1: prev_location.to_owned(),
                            def2: location,
                        });
                    } else {
                        type_locations.insert(type_name, location);
                    }
                    self.defined_type_names.insert(type_name);
                },

                ast::schema::Definition::DirectiveDefinition(directive_def) => {
                    let location = sourced.location();
                    let directive_name = directive_def.name.as_str();
                    if let Some(prev_location) = directive_locations.get(directive_name) {
                        self.errors.push(SchemaValidationError::DuplicateDirectiveDefinition {
                            directive_name: directive_name.to_string(),
                            def1: prev_location.to_owned(),
                            def2: location,
                        });
                    } else {
                        directive_locations.insert(directive_name, location);
                    }
                },

                ast::schema::Definition::SchemaDefinition(_)
                | ast::schema::Definition::TypeExtension(_) => (),
            }
        }
    }

    fn validate_definition(&mut self, sourced: &'a SourcedDefinition) {
        use ast::schema::Definition;
        match &sourced.def {
            Definition::SchemaDefinition(schema_def) => {
                let root_types = [
                    ("schema.query", &schema_def.query),
                    ("schema.mutation", &schema_def.mutation),
                    ("schema.subscription", &schema_def.subscription),
                ];
                for (referenced_by, type_name) in root_types {
                    if let Some(type_name) = type_name {
                        self.check_type_name(
                            type_name,
                            referenced_by,
                            sourced.location_at(schema_def.position),
                        );
                    }
                }
            },

            Definition::DirectiveDefinition(directive_def) => {
                let referenced_by = format!("@{}", directive_def.name);
                self.check_input_values(
                    sourced,
                    referenced_by.as_str(),
                    &directive_def.arguments,
                );
            },

            Definition::TypeDefinition(type_def) =>
                self.validate_type_definition(sourced, type_def),

            Definition::TypeExtension(type_ext) => {
                if let Some(type_name) = sourced.type_name()
                    && !self.defined_type_names.contains(type_name) {
                    self.errors.push(SchemaValidationError::ExtensionOfUndefinedType {
                        type_name: type_name.to_string(),
                        extension_location: sourced.location(),
                    });
                }
                self.validate_type_extension(sourced, type_ext);
            },
        }
    }

    fn validate_type_definition(
        &mut self,
        sourced: &'a SourcedDefinition,
        type_def: &'a ast::schema::TypeDefinition,
    ) {
        use ast::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(_) | TypeDefinition::Scalar(_) => (),

            TypeDefinition::InputObject(t) =>
                self.check_input_fields(sourced, t.name.as_str(), &t.fields),

            TypeDefinition::Interface(t) => {
                self.check_interfaces(sourced, t.name.as_str(), &t.implements_interfaces);
                self.check_output_fields(sourced, t.name.as_str(), &t.fields);
            },

            TypeDefinition::Object(t) => {
                self.check_interfaces(sourced, t.name.as_str(), &t.implements_interfaces);
                self.check_output_fields(sourced, t.name.as_str(), &t.fields);
            },

            TypeDefinition::Union(t) =>
                self.check_union_members(sourced, t.name.as_str(), &t.types),
        }
    }

    fn validate_type_extension(
        &mut self,
        sourced: &'a SourcedDefinition,
        type_ext: &'a ast::schema::TypeExtension,
    ) {
        use ast::schema::TypeExtension;
        match type_ext {
            TypeExtension::Enum(_) | TypeExtension::Scalar(_) => (),

            TypeExtension::InputObject(t) =>
                self.check_input_fields(sourced, t.name.as_str(), &t.fields),

            TypeExtension::Interface(t) => {
                self.check_interfaces(sourced, t.name.as_str(), &t.implements_interfaces);
                self.check_output_fields(sourced, t.name.as_str(), &t.fields);
            },

            TypeExtension::Object(t) => {
                self.check_interfaces(sourced, t.name.as_str(), &t.implements_interfaces);
                self.check_output_fields(sourced, t.name.as_str(), &t.fields);
            },

            TypeExtension::Union(t) =>
                self.check_union_members(sourced, t.name.as_str(), &t.types),
        }
    }

    fn check_output_fields(
        &mut self,
        sourced: &SourcedDefinition,
        type_name: &'a str,
        fields: &'a [ast::schema::Field],
    ) {
        for field in fields {
            let location = sourced.location_at(field.position);
            self.check_field_name(type_name, field.name.as_str(), location.clone());

            let coordinate = format!("{type_name}.{}", field.name);
            self.check_type_name(
                type_ref::base_type_name(&field.field_type),
                coordinate.as_str(),
                location,
            );

            let mut seen_arg_names = HashSet::new();
            for arg in &field.arguments {
                if !seen_arg_names.insert(arg.name.as_str()) {
                    self.errors.push(SchemaValidationError::DuplicateArgumentDefinition {
                        argument_name: arg.name.to_string(),
                        location: sourced.location_at(arg.position),
                        parent_field_name: field.name.to_string(),
                        type_name: type_name.to_string(),
                    });
                }
            }
            self.check_input_values(sourced, coordinate.as_str(), &field.arguments);
        }
    }

    fn check_input_fields(
        &mut self,
        sourced: &SourcedDefinition,
        type_name: &'a str,
        fields: &'a [ast::schema::InputValue],
    ) {
        for field in fields {
            self.check_field_name(
                type_name,
                field.name.as_str(),
                sourced.location_at(field.position),
            );
        }
        self.check_input_values(sourced, type_name, fields);
    }

    fn check_input_values(
        &mut self,
        sourced: &SourcedDefinition,
        referenced_by: &str,
        input_values: &[ast::schema::InputValue],
    ) {
        for input_value in input_values {
            self.check_type_name(
                type_ref::base_type_name(&input_value.value_type),
                format!("{referenced_by}({}:)", input_value.name).as_str(),
                sourced.location_at(input_value.position),
            );
        }
    }

    fn check_interfaces(
        &mut self,
        sourced: &SourcedDefinition,
        type_name: &str,
        interface_names: &[String],
    ) {
        for interface_name in interface_names {
            self.check_type_name(
                interface_name,
                type_name,
                sourced.location(),
            );
        }
    }

    fn check_union_members(
        &mut self,
        sourced: &SourcedDefinition,
        type_name: &str,
        member_names: &[String],
    ) {
        for member_name in member_names {
            self.check_type_name(member_name, type_name, sourced.location());
        }
    }

    fn check_field_name(
        &mut self,
        type_name: &'a str,
        field_name: &'a str,
        location: loc::SchemaDefLocation,
    ) {
        if let Some(prev_location) = self.field_locations.get(&(type_name, field_name)) {
            self.errors.push(SchemaValidationError::DuplicateFieldDefinition {
                field_name: field_name.to_string(),
                type_name: type_name.to_string(),
                def1: prev_location.to_owned(),
                def2: location,
            });
        } else {
            self.field_locations.insert((type_name, field_name), location);
        }
    }

    fn check_type_name(
        &mut self,
        type_name: &str,
        referenced_by: &str,
        ref_location: loc::SchemaDefLocation,
    ) {
        if type_ref::is_builtin_scalar(type_name)
            || self.defined_type_names.contains(type_name) {
            return;
        }

        self.errors.push(SchemaValidationError::UndefinedTypeName {
            referenced_by: referenced_by.to_string(),
            ref_location,
            undefined_type_name: type_name.to_string(),
        });
    }
}
