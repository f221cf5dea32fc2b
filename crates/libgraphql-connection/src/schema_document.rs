use crate::ast;
use crate::loc;
use std::path::Path;
use std::path::PathBuf;

/// Where a top-level definition of a [SchemaDocument] came from.
#[derive(Clone, Debug, PartialEq)]
pub enum DefinitionOrigin {
    /// Parsed from a loaded schema source. Strings loaded without a file path
    /// are given a `str://N` path.
    Source(PathBuf),

    /// Generated by the connection transform.
    Synthesized,
}
impl DefinitionOrigin {
    pub(crate) fn location_at(&self, pos: ast::AstPos) -> loc::SchemaDefLocation {
        match self {
            Self::Source(file) => loc::FilePosition::from_pos(file, pos).into(),
            Self::Synthesized => loc::SchemaDefLocation::Synthesized,
        }
    }
}

/// A top-level schema definition along with the source it was loaded from.
#[derive(Clone, Debug, PartialEq)]
pub struct SourcedDefinition {
    pub(crate) def: ast::schema::Definition,
    pub(crate) origin: DefinitionOrigin,
}
impl SourcedDefinition {
    pub(crate) fn synthesized(def: ast::schema::Definition) -> Self {
        Self {
            def,
            origin: DefinitionOrigin::Synthesized,
        }
    }

    pub fn definition(&self) -> &ast::schema::Definition {
        &self.def
    }

    pub fn origin(&self) -> &DefinitionOrigin {
        &self.origin
    }

    /// Resolves a position inside this definition to a schema location.
    pub(crate) fn location_at(&self, pos: ast::AstPos) -> loc::SchemaDefLocation {
        self.origin.location_at(pos)
    }

    pub(crate) fn location(&self) -> loc::SchemaDefLocation {
        self.location_at(definition_position(&self.def))
    }

    /// The type name this definition declares or extends, if any.
    pub fn type_name(&self) -> Option<&str> {
        use ast::schema::Definition;
        match &self.def {
            Definition::TypeDefinition(type_def) =>
                Some(type_definition_name(type_def)),
            Definition::TypeExtension(type_ext) =>
                Some(type_extension_name(type_ext)),
            Definition::DirectiveDefinition(_)
            | Definition::SchemaDefinition(_) => None,
        }
    }

    pub(crate) fn is_type_extension(&self) -> bool {
        matches!(self.def, ast::schema::Definition::TypeExtension(_))
    }

    /// Directives applied to the type this definition declares or extends.
    pub(crate) fn type_directives(&self) -> &[ast::schema::Directive] {
        use ast::schema::Definition;
        use ast::schema::TypeDefinition;
        use ast::schema::TypeExtension;
        match &self.def {
            Definition::TypeDefinition(type_def) => match type_def {
                TypeDefinition::Enum(t) => &t.directives,
                TypeDefinition::InputObject(t) => &t.directives,
                TypeDefinition::Interface(t) => &t.directives,
                TypeDefinition::Object(t) => &t.directives,
                TypeDefinition::Scalar(t) => &t.directives,
                TypeDefinition::Union(t) => &t.directives,
            },
            Definition::TypeExtension(type_ext) => match type_ext {
                TypeExtension::Enum(t) => &t.directives,
                TypeExtension::InputObject(t) => &t.directives,
                TypeExtension::Interface(t) => &t.directives,
                TypeExtension::Object(t) => &t.directives,
                TypeExtension::Scalar(t) => &t.directives,
                TypeExtension::Union(t) => &t.directives,
            },
            Definition::DirectiveDefinition(_)
            | Definition::SchemaDefinition(_) => &[],
        }
    }

    /// The parent type name and fields of an object or interface type
    /// definition (or extension).
    pub(crate) fn output_fields(&self) -> Option<(&str, &[ast::schema::Field])> {
        use ast::schema::Definition;
        use ast::schema::TypeDefinition;
        use ast::schema::TypeExtension;
        match &self.def {
            Definition::TypeDefinition(TypeDefinition::Object(t)) =>
                Some((t.name.as_str(), &t.fields)),
            Definition::TypeDefinition(TypeDefinition::Interface(t)) =>
                Some((t.name.as_str(), &t.fields)),
            Definition::TypeExtension(TypeExtension::Object(t)) =>
                Some((t.name.as_str(), &t.fields)),
            Definition::TypeExtension(TypeExtension::Interface(t)) =>
                Some((t.name.as_str(), &t.fields)),
            _ => None,
        }
    }
}

/// An ordered collection of schema definitions, possibly spanning several
/// loaded sources.
///
/// Printing a `SchemaDocument` (via [Display](std::fmt::Display)) emits SDL
/// with `graphql_parser`'s printer, so two equal documents always print
/// identically.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SchemaDocument {
    pub(crate) definitions: Vec<SourcedDefinition>,
}
impl SchemaDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `content` and appends its definitions, attributing them to
    /// `file_path`.
    pub(crate) fn append_str(
        &mut self,
        file_path: &Path,
        content: &str,
    ) -> std::result::Result<usize, ast::schema::ParseError> {
        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)?
                .into_static();

        let num_defs = ast_doc.definitions.len();
        self.append_ast(file_path, ast_doc);
        Ok(num_defs)
    }

    pub(crate) fn append_ast(
        &mut self,
        file_path: &Path,
        ast_doc: ast::schema::Document,
    ) {
        self.definitions.extend(
            ast_doc.definitions.into_iter().map(|def| SourcedDefinition {
                def,
                origin: DefinitionOrigin::Source(file_path.to_path_buf()),
            })
        );
    }

    pub fn definitions(&self) -> &[SourcedDefinition] {
        &self.definitions
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Whether a directive definition with the given name exists.
    pub fn defines_directive(&self, directive_name: &str) -> bool {
        self.definitions.iter().any(|sourced| matches!(
            &sourced.def,
            ast::schema::Definition::DirectiveDefinition(def)
                if def.name == directive_name,
        ))
    }

    /// Finds the first type definition (not extension) with the given name.
    pub fn find_type_definition(
        &self,
        type_name: &str,
    ) -> Option<&ast::schema::TypeDefinition> {
        self.definitions.iter().find_map(|sourced| match &sourced.def {
            ast::schema::Definition::TypeDefinition(type_def)
                if type_definition_name(type_def) == type_name => Some(type_def),
            _ => None,
        })
    }

    /// Copies all definitions into a plain `graphql_parser` document.
    pub fn to_ast_document(&self) -> ast::schema::Document {
        ast::schema::Document {
            definitions: self.definitions.iter()
                .map(|sourced| sourced.def.clone())
                .collect(),
        }
    }

    pub fn into_ast_document(self) -> ast::schema::Document {
        ast::schema::Document {
            definitions: self.definitions.into_iter()
                .map(|sourced| sourced.def)
                .collect(),
        }
    }
}
impl std::fmt::Display for SchemaDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_ast_document())
    }
}

pub(crate) fn type_definition_name(type_def: &ast::schema::TypeDefinition) -> &str {
    use ast::schema::TypeDefinition;
    match type_def {
        TypeDefinition::Enum(t) => t.name.as_str(),
        TypeDefinition::InputObject(t) => t.name.as_str(),
        TypeDefinition::Interface(t) => t.name.as_str(),
        TypeDefinition::Object(t) => t.name.as_str(),
        TypeDefinition::Scalar(t) => t.name.as_str(),
        TypeDefinition::Union(t) => t.name.as_str(),
    }
}

pub(crate) fn type_extension_name(type_ext: &ast::schema::TypeExtension) -> &str {
    use ast::schema::TypeExtension;
    match type_ext {
        TypeExtension::Enum(t) => t.name.as_str(),
        TypeExtension::InputObject(t) => t.name.as_str(),
        TypeExtension::Interface(t) => t.name.as_str(),
        TypeExtension::Object(t) => t.name.as_str(),
        TypeExtension::Scalar(t) => t.name.as_str(),
        TypeExtension::Union(t) => t.name.as_str(),
    }
}

pub(crate) fn definition_position(def: &ast::schema::Definition) -> ast::AstPos {
    use ast::schema::Definition;
    use ast::schema::TypeDefinition;
    use ast::schema::TypeExtension;
    match def {
        Definition::DirectiveDefinition(d) => d.position,
        Definition::SchemaDefinition(d) => d.position,
        Definition::TypeDefinition(type_def) => match type_def {
            TypeDefinition::Enum(t) => t.position,
            TypeDefinition::InputObject(t) => t.position,
            TypeDefinition::Interface(t) => t.position,
            TypeDefinition::Object(t) => t.position,
            TypeDefinition::Scalar(t) => t.position,
            TypeDefinition::Union(t) => t.position,
        },
        Definition::TypeExtension(type_ext) => match type_ext {
            TypeExtension::Enum(t) => t.position,
            TypeExtension::InputObject(t) => t.position,
            TypeExtension::Interface(t) => t.position,
            TypeExtension::Object(t) => t.position,
            TypeExtension::Scalar(t) => t.position,
            TypeExtension::Union(t) => t.position,
        },
    }
}

pub(crate) fn output_fields_mut(
    def: &mut ast::schema::Definition,
) -> Option<(&str, &mut Vec<ast::schema::Field>)> {
    use ast::schema::Definition;
    use ast::schema::TypeDefinition;
    use ast::schema::TypeExtension;
    match def {
        Definition::TypeDefinition(TypeDefinition::Object(t)) =>
            Some((t.name.as_str(), &mut t.fields)),
        Definition::TypeDefinition(TypeDefinition::Interface(t)) =>
            Some((t.name.as_str(), &mut t.fields)),
        Definition::TypeExtension(TypeExtension::Object(t)) =>
            Some((t.name.as_str(), &mut t.fields)),
        Definition::TypeExtension(TypeExtension::Interface(t)) =>
            Some((t.name.as_str(), &mut t.fields)),
        _ => None,
    }
}
