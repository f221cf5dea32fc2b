use crate::ast;
use crate::scan::FieldCoordinate;
use crate::schema_document::SchemaDocument;

/// The successful result of a connection transform.
#[derive(Clone, Debug, PartialEq)]
pub struct TransformedSchema {
    pub(crate) document: SchemaDocument,
    pub(crate) rewritten_fields: Vec<FieldCoordinate>,
    pub(crate) synthesized_type_names: Vec<String>,
}
impl TransformedSchema {
    pub fn document(&self) -> &SchemaDocument {
        &self.document
    }

    pub fn into_ast_document(self) -> ast::schema::Document {
        self.document.into_ast_document()
    }

    /// Fields whose type was replaced by a `*Connection` type, in document
    /// order.
    pub fn rewritten_fields(&self) -> &[FieldCoordinate] {
        &self.rewritten_fields
    }

    /// Names of the types the transform generated, in emission order.
    pub fn synthesized_type_names(&self) -> &[String] {
        &self.synthesized_type_names
    }

    /// Prints the transformed schema as SDL.
    pub fn to_sdl(&self) -> String {
        self.document.to_string()
    }
}
impl std::fmt::Display for TransformedSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.document)
    }
}
