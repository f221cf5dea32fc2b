use crate::ast;

/// Returns the innermost named type of a type reference, stripping every list
/// and non-null wrapper (`[Post!]!` -> `Post`).
pub fn base_type_name(type_: &ast::schema::Type) -> &str {
    use ast::schema::Type;
    match type_ {
        Type::NamedType(name) => name.as_str(),
        Type::ListType(inner) | Type::NonNullType(inner) => base_type_name(inner),
    }
}

pub(crate) fn named(type_name: impl Into<String>) -> ast::schema::Type {
    ast::schema::Type::NamedType(type_name.into())
}

pub(crate) fn non_null(inner: ast::schema::Type) -> ast::schema::Type {
    ast::schema::Type::NonNullType(Box::new(inner))
}

pub(crate) fn list(inner: ast::schema::Type) -> ast::schema::Type {
    ast::schema::Type::ListType(Box::new(inner))
}

pub(crate) const BUILTIN_SCALAR_NAMES: [&str; 5] = [
    "Boolean",
    "Float",
    "ID",
    "Int",
    "String",
];

pub(crate) fn is_builtin_scalar(type_name: &str) -> bool {
    BUILTIN_SCALAR_NAMES.contains(&type_name)
}
