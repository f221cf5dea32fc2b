use crate::ast;
use crate::type_ref;

pub const PAGE_INFO_TYPE_NAME: &str = "PageInfo";

pub fn connection_type_name(base_type_name: &str) -> String {
    format!("{base_type_name}Connection")
}

pub fn edge_type_name(base_type_name: &str) -> String {
    format!("{base_type_name}Edge")
}

/// ```graphql
/// type PageInfo {
///   hasNextPage: Boolean!
///   hasPreviousPage: Boolean!
///   startCursor: String
///   endCursor: String
/// }
/// ```
pub(crate) fn page_info_type() -> ast::schema::TypeDefinition {
    object_type(PAGE_INFO_TYPE_NAME, vec![], vec![
        field("hasNextPage", type_ref::non_null(type_ref::named("Boolean")), vec![]),
        field("hasPreviousPage", type_ref::non_null(type_ref::named("Boolean")), vec![]),
        field("startCursor", type_ref::named("String"), vec![]),
        field("endCursor", type_ref::named("String"), vec![]),
    ])
}

/// `type {T}Edge @hint { cursor: String!, node: T }`
pub(crate) fn edge_type(
    base_type_name: &str,
    cache_hint: Option<&ast::schema::Directive>,
) -> ast::schema::TypeDefinition {
    object_type(
        edge_type_name(base_type_name),
        cache_hint.into_iter().cloned().collect(),
        vec![
            field("cursor", type_ref::non_null(type_ref::named("String")), vec![]),
            field("node", type_ref::named(base_type_name), vec![]),
        ],
    )
}

/// `type {T}Connection { totalCount: Int!, edges: [{T}Edge] @hint,
/// pageInfo: PageInfo! @hint }`
///
/// The hint is never attached to the connection type itself or to
/// `totalCount`.
pub(crate) fn connection_type(
    base_type_name: &str,
    cache_hint: Option<&ast::schema::Directive>,
) -> ast::schema::TypeDefinition {
    let hint_directives = || -> Vec<ast::schema::Directive> {
        cache_hint.into_iter().cloned().collect()
    };

    object_type(connection_type_name(base_type_name), vec![], vec![
        field("totalCount", type_ref::non_null(type_ref::named("Int")), vec![]),
        field(
            "edges",
            type_ref::list(type_ref::named(edge_type_name(base_type_name))),
            hint_directives(),
        ),
        field(
            "pageInfo",
            type_ref::non_null(type_ref::named(PAGE_INFO_TYPE_NAME)),
            hint_directives(),
        ),
    ])
}

fn object_type(
    name: impl Into<String>,
    directives: Vec<ast::schema::Directive>,
    fields: Vec<ast::schema::Field>,
) -> ast::schema::TypeDefinition {
    ast::schema::TypeDefinition::Object(ast::schema::ObjectType {
        position: ast::SYNTHESIZED_POS,
        description: None,
        name: name.into(),
        implements_interfaces: vec![],
        directives,
        fields,
    })
}

fn field(
    name: &str,
    field_type: ast::schema::Type,
    directives: Vec<ast::schema::Directive>,
) -> ast::schema::Field {
    ast::schema::Field {
        position: ast::SYNTHESIZED_POS,
        description: None,
        name: name.to_string(),
        arguments: vec![],
        field_type,
        directives,
    }
}
