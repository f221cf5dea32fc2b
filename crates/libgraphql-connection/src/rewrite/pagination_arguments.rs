use crate::ast;
use crate::type_ref;

/// `(name, type)` of each argument appended to a rewritten connection field,
/// in the order they are appended.
pub const PAGINATION_ARGUMENTS: [(&str, &str); 4] = [
    ("after", "String"),
    ("first", "Int"),
    ("before", "String"),
    ("last", "Int"),
];

pub fn is_pagination_argument(argument_name: &str) -> bool {
    PAGINATION_ARGUMENTS.iter().any(|(name, _)| *name == argument_name)
}

/// `(after: String, first: Int, before: String, last: Int)`
pub(crate) fn pagination_arguments() -> Vec<ast::schema::InputValue> {
    PAGINATION_ARGUMENTS.iter()
        .map(|(argument_name, type_name)| ast::schema::InputValue {
            position: ast::SYNTHESIZED_POS,
            description: None,
            name: argument_name.to_string(),
            value_type: type_ref::named(*type_name),
            default_value: None,
            directives: vec![],
        })
        .collect()
}
