use crate::ast;

pub(crate) fn has_directive(
    directives: &[ast::schema::Directive],
    directive_name: &str,
) -> bool {
    directives.iter().any(|d| d.name == directive_name)
}

pub(crate) fn find_directive<'a>(
    directives: &'a [ast::schema::Directive],
    directive_name: &str,
) -> Option<&'a ast::schema::Directive> {
    directives.iter().find(|d| d.name == directive_name)
}

/// Reads a numeric argument from a directive annotation.
///
/// Integral floats are accepted; anything else (strings, enums, fractional
/// or out-of-range numbers, variables) yields `None`.
pub(crate) fn int_argument(
    directive: &ast::schema::Directive,
    argument_name: &str,
) -> Option<i32> {
    use ast::schema::Value;
    let (_, value) = directive.arguments.iter()
        .find(|(name, _)| name == argument_name)?;

    match value {
        Value::Int(num) => num.as_i64().and_then(|n| i32::try_from(n).ok()),
        Value::Float(num)
            if num.fract() == 0.0
                && *num >= f64::from(i32::MIN)
                && *num <= f64::from(i32::MAX) => Some(*num as i32),
        _ => None,
    }
}

pub(crate) fn int_directive(
    directive_name: &str,
    argument_name: &str,
    value: i32,
) -> ast::schema::Directive {
    ast::schema::Directive {
        position: ast::SYNTHESIZED_POS,
        name: directive_name.to_string(),
        arguments: vec![(
            argument_name.to_string(),
            ast::schema::Value::Int(value.into()),
        )],
    }
}
