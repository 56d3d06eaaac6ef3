use crate::ast::{Block, Expr, Program, Statement};

/// Rewrites every statement of a program.
///
/// See [`modify_expr`] for the traversal rules.
///
/// # Errors
/// The first error returned by `f`; the rest of the tree is not visited.
pub fn modify_program<E, F>(program: Program, f: &mut F) -> Result<Program, E>
    where F: FnMut(Expr) -> Result<Expr, E>
{
    let statements = program.statements
                            .into_iter()
                            .map(|statement| modify_statement(statement, f))
                            .collect::<Result<_, _>>()?;
    Ok(Program { statements })
}

/// Rewrites every statement of a block.
///
/// # Errors
/// The first error returned by `f`.
pub fn modify_block<E, F>(block: Block, f: &mut F) -> Result<Block, E>
    where F: FnMut(Expr) -> Result<Expr, E>
{
    let statements = block.statements
                          .into_iter()
                          .map(|statement| modify_statement(statement, f))
                          .collect::<Result<_, _>>()?;
    Ok(Block { statements })
}

/// Rewrites the expression held by a `let`, `return` or expression
/// statement.
///
/// # Errors
/// The first error returned by `f`.
pub fn modify_statement<E, F>(statement: Statement, f: &mut F) -> Result<Statement, E>
    where F: FnMut(Expr) -> Result<Expr, E>
{
    Ok(match statement {
        Statement::Let { name, value } => Statement::Let { name,
                                                           value: modify_expr(value, f)? },
        Statement::Return { value } => Statement::Return { value: modify_expr(value, f)? },
        Statement::Expression { expr } => Statement::Expression { expr: modify_expr(expr, f)? },
    })
}

/// Rewrites an expression bottom-up.
///
/// Children are rewritten first, then `f` is applied to the rebuilt node.
/// The fold only descends into:
/// - prefix, infix and index operands,
/// - `if` conditions and both blocks,
/// - the three parts of a ternary,
/// - function literal parameters (each passed to `f` as an identifier),
/// - array elements and hash keys and values.
///
/// Calls, dot calls, `while` loops, macro literals and function bodies are
/// handed to `f` as they are, so a rewrite that needs to look inside them
/// must do so itself.
///
/// # Errors
/// The first error returned by `f`.
///
/// # Example
/// ```
/// use std::convert::Infallible;
///
/// use quasi::{ast::Expr, interpreter::macros::modify::modify_expr, parse};
///
/// let (program, _) = parse("1 + [2, f(3)]");
/// let quasi::ast::Statement::Expression { expr } = program.statements[0].clone() else {
///     unreachable!()
/// };
///
/// let doubled = modify_expr(expr, &mut |node| {
///     Ok::<_, Infallible>(match node {
///         Expr::Integer(n) => Expr::Integer(n * 2),
///         other => other,
///     })
/// });
///
/// assert_eq!(doubled.unwrap().to_string(), "(2 + [4, f(3)])");
/// ```
pub fn modify_expr<E, F>(expr: Expr, f: &mut F) -> Result<Expr, E>
    where F: FnMut(Expr) -> Result<Expr, E>
{
    let rebuilt = match expr {
        Expr::Prefix { op, right } => Expr::Prefix { op,
                                                     right: Box::new(modify_expr(*right, f)?) },
        Expr::Infix { left, op, right } => {
            let left = Box::new(modify_expr(*left, f)?);
            let right = Box::new(modify_expr(*right, f)?);
            Expr::Infix { left, op, right }
        },
        Expr::Index { target, index } => {
            let target = Box::new(modify_expr(*target, f)?);
            let index = Box::new(modify_expr(*index, f)?);
            Expr::Index { target, index }
        },
        Expr::If { condition,
                   consequence,
                   alternative, } => {
            let condition = Box::new(modify_expr(*condition, f)?);
            let consequence = modify_block(consequence, f)?;
            let alternative = alternative.map(|block| modify_block(block, f)).transpose()?;
            Expr::If { condition,
                       consequence,
                       alternative }
        },
        Expr::Ternary { condition,
                        consequence,
                        alternative, } => {
            let condition = Box::new(modify_expr(*condition, f)?);
            let consequence = Box::new(modify_expr(*consequence, f)?);
            let alternative = Box::new(modify_expr(*alternative, f)?);
            Expr::Ternary { condition,
                            consequence,
                            alternative }
        },
        Expr::Function { parameters, body } => {
            let parameters = parameters.into_iter()
                                       .map(|name| modify_parameter(name, f))
                                       .collect::<Result<_, _>>()?;
            Expr::Function { parameters, body }
        },
        Expr::Array { elements } => {
            let elements = elements.into_iter()
                                   .map(|element| modify_expr(element, f))
                                   .collect::<Result<_, _>>()?;
            Expr::Array { elements }
        },
        Expr::Hash { entries } => {
            let entries = entries.into_iter()
                                 .map(|(key, value)| Ok::<_, E>((modify_expr(key, f)?, modify_expr(value, f)?)))
                                 .collect::<Result<_, _>>()?;
            Expr::Hash { entries }
        },
        other => other,
    };

    f(rebuilt)
}

/// A parameter is rewritten as an identifier; if `f` turns it into
/// anything else the original name is kept.
fn modify_parameter<E, F>(name: String, f: &mut F) -> Result<String, E>
    where F: FnMut(Expr) -> Result<Expr, E>
{
    match f(Expr::Identifier { name: name.clone() })? {
        Expr::Identifier { name } => Ok(name),
        _ => Ok(name),
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;
    use crate::parse;

    fn rewrite_ones(source: &str) -> String {
        let (program, errors) = parse(source);
        assert!(errors.is_empty(), "{errors:?}");
        let program = modify_program(program, &mut |node| {
                          Ok::<_, Infallible>(match node {
                              Expr::Integer(1) => Expr::Integer(2),
                              other => other,
                          })
                      }).unwrap_or_else(|never| match never {});
        program.to_string()
    }

    #[test]
    fn descends_into_composite_nodes() {
        assert_eq!(rewrite_ones("let x = -1 + a[1];"), "let x = (-1 + (a[2]));");
        assert_eq!(rewrite_ones("return {1: [1]};"), "return {2: [2]};");
        assert_eq!(rewrite_ones("1 ? 1 : 1"), "(2 ? 2 : 2)");
        assert_eq!(rewrite_ones("if (1) { 1 } else { 1 }"), "if (2) { 2 } else { 2 }");
    }

    #[test]
    fn leaves_calls_loops_and_bodies_alone() {
        assert_eq!(rewrite_ones("f(1)"), "f(1)");
        assert_eq!(rewrite_ones("x.f(1)"), "x.f(1)");
        assert_eq!(rewrite_ones("while (1) { 1 }"), "while (1) { 1 }");
        assert_eq!(rewrite_ones("function(a) { 1 }"), "function(a) { 1 }");
    }

    #[test]
    fn renames_parameters() {
        let (program, _) = parse("function(a, b) { a }");
        let program = modify_program(program, &mut |node| {
                          Ok::<_, Infallible>(match node {
                              Expr::Identifier { name } if name == "a" => {
                                  Expr::Identifier { name: "z".to_string() }
                              },
                              other => other,
                          })
                      }).unwrap_or_else(|never| match never {});
        assert_eq!(program.to_string(), "function(z, b) { a }");
    }

    #[test]
    fn stops_at_the_first_error() {
        let (program, _) = parse("[1, 2, 3]");
        let mut visited = 0;
        let result = modify_program(program, &mut |node| {
            visited += 1;
            match node {
                Expr::Integer(2) => Err("two"),
                other => Ok(other),
            }
        });
        assert_eq!(result, Err("two"));
        assert_eq!(visited, 2);
    }
}
