//! a module turns a raw sub-expression string into a symbolic [`Expr`]
//!
//! The search splits on the rightmost `+`/`-` outside brackets, then the
//! rightmost `*`/`/`, then `^` (leftmost, so power is right-associative),
//! then tries function calls, parenthesized groups, constants and variables.
//
//                  search recursion diagram
//                "y^2+sqrt(x)+cos(x)/y"            |
//                |       left  | right             |
//                |_________________________________|
//                |    div by rightmost  +          |
//                |_________________________________|
//                | y^2+sqrt(x) |    cos(x)/y       |
//                |      |      |        |          |
//                |     \|/     |       \|/         |
//                |  div by +   |     div by /      |
//                |  ... etc    |  cos(x)  |  y     |

use crate::equation::error::EquationError;
use crate::equation::expression_engine::Expr;
use crate::equation::function_library::Function;
use crate::equation::utils::{
    find_char_positions_outside_brackets, find_pair_to_this_bracket,
    find_rightmost_additive_operator, find_rightmost_operator_outside_brackets,
    split_outside_parens,
};

/// Parses one raw expression string. Whitespace is stripped and `**` is
/// normalized to `^` before the recursive search starts.
pub fn parse_expression_str(input: &str) -> Result<Expr, EquationError> {
    let cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let cleaned = cleaned.replace("**", "^");
    parse_inner(&cleaned)
}

fn parse_inner(input: &str) -> Result<Expr, EquationError> {
    if input.is_empty() {
        return Err(EquationError::Syntax("empty expression".to_string()));
    }

    // expression that is ALL in brackets
    if input.starts_with('(') {
        match find_pair_to_this_bracket(input, 0) {
            Some(end) if end == input.len() - 1 => return parse_inner(&input[1..end]),
            Some(_) => {}
            None => {
                return Err(EquationError::Syntax(format!(
                    "unmatched '(' in '{}'",
                    input
                )));
            }
        }
    }

    // addition and subtraction; unary occurrences are not split points
    if let Some((pos, op)) = find_rightmost_additive_operator(input) {
        let left = &input[..pos];
        let right = &input[pos + 1..];
        if right.is_empty() {
            return Err(EquationError::Syntax(format!(
                "dangling '{}' in '{}'",
                op, input
            )));
        }
        let lhs = parse_inner(left)?;
        let rhs = parse_inner(right)?;
        return Ok(match op {
            '+' => Expr::Add(lhs.boxed(), rhs.boxed()),
            _ => Expr::Sub(lhs.boxed(), rhs.boxed()),
        });
    }

    // unary sign
    if let Some(rest) = input.strip_prefix('-') {
        return Ok(-parse_inner(rest)?);
    }
    if let Some(rest) = input.strip_prefix('+') {
        return parse_inner(rest);
    }

    // multiplication and division
    if let Some((pos, op)) = find_rightmost_operator_outside_brackets(input, &['*', '/']) {
        let left = &input[..pos];
        let right = &input[pos + 1..];
        if left.is_empty() || right.is_empty() {
            return Err(EquationError::Syntax(format!(
                "dangling '{}' in '{}'",
                op, input
            )));
        }
        let lhs = parse_inner(left)?;
        let rhs = parse_inner(right)?;
        return Ok(match op {
            '*' => Expr::Mul(lhs.boxed(), rhs.boxed()),
            _ => Expr::Div(lhs.boxed(), rhs.boxed()),
        });
    }

    // power, leftmost split for right associativity
    if let Some(pos) = find_char_positions_outside_brackets(input, '^') {
        let base = &input[..pos];
        let exponent = &input[pos + 1..];
        if base.is_empty() || exponent.is_empty() {
            return Err(EquationError::Syntax(format!(
                "dangling '^' in '{}'",
                input
            )));
        }
        return Ok(Expr::Pow(
            parse_inner(base)?.boxed(),
            parse_inner(exponent)?.boxed(),
        ));
    }

    // function call: name(arg1,arg2,...)
    if let Some(paren) = input.find('(') {
        if paren > 0
            && input.ends_with(')')
            && find_pair_to_this_bracket(input, paren) == Some(input.len() - 1)
        {
            let name = &input[..paren];
            let func = Function::from_name(name).ok_or_else(|| {
                EquationError::Syntax(format!("unknown function '{}'", name))
            })?;
            let inner = &input[paren + 1..input.len() - 1];
            let raw_args = if inner.is_empty() {
                Vec::new()
            } else {
                split_outside_parens(inner)
            };
            if raw_args.len() != func.arity() {
                return Err(EquationError::Arity {
                    name: func.name(),
                    expected: func.arity(),
                    got: raw_args.len(),
                });
            }
            let args = raw_args
                .iter()
                .map(|a| parse_inner(a))
                .collect::<Result<Vec<Expr>, EquationError>>()?;
            return Ok(Expr::Call(func, args));
        }
    }

    // constant
    if let Ok(value) = input.parse::<f64>() {
        return Ok(Expr::Const(value));
    }

    // variable or named constant; the distinction is resolved at compile time
    if input.chars().all(|c| c.is_alphanumeric() || c == '_') {
        return Ok(Expr::Var(input.to_string()));
    }

    Err(EquationError::Syntax(format!(
        "invalid expression '{}'",
        input
    )))
}
