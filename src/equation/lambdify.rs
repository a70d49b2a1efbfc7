//! LAMBDIFICATION - converting symbolic expressions to reusable evaluators.
//!
//! Compilation is separate from evaluation on purpose: one curve is evaluated
//! tens of thousands of times per render pass, so name resolution and arity
//! checking happen exactly once, up front.

use crate::equation::error::EquationError;
use crate::equation::expression_engine::Expr;
use crate::equation::function_library::{Function, FunctionLibrary};
use std::f64::consts::{E, PI};

/// smallest positive (subnormal) f64, exposed to expressions as `min64`
const MIN64: f64 = 5e-324;

/// value of a named constant usable wherever a variable can appear
fn named_constant(name: &str) -> Option<f64> {
    match name {
        "π" | "pi" => Some(PI),
        "e" => Some(E),
        "max64" => Some(f64::MAX),
        "min64" => Some(MIN64),
        _ => None,
    }
}

/// Compiled expression: variables are resolved to argument indices and named
/// constants are folded, so evaluation is a plain tree walk over f64.
#[derive(Clone, Debug, PartialEq)]
pub enum Lambda {
    Var(usize),
    Const(f64),
    Add(Box<Lambda>, Box<Lambda>),
    Sub(Box<Lambda>, Box<Lambda>),
    Mul(Box<Lambda>, Box<Lambda>),
    Div(Box<Lambda>, Box<Lambda>),
    Pow(Box<Lambda>, Box<Lambda>),
    Call(Function, Vec<Lambda>),
}

impl Expr {
    /// Compiles against an ordered variable set (for graphing: `["x", "y"]`).
    ///
    /// Unknown identifiers that are neither bound variables nor named
    /// constants are a syntax error; a wrong argument count for a library
    /// function is an arity error.
    pub fn compile(&self, vars: &[&str]) -> Result<Lambda, EquationError> {
        match self {
            Expr::Var(name) => {
                if let Some(idx) = vars.iter().position(|v| *v == name.as_str()) {
                    Ok(Lambda::Var(idx))
                } else if let Some(value) = named_constant(name) {
                    Ok(Lambda::Const(value))
                } else {
                    Err(EquationError::Syntax(format!(
                        "unknown variable '{}'",
                        name
                    )))
                }
            }
            Expr::Const(v) => Ok(Lambda::Const(*v)),
            Expr::Add(a, b) => Ok(Lambda::Add(
                Box::new(a.compile(vars)?),
                Box::new(b.compile(vars)?),
            )),
            Expr::Sub(a, b) => Ok(Lambda::Sub(
                Box::new(a.compile(vars)?),
                Box::new(b.compile(vars)?),
            )),
            Expr::Mul(a, b) => Ok(Lambda::Mul(
                Box::new(a.compile(vars)?),
                Box::new(b.compile(vars)?),
            )),
            Expr::Div(a, b) => Ok(Lambda::Div(
                Box::new(a.compile(vars)?),
                Box::new(b.compile(vars)?),
            )),
            Expr::Pow(a, b) => Ok(Lambda::Pow(
                Box::new(a.compile(vars)?),
                Box::new(b.compile(vars)?),
            )),
            Expr::Call(func, args) => {
                if args.len() != func.arity() {
                    return Err(EquationError::Arity {
                        name: func.name(),
                        expected: func.arity(),
                        got: args.len(),
                    });
                }
                let compiled = args
                    .iter()
                    .map(|a| a.compile(vars))
                    .collect::<Result<Vec<Lambda>, EquationError>>()?;
                Ok(Lambda::Call(*func, compiled))
            }
        }
    }
}

impl Lambda {
    /// Evaluates against one argument binding. Infallible: division by zero,
    /// out-of-domain roots and the like flow through as IEEE NaN/inf and are
    /// clipped away by the rasterizer rather than aborting a render pass.
    #[inline(always)]
    pub fn eval(&self, args: &[f64], lib: &FunctionLibrary) -> f64 {
        match self {
            Lambda::Var(i) => args[*i],
            Lambda::Const(v) => *v,
            Lambda::Add(a, b) => a.eval(args, lib) + b.eval(args, lib),
            Lambda::Sub(a, b) => a.eval(args, lib) - b.eval(args, lib),
            Lambda::Mul(a, b) => a.eval(args, lib) * b.eval(args, lib),
            Lambda::Div(a, b) => a.eval(args, lib) / b.eval(args, lib),
            Lambda::Pow(a, b) => a.eval(args, lib).powf(b.eval(args, lib)),
            Lambda::Call(func, cargs) => {
                let vals: Vec<f64> = cargs.iter().map(|c| c.eval(args, lib)).collect();
                lib.call(*func, &vals)
            }
        }
    }
}

//___________________________________TESTS____________________________________
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn compile(input: &str) -> Lambda {
        Expr::parse_expression(input)
            .unwrap()
            .compile(&["x", "y"])
            .unwrap()
    }

    #[test]
    fn test_polynomial() {
        let lib = FunctionLibrary::new();
        let f = compile("x^2 + 2*x + 1");
        assert_eq!(f.eval(&[3.0, 0.0], &lib), 16.0);
    }

    #[test]
    fn test_both_variables() {
        let lib = FunctionLibrary::new();
        let f = compile("x*y - y");
        assert_eq!(f.eval(&[3.0, 2.0], &lib), 4.0);
    }

    #[test]
    fn test_circle_branch_value() {
        let lib = FunctionLibrary::new();
        let f = compile("sqrt(25-x^2)");
        assert_relative_eq!(f.eval(&[3.0, 0.0], &lib), 4.0);
        let g = compile("-sqrt(25-x^2)");
        assert_relative_eq!(g.eval(&[3.0, 0.0], &lib), -4.0);
    }

    #[test]
    fn test_named_constants_folded() {
        let lib = FunctionLibrary::new();
        assert_relative_eq!(compile("2*π").eval(&[0.0, 0.0], &lib), 2.0 * PI);
        assert_relative_eq!(compile("2*pi").eval(&[0.0, 0.0], &lib), 2.0 * PI);
        assert_relative_eq!(compile("e^2").eval(&[0.0, 0.0], &lib), E * E);
        assert_eq!(compile("max64").eval(&[0.0, 0.0], &lib), f64::MAX);
        assert_eq!(compile("min64").eval(&[0.0, 0.0], &lib), 5e-324);
    }

    #[test]
    fn test_sin_of_pi() {
        let lib = FunctionLibrary::new();
        let f = compile("sin(π/2)");
        assert_relative_eq!(f.eval(&[0.0, 0.0], &lib), 1.0);
    }

    #[test]
    fn test_out_of_domain_yields_nan() {
        let lib = FunctionLibrary::new();
        let f = compile("sqrt(25-x^2)");
        assert!(f.eval(&[6.0, 0.0], &lib).is_nan());
    }

    #[test]
    fn test_unknown_variable_rejected_at_compile() {
        let expr = Expr::parse_expression("x+z").unwrap();
        assert!(matches!(
            expr.compile(&["x", "y"]),
            Err(EquationError::Syntax(_))
        ));
    }

    #[test]
    fn test_manual_call_arity_checked_at_compile() {
        let expr = Expr::Call(Function::Sqrt, vec![]);
        assert_eq!(
            expr.compile(&["x", "y"]),
            Err(EquationError::Arity {
                name: "sqrt",
                expected: 1,
                got: 0
            })
        );
    }
}
