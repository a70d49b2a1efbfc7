//! # Expression Engine Module
//!
//! Core symbolic expression tree for the equation-to-raster pipeline.
//! An `Expr` is built by the parser from one branch sub-expression and then
//! compiled (see `lambdify`) into a reusable evaluator bound to the graphing
//! variables `x, y` and the named constants `π, e, max64, min64`.
//!
//! The tree is strictly floating-point: every leaf evaluates to f64, so no
//! runtime type assertions exist anywhere downstream.

use crate::equation::error::EquationError;
use crate::equation::function_library::Function;
use crate::equation::parse_expr;
use std::fmt;

/// Symbolic expression tree. Uses Box<Expr> for recursive structure.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Symbolic variable or named constant (e.g. "x", "π")
    Var(String),
    /// Numerical constant value
    Const(f64),
    /// Addition: left + right
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction: left - right
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication: left * right
    Mul(Box<Expr>, Box<Expr>),
    /// Division: left / right
    Div(Box<Expr>, Box<Expr>),
    /// Power: base ^ exponent
    Pow(Box<Expr>, Box<Expr>),
    /// Call into the function library: name(arg1, arg2, ...)
    Call(Function, Vec<Expr>),
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Add(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Expr::Sub(lhs, rhs) => write!(f, "({} - {})", lhs, rhs),
            Expr::Mul(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Expr::Div(lhs, rhs) => write!(f, "({} / {})", lhs, rhs),
            Expr::Pow(base, exp) => write!(f, "({} ^ {})", base, exp),
            Expr::Call(func, args) => {
                write!(f, "{}(", func.name())?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Mul(Box::new(Expr::Const(-1.0)), Box::new(self))
    }
}

impl Expr {
    /// Parses one raw sub-expression string into a symbolic expression.
    pub fn parse_expression(input: &str) -> Result<Expr, EquationError> {
        parse_expr::parse_expression_str(input)
    }

    /// Convenience wrapper for recursive structures.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    pub fn pow(self, rhs: Expr) -> Expr {
        Expr::Pow(self.boxed(), rhs.boxed())
    }

    /// check if the expression contains a variable
    pub fn contains_variable(&self, var_name: &str) -> bool {
        match self {
            Expr::Var(name) => name == var_name,
            Expr::Const(_) => false,
            Expr::Add(left, right)
            | Expr::Sub(left, right)
            | Expr::Mul(left, right)
            | Expr::Div(left, right)
            | Expr::Pow(left, right) => {
                left.contains_variable(var_name) || right.contains_variable(var_name)
            }
            Expr::Call(_, args) => args.iter().any(|a| a.contains_variable(var_name)),
        }
    }
}
