/// a module turns a multi-value equation string into compiled, evaluable branch expressions
///# Example
/// ```
/// use qraph::equation::parse_equation::split_equation;
/// use qraph::equation::expression_engine::Expr;
/// let branches = split_equation("{x},{sqrt(25-x^2),-sqrt(25-x^2)}").unwrap();
/// assert_eq!(branches.x_branch, vec!["x".to_string()]);
/// assert_eq!(branches.y_branch.len(), 2);
/// let parsed = Expr::parse_expression("sqrt(25-x^2)").unwrap();
/// let compiled = parsed.compile(&["x", "y"]).unwrap();
/// ```
pub mod parse_equation;
///____________________________________________________________________________________________
/// # Expression engine
/// a module
/// 1) holds the symbolic expression tree `Expr`
/// 2) turns a String expression into `Expr` (parse_expr)
/// 3) turns `Expr` into a compiled `Lambda` evaluated against `x, y` bindings (lambdify)
///# Example
/// ```
/// use std::sync::Arc;
/// use qraph::equation::expression_engine::Expr;
/// use qraph::equation::function_library::FunctionLibrary;
/// let lib = Arc::new(FunctionLibrary::new());
/// let expr = Expr::parse_expression("x^2 + 2*x + 1").unwrap();
/// let compiled = expr.compile(&["x", "y"]).unwrap();
/// assert_eq!(compiled.eval(&[3.0, 0.0], &lib), 16.0);
/// ```
pub mod expression_engine;
pub mod parse_expr;
pub mod lambdify;
/// fixed table of named callables usable inside expressions (trig, hyperbolic,
/// a memoized 1-D Perlin sampler, a uniform random sampler)
pub mod function_library;
/// seeded reference Perlin noise, 1-D/2-D/3-D, parameterized by alpha, beta, octaves
pub mod perlin_noise;
/// the collection of utility functions mainly for bracket parsing and proceeding
pub mod utils;
pub mod error;
