use crate::equation::error::EquationError;
use crate::equation::expression_engine::Expr;
use crate::equation::function_library::FunctionLibrary;
use crate::equation::lambdify::Lambda;
use crate::equation::parse_equation::split_equation;
use std::sync::Arc;

/// the fixed variable binding every graph expression is compiled against
pub const GRAPH_VARS: [&str; 2] = ["x", "y"];

/// A compiled, callable curve definition: one domain sample in, the set of
/// candidate x-outputs and candidate y-outputs back. Inherently multi-valued
/// curves (circles, conics) return more than one candidate per branch.
pub trait GraphFn {
    fn evaluate(&self, x: f64, y: f64) -> (Vec<f64>, Vec<f64>);
}

/// closures are graphs too, so analytic constructors stay one-liners
impl<F> GraphFn for F
where
    F: Fn(f64, f64) -> (Vec<f64>, Vec<f64>),
{
    fn evaluate(&self, x: f64, y: f64) -> (Vec<f64>, Vec<f64>) {
        self(x, y)
    }
}

/// how graphs are stored in the registry
pub type BoxedGraph = Box<dyn GraphFn + Send + Sync>;

/// A graph compiled from equation text: every branch member was parsed and
/// compiled once, then reused for every sampled domain point.
pub struct EquationGraph {
    x_branch: Vec<Lambda>,
    y_branch: Vec<Lambda>,
    library: Arc<FunctionLibrary>,
}

impl EquationGraph {
    /// Full text-to-graph pipeline: split the equation into branch lists,
    /// parse and compile every member. Any failure is reported before the
    /// caller can register anything, so a bad equation never reaches the
    /// registry or the canvas.
    pub fn parse(text: &str, library: Arc<FunctionLibrary>) -> Result<EquationGraph, EquationError> {
        let branches = split_equation(text)?;

        let compile_branch = |members: &[String]| -> Result<Vec<Lambda>, EquationError> {
            members
                .iter()
                .map(|raw| Expr::parse_expression(raw)?.compile(&GRAPH_VARS))
                .collect()
        };

        Ok(EquationGraph {
            x_branch: compile_branch(&branches.x_branch)?,
            y_branch: compile_branch(&branches.y_branch)?,
            library,
        })
    }
}

impl GraphFn for EquationGraph {
    fn evaluate(&self, x: f64, y: f64) -> (Vec<f64>, Vec<f64>) {
        let args = [x, y];
        let xs = self
            .x_branch
            .iter()
            .map(|l| l.eval(&args, &self.library))
            .collect();
        let ys = self
            .y_branch
            .iter()
            .map(|l| l.eval(&args, &self.library))
            .collect();
        (xs, ys)
    }
}

//___________________________________TESTS____________________________________
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn lib() -> Arc<FunctionLibrary> {
        Arc::new(FunctionLibrary::new())
    }

    #[test]
    fn test_circle_candidates_at_x3() {
        let g = EquationGraph::parse("{x},{sqrt(25-x^2),-sqrt(25-x^2)}", lib()).unwrap();
        let (xs, ys) = g.evaluate(3.0, 0.0);
        assert_eq!(xs, vec![3.0]);
        assert_eq!(ys.len(), 2);
        assert_relative_eq!(ys[0], 4.0);
        assert_relative_eq!(ys[1], -4.0);
    }

    #[test]
    fn test_multivalued_x_branch() {
        let g = EquationGraph::parse("{x,-x},{2}", lib()).unwrap();
        for x in [-1.5, 0.0, 7.25] {
            let (xs, ys) = g.evaluate(x, 0.0);
            assert_eq!(xs, vec![x, -x]);
            assert_eq!(ys, vec![2.0]);
        }
    }

    #[test]
    fn test_y_shorthand() {
        let g = EquationGraph::parse("y=x^2", lib()).unwrap();
        let (xs, ys) = g.evaluate(3.0, 99.0);
        assert_eq!(xs, vec![3.0]);
        assert_eq!(ys, vec![9.0]);
    }

    #[test]
    fn test_x_shorthand_uses_y_binding() {
        let g = EquationGraph::parse("x=2*y", lib()).unwrap();
        let (xs, ys) = g.evaluate(0.0, 4.0);
        assert_eq!(xs, vec![8.0]);
        assert_eq!(ys, vec![4.0]);
    }

    #[test]
    fn test_branch_order_is_textual_order() {
        let g = EquationGraph::parse("{x},{1,2,3}", lib()).unwrap();
        let (_, ys) = g.evaluate(0.0, 0.0);
        assert_eq!(ys, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_parse_failures_propagate() {
        assert!(EquationGraph::parse("{x},{y},{z}", lib()).is_err());
        assert!(EquationGraph::parse("{x},{sqrt(}", lib()).is_err());
        assert!(EquationGraph::parse("y=sqrt(x,3)", lib()).is_err());
    }
}
