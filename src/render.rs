/// graph functions: a domain sample mapped to candidate output coordinates
///# Example
/// ```
/// use std::sync::Arc;
/// use qraph::equation::function_library::FunctionLibrary;
/// use qraph::render::graph::{EquationGraph, GraphFn};
/// let lib = Arc::new(FunctionLibrary::new());
/// let g = EquationGraph::parse("{x},{sqrt(25-x^2),-sqrt(25-x^2)}", lib).unwrap();
/// let (xs, ys) = g.evaluate(3.0, 0.0);
/// assert_eq!(xs, vec![3.0]);
/// assert!((ys[0] - 4.0).abs() < 1e-12 && (ys[1] + 4.0).abs() < 1e-12);
/// ```
pub mod graph;
/// analytic curve constructors (linear, quadratic, circle, axes, ...)
pub mod curves;
/// Color, the Canvas trait and an in-memory pixel buffer implementation
pub mod canvas;
/// diagonal domain scan painting each plotted point with a staircase footprint
pub mod rasterizer;
/// color-keyed registry of live graphs with incremental add and full repaint
pub mod registry;
mod render_tests;
