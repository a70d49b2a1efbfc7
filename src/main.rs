#![allow(non_snake_case)]
use log::{error, info, LevelFilter};
use qraph::equation::function_library::FunctionLibrary;
use qraph::render::canvas::{Color, PixelCanvas};
use qraph::render::curves;
use qraph::render::graph::EquationGraph;
use qraph::render::rasterizer::DEFAULT_PRECISION;
use qraph::render::registry::GraphRegistry;
use qraph::Utils::logger::init_console_logger;
use std::sync::Arc;

/// Console demo: plots the axes, one analytic parabola and one equation
/// (the first CLI argument, or a circle of radius 100 by default) onto an
/// in-memory canvas and reports how many pixels each curve lit.
fn main() {
    init_console_logger(LevelFilter::Info).unwrap();

    let mut canvas = PixelCanvas::new(600, 600);
    let mut registry = GraphRegistry::new(DEFAULT_PRECISION).unwrap();
    let library = Arc::new(FunctionLibrary::new());

    registry
        .add_graph(Box::new(curves::constant_x(0.0)), Some(Color::WHITE), &mut canvas)
        .unwrap();
    registry
        .add_graph(Box::new(curves::constant_y(0.0)), Some(Color::WHITE), &mut canvas)
        .unwrap();
    info!("axes painted: {} white pixels", canvas.count_color(Color::WHITE));

    let equation = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "{x},{sqrt(10000-x^2),-sqrt(10000-x^2)}".to_string());
    match EquationGraph::parse(&equation, library.clone()) {
        Ok(graph) => {
            let color = registry.add_graph(Box::new(graph), None, &mut canvas).unwrap();
            info!(
                "'{}' painted in ({},{},{}): {} pixels",
                equation,
                color.r,
                color.g,
                color.b,
                canvas.count_color(color)
            );
        }
        Err(e) => error!("rejected equation '{}': {}", equation, e),
    }

    let green = Color::opaque(0, 200, 0);
    registry
        .add_graph(Box::new(curves::quadratic(0.01, 0.0, -150.0)), Some(green), &mut canvas)
        .unwrap();
    info!("parabola painted: {} green pixels", canvas.count_color(green));

    info!(
        "{} registry entries, {} noise evaluations",
        registry.len(),
        library.noise1d_evals()
    );
}
