#[cfg(test)]
mod tests {
    use crate::equation::function_library::FunctionLibrary;
    use crate::render::canvas::{Color, PixelCanvas};
    use crate::render::curves;
    use crate::render::graph::EquationGraph;
    use crate::render::registry::GraphRegistry;
    use std::sync::Arc;

    fn lib() -> Arc<FunctionLibrary> {
        Arc::new(FunctionLibrary::new())
    }

    #[test]
    fn test_equation_circle_end_to_end() {
        let mut canvas = PixelCanvas::new(100, 100);
        let mut reg = GraphRegistry::new(1.0).unwrap();
        let g = EquationGraph::parse("{x},{sqrt(1600-x^2),-sqrt(1600-x^2)}", lib()).unwrap();
        let color = reg.add_graph(Box::new(g), Some(Color::WHITE), &mut canvas).unwrap();

        let lit = canvas.pixels_of(color);
        assert!(!lit.is_empty());
        // the top and bottom of the circle land on the vertical center line
        assert!(lit.contains(&(50, 10)), "top of circle missing");
        assert!(lit.contains(&(50, 90)), "bottom of circle missing");
        // the interior of the circle stays unpainted
        assert_eq!(canvas.get(50, 50), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_multivalued_x_branch_paints_both_lines() {
        let mut canvas = PixelCanvas::new(40, 40);
        let mut reg = GraphRegistry::new(1.0).unwrap();
        let g = EquationGraph::parse("{x,-x},{2}", lib()).unwrap();
        reg.add_graph(Box::new(g), Some(Color::WHITE), &mut canvas).unwrap();

        // y = 2 maps to pixel row 18; both x = t and x = -t are stamped there
        assert_eq!(canvas.get(25, 18), Some(Color::WHITE));
        assert_eq!(canvas.get(15, 18), Some(Color::WHITE));
    }

    #[test]
    fn test_bad_equation_reaches_neither_registry_nor_canvas() {
        let mut canvas = PixelCanvas::new(20, 20);
        let mut reg = GraphRegistry::new(1.0).unwrap();
        assert!(EquationGraph::parse("{x},{y},{z}", lib()).is_err());
        assert!(EquationGraph::parse("y=nosuchfn(x)", lib()).is_err());
        assert_eq!(reg.len(), 0);
        assert!(canvas.lit_pixels().is_empty());
        // the registry still works after rejected input
        assert!(reg
            .add_graph(Box::new(curves::linear(1.0, 0.0)), None, &mut canvas)
            .is_ok());
    }

    #[test]
    fn test_axes_then_curve_demo_scene() {
        let mut canvas = PixelCanvas::new(60, 60);
        let mut reg = GraphRegistry::new(0.5).unwrap();
        reg.add_graph(Box::new(curves::constant_x(0.0)), Some(Color::WHITE), &mut canvas)
            .unwrap();
        reg.add_graph(Box::new(curves::constant_y(0.0)), Some(Color::WHITE), &mut canvas)
            .unwrap();
        let red = Color::opaque(255, 0, 0);
        let g = EquationGraph::parse("y=x^2/10", lib()).unwrap();
        reg.add_graph(Box::new(g), Some(red), &mut canvas).unwrap();

        assert_eq!(reg.len(), 2);
        assert!(canvas.count_color(Color::WHITE) > 0);
        assert!(canvas.count_color(red) > 0);
        // parabola vertex sits at the origin pixel, painted last so it is red
        assert_eq!(canvas.get(30, 30), Some(red));
    }

    #[test]
    fn test_order_independent_disjoint_curves() {
        let a = Color::opaque(9, 9, 9);
        let b = Color::opaque(90, 90, 90);

        let mut forward = PixelCanvas::new(16, 16);
        let mut reg = GraphRegistry::new(1.0).unwrap();
        reg.add_graph(Box::new(curves::constant_y(5.0)), Some(a), &mut forward).unwrap();
        reg.add_graph(Box::new(curves::constant_y(-5.0)), Some(b), &mut forward).unwrap();

        let mut backward = PixelCanvas::new(16, 16);
        let mut reg2 = GraphRegistry::new(1.0).unwrap();
        reg2.add_graph(Box::new(curves::constant_y(-5.0)), Some(b), &mut backward).unwrap();
        reg2.add_graph(Box::new(curves::constant_y(5.0)), Some(a), &mut backward).unwrap();

        assert_eq!(forward.pixels_of(a), backward.pixels_of(a));
        assert_eq!(forward.pixels_of(b), backward.pixels_of(b));
    }

    #[test]
    fn test_noise_equation_plots() {
        let mut canvas = PixelCanvas::new(50, 50);
        let mut reg = GraphRegistry::new(1.0).unwrap();
        let g = EquationGraph::parse("y=10*p1(2,2,1,39530,x/10)", lib()).unwrap();
        reg.add_graph(Box::new(g), Some(Color::WHITE), &mut canvas).unwrap();
        assert!(canvas.count_color(Color::WHITE) > 0);
    }
}
