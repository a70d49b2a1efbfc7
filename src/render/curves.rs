//! Analytic curve constructors. These bypass the equation parser entirely and
//! are what the host uses for axes, default demos and tests.

use crate::render::graph::GraphFn;

fn one_x_one_y(x: f64, y: f64) -> (Vec<f64>, Vec<f64>) {
    (vec![x], vec![y])
}

/// y = a*x + b
pub fn linear(a: f64, b: f64) -> impl GraphFn + Send + Sync {
    move |x: f64, _y: f64| one_x_one_y(x, a * x + b)
}

/// y = a*x^2 + b*x + c
pub fn quadratic(a: f64, b: f64, c: f64) -> impl GraphFn + Send + Sync {
    move |x: f64, _y: f64| one_x_one_y(x, a * x * x + b * x + c)
}

/// y = a*x^3 + b*x^2 + c*x + d
pub fn cubic(a: f64, b: f64, c: f64, d: f64) -> impl GraphFn + Send + Sync {
    move |x: f64, _y: f64| one_x_one_y(x, a * x.powi(3) + b * x.powi(2) + c * x + d)
}

/// y = a*x^4 + b*x^3 + c*x^2 + d*x + e
pub fn quartic(a: f64, b: f64, c: f64, d: f64, e: f64) -> impl GraphFn + Send + Sync {
    move |x: f64, _y: f64| {
        one_x_one_y(
            x,
            a * x.powi(4) + b * x.powi(3) + c * x.powi(2) + d * x + e,
        )
    }
}

/// y = a*e^(b*x) + c
pub fn exponential(a: f64, b: f64, c: f64) -> impl GraphFn + Send + Sync {
    move |x: f64, _y: f64| one_x_one_y(x, a * (b * x).exp() + c)
}

/// vertical line x = c, drawn for every sampled y
pub fn constant_x(c: f64) -> impl GraphFn + Send + Sync {
    move |_x: f64, y: f64| one_x_one_y(c, y)
}

/// horizontal line y = c, drawn for every sampled x
pub fn constant_y(c: f64) -> impl GraphFn + Send + Sync {
    move |x: f64, _y: f64| one_x_one_y(x, c)
}

/// the single point (cx, cy)
pub fn constant(cx: f64, cy: f64) -> impl GraphFn + Send + Sync {
    move |_x: f64, _y: f64| one_x_one_y(cx, cy)
}

/// Circle (x-h)^2 + (y-k)^2 = r^2, expressed as the two root branches of y.
/// Outside the domain the roots are NaN and the rasterizer skips them.
pub fn circle(h: f64, k: f64, r: f64) -> impl GraphFn + Send + Sync {
    move |x: f64, _y: f64| {
        let root = (r * r - (x - h) * (x - h)).sqrt();
        (vec![x], vec![k + root, k - root])
    }
}
