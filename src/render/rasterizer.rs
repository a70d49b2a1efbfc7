//! The render pass: sweep the visible domain, evaluate the graph at every
//! sample and stamp each finite plotted point onto the canvas.
//!
//! The domain sweep is diagonal: one loop advances x and y together from the
//! bottom-left corner of the logical plane in steps of `precision`. Curves
//! expressed as y(x) are swept through their whole x range and curves
//! expressed as x(y) through their whole y range in the same pass.

use crate::render::canvas::{Canvas, Color};
use crate::render::graph::GraphFn;
use itertools::iproduct;
use std::sync::atomic::{AtomicBool, Ordering};

/// default domain step between samples
pub const DEFAULT_PRECISION: f64 = 0.01;

#[derive(Debug, PartialEq)]
pub enum RenderError {
    /// precision must be finite and strictly positive
    BadPrecision(f64),
    /// no unused color remained after the retry cap
    ColorSpaceExhausted,
    /// the host raised the cancellation flag mid-pass
    Cancelled,
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::BadPrecision(p) => {
                write!(f, "precision must be finite and positive, got {}", p)
            }
            RenderError::ColorSpaceExhausted => write!(f, "no unused color available"),
            RenderError::Cancelled => write!(f, "render pass cancelled"),
        }
    }
}

impl std::error::Error for RenderError {}

/// Paints one graph onto the canvas in the given color.
pub fn paint(
    graph: &dyn GraphFn,
    canvas: &mut dyn Canvas,
    color: Color,
    precision: f64,
) -> Result<(), RenderError> {
    paint_with_cancel(graph, canvas, color, precision, None)
}

/// Like [`paint`], but checks `cancel` once per domain sample and aborts with
/// [`RenderError::Cancelled`] when it is raised. Pixels already written stay.
pub fn paint_with_cancel(
    graph: &dyn GraphFn,
    canvas: &mut dyn Canvas,
    color: Color,
    precision: f64,
    cancel: Option<&AtomicBool>,
) -> Result<(), RenderError> {
    if !precision.is_finite() || precision <= 0.0 {
        return Err(RenderError::BadPrecision(precision));
    }

    let half_w = canvas.width() as f64 / 2.0;
    let half_h = canvas.height() as f64 / 2.0;
    let x_center = (canvas.width() / 2) as i32;
    let y_center = (canvas.height() / 2) as i32;

    let mut x = -half_w;
    let mut y = -half_h;
    while x <= half_w && y <= half_h {
        if let Some(flag) = cancel {
            if flag.load(Ordering::Relaxed) {
                return Err(RenderError::Cancelled);
            }
        }
        let (xs, ys) = graph.evaluate(x, y);
        for (cx, cy) in iproduct!(xs.iter(), ys.iter()) {
            if !cx.is_finite() || !cy.is_finite() {
                continue;
            }
            let px = x_center + cx.round() as i32;
            let py = y_center - cy.round() as i32;
            set_footprint(canvas, px, py, color);
        }
        x += precision;
        y += precision;
    }
    Ok(())
}

/// Five-pixel staircase stamp anchored at (px, py). Keeps steep curve segments
/// visually connected between consecutive samples.
fn set_footprint(canvas: &mut dyn Canvas, px: i32, py: i32, color: Color) {
    canvas.set(px, py, color);
    canvas.set(px + 1, py, color);
    canvas.set(px, py + 1, color);
    canvas.set(px + 2, py, color);
    canvas.set(px, py + 2, color);
}
