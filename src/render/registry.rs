//! Book-keeping for the set of live graphs on a canvas. Each entry pairs one
//! color with every graph drawn in that color, in insertion order, so a full
//! repaint reproduces the picture a sequence of incremental adds produced.

use crate::render::canvas::{Canvas, Color};
use crate::render::graph::{BoxedGraph, GraphFn};
use crate::render::rasterizer::{paint_with_cancel, RenderError};
use log::{debug, info};
use rand::Rng;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

const COLOR_RETRY_CAP: usize = 65_536;

struct RegistryEntry {
    color: Color,
    graphs: Vec<BoxedGraph>,
}

/// The set of graphs currently plotted, keyed by color.
pub struct GraphRegistry {
    entries: Vec<RegistryEntry>,
    precision: f64,
    cancel: Option<Arc<AtomicBool>>,
}

impl GraphRegistry {
    pub fn new(precision: f64) -> Result<GraphRegistry, RenderError> {
        if !precision.is_finite() || precision <= 0.0 {
            return Err(RenderError::BadPrecision(precision));
        }
        Ok(GraphRegistry {
            entries: Vec::new(),
            precision,
            cancel: None,
        })
    }

    /// Installs a shared flag the host can raise to abort in-flight paints.
    pub fn set_cancel_flag(&mut self, flag: Arc<AtomicBool>) {
        self.cancel = Some(flag);
    }

    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Paints the graph onto the canvas and records it under its color.
    ///
    /// With `color: None` a random unused color is drawn first. Passing a
    /// color already in use is allowed and groups the new graph with the
    /// existing entry of that color. Nothing is recorded when the paint
    /// itself fails, so a cancelled add leaves the registry unchanged.
    pub fn add_graph(
        &mut self,
        graph: BoxedGraph,
        color: Option<Color>,
        canvas: &mut dyn Canvas,
    ) -> Result<Color, RenderError> {
        let color = match color {
            Some(c) => c,
            None => self.allocate_color()?,
        };
        self.paint_one(graph.as_ref(), color, canvas)?;
        match self.entries.iter_mut().find(|e| e.color == color) {
            Some(entry) => entry.graphs.push(graph),
            None => self.entries.push(RegistryEntry {
                color,
                graphs: vec![graph],
            }),
        }
        debug!(
            "registered graph under color ({},{},{}), {} entries live",
            color.r,
            color.g,
            color.b,
            self.entries.len()
        );
        Ok(color)
    }

    /// Drops every graph registered under `color`. Returns false when the
    /// color was not in use. The canvas is untouched; call [`reset`] to see
    /// the removal.
    ///
    /// [`reset`]: GraphRegistry::reset
    pub fn remove(&mut self, color: Color) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.color != color);
        before != self.entries.len()
    }

    /// Clears the canvas and repaints every registered graph in insertion
    /// order. Pixels painted before a cancellation stay on the canvas.
    pub fn reset(&self, canvas: &mut dyn Canvas) -> Result<(), RenderError> {
        canvas.clear();
        for entry in &self.entries {
            for graph in &entry.graphs {
                self.paint_one(graph.as_ref(), entry.color, canvas)?;
            }
        }
        info!("repainted {} registry entries", self.entries.len());
        Ok(())
    }

    pub fn colors(&self) -> Vec<Color> {
        self.entries.iter().map(|e| e.color).collect()
    }

    pub fn contains(&self, color: Color) -> bool {
        self.entries.iter().any(|e| e.color == color)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn paint_one(
        &self,
        graph: &dyn GraphFn,
        color: Color,
        canvas: &mut dyn Canvas,
    ) -> Result<(), RenderError> {
        paint_with_cancel(graph, canvas, color, self.precision, self.cancel.as_deref())
    }

    /// Draws random opaque colors until one not already registered comes up.
    fn allocate_color(&self) -> Result<Color, RenderError> {
        let mut rng = rand::rng();
        for _ in 0..COLOR_RETRY_CAP {
            let candidate = Color::opaque(
                rng.random::<u8>(),
                rng.random::<u8>(),
                rng.random::<u8>(),
            );
            if !self.contains(candidate) {
                return Ok(candidate);
            }
        }
        Err(RenderError::ColorSpaceExhausted)
    }
}
