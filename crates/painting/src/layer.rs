//! Layer construction
//!
//! Each layer owns a fresh blank canvas, runs its recipe to completion and is
//! then frozen. Finished layers are only ever read by the compositor.

use tracing::info;

use crate::error::PaintingError;
use crate::recipe::{PatternGeometry, Recipe, RecipeStats};
use crate::surface::Canvas;

/// Which of the two layers to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    /// 24-fold petal ring with a blank centre
    Outer,
    /// Medallion that shows through the outer layer's blank centre
    Inner,
}

impl LayerKind {
    pub fn recipe(self, geometry: &PatternGeometry) -> Recipe {
        match self {
            LayerKind::Outer => Recipe::outer_ring(geometry),
            LayerKind::Inner => Recipe::inner_medallion(geometry),
        }
    }
}

/// A finished, read-only layer
#[derive(Debug, Clone)]
pub struct Layer {
    kind: LayerKind,
    canvas: Canvas,
    stats: RecipeStats,
}

impl Layer {
    pub fn kind(&self) -> LayerKind {
        self.kind
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn stats(&self) -> RecipeStats {
        self.stats
    }
}

/// Builds layers for a given pattern geometry
#[derive(Debug, Clone)]
pub struct LayerBuilder {
    geometry: PatternGeometry,
}

impl LayerBuilder {
    pub fn new(geometry: PatternGeometry) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &PatternGeometry {
        &self.geometry
    }

    pub fn build(&self, kind: LayerKind) -> Result<Layer, PaintingError> {
        self.build_with(kind, &kind.recipe(&self.geometry))
    }

    /// Build a layer from an explicit recipe
    pub fn build_with(&self, kind: LayerKind, recipe: &Recipe) -> Result<Layer, PaintingError> {
        let mut canvas = Canvas::blank(self.geometry.size);
        let stats = recipe.apply(&mut canvas)?;
        info!(
            "Built {:?} layer: {} commands, {}/{} fills missed",
            kind, stats.commands, stats.fills_missed, stats.fills_attempted
        );
        Ok(Layer {
            kind,
            canvas,
            stats,
        })
    }
}
