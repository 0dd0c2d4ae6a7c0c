//! Complete pattern pipeline
//!
//! Outer layer, inner layer, then composite. The pipeline holds no state
//! between runs and every step is deterministic.

use tracing::info;

use crate::compositor::composite;
use crate::constants::{MAX_CANVAS_SIZE, MIN_CANVAS_SIZE};
use crate::error::PaintingError;
use crate::layer::{LayerBuilder, LayerKind};
use crate::recipe::PatternGeometry;
use crate::surface::Canvas;

pub struct PatternPipeline {
    builder: LayerBuilder,
}

impl PatternPipeline {
    pub fn new(geometry: PatternGeometry) -> Self {
        Self {
            builder: LayerBuilder::new(geometry),
        }
    }

    /// Pipeline for a square canvas of the given size
    pub fn with_size(size: u32) -> Result<Self, PaintingError> {
        if !(MIN_CANVAS_SIZE..=MAX_CANVAS_SIZE).contains(&size) {
            return Err(PaintingError::InvalidSize { size });
        }
        Ok(Self::new(PatternGeometry::new(size)))
    }

    pub fn geometry(&self) -> &PatternGeometry {
        self.builder.geometry()
    }

    /// Render both layers and merge them
    pub fn render(&self) -> Result<Canvas, PaintingError> {
        let geometry = self.builder.geometry();
        info!(
            "Rendering pattern: size={}, radius={}, center=({}, {})",
            geometry.size, geometry.radius, geometry.center.x, geometry.center.y
        );

        let outer = self.builder.build(LayerKind::Outer)?;
        let inner = self.builder.build(LayerKind::Inner)?;
        composite(&outer, &inner)
    }
}
