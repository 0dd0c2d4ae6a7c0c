//! Pookalam painting core - procedural radial floral patterns
//!
//! This crate draws the pattern into plain RGB rasters:
//! - [`geometry`] - rotation and evenly spaced point sets
//! - [`surface`] - owned RGB canvas
//! - [`raster`] - circle, line and flood-fill primitives
//! - [`mask`] - circular boundary masks
//! - [`recipe`] - ordered drawing commands for each layer
//! - [`layer`] - builds the outer ring and inner medallion
//! - [`compositor`] - inlays the medallion into the ring
//! - [`pipeline`] - runs everything end to end

pub mod compositor;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod layer;
pub mod mask;
pub mod pipeline;
pub mod raster;
pub mod recipe;
pub mod surface;
pub mod types;

pub use compositor::*;
pub use constants::*;
pub use error::*;
pub use geometry::*;
pub use layer::*;
pub use mask::*;
pub use pipeline::*;
pub use recipe::*;
pub use surface::*;
pub use types::*;
