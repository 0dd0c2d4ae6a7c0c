//! Drawing recipes for the two layers
//!
//! A recipe is an ordered list of immutable [`DrawCommand`]s applied to one
//! owned canvas. Later commands paint over earlier ones, so the order is
//! part of the design. The constants below were authored against an 800 px
//! canvas (radius 300) and are expressed relative to the outer radius where
//! they scale with it.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{
    ACCENT_COUNT, BAND_COUNT, BAND_WIDTH, INNER_CENTER_SHIFT, MEDALLION_INSET, PETAL_COUNT,
    SILHOUETTE_MARGIN,
};
use crate::error::PaintingError;
use crate::geometry::{SymmetricPoints, symmetric_points};
use crate::mask::BoundaryMask;
use crate::surface::Canvas;
use crate::types::{Color, PaletteColor, Point, Thickness};

/// Fill seeds landing on this color sit on a construction stroke and are skipped
pub const BOUNDARY_INK: Color = Color::INK;

/// Centres and radii shared by both layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternGeometry {
    /// Canvas edge length in pixels
    pub size: u32,
    /// Outer-layer centre
    pub center: Point,
    /// Base radius of the petal ring
    pub radius: i32,
    /// Inner-medallion centre
    pub inner_center: Point,
}

impl PatternGeometry {
    pub fn new(size: u32) -> Self {
        let half = (size / 2) as i32;
        let center = Point::new(half, half);
        Self {
            size,
            center,
            radius: (u64::from(size) * 3 / 8) as i32,
            inner_center: center.offset(INNER_CENTER_SHIFT, 0),
        }
    }

    /// Radius of the design's outer silhouette
    pub fn silhouette_radius(&self) -> i32 {
        self.radius + SILHOUETTE_MARGIN
    }

    /// Radius of the inner medallion's construction lines (196 at 800 px)
    pub fn medallion_radius(&self) -> i32 {
        self.radius - MEDALLION_INSET
    }
}

/// `count` points evenly spaced on a circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ring {
    pub center: Point,
    pub radius: i32,
    pub count: usize,
    pub offset_degrees: f64,
}

impl Ring {
    pub const fn new(center: Point, radius: i32, count: usize, offset_degrees: f64) -> Self {
        Self {
            center,
            radius,
            count,
            offset_degrees,
        }
    }

    pub fn points(&self) -> SymmetricPoints {
        symmetric_points(self.radius, self.count, self.center, self.offset_degrees)
    }
}

/// A single drawing step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Circle {
        center: Point,
        radius: i32,
        color: PaletteColor,
        thickness: Thickness,
    },
    /// Outline circles of `radius` centred on every ring point
    CircleSymmetric {
        ring: Ring,
        radius: i32,
        color: PaletteColor,
    },
    /// Lines joining ring point `i` with point `i + count/2`
    ChordStar { ring: Ring, color: PaletteColor },
    /// Flood fill seeded at every ring point
    FillSymmetric { ring: Ring, color: PaletteColor },
    /// OR a circular boundary mask into the canvas
    ApplyMask { center: Point, radius: i32 },
}

/// Counters collected while applying a recipe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecipeStats {
    pub commands: usize,
    pub fills_attempted: usize,
    /// Fills that recolored nothing (seed on a stroke, off-canvas, or already that color)
    pub fills_missed: usize,
}

/// Named, ordered list of drawing commands
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    name: String,
    commands: Vec<DrawCommand>,
}

impl Recipe {
    pub fn new(name: impl Into<String>, commands: Vec<DrawCommand>) -> Self {
        Self {
            name: name.into(),
            commands,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Apply every command in order
    pub fn apply(&self, canvas: &mut Canvas) -> Result<RecipeStats, PaintingError> {
        let mut stats = RecipeStats::default();

        for command in &self.commands {
            debug!("Recipe[{}]: {:?}", self.name, command);
            stats.commands += 1;

            match *command {
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                    thickness,
                } => canvas.stroke_circle(center, radius, color.color(), thickness),
                DrawCommand::CircleSymmetric {
                    ring,
                    radius,
                    color,
                } => {
                    for point in ring.points() {
                        canvas.stroke_circle(point, radius, color.color(), Thickness::Outline);
                    }
                }
                DrawCommand::ChordStar { ring, color } => {
                    let points: Vec<Point> = ring.points().collect();
                    let half = points.len() / 2;
                    for i in 0..half {
                        canvas.stroke_line(points[i], points[i + half], color.color());
                    }
                }
                DrawCommand::FillSymmetric { ring, color } => {
                    for seed in ring.points() {
                        stats.fills_attempted += 1;
                        if fill_cell(canvas, seed, color.color()) == 0 {
                            stats.fills_missed += 1;
                            debug!("  fill at {seed:?} with {color:?} changed nothing");
                        }
                    }
                }
                DrawCommand::ApplyMask { center, radius } => {
                    let mask = BoundaryMask::build(canvas.width(), center, radius);
                    mask.apply_to(canvas)?;
                }
            }
        }

        Ok(stats)
    }

    /// The outer ring: 24 overlapping petal circles, colored band by band,
    /// clipped to the silhouette, with a blank disc carved for the medallion
    pub fn outer_ring(geometry: &PatternGeometry) -> Self {
        use PaletteColor::*;

        let c = geometry.center;
        let r = geometry.radius;
        let fill = |inset: i32, count: usize, offset: f64, color: PaletteColor| {
            DrawCommand::FillSymmetric {
                ring: Ring::new(c, r - inset, count, offset),
                color,
            }
        };

        let commands = vec![
            DrawCommand::Circle {
                center: c,
                radius: geometry.silhouette_radius(),
                color: Red,
                thickness: Thickness::Outline,
            },
            DrawCommand::CircleSymmetric {
                ring: Ring::new(c, r / 2, PETAL_COUNT, 0.0),
                radius: r,
                color: Black,
            },
            fill(2, PETAL_COUNT, 2.0, DarkGreen),
            fill(16, PETAL_COUNT, 5.0, Green),
            fill(2, ACCENT_COUNT, 5.0, LightYellow),
            fill(16, ACCENT_COUNT, 5.0, Yellow),
            fill(16, ACCENT_COUNT, 10.0, Yellow),
            fill(30, PETAL_COUNT, 5.0, Orange),
            fill(30, ACCENT_COUNT, 35.0, LightYellow),
            fill(60, PETAL_COUNT, 0.0, Red),
            fill(70, PETAL_COUNT, 35.0, DarkRed),
            fill(90, PETAL_COUNT, 35.0, Violet),
            fill(100, PETAL_COUNT, 35.0, DarkViolet),
            DrawCommand::ApplyMask {
                center: c,
                radius: geometry.silhouette_radius(),
            },
            // Black rim, then the blank disc the medallion shows through
            DrawCommand::Circle {
                center: geometry.inner_center,
                radius: geometry.medallion_radius(),
                color: Black,
                thickness: Thickness::Filled,
            },
            DrawCommand::Circle {
                center: geometry.inner_center,
                radius: geometry.medallion_radius() - 2,
                color: White,
                thickness: Thickness::Filled,
            },
        ];

        Self::new("outer", commands)
    }

    /// The inner medallion: a 24-spoke star crossed by five bands, a green
    /// disc and a six-petal flower at the centre
    pub fn inner_medallion(geometry: &PatternGeometry) -> Self {
        use PaletteColor::*;

        const BAND_COLORS: [PaletteColor; 4] = [DarkViolet, Red, Yellow, LightYellow];

        let c = geometry.inner_center;
        let spoke_radius = geometry.medallion_radius();
        let band_radius = spoke_radius - 1;
        let seed_radius = spoke_radius - 8;

        let mut commands = vec![DrawCommand::ChordStar {
            ring: Ring::new(c, spoke_radius, PETAL_COUNT, 0.0),
            color: Black,
        }];

        for band in 0..BAND_COUNT {
            commands.push(DrawCommand::Circle {
                center: c,
                radius: band_radius - BAND_WIDTH * band,
                color: Black,
                thickness: Thickness::Outline,
            });
        }

        for band in 0..BAND_COUNT {
            let radius = seed_radius - BAND_WIDTH * band;
            for (step, &color) in BAND_COLORS.iter().enumerate() {
                let offset = 10.0 + 15.0 * step as f64 + 15.0 * f64::from(band);
                commands.push(DrawCommand::FillSymmetric {
                    ring: Ring::new(c, radius, ACCENT_COUNT, offset),
                    color,
                });
            }
        }

        let disk = |radius: i32, color: PaletteColor, thickness: Thickness| DrawCommand::Circle {
            center: c,
            radius,
            color,
            thickness,
        };
        let fill = |radius: i32, offset: f64, color: PaletteColor| DrawCommand::FillSymmetric {
            ring: Ring::new(c, radius, ACCENT_COUNT, offset),
            color,
        };

        commands.extend([
            disk(75, DarkGreen, Thickness::Filled),
            disk(65, Green, Thickness::Filled),
            disk(75, Black, Thickness::Outline),
            disk(30, Black, Thickness::Outline),
            DrawCommand::CircleSymmetric {
                ring: Ring::new(c, 30, ACCENT_COUNT, 5.0),
                radius: 30,
                color: Black,
            },
            fill(32, 5.0, LightYellow),
            fill(32, 35.0, Yellow),
            fill(16, 35.0, Orange),
            fill(16, 5.0, Red),
            DrawCommand::ApplyMask {
                center: c,
                radius: band_radius,
            },
        ]);

        Self::new("inner", commands)
    }
}

/// Flood fill a design cell, treating a seed on a stroke as a miss
fn fill_cell(canvas: &mut Canvas, seed: Point, color: Color) -> usize {
    match canvas.get(seed) {
        Some(current) if current != BOUNDARY_INK => canvas.flood_fill(seed, color),
        _ => 0,
    }
}
