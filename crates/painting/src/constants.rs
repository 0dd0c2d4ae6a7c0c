/// Smallest canvas the inner medallion's fixed-size bands fit inside.
pub const MIN_CANVAS_SIZE: u32 = 640;

/// Largest canvas accepted. Keeps the radius arithmetic within `i32`.
pub const MAX_CANVAS_SIZE: u32 = 8192;

/// Number of petal circles in the outer ring. Also the ring's symmetry order.
pub const PETAL_COUNT: usize = 24;

/// Symmetry order of the accent fills (every fourth petal).
pub const ACCENT_COUNT: usize = 6;

/// Gap between the outer radius and the design's circular silhouette.
pub const SILHOUETTE_MARGIN: i32 = 24;

/// Radius of the blank disc carved into the outer layer, as an inset from
/// the outer radius (196 px at the 800 px reference size).
pub const MEDALLION_INSET: i32 = 104;

/// Horizontal shift of the inner medallion's centre relative to the canvas centre.
pub const INNER_CENTER_SHIFT: i32 = -1;

/// Number of concentric bands in the inner medallion.
pub const BAND_COUNT: i32 = 5;

/// Radial width of each medallion band.
pub const BAND_WIDTH: i32 = 30;
