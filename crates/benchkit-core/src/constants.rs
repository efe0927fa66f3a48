//! Fixed layout constants.
//!
//! These values reproduce the established diagram layout and are kept as
//! named constants rather than derived.

/// Candidate hole positions at or below this x are dropped.
pub const HOLE_POSITION_TOLERANCE: f64 = 0.01;

/// Upper bound on the number of hole candidates generated in one layout.
pub const MAX_HOLE_CANDIDATES: usize = 10_000;

/// Gap between a hole's right edge (`x + thickness`) and its first dimension lane.
pub const DIMENSION_LANE_GAP: f64 = 0.9;

/// Lane offset for the whole-hole length dimension.
pub const LANE_OFFSET_HOLE: f64 = 0.0;
/// Lane offset for the water dimension.
pub const LANE_OFFSET_WATER: f64 = 1.1;
/// Lane offset for the charge dimension.
pub const LANE_OFFSET_CHARGE: f64 = 2.2;
/// Lane offset for the stemming dimension.
pub const LANE_OFFSET_STEMMING: f64 = 3.3;

/// Elevation of the overall-length dimension below the diagram.
pub const BENCH_LENGTH_DIMENSION_Y: f64 = -1.2;

/// Half-length of the end ticks on vertical dimensions.
pub const VERTICAL_TICK_HALF: f64 = 0.35;
/// Half-length of the end ticks on horizontal dimensions.
pub const HORIZONTAL_TICK_HALF: f64 = 0.2;
/// Label offset to the left of a vertical dimension line.
pub const VERTICAL_LABEL_OFFSET: f64 = 0.85;
/// Label offset above a horizontal dimension line.
pub const HORIZONTAL_LABEL_OFFSET: f64 = 0.35;

/// Minimum slope arc radius.
pub const SLOPE_ARC_MIN_RADIUS: f64 = 1.5;
/// Slope arc radius as a fraction of bench height.
pub const SLOPE_ARC_HEIGHT_FACTOR: f64 = 0.18;
/// Number of samples along the slope arc polyline.
pub const SLOPE_ARC_SAMPLES: usize = 60;
/// Angular position of the angle label as a fraction of the slope angle.
pub const SLOPE_LABEL_ANGLE_FACTOR: f64 = 0.55;
/// Radius of the angle label as a multiple of the arc radius.
pub const SLOPE_LABEL_RADIUS_FACTOR: f64 = 1.25;

/// Left edge of the suggested view window.
pub const VIEW_X_MIN: f64 = -7.0;
/// Margin right of the study base.
pub const VIEW_STUDY_MARGIN: f64 = 2.0;
/// Margin right of the toe of slope.
pub const VIEW_TOE_MARGIN: f64 = 14.0;
/// Bottom edge of the suggested view window.
pub const VIEW_Y_MIN: f64 = -2.5;
/// Headroom above the bench crest.
pub const VIEW_TOP_MARGIN: f64 = 5.0;

/// Default hole length for newly sized parameter tables.
pub const DEFAULT_HOLE_LENGTH: f64 = 11.0;
/// Default charge length for newly sized parameter tables.
pub const DEFAULT_CHARGE_LENGTH: f64 = 8.0;
/// Default water length for newly sized parameter tables.
pub const DEFAULT_WATER_LENGTH: f64 = 0.0;

/// Number of holes annotated by default.
pub const DEFAULT_ANNOTATED_HOLES: usize = 2;
