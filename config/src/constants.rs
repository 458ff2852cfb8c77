//! # Configuration Constants
//!
//! Centralized constants for the sprite mesh pipeline. Fill thresholds,
//! floating-point tolerances and host-facing defaults are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Fill**: Thresholds that classify a fill amount as empty or full
//! - **Defaults**: Values used when the host supplies nothing
//! - **Limits**: Maximum values for safety bounds

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for general floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Relative tolerance of the clipper.
///
/// A quad edge whose extent along an axis is below this fraction of its
/// coordinates' magnitude has no extent on that axis when texture
/// coordinates are interpolated at a clip crossing. A clipped polygon whose
/// area is below this fraction of its cell's area is dropped.
///
/// # Example
///
/// ```rust
/// use config::constants::UV_EPSILON;
///
/// let (last_x, cur_x) = (100.0, 100.0 + 1e-5);
/// assert!(cur_x - last_x < UV_EPSILON * cur_x);
/// ```
pub const UV_EPSILON: f64 = 1e-6;

// =============================================================================
// FILL CONSTANTS
// =============================================================================

/// Fill amounts (and radial quadrant fractions) below this value draw nothing.
///
/// # Example
///
/// ```rust
/// use config::constants::EMPTY_FILL_THRESHOLD;
///
/// let amount = 0.0005;
/// assert!(amount < EMPTY_FILL_THRESHOLD);
/// ```
pub const EMPTY_FILL_THRESHOLD: f64 = 0.001;

/// Fill amounts (and radial quadrant fractions) above this value draw the
/// complete, unclipped geometry.
///
/// # Example
///
/// ```rust
/// use config::constants::FULL_FILL_THRESHOLD;
///
/// let amount = 0.9995;
/// assert!(amount >= FULL_FILL_THRESHOLD);
/// ```
pub const FULL_FILL_THRESHOLD: f64 = 0.999;

// =============================================================================
// DEFAULT CONSTANTS
// =============================================================================

/// Default sprite pixels per destination unit.
///
/// A sprite authored at 100 pixels per unit on a canvas with a reference of
/// 100 pixels per unit maps one source pixel to one destination unit.
pub const DEFAULT_PIXELS_PER_UNIT: f64 = 1.0;

/// Default vertex color (opaque white).
///
/// RGBA values in range [0.0, 1.0].
pub const DEFAULT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

/// Default normalized pivot of a layout rect (its center).
///
/// Used when fitting a sprite's aspect ratio: the slack on the shrunk axis is
/// distributed according to the pivot.
pub const DEFAULT_PIVOT: [f64; 2] = [0.5, 0.5];

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of interior quads a tiled image may emit.
///
/// Four vertices per quad keep a tiled mesh under 65 000 vertices, the
/// limit of 16-bit index buffers on the host side.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_TILE_QUADS;
///
/// assert!(MAX_TILE_QUADS * 4 <= 65_000);
/// ```
pub const MAX_TILE_QUADS: usize = 16_250;

// =============================================================================
// GLOBAL CONFIGURATION
// =============================================================================

/// Immutable snapshot of configuration settings shared by the mesh builder.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.empty_fill_threshold < config.full_fill_threshold);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Relative tolerance used for near-zero checks in the clipper.
    pub tolerance: f64,
    /// Fill fraction below which nothing is drawn.
    pub empty_fill_threshold: f64,
    /// Fill fraction above which geometry is drawn unclipped.
    pub full_fill_threshold: f64,
    /// Upper bound on interior quads produced by tiling.
    pub max_tile_quads: usize,
}

impl GlobalConfig {
    /// Builds a configuration, validating every field.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 0.01, 0.99, 1024).expect("valid config");
    /// assert_eq!(cfg.max_tile_quads, 1024);
    /// ```
    pub fn new(
        tolerance: f64,
        empty_fill_threshold: f64,
        full_fill_threshold: f64,
        max_tile_quads: usize,
    ) -> Result<Self, ConfigError> {
        if tolerance.is_nan() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !(0.0..1.0).contains(&empty_fill_threshold)
            || !(empty_fill_threshold..=1.0).contains(&full_fill_threshold)
            || empty_fill_threshold == full_fill_threshold
        {
            return Err(ConfigError::InvalidFillThresholds {
                empty: empty_fill_threshold,
                full: full_fill_threshold,
            });
        }
        if max_tile_quads == 0 {
            return Err(ConfigError::InvalidTileLimit(max_tile_quads));
        }
        Ok(Self {
            tolerance,
            empty_fill_threshold,
            full_fill_threshold,
            max_tile_quads,
        })
    }

    /// Returns true if `amount` counts as an empty fill.
    #[inline]
    pub fn is_empty_fill(&self, amount: f64) -> bool {
        amount < self.empty_fill_threshold
    }

    /// Returns true if `amount` counts as a complete fill.
    #[inline]
    pub fn is_full_fill(&self, amount: f64) -> bool {
        amount >= self.full_fill_threshold
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: UV_EPSILON,
            empty_fill_threshold: EMPTY_FILL_THRESHOLD,
            full_fill_threshold: FULL_FILL_THRESHOLD,
            max_tile_quads: MAX_TILE_QUADS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or NaN.
    InvalidTolerance(f64),
    /// Raised when thresholds are outside [0, 1] or not strictly ordered.
    InvalidFillThresholds { empty: f64, full: f64 },
    /// Raised when the tile quad limit is zero.
    InvalidTileLimit(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidFillThresholds { empty, full } => {
                write!(
                    f,
                    "fill thresholds must satisfy 0 <= empty < full <= 1: empty={empty}, full={full}"
                )
            }
            ConfigError::InvalidTileLimit(value) => {
                write!(f, "max_tile_quads must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if a f64 value is approximately zero within `tolerance`.
///
/// # Example
///
/// ```rust
/// use config::constants::{approx_zero, UV_EPSILON};
///
/// assert!(approx_zero(1e-9, UV_EPSILON));
/// assert!(!approx_zero(0.1, UV_EPSILON));
/// ```
#[inline]
pub fn approx_zero(value: f64, tolerance: f64) -> bool {
    value.abs() < tolerance
}
