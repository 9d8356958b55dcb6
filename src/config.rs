//! Precision and tolerance settings shared by every vector operation.
//!
//! A vector remembers the config it was built with, and every vector derived
//! from it (sums, projections, unit vectors) inherits the receiver's config.

/// Smallest number of significant digits the decimal arithmetic may use.
pub const MIN_PRECISION: u64 = 28;

/// Most decimal places an `f64` angle can meaningfully be rounded to.
pub const MAX_ANGLE_DECIMALS: i32 = 15;

/// Numeric settings for vector construction and geometric queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryConfig {
    /// Significant digits kept for square roots and quotients.
    pub precision: u64,

    /// A vector whose magnitude is below this value is treated as zero.
    pub zero_tolerance: f64,

    /// Decimal places angles are rounded to.
    pub angle_decimals: i32,

    /// Allowed distance in radians from π/2 for orthogonality.
    pub angle_tolerance: f64,
}

impl GeometryConfig {
    pub fn new() -> Self {
        Self {
            precision: 32,
            zero_tolerance: 1e-10,
            angle_decimals: 3,
            angle_tolerance: 1e-9,
        }
    }

    /// Set the significant digits; values below [`MIN_PRECISION`] are raised to it.
    pub fn with_precision(mut self, precision: u64) -> Self {
        self.precision = precision.max(MIN_PRECISION);
        self
    }

    pub fn with_zero_tolerance(mut self, tolerance: f64) -> Self {
        self.zero_tolerance = tolerance;
        self
    }

    /// Set the rounding places for angles, kept within `0..=MAX_ANGLE_DECIMALS`.
    pub fn with_angle_decimals(mut self, decimals: i32) -> Self {
        self.angle_decimals = decimals.clamp(0, MAX_ANGLE_DECIMALS);
        self
    }

    pub fn with_angle_tolerance(mut self, tolerance: f64) -> Self {
        self.angle_tolerance = tolerance;
        self
    }

    /// Pull fields set directly on the struct back into their valid ranges.
    pub(crate) fn clamped(self) -> Self {
        self.with_precision(self.precision)
            .with_angle_decimals(self.angle_decimals)
    }
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self::new()
    }
}
