//! Box dimension validation and normalization.

use thiserror::Error;

/// Error produced when a raw box dimension is unusable.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
#[error("invalid {axis} dimension {value}: must be a positive, finite number")]
pub struct InvalidDimension {
    /// Which axis was rejected (`"width"`, `"height"` or `"depth"`).
    pub axis: &'static str,
    /// The offending value as supplied.
    pub value: f64,
}

/// Real-world box dimensions in one consistent unit (e.g. meters).
///
/// Constructed only through [`BoxDimensions::new`], so every held value is
/// positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxDimensions {
    /// Extent along the X axis.
    pub width: f64,
    /// Extent along the Y axis.
    pub height: f64,
    /// Extent along the Z axis.
    pub depth: f64,
}

impl BoxDimensions {
    /// Validate raw dimensions.
    pub fn new(width: f64, height: f64, depth: f64) -> Result<Self, InvalidDimension> {
        for (axis, value) in [("width", width), ("height", height), ("depth", depth)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(InvalidDimension { axis, value });
            }
        }
        Ok(Self {
            width,
            height,
            depth,
        })
    }

    /// Canonical aspect model: the same proportions rescaled so the largest
    /// axis is 1.0. Layout consumes only ratios, never absolute units.
    pub fn normalized(&self) -> Self {
        let max = self.width.max(self.height).max(self.depth);
        Self {
            width: self.width / max,
            height: self.height / max,
            depth: self.depth / max,
        }
    }
}
