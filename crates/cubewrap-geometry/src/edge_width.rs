//! Validated cube edge length in texels.

use std::fmt;

use crate::GeometryError;

/// Number of texels along one edge of a cube face.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeWidth(u32);

impl EdgeWidth {
    /// Smallest width that keeps the probe, band and midpoint texels apart.
    pub const MIN: u32 = 16;

    /// Width used for the shipped table.
    pub const REFERENCE: EdgeWidth = EdgeWidth(256);

    /// Validate a width.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EdgeTooSmall`] below [`EdgeWidth::MIN`].
    pub fn new(width: u32) -> Result<Self, GeometryError> {
        if width < Self::MIN {
            return Err(GeometryError::EdgeTooSmall {
                width,
                min: Self::MIN,
            });
        }
        Ok(Self(width))
    }

    /// Width in texels.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Width as `f64`, the type all mapping arithmetic uses.
    #[inline]
    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0)
    }

    /// Center of the texel range, `edge / 2`.
    #[must_use]
    pub fn midpoint(self) -> f64 {
        self.as_f64() * 0.5
    }

    /// Reduce a coordinate into `[-0.5, edge - 0.5)`.
    #[must_use]
    pub fn wrap(self, c: f64) -> f64 {
        let w = self.as_f64();
        (c + w + 0.5).rem_euclid(w) - 0.5
    }
}

impl Default for EdgeWidth {
    fn default() -> Self {
        Self::REFERENCE
    }
}

impl fmt::Display for EdgeWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_small_widths() {
        assert_eq!(
            EdgeWidth::new(8),
            Err(GeometryError::EdgeTooSmall { width: 8, min: 16 })
        );
        assert!(EdgeWidth::new(0).is_err());
        assert_eq!(EdgeWidth::new(16).unwrap().get(), 16);
    }

    #[test]
    fn test_default_is_reference_width() {
        assert_eq!(EdgeWidth::default().get(), 256);
        assert_eq!(EdgeWidth::default().midpoint(), 128.0);
    }

    #[test]
    fn test_wrap_overflowing_coordinates() {
        let w = EdgeWidth::REFERENCE;
        assert_eq!(w.wrap(257.0), 1.0);
        assert_eq!(w.wrap(-1.5), 254.5);
        assert_eq!(w.wrap(64.0), 64.0);
        assert_eq!(w.wrap(-0.5), -0.5);
        assert_eq!(w.wrap(255.5), -0.5);
    }
}
