//! # Fill Parameters
//!
//! How a sprite is laid into its rect: image type, partial fill settings and
//! 9-slice anchoring. Supplied by the host's configuration surface.

use crate::error::{MeshError, MeshResult};
use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// How the sprite covers the rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ImageType {
    /// One quad, the whole sprite stretched over the rect.
    #[default]
    Simple,
    /// 9-slice: corners keep their size, edges and center stretch.
    Sliced,
    /// 9-slice with the interior repeated instead of stretched.
    Tiled,
    /// Partially drawn according to a fill method and amount.
    Filled,
}

/// Directional algorithm used by [`ImageType::Filled`].
///
/// Meaning of `fill_origin` per method:
///
/// | Method     | 0      | 1     | 2     | 3      |
/// |------------|--------|-------|-------|--------|
/// | Horizontal | left   | right |       |        |
/// | Vertical   | bottom | top   |       |        |
/// | Radial90   | bottom-left | top-left | top-right | bottom-right |
/// | Radial180  | bottom | left  | top   | right  |
/// | Radial360  | bottom | right | top   | left   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FillMethod {
    Horizontal,
    Vertical,
    Radial90,
    Radial180,
    #[default]
    Radial360,
}

bitflags! {
    /// Sides of a sliced image whose inner boundary is pinned to the center.
    ///
    /// Opposing bits (`UPPER`/`LOWER`, `LEFT`/`RIGHT`) may be combined but
    /// hosts normally set at most one per axis.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct SlicedAnchor: u8 {
        const UPPER = 1 << 0;
        const LOWER = 1 << 1;
        const LEFT = 1 << 2;
        const RIGHT = 1 << 3;
    }
}

/// Fill and slice parameters of one image.
///
/// Defaults match a freshly created image: simple, full radial 360 fill
/// from the bottom, clockwise, center drawn.
///
/// # Example
///
/// ```rust
/// use sprite_mesh::{FillMethod, FillParameters, ImageType};
///
/// let params = FillParameters::filled(FillMethod::Horizontal, 0.5).with_origin(1);
/// assert_eq!(params.image_type, ImageType::Filled);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillParameters {
    pub image_type: ImageType,
    pub fill_method: FillMethod,
    /// Start corner or edge, see [`FillMethod`].
    pub fill_origin: u8,
    /// Fraction of the image drawn, in [0, 1].
    pub fill_amount: f64,
    pub fill_clockwise: bool,
    /// Sweep by true geometric angle instead of one warped to the rect.
    pub fill_keep_angle: bool,
    /// Draw the center cell of sliced and tiled images.
    pub fill_center: bool,
    pub preserve_aspect: bool,
    pub sliced_anchor: SlicedAnchor,
    /// Carried for hosts; no geometry reads it yet.
    pub sliced_keep_inner: bool,
}

impl Default for FillParameters {
    fn default() -> Self {
        Self {
            image_type: ImageType::Simple,
            fill_method: FillMethod::Radial360,
            fill_origin: 0,
            fill_amount: 1.0,
            fill_clockwise: true,
            fill_keep_angle: false,
            fill_center: true,
            preserve_aspect: false,
            sliced_anchor: SlicedAnchor::empty(),
            sliced_keep_inner: false,
        }
    }
}

impl FillParameters {
    /// Simple image parameters.
    pub fn simple() -> Self {
        Self::default()
    }

    /// Sliced image parameters.
    pub fn sliced() -> Self {
        Self {
            image_type: ImageType::Sliced,
            ..Self::default()
        }
    }

    /// Tiled image parameters.
    pub fn tiled() -> Self {
        Self {
            image_type: ImageType::Tiled,
            ..Self::default()
        }
    }

    /// Filled image parameters for `method` at `amount`.
    pub fn filled(method: FillMethod, amount: f64) -> Self {
        Self {
            image_type: ImageType::Filled,
            fill_method: method,
            fill_amount: amount,
            ..Self::default()
        }
    }

    pub fn with_origin(mut self, origin: u8) -> Self {
        self.fill_origin = origin;
        self
    }

    pub fn with_clockwise(mut self, clockwise: bool) -> Self {
        self.fill_clockwise = clockwise;
        self
    }

    pub fn with_keep_angle(mut self, keep_angle: bool) -> Self {
        self.fill_keep_angle = keep_angle;
        self
    }

    pub fn with_fill_center(mut self, fill_center: bool) -> Self {
        self.fill_center = fill_center;
        self
    }

    pub fn with_preserve_aspect(mut self, preserve_aspect: bool) -> Self {
        self.preserve_aspect = preserve_aspect;
        self
    }

    pub fn with_anchor(mut self, anchor: SlicedAnchor) -> Self {
        self.sliced_anchor = anchor;
        self
    }

    /// Fill amount clamped into [0, 1].
    #[inline]
    pub fn clamped_amount(&self) -> f64 {
        self.fill_amount.clamp(0.0, 1.0)
    }

    /// Checks the values a host is expected to keep in range.
    pub fn validate(&self) -> MeshResult<()> {
        if self.fill_origin > 3 {
            return Err(MeshError::InvalidFillOrigin {
                origin: self.fill_origin,
            });
        }
        if !self.fill_amount.is_finite() {
            return Err(MeshError::InvalidFillAmount {
                amount: self.fill_amount,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = FillParameters::default();
        assert_eq!(params.image_type, ImageType::Simple);
        assert_eq!(params.fill_method, FillMethod::Radial360);
        assert_eq!(params.fill_amount, 1.0);
        assert!(params.fill_clockwise);
        assert!(params.fill_center);
        assert!(params.sliced_anchor.is_empty());
    }

    #[test]
    fn test_validate_origin() {
        let params = FillParameters::filled(FillMethod::Radial90, 0.5).with_origin(4);
        assert_eq!(
            params.validate(),
            Err(MeshError::InvalidFillOrigin { origin: 4 })
        );
    }

    #[test]
    fn test_validate_amount() {
        let params = FillParameters::filled(FillMethod::Vertical, f64::NAN);
        assert!(matches!(
            params.validate(),
            Err(MeshError::InvalidFillAmount { .. })
        ));
        // Out-of-range but finite amounts are clamped, not rejected
        assert!(FillParameters::filled(FillMethod::Vertical, 1.5).validate().is_ok());
    }

    #[test]
    fn test_clamped_amount() {
        assert_eq!(FillParameters::filled(FillMethod::Vertical, -0.5).clamped_amount(), 0.0);
        assert_eq!(FillParameters::filled(FillMethod::Vertical, 2.0).clamped_amount(), 1.0);
    }

    #[test]
    fn test_anchor_combinations() {
        let anchor = SlicedAnchor::UPPER | SlicedAnchor::LEFT;
        assert!(anchor.contains(SlicedAnchor::UPPER));
        assert!(!anchor.contains(SlicedAnchor::LOWER));
        assert_eq!(anchor.bits(), 0b0101);
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let params: FillParameters = serde_json::from_str(
            r#"{ "image_type": "Filled", "fill_method": "Radial90", "fill_amount": 0.25 }"#,
        )
        .unwrap();
        assert_eq!(params.image_type, ImageType::Filled);
        assert_eq!(params.fill_method, FillMethod::Radial90);
        assert_eq!(params.fill_amount, 0.25);
        assert!(params.fill_clockwise);
        assert_eq!(params.fill_origin, 0);
    }

    #[test]
    fn test_deserialize_anchor_flags() {
        let params: FillParameters =
            serde_json::from_str(r#"{ "image_type": "Sliced", "sliced_anchor": "UPPER | RIGHT" }"#)
                .unwrap();
        assert_eq!(params.sliced_anchor, SlicedAnchor::UPPER | SlicedAnchor::RIGHT);
    }
}
