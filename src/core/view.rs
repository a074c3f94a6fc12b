use serde::{Deserialize, Serialize};

use crate::core::{RealPoint, RealSize, ScreenPoint, ScreenSize, Viewport};
use crate::error::{ChartError, ChartResult};

/// Bidirectional mapping between real (Y-up) and screen (Y-down) coordinates.
///
/// The transform is defined by the real point mapped to the screen center,
/// a uniform scale in pixels per real unit, and the viewport whose half
/// extents locate that screen center. `to_screen` and `to_real` are exact
/// inverses up to floating-point rounding for any valid transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    center: RealPoint,
    scale: f64,
    viewport: Viewport,
}

impl ViewTransform {
    pub fn new(center: RealPoint, scale: f64, viewport: Viewport) -> ChartResult<Self> {
        if !viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ChartError::InvalidScale { scale });
        }
        if !center.is_finite() {
            return Err(ChartError::InvalidData(
                "view center must be finite".to_owned(),
            ));
        }

        Ok(Self {
            center,
            scale,
            viewport,
        })
    }

    #[must_use]
    pub fn center(self) -> RealPoint {
        self.center
    }

    #[must_use]
    pub fn scale(self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn viewport(self) -> Viewport {
        self.viewport
    }

    pub fn with_center(self, center: RealPoint) -> ChartResult<Self> {
        Self::new(center, self.scale, self.viewport)
    }

    pub fn with_scale(self, scale: f64) -> ChartResult<Self> {
        Self::new(self.center, scale, self.viewport)
    }

    pub fn with_viewport(self, viewport: Viewport) -> ChartResult<Self> {
        Self::new(self.center, self.scale, viewport)
    }

    fn screen_center(self) -> (f64, f64) {
        (
            f64::from(self.viewport.width) / 2.0,
            f64::from(self.viewport.height) / 2.0,
        )
    }

    /// Maps a real point to screen pixels. Y flips direction.
    #[must_use]
    pub fn to_screen(self, real: RealPoint) -> ScreenPoint {
        let (cx, cy) = self.screen_center();
        ScreenPoint::new(
            cx - (self.center.x - real.x) * self.scale,
            cy + (self.center.y - real.y) * self.scale,
        )
    }

    /// Maps a screen pixel position back to real coordinates.
    #[must_use]
    pub fn to_real(self, screen: ScreenPoint) -> RealPoint {
        let (cx, cy) = self.screen_center();
        RealPoint::new(
            (screen.x - cx) / self.scale + self.center.x,
            self.center.y - (screen.y - cy) / self.scale,
        )
    }

    /// Scales a real extent to pixels. No translation is applied.
    #[must_use]
    pub fn to_screen_size(self, size: RealSize) -> ScreenSize {
        ScreenSize::new(size.width * self.scale, size.height * self.scale)
    }

    /// Scales a pixel extent to real units. No translation is applied.
    #[must_use]
    pub fn to_real_size(self, size: ScreenSize) -> RealSize {
        RealSize::new(size.width / self.scale, size.height / self.scale)
    }
}

/// Rectangular region of real space requested to be visible.
///
/// `top > bottom` and `right > left`: real coordinates are Y-up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisibleRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl VisibleRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.left.is_finite()
            || !self.top.is_finite()
            || !self.right.is_finite()
            || !self.bottom.is_finite()
        {
            return Err(ChartError::InvalidData(
                "visible rect bounds must be finite".to_owned(),
            ));
        }
        if self.right <= self.left || self.top <= self.bottom {
            return Err(ChartError::InvalidData(
                "visible rect must have positive width and height".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Computes the view center and scale that fit `rect` into `viewport`.
///
/// The center is the midpoint of the rect; the scale fits the tighter axis
/// (`min(width_ratio, height_ratio)`) so the aspect ratio is preserved and
/// the whole rect stays visible.
pub fn fit_visible_rect(viewport: Viewport, rect: VisibleRect) -> ChartResult<(RealPoint, f64)> {
    if !viewport.is_valid() {
        return Err(ChartError::InvalidViewport {
            width: viewport.width,
            height: viewport.height,
        });
    }
    rect.validate()?;

    let center = RealPoint::new(
        (rect.left + rect.right) / 2.0,
        (rect.top + rect.bottom) / 2.0,
    );
    let scale_x = f64::from(viewport.width) / (rect.right - rect.left);
    let scale_y = f64::from(viewport.height) / (rect.top - rect.bottom);
    Ok((center, scale_x.min(scale_y)))
}
