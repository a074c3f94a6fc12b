use serde::{Deserialize, Serialize};

use crate::core::{RealPoint, RealRect, RealSize, ScreenSize, ViewTransform};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RectPrimitive, RenderFrame};

/// Units of a point marker's footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PointSizeMode {
    /// Fixed pixel footprint: the real-space bounds shrink as zoom grows.
    ScreenPixels,
    /// Real-unit footprint: the pixel footprint grows with zoom.
    RealUnits,
}

/// Square marker drawn centered on a real point.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    center: RealPoint,
    size: RealSize,
    size_mode: PointSizeMode,
    pub color: Color,
    pub visible: bool,
}

impl ChartPoint {
    /// Creates a marker with the default 8×8 px red footprint.
    pub fn new(center: RealPoint) -> ChartResult<Self> {
        if !center.is_finite() {
            return Err(ChartError::InvalidData(
                "point center must be finite".to_owned(),
            ));
        }
        Ok(Self {
            center,
            size: RealSize::new(8.0, 8.0),
            size_mode: PointSizeMode::ScreenPixels,
            color: Color::RED,
            visible: true,
        })
    }

    #[must_use]
    pub fn center(&self) -> RealPoint {
        self.center
    }

    #[must_use]
    pub fn size(&self) -> RealSize {
        self.size
    }

    #[must_use]
    pub fn size_mode(&self) -> PointSizeMode {
        self.size_mode
    }

    pub fn set_size(&mut self, size: RealSize, mode: PointSizeMode) -> ChartResult<()> {
        if !size.is_finite() || size.width <= 0.0 || size.height <= 0.0 {
            return Err(ChartError::InvalidData(
                "point size must be finite and > 0".to_owned(),
            ));
        }
        self.size = size;
        self.size_mode = mode;
        Ok(())
    }

    pub(crate) fn move_to(&mut self, point: RealPoint) {
        self.center = point;
    }

    /// Real-space bounds; in pixel mode the footprint divides by `scale`.
    #[must_use]
    pub fn bounds(&self, scale: f64) -> RealRect {
        let real = match self.size_mode {
            PointSizeMode::ScreenPixels => {
                RealSize::new(self.size.width / scale, self.size.height / scale)
            }
            PointSizeMode::RealUnits => self.size,
        };
        RealRect::new(
            self.center.x - real.width / 2.0,
            self.center.y - real.height / 2.0,
            real.width,
            real.height,
        )
    }

    pub(crate) fn draw(&self, transform: &ViewTransform, frame: &mut RenderFrame) {
        let screen = transform.to_screen(self.center);
        let px = match self.size_mode {
            PointSizeMode::ScreenPixels => ScreenSize::new(self.size.width, self.size.height),
            PointSizeMode::RealUnits => transform.to_screen_size(self.size),
        };
        frame.push_rect(RectPrimitive::filled(
            screen.x - px.width / 2.0,
            screen.y - px.height / 2.0,
            px.width,
            px.height,
            self.color,
        ));
    }
}
