use crate::core::{RealPoint, RealRect, RealSize, ViewTransform};
use crate::error::{ChartError, ChartResult};
use crate::object::ShapeStyle;
use crate::render::{RectPrimitive, RenderFrame};

/// Axis-aligned rectangle described by its center and real-unit size.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRectangle {
    center: RealPoint,
    size: RealSize,
    pub style: ShapeStyle,
    pub visible: bool,
}

impl ChartRectangle {
    pub fn new(center: RealPoint, size: RealSize) -> ChartResult<Self> {
        validate_center_size(center, size)?;
        Ok(Self {
            center,
            size,
            style: ShapeStyle::default(),
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

    pub fn set_size(&mut self, size: RealSize) -> ChartResult<()> {
        validate_center_size(self.center, size)?;
        self.size = size;
        Ok(())
    }

    /// Recenters the rectangle: the lower-left corner becomes
    /// `point - size / 2`.
    pub(crate) fn move_to(&mut self, point: RealPoint) {
        self.center = point;
    }

    #[must_use]
    pub fn bounds(&self) -> RealRect {
        RealRect::new(
            self.center.x - self.size.width / 2.0,
            self.center.y - self.size.height / 2.0,
            self.size.width,
            self.size.height,
        )
    }

    pub(crate) fn draw(&self, transform: &ViewTransform, frame: &mut RenderFrame) {
        // Screen top-left corresponds to the real upper-left corner.
        let top_left = transform.to_screen(RealPoint::new(
            self.center.x - self.size.width / 2.0,
            self.center.y + self.size.height / 2.0,
        ));
        let px = transform.to_screen_size(self.size);
        frame.push_rect(RectPrimitive {
            x: top_left.x,
            y: top_left.y,
            width: px.width,
            height: px.height,
            fill: self.style.fill,
            stroke: Some(self.style.stroke),
        });
    }
}

pub(super) fn validate_center_size(center: RealPoint, size: RealSize) -> ChartResult<()> {
    if !center.is_finite() {
        return Err(ChartError::InvalidData(
            "shape center must be finite".to_owned(),
        ));
    }
    if !size.is_finite() || size.width <= 0.0 || size.height <= 0.0 {
        return Err(ChartError::InvalidData(
            "shape size must be finite and > 0".to_owned(),
        ));
    }
    Ok(())
}
