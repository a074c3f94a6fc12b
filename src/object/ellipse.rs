use crate::core::{RealPoint, RealRect, RealSize, ViewTransform};
use crate::error::ChartResult;
use crate::object::ShapeStyle;
use crate::object::rectangle::validate_center_size;
use crate::render::{EllipsePrimitive, RenderFrame};

/// Axis-aligned ellipse inscribed in a center + size box.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEllipse {
    center: RealPoint,
    size: RealSize,
    pub style: ShapeStyle,
    pub visible: bool,
}

impl ChartEllipse {
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

    pub(crate) fn move_to(&mut self, point: RealPoint) {
        self.center = point;
    }

    /// Bounds are the inscribing box.
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
        let screen = transform.to_screen(self.center);
        let px = transform.to_screen_size(self.size);
        frame.push_ellipse(EllipsePrimitive {
            center_x: screen.x,
            center_y: screen.y,
            radius_x: px.width / 2.0,
            radius_y: px.height / 2.0,
            fill: self.style.fill,
            stroke: Some(self.style.stroke),
        });
    }
}
