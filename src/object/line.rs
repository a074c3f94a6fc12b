use crate::core::{RealPoint, RealRect, ViewTransform};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, LinePrimitive, RenderFrame, StrokeStyle};

/// Straight segment between two real points.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLine {
    begin: RealPoint,
    end: RealPoint,
    pub stroke: StrokeStyle,
    pub visible: bool,
}

impl ChartLine {
    pub fn new(begin: RealPoint, end: RealPoint) -> ChartResult<Self> {
        if !begin.is_finite() || !end.is_finite() {
            return Err(ChartError::InvalidData(
                "line endpoints must be finite".to_owned(),
            ));
        }
        Ok(Self {
            begin,
            end,
            stroke: StrokeStyle::new(1.0, Color::BLACK),
            visible: true,
        })
    }

    #[must_use]
    pub fn begin(&self) -> RealPoint {
        self.begin
    }

    #[must_use]
    pub fn end(&self) -> RealPoint {
        self.end
    }

    pub fn set_endpoints(&mut self, begin: RealPoint, end: RealPoint) -> ChartResult<()> {
        if !begin.is_finite() || !end.is_finite() {
            return Err(ChartError::InvalidData(
                "line endpoints must be finite".to_owned(),
            ));
        }
        self.begin = begin;
        self.end = end;
        Ok(())
    }

    /// Midpoint between the endpoints.
    #[must_use]
    pub fn center(&self) -> RealPoint {
        RealPoint::new(
            (self.begin.x + self.end.x) / 2.0,
            (self.begin.y + self.end.y) / 2.0,
        )
    }

    pub(crate) fn move_to(&mut self, point: RealPoint) {
        let center = self.center();
        let dx = point.x - center.x;
        let dy = point.y - center.y;
        self.begin = RealPoint::new(self.begin.x + dx, self.begin.y + dy);
        self.end = RealPoint::new(self.end.x + dx, self.end.y + dy);
    }

    /// Endpoint bounding box; degenerate extents are legal.
    #[must_use]
    pub fn bounds(&self) -> RealRect {
        let min_x = self.begin.x.min(self.end.x);
        let min_y = self.begin.y.min(self.end.y);
        RealRect::new(
            min_x,
            min_y,
            (self.begin.x - self.end.x).abs(),
            (self.begin.y - self.end.y).abs(),
        )
    }

    pub(crate) fn draw(&self, transform: &ViewTransform, frame: &mut RenderFrame) {
        let from = transform.to_screen(self.begin);
        let to = transform.to_screen(self.end);
        frame.push_line(LinePrimitive::new(
            from.x,
            from.y,
            to.x,
            to.y,
            self.stroke.width,
            self.stroke.color,
        ));
    }
}
