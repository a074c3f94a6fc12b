//! Chart object model.
//!
//! Objects are a sum type over concrete shapes; what an object *can do*
//! (report bounds for selection, be recentered by the pointer) is determined
//! by its variant, not by runtime flags. The only runtime flag is
//! visibility.

mod ellipse;
mod function_plot;
mod line;
mod point;
mod polygon;
mod rectangle;
mod style;

pub use ellipse::ChartEllipse;
pub use function_plot::{FunctionPlot, PlotFn};
pub use line::ChartLine;
pub use point::{ChartPoint, PointSizeMode};
pub use polygon::ChartPolygon;
pub use rectangle::ChartRectangle;
pub use style::ShapeStyle;

use serde::{Deserialize, Serialize};

use crate::core::{RealPoint, RealRect, ViewTransform};
use crate::error::{ChartError, ChartResult};
use crate::render::RenderFrame;

/// Shape discriminant, used by snapshots and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObjectKind {
    Point,
    Line,
    Rectangle,
    Ellipse,
    Polygon,
    FunctionPlot,
}

impl ObjectKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Line => "line",
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
            Self::Polygon => "polygon",
            Self::FunctionPlot => "function plot",
        }
    }
}

/// One drawable object owned by a chart surface.
#[derive(Debug, Clone)]
pub enum ChartObject {
    Point(ChartPoint),
    Line(ChartLine),
    Rectangle(ChartRectangle),
    Ellipse(ChartEllipse),
    Polygon(ChartPolygon),
    FunctionPlot(FunctionPlot),
}

impl ChartObject {
    #[must_use]
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Point(_) => ObjectKind::Point,
            Self::Line(_) => ObjectKind::Line,
            Self::Rectangle(_) => ObjectKind::Rectangle,
            Self::Ellipse(_) => ObjectKind::Ellipse,
            Self::Polygon(_) => ObjectKind::Polygon,
            Self::FunctionPlot(_) => ObjectKind::FunctionPlot,
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        match self {
            Self::Point(point) => point.visible,
            Self::Line(line) => line.visible,
            Self::Rectangle(rectangle) => rectangle.visible,
            Self::Ellipse(ellipse) => ellipse.visible,
            Self::Polygon(polygon) => polygon.visible,
            Self::FunctionPlot(plot) => plot.visible,
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        match self {
            Self::Point(point) => point.visible = visible,
            Self::Line(line) => line.visible = visible,
            Self::Rectangle(rectangle) => rectangle.visible = visible,
            Self::Ellipse(ellipse) => ellipse.visible = visible,
            Self::Polygon(polygon) => polygon.visible = visible,
            Self::FunctionPlot(plot) => plot.visible = visible,
        }
    }

    /// Axis-aligned real-coordinate bounds, or `None` for variants that
    /// cannot be selected. `scale` resolves screen-pixel point footprints.
    #[must_use]
    pub fn bounds(&self, scale: f64) -> Option<RealRect> {
        match self {
            Self::Point(point) => Some(point.bounds(scale)),
            Self::Line(line) => Some(line.bounds()),
            Self::Rectangle(rectangle) => Some(rectangle.bounds()),
            Self::Ellipse(ellipse) => Some(ellipse.bounds()),
            Self::Polygon(polygon) => Some(polygon.bounds()),
            Self::FunctionPlot(_) => None,
        }
    }

    #[must_use]
    pub fn is_selectable(&self) -> bool {
        !matches!(self, Self::FunctionPlot(_))
    }

    #[must_use]
    pub fn is_movable(&self) -> bool {
        !matches!(self, Self::FunctionPlot(_))
    }

    /// Center point the movable variants reposition around.
    #[must_use]
    pub fn center(&self) -> Option<RealPoint> {
        match self {
            Self::Point(point) => Some(point.center()),
            Self::Line(line) => Some(line.center()),
            Self::Rectangle(rectangle) => Some(rectangle.center()),
            Self::Ellipse(ellipse) => Some(ellipse.center()),
            Self::Polygon(polygon) => Some(polygon.centroid()),
            Self::FunctionPlot(_) => None,
        }
    }

    /// Repositions the object so its center lands on `point`.
    pub fn move_to(&mut self, point: RealPoint) -> ChartResult<()> {
        if !point.is_finite() {
            return Err(ChartError::InvalidData(
                "move target must be finite".to_owned(),
            ));
        }
        match self {
            Self::Point(chart_point) => chart_point.move_to(point),
            Self::Line(line) => line.move_to(point),
            Self::Rectangle(rectangle) => rectangle.move_to(point),
            Self::Ellipse(ellipse) => ellipse.move_to(point),
            Self::Polygon(polygon) => polygon.move_to(point),
            Self::FunctionPlot(_) => {
                return Err(ChartError::CapabilityRejected {
                    operation: "move_to",
                    kind: ObjectKind::FunctionPlot.as_str(),
                });
            }
        }
        Ok(())
    }

    /// Emits this object's draw commands. Visibility is the caller's check.
    pub fn draw(&self, transform: &ViewTransform, frame: &mut RenderFrame) {
        match self {
            Self::Point(point) => point.draw(transform, frame),
            Self::Line(line) => line.draw(transform, frame),
            Self::Rectangle(rectangle) => rectangle.draw(transform, frame),
            Self::Ellipse(ellipse) => ellipse.draw(transform, frame),
            Self::Polygon(polygon) => polygon.draw(transform, frame),
            Self::FunctionPlot(plot) => plot.draw(transform, frame),
        }
    }
}
