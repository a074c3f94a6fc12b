use crate::core::{RealPoint, RealRect, ViewTransform};
use crate::error::{ChartError, ChartResult};
use crate::object::ShapeStyle;
use crate::render::{PolygonPrimitive, RenderFrame};

/// Closed polygon over an ordered, non-empty vertex sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPolygon {
    vertices: Vec<RealPoint>,
    pub style: ShapeStyle,
    pub visible: bool,
}

impl ChartPolygon {
    pub fn new(vertices: Vec<RealPoint>) -> ChartResult<Self> {
        if vertices.is_empty() {
            return Err(ChartError::InvalidData(
                "polygon must have at least one vertex".to_owned(),
            ));
        }
        if vertices.iter().any(|vertex| !vertex.is_finite()) {
            return Err(ChartError::InvalidData(
                "polygon vertices must be finite".to_owned(),
            ));
        }
        Ok(Self {
            vertices,
            style: ShapeStyle::default(),
            visible: true,
        })
    }

    #[must_use]
    pub fn vertices(&self) -> &[RealPoint] {
        &self.vertices
    }

    /// Arithmetic mean of the vertices.
    #[must_use]
    pub fn centroid(&self) -> RealPoint {
        let count = self.vertices.len() as f64;
        let (sum_x, sum_y) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(sx, sy), v| (sx + v.x, sy + v.y));
        RealPoint::new(sum_x / count, sum_y / count)
    }

    /// Translates every vertex by the delta between `point` and the centroid.
    pub(crate) fn move_to(&mut self, point: RealPoint) {
        let centroid = self.centroid();
        let dx = point.x - centroid.x;
        let dy = point.y - centroid.y;
        for vertex in &mut self.vertices {
            vertex.x += dx;
            vertex.y += dy;
        }
    }

    /// Min/max extrema over all vertices.
    #[must_use]
    pub fn bounds(&self) -> RealRect {
        let mut min_x = f64::INFINITY;
        let mut min_y = f64::INFINITY;
        let mut max_x = f64::NEG_INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for vertex in &self.vertices {
            min_x = min_x.min(vertex.x);
            min_y = min_y.min(vertex.y);
            max_x = max_x.max(vertex.x);
            max_y = max_y.max(vertex.y);
        }
        RealRect::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    pub(crate) fn draw(&self, transform: &ViewTransform, frame: &mut RenderFrame) {
        let points = self
            .vertices
            .iter()
            .map(|vertex| {
                let screen = transform.to_screen(*vertex);
                (screen.x, screen.y)
            })
            .collect();
        frame.push_polygon(PolygonPrimitive {
            points,
            fill: self.style.fill,
            stroke: Some(self.style.stroke),
        });
    }
}
