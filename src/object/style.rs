use crate::render::{Color, StrokeStyle};

/// Outline and optional fill shared by the outlined shape variants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub stroke: StrokeStyle,
    pub fill: Option<Color>,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle::new(1.0, Color::BLACK),
            fill: None,
        }
    }
}

impl ShapeStyle {
    #[must_use]
    pub const fn stroked(width: f64, color: Color) -> Self {
        Self {
            stroke: StrokeStyle::new(width, color),
            fill: None,
        }
    }

    #[must_use]
    pub const fn with_fill(mut self, fill: Color) -> Self {
        self.fill = Some(fill);
        self
    }
}
