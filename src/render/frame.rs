use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    EllipsePrimitive, LinePrimitive, PolygonPrimitive, RectPrimitive, TextPrimitive,
};

/// One draw command in screen pixel coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line(LinePrimitive),
    Rect(RectPrimitive),
    Ellipse(EllipsePrimitive),
    Polygon(PolygonPrimitive),
    Text(TextPrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Line(line) => line.validate(),
            Self::Rect(rect) => rect.validate(),
            Self::Ellipse(ellipse) => ellipse.validate(),
            Self::Polygon(polygon) => polygon.validate(),
            Self::Text(text) => text.validate(),
        }
    }
}

/// Backend-agnostic scene for one draw pass.
///
/// Commands are ordered: the sequence is the Z-order, earlier commands are
/// painted first and later commands land on top.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    pub fn push_line(&mut self, line: LinePrimitive) {
        self.commands.push(DrawCommand::Line(line));
    }

    pub fn push_rect(&mut self, rect: RectPrimitive) {
        self.commands.push(DrawCommand::Rect(rect));
    }

    pub fn push_ellipse(&mut self, ellipse: EllipsePrimitive) {
        self.commands.push(DrawCommand::Ellipse(ellipse));
    }

    pub fn push_polygon(&mut self, polygon: PolygonPrimitive) {
        self.commands.push(DrawCommand::Polygon(polygon));
    }

    pub fn push_text(&mut self, text: TextPrimitive) {
        self.commands.push(DrawCommand::Text(text));
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    #[must_use]
    pub fn count_of(&self, kind: fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|command| kind(command)).count()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.count_of(|command| matches!(command, DrawCommand::Line(_)))
    }

    #[must_use]
    pub fn text_count(&self) -> usize {
        self.count_of(|command| matches!(command, DrawCommand::Text(_)))
    }
}
