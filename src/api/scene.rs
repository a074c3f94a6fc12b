use crate::api::ChartSurface;
use crate::core::{RealPoint, RealRect, ScreenPoint};
use crate::error::ChartResult;
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

const AXIS_ARROW_PX: f64 = 4.0;
const AXIS_LABEL_OFFSET_PX: f64 = 5.0;
const SELECTION_HANDLE_PX: f64 = 4.0;
const AXIS_STROKE_PX: f64 = 1.0;

enum AxisLabelSide {
    Below,
    Right,
}

/// Scene building: everything the rasterizer needs for one repaint.
impl ChartSurface {
    /// Builds the ordered draw-command sequence for the current state.
    ///
    /// The frame is empty while the surface is suspended. Command order is
    /// paint order: background, grid, objects Z-ascending, selection
    /// handles on top.
    pub fn build_frame(&self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.view.viewport());
        if self.suspended {
            return Ok(frame);
        }

        frame.push_rect(RectPrimitive::filled(
            0.0,
            0.0,
            f64::from(frame.viewport.width),
            f64::from(frame.viewport.height),
            self.background_color,
        ));

        if self.display_grid {
            self.push_grid(&mut frame);
        }

        for id in &self.draw_order {
            if let Some(record) = self.objects.get(id) {
                if record.object.is_visible() {
                    record.object.draw(&self.view, &mut frame);
                }
            }
        }

        if let Some(id) = self.selection {
            if let Some(bounds) = self
                .objects
                .get(&id)
                .and_then(|record| record.object.bounds(self.view.scale()))
            {
                self.push_selection_handles(&mut frame, bounds);
            }
        }

        frame.validate()?;
        Ok(frame)
    }

    /// Builds the current frame and hands it to `renderer`.
    pub fn render_into<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        let frame = self.build_frame()?;
        renderer.render(&frame)
    }

    /// Coordinate axes across the grid bounds, with an arrowhead at each
    /// positive end and the bound values as labels.
    fn push_grid(&self, frame: &mut RenderFrame) {
        let bounds = self.grid_bounds;

        let x_start = self.view.to_screen(RealPoint::new(bounds.min_x, 0.0));
        let x_end = self.view.to_screen(RealPoint::new(bounds.max_x, 0.0));
        self.push_axis_line(frame, x_start, x_end);
        self.push_axis_segment(frame, x_end, -AXIS_ARROW_PX, -AXIS_ARROW_PX);
        self.push_axis_segment(frame, x_end, -AXIS_ARROW_PX, AXIS_ARROW_PX);
        self.push_axis_label(frame, bounds.min_x, x_start, AxisLabelSide::Below);
        self.push_axis_label(frame, bounds.max_x, x_end, AxisLabelSide::Below);

        let y_start = self.view.to_screen(RealPoint::new(0.0, bounds.min_y));
        let y_end = self.view.to_screen(RealPoint::new(0.0, bounds.max_y));
        self.push_axis_line(frame, y_start, y_end);
        self.push_axis_segment(frame, y_end, -AXIS_ARROW_PX, AXIS_ARROW_PX);
        self.push_axis_segment(frame, y_end, AXIS_ARROW_PX, AXIS_ARROW_PX);
        self.push_axis_label(frame, bounds.min_y, y_start, AxisLabelSide::Right);
        self.push_axis_label(frame, bounds.max_y, y_end, AxisLabelSide::Right);
    }

    fn push_axis_line(&self, frame: &mut RenderFrame, from: ScreenPoint, to: ScreenPoint) {
        frame.push_line(LinePrimitive::new(
            from.x,
            from.y,
            to.x,
            to.y,
            AXIS_STROKE_PX,
            self.grid_color,
        ));
    }

    fn push_axis_segment(&self, frame: &mut RenderFrame, tip: ScreenPoint, dx: f64, dy: f64) {
        frame.push_line(LinePrimitive::new(
            tip.x,
            tip.y,
            tip.x + dx,
            tip.y + dy,
            AXIS_STROKE_PX,
            self.grid_color,
        ));
    }

    fn push_axis_label(
        &self,
        frame: &mut RenderFrame,
        value: f64,
        at: ScreenPoint,
        side: AxisLabelSide,
    ) {
        let (x, y, h_align) = match side {
            AxisLabelSide::Below => (at.x, at.y + AXIS_LABEL_OFFSET_PX, TextHAlign::Center),
            AxisLabelSide::Right => (at.x + AXIS_LABEL_OFFSET_PX, at.y, TextHAlign::Left),
        };
        frame.push_text(TextPrimitive::new(
            format!("{value}"),
            x,
            y,
            self.grid_font_size_px,
            self.grid_color,
            h_align,
        ));
    }

    /// Four black corner handles marking the selected object's bounds.
    fn push_selection_handles(&self, frame: &mut RenderFrame, bounds: RealRect) {
        let mut bottom_left = self
            .view
            .to_screen(RealPoint::new(bounds.x, bounds.y));
        let bottom_right = self
            .view
            .to_screen(RealPoint::new(bounds.x + bounds.width, bounds.y));
        let mut top_right = self
            .view
            .to_screen(RealPoint::new(bounds.x + bounds.width, bounds.y + bounds.height));
        let mut top_left = self
            .view
            .to_screen(RealPoint::new(bounds.x, bounds.y + bounds.height));

        bottom_left.x -= SELECTION_HANDLE_PX;
        top_right.y -= SELECTION_HANDLE_PX;
        top_left.x -= SELECTION_HANDLE_PX;
        top_left.y -= SELECTION_HANDLE_PX;

        for corner in [bottom_left, bottom_right, top_right, top_left] {
            frame.push_rect(RectPrimitive::filled(
                corner.x,
                corner.y,
                SELECTION_HANDLE_PX,
                SELECTION_HANDLE_PX,
                Color::BLACK,
            ));
        }
    }
}
