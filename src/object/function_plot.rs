use std::fmt;
use std::sync::Arc;

use crate::core::{PlotTrace, SampleOptions, ViewTransform, sample_function};
use crate::render::{Color, LinePrimitive, RenderFrame, StrokeStyle};

/// Scalar function sampled by a plot object.
pub type PlotFn = Arc<dyn Fn(f64) -> f64 + Send + Sync + 'static>;

/// Graph of a pure scalar function, resampled on every draw pass.
///
/// Visible-only: function plots expose no bounds and cannot be selected or
/// moved.
#[derive(Clone)]
pub struct FunctionPlot {
    function: PlotFn,
    pub options: SampleOptions,
    pub stroke: StrokeStyle,
    pub visible: bool,
}

impl FunctionPlot {
    pub fn new(function: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self {
            function: Arc::new(function),
            options: SampleOptions::default(),
            stroke: StrokeStyle::new(1.0, Color::BLACK),
            visible: true,
        }
    }

    /// Runs one sampling pass over the currently visible horizontal span.
    #[must_use]
    pub fn sample(&self, transform: &ViewTransform) -> PlotTrace {
        sample_function(self.function.as_ref(), transform, self.options)
    }

    pub(crate) fn draw(&self, transform: &ViewTransform, frame: &mut RenderFrame) {
        let trace = self.sample(transform);
        for segment in trace.segments {
            frame.push_line(LinePrimitive::new(
                segment.x1,
                segment.y1,
                segment.x2,
                segment.y2,
                self.stroke.width,
                self.stroke.color,
            ));
        }
    }
}

impl fmt::Debug for FunctionPlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionPlot")
            .field("options", &self.options)
            .field("stroke", &self.stroke)
            .field("visible", &self.visible)
            .finish_non_exhaustive()
    }
}
