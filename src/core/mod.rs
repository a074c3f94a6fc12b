pub mod geometry;
pub mod sampler;
pub mod view;

pub use geometry::{RealPoint, RealRect, RealSize, ScreenPoint, ScreenSize, Viewport};
pub use sampler::{
    ASYMPTOTE_RATIO_THRESHOLD, BreakKind, PlotBreak, PlotSegment, PlotTrace, SampleOptions,
    sample_function,
};
pub use view::{ViewTransform, VisibleRect, fit_visible_rect};
