use serde::{Deserialize, Serialize};

use crate::core::{RealPoint, ScreenPoint, ViewTransform};

/// Derivative-magnitude ratio at which a sign flip stops counting as a smooth
/// turning point and is treated as a vertical asymptote instead.
pub const ASYMPTOTE_RATIO_THRESHOLD: f64 = 500.0;

/// Tuning for one sampling pass over a function plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleOptions {
    /// Draw half-infinite vertical segments to the viewport edges at genuine
    /// extrema instead of simply suppressing the connecting segment.
    pub extend_on_extremum: bool,
    /// Larger/smaller derivative ratio separating extrema from asymptotes.
    pub asymptote_ratio_threshold: f64,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            extend_on_extremum: false,
            asymptote_ratio_threshold: ASYMPTOTE_RATIO_THRESHOLD,
        }
    }
}

/// Classification of a suppressed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakKind {
    /// Derivative went positive to negative with a bounded magnitude ratio.
    Maximum,
    /// Derivative went negative to positive with a bounded magnitude ratio.
    Minimum,
    /// Sign flip whose magnitude ratio crossed the asymptote threshold.
    Asymptote,
}

/// One detected discontinuity in a sampling pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotBreak {
    /// Pixel column at which the flagged step landed.
    pub column: u32,
    /// Real x coordinate of that column.
    pub x: f64,
    pub kind: BreakKind,
}

/// Line segment to draw, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl PlotSegment {
    const fn between(from: ScreenPoint, to: ScreenPoint) -> Self {
        Self {
            x1: from.x,
            y1: from.y,
            x2: to.x,
            y2: to.y,
        }
    }
}

/// Output of one sampling pass: the segments to draw plus the breaks that
/// were detected, so callers can assert classification without rendering.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlotTrace {
    pub segments: Vec<PlotSegment>,
    pub breaks: Vec<PlotBreak>,
}

/// Samples `f` at one point per horizontal pixel column of the viewport and
/// emits the segments approximating its graph.
///
/// A sign flip of the discrete derivative between adjacent columns marks a
/// candidate extremum. The flip is a genuine extremum when the ratio of the
/// larger to the smaller derivative magnitude stays below the configured
/// threshold; otherwise the derivative is exploding across the step and the
/// flip is a vertical asymptote. The first flagged step of a run suppresses
/// its connecting segment (drawing it would paint a near-vertical line across
/// the viewport); consecutive flagged steps collapse into that first break.
/// With `extend_on_extremum` set, a genuine extremum instead contributes two
/// half-infinite vertical segments: for a maximum the current column extends
/// down to the bottom edge and the previous column hangs from the top edge;
/// a minimum mirrors the assignment.
///
/// Non-finite samples restart the walk: nothing is drawn for that column and
/// the derivative state is discarded.
pub fn sample_function(
    f: &dyn Fn(f64) -> f64,
    transform: &ViewTransform,
    options: SampleOptions,
) -> PlotTrace {
    let mut trace = PlotTrace::default();
    let viewport = transform.viewport();
    let dx = 1.0 / transform.scale();
    let bottom_edge = f64::from(viewport.height);

    let mut prev: Option<(ScreenPoint, f64)> = None;
    let mut prev_deriv: Option<f64> = None;
    let mut flagged_run: u32 = 0;

    for column in 0..viewport.width {
        let x = transform.to_real(ScreenPoint::new(f64::from(column), 0.0)).x;
        let y = f(x);
        if !y.is_finite() {
            prev = None;
            prev_deriv = None;
            flagged_run = 0;
            continue;
        }
        let screen = transform.to_screen(RealPoint::new(x, y));

        if let Some((prev_screen, prev_y)) = prev {
            let deriv = (y - prev_y) / dx;
            let mut draw_segment = true;

            match prev_deriv {
                Some(previous) if deriv * previous < 0.0 => {
                    if flagged_run == 0 {
                        draw_segment = false;
                        let magnitude = deriv.abs().max(previous.abs());
                        let ratio = magnitude / deriv.abs().min(previous.abs());
                        let kind = if ratio < options.asymptote_ratio_threshold {
                            if previous > 0.0 {
                                BreakKind::Maximum
                            } else {
                                BreakKind::Minimum
                            }
                        } else {
                            BreakKind::Asymptote
                        };
                        trace.breaks.push(PlotBreak { column, x, kind });

                        if options.extend_on_extremum {
                            match kind {
                                BreakKind::Maximum => {
                                    trace.segments.push(PlotSegment::between(
                                        screen,
                                        ScreenPoint::new(screen.x, bottom_edge),
                                    ));
                                    trace.segments.push(PlotSegment::between(
                                        ScreenPoint::new(prev_screen.x, 0.0),
                                        prev_screen,
                                    ));
                                }
                                BreakKind::Minimum => {
                                    trace.segments.push(PlotSegment::between(
                                        screen,
                                        ScreenPoint::new(screen.x, 0.0),
                                    ));
                                    trace.segments.push(PlotSegment::between(
                                        ScreenPoint::new(prev_screen.x, bottom_edge),
                                        prev_screen,
                                    ));
                                }
                                BreakKind::Asymptote => {}
                            }
                        }
                    }
                    flagged_run += 1;
                }
                _ => flagged_run = 0,
            }

            if draw_segment {
                trace.segments.push(PlotSegment::between(prev_screen, screen));
            }
            prev_deriv = Some(deriv);
        }

        prev = Some((screen, y));
    }

    trace
}
