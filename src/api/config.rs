use serde::{Deserialize, Serialize};

use crate::core::{RealPoint, Viewport, VisibleRect};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{InteractionBehavior, InteractionBindings, WheelZoomBehavior};
use crate::render::Color;

/// Extent of the displayed coordinate axes, in real coordinates.
///
/// Display-only: the grid never constrains the view transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Default for GridBounds {
    fn default() -> Self {
        Self {
            min_x: -10.0,
            max_x: 10.0,
            min_y: -10.0,
            max_y: 10.0,
        }
    }
}

impl GridBounds {
    #[must_use]
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.min_x.is_finite()
            || !self.max_x.is_finite()
            || !self.min_y.is_finite()
            || !self.max_y.is_finite()
        {
            return Err(ChartError::InvalidData(
                "grid bounds must be finite".to_owned(),
            ));
        }
        if self.min_x >= self.max_x || self.min_y >= self.max_y {
            return Err(ChartError::InvalidData(
                "grid bounds must satisfy min < max on both axes".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Surface bootstrap configuration.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    pub viewport: Viewport,
    /// Initial real-space region to fit; overrides `center`/`scale` when set.
    #[serde(default)]
    pub initial_visible_rect: Option<VisibleRect>,
    #[serde(default = "default_center")]
    pub center: RealPoint,
    #[serde(default = "default_scale")]
    pub scale: f64,
    #[serde(default)]
    pub bindings: InteractionBindings,
    #[serde(default)]
    pub behavior: InteractionBehavior,
    #[serde(default)]
    pub wheel_zoom: WheelZoomBehavior,
    /// Grid increment applied to pinned-object drags, in real units.
    #[serde(default = "default_snap_step")]
    pub snap_step: f64,
    #[serde(default = "default_display_grid")]
    pub display_grid: bool,
    #[serde(default)]
    pub grid_bounds: GridBounds,
    #[serde(default = "default_grid_color")]
    pub grid_color: Color,
    #[serde(default = "default_background_color")]
    pub background_color: Color,
    #[serde(default = "default_grid_font_size")]
    pub grid_font_size_px: f64,
}

impl SurfaceConfig {
    /// Creates a config with the classic defaults: gray grid over a white
    /// background, grid bounds ±10, and the startup view fitting
    /// (−11, 11)..(11, −11).
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            initial_visible_rect: Some(VisibleRect::new(-11.0, 11.0, 11.0, -11.0)),
            center: default_center(),
            scale: default_scale(),
            bindings: InteractionBindings::default(),
            behavior: InteractionBehavior::default(),
            wheel_zoom: WheelZoomBehavior::default(),
            snap_step: default_snap_step(),
            display_grid: default_display_grid(),
            grid_bounds: GridBounds::default(),
            grid_color: default_grid_color(),
            background_color: default_background_color(),
            grid_font_size_px: default_grid_font_size(),
        }
    }

    /// Starts from an explicit center and scale instead of a fitted rect.
    #[must_use]
    pub fn with_view(mut self, center: RealPoint, scale: f64) -> Self {
        self.initial_visible_rect = None;
        self.center = center;
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_bindings(mut self, bindings: InteractionBindings) -> Self {
        self.bindings = bindings;
        self
    }

    #[must_use]
    pub fn with_behavior(mut self, behavior: InteractionBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    #[must_use]
    pub fn with_wheel_zoom(mut self, wheel_zoom: WheelZoomBehavior) -> Self {
        self.wheel_zoom = wheel_zoom;
        self
    }

    #[must_use]
    pub fn with_snap_step(mut self, snap_step: f64) -> Self {
        self.snap_step = snap_step;
        self
    }

    #[must_use]
    pub fn with_grid_bounds(mut self, grid_bounds: GridBounds) -> Self {
        self.grid_bounds = grid_bounds;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if let Some(rect) = self.initial_visible_rect {
            rect.validate()?;
        }
        if !self.snap_step.is_finite() || self.snap_step <= 0.0 {
            return Err(ChartError::InvalidData(
                "snap step must be finite and > 0".to_owned(),
            ));
        }
        if !self.wheel_zoom.base_step.is_finite() || self.wheel_zoom.base_step <= 0.0 {
            return Err(ChartError::InvalidData(
                "wheel zoom base step must be finite and > 0".to_owned(),
            ));
        }
        if !(self.wheel_zoom.min_scale > 0.0)
            || !(self.wheel_zoom.max_scale > self.wheel_zoom.min_scale)
        {
            return Err(ChartError::InvalidData(
                "wheel zoom scale range must satisfy 0 < min < max".to_owned(),
            ));
        }
        if !self.grid_font_size_px.is_finite() || self.grid_font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "grid font size must be finite and > 0".to_owned(),
            ));
        }
        self.grid_bounds.validate()?;
        self.grid_color.validate()?;
        self.background_color.validate()
    }
}

fn default_center() -> RealPoint {
    RealPoint::new(0.0, 0.0)
}

fn default_scale() -> f64 {
    10.0
}

fn default_snap_step() -> f64 {
    1.0
}

fn default_display_grid() -> bool {
    true
}

fn default_grid_color() -> Color {
    Color::GRAY
}

fn default_background_color() -> Color {
    Color::WHITE
}

fn default_grid_font_size() -> f64 {
    13.0
}
