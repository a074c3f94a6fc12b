use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::ScreenPoint;

/// Host-reported mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

/// Set of concurrently held mouse buttons.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PressedButtons {
    held: SmallVec<[MouseButton; 3]>,
}

impl PressedButtons {
    pub fn press(&mut self, button: MouseButton) {
        if !self.held.contains(&button) {
            self.held.push(button);
        }
    }

    pub fn release(&mut self, button: MouseButton) {
        self.held.retain(|held| *held != button);
    }

    #[must_use]
    pub fn contains(&self, button: MouseButton) -> bool {
        self.held.contains(&button)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

/// Which button drives which interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionBindings {
    pub move_button: MouseButton,
    pub select_button: MouseButton,
    pub unpin_button: MouseButton,
    pub set_center_button: MouseButton,
}

impl Default for InteractionBindings {
    fn default() -> Self {
        Self {
            move_button: MouseButton::Right,
            select_button: MouseButton::Left,
            unpin_button: MouseButton::Right,
            set_center_button: MouseButton::Right,
        }
    }
}

/// Per-surface interaction toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionBehavior {
    pub pan_enabled: bool,
    pub selection_enabled: bool,
    pub wheel_zoom_enabled: bool,
}

impl Default for InteractionBehavior {
    fn default() -> Self {
        Self {
            pan_enabled: true,
            selection_enabled: true,
            wheel_zoom_enabled: true,
        }
    }
}

/// Wheel-zoom stepping and clamping policy.
///
/// The step stays fixed at low zoom and switches to `scale / 10` above the
/// proportional threshold so zooming remains perceptually uniform. A change
/// that would drop the scale to or below the floor is rejected outright;
/// increases are clamped to the ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelZoomBehavior {
    pub base_step: f64,
    pub proportional_threshold: f64,
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Default for WheelZoomBehavior {
    fn default() -> Self {
        Self {
            base_step: 2.0,
            proportional_threshold: 50.0,
            min_scale: 2.5,
            max_scale: 700_000.0,
        }
    }
}

impl WheelZoomBehavior {
    #[must_use]
    pub fn step_for(self, scale: f64) -> f64 {
        if scale > self.proportional_threshold {
            scale / 10.0
        } else {
            self.base_step
        }
    }

    /// Applies one wheel notch to `scale`.
    ///
    /// Returns the new scale, or `None` when the change is rejected by the
    /// floor policy.
    #[must_use]
    pub fn apply(self, scale: f64, wheel_delta: f64) -> Option<f64> {
        let step = self.step_for(scale);
        let signed = if wheel_delta < 0.0 { -step } else { step };
        let next = scale + signed;
        if next <= self.min_scale {
            return None;
        }
        Some(next.min(self.max_scale))
    }
}

/// Mutable interaction bookkeeping between input events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionState {
    pub pressed: PressedButtons,
    pub pan_anchor: Option<ScreenPoint>,
}

/// Snaps a coordinate to the grid by ceiling division.
#[must_use]
pub fn snap_to_grid(value: f64, step: f64) -> f64 {
    (value / step).ceil() * step
}
