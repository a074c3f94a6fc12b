use tracing::debug;

use crate::api::ChartSurface;
use crate::core::{RealPoint, ScreenPoint, Viewport};
use crate::error::ChartResult;
use crate::interaction::{MouseButton, snap_to_grid};

/// Input event handlers.
///
/// The host forwards raw mouse and resize notifications; the surface decides
/// whether they mutate view state (pan/zoom/recenter) or delegate to the
/// object model (select, drag the pinned object).
impl ChartSurface {
    pub fn on_mouse_down(&mut self, button: MouseButton, location: ScreenPoint) {
        self.interaction.pressed.press(button);
        if button == self.bindings.move_button {
            self.interaction.pan_anchor = Some(location);
        }
        if button == self.bindings.select_button && self.behavior.selection_enabled {
            self.try_select_object(location);
        }
        if button == self.bindings.unpin_button && self.pinned.is_some() {
            self.clear_pin();
        }
    }

    pub fn on_mouse_up(&mut self, button: MouseButton) {
        self.interaction.pressed.release(button);
        if button == self.bindings.move_button {
            self.interaction.pan_anchor = None;
        }
    }

    pub fn on_mouse_move(&mut self, location: ScreenPoint) -> ChartResult<()> {
        if let Some(id) = self.pinned {
            let real = self.view.to_real(location);
            let snapped = RealPoint::new(
                snap_to_grid(real.x, self.snap_step),
                snap_to_grid(real.y, self.snap_step),
            );
            if let Some(record) = self.objects.get_mut(&id) {
                record.object.move_to(snapped)?;
                self.request_repaint();
            }
        }

        if self.behavior.pan_enabled && self.interaction.pressed.contains(self.bindings.move_button)
        {
            if let Some(anchor) = self.interaction.pan_anchor {
                let dx = location.x - anchor.x;
                let dy = location.y - anchor.y;
                self.interaction.pan_anchor = Some(location);
                let center = self.view.center();
                let scale = self.view.scale();
                // Screen Y grows downward, real Y upward.
                self.set_center(RealPoint::new(
                    center.x - dx / scale,
                    center.y + dy / scale,
                ))?;
            }
        }

        Ok(())
    }

    /// One wheel notch; positive `wheel_delta` zooms in.
    pub fn on_mouse_wheel(&mut self, wheel_delta: f64) -> ChartResult<()> {
        if !self.behavior.wheel_zoom_enabled {
            return Ok(());
        }
        let scale = self.view.scale();
        match self.wheel_zoom.apply(scale, wheel_delta) {
            Some(next) => self.set_scale(next),
            None => {
                debug!(scale, wheel_delta, "wheel zoom rejected by scale floor");
                Ok(())
            }
        }
    }

    pub fn on_double_click(&mut self, button: MouseButton, location: ScreenPoint) -> ChartResult<()> {
        if button == self.bindings.set_center_button && self.behavior.pan_enabled {
            let real = self.view.to_real(location);
            self.set_center(real)?;
        }
        Ok(())
    }

    /// A resize shifts the mapped screen origin without changing any real
    /// coordinate content, so the scene must still be repainted.
    pub fn on_resize(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.view = self.view.with_viewport(viewport)?;
        self.request_repaint();
        Ok(())
    }

    /// Hit-tests topmost-first and selects the first object whose bounds
    /// contain the click. The selection is left unchanged when nothing is
    /// hit.
    fn try_select_object(&mut self, location: ScreenPoint) {
        let real = self.view.to_real(location);
        let scale = self.view.scale();
        let hit = self.draw_order.iter().rev().copied().find(|id| {
            self.objects
                .get(id)
                .and_then(|record| record.object.bounds(scale))
                .is_some_and(|bounds| bounds.contains(real))
        });
        if let Some(id) = hit {
            self.set_selection(Some(id));
        }
    }
}
