use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::api::{GridBounds, SurfaceConfig};
use crate::core::{RealPoint, ViewTransform, Viewport, VisibleRect, fit_visible_rect};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{
    InteractionBehavior, InteractionBindings, InteractionState, WheelZoomBehavior,
};
use crate::object::ChartObject;
use crate::render::Color;

/// Stable handle to an object owned by a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Notification drained by the host via `take_events`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceEvent {
    SelectionChanged {
        previous: Option<ObjectId>,
        current: Option<ObjectId>,
    },
}

#[derive(Debug)]
pub(super) struct ObjectRecord {
    pub(super) object: ChartObject,
    pub(super) z_index: i32,
    pub(super) seq: u64,
}

/// The chart surface: object collection, view state, selection/pin state,
/// and the mouse-driven interaction state machine.
///
/// All mutation happens on the host's control thread; there is no internal
/// concurrency. Visible state changes set a pending-repaint flag (coalesced,
/// gated by `suspended`) that the host drains with `take_repaint_request`.
#[derive(Debug)]
pub struct ChartSurface {
    pub(super) view: ViewTransform,
    pub(super) objects: IndexMap<ObjectId, ObjectRecord>,
    pub(super) draw_order: Vec<ObjectId>,
    next_seq: u64,
    pub(super) grid_bounds: GridBounds,
    pub(super) display_grid: bool,
    pub(super) grid_color: Color,
    pub(super) background_color: Color,
    pub(super) grid_font_size_px: f64,
    pub(super) bindings: InteractionBindings,
    pub(super) behavior: InteractionBehavior,
    pub(super) wheel_zoom: WheelZoomBehavior,
    pub(super) snap_step: f64,
    pub(super) selection: Option<ObjectId>,
    pub(super) pinned: Option<ObjectId>,
    pub(super) suspended: bool,
    repaint_pending: bool,
    events: Vec<SurfaceEvent>,
    pub(super) interaction: InteractionState,
}

impl ChartSurface {
    pub fn new(config: SurfaceConfig) -> ChartResult<Self> {
        config.validate()?;

        let (center, scale) = match config.initial_visible_rect {
            Some(rect) => fit_visible_rect(config.viewport, rect)?,
            None => (config.center, config.scale),
        };
        let view = ViewTransform::new(center, scale, config.viewport)?;

        Ok(Self {
            view,
            objects: IndexMap::new(),
            draw_order: Vec::new(),
            next_seq: 0,
            grid_bounds: config.grid_bounds,
            display_grid: config.display_grid,
            grid_color: config.grid_color,
            background_color: config.background_color,
            grid_font_size_px: config.grid_font_size_px,
            bindings: config.bindings,
            behavior: config.behavior,
            wheel_zoom: config.wheel_zoom,
            snap_step: config.snap_step,
            selection: None,
            pinned: None,
            suspended: false,
            repaint_pending: false,
            events: Vec::new(),
            interaction: InteractionState::default(),
        })
    }

    // ---- repaint gating and notifications ----

    /// Marks the surface as needing a repaint unless repaints are suspended.
    pub fn request_repaint(&mut self) {
        if !self.suspended {
            self.repaint_pending = true;
        }
    }

    /// Returns and clears the coalesced pending-repaint flag.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_pending)
    }

    /// Drains queued notifications in the order they occurred.
    pub fn take_events(&mut self) -> Vec<SurfaceEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn suspended(&self) -> bool {
        self.suspended
    }

    /// Freezes or resumes repainting; resuming requests one repaint so
    /// batched mutations become visible.
    pub fn set_suspended(&mut self, suspended: bool) {
        self.suspended = suspended;
        self.request_repaint();
    }

    // ---- view state ----

    #[must_use]
    pub fn center(&self) -> RealPoint {
        self.view.center()
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.view.scale()
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.view.viewport()
    }

    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        self.view
    }

    pub fn set_center(&mut self, center: RealPoint) -> ChartResult<()> {
        if center != self.view.center() {
            self.view = self.view.with_center(center)?;
            self.request_repaint();
        }
        Ok(())
    }

    pub fn set_scale(&mut self, scale: f64) -> ChartResult<()> {
        if scale != self.view.scale() {
            self.view = self.view.with_scale(scale)?;
            self.request_repaint();
        }
        Ok(())
    }

    /// Fits `rect` into the viewport: center at the midpoint, scale on the
    /// tighter axis. Both writes happen under a suspended repaint so no
    /// intermediate state is drawn; one repaint is requested at the end.
    pub fn set_visible_rect(&mut self, rect: VisibleRect) -> ChartResult<()> {
        let (center, scale) = fit_visible_rect(self.view.viewport(), rect)?;

        let was_suspended = self.suspended;
        self.suspended = true;
        let applied = self
            .set_center(center)
            .and_then(|()| self.set_scale(scale));
        self.suspended = was_suspended;
        applied?;

        self.request_repaint();
        Ok(())
    }

    // ---- grid and appearance ----

    #[must_use]
    pub fn grid_bounds(&self) -> GridBounds {
        self.grid_bounds
    }

    pub fn set_grid_bounds(&mut self, bounds: GridBounds) -> ChartResult<()> {
        bounds.validate()?;
        if bounds != self.grid_bounds {
            self.grid_bounds = bounds;
            self.request_repaint();
        }
        Ok(())
    }

    #[must_use]
    pub fn display_grid(&self) -> bool {
        self.display_grid
    }

    pub fn set_display_grid(&mut self, display: bool) {
        if display != self.display_grid {
            self.display_grid = display;
            self.request_repaint();
        }
    }

    #[must_use]
    pub fn grid_color(&self) -> Color {
        self.grid_color
    }

    pub fn set_grid_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        if color != self.grid_color {
            self.grid_color = color;
            self.request_repaint();
        }
        Ok(())
    }

    #[must_use]
    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn set_background_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        if color != self.background_color {
            self.background_color = color;
            self.request_repaint();
        }
        Ok(())
    }

    // ---- interaction policy ----

    #[must_use]
    pub fn bindings(&self) -> InteractionBindings {
        self.bindings
    }

    pub fn set_bindings(&mut self, bindings: InteractionBindings) {
        self.bindings = bindings;
    }

    #[must_use]
    pub fn behavior(&self) -> InteractionBehavior {
        self.behavior
    }

    pub fn set_behavior(&mut self, behavior: InteractionBehavior) {
        self.behavior = behavior;
    }

    #[must_use]
    pub fn wheel_zoom(&self) -> WheelZoomBehavior {
        self.wheel_zoom
    }

    pub fn set_wheel_zoom(&mut self, wheel_zoom: WheelZoomBehavior) {
        self.wheel_zoom = wheel_zoom;
    }

    #[must_use]
    pub fn snap_step(&self) -> f64 {
        self.snap_step
    }

    pub fn set_snap_step(&mut self, snap_step: f64) -> ChartResult<()> {
        if !snap_step.is_finite() || snap_step <= 0.0 {
            return Err(ChartError::InvalidData(
                "snap step must be finite and > 0".to_owned(),
            ));
        }
        self.snap_step = snap_step;
        Ok(())
    }

    // ---- object collection ----

    /// Moves `object` into the surface and returns its handle.
    pub fn add_object(&mut self, object: ChartObject) -> ObjectId {
        let seq = self.next_seq;
        self.next_seq += 1;
        let id = ObjectId(seq);
        self.objects.insert(
            id,
            ObjectRecord {
                object,
                z_index: 0,
                seq,
            },
        );
        self.draw_order.push(id);
        self.resort_draw_order();
        self.request_repaint();
        id
    }

    /// Removes an object, clearing the selection and pin references if they
    /// pointed at it. Returns whether anything was removed.
    pub fn remove_object(&mut self, id: ObjectId) -> bool {
        if self.objects.shift_remove(&id).is_none() {
            return false;
        }
        self.draw_order.retain(|member| *member != id);
        if self.selection == Some(id) {
            self.set_selection(None);
        }
        if self.pinned == Some(id) {
            debug!(%id, "clearing pin for removed object");
            self.pinned = None;
        }
        self.request_repaint();
        true
    }

    pub fn remove_all_objects(&mut self) {
        self.objects.clear();
        self.draw_order.clear();
        self.set_selection(None);
        self.pinned = None;
        self.request_repaint();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    #[must_use]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.objects.contains_key(&id)
    }

    #[must_use]
    pub fn object(&self, id: ObjectId) -> Option<&ChartObject> {
        self.objects.get(&id).map(|record| &record.object)
    }

    /// Raw mutable access. Does not request a repaint; prefer
    /// `update_object` for changes that should become visible.
    #[must_use]
    pub fn object_mut(&mut self, id: ObjectId) -> Option<&mut ChartObject> {
        self.objects.get_mut(&id).map(|record| &mut record.object)
    }

    /// Mutates an object in place and requests a repaint on success.
    pub fn update_object(
        &mut self,
        id: ObjectId,
        mutate: impl FnOnce(&mut ChartObject) -> ChartResult<()>,
    ) -> ChartResult<()> {
        let record = self
            .objects
            .get_mut(&id)
            .ok_or(ChartError::UnknownObject { id })?;
        mutate(&mut record.object)?;
        self.request_repaint();
        Ok(())
    }

    /// Objects in draw order: Z ascending, insertion order within a band.
    pub fn objects(&self) -> impl Iterator<Item = (ObjectId, &ChartObject)> {
        self.draw_order.iter().filter_map(|id| {
            self.objects.get(id).map(|record| (*id, &record.object))
        })
    }

    // ---- Z order ----

    #[must_use]
    pub fn z_index(&self, id: ObjectId) -> Option<i32> {
        self.objects.get(&id).map(|record| record.z_index)
    }

    /// Changes an object's Z-index and re-sorts the draw order. The relative
    /// order of objects sharing a Z-index stays stable (insertion order).
    pub fn set_z_index(&mut self, id: ObjectId, z_index: i32) -> ChartResult<()> {
        let record = self
            .objects
            .get_mut(&id)
            .ok_or(ChartError::UnknownObject { id })?;
        if record.z_index != z_index {
            record.z_index = z_index;
            self.resort_draw_order();
            self.request_repaint();
        }
        Ok(())
    }

    fn resort_draw_order(&mut self) {
        let mut keyed: Vec<(i32, u64, ObjectId)> = self
            .objects
            .iter()
            .map(|(id, record)| (record.z_index, record.seq, *id))
            .collect();
        keyed.sort_unstable_by_key(|(z_index, seq, _)| (*z_index, *seq));
        self.draw_order = keyed.into_iter().map(|(_, _, id)| id).collect();
    }

    // ---- selection ----

    #[must_use]
    pub fn selected(&self) -> Option<ObjectId> {
        self.selection
    }

    pub fn select(&mut self, id: ObjectId) -> ChartResult<()> {
        if !self.objects.contains_key(&id) {
            return Err(ChartError::UnknownObject { id });
        }
        self.set_selection(Some(id));
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.set_selection(None);
    }

    pub(super) fn set_selection(&mut self, next: Option<ObjectId>) {
        if next != self.selection {
            let previous = self.selection;
            self.selection = next;
            self.events.push(SurfaceEvent::SelectionChanged {
                previous,
                current: next,
            });
            self.request_repaint();
        }
    }

    // ---- pin-to-move ----

    #[must_use]
    pub fn pinned(&self) -> Option<ObjectId> {
        self.pinned
    }

    /// Binds a member object to cursor movement until unpinned.
    pub fn pin_movable_object(&mut self, id: ObjectId) -> ChartResult<()> {
        let record = self
            .objects
            .get(&id)
            .ok_or(ChartError::UnknownObject { id })?;
        if !record.object.is_movable() {
            warn!(%id, kind = record.object.kind().as_str(), "pin rejected");
            return Err(ChartError::CapabilityRejected {
                operation: "pin",
                kind: record.object.kind().as_str(),
            });
        }
        if self.pinned != Some(id) {
            self.pinned = Some(id);
            self.request_repaint();
        }
        Ok(())
    }

    /// Adds `object` to the surface and pins it in one step. A non-movable
    /// object is rejected without being added.
    pub fn pin_movable_object_and_add(&mut self, object: ChartObject) -> ChartResult<ObjectId> {
        if !object.is_movable() {
            warn!(kind = object.kind().as_str(), "pin rejected, object not added");
            return Err(ChartError::CapabilityRejected {
                operation: "pin",
                kind: object.kind().as_str(),
            });
        }
        let id = self.add_object(object);
        self.pinned = Some(id);
        Ok(id)
    }

    /// Releases the pinned object. It remains a member of the surface.
    pub fn clear_pin(&mut self) {
        if self.pinned.take().is_some() {
            self.request_repaint();
        }
    }
}
