use serde::{Deserialize, Serialize};

use crate::api::{ChartSurface, GridBounds, ObjectId};
use crate::core::{RealPoint, RealRect, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::object::ObjectKind;

/// Per-object entry of a `SurfaceSnapshot`, in draw order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectSummary {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub z_index: i32,
    pub visible: bool,
    pub center: Option<RealPoint>,
    pub bounds: Option<RealRect>,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSnapshot {
    pub viewport: Viewport,
    pub center: RealPoint,
    pub scale: f64,
    pub grid_bounds: GridBounds,
    pub display_grid: bool,
    pub suspended: bool,
    pub selected: Option<ObjectId>,
    pub pinned: Option<ObjectId>,
    pub objects: Vec<ObjectSummary>,
}

impl ChartSurface {
    #[must_use]
    pub fn snapshot(&self) -> SurfaceSnapshot {
        let scale = self.scale();
        let objects = self
            .objects()
            .map(|(id, object)| ObjectSummary {
                id,
                kind: object.kind(),
                z_index: self.z_index(id).unwrap_or_default(),
                visible: object.is_visible(),
                center: object.center(),
                bounds: object.bounds(scale),
            })
            .collect();

        SurfaceSnapshot {
            viewport: self.viewport(),
            center: self.center(),
            scale,
            grid_bounds: self.grid_bounds(),
            display_grid: self.display_grid(),
            suspended: self.suspended(),
            selected: self.selected(),
            pinned: self.pinned(),
            objects,
        }
    }

    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|err| ChartError::InvalidData(format!("snapshot serialization failed: {err}")))
    }
}
