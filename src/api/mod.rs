mod config;
mod controller;
mod scene;
mod snapshot;
mod surface;

pub use config::{GridBounds, SurfaceConfig};
pub use snapshot::{ObjectSummary, SurfaceSnapshot};
pub use surface::{ChartSurface, ObjectId, SurfaceEvent};
