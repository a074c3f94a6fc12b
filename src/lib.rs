//! chart-surface: embeddable 2D chart surface core.
//!
//! A real-coordinate (Y-up) view onto a collection of geometric objects with
//! pan, zoom, selection, and mouse-driven dragging. The crate computes *what*
//! to draw and *where*; hosts plug in event delivery on one side and a
//! `render::Renderer` backend on the other.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod object;
pub mod render;
pub mod telemetry;

pub use api::{ChartSurface, ObjectId, SurfaceConfig, SurfaceEvent};
pub use error::{ChartError, ChartResult};
