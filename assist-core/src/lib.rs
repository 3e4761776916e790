//! # Assist Core
//!
//! Canvas geometry model and deterministic assist logic shared by the
//! generation pipeline.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 assist-core                 │
//! ├─────────────────────────────────────────────┤
//! │  Geometry Model   │  Deterministic Logic    │
//! │  - Path variants  │  - Rule classifier      │
//! │  - Objects        │  - Style mapper         │
//! │  - Canvas state   │  - Overlay synthesis    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Everything here is pure: no I/O, no async, no shared state. The
//! generation pipeline in `assist-engine` layers backends, validation and
//! orchestration on top of these types.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod brush;
pub mod canvas;
pub mod geometry;
pub mod object;
pub mod overlay;
pub mod recognize;

pub use brush::{BrushStyle, BrushType};
pub use canvas::{CanvasState, SelectionBox};
pub use geometry::{BBox, CanvasBounds, PathData, PathError, Point, Tool};
pub use object::{DrawingObject, DrawingType, RenderMetadata, StampData};
pub use overlay::impasto_overlays;
pub use recognize::{classify, Recognition};

/// Core crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
