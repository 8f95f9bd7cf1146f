//! Hex-dump rendering pipeline
//!
//! This module is the core of the crate: a deterministic transformation
//! from (base address, byte buffer, highlight range, grid geometry) into
//! an ordered list of draw commands.
//!
//! # Pipeline Stages
//!
//! - [`layout`]: column pixel offsets from character metrics and grid
//!   constants
//! - [`line`]: slicing the buffer into 16-byte rows and formatting the
//!   address / hex / ASCII strings
//! - [`highlight`]: per-address classification against the optional
//!   highlight range
//! - [`render`]: the emitter combining the stages into [`DrawCommand`]s,
//!   plus the [`HexView`] widget holding the mutable configuration
//! - [`command`]: the draw command vocabulary shared with backends
//! - [`surface`]: the [`DrawSurface`] backend trait and a recording fake
//!
//! The first stage runs once per configuration change; the rest run once
//! per render call.

pub mod command;
pub mod highlight;
pub mod layout;
pub mod line;
pub mod render;
pub mod surface;

// Re-export the working set so callers rarely need the submodule paths
pub use command::{DrawCommand, Layer, Palette, PixelPos, PixelRect, Rgb};
pub use highlight::HighlightRange;
pub use layout::{
    CharMetrics, ColumnLayout, FontMetrics, GridConfig, BYTES_PER_LINE, DEFAULT_LINES_PER_PAGE,
    DEFAULT_MARGIN,
};
pub use line::Line;
pub use render::{emit_commands, HexView, RenderConfig};
pub use surface::{DrawSurface, RecordingSurface, SurfaceOp};
