//! Drawing surface abstraction
//!
//! The renderer talks to its backend through the narrow [`DrawSurface`]
//! trait, so the pipeline can be exercised headlessly. The crate ships two
//! implementations: [`RecordingSurface`] here, for tests and inspection,
//! and `BufferSurface` in the `ui` module, which paints into a ratatui
//! buffer.

use super::command::{DrawCommand, Layer, PixelPos, PixelRect, Rgb};

/// Minimal capability interface a drawing backend must provide
pub trait DrawSurface {
    /// Discard everything previously drawn to this viewport
    fn clear_all(&mut self);

    /// Place a run of monospace text with its top-left corner at `pos`
    fn draw_text(&mut self, pos: PixelPos, text: &str, color: Rgb);

    /// Fill a rectangle on the given layer.
    ///
    /// `Layer::UnderText` fills must composite beneath glyphs drawn
    /// earlier in the same frame; the glyph stays visible on top.
    fn fill_rect(&mut self, bounds: PixelRect, fill: Rgb, layer: Layer);

    /// Replay a command list. Does nothing at all when `commands` is
    /// empty, including the clear.
    fn apply(&mut self, commands: &[DrawCommand]) {
        if commands.is_empty() {
            return;
        }
        self.clear_all();
        for command in commands {
            match command {
                DrawCommand::TextRun { pos, text, color } => {
                    self.draw_text(*pos, text, *color);
                }
                DrawCommand::Rect {
                    bounds,
                    fill,
                    layer,
                } => {
                    self.fill_rect(*bounds, *fill, *layer);
                }
            }
        }
    }
}

/// One recorded surface call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceOp {
    Clear,
    Text {
        pos: PixelPos,
        text: String,
        color: Rgb,
    },
    Rect {
        bounds: PixelRect,
        fill: Rgb,
        layer: Layer,
    },
}

/// A surface that records every call instead of drawing.
///
/// Used by the test suite to assert on exactly what a render produced
/// without a terminal attached.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        RecordingSurface { ops: Vec::new() }
    }

    /// Number of recorded `Clear` calls
    pub fn clear_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Clear))
            .count()
    }

    /// All recorded text runs, in draw order
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// All recorded rectangle fills, in draw order
    pub fn rects(&self) -> Vec<PixelRect> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::Rect { bounds, .. } => Some(*bounds),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear_all(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn draw_text(&mut self, pos: PixelPos, text: &str, color: Rgb) {
        self.ops.push(SurfaceOp::Text {
            pos,
            text: text.to_string(),
            color,
        });
    }

    fn fill_rect(&mut self, bounds: PixelRect, fill: Rgb, layer: Layer) {
        self.ops.push(SurfaceOp::Rect {
            bounds,
            fill,
            layer,
        });
    }
}
