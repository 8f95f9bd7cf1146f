//! The render pipeline and the `HexView` widget
//!
//! Rendering is a pure function from a configuration snapshot to a draw
//! command list: [`emit_commands`] never touches a backend, so the whole
//! pipeline runs headless. [`HexView`] wraps that function with the
//! setter-style configuration surface and delivers the commands to an
//! injected [`DrawSurface`].
//!
//! # Command order
//!
//! Rows are emitted top to bottom. Within a row:
//!
//! 1. the address label text run,
//! 2. for each byte in ascending order, its hex token text run, followed
//!    immediately by an under-text highlight rectangle when the byte's
//!    absolute address falls in the highlight range,
//! 3. the ASCII translation text run.
//!
//! An empty buffer produces an empty command list and the render is a
//! complete no-op: the surface is not cleared and prior drawing is left
//! untouched.

use super::command::{DrawCommand, Layer, Palette, PixelPos, PixelRect};
use super::highlight::HighlightRange;
use super::layout::{CharMetrics, ColumnLayout, GridConfig};
use super::line::{hex_token, lines};
use super::surface::DrawSurface;

/// Immutable snapshot of everything one render consumes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Absolute address of `data[0]`
    pub base_addr: u64,
    /// The bytes to display
    pub data: Vec<u8>,
    /// Optional inclusive address range to emphasize
    pub highlight: Option<HighlightRange>,
    pub grid: GridConfig,
    pub metrics: CharMetrics,
    pub palette: Palette,
}

impl RenderConfig {
    pub fn new(metrics: CharMetrics) -> Self {
        RenderConfig {
            base_addr: 0,
            data: Vec::new(),
            highlight: None,
            grid: GridConfig::default(),
            metrics,
            palette: Palette::default(),
        }
    }
}

/// Run the full pipeline: slice rows, classify highlights, emit commands.
///
/// Pure; identical inputs produce an identical command list. Returns an
/// empty list for an empty buffer.
pub fn emit_commands(config: &RenderConfig, layout: &ColumnLayout) -> Vec<DrawCommand> {
    let rows = lines(&config.data, config.base_addr, config.grid.lines_per_page);
    if rows.is_empty() {
        return Vec::new();
    }

    let cw = config.metrics.char_width;
    let lh = config.metrics.line_height;
    let mut commands = Vec::new();

    for row in rows {
        let line_y = layout.line_y(row.index);

        commands.push(DrawCommand::TextRun {
            pos: PixelPos::new(layout.addr_x, line_y),
            text: row.address_label(),
            color: config.palette.address,
        });

        for (i, &byte) in row.bytes.iter().enumerate() {
            let token_x = layout.hex_token_x(i);
            commands.push(DrawCommand::TextRun {
                pos: PixelPos::new(token_x, line_y),
                text: hex_token(byte),
                color: config.palette.byte,
            });

            let addr = row.start_addr.wrapping_add(i as u64);
            if config.highlight.is_some_and(|range| range.contains(addr)) {
                // the token's cell box: two glyphs wide, one line tall
                commands.push(DrawCommand::Rect {
                    bounds: PixelRect::new(token_x, line_y, 2 * cw, lh),
                    fill: config.palette.highlight,
                    layer: Layer::UnderText,
                });
            }
        }

        commands.push(DrawCommand::TextRun {
            pos: PixelPos::new(layout.ascii_x, line_y),
            text: row.ascii_text(),
            color: config.palette.ascii,
        });
    }

    commands
}

/// The hex-dump view: mutable configuration plus a cached layout.
///
/// Configure with the setters, then call [`render`](HexView::render) with
/// a drawing surface, or [`commands`](HexView::commands) to inspect the
/// output headlessly. Repeated renders with unchanged configuration
/// produce identical command sequences.
#[derive(Debug, Clone)]
pub struct HexView {
    config: RenderConfig,
    layout: ColumnLayout,
}

impl HexView {
    /// Create a view with default grid constants and palette
    pub fn new(metrics: CharMetrics) -> Self {
        let config = RenderConfig::new(metrics);
        let layout = ColumnLayout::compute(&config.metrics, &config.grid);
        HexView { config, layout }
    }

    /// Create a view with explicit grid constants
    pub fn with_grid(metrics: CharMetrics, grid: GridConfig) -> Self {
        let layout = ColumnLayout::compute(&metrics, &grid);
        let config = RenderConfig {
            grid,
            ..RenderConfig::new(metrics)
        };
        HexView { config, layout }
    }

    /// Replace the address of the first byte; no validation
    pub fn set_base_addr(&mut self, addr: u64) {
        self.config.base_addr = addr;
    }

    /// Replace the displayed bytes with a copy of `data`
    pub fn set_data(&mut self, data: &[u8]) {
        self.config.data = data.to_vec();
    }

    /// Replace the highlight range.
    ///
    /// `start > end` is accepted and highlights nothing.
    pub fn set_highlight(&mut self, start: u64, end: u64) {
        self.config.highlight = Some(HighlightRange::new(start, end));
    }

    /// Remove the highlight range
    pub fn clear_highlight(&mut self) {
        self.config.highlight = None;
    }

    /// Replace the palette
    pub fn set_palette(&mut self, palette: Palette) {
        self.config.palette = palette;
    }

    /// Replace the character metrics, recomputing the layout
    pub fn set_metrics(&mut self, metrics: CharMetrics) {
        self.config.metrics = metrics;
        self.layout = ColumnLayout::compute(&self.config.metrics, &self.config.grid);
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn layout(&self) -> &ColumnLayout {
        &self.layout
    }

    /// The command list the current configuration renders to
    pub fn commands(&self) -> Vec<DrawCommand> {
        emit_commands(&self.config, &self.layout)
    }

    /// Render to `surface`: clear it and replay the command list, or do
    /// nothing at all when the buffer is empty.
    pub fn render<S: DrawSurface>(&self, surface: &mut S) {
        surface.apply(&self.commands());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::command::Rgb;
    use crate::view::surface::{RecordingSurface, SurfaceOp};

    fn test_view() -> HexView {
        HexView::new(CharMetrics::new(8, 16))
    }

    #[test]
    fn test_empty_buffer_emits_nothing_and_skips_clear() {
        let view = test_view();
        assert!(view.commands().is_empty());

        let mut surface = RecordingSurface::new();
        view.render(&mut surface);
        assert!(surface.ops.is_empty());
        assert_eq!(surface.clear_count(), 0);
    }

    #[test]
    fn test_single_line_command_order() {
        let mut view = test_view();
        view.set_base_addr(0x1000);
        view.set_data(&[0x7F, 0x45, 0x4C, 0x46]);

        let commands = view.commands();
        // address label + 4 tokens + ascii run
        assert_eq!(commands.len(), 6);
        match &commands[0] {
            DrawCommand::TextRun { text, .. } => assert_eq!(text, "00001000: "),
            other => panic!("expected address run, got {:?}", other),
        }
        match &commands[1] {
            DrawCommand::TextRun { text, .. } => assert_eq!(text, "7F"),
            other => panic!("expected hex token, got {:?}", other),
        }
        match &commands[5] {
            DrawCommand::TextRun { text, .. } => assert_eq!(text, ".ELF"),
            other => panic!("expected ascii run, got {:?}", other),
        }
    }

    #[test]
    fn test_highlight_rect_follows_its_token() {
        let mut view = test_view();
        view.set_base_addr(0x1000);
        view.set_data(&[0u8; 16]);
        view.set_highlight(0x1005, 0x1007);

        let commands = view.commands();
        let rect_count = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Rect { .. }))
            .count();
        assert_eq!(rect_count, 3);

        // each rect directly follows the token it covers, on the under layer
        for (i, command) in commands.iter().enumerate() {
            if let DrawCommand::Rect { bounds, layer, .. } = command {
                assert_eq!(*layer, Layer::UnderText);
                match &commands[i - 1] {
                    DrawCommand::TextRun { pos, .. } => {
                        assert_eq!(pos.x, bounds.x);
                        assert_eq!(pos.y, bounds.y);
                    }
                    other => panic!("rect not preceded by its token: {:?}", other),
                }
            }
        }
    }

    #[test]
    fn test_highlight_rect_geometry() {
        let mut view = test_view();
        view.set_base_addr(0);
        view.set_data(&[0u8; 16]);
        view.set_highlight(3, 3);

        let commands = view.commands();
        let rects: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Rect { bounds, .. } => Some(*bounds),
                _ => None,
            })
            .collect();
        assert_eq!(rects.len(), 1);
        let layout = view.layout();
        assert_eq!(rects[0].x, layout.hex_x + 3 * 24);
        assert_eq!(rects[0].y, 4);
        assert_eq!(rects[0].width, 16); // two 8px glyphs
        assert_eq!(rects[0].height, 16);
    }

    #[test]
    fn test_reversed_highlight_emits_no_rects() {
        let mut view = test_view();
        view.set_base_addr(0x1000);
        view.set_data(&[0u8; 16]);
        view.set_highlight(0x2000, 0x1000);

        assert!(!view
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Rect { .. })));
    }

    #[test]
    fn test_clear_highlight_removes_rects() {
        let mut view = test_view();
        view.set_data(&[0u8; 16]);
        view.set_highlight(0, 15);
        assert!(view
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Rect { .. })));

        view.clear_highlight();
        assert!(!view
            .commands()
            .iter()
            .any(|c| matches!(c, DrawCommand::Rect { .. })));
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut view = test_view();
        view.set_base_addr(0xDEADBEEF);
        view.set_data(&[1, 2, 3, 4, 5]);
        view.set_highlight(0xDEADBEF0, 0xDEADBEF2);

        assert_eq!(view.commands(), view.commands());

        let mut first = RecordingSurface::new();
        let mut second = RecordingSurface::new();
        view.render(&mut first);
        view.render(&mut second);
        assert_eq!(first.ops, second.ops);
    }

    #[test]
    fn test_render_clears_once_before_drawing() {
        let mut view = test_view();
        view.set_data(&[0xAB]);

        let mut surface = RecordingSurface::new();
        view.render(&mut surface);
        assert_eq!(surface.clear_count(), 1);
        assert_eq!(surface.ops[0], SurfaceOp::Clear);
    }

    #[test]
    fn test_text_colors_follow_palette() {
        let mut view = test_view();
        view.set_data(&[0x41]);

        let commands = view.commands();
        let palette = Palette::default();
        match &commands[0] {
            DrawCommand::TextRun { color, .. } => assert_eq!(*color, palette.address),
            other => panic!("unexpected {:?}", other),
        }
        match &commands[1] {
            DrawCommand::TextRun { color, .. } => assert_eq!(*color, palette.byte),
            other => panic!("unexpected {:?}", other),
        }
        match &commands[2] {
            DrawCommand::TextRun { color, .. } => assert_eq!(*color, palette.ascii),
            other => panic!("unexpected {:?}", other),
        }
        assert_ne!(palette.address, Rgb(0, 0, 0));
    }
}
