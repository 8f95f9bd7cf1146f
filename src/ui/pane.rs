//! Hex pane rendering into a ratatui buffer
//!
//! Bridges the backend-agnostic pipeline to the terminal: a character cell
//! is the "pixel", so the pane reports 1x1 [`FontMetrics`] and replays
//! [`DrawCommand`]s as styled strings and background fills on the frame
//! buffer.

use crate::ui::theme::{to_color, DEFAULT_THEME};
use crate::view::command::{Layer, PixelPos, PixelRect, Rgb};
use crate::view::surface::DrawSurface;
use crate::view::{FontMetrics, HexView};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Terminal cell metrics: every glyph is one cell wide, one cell tall
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMetrics;

impl FontMetrics for CellMetrics {
    fn char_width(&self) -> u32 {
        1
    }

    fn line_height(&self) -> u32 {
        1
    }
}

/// A [`DrawSurface`] over a region of a ratatui [`Buffer`].
///
/// Pixel coordinates map 1:1 onto cells relative to `area`'s top-left
/// corner. `Layer::UnderText` fills patch only the cell background, so
/// glyphs written earlier in the frame stay visible on top.
pub struct BufferSurface<'a> {
    buf: &'a mut Buffer,
    area: Rect,
    background: Rgb,
}

impl<'a> BufferSurface<'a> {
    pub fn new(buf: &'a mut Buffer, area: Rect, background: Rgb) -> Self {
        BufferSurface {
            buf,
            area,
            background,
        }
    }

    /// Translate a pane-local pixel position to an absolute cell, clipped
    /// against the pane area
    fn cell_at(&self, pos: PixelPos) -> Option<(u16, u16)> {
        if pos.x >= self.area.width as u32 || pos.y >= self.area.height as u32 {
            return None;
        }
        Some((self.area.x + pos.x as u16, self.area.y + pos.y as u16))
    }

    /// Pane-local pixel rect as an absolute cell rect, clipped
    fn rect_at(&self, bounds: PixelRect) -> Rect {
        let rect = Rect {
            x: self.area.x.saturating_add(bounds.x.min(u16::MAX as u32) as u16),
            y: self.area.y.saturating_add(bounds.y.min(u16::MAX as u32) as u16),
            width: bounds.width.min(u16::MAX as u32) as u16,
            height: bounds.height.min(u16::MAX as u32) as u16,
        };
        rect.intersection(self.area)
    }
}

impl DrawSurface for BufferSurface<'_> {
    fn clear_all(&mut self) {
        let blank = " ".repeat(self.area.width as usize);
        let style = Style::default().bg(to_color(self.background));
        for row in 0..self.area.height {
            self.buf
                .set_string(self.area.x, self.area.y + row, &blank, style);
        }
    }

    fn draw_text(&mut self, pos: PixelPos, text: &str, color: Rgb) {
        if let Some((x, y)) = self.cell_at(pos) {
            let max_width = (self.area.right() - x) as usize;
            let style = Style::default().fg(to_color(color));
            self.buf.set_stringn(x, y, text, max_width, style);
        }
    }

    fn fill_rect(&mut self, bounds: PixelRect, fill: Rgb, layer: Layer) {
        let rect = self.rect_at(bounds);
        if rect.is_empty() {
            return;
        }
        let color = to_color(fill);
        match layer {
            // patch backgrounds only; the glyph in each cell is preserved
            Layer::UnderText => self.buf.set_style(rect, Style::default().bg(color)),
            Layer::OverText => {
                let blank = " ".repeat(rect.width as usize);
                let style = Style::default().bg(color);
                for row in 0..rect.height {
                    self.buf.set_string(rect.x, rect.y + row, &blank, style);
                }
            }
        }
    }
}

/// Render the hex view pane with a bordered block
pub fn render_hex_pane(frame: &mut Frame, area: Rect, view: &HexView, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Hex View ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.is_empty() {
        return;
    }

    let background = view.config().palette.background;
    let mut surface = BufferSurface::new(frame.buffer_mut(), inner, background);
    view.render(&mut surface);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::command::DrawCommand;

    fn surface_fixture(width: u16, height: u16) -> (Buffer, Rect) {
        let area = Rect::new(0, 0, width, height);
        (Buffer::empty(area), area)
    }

    #[test]
    fn test_draw_text_writes_cells() {
        let (mut buf, area) = surface_fixture(10, 2);
        let mut surface = BufferSurface::new(&mut buf, area, Rgb(0, 0, 0));
        surface.draw_text(PixelPos::new(1, 0), "AB", Rgb(255, 255, 255));

        assert_eq!(buf[(1, 0)].symbol(), "A");
        assert_eq!(buf[(2, 0)].symbol(), "B");
    }

    #[test]
    fn test_under_text_fill_keeps_glyphs() {
        let (mut buf, area) = surface_fixture(10, 2);
        let mut surface = BufferSurface::new(&mut buf, area, Rgb(0, 0, 0));
        surface.draw_text(PixelPos::new(0, 0), "7F", Rgb(255, 255, 255));
        surface.fill_rect(
            PixelRect::new(0, 0, 2, 1),
            Rgb(255, 255, 0),
            Layer::UnderText,
        );

        // the glyphs survive, only the background changes
        assert_eq!(buf[(0, 0)].symbol(), "7");
        assert_eq!(buf[(1, 0)].symbol(), "F");
        assert_eq!(buf[(0, 0)].bg, to_color(Rgb(255, 255, 0)));
    }

    #[test]
    fn test_out_of_area_draws_are_clipped() {
        let (mut buf, area) = surface_fixture(4, 1);
        let mut surface = BufferSurface::new(&mut buf, area, Rgb(0, 0, 0));
        surface.draw_text(PixelPos::new(10, 0), "X", Rgb(255, 255, 255));
        surface.draw_text(PixelPos::new(0, 5), "X", Rgb(255, 255, 255));
        surface.fill_rect(
            PixelRect::new(10, 10, 3, 3),
            Rgb(255, 0, 0),
            Layer::UnderText,
        );

        for x in 0..4 {
            assert_eq!(buf[(x, 0)].symbol(), " ");
        }
    }

    #[test]
    fn test_apply_replays_commands_in_order() {
        let (mut buf, area) = surface_fixture(20, 2);
        let mut surface = BufferSurface::new(&mut buf, area, Rgb(10, 10, 10));
        let commands = vec![DrawCommand::TextRun {
            pos: PixelPos::new(0, 0),
            text: "00001000: ".to_string(),
            color: Rgb(0, 0, 255),
        }];
        surface.apply(&commands);

        assert_eq!(buf[(0, 0)].symbol(), "0");
        assert_eq!(buf[(8, 0)].symbol(), ":");
    }
}
