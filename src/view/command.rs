//! Draw command types emitted by the render pipeline
//!
//! The renderer never touches a drawing backend directly: every render
//! produces an ordered [`DrawCommand`] list which a
//! [`DrawSurface`](super::surface::DrawSurface) implementation replays.
//! Commands carry concrete pixel positions and colors, so a surface needs
//! no knowledge of the grid that produced them.

/// 24-bit color used by draw commands, backend-agnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Top-left anchored pixel position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelPos {
    pub x: u32,
    pub y: u32,
}

impl PixelPos {
    pub fn new(x: u32, y: u32) -> Self {
        PixelPos { x, y }
    }
}

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        PixelRect {
            x,
            y,
            width,
            height,
        }
    }
}

/// Compositing layer for rectangle fills.
///
/// A `Rect` command may appear *after* the `TextRun` it decorates; the
/// layer tells the surface where the fill belongs in the stack. This
/// replaces backend-specific reordering calls with a declarative contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    /// Composite beneath already-placed glyphs; the text stays visible.
    UnderText,
    /// Composite on top of everything drawn so far.
    OverText,
}

/// A single drawing instruction, the renderer's only output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    /// Place a run of monospace text with its top-left corner at `pos`
    TextRun {
        pos: PixelPos,
        text: String,
        color: Rgb,
    },
    /// Fill a rectangle on the given layer
    Rect {
        bounds: PixelRect,
        fill: Rgb,
        layer: Layer,
    },
}

/// Colors for the three text roles and the highlight fill.
///
/// Defaults match the classic hex-view look: blue addresses, dark bytes,
/// green ASCII, yellow highlight on a white surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub address: Rgb,
    pub byte: Rgb,
    pub ascii: Rgb,
    pub highlight: Rgb,
    pub background: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            address: Rgb(0x00, 0x00, 0xFF),
            byte: Rgb(0x00, 0x00, 0x00),
            ascii: Rgb(0x00, 0x80, 0x00),
            highlight: Rgb(0xFF, 0xFF, 0x00),
            background: Rgb(0xFF, 0xFF, 0xFF),
        }
    }
}
