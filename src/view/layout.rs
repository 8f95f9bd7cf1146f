//! Column layout derived from character metrics and grid constants
//!
//! The grid has three columns: an 8-digit address label, sixteen two-digit
//! hex tokens separated by single spaces, and a sixteen-character ASCII
//! translation. All horizontal offsets are multiples of the character cell
//! width, which assumes a fixed-width font.

/// Bytes rendered per row; the grid geometry is built around this
pub const BYTES_PER_LINE: usize = 16;

/// Default number of rows a viewport shows
pub const DEFAULT_LINES_PER_PAGE: usize = 16;

/// Default margin on all four sides, in pixels
pub const DEFAULT_MARGIN: u32 = 4;

/// Character-cell dimensions reported by a font collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharMetrics {
    pub char_width: u32,
    pub line_height: u32,
}

impl CharMetrics {
    pub fn new(char_width: u32, line_height: u32) -> Self {
        CharMetrics {
            char_width,
            line_height,
        }
    }

    /// Measure the metrics once from a font provider
    pub fn from_font<F: FontMetrics>(font: &F) -> Self {
        CharMetrics {
            char_width: font.char_width(),
            line_height: font.line_height(),
        }
    }
}

/// Font measurement collaborator.
///
/// The font is assumed monospace, so one width applies to every glyph.
pub trait FontMetrics {
    fn char_width(&self) -> u32;
    fn line_height(&self) -> u32;
}

/// Fixed grid constants for one view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridConfig {
    /// Viewport capacity in rows
    pub lines_per_page: usize,
    /// Margin on all four sides, in pixels
    pub margin: u32,
}

impl Default for GridConfig {
    fn default() -> Self {
        GridConfig {
            lines_per_page: DEFAULT_LINES_PER_PAGE,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl GridConfig {
    /// Maximum bytes one render can show
    pub fn capacity(&self) -> usize {
        self.lines_per_page * BYTES_PER_LINE
    }
}

/// Pixel offsets of the three columns plus the overall viewport size.
///
/// Carries the cell dimensions it was computed from, so per-row and
/// per-byte positions can be derived without re-threading the metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnLayout {
    pub addr_x: u32,
    pub hex_x: u32,
    pub hex_width: u32,
    pub ascii_x: u32,
    pub ascii_width: u32,
    pub width: u32,
    pub height: u32,
    char_width: u32,
    line_height: u32,
    margin: u32,
}

impl ColumnLayout {
    /// Compute column offsets for the given metrics and grid.
    ///
    /// Pure arithmetic; callers cache the result until the metrics or the
    /// grid constants change.
    pub fn compute(metrics: &CharMetrics, grid: &GridConfig) -> Self {
        let cw = metrics.char_width;
        let bpl = BYTES_PER_LINE as u32;

        // eg 'DEADBEEF: ' -- 8 digits plus ': ' minus the trailing space
        let addr_x = grid.margin;
        let addr_width = cw * 9;

        // 'XX ' per byte, no separator after the last one
        let hex_x = addr_x + addr_width + cw;
        let hex_width = cw * (bpl * 3 - 1);

        let ascii_x = hex_x + hex_width + cw;
        let ascii_width = bpl * cw;

        ColumnLayout {
            addr_x,
            hex_x,
            hex_width,
            ascii_x,
            ascii_width,
            width: ascii_x + ascii_width + grid.margin,
            height: grid.margin + metrics.line_height * grid.lines_per_page as u32 + grid.margin,
            char_width: cw,
            line_height: metrics.line_height,
            margin: grid.margin,
        }
    }

    /// Top edge of row `index`
    pub fn line_y(&self, index: usize) -> u32 {
        self.margin + index as u32 * self.line_height
    }

    /// Left edge of the hex token for byte `index` within a row
    pub fn hex_token_x(&self, index: usize) -> u32 {
        self.hex_x + index as u32 * 3 * self.char_width
    }
}
