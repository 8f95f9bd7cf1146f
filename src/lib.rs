//! # Introduction
//!
//! hexpane renders a byte buffer as a classic hex-dump grid: an address
//! column, sixteen hex byte tokens per row, and an ASCII translation
//! column, with an optional inclusive address range highlighted behind its
//! byte tokens.
//!
//! ## Rendering pipeline
//!
//! ```text
//! Buffer + BaseAddr + Highlight → Lines → DrawCommands → DrawSurface
//! ```
//!
//! 1. [`view::layout`] — column pixel offsets from character metrics and
//!    the fixed grid constants.
//! 2. [`view::line`] — slices the buffer into 16-byte rows and formats the
//!    address label, hex tokens, and ASCII text.
//! 3. [`view::highlight`] — classifies each byte's absolute address
//!    against the optional highlight range.
//! 4. [`view::render`] — emits an ordered [`view::DrawCommand`] list; the
//!    [`view::HexView`] widget replays it onto an injected
//!    [`view::DrawSurface`].
//! 5. [`ui`] — ratatui front-end and demo app; not part of the stable
//!    library API.
//!
//! The pipeline is pure and single-threaded: the same configuration always
//! emits the same command sequence, an empty buffer emits nothing at all,
//! and output is bounded by the viewport capacity (lines per page x 16
//! bytes). Backends implement [`view::DrawSurface`]; the crate ships a
//! recording fake for headless use and a ratatui-based terminal pane.

pub mod ui;
pub mod view;
