//! Terminal front-end built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state and the keyboard event loop for the
//!   demo binary
//! - **[`pane`]** — the hex view pane: a [`BufferSurface`] that replays
//!   draw commands into a ratatui buffer, plus the bordered pane renderer
//! - **[`theme`]** — centralized color palette
//!
//! The entry point for consumers is [`App`]: construct it with a byte
//! buffer and call [`App::run`] to start the event loop. Library users who
//! only want the pane can call [`pane::render_hex_pane`] directly from
//! their own draw loop.
//!
//! [`BufferSurface`]: pane::BufferSurface
//! [`App::run`]: app::App::run

pub mod app;
pub mod pane;
pub mod theme;

pub use app::App;
pub use pane::{render_hex_pane, BufferSurface, CellMetrics};
