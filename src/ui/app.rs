//! Main TUI application state and logic

use crate::ui::pane::{render_hex_pane, CellMetrics};
use crate::ui::theme::{DEFAULT_THEME, TERMINAL_PALETTE};
use crate::view::{CharMetrics, GridConfig, HexView};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// The main application state
pub struct App {
    /// The hex view being displayed
    pub view: HexView,

    /// Label for the data source shown in the status bar
    pub source_name: String,

    /// The highlight range `h` toggles on and off
    pub highlight: Option<(u64, u64)>,

    /// Whether the highlight is currently shown
    pub highlight_visible: bool,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create an app displaying `data` at `base_addr`, with an optional
    /// toggleable highlight range
    pub fn new(
        source_name: String,
        base_addr: u64,
        data: &[u8],
        highlight: Option<(u64, u64)>,
    ) -> Self {
        let metrics = CharMetrics::from_font(&CellMetrics);
        // one cell of margin reads better than four inside a border
        let grid = GridConfig {
            margin: 1,
            ..GridConfig::default()
        };
        let mut view = HexView::with_grid(metrics, grid);
        view.set_palette(TERMINAL_PALETTE);
        view.set_base_addr(base_addr);
        view.set_data(data);
        if let Some((start, end)) = highlight {
            view.set_highlight(start, end);
        }

        App {
            view,
            source_name,
            highlight,
            highlight_visible: highlight.is_some(),
            should_quit: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('h') => self.toggle_highlight(),
            _ => {}
        }
    }

    /// Toggle the highlight range, if one was configured
    fn toggle_highlight(&mut self) {
        let Some((start, end)) = self.highlight else {
            return;
        };
        if self.highlight_visible {
            self.view.clear_highlight();
        } else {
            self.view.set_highlight(start, end);
        }
        self.highlight_visible = !self.highlight_visible;
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(frame.area());

        // size the pane to the grid plus its border, clamped to the terminal
        let grid = self.view.layout();
        let grid_width = grid.width.saturating_add(2).min(u16::MAX as u32) as u16;
        let grid_height = grid.height.saturating_add(2).min(u16::MAX as u32) as u16;
        let pane = Rect {
            x: chunks[0].x,
            y: chunks[0].y,
            width: chunks[0].width.min(grid_width),
            height: chunks[0].height.min(grid_height),
        };
        render_hex_pane(frame, pane, &self.view, true);

        self.render_status_bar(frame, chunks[1]);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("q", Style::default().fg(DEFAULT_THEME.status_key)),
            Span::styled(" quit", Style::default().fg(DEFAULT_THEME.status_text)),
        ];
        if self.highlight.is_some() {
            spans.push(Span::styled(
                "  h",
                Style::default().fg(DEFAULT_THEME.status_key),
            ));
            spans.push(Span::styled(
                " toggle highlight",
                Style::default().fg(DEFAULT_THEME.status_text),
            ));
        }
        spans.push(Span::styled(
            format!("  [{}]", self.source_name),
            Style::default().fg(DEFAULT_THEME.comment),
        ));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
