// hexpane: hex-dump viewer with address, byte and ASCII columns

mod ui;
mod view;

use std::fs;
use std::io;
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use ui::App;
use view::GridConfig;

/// First bytes of an x86-64 ELF executable, the traditional demo buffer
const SAMPLE_DATA: &[u8] = &[
    0x7f, 0x45, 0x4c, 0x46, 0x02, 0x01, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x02, 0x00, 0x3e, 0x00, 0x01, 0x00, 0x00, 0x00, 0x90, 0x24, 0x40, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x96, 0x01, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x00, 0x38, 0x00, 0x09, 0x00, 0x40, 0x00,
    0x1c, 0x00, 0x1b, 0x00, 0x06, 0x00, 0x00, 0x00, 0x05, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x00,
    0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf8, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf8,
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x08, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x03, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00, 0x38, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x38, 0x02, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x38, 0x02, 0x40, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x1c, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x1c, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00,
    0x05, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x40, 0x00, 0x00, 0x00, 0x00, 0x00, 0x8c, 0x89,
    0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x8c, 0x89, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x20, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x06, 0x00, 0x00, 0x00,
    0xf0, 0x8d, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0xf0, 0x8d, 0x61, 0x00, 0x00, 0x00, 0x00,
    0x00,
];

const SAMPLE_BASE_ADDR: u64 = 0xDEADBEEF;
const SAMPLE_HIGHLIGHT: (u64, u64) = (0xDEADBEF5, 0xDEADBEFF);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    let (source_name, data, base_addr, highlight) = if let Some(file) = args.get(1) {
        if file == "-h" || file == "--help" {
            let program_name = args.first().map(|s| s.as_str()).unwrap_or("hexpane");
            eprintln!("Usage: {} [file]", program_name);
            eprintln!();
            eprintln!("Shows the first page of <file> as a hex dump.");
            eprintln!("With no file, shows a built-in ELF header sample with a");
            eprintln!("highlighted address range.");
            return Ok(());
        }

        if !Path::new(file).exists() {
            eprintln!("Error: File '{}' not found", file);
            eprintln!(
                "Usage: {} [file]",
                args.first().map(|s| s.as_str()).unwrap_or("hexpane")
            );
            std::process::exit(1);
        }

        // Only one viewport is ever shown; keep a page plus one byte so a
        // longer file still exercises the truncation path honestly.
        let mut bytes = fs::read(file)?;
        let capacity = GridConfig::default().capacity();
        bytes.truncate(capacity + 1);
        eprintln!("Loaded {} bytes from {}", bytes.len(), file);

        (file.clone(), bytes, 0u64, None)
    } else {
        (
            String::from("built-in sample"),
            SAMPLE_DATA.to_vec(),
            SAMPLE_BASE_ADDR,
            Some(SAMPLE_HIGHLIGHT),
        )
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(source_name, base_addr, &data, highlight);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
