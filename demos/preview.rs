//! Interactive preview of the status line in a terminal.
//!
//! Run with: cargo run --example preview
//!
//! Controls:
//! - n / i / v / V / R / c / t: switch mode (b: block visual)
//! - s: toggle spell checking
//! - w: toggle soft wrap
//! - m: toggle the modified flag
//! - Left / Right: shrink or grow the simulated window width
//! - q: quit

use std::io::{self, stdout};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modeline::{
    BufferInfo, BufferKind, DiagnosticCounts, DiagnosticsSource, Host, IconSource, Options,
    Sources, Statusline, StatuslineWidget, VcsSource, VcsStatus, WindowInfo, CTRL_V,
    STATUSLINE_HEIGHT,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

/// Editor state the demo host reports.
#[derive(Clone, Debug)]
struct EditorState {
    window: WindowInfo,
    buffer: BufferInfo,
}

type Shared = Arc<Mutex<EditorState>>;

struct DemoHost(Shared);

impl Host for DemoHost {
    fn window(&self) -> anyhow::Result<WindowInfo> {
        let state = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(state.window.clone())
    }

    fn buffer(&self) -> anyhow::Result<BufferInfo> {
        let state = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(state.buffer.clone())
    }
}

struct DemoVcs;

impl VcsSource for DemoVcs {
    fn status(&self, _buffer: &BufferInfo) -> anyhow::Result<Option<VcsStatus>> {
        Ok(Some(VcsStatus {
            branch: "main".to_string(),
            summary: Some("+12 ~3 -1".to_string()),
        }))
    }
}

struct DemoDiagnostics;

impl DiagnosticsSource for DemoDiagnostics {
    fn counts(&self, _buffer: &BufferInfo) -> anyhow::Result<Option<DiagnosticCounts>> {
        Ok(Some(DiagnosticCounts {
            error: 0,
            warning: 2,
            information: 0,
            hint: 1,
        }))
    }
}

struct DemoIcons;

impl IconSource for DemoIcons {
    fn icon(&self, _file_name: &str, extension: &str) -> Option<String> {
        (extension == "rs").then(|| "\u{e7a8}".to_string())
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    let size = terminal.size()?;
    let state: Shared = Arc::new(Mutex::new(EditorState {
        window: WindowInfo {
            width: size.width,
            mode: "n".to_string(),
            line: 42,
            line_count: 1337,
            virtual_column: 8,
            last_column: 61,
            cwd: PathBuf::from("/home/me/project"),
        },
        buffer: BufferInfo {
            kind: BufferKind::Normal,
            path: PathBuf::from("/home/me/project/src/main.rs"),
            modifiable: true,
            filetype: "rust".to_string(),
            encoding: "utf-8".to_string(),
            format: "unix".to_string(),
            size: Some(18_734),
            ..Default::default()
        },
    }));

    let sources = Sources::new(Box::new(DemoHost(Arc::clone(&state))))
        .vcs(Box::new(DemoVcs))
        .diagnostics(Box::new(DemoDiagnostics))
        .icons(Box::new(DemoIcons));
    let statusline = Statusline::new(Options::default(), sources)?;

    loop {
        let width = state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .window
            .width;
        let active = statusline.render(true);
        let inactive = statusline.render(false);

        terminal.draw(|frame| {
            let area = frame.area();
            let width = width.min(area.width);
            let top = Rect::new(area.x, area.y, width, STATUSLINE_HEIGHT);
            let bottom = Rect::new(
                area.x,
                area.bottom().saturating_sub(STATUSLINE_HEIGHT),
                width,
                STATUSLINE_HEIGHT,
            );
            frame.render_widget(StatuslineWidget::new(&inactive), top);
            frame.render_widget(StatuslineWidget::new(&active), bottom);
        })?;

        if !event::poll(Duration::from_millis(100))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };

        let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
        match key.code {
            KeyCode::Char('q') => break,
            KeyCode::Char(mode @ ('n' | 'i' | 'v' | 'V' | 'R' | 'c' | 't')) => {
                state.window.mode = mode.to_string();
            }
            KeyCode::Char('b') => state.window.mode = CTRL_V.to_string(),
            KeyCode::Char('s') => {
                state.buffer.spell_language = match state.buffer.spell_language {
                    Some(_) => None,
                    None => Some("en_us".to_string()),
                };
            }
            KeyCode::Char('w') => state.buffer.wrap = !state.buffer.wrap,
            KeyCode::Char('m') => state.buffer.modified = !state.buffer.modified,
            KeyCode::Left => state.window.width = state.window.width.saturating_sub(5).max(10),
            KeyCode::Right => state.window.width = state.window.width.saturating_add(5),
            _ => {}
        }
    }

    Ok(())
}
