//! Milestone scroller demo.
//!
//! Opens a long grouped list in the terminal.  While you scroll, a floating
//! label names the section you are in and tick marks on the right border show
//! where every section starts.  The overlay hides once scrolling stops.

mod app;
mod ui;

use std::io::{self, stderr};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    widgets::{Block, Borders, Paragraph},
    Terminal,
};

use milestone_scroller::{config::ScrollerConfig, MilestoneOptions, MilestoneScroller};

use crate::app::{
    demo_grid::{generate_rows, DemoGrid, DemoRow, RowKind},
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::ui::{
    layout::AppLayout, list_widget::ListWidget, overlay_widget::OverlayWidget, theme::Theme,
};

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Scroll a long list with a milestone indicator")]
struct Cli {
    /// Number of rows to generate.
    #[arg(long, default_value_t = 2000)]
    rows: usize,

    /// Start a new section every N rows.
    #[arg(long, default_value_t = 40)]
    group_every: usize,

    /// Row field shown in the label (`name`, `group`, `kind`, `index`).
    #[arg(long)]
    text_field: Option<String>,

    /// Quiet period (ms) before the overlay hides.
    #[arg(long)]
    idle_ms: Option<u64>,

    /// Write the effective settings to the config file and exit.
    #[arg(long)]
    save_config: bool,
}

impl Cli {
    /// Config file values overridden by any flags given.
    fn effective_config(&self) -> ScrollerConfig {
        self.apply_overrides(ScrollerConfig::load())
    }

    fn apply_overrides(&self, mut config: ScrollerConfig) -> ScrollerConfig {
        if let Some(field) = &self.text_field {
            config.text_property = field.clone();
        }
        if let Some(ms) = self.idle_ms {
            config.set_idle_delay_ms(ms);
        }
        config
    }
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.effective_config();

    if cli.save_config {
        config.save()?;
        println!("saved {config:?}");
        return Ok(());
    }

    // ── grid + scroller ───────────────────────────────────────
    let grid = DemoGrid::new(generate_rows(cli.rows, cli.group_every));
    let options = MilestoneOptions::from_config(&config)
        .milestone_test(|row: &DemoRow| row.kind == RowKind::Group)
        .label_height(app::demo_grid::ROW_PX);
    let mut scroller = MilestoneScroller::new(options);
    scroller.init(&grid)?;
    let mut state = AppState::new(grid, scroller);

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    let mut stderr_handle = stderr();
    execute!(stderr_handle, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr());
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut state).await;

    // ── teardown ──────────────────────────────────────────────
    state.scroller.destroy();
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    state: &mut AppState,
) -> Result<()> {
    let mut events = spawn_event_reader(Duration::from_millis(100));

    loop {
        terminal.draw(|frame| {
            let screen = frame.area();
            let layout = AppLayout::from_area(screen);

            let list_block = Block::default()
                .title(format!(" {} rows ", state.grid.rows.len()))
                .title_style(Theme::title_style())
                .borders(Borders::ALL)
                .border_style(Theme::border_style());

            // Geometry snapshots are per session, so a moved list ends it.
            if state.grid.set_areas(layout.viewport, screen) {
                handler::handle_resize(state);
            }

            frame.render_widget(
                ListWidget::new(&state.grid).block(list_block),
                layout.list_pane,
            );
            let status = Paragraph::new(state.status_text()).style(Theme::status_bar_style());
            frame.render_widget(status, layout.status_area);
            frame.render_widget(
                OverlayWidget {
                    overlay: state.scroller.overlay(),
                    track_column: layout.track_column,
                },
                screen,
            );
        })?;

        let idle_at = state.scroller.next_deadline();
        let wake = tokio::time::Instant::from_std(idle_at.unwrap_or_else(Instant::now));

        tokio::select! {
            biased;

            Some(event) = events.recv() => {
                let now = Instant::now();
                match event {
                    AppEvent::Key(k) => handler::handle_key(state, k, now),
                    AppEvent::Wheel(delta) => handler::handle_wheel(state, delta, now),
                    AppEvent::Resize(_, _) => handler::handle_resize(state),
                    AppEvent::Tick => {
                        state.scroller.poll_idle(now);
                    }
                }
            }

            _ = tokio::time::sleep_until(wake), if idle_at.is_some() => {
                state.scroller.poll_idle(Instant::now());
            }

            else => break,
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}
