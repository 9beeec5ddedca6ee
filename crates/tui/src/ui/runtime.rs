//! Runtime: terminal lifecycle and the event loop of the demo.
//!
//! - A dedicated input task blocks on `crossterm::event::read()` and forwards
//!   events over a Tokio channel.
//! - The loop routes keys and mouse events to `MainView`, applies the
//!   returned effects and redraws only when the app marks itself dirty.
//! - `render_to_lines` draws one frame into an off-screen buffer for the
//!   `render` command and for tests.

use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rat_focus::FocusBuilder;
use ratatui::{
    Terminal,
    backend::{CrosstermBackend, TestBackend},
    buffer::Buffer,
};
use tokio::{signal, sync::mpsc};
use tracing::{debug, warn};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::main_component::MainView;

const MOUSE_MOVE_THROTTLE: Duration = Duration::from_millis(16);

/// Spawns the blocking input reader and returns the receiving end.
///
/// Mouse moves are throttled to one per 16 ms.
fn spawn_input_thread() -> mpsc::Receiver<Event> {
    let (sender, receiver) = mpsc::channel(256);
    tokio::task::spawn_blocking(move || {
        let mut last_mouse_move = Instant::now();
        loop {
            match event::poll(MOUSE_MOVE_THROTTLE) {
                Ok(false) => {
                    if sender.is_closed() {
                        break;
                    }
                    continue;
                }
                Ok(true) => {}
                Err(error) => {
                    warn!(%error, "failed to poll terminal input");
                    break;
                }
            }
            match event::read() {
                Ok(event) => {
                    let is_mouse_move = event.as_mouse_event().is_some_and(|mouse| mouse.kind == MouseEventKind::Moved);
                    if is_mouse_move {
                        if last_mouse_move.elapsed() < MOUSE_MOVE_THROTTLE {
                            continue;
                        }
                        last_mouse_move = Instant::now();
                    }
                    if sender.blocking_send(event).is_err() {
                        break;
                    }
                }
                Err(error) => {
                    warn!(%error, "failed to read terminal input");
                    break;
                }
            }
        }
    });
    receiver
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture).context("enter alternate screen")?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Rebuilds focus just before drawing so structure changes are reflected.
fn prepare_frame(app: &mut App, main_view: &mut MainView) {
    let old_focus = std::mem::take(&mut app.focus);
    app.focus = Rc::new(FocusBuilder::rebuild_for(&*app, Some(Rc::unwrap_or_clone(old_focus))));
    main_view.restore_focus(app);
}

fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    prepare_frame(app, main_view);
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    app.dirty = false;
    Ok(())
}

fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) {
    let effects = match input_event {
        // Release and repeat events would double every activation on terminals
        // that report them.
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => {
            debug!(width, height, "terminal resized");
            app.dirty = true;
            Vec::new()
        }
        Event::Key(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_) => Vec::new(),
    };
    app.apply_effects(effects);
}

/// Sets up the terminal, runs the event loop until quit and restores the
/// terminal, even when the loop fails.
pub async fn run_app(mut app: App) -> Result<()> {
    let mut input_receiver = spawn_input_thread();
    let mut main_view = MainView::new();
    let mut terminal = setup_terminal()?;

    let outcome = event_loop(&mut terminal, &mut app, &mut main_view, &mut input_receiver).await;
    input_receiver.close();
    merge_shutdown(outcome, cleanup_terminal(&mut terminal))
}

/// The loop's error wins; a cleanup failure after it is only logged.
fn merge_shutdown(outcome: Result<()>, cleanup: Result<()>) -> Result<()> {
    match (outcome, cleanup) {
        (Err(error), Err(cleanup_error)) => {
            warn!(error = %cleanup_error, "failed to restore terminal");
            Err(error)
        }
        (Ok(()), cleanup) => cleanup,
        (outcome, Ok(())) => outcome,
    }
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    main_view: &mut MainView,
    input_receiver: &mut mpsc::Receiver<Event>,
) -> Result<()> {
    render(terminal, app, main_view)?;
    loop {
        tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                handle_input_event(app, main_view, event);
            }
            _ = signal::ctrl_c() => break,
        }

        if app.should_exit {
            break;
        }
        if app.dirty {
            render(terminal, app, main_view)?;
        }
    }
    Ok(())
}

/// Draws one frame of `app` off screen and returns it as text lines.
pub fn render_to_lines(app: &mut App, width: u16, height: u16) -> Result<Vec<String>> {
    let buffer = render_to_buffer(app, width, height)?;
    let lines = (0..buffer.area.height)
        .map(|y| {
            let line: String = (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect();
            line.trim_end().to_string()
        })
        .collect();
    Ok(lines)
}

/// Draws one frame of `app` off screen and keeps the styled cells.
pub(crate) fn render_to_buffer(app: &mut App, width: u16, height: u16) -> Result<Buffer> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    let mut main_view = MainView::new();
    prepare_frame(app, &mut main_view);
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(terminal.backend().buffer().clone())
}
