//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the screen
//! produced by `core::presenter`, and translates keyboard events into
//! `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (request in flight): draws every ~80ms for the spinner.
//! - **Idle**: sleeps up to 500ms and only redraws on events or when a
//!   background request reports back.
//!
//! A `SteadyBlock` cursor is used because ratatui's `set_cursor_position`
//! resets the terminal's blink timer on every `draw()`.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;

use crate::analysis::{AnalysisClient, AnalysisOutcome};
use crate::core::action::{Action, Effect, update};
use crate::core::presenter::SUGGESTIONS;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{
    InputBox, InputEvent, ResultListState, SuggestionEvent, SuggestionState,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const ANIMATING_POLL: Duration = Duration::from_millis(80);
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
    pub results: ResultListState,
    pub suggestions: SuggestionState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
            results: ResultListState::new(),
            suggestions: SuggestionState::default(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Kitty keyboard protocol is pushed unconditionally; terminals that
        // lack it ignore the sequence
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock,
            PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES
            )
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady cursor, keyboard enhancement)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            PopKeyboardEnhancementFlags,
            DisableMouseCapture,
            DisableBracketedPaste,
            Hide
        );
    }
}

/// What the loop should do after routing one event.
#[derive(Debug, PartialEq)]
enum Routed {
    Continue,
    Spawn { generation: u64, text: String },
    Quit,
}

impl From<Effect> for Routed {
    fn from(effect: Effect) -> Self {
        match effect {
            Effect::None => Routed::Continue,
            Effect::SpawnAnalysis { generation, text } => Routed::Spawn { generation, text },
            Effect::Quit => Routed::Quit,
        }
    }
}

pub fn run(client: Arc<dyn AnalysisClient>) -> std::io::Result<()> {
    let mut app = App::new(client);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background requests
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true;

    'main: loop {
        let animating = app.outcome.is_pending();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATING_POLL } else { IDLE_POLL };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Drain everything queued before the next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match route_event(&mut app, &mut tui, &event) {
                Routed::Continue => {}
                Routed::Spawn { generation, text } => {
                    spawn_analysis(&app, generation, text, tx.clone());
                }
                Routed::Quit => break 'main,
            }
        }

        // Finished requests
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let was_pending = app.outcome.is_pending();
            if update(&mut app, action) == Effect::Quit {
                break 'main;
            }
            if was_pending && !app.outcome.is_pending() {
                tui.results.reset();
                tui.suggestions.clear();
            }
        }
    }

    info!("Shutting down");
    ratatui::restore();
    Ok(())
}

/// Apply one terminal event to the TUI and core state.
fn route_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Routed {
    match event {
        TuiEvent::Resize => return Routed::Continue,
        TuiEvent::ForceQuit => return update(app, Action::Quit).into(),
        TuiEvent::ScrollUp
        | TuiEvent::ScrollDown
        | TuiEvent::ScrollPageUp
        | TuiEvent::ScrollPageDown
        | TuiEvent::ScrollToTop => {
            tui.results.handle_event(event);
            return Routed::Continue;
        }
        _ => {}
    }

    // Suggestion chips own the keyboard while one is selected
    if tui.suggestions.is_focused() {
        return match tui.suggestions.handle_event(event) {
            Some(SuggestionEvent::Pick(index)) => pick_suggestion(app, tui, index),
            Some(SuggestionEvent::Leave) | None => Routed::Continue,
        };
    }

    let offers_suggestions = matches!(app.outcome, AnalysisOutcome::Empty { .. });
    match event {
        TuiEvent::FocusNext if offers_suggestions => {
            tui.suggestions.focus_first();
            Routed::Continue
        }
        TuiEvent::FocusPrev if offers_suggestions => {
            tui.suggestions.focus_last();
            Routed::Continue
        }
        // Esc with nothing to leave quits
        TuiEvent::Escape => update(app, Action::Quit).into(),
        _ => match tui.input_box.handle_event(event) {
            Some(InputEvent::ContentChanged) => {
                update(app, Action::SetQuery(tui.input_box.buffer.clone())).into()
            }
            Some(InputEvent::Submit(text)) => {
                update(app, Action::SetQuery(text));
                update(app, Action::Submit).into()
            }
            Some(InputEvent::CursorMoved) | None => Routed::Continue,
        },
    }
}

fn pick_suggestion(app: &mut App, tui: &mut TuiState, index: usize) -> Routed {
    let Some(suggestion) = SUGGESTIONS.get(index) else {
        warn!("Suggestion index {} out of range", index);
        return Routed::Continue;
    };
    let effect = update(app, Action::PickSuggestion(suggestion.to_string()));
    tui.input_box.set_text(&app.query);
    effect.into()
}

fn spawn_analysis(app: &App, generation: u64, text: String, tx: mpsc::Sender<Action>) {
    info!("Spawning analysis request (generation={})", generation);
    let client = app.client.clone();
    tokio::spawn(async move {
        let started = Instant::now();
        let result = client.analyze(&text).await;
        debug!(
            "Analysis request finished in {}ms (generation={}, ok={})",
            started.elapsed().as_millis(),
            generation,
            result.is_ok()
        );
        if tx
            .send(Action::AnalysisResolved { generation, result })
            .is_err()
        {
            warn!(
                "Failed to send analysis result (generation={}): receiver dropped",
                generation
            );
        }
    });
}
