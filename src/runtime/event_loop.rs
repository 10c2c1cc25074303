use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{App, Screen};
use crate::audio::{AssetResolver, AudioOutput};
use crate::config;
use crate::error::PlaybackError;
use crate::playback::{PlaybackController, PlaybackState, PositionTicker, Tick};
use crate::ui;

/// Longest the loop blocks on input before redrawing.
const MAX_INPUT_WAIT: Duration = Duration::from_millis(50);

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    OpenPlayer,
    Dismiss,
    PlayPause,
    SkipBack,
    SkipForward,
    ToggleLoop,
    Stop,
    BeginScrub,
    ScrubBack,
    ScrubForward,
    CommitScrub,
    CancelScrub,
    Quit,
}

/// Main terminal event loop: polls the ticker, draws, and handles input.
/// Returns `Ok(())` when shutdown is requested.
pub fn run<O: AudioOutput, R: AssetResolver>(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut App,
    controller: &mut PlaybackController<O, R>,
    ticker: &mut PositionTicker,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        if let Tick::Published(snap) = ticker.poll(Instant::now(), controller, &app.gesture) {
            log::trace!("tick {:.1}s", snap.position.as_secs_f64());
        }

        terminal.draw(|f| ui::draw(f, app, &settings.controls))?;

        let wait = ticker.time_until_due(Instant::now()).min(MAX_INPUT_WAIT);
        if event::poll(wait)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, settings, app, controller) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Map and apply one key press. Returns `true` when the app should exit.
pub fn handle_key_event<O: AudioOutput, R: AssetResolver>(
    key: KeyEvent,
    settings: &config::Settings,
    app: &mut App,
    controller: &mut PlaybackController<O, R>,
) -> bool {
    match action_for_key(app, key) {
        Some(action) => dispatch(action, settings, app, controller),
        None => false,
    }
}

/// Translate a key press into an [`Action`] for the current screen.
pub fn action_for_key(app: &App, key: KeyEvent) -> Option<Action> {
    // Raw mode swallows SIGINT.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match app.screen {
        Screen::Detail => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('p') => Some(Action::OpenPlayer),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        Screen::Player if app.gesture.is_active() => match key.code {
            KeyCode::Char('h') | KeyCode::Left => Some(Action::ScrubBack),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::ScrubForward),
            KeyCode::Enter | KeyCode::Tab => Some(Action::CommitScrub),
            KeyCode::Esc => Some(Action::CancelScrub),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
        Screen::Player => match key.code {
            KeyCode::Char(' ') | KeyCode::Char('p') => Some(Action::PlayPause),
            KeyCode::Char('h') | KeyCode::Left => Some(Action::SkipBack),
            KeyCode::Char('l') | KeyCode::Right => Some(Action::SkipForward),
            KeyCode::Char('r') => Some(Action::ToggleLoop),
            KeyCode::Char('s') => Some(Action::Stop),
            KeyCode::Tab => Some(Action::BeginScrub),
            KeyCode::Esc | KeyCode::Char('x') => Some(Action::Dismiss),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        },
    }
}

/// Apply `action` to the view model and controller. Returns `true` on quit.
pub fn dispatch<O: AudioOutput, R: AssetResolver>(
    action: Action,
    settings: &config::Settings,
    app: &mut App,
    controller: &mut PlaybackController<O, R>,
) -> bool {
    let skip = settings.controls.skip_seconds as f64;
    let step = settings.controls.scrub_step_seconds as f64;

    let result = match action {
        Action::OpenPlayer => {
            app.open_player();
            let track = app.track.clone();
            if settings.playback.autoplay {
                controller.start(track)
            } else {
                controller.prepare(track)
            }
        }
        Action::Dismiss => {
            controller.stop();
            app.close_player();
            Ok(())
        }
        Action::PlayPause => {
            if controller.state() == PlaybackState::Idle {
                // Stopped: play starts the track over.
                controller.start(app.track.clone())
            } else {
                controller.play_pause()
            }
        }
        Action::SkipBack => controller.skip(-skip),
        Action::SkipForward => controller.skip(skip),
        Action::ToggleLoop => {
            controller.toggle_loop();
            Ok(())
        }
        Action::Stop => {
            controller.stop();
            Ok(())
        }
        Action::BeginScrub => {
            if controller.state() == PlaybackState::Idle {
                Err(PlaybackError::NoActiveResource)
            } else {
                app.begin_scrub();
                Ok(())
            }
        }
        Action::ScrubBack => {
            app.nudge_scrub(-step);
            Ok(())
        }
        Action::ScrubForward => {
            app.nudge_scrub(step);
            Ok(())
        }
        Action::CommitScrub => match app.gesture.commit() {
            Some(secs) => controller.seek(secs),
            None => Ok(()),
        },
        Action::CancelScrub => {
            app.gesture.cancel();
            Ok(())
        }
        Action::Quit => {
            controller.stop();
            return true;
        }
    };

    match result {
        Ok(()) => app.clear_status(),
        Err(e) => {
            log::warn!("{action:?} failed: {e}");
            app.set_status(e.to_string());
        }
    }
    false
}
