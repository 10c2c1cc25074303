use std::env;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::App;
use crate::audio::{DirResolver, RodioOutput};
use crate::playback::{LogObserver, PlaybackController, PositionTicker, SnapshotHandle};

mod event_loop;
mod logging;
mod settings;
mod startup;


pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings::load_settings();
    logging::init(&settings.logging);

    let assets_dir = env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.assets.dir.clone());
    let resolver = DirResolver::new(assets_dir, &settings.assets);
    let track = startup::build_track(&settings, &resolver);
    log::info!(
        "track {:?} from {} (audio {:?})",
        track.title(),
        resolver.root().display(),
        track.audio_resource()
    );

    let output = RodioOutput::new(settings.audio.device.clone());
    let mut controller = PlaybackController::new(output, resolver);
    let playback_handle: SnapshotHandle = Arc::new(Mutex::new(controller.snapshot()));
    controller.subscribe(Box::new(LogObserver::default()));
    controller.subscribe(Box::new(playback_handle.clone()));
    startup::apply_playback_defaults(&mut controller, &settings);

    let mut app = App::new(track, playback_handle);
    let mut ticker = PositionTicker::new(
        Duration::from_millis(settings.audio.tick_ms),
        Instant::now(),
    );
    log::debug!("position tick every {:?}", ticker.interval());

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(
        &mut terminal,
        &settings,
        &mut app,
        &mut controller,
        &mut ticker,
    );

    controller.stop();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
