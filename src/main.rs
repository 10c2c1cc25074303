mod app;
mod audio;
mod config;
mod error;
mod playback;
mod runtime;
mod timefmt;
mod track;
mod ui;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    runtime::run()
}
