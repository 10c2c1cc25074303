use crate::config;

pub fn load_settings() -> config::Settings {
    match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => s,
            Err(msg) => {
                eprintln!("breather: invalid config, using defaults: {msg}");
                config::Settings::default()
            }
        },
        Err(e) => {
            // A broken config file should not keep the player from starting.
            eprintln!("breather: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
