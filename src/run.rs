//! Application run modes: logger init, TUI launch.

use crate::cli::Args;
use crate::core;
use crate::core::config::Config;
use crate::core::store::Store;

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.is_tui() {
        if let Some(dir) = core::paths::cache_dir() {
            let _ = std::fs::create_dir_all(dir);
        }
        if let Some(path) = core::paths::log_file()
            && let Ok(file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

/// Run the TUI on the configured document. Returns on IO error or quit.
pub fn launch_tui(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::new(config.models_path.clone());
    log::info!("Opening {}", store.path().display());
    crate::tui::run(store)?;
    Ok(())
}
