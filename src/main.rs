//! # LLM Model Manager
//!
//! Form-based editor for the `llmModels` list of a One-API / FastGPT `config.json`.
//!
//! ## Features
//! - Interactive terminal UI: list, add, edit, delete and reorder models
//! - Scriptable subcommands (`list`, `show`, `delete`, `move-up`, `move-down`)
//! - Every change is a reload-modify-save of the whole document

mod cli;
mod core;
mod run;
mod tui;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    if let Some(Commands::Completions { shell }) = &args.command {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        cli::generate(*shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    // Print user-friendly message; exit uses Display not Debug
    let config = core::config::load(args.file.as_deref()).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    match args.command {
        None => run::launch_tui(&config)?,
        Some(Commands::List) => core::cli::run_list(&config),
        Some(Commands::Show { name }) => core::cli::run_show(&config, &name),
        Some(Commands::Delete { name }) => core::cli::run_delete(&config, &name),
        Some(Commands::MoveUp { index }) => core::cli::run_move(&config, index, true),
        Some(Commands::MoveDown { index }) => core::cli::run_move(&config, index, false),
        Some(Commands::Config) => core::cli::run_config(&config),
        Some(Commands::Completions { .. }) => {}
    }

    Ok(())
}
