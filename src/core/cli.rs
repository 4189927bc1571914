//! CLI-only commands: list, show, delete, reorder, config info.
//!
//! These run without opening the TUI and produce plain text output.

use crate::core::config::Config;
use crate::core::ops;
use crate::core::paths;
use crate::core::purpose;
use crate::core::store::Store;

fn store(config: &Config) -> Store {
    Store::new(config.models_path.clone())
}

/// Load for display: decode errors are reported on stderr but still list nothing.
fn load_reporting(store: &Store) -> Vec<crate::core::record::ModelRecord> {
    match store.try_load() {
        Ok(models) => models,
        Err(e) => {
            eprintln!("Warning: {}", e);
            vec![]
        }
    }
}

/// Run the `list` command: one line per model in document order.
pub fn run_list(config: &Config) {
    let models = load_reporting(&store(config));
    if models.is_empty() {
        println!("No models available.");
        return;
    }

    let name_w = models.iter().map(|m| m.name.len()).max().unwrap_or(0).max(20);
    let model_w = models
        .iter()
        .map(|m| m.model.len())
        .max()
        .unwrap_or(0)
        .max(20);

    println!(
        "{:>3}  {:<name_w$}  {:<model_w$}  {:>8}  Purposes",
        "#", "Name", "Model", "Context"
    );
    println!(
        "---  {}  {}  --------  --------",
        "-".repeat(name_w),
        "-".repeat(model_w)
    );
    for (i, m) in models.iter().enumerate() {
        println!(
            "{:>3}  {:<name_w$}  {:<model_w$}  {:>8}  {}",
            i,
            m.name,
            m.model,
            m.max_context,
            purpose::summary(m)
        );
    }

    let missing = purpose::missing(&models);
    if !missing.is_empty() {
        let keys: Vec<_> = missing.iter().map(|f| f.key()).collect();
        println!("\nHint: no model has {} enabled", keys.join(", "));
    }
    println!("\n{} model(s) listed", models.len());
}

/// Run the `show` command: label/value rows of one model.
pub fn run_show(config: &Config, name: &str) {
    let Some(record) = ops::find(&store(config), name) else {
        eprintln!("Error: no model named '{}'", name);
        std::process::exit(1);
    };
    let label_w = record
        .display_rows()
        .iter()
        .map(|(l, _)| l.len())
        .max()
        .unwrap_or(0);
    for (label, value) in record.display_rows() {
        println!("{:<label_w$}  {}", label, value);
    }
}

/// Run the `delete` command. Deleting an absent name succeeds.
pub fn run_delete(config: &Config, name: &str) {
    match ops::delete(&store(config), name) {
        Ok(0) => println!("No model named '{}'; nothing deleted", name),
        Ok(n) => println!("Deleted {} model(s) named '{}'", n, name),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Run the `move-up` / `move-down` commands.
pub fn run_move(config: &Config, index: usize, up: bool) {
    let store = store(config);
    let result = if up {
        ops::move_up(&store, index)
    } else {
        ops::move_down(&store, index)
    };
    match result {
        Ok(true) => {
            let to = if up { index - 1 } else { index + 1 };
            println!("Moved model {} to position {}", index, to);
        }
        Ok(false) => println!("Model {} not moved (already at the edge)", index),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Run the `config` command: display paths and record count.
pub fn run_config(config: &Config) {
    let log_file = paths::log_file()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "-".to_string());
    let store = store(config);
    let status = if store.path().exists() {
        match store.try_load() {
            Ok(models) => format!("{} model(s)", models.len()),
            Err(e) => format!("unreadable ({})", e),
        }
    } else {
        "not created yet".to_string()
    };

    println!("Document:  {}", store.path().display());
    println!("Lock:      {}", paths::lock_path(store.path()).display());
    println!("Log:       {}", log_file);
    println!("Status:    {}", status);
}
