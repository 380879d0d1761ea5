//! Curve-Spacer.
//!
//! Liest die Layout-Optionen (TOML), verteilt die Elemente entlang der Kurve
//! und gibt die Platzierungen als JSON auf stdout aus.
//!
//! Aufruf: `curve-spacer [--init] [OPTIONEN.toml]`

use anyhow::Context;
use curve_spacer::{run_layout, LayoutOptions};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Curve-Spacer v{} startet...", env!("CARGO_PKG_VERSION"));

        let mut init = false;
        let mut config_path = None;
        for arg in std::env::args_os().skip(1) {
            if arg == "--init" {
                init = true;
            } else {
                config_path = Some(PathBuf::from(arg));
            }
        }
        let config_path = config_path.unwrap_or_else(LayoutOptions::config_path);

        if init {
            return LayoutOptions::default().save_to_file(&config_path);
        }

        let options = LayoutOptions::load_from_file(&config_path);
        let placements = run_layout(&options)?;

        let json = serde_json::to_string_pretty(&placements)
            .context("Platzierungen konnten nicht serialisiert werden")?;
        println!("{json}");
        Ok(())
    }
}
