//! CalcPro - a desktop calculator
//!
//! Buttons and keys build a left-to-right expression shown above the
//! current entry. `--keys` runs the same engine without a window.

mod app;
mod config;
mod engine;
mod format;
mod headless;
mod keymap;

use anyhow::Context as _;
use app::CalcProApp;
use clap::Parser;
use config::CalcConfig;
use eframe::NativeOptions;
use engine::Calculator;
use std::path::PathBuf;
use tracing::info;

/// CalcPro desktop calculator
#[derive(Debug, Parser)]
#[command(name = "calcpro")]
#[command(about = "Desktop calculator with a running expression display", version)]
struct Args {
    /// Run without a window: apply these keys and print the display.
    /// Besides the keyboard keys, `n` toggles sign, `r` is square root,
    /// `<` is backspace and `c` clears.
    #[arg(long, value_name = "SCRIPT")]
    keys: Option<String>,

    /// Config file path (uses the platform config dir if not specified)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Write the effective configuration to the config path and exit
    #[arg(long, conflicts_with = "print_config")]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    calccore::logging::init("calcpro=info,calccore=info");

    let config_path = args.config.unwrap_or_else(CalcConfig::default_path);
    let config = CalcConfig::load_from(&config_path);

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    if args.init_config {
        config
            .save_to(&config_path)
            .with_context(|| format!("failed to write {}", config_path.display()))?;
        info!(path = %config_path.display(), "config written");
        return Ok(());
    }

    if let Some(script) = args.keys {
        let mut calc = Calculator::new();
        headless::run_script(&mut calc, &script)?;
        println!("{}", headless::render(&calc));
        return Ok(());
    }

    run_window(config)
}

fn run_window(config: CalcConfig) -> anyhow::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_resizable(false)
            .with_title("CalcPro"),
        ..Default::default()
    };

    info!("starting CalcPro");
    eframe::run_native(
        "CalcPro",
        options,
        Box::new(move |cc| {
            let theme = config.theme();
            theme.apply(&cc.egui_ctx);
            Box::new(CalcProApp::new(cc, config, theme))
        }),
    )
    .map_err(|e| anyhow::anyhow!("window error: {e}"))
}
