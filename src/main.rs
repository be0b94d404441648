use clap::Parser;
use folio::config::AppConfig;
use folio::ui;
use gtk4::glib;
use gtk4::prelude::*;
use gtk4::Application;
use log::{error, info, warn};
use std::path::PathBuf;

const APP_ID: &str = "org.folio.Folio";

/// folio - a single-page portfolio with animated skill gauges
#[derive(Parser, Debug, Clone)]
#[command(name = "folio")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,

    /// Print the default configuration as JSON and exit
    #[arg(long = "print-default-config")]
    print_default_config: bool,

    /// Config file to load instead of the one in the user config directory
    #[arg(value_name = "CONFIG_FILE")]
    config_file: Option<PathBuf>,
}

fn main() -> glib::ExitCode {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    if cli.print_default_config {
        return match serde_json::to_string_pretty(&AppConfig::default()) {
            Ok(json) => {
                println!("{json}");
                glib::ExitCode::SUCCESS
            }
            Err(e) => {
                error!("Failed to serialize default config: {}", e);
                glib::ExitCode::FAILURE
            }
        };
    }

    warn!("Starting folio v{}", env!("CARGO_PKG_VERSION"));

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load config: {:#}", e);
            return glib::ExitCode::FAILURE;
        }
    };

    let app = Application::builder().application_id(APP_ID).build();

    app.connect_activate(move |app| {
        if let Err(e) = ui::build_ui(app, &config) {
            error!("Failed to build window: {:#}", e);
            app.quit();
        }
    });

    // Pass only the program name; arguments were already parsed
    app.run_with_args(&["folio"])
}

fn load_config(cli: &Cli) -> anyhow::Result<AppConfig> {
    match &cli.config_file {
        Some(path) => {
            info!("Loading config from {}", path.display());
            AppConfig::load_from_path(path)
        }
        None => AppConfig::load(),
    }
}
