//! OSC Macro Panel - CLI entry point
//!
//! Loads a panel configuration, then runs the terminal panel until the user
//! quits.

use clap::Parser;
use osc_macro_panel::{logging, tui::app::App, PanelLoader, SettingsLoader, UdpSink};
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

/// Terminal button panel that fires OSC macro execution requests
#[derive(Parser)]
#[command(name = "macro-panel")]
#[command(version, about = "Terminal button panel that fires OSC macro execution requests")]
struct Cli {
    /// Panel configuration file
    #[arg(default_value = "config.txt")]
    config: PathBuf,
}

/// Formats an error followed by its chain of causes.
fn describe(error: &dyn Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match SettingsLoader::load_default() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Settings error: {e}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logging::init(&settings.log) {
        eprintln!("Failed to open log file: {e}");
        return ExitCode::FAILURE;
    }

    let panel = match PanelLoader::load_from_path(&cli.config) {
        Ok(panel) => panel,
        Err(e) => {
            tracing::error!("configuration rejected: {}", e);
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let tick_rate = match settings.tui.tick_rate() {
        Ok(tick_rate) => tick_rate,
        Err(e) => {
            eprintln!("Settings error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };
    let sink = match rt.block_on(UdpSink::bind(&panel.destination, settings.osc.source_port)) {
        Ok(sink) => Arc::new(sink),
        Err(e) => {
            eprintln!("OSC error: {}", describe(&e));
            return ExitCode::FAILURE;
        }
    };

    let mut app = App::new(panel, tick_rate);
    if let Err(e) = rt.block_on(app.run(sink)) {
        eprintln!("TUI error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("panel closed");
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::io;

    #[test]
    fn verify_cli() {
        // Verify the CLI configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_config_path() {
        let cli = Cli::try_parse_from(["macro-panel"]).expect("no arguments should parse");
        assert_eq!(cli.config, PathBuf::from("config.txt"));
    }

    #[test]
    fn test_custom_config_path() {
        let cli = Cli::try_parse_from(["macro-panel", "/etc/panels/stage.txt"])
            .expect("path argument should parse");
        assert_eq!(cli.config, PathBuf::from("/etc/panels/stage.txt"));
    }

    #[test]
    fn test_extra_arguments_rejected() {
        assert!(Cli::try_parse_from(["macro-panel", "a.txt", "b.txt"]).is_err());
        assert!(Cli::try_parse_from(["macro-panel", "--socket", "x"]).is_err());
    }

    #[test]
    fn test_describe_walks_sources() {
        let e = osc_macro_panel::PanelError::Read {
            path: PathBuf::from("missing.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert!(describe(&e).ends_with(": gone"));
    }
}
