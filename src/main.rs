//! dofcalc CLI - depth-of-field calculator
//!
//! Usage: dofcalc <COMMAND>
//!
//! Commands:
//!   calc     Hyperfocal distance and near/far limits of acceptable sharpness
//!   sensors  List the standard sensor formats
//!   lenses   Manage the lens catalog

mod commands;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;

use dofcalc::config::{ColorMode, Config};
use dofcalc::presentation::{Cli, Commands, Icons};

use crate::ui::context::UiContext;
use crate::ui::text::ColoredText;
use crate::ui::views::warnings::render_config_warning;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;
    let color = cli.color;

    let ansi = match color {
        Some(ColorMode::Never) => false,
        Some(ColorMode::Always) => true,
        Some(ColorMode::Auto) | None => std::io::stderr().is_terminal(),
    };
    dofcalc::logging::init(cli.verbose, ansi);

    if let Err(err) = run(cli) {
        report_error(&err, json, color);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, warnings) = Config::discover(cli.config.as_deref(), Some(&cwd))
        .context("failed to load configuration")?;
    let ui = UiContext::new(cli.json, cli.color, &config);

    for warning in &warnings {
        tracing::debug!(key = %warning.key, file = %warning.file.display(), "unknown config key");
        eprint!("{}", render_config_warning(warning, ui.color));
    }

    match &cli.command {
        Commands::Calc(args) => commands::calc::cmd_calc(args, &config, &ui),
        Commands::Sensors => commands::sensors::cmd_sensors(&config, &ui),
        Commands::Lenses(command) => commands::lenses::cmd_lenses(command, &config, &ui),
    }
}

fn report_error(err: &anyhow::Error, json: bool, color: Option<ColorMode>) {
    if json {
        let event = serde_json::json!({ "event": "error", "message": format!("{:#}", err) });
        if ui::json::emit_event(&event).is_ok() {
            return;
        }
    }

    let ui = UiContext::new(false, color, &Config::default());
    let icons = Icons::for_unicode(ui.unicode);
    eprintln!(
        "{} {:#}",
        ColoredText::error(format!("{} error:", icons.cross))
            .bold()
            .render(ui.color),
        err
    );
}
