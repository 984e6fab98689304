//! Calc command handler

use anyhow::{bail, Context, Result};

use dofcalc::application::CalculateOptions;
use dofcalc::config::Config;
use dofcalc::domain::entities::DEFAULT_MIN_APERTURE;
use dofcalc::presentation::{create_calculate_use_case, create_catalog_use_case, CalcArgs};
use dofcalc::{CocDivisor, Lens};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::views::calc::render_report;

/// Minimum focus assumed for a lens given by `--focal-length` alone
const DEFAULT_MIN_FOCUS_MM: f64 = 300.0;

pub fn cmd_calc(args: &CalcArgs, config: &Config, ui: &UiContext) -> Result<()> {
    // Flags win; the config is only consulted for what they leave unset
    let sensor = match args.sensor {
        Some(format) => format.sensor(),
        None => config.sensor()?,
    };

    let divisor = match (args.coc_divisor, args.zeiss) {
        (Some(divisor), _) => CocDivisor::custom(divisor)?,
        (None, Some(ratio)) => ratio.into(),
        (None, None) => config.coc_divisor()?,
    };

    let lens = resolve_lens(args, config)?;
    let options = CalculateOptions::new(args.aperture)
        .with_divisor(divisor)
        .with_object_distance(args.distance);

    let report = create_calculate_use_case(sensor, lens).execute(&options)?;

    if ui.json {
        emit_event(&report)?;
    } else {
        print!("{}", render_report(&report, &ui.formatter(), ui.color));
    }
    Ok(())
}

fn resolve_lens(args: &CalcArgs, config: &Config) -> Result<Lens> {
    if let Some(query) = &args.lens {
        return create_catalog_use_case(config)
            .find(query)
            .with_context(|| format!("failed to pick lens '{}'", query));
    }

    let explicit = &args.explicit_lens;
    match (explicit.focal_length, explicit.max_aperture) {
        (Some(focal_length), Some(max_aperture)) => Ok(Lens::from_parts(
            "Custom",
            None,
            max_aperture,
            explicit.min_aperture.unwrap_or(DEFAULT_MIN_APERTURE),
            focal_length,
            explicit.min_focus.unwrap_or(DEFAULT_MIN_FOCUS_MM),
        )?),
        _ => bail!("no lens given: use --lens <QUERY> or --focal-length with --max-aperture"),
    }
}
