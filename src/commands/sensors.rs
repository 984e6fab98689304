//! Sensors command handler
//!
//! Lists the standard sensor formats with the circle of confusion for the
//! configured divisor.

use anyhow::Result;
use serde::Serialize;

use dofcalc::config::Config;
use dofcalc::{CocDivisor, SensorFormat};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::views::sensors::render_sensors;

pub fn cmd_sensors(config: &Config, ui: &UiContext) -> Result<()> {
    let divisor = config.coc_divisor()?;

    if ui.json {
        emit_event(&json_rows(divisor))?;
    } else {
        print!(
            "{}",
            render_sensors(&SensorFormat::ALL, divisor, &ui.formatter(), ui.color)
        );
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonSensor {
    id: &'static str,
    name: &'static str,
    width: f64,
    height: f64,
    diagonal: f64,
    circle_of_confusion: f64,
    crop_factor: f64,
}

fn json_rows(divisor: CocDivisor) -> Vec<JsonSensor> {
    SensorFormat::ALL
        .into_iter()
        .map(|format| {
            let sensor = format.sensor();
            JsonSensor {
                id: format.id(),
                name: format.display_name(),
                width: sensor.width(),
                height: sensor.height(),
                diagonal: sensor.diagonal(),
                circle_of_confusion: sensor.circle_of_confusion(divisor),
                crop_factor: sensor.crop_factor(),
            }
        })
        .collect()
}
