use dofcalc::presentation::Formatter;
use dofcalc::{CocDivisor, SensorFormat};

use crate::ui::text::ColoredText;

pub fn render_sensors(
    formats: &[SensorFormat],
    divisor: CocDivisor,
    fmt: &Formatter,
    supports_color: bool,
) -> String {
    let header = format!(
        "{:<20}{:<20}{:<16}{:<12}{:<16}{}",
        "ID",
        "FORMAT",
        "SIZE",
        "DIAGONAL",
        format!("COC (d/{})", divisor.value()),
        "CROP"
    );
    let mut out = format!("{}\n", ColoredText::plain(header).bold().render(supports_color));

    for format in formats {
        let sensor = format.sensor();
        let size = format!(
            "{} {} {} mm",
            sensor.width(),
            fmt.icons().times,
            sensor.height()
        );
        out.push_str(&format!(
            "{:<20}{:<20}{:<16}{:<12}{:<16}{}\n",
            format.id(),
            format.display_name(),
            size,
            format!("{:.2} mm", sensor.diagonal()),
            fmt.coc(sensor.circle_of_confusion(divisor)),
            ColoredText::dim(format!("{:.2}", sensor.crop_factor())).render(supports_color),
        ));
    }

    out
}
