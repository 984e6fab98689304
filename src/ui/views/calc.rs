use dofcalc::application::DofReport;
use dofcalc::presentation::Formatter;
use dofcalc::Distance;

use crate::ui::text::ColoredText;

const LABEL_WIDTH: usize = 16;

pub fn render_report(report: &DofReport, fmt: &Formatter, supports_color: bool) -> String {
    let mut out = String::new();
    let mut row = |label: &str, value: ColoredText| {
        out.push_str(&format!(
            "  {:<width$}{}\n",
            label,
            value.render(supports_color),
            width = LABEL_WIDTH
        ));
    };

    row("Lens", ColoredText::plain(report.lens.display_name()).bold());
    row("Sensor", ColoredText::plain(report.sensor.to_string()));
    row("Aperture", ColoredText::plain(fmt.aperture(report.aperture)));
    row(
        "Circle of conf.",
        ColoredText::plain(format!(
            "{} (d/{})",
            fmt.coc(report.circle_of_confusion),
            report.coc_divisor
        )),
    );
    row(
        "Hyperfocal",
        ColoredText::info(fmt.length(report.hyperfocal)).bold(),
    );

    if let Some(focus) = &report.focus {
        row("Focus", ColoredText::plain(fmt.length(focus.object_distance)));
        row("Near limit", ColoredText::plain(fmt.distance(focus.near)));
        row("Far limit", distance_text(fmt, focus.far));
        row("Depth of field", distance_text(fmt, focus.total).bold());
    }

    out
}

fn distance_text(fmt: &Formatter, distance: Distance) -> ColoredText {
    match distance {
        Distance::Infinity => ColoredText::success(fmt.distance(distance)),
        Distance::Finite(_) => ColoredText::plain(fmt.distance(distance)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dofcalc::application::CalculateOptions;
    use dofcalc::presentation::create_calculate_use_case;
    use dofcalc::{Lens, Sensor, ZeissRatio};

    fn report(distance: Option<f64>) -> DofReport {
        let lens = Lens::new("Sigma", 105.0, 2.8, 295.0).unwrap();
        create_calculate_use_case(Sensor::full_frame(), lens)
            .execute(
                &CalculateOptions::new(2.8)
                    .with_divisor(ZeissRatio::Modern)
                    .with_object_distance(distance),
            )
            .unwrap()
    }

    #[test]
    fn renders_hyperfocal_only_without_distance() {
        let text = render_report(&report(None), &Formatter::new(1, true), false);
        assert!(text.contains("Hyperfocal      136613.3 mm"));
        assert!(!text.contains("Near limit"));
    }

    #[test]
    fn renders_focus_limits() {
        let text = render_report(&report(Some(3000.0)), &Formatter::new(1, true), false);
        assert!(text.contains("  Lens            Sigma 105mm f/2.8\n"));
        assert!(text.contains("Aperture        f/2.8"));
        assert!(text.contains("0.0288 mm (d/1500)"));
        assert!(text.contains("Near limit      2937.7 mm"));
        assert!(text.contains("Far limit       3065.0 mm"));
        assert!(text.contains("Depth of field  127.3 mm"));
    }

    #[test]
    fn infinite_far_limit_uses_glyph() {
        let text = render_report(&report(Some(200_000.0)), &Formatter::new(1, false), false);
        assert!(text.contains("Far limit       inf\n"));
        assert!(text.contains("Depth of field  inf\n"));
    }
}
