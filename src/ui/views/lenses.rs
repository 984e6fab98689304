use std::path::Path;

use dofcalc::presentation::Formatter;
use dofcalc::Lens;

use crate::ui::text::ColoredText;

pub fn render_lens_list(
    lenses: &[Lens],
    catalog: &Path,
    fmt: &Formatter,
    supports_color: bool,
) -> String {
    if lenses.is_empty() {
        return format!(
            "{}\n",
            ColoredText::dim(format!("No lenses in {}", catalog.display())).render(supports_color)
        );
    }

    let mut out = String::new();
    for lens in lenses {
        out.push_str(&format!(
            "{}\n",
            ColoredText::plain(lens.display_name())
                .bold()
                .render(supports_color)
        ));
        out.push_str(&format!("    {}\n", lens_details(lens, fmt)));
    }
    out.push_str(&format!(
        "{}\n",
        ColoredText::dim(format!("{} lens(es) in {}", lenses.len(), catalog.display()))
            .render(supports_color)
    ));
    out
}

/// `105 mm, f/2.8 - f/22, focuses down to 295 mm`
fn lens_details(lens: &Lens, fmt: &Formatter) -> String {
    format!(
        "{} mm, {} - {}, focuses down to {} mm",
        lens.focal_length(),
        fmt.aperture(lens.max_aperture()),
        fmt.aperture(lens.min_aperture()),
        lens.minimal_focal_distance()
    )
}

pub enum LensChange<'a> {
    Added(&'a Lens),
    Replaced(&'a Lens),
    Removed(&'a Lens),
    Edited(&'a Lens),
}

pub fn render_lens_change(change: &LensChange<'_>, fmt: &Formatter, supports_color: bool) -> String {
    let check = fmt.icons().check;
    let (verb, lens) = match change {
        LensChange::Added(lens) => ("Added", lens),
        LensChange::Replaced(lens) => ("Replaced", lens),
        LensChange::Removed(lens) => ("Removed", lens),
        LensChange::Edited(lens) => ("Updated", lens),
    };
    format!(
        "{} {} {}\n    {}\n",
        ColoredText::success(check).render(supports_color),
        verb,
        ColoredText::plain(lens.display_name())
            .bold()
            .render(supports_color),
        lens_details(lens, fmt)
    )
}
