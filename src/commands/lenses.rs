//! Lenses command handler
//!
//! Manages the JSON lens catalog (`lenses list|add|remove|edit`).

use anyhow::{bail, Result};

use dofcalc::config::Config;
use dofcalc::presentation::{
    create_catalog_use_case, AddLensArgs, EditLensArgs, LensCommands,
};
use dofcalc::{Lens, LensUpdate};

use crate::ui::context::UiContext;
use crate::ui::json::emit_event;
use crate::ui::views::lenses::{render_lens_change, render_lens_list, LensChange};

pub fn cmd_lenses(command: &LensCommands, config: &Config, ui: &UiContext) -> Result<()> {
    let catalog = create_catalog_use_case(config);
    let fmt = ui.formatter();

    match command {
        LensCommands::List => {
            let lenses = catalog.list()?;
            if ui.json {
                emit_event(&lenses)?;
            } else {
                print!(
                    "{}",
                    render_lens_list(&lenses, &config.catalog_path(), &fmt, ui.color)
                );
            }
        }
        LensCommands::Add(args) => {
            let lens = lens_from_args(args)?;
            let added = catalog.add(lens.clone())?;
            if ui.json {
                let event = if added { "added" } else { "replaced" };
                emit_event(&serde_json::json!({ "event": event, "lens": lens }))?;
            } else {
                let change = if added {
                    LensChange::Added(&lens)
                } else {
                    LensChange::Replaced(&lens)
                };
                print!("{}", render_lens_change(&change, &fmt, ui.color));
            }
        }
        LensCommands::Remove { query } => {
            let lens = catalog.remove(query)?;
            if ui.json {
                emit_event(&serde_json::json!({ "event": "removed", "lens": lens }))?;
            } else {
                print!(
                    "{}",
                    render_lens_change(&LensChange::Removed(&lens), &fmt, ui.color)
                );
            }
        }
        LensCommands::Edit(args) => {
            let update = update_from_args(args);
            if update.is_empty() {
                bail!("nothing to change: pass at least one field to edit");
            }
            let lens = catalog.edit(&args.query, &update)?;
            if ui.json {
                emit_event(&serde_json::json!({ "event": "edited", "lens": lens }))?;
            } else {
                print!(
                    "{}",
                    render_lens_change(&LensChange::Edited(&lens), &fmt, ui.color)
                );
            }
        }
    }
    Ok(())
}

fn lens_from_args(args: &AddLensArgs) -> Result<Lens> {
    Ok(Lens::from_parts(
        args.manufacturer.as_str(),
        args.model.clone(),
        args.max_aperture,
        args.min_aperture,
        args.focal_length,
        args.min_focus,
    )?)
}

fn update_from_args(args: &EditLensArgs) -> LensUpdate {
    let mut update = LensUpdate::new();
    if let Some(manufacturer) = &args.manufacturer {
        update = update.with_manufacturer(manufacturer.as_str());
    }
    if args.clear_model {
        update = update.with_model_name(None);
    } else if let Some(model) = &args.model {
        update = update.with_model_name(Some(model.clone()));
    }
    if let Some(focal_length) = args.focal_length {
        update = update.with_focal_length(focal_length);
    }
    if let Some(max_aperture) = args.max_aperture {
        update = update.with_max_aperture(max_aperture);
    }
    if let Some(min_aperture) = args.min_aperture {
        update = update.with_min_aperture(min_aperture);
    }
    if let Some(min_focus) = args.min_focus {
        update = update.with_minimal_focal_distance(min_focus);
    }
    update
}
