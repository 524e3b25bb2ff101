use bab_core::actions;
use bab_core::api::RobotApi;
use bab_core::store::{Observable, RobotsState, StateCell};
use bab_core::types::{PartType, PartsCatalog};

use super::part_line;

/// Render the catalog, or a single list of it, one part per line.
pub fn render_catalog(catalog: &PartsCatalog, only: Option<PartType>) -> String {
    let mut out = String::new();
    for part_type in PartType::ALL {
        if only.is_some_and(|t| t != part_type) {
            continue;
        }
        let parts = catalog.by_type(part_type);
        out.push_str(&format!("{} ({})\n", part_type.label(), parts.len()));
        for part in parts {
            out.push_str(&part_line(part));
            out.push('\n');
        }
    }
    out
}

/// Run the `parts` subcommand: fetch the catalog and print it.
pub async fn run(api: &dyn RobotApi, only: Option<PartType>) -> anyhow::Result<()> {
    let robots = Observable::new(RobotsState::default());
    actions::get_parts(api, &robots).await?;
    let catalog = robots.read(|s| s.parts_or_default());
    print!("{}", render_catalog(&catalog, only));
    Ok(())
}
