use bab_core::actions;
use bab_core::api::RobotApi;
use bab_core::format::currency;
use bab_core::routes::{Resolution, Route};
use bab_core::store::{Observable, RobotsState, StateCell};
use bab_core::types::{Part, PartType};

use super::CURRENCY_SYMBOL;

/// Resolve `/parts/<type>/<id>` through the route table.
///
/// Returns an error for paths the guard blocks or that match nothing.
pub fn resolve_part_route(part_type: &str, id: &str) -> anyhow::Result<(PartType, i64)> {
    let path = format!("/parts/{part_type}/{id}");
    match Route::resolve(&path) {
        Resolution::Matched(Route::PartInfo { part_type, id }) => Ok((part_type, id)),
        Resolution::Blocked { path } => {
            tracing::warn!(%path, "navigation blocked: part id is not an integer");
            anyhow::bail!("invalid part id {id:?}: expected an integer")
        }
        Resolution::Matched(_) | Resolution::NotFound { .. } => {
            anyhow::bail!("no such page: {path}")
        }
    }
}

pub fn render_part(part: &Part) -> String {
    let mut out = format!(
        "{} ({} #{})\n{}\n",
        part.title,
        part.part_type,
        part.id,
        currency(part.cost, CURRENCY_SYMBOL)
    );
    if part.on_sale {
        out.push_str("On sale!\n");
    }
    if !part.description.is_empty() {
        out.push('\n');
        out.push_str(&part.description);
        out.push('\n');
    }
    out
}

/// Run the `part` subcommand: show one catalog entry.
pub async fn run(api: &dyn RobotApi, part_type: &str, id: &str) -> anyhow::Result<()> {
    let (part_type, id) = resolve_part_route(part_type, id)?;

    let robots = Observable::new(RobotsState::default());
    actions::get_parts(api, &robots).await?;

    let part = robots.read(|s| s.parts_or_default().find(part_type, id).cloned());
    match part {
        Some(part) => {
            print!("{}", render_part(&part));
            Ok(())
        }
        None => anyhow::bail!("no {part_type} part with id {id}"),
    }
}

#[cfg(test)]
mod tests {
    use axum::{routing::get, Json, Router};

    use super::*;
    use crate::client::HttpApi;
    use crate::commands::test_server;
    use bab_core::config::ApiConfig;

    #[test]
    fn guard_blocks_non_numeric_ids() {
        let err = resolve_part_route("heads", "abc").unwrap_err();
        assert!(err.to_string().contains("expected an integer"));
    }

    #[test]
    fn unknown_part_type_is_not_found() {
        let err = resolve_part_route("legs", "1").unwrap_err();
        assert!(err.to_string().contains("no such page"));
    }

    #[test]
    fn numeric_id_resolves() {
        assert_eq!(
            resolve_part_route("arms", "3").expect("route"),
            (PartType::Arms, 3)
        );
    }

    #[tokio::test]
    async fn shows_part_from_catalog() {
        let app = Router::new().route(
            "/api/parts",
            get(|| async { Json(test_server::catalog_json()) }),
        );
        let api = HttpApi::new(ApiConfig {
            base_url: test_server::spawn(app).await,
        });

        assert!(run(&api, "heads", "2").await.is_ok());
        let err = run(&api, "heads", "99").await.unwrap_err();
        assert!(err.to_string().contains("id 99"));
    }

    #[test]
    fn render_includes_sale_and_description() {
        let part = Part {
            id: 2,
            part_type: PartType::Heads,
            title: "Friendly Bot".into(),
            description: "Smiles a lot.".into(),
            src: String::new(),
            cost: 945.0,
            on_sale: true,
        };
        let text = render_part(&part);
        assert!(text.starts_with("Friendly Bot (heads #2)"));
        assert!(text.contains("$945.00"));
        assert!(text.contains("On sale!"));
        assert!(text.ends_with("Smiles a lot.\n"));
    }
}
