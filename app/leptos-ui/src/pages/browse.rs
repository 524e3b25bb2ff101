use bab_core::format::{currency, pin_style};
use bab_core::routes::Route;
use bab_core::types::PartType;
use leptos::prelude::*;

use crate::router::Link;
use crate::state::use_app_state;

/// One catalog list: every part of `part_type`, each linking to its info page.
#[component]
fn PartsList(part_type: PartType) -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="parts-list">
            <h2>{part_type.label()}</h2>
            {move || {
                let catalog = state.catalog();
                let parts = catalog.by_type(part_type);
                if parts.is_empty() {
                    let msg = if state.parts_loaded() { "No parts in this list." } else { "Loading parts..." };
                    return view! { <p class="empty">{msg}</p> }.into_any();
                }
                parts.iter().cloned().map(|part| {
                    let href = Route::PartInfo { part_type, id: part.id }.path();
                    let (src, alt) = (part.src.clone(), part.title.clone());
                    view! {
                        <div class="part">
                            <Link to=href>
                                <img src=src.clone() alt=alt.clone() />
                            </Link>
                            <div class="caption">
                                <span class="title">{part.title.clone()}</span>
                                <span class="cost">{currency(part.cost, "$")}</span>
                            </div>
                            {part.on_sale.then(|| view! {
                                <span class="sale" style=pin_style(&[("top", "5px"), ("right", "5px")])>"Sale!"</span>
                            })}
                        </div>
                    }
                }).collect::<Vec<_>>().into_any()
            }}
        </div>
    }
}

/// Parts browser: links to the four lists, with the selected one below.
#[component]
pub fn BrowsePartsPage(child: Option<PartType>) -> impl IntoView {
    view! {
        <div class="browse-parts">
            <nav class="parts-nav" aria-label="Part lists">
                {PartType::ALL.into_iter().map(|t| view! {
                    <Link to=Route::BrowseParts(Some(t)).path() exact=true>{t.label()}</Link>
                }).collect::<Vec<_>>()}
            </nav>
            {match child {
                Some(part_type) => view! { <PartsList part_type=part_type /> }.into_any(),
                None => view! { <p>"Pick a list above to see the parts in it."</p> }.into_any(),
            }}
        </div>
    }
}
