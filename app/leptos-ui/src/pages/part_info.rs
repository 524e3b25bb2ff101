use bab_core::format::currency;
use bab_core::routes::Route;
use bab_core::types::PartType;
use leptos::prelude::*;

use crate::router::Link;
use crate::state::use_app_state;

/// Details for one catalog entry, looked up from the route parameters.
#[component]
pub fn PartInfoPage(part_type: PartType, id: i64) -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="part-info">
            {move || {
                let part = state.robots.with(|s| s.parts.as_ref().and_then(|c| c.find(part_type, id).cloned()));
                match part {
                    Some(part) => view! {
                        <h1>{part.title.clone()}</h1>
                        <img src=part.src.clone() alt=part.title.clone() />
                        <div class="cost">{currency(part.cost, "$")}</div>
                        {part.on_sale.then(|| view! { <div class="sale">"On sale!"</div> })}
                        <div class="description">{part.description.clone()}</div>
                    }.into_any(),
                    None if !state.parts_loaded() => view! { <p>"Loading part..."</p> }.into_any(),
                    None => view! {
                        <p>{format!("There is no {part_type} part with id {id}.")}</p>
                    }.into_any(),
                }
            }}
            <Link to=Route::BrowseParts(Some(part_type)).path()>{format!("All {}", part_type.label().to_lowercase())}</Link>
        </div>
    }
}
