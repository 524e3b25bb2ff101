use bab_core::builder::{RobotSelection, Slot};
use bab_core::format::pin_style;
use bab_core::routes::Route;
use bab_core::store::StateCell;
use leptos::prelude::*;

use crate::router::Link;
use crate::state::use_app_state;

/// One slot of the builder: the selected part with previous/next arrows.
#[component]
pub fn PartSelector(slot: Slot, selection: RwSignal<RobotSelection>) -> impl IntoView {
    let state = use_app_state();
    let part = move || selection.with(|sel| state.robots.with(|s| {
        s.parts.as_ref().and_then(|c| sel.part(slot, c).cloned())
    }));

    let select_previous = move |_| {
        let catalog = state.robots.read(|s| s.parts_or_default());
        selection.update(|sel| sel.select_previous(slot, &catalog));
    };
    let select_next = move |_| {
        let catalog = state.robots.read(|s| s.parts_or_default());
        selection.update(|sel| sel.select_next(slot, &catalog));
    };

    view! {
        <div class=format!("part {}", slot.css_class())>
            {move || match part() {
                Some(part) => {
                    let href = Route::PartInfo { part_type: part.part_type, id: part.id }.path();
                    view! {
                        <Link to=href>
                            <img src=part.src.clone() title=part.title.clone() alt=part.title.clone() />
                        </Link>
                        {part.on_sale.then(|| view! {
                            <span class="sale" style=pin_style(&[("bottom", "5px"), ("right", "5px")])>
                                "Sale!"
                            </span>
                        })}
                    }.into_any()
                }
                None => view! { <span class="part-placeholder">{slot.label()}</span> }.into_any(),
            }}
            <button class="prev-selector" aria-label=format!("Previous {}", slot.label()) on:click=select_previous></button>
            <button class="next-selector" aria-label=format!("Next {}", slot.label()) on:click=select_next></button>
        </div>
    }
}
