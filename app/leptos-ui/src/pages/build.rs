use bab_core::builder::{RobotSelection, Slot};
use bab_core::format::currency;
use bab_core::store::StateCell;
use leptos::prelude::*;

use crate::components::part_selector::PartSelector;
use crate::router::{after_cart_add, use_router};
use crate::state::use_app_state;

#[component]
pub fn RobotBuilderPage() -> impl IntoView {
    let state = use_app_state();
    let router = use_router();
    let selection = RwSignal::new(RobotSelection::default());
    let (adding, set_adding) = signal(false);

    // Leaving with a robot that never made it into the cart asks first.
    router.unsaved_robot.set(true);
    on_cleanup(move || router.unsaved_robot.set(false));

    let selected_robot = move || {
        let sel = selection.get();
        state.robots.with(|s| s.parts.as_ref().and_then(|c| sel.assemble(c)))
    };
    let head_on_sale = move || {
        let sel = selection.get();
        state.robots.with(|s| s.parts.as_ref().is_some_and(|c| sel.head_on_sale(c)))
    };

    let add_to_cart = move |_| {
        let Some(robot) = selection.with_untracked(|sel| {
            state.robots.read(|s| s.parts.as_ref().and_then(|c| sel.assemble(c)))
        }) else {
            return;
        };
        set_adding.set(true);
        state.add_robot_to_cart(robot, move |added| {
            set_adding.set(false);
            if let Some(next) = after_cart_add(added, router.current.get_untracked()) {
                router.unsaved_robot.set(false);
                router.navigate(next);
            }
        });
    };

    view! {
        <div class="content">
            <div class="preview">
                <div class="preview-content">
                    {move || selected_robot().map(|robot| view! {
                        <div class="top-row">
                            <img src=robot.head.src.clone() alt=robot.head.title.clone() />
                        </div>
                        <div class="middle-row">
                            <img class="rotate-left" src=robot.left_arm.src.clone() alt=robot.left_arm.title.clone() />
                            <img src=robot.torso.src.clone() alt=robot.torso.title.clone() />
                            <img class="rotate-right" src=robot.right_arm.src.clone() alt=robot.right_arm.title.clone() />
                        </div>
                        <div class="bottom-row">
                            <img src=robot.base.src.clone() alt=robot.base.title.clone() />
                        </div>
                        <div class="preview-cost">{currency(robot.cost, "$")}</div>
                    })}
                </div>
                <button
                    class="add-to-cart"
                    disabled=move || adding.get() || selected_robot().is_none()
                    on:click=add_to_cart
                >
                    "Add to Cart"
                </button>
            </div>

            {move || (!state.parts_loaded()).then(|| view! {
                <div class="loading">"Loading parts..."</div>
            })}

            <div class="top-row">
                <div class="robot-name" class:sale-border=head_on_sale>
                    {move || selected_robot().map(|r| r.head.title.clone()).unwrap_or_default()}
                    {move || head_on_sale().then(|| view! { <span class="sale">" (Sale!)"</span> })}
                </div>
                <PartSelector slot=Slot::Head selection=selection />
            </div>
            <div class="middle-row">
                <PartSelector slot=Slot::LeftArm selection=selection />
                <PartSelector slot=Slot::Torso selection=selection />
                <PartSelector slot=Slot::RightArm selection=selection />
            </div>
            <div class="bottom-row">
                <PartSelector slot=Slot::Base selection=selection />
            </div>
        </div>
    }
}
