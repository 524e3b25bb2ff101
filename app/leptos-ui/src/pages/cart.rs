use bab_core::format::currency;
use bab_core::types::Robot;
use leptos::prelude::*;

use crate::state::use_app_state;

const CURRENCY: &str = "$";

fn robot_rows(robots: Vec<Robot>) -> impl IntoView {
    robots
        .into_iter()
        .enumerate()
        .map(|(i, robot)| {
            let on_sale = robot.has_sale_part();
            view! {
                <tr>
                    <td class="robot-index">{i + 1}</td>
                    <td class="robot-title">{robot.head.title.clone()}</td>
                    <td class="cost">{currency(robot.cost, CURRENCY)}</td>
                    <td>{on_sale.then_some("Sale!")}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>()
}

#[component]
pub fn CartPage() -> impl IntoView {
    let state = use_app_state();
    let robots = state.robots;

    view! {
        <div class="cart">
            <h1>"Cart"</h1>
            <table>
                <thead>
                    <tr>
                        <th>"#"</th>
                        <th>"Robot"</th>
                        <th class="cost">"Cost"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || robot_rows(robots.with(|s| s.cart.clone()))}
                </tbody>
                <tfoot>
                    <tr>
                        <td></td>
                        <td>"Total"</td>
                        <td class="cost">{move || currency(robots.with(|s| s.cart_total()), CURRENCY)}</td>
                        <td></td>
                    </tr>
                </tfoot>
            </table>

            <h2 class="sale-items">"You could get it on sale!"</h2>
            <table>
                <tbody>
                    {move || robot_rows(robots.with(|s| s.cart_sale_items()))}
                </tbody>
            </table>
        </div>
    }
}
