use anyhow::Context;
use bab_core::actions;
use bab_core::api::RobotApi;
use bab_core::builder::{RobotSelection, Slot};
use bab_core::format::currency;
use bab_core::store::{Observable, RobotsState, StateCell};
use bab_core::types::Robot;

use super::CURRENCY_SYMBOL;

/// Parse `head,left_arm,torso,right_arm,base` catalog indices.
pub fn parse_selection(robot_arg: &str) -> anyhow::Result<RobotSelection> {
    let fields: Vec<&str> = robot_arg.split(',').map(str::trim).collect();
    let [h, la, t, ra, b] = fields.as_slice() else {
        anyhow::bail!(
            "robot {robot_arg:?}: expected 5 comma-separated indices (head,left-arm,torso,right-arm,base)"
        );
    };
    let mut indices = [0usize; 5];
    for (slot, (dst, raw)) in indices.iter_mut().zip([h, la, t, ra, b]).enumerate() {
        *dst = raw
            .parse()
            .with_context(|| format!("robot {robot_arg:?}: bad index for {}", Slot::ALL[slot].label()))?;
    }
    Ok(RobotSelection::from_indices(indices))
}

fn robot_line(n: usize, robot: &Robot) -> String {
    let sale = if robot.has_sale_part() { "  [SALE]" } else { "" };
    format!(
        "  {n}. {} / {} / {} / {} / {}  {}{sale}",
        robot.head.title,
        robot.left_arm.title,
        robot.torso.title,
        robot.right_arm.title,
        robot.base.title,
        currency(robot.cost, CURRENCY_SYMBOL)
    )
}

/// Render the cart, its total and the on-sale subset.
pub fn render_cart(state: &RobotsState) -> String {
    let mut out = format!("Cart ({} robots)\n", state.cart.len());
    for (i, robot) in state.cart.iter().enumerate() {
        out.push_str(&robot_line(i + 1, robot));
        out.push('\n');
    }
    out.push_str(&format!(
        "Total: {}\n",
        currency(state.cart_total(), CURRENCY_SYMBOL)
    ));

    let sale = state.cart_sale_items();
    out.push_str(&format!("\nOn sale ({})\n", sale.len()));
    for (i, robot) in sale.iter().enumerate() {
        out.push_str(&robot_line(i + 1, robot));
        out.push('\n');
    }
    out
}

/// Run the `build` subcommand: assemble each selection and add it to the
/// cart in order, stopping at the first failure.
pub async fn run(api: &dyn RobotApi, robot_args: &[String]) -> anyhow::Result<()> {
    let selections = robot_args
        .iter()
        .map(|s| parse_selection(s))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let robots = Observable::new(RobotsState::default());
    robots.subscribe(|s: &RobotsState| {
        tracing::info!(cart_len = s.cart.len(), "cart updated");
    });

    actions::get_parts(api, &robots).await?;
    let catalog = robots.read(|s| s.parts_or_default());

    for (robot_arg, selection) in robot_args.iter().zip(selections) {
        let robot = selection
            .assemble(&catalog)
            .with_context(|| format!("robot {robot_arg:?}: index out of range for the catalog"))?;
        actions::add_robot_to_cart(api, &robots, robot)
            .await
            .with_context(|| format!("robot {robot_arg:?}: could not add to cart"))?;
    }

    robots.read(|s| print!("{}", render_cart(s)));
    Ok(())
}
