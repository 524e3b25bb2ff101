//! Store actions: call the API, then commit the result through a mutation.
//!
//! Every action commits only after its request succeeds. On failure the
//! state cell is left untouched and the error is returned to the caller,
//! which decides where to log it.

use crate::api::{ApiError, RobotApi};
use crate::store::{RobotsState, StateCell, UsersState};
use crate::types::Robot;

/// Fetch the catalog and replace `parts` with it.
pub async fn get_parts<A, S>(api: &A, robots: &S) -> Result<(), ApiError>
where
    A: RobotApi + ?Sized,
    S: StateCell<RobotsState>,
{
    match api.fetch_parts().await {
        Ok(parts) => {
            tracing::debug!(
                heads = parts.heads.len(),
                arms = parts.arms.len(),
                torsos = parts.torsos.len(),
                bases = parts.bases.len(),
                "committing parts catalog"
            );
            robots.write(|s| s.update_parts(parts));
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to fetch parts");
            Err(e)
        }
    }
}

/// Post the cart with `robot` appended, and append locally once the server
/// has accepted it.
pub async fn add_robot_to_cart<A, S>(api: &A, robots: &S, robot: Robot) -> Result<(), ApiError>
where
    A: RobotApi + ?Sized,
    S: StateCell<RobotsState>,
{
    let cart = robots.read(|s| s.cart_with(&robot));
    if let Err(e) = api.post_cart(&cart).await {
        tracing::error!(error = %e, cart_len = cart.len(), "failed to save cart");
        return Err(e);
    }
    tracing::debug!(cost = robot.cost, cart_len = cart.len(), "committing robot to cart");
    robots.write(|s| s.add_robot_to_cart(robot));
    Ok(())
}

/// Sign in and record the returned user.
pub async fn sign_in<A, S>(api: &A, users: &S) -> Result<(), ApiError>
where
    A: RobotApi + ?Sized,
    S: StateCell<UsersState>,
{
    match api.sign_in().await {
        Ok(user) => {
            tracing::debug!(user = %user.display_name(), "committing current user");
            users.write(|s| s.update_current_user(user));
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "sign-in failed");
            Err(e)
        }
    }
}
