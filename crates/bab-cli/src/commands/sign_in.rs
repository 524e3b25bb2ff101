use bab_core::actions;
use bab_core::api::RobotApi;
use bab_core::store::{Observable, UsersState};

/// Run the `sign-in` subcommand: sign in and print who we are.
pub async fn run(api: &dyn RobotApi) -> anyhow::Result<()> {
    let users = Observable::new(UsersState::default());
    actions::sign_in(api, &users).await?;

    match users.get().user {
        Some(user) => println!("Signed in as {}", user.display_name()),
        None => println!("Signed in"),
    }
    Ok(())
}
