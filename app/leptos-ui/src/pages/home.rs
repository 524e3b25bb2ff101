use leptos::prelude::*;

use crate::router::Link;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home">
            <img class="logo" src="/images/build-a-bot-logo.png" alt="Build-a-Bot" />
            <div>
                "Get started by "
                <Link to="/build">"building your first robot"</Link>
                "!"
            </div>
        </div>
    }
}
