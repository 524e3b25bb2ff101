use leptos::prelude::*;

use crate::router::{use_router, Link};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="not-found">
            <h2>"Page not found"</h2>
            <p>{move || format!("Nothing lives at {}.", router.path.get())}</p>
            <Link to="/">"Back to the home page"</Link>
        </div>
    }
}
