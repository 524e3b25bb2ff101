use leptos::prelude::*;

use crate::router::Link;
use crate::state::use_app_state;

/// Header links, in display order: (label, path, exact match).
pub const NAV_LINKS: &[(&str, &str, bool)] = &[
    ("Build-a-Bot", "/", true),
    ("Build", "/build", true),
    ("Browse Parts", "/parts/browse", false),
];

#[component]
fn SignIn() -> impl IntoView {
    let state = use_app_state();
    let users = state.users;

    view! {
        {move || match users.with(|s| s.user.as_ref().map(|u| u.display_name())) {
            Some(name) => view! {
                <span class="nav-user" aria-live="polite">{format!("Signed in as {name}")}</span>
            }.into_any(),
            None => view! {
                <button class="sign-in-btn" on:click=move |_| state.sign_in()>"Sign In"</button>
            }.into_any(),
        }}
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let state = use_app_state();

    view! {
        <header>
            <nav aria-label="Main navigation">
                <ul>
                    {NAV_LINKS.iter().map(|&(label, path, exact)| view! {
                        <li class="nav-item">
                            <Link to=path exact=exact class="nav-link">
                                {(path == "/").then(|| view! {
                                    <img class="logo" src="/images/build-a-bot-logo.png" alt="" />
                                })}
                                {label}
                            </Link>
                        </li>
                    }).collect::<Vec<_>>()}
                    <li class="nav-item cart">
                        <Link to="/cart" exact=true class="nav-link">"Cart"</Link>
                        <div class="cart-items" title="Robots in cart">{move || state.cart_len()}</div>
                    </li>
                    <li class="nav-item sign-in">
                        <SignIn />
                    </li>
                </ul>
            </nav>
        </header>
    }
}
