use bab_core::routes::Route;
use leptos::prelude::*;

pub mod api;
pub mod components;
pub mod pages;
pub mod router;
pub mod state;

use wasm_bindgen::prelude::*;

/// Main view for a route.
fn main_view(route: Option<Route>) -> AnyView {
    match route {
        Some(Route::Home) => view! { <pages::home::HomePage /> }.into_any(),
        Some(Route::Build) => view! { <pages::build::RobotBuilderPage /> }.into_any(),
        Some(Route::BrowseParts(child)) => view! { <pages::browse::BrowsePartsPage child=child /> }.into_any(),
        Some(Route::PartInfo { part_type, id }) => {
            view! { <pages::part_info::PartInfoPage part_type=part_type id=id /> }.into_any()
        }
        Some(Route::Cart) => view! { <pages::cart::CartPage /> }.into_any(),
        None => view! { <pages::not_found::NotFoundPage /> }.into_any(),
    }
}

/// Named "sidebar" view; only the home and builder pages have one.
fn sidebar_view(route: Option<Route>) -> Option<AnyView> {
    match route {
        Some(Route::Home) => Some(view! { <components::sidebar::SidebarStandard /> }.into_any()),
        Some(Route::Build) => Some(view! { <components::sidebar::SidebarBuild /> }.into_any()),
        _ => None,
    }
}

#[component]
pub fn App() -> impl IntoView {
    let state = state::provide_app_state();
    let router = router::provide_router();

    // The catalog is fetched once for the whole app.
    state.get_parts();

    view! {
        <components::nav_bar::NavBar />
        <div class="container">
            {move || sidebar_view(router.current.get()).map(|sidebar| view! {
                <aside class="aside">{sidebar}</aside>
            })}
            <main>
                {move || main_view(router.current.get())}
            </main>
        </div>
    }
}

#[wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
