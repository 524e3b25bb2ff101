use leptos::prelude::*;

use crate::router::Link;

#[component]
pub fn SidebarStandard() -> impl IntoView {
    view! {
        <div class="sidebar">
            <h3>"Build-a-Bot"</h3>
            <p>"Pick the parts, assemble your robot, and we ship it to your door."</p>
            <Link to="/parts/browse">"Browse all parts"</Link>
        </div>
    }
}

#[component]
pub fn SidebarBuild() -> impl IntoView {
    view! {
        <div class="sidebar">
            <h3>"Building"</h3>
            <p>"Use the arrows to cycle through each part. Click a part to read more about it."</p>
            <Link to="/cart">"Go to cart"</Link>
        </div>
    }
}
